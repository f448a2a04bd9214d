use super::backend_error;
use crate::context::ExecutionContext;
use crate::i18n::t;
use crate::presentation::{CommandResult, ConsoleRenderer, StatusBadge, SyncViewModel};
use anyhow::Result;
use atomscope_client::AtomSource;
use atomscope_types::SyncMode;

pub async fn run_sync(
    source: &dyn AtomSource,
    mode: SyncMode,
    limit: Option<usize>,
) -> Result<SyncViewModel> {
    tracing::info!(%mode, ?limit, "requesting synchronization");
    let report = source.sync(mode, limit).await.map_err(backend_error)?;
    if let Some(error) = report.failure() {
        tracing::warn!(%error, "synchronization reported failure");
    }
    Ok(SyncViewModel::new(mode, &report))
}

pub fn handle(ctx: &ExecutionContext, mode: SyncMode, limit: Option<usize>) -> Result<()> {
    let source = ctx.source();
    let view_model = ctx.block_on(run_sync(source.as_ref(), mode, limit))?;

    let failure = view_model.error.clone();
    let badge = match &failure {
        None => StatusBadge::success(t(ctx.lang, "sync.success")),
        Some(_) => StatusBadge::error(t(ctx.lang, "sync.failure")),
    };
    let mut result = CommandResult::new(view_model).with_badge(badge);
    if failure.is_none() {
        result = result.with_suggestion("atomscope top --sort-by created_at");
    }
    ConsoleRenderer::new(ctx.format, ctx.lang).render(result)?;

    match failure {
        Some(error) => anyhow::bail!("Synchronization failed: {}", error),
        None => Ok(()),
    }
}
