use super::backend_error;
use crate::context::ExecutionContext;
use crate::presentation::{AtomDetailViewModel, CommandResult, ConsoleRenderer};
use anyhow::Result;
use atomscope_client::AtomSource;
use atomscope_engine::{HistoryWindow, chart_series};
use atomscope_types::TrendingPeriod;

pub async fn load_detail(
    source: &dyn AtomSource,
    id: &str,
    period: TrendingPeriod,
) -> Result<AtomDetailViewModel> {
    let detail = source.get_atom(id).await.map_err(backend_error)?;
    let history = source
        .atom_history(id, HistoryWindow::for_period(period))
        .await
        .map_err(backend_error)?;
    let series = chart_series(&history);
    Ok(AtomDetailViewModel::new(&detail, period, &series))
}

pub fn handle(ctx: &ExecutionContext, id: &str, period: TrendingPeriod) -> Result<()> {
    let source = ctx.source();
    let view_model = ctx.block_on(load_detail(source.as_ref(), id, period))?;
    ConsoleRenderer::new(ctx.format, ctx.lang).render(CommandResult::new(view_model))
}
