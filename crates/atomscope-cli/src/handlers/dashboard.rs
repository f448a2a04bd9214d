use crate::context::ExecutionContext;
use crate::tui::{self, App, AppSettings};
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let settings = AppSettings {
        lang: ctx.lang,
        network: ctx.config.network,
        default_limit: ctx.config.default_limit,
        strategy: ctx.fetch_strategy(),
    };
    tracing::info!(api_url = %ctx.config.api_url, "starting dashboard");
    let app = App::new(ctx.source(), ctx.handle(), ctx.wallet(), settings);
    tui::run(app)
}
