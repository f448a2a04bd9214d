use crate::args::{Cli, Commands, ConfigCommand};
use crate::config::{Config, resolve_config_path, resolve_data_dir};
use crate::context::ExecutionContext;
use crate::handlers;
use crate::handlers::atoms::TopQuery;
use crate::logging::{self, LogTarget};
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;

    // config init must work even when the existing file is broken
    if let Some(Commands::Config {
        command: ConfigCommand::Init { force },
    }) = &cli.command
    {
        logging::init(cli.log_level, LogTarget::Stderr)?;
        let lang = cli.lang.unwrap_or_default();
        return handlers::config::handle_init(&config_path, *force, cli.format, lang);
    }

    let mut config = Config::load_from(&config_path)?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(lang) = cli.lang {
        config.language = lang;
    }
    let lang = config.language;

    let command = cli.command.unwrap_or(Commands::Dashboard);
    let target = match command {
        Commands::Dashboard => LogTarget::File(resolve_data_dir().join("atomscope.log")),
        _ => LogTarget::Stderr,
    };
    logging::init(cli.log_level, target)?;
    tracing::debug!(config = %config_path.display(), api_url = %config.api_url, "loaded config");

    if let Commands::Config {
        command: ConfigCommand::Show,
    } = command
    {
        return handlers::config::handle_show(&config, &config_path, cli.format, lang);
    }

    let default_limit = config.default_limit;
    let ctx = ExecutionContext::new(config, cli.format, lang)?;

    match command {
        Commands::Dashboard => handlers::dashboard::handle(&ctx),

        Commands::Top {
            limit,
            sort_by,
            order,
            bounds,
        } => handlers::atoms::handle_top(
            &ctx,
            TopQuery {
                limit: limit.unwrap_or(default_limit),
                sort_by: sort_by.into(),
                order: order.into(),
                bounds,
            },
        ),

        Commands::Trending {
            period,
            limit,
            bounds,
        } => handlers::atoms::handle_trending(
            &ctx,
            period.into(),
            limit.unwrap_or(default_limit),
            bounds,
        ),

        Commands::Search { query, limit } => handlers::atoms::handle_search(&ctx, &query, limit),

        Commands::Atom { id, period } => handlers::atom::handle(&ctx, &id, period.into()),

        Commands::Positions {
            address,
            limit,
            offset,
        } => handlers::positions::handle(&ctx, address.as_deref(), limit, offset),

        Commands::Sync { mode, limit } => handlers::sync::handle(&ctx, mode.into(), limit),

        Commands::Config { .. } => Ok(()),
    }
}
