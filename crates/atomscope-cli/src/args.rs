use crate::types::{Language, LogLevel, OrderArg, OutputFormat, PeriodArg, SortByArg, SyncModeArg};
use atomscope_types::{FilterBound, FilterSpec, Limit};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "atomscope")]
#[command(about = "Explore Atoms and Positions on the Intuition knowledge graph", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to config.toml")]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        env = "ATOMSCOPE_API_URL",
        help = "Backend base URL (overrides config)"
    )]
    pub api_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Display language (overrides config)")]
    pub lang: Option<Language>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive dashboard (default)")]
    Dashboard,

    #[command(about = "List atoms ranked by market cap, share price, positions or age")]
    Top {
        #[arg(long, help = "Rows to display: 10, 25, 50, 100 or 200")]
        limit: Option<Limit>,

        #[arg(long, default_value = "market_cap")]
        sort_by: SortByArg,

        #[arg(long, default_value = "desc")]
        order: OrderArg,

        #[command(flatten)]
        bounds: BoundArgs,
    },

    #[command(about = "List atoms with the strongest growth over a period")]
    Trending {
        #[arg(long, default_value = "7d")]
        period: PeriodArg,

        #[arg(long, help = "Rows to display: 10, 25, 50, 100 or 200")]
        limit: Option<Limit>,

        #[command(flatten)]
        bounds: BoundArgs,
    },

    #[command(about = "Search atoms by label")]
    Search {
        query: String,

        #[arg(long, default_value = "20")]
        limit: usize,
    },

    #[command(about = "Show an atom with its triples and signal history")]
    Atom {
        id: String,

        #[arg(long, default_value = "7d", help = "History window")]
        period: PeriodArg,
    },

    #[command(about = "List positions held by a wallet")]
    Positions {
        #[arg(help = "Wallet address (defaults to the configured wallet)")]
        address: Option<String>,

        #[arg(long, default_value = "50")]
        limit: usize,

        #[arg(long, default_value = "0")]
        offset: usize,
    },

    #[command(about = "Ask the backend to synchronize atoms from the network")]
    Sync {
        #[arg(long, default_value = "new")]
        mode: SyncModeArg,

        #[arg(long)]
        limit: Option<usize>,
    },

    #[command(about = "Inspect or create the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write a default config.toml")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}

/// Numeric range filters, applied to the fetched rows before sorting
#[derive(Debug, Clone, Default, Args)]
pub struct BoundArgs {
    #[arg(long)]
    pub min_market_cap: Option<String>,

    #[arg(long)]
    pub max_market_cap: Option<String>,

    #[arg(long)]
    pub min_share_price: Option<String>,

    #[arg(long)]
    pub max_share_price: Option<String>,
}

impl BoundArgs {
    pub fn apply(&self, mut spec: FilterSpec) -> FilterSpec {
        let bounds = [
            (FilterBound::MinMarketCap, &self.min_market_cap),
            (FilterBound::MaxMarketCap, &self.max_market_cap),
            (FilterBound::MinSharePrice, &self.min_share_price),
            (FilterBound::MaxSharePrice, &self.max_share_price),
        ];
        for (bound, value) in bounds {
            if let Some(value) = value {
                *spec.bound_mut(bound) = value.trim().to_string();
            }
        }
        spec
    }
}
