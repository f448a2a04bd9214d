use atomscope_types::{SortKey, SortOrder, SyncMode, TrendingPeriod};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

/// Display language. French is the default, as in the web client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Fr,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Fr => write!(f, "fr"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PeriodArg {
    #[value(name = "1h")]
    H1,
    #[value(name = "4h")]
    H4,
    #[value(name = "24h")]
    H24,
    #[value(name = "7d")]
    D7,
}

impl From<PeriodArg> for TrendingPeriod {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::H1 => TrendingPeriod::H1,
            PeriodArg::H4 => TrendingPeriod::H4,
            PeriodArg::H24 => TrendingPeriod::H24,
            PeriodArg::D7 => TrendingPeriod::D7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum SortByArg {
    MarketCap,
    SharePrice,
    PositionsCount,
    CreatedAt,
}

impl From<SortByArg> for SortKey {
    fn from(arg: SortByArg) -> Self {
        match arg {
            SortByArg::MarketCap => SortKey::MarketCap,
            SortByArg::SharePrice => SortKey::SharePrice,
            SortByArg::PositionsCount => SortKey::PositionsCount,
            SortByArg::CreatedAt => SortKey::CreatedAt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => SortOrder::Asc,
            OrderArg::Desc => SortOrder::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SyncModeArg {
    New,
    Update,
    Full,
}

impl From<SyncModeArg> for SyncMode {
    fn from(arg: SyncModeArg) -> Self {
        match arg {
            SyncModeArg::New => SyncMode::New,
            SyncModeArg::Update => SyncMode::Update,
            SyncModeArg::Full => SyncMode::Full,
        }
    }
}
