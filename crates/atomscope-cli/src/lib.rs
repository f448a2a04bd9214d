mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod i18n;
pub mod logging;
pub mod presentation;
pub mod tui;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
