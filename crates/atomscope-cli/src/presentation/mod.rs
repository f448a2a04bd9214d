pub mod formatters;
pub mod renderer;
pub mod view_models;

pub use renderer::{CommandResult, ConsoleRenderer, StatusBadge, StatusLevel};
pub use view_models::{
    AtomDetailViewModel, AtomListViewModel, AtomRow, ConsolePresentable, HistorySummary,
    ListHeading, PositionListViewModel, PositionRow, SyncViewModel, TripleRow,
};
