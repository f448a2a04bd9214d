//! Ratatui widgets for the dashboard.
//!
//! Views borrow display-ready data and only map it onto widgets; selection
//! and scrolling state stay in the components.

pub mod atom_table;
pub mod chart;
pub mod filter_panel;
pub mod header;
pub mod input;
pub mod modal;
pub mod positions_table;
pub mod status_bar;

pub use atom_table::AtomTableView;
pub use chart::HistoryChartView;
pub use filter_panel::FilterPanelView;
pub use header::HeaderView;
pub use input::InputView;
pub use modal::ModalView;
pub use positions_table::PositionsTableView;
pub use status_bar::StatusBarView;

use crate::presentation::StatusLevel;
use atomscope_engine::Confidence;
use ratatui::style::Color;

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

pub(crate) fn confidence_color(confidence: Confidence) -> Color {
    match confidence {
        Confidence::High => Color::Green,
        Confidence::Medium => Color::Yellow,
        Confidence::Low => Color::DarkGray,
    }
}

/// Green for gains, red for losses
pub(crate) fn growth_color(value: Option<f64>) -> Color {
    match value {
        Some(v) if v > 0.0 => Color::Green,
        Some(v) if v < 0.0 => Color::Red,
        _ => Color::Gray,
    }
}
