//! Dashboard components.
//!
//! A component owns its UI state, turns key presses into state changes and
//! returns an [`Action`] when the app has to do something on its behalf
//! (fetch, navigate, quit). Components never talk to the backend directly.

pub mod dashboard;
pub mod detail;
pub mod filter_panel;
pub mod text_input;

pub use dashboard::DashboardComponent;
pub use detail::DetailComponent;
pub use filter_panel::FilterPanel;
pub use text_input::TextInput;

use super::worker::FetchRequest;
use atomscope_engine::ViewState;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Fetch(Vec<FetchRequest>),
    /// Leave the dashboard for an atom; `snapshot` restores it on return
    OpenDetail {
        id: String,
        snapshot: ViewState,
    },
    Back,
    ToggleWallet,
    Quit,
}
