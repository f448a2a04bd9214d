// Engine module - pure list logic between fetched data (types) and presentation (cli)
// Nothing in here performs I/O; fetched atom sets go in, display-ready lists come out.

pub mod chart;
pub mod confidence;
pub mod filter;
pub mod projection;
pub mod request;
pub mod sort;
pub mod view_state;

pub use chart::{ChartSeries, HistoryWindow, chart_series};
pub use confidence::Confidence;
pub use filter::passes_filters;
pub use projection::{FetchStrategy, ListView, OverFetch, ServerFiltered, project};
pub use request::{RequestKind, RequestToken, RequestTracker};
pub use sort::{SortMode, compare, growth_for};
pub use view_state::{DashboardState, DetailState, ViewState};
