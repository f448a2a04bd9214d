//! Dashboard view state and its snapshot/restore across detail navigation.
//!
//! A [`ViewState`] is captured when the user opens a detail view and travels
//! with that navigation. It is consumed (moved) when the dashboard is rebuilt
//! on the way back, so it can seed state only once.

use crate::chart::HistoryWindow;
use crate::sort::SortMode;
use atomscope_types::{FilterSpec, Limit, Tab, TrendingPeriod};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub active_tab: Tab,
    pub trending_period: TrendingPeriod,
    pub limit: Limit,
    pub filters: FilterSpec,
}

/// Live dashboard state: which tab is shown and how its list is shaped
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardState {
    pub active_tab: Tab,
    pub trending_period: TrendingPeriod,
    pub limit: Limit,
    pub filters: FilterSpec,
}

impl DashboardState {
    /// Initial state: the snapshot when returning from a detail view, else
    /// defaults (top, 7d, 10, default filters)
    pub fn restore(snapshot: Option<ViewState>) -> Self {
        match snapshot {
            Some(view) => Self {
                active_tab: view.active_tab,
                trending_period: view.trending_period,
                limit: view.limit,
                filters: view.filters,
            },
            None => Self::default(),
        }
    }

    pub fn snapshot(&self) -> ViewState {
        ViewState {
            active_tab: self.active_tab,
            trending_period: self.trending_period,
            limit: self.limit,
            filters: self.filters.clone(),
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Sort policy of the active tab; `None` for tabs that show data as
    /// returned (positions, explorer)
    pub fn sort_mode(&self) -> Option<SortMode> {
        match self.active_tab {
            Tab::Top => Some(SortMode::Ranked {
                key: self.filters.sort_by,
                order: self.filters.sort_order,
            }),
            Tab::Trending => Some(SortMode::Trending(self.trending_period)),
            Tab::Positions | Tab::Explorer => None,
        }
    }
}

/// State of the atom detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailState {
    pub chart_period: TrendingPeriod,
}

impl DetailState {
    /// The chart period starts from the dashboard's trending period, then
    /// evolves on its own
    pub fn seeded_from(snapshot: Option<&ViewState>) -> Self {
        Self {
            chart_period: snapshot.map(|v| v.trending_period).unwrap_or_default(),
        }
    }

    pub fn select_period(&mut self, period: TrendingPeriod) {
        self.chart_period = period;
    }

    pub fn history_window(&self) -> HistoryWindow {
        HistoryWindow::for_period(self.chart_period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomscope_types::{FilterBound, SortKey, SortOrder};

    #[test]
    fn test_restore_without_snapshot_uses_defaults() {
        let state = DashboardState::restore(None);
        assert_eq!(state.active_tab, Tab::Top);
        assert_eq!(state.trending_period, TrendingPeriod::D7);
        assert_eq!(state.limit.get(), 10);
        assert_eq!(state.filters, FilterSpec::default());
    }

    #[test]
    fn test_restore_snapshot_round_trip() {
        let state = DashboardState {
            active_tab: Tab::Trending,
            trending_period: TrendingPeriod::H4,
            limit: Limit::new(100).unwrap(),
            filters: FilterSpec::new()
                .sort(SortKey::CreatedAt, SortOrder::Asc)
                .with_bound(FilterBound::MaxSharePrice, "3.5"),
        };
        assert_eq!(DashboardState::restore(Some(state.snapshot())), state);
    }

    #[test]
    fn test_sort_mode_per_tab() {
        let mut state = DashboardState::default();
        assert!(matches!(state.sort_mode(), Some(SortMode::Ranked { .. })));
        state.select_tab(Tab::Trending);
        assert_eq!(
            state.sort_mode(),
            Some(SortMode::Trending(TrendingPeriod::D7))
        );
        state.select_tab(Tab::Positions);
        assert_eq!(state.sort_mode(), None);
    }

    #[test]
    fn test_detail_period_seeded_then_independent() {
        let snapshot = ViewState {
            trending_period: TrendingPeriod::H24,
            ..ViewState::default()
        };
        let mut detail = DetailState::seeded_from(Some(&snapshot));
        assert_eq!(detail.chart_period, TrendingPeriod::H24);

        detail.select_period(TrendingPeriod::H1);
        assert_eq!(detail.chart_period, TrendingPeriod::H1);
        assert_eq!(snapshot.trending_period, TrendingPeriod::H24);
    }
}
