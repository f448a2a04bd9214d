use atomscope_engine::{DashboardState, DetailState, RequestKind, RequestTracker, ViewState};
use atomscope_types::{FilterBound, FilterSpec, Limit, SortKey, SortOrder, Tab, TrendingPeriod};

fn reachable_states() -> Vec<DashboardState> {
    let mut states = Vec::new();
    for tab in Tab::ALL {
        for period in TrendingPeriod::ALL {
            for limit in Limit::ALLOWED {
                states.push(DashboardState {
                    active_tab: tab,
                    trending_period: period,
                    limit: Limit::new(limit).unwrap(),
                    filters: FilterSpec::new()
                        .sort(SortKey::PositionsCount, SortOrder::Asc)
                        .with_bound(FilterBound::MinSharePrice, "0.25"),
                });
            }
        }
    }
    states
}

#[test]
fn test_restore_reproduces_snapshot_for_every_state() {
    for state in reachable_states() {
        let restored = DashboardState::restore(Some(state.snapshot()));
        assert_eq!(restored, state);
    }
}

#[test]
fn test_snapshot_wire_shape() {
    let state = DashboardState {
        active_tab: Tab::Trending,
        trending_period: TrendingPeriod::H4,
        limit: Limit::new(50).unwrap(),
        filters: FilterSpec::new()
            .sort(SortKey::SharePrice, SortOrder::Asc)
            .with_bound(FilterBound::MinMarketCap, "100"),
    };

    insta::assert_json_snapshot!(state.snapshot(), @r#"
    {
      "activeTab": "trending",
      "trendingPeriod": "4h",
      "limit": 50,
      "filters": {
        "sortBy": "share_price",
        "sortOrder": "asc",
        "minMarketCap": "100",
        "maxMarketCap": "",
        "minSharePrice": "",
        "maxSharePrice": ""
      }
    }
    "#);
}

#[test]
fn test_snapshot_survives_serialization() {
    let state = reachable_states().swap_remove(37);
    let json = serde_json::to_string(&state.snapshot()).unwrap();
    let decoded: ViewState = serde_json::from_str(&json).unwrap();
    assert_eq!(DashboardState::restore(Some(decoded)), state);
}

#[test]
fn test_detail_period_follows_snapshot_only_at_open() {
    let snapshot = DashboardState {
        trending_period: TrendingPeriod::H1,
        ..DashboardState::default()
    }
    .snapshot();

    let detail = DetailState::seeded_from(Some(&snapshot));
    assert_eq!(detail.history_window().query_param(), ("hours", 1));

    let fresh = DetailState::seeded_from(None);
    assert_eq!(fresh.history_window().query_param(), ("days", 7));
}

#[test]
fn test_latest_request_wins() {
    let mut tracker = RequestTracker::default();
    let first = tracker.issue(RequestKind::List);
    let detail = tracker.issue(RequestKind::Detail);
    let second = tracker.issue(RequestKind::List);

    assert!(!tracker.is_current(first));
    assert!(tracker.is_current(second));
    assert!(tracker.is_current(detail));
}
