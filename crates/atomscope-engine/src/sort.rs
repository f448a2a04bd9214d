//! Sort comparators for atom lists.
//!
//! Trending lists always rank by growth (descending); the period only picks
//! which growth figure is used. Ranked lists sort by the user's key and
//! direction. Both fall back to the atom id so the order is total.

use atomscope_types::{Atom, RawNumber, SortKey, SortOrder, Trend, TrendingPeriod};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Trending(TrendingPeriod),
    Ranked { key: SortKey, order: SortOrder },
}

/// Period-specific growth figure; one explicit field per period
fn period_growth(trend: &Trend, period: TrendingPeriod) -> Option<&RawNumber> {
    match period {
        TrendingPeriod::H1 => trend.growth_1h_percent.as_ref(),
        TrendingPeriod::H4 => trend.growth_4h_percent.as_ref(),
        TrendingPeriod::H24 => trend.growth_24h_percent.as_ref(),
        TrendingPeriod::D7 => trend.growth_7d_percent.as_ref(),
    }
}

/// Growth of `atom` over `period`, falling back to the generic
/// `growth_percentage` when the period-specific figure is absent
pub fn growth_for(atom: &Atom, period: TrendingPeriod) -> f64 {
    period_growth(&atom.trend, period)
        .or(atom.trend.growth_percentage.as_ref())
        .map(RawNumber::value)
        .unwrap_or(0.0)
}

pub fn compare(a: &Atom, b: &Atom, mode: &SortMode) -> Ordering {
    let primary = match mode {
        SortMode::Trending(period) => growth_for(b, *period).total_cmp(&growth_for(a, *period)),
        SortMode::Ranked { key, order } => {
            let ascending = compare_key(a, b, *key);
            match order {
                SortOrder::Asc => ascending,
                SortOrder::Desc => ascending.reverse(),
            }
        }
    };

    primary.then_with(|| a.id.natural_cmp(&b.id))
}

fn compare_key(a: &Atom, b: &Atom, key: SortKey) -> Ordering {
    match key {
        SortKey::MarketCap => a.market_cap().total_cmp(&b.market_cap()),
        SortKey::SharePrice => a.share_price().total_cmp(&b.share_price()),
        SortKey::PositionsCount => a.positions_count().total_cmp(&b.positions_count()),
        // unparseable timestamps sort as the earliest
        SortKey::CreatedAt => a.created_at_millis().cmp(&b.created_at_millis()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trending_atom(id: &str, period_7d: Option<f64>, generic: Option<f64>) -> Atom {
        let mut atom = Atom::new(id);
        atom.trend.growth_7d_percent = period_7d.map(RawNumber::from);
        atom.trend.growth_percentage = generic.map(RawNumber::from);
        atom
    }

    #[test]
    fn test_growth_prefers_period_field() {
        let atom = trending_atom("1", Some(5.0), Some(99.0));
        assert_eq!(growth_for(&atom, TrendingPeriod::D7), 5.0);
        assert_eq!(growth_for(&atom, TrendingPeriod::H24), 99.0);
    }

    #[test]
    fn test_growth_falls_back_to_generic() {
        let atom = trending_atom("1", None, Some(-3.0));
        for period in TrendingPeriod::ALL {
            assert_eq!(growth_for(&atom, period), -3.0);
        }
        assert_eq!(growth_for(&Atom::new("2"), TrendingPeriod::H1), 0.0);
    }

    #[test]
    fn test_trending_is_descending() {
        let low = trending_atom("1", Some(1.0), None);
        let high = trending_atom("2", Some(8.0), None);
        let mode = SortMode::Trending(TrendingPeriod::D7);
        assert_eq!(compare(&high, &low, &mode), Ordering::Less);
    }

    #[test]
    fn test_created_at_missing_sorts_first_ascending() {
        let mut dated = Atom::new("1");
        dated.created_at = Some("2024-01-01T00:00:00Z".to_string());
        let undated = Atom::new("2");
        let mode = SortMode::Ranked {
            key: SortKey::CreatedAt,
            order: SortOrder::Asc,
        };
        assert_eq!(compare(&undated, &dated, &mode), Ordering::Less);
    }

    #[test]
    fn test_ties_break_on_id_in_both_directions() {
        let a = Atom::new("2");
        let b = Atom::new("10");
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let mode = SortMode::Ranked {
                key: SortKey::MarketCap,
                order,
            };
            assert_eq!(compare(&a, &b, &mode), Ordering::Less);
        }
    }
}
