//! History chart preparation. Rendering happens in the CLI; this module only
//! shapes the samples into plottable series.

use atomscope_types::{HistoryPoint, TrendingPeriod};
use serde::Serialize;

/// Time span requested from `GET /atoms/:id/history`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryWindow {
    Hours(u32),
    Days(u32),
}

impl HistoryWindow {
    pub fn for_period(period: TrendingPeriod) -> Self {
        match period {
            TrendingPeriod::H1 => HistoryWindow::Hours(1),
            TrendingPeriod::H4 => HistoryWindow::Hours(4),
            TrendingPeriod::H24 => HistoryWindow::Hours(24),
            TrendingPeriod::D7 => HistoryWindow::Days(7),
        }
    }

    /// Query parameter pair, e.g. `("days", 7)`
    pub fn query_param(&self) -> (&'static str, u32) {
        match self {
            HistoryWindow::Hours(n) => ("hours", *n),
            HistoryWindow::Days(n) => ("days", *n),
        }
    }
}

/// Two series sharing a time axis (unix seconds): signal and share price
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartSeries {
    pub signal: Vec<(f64, f64)>,
    pub share_price: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub signal_bounds: [f64; 2],
    pub price_bounds: [f64; 2],
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.signal.is_empty()
    }

    pub fn len(&self) -> usize {
        self.signal.len()
    }
}

/// Build chart series from history samples.
///
/// Samples with an unparseable timestamp are skipped; the rest are ordered
/// by time.
pub fn chart_series(points: &[HistoryPoint]) -> ChartSeries {
    let mut samples: Vec<(f64, f64, f64)> = points
        .iter()
        .filter_map(|p| {
            p.timestamp_millis()
                .map(|ms| (ms as f64 / 1000.0, p.signal_value(), p.share_price()))
        })
        .collect();

    if samples.is_empty() {
        return ChartSeries::default();
    }
    samples.sort_by(|a, b| a.0.total_cmp(&b.0));

    let signal: Vec<(f64, f64)> = samples.iter().map(|(x, s, _)| (*x, *s)).collect();
    let share_price: Vec<(f64, f64)> = samples.iter().map(|(x, _, p)| (*x, *p)).collect();

    ChartSeries {
        x_bounds: bounds(samples.iter().map(|s| s.0)),
        signal_bounds: bounds(signal.iter().map(|s| s.1)),
        price_bounds: bounds(share_price.iter().map(|s| s.1)),
        signal,
        share_price,
    }
}

/// Min/max of the values, widened when flat so a chart axis never collapses
fn bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() {
        return [0.0, 1.0];
    }
    if min == max {
        return [min - 1.0, max + 1.0];
    }
    [min, max]
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomscope_types::RawNumber;

    fn point(ts: &str, signal: &str, price: f64) -> HistoryPoint {
        HistoryPoint {
            timestamp: ts.to_string(),
            signal_value: Some(RawNumber::from(signal)),
            share_price: Some(RawNumber::from(price)),
        }
    }

    #[test]
    fn test_window_per_period() {
        assert_eq!(HistoryWindow::for_period(TrendingPeriod::H1).query_param(), ("hours", 1));
        assert_eq!(HistoryWindow::for_period(TrendingPeriod::H4).query_param(), ("hours", 4));
        assert_eq!(HistoryWindow::for_period(TrendingPeriod::H24).query_param(), ("hours", 24));
        assert_eq!(HistoryWindow::for_period(TrendingPeriod::D7).query_param(), ("days", 7));
    }

    #[test]
    fn test_series_sorted_and_bounded() {
        let series = chart_series(&[
            point("2024-01-01T01:00:00Z", "300", 2.0),
            point("2024-01-01T00:00:00Z", "100", 1.0),
            point("garbage", "999", 9.0),
        ]);

        assert_eq!(series.len(), 2);
        assert_eq!(series.signal[0], (1_704_067_200.0, 100.0));
        assert_eq!(series.signal[1], (1_704_070_800.0, 300.0));
        assert_eq!(series.signal_bounds, [100.0, 300.0]);
        assert_eq!(series.price_bounds, [1.0, 2.0]);
        assert_eq!(series.x_bounds, [1_704_067_200.0, 1_704_070_800.0]);
    }

    #[test]
    fn test_flat_series_widens_bounds() {
        let series = chart_series(&[point("2024-01-01T00:00:00Z", "5", 5.0)]);
        assert_eq!(series.signal_bounds, [4.0, 6.0]);
    }

    #[test]
    fn test_empty_history() {
        assert!(chart_series(&[]).is_empty());
    }
}
