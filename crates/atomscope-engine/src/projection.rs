//! Fetch → filter → sort → truncate.
//!
//! The list endpoints only paginate; range filters run client-side on what
//! was fetched. [`OverFetch`] asks for more rows than will be shown so the
//! filtered result stays close to the requested size. This is a heuristic:
//! with restrictive filters fewer than `limit` rows may surface even when the
//! server holds more. [`ServerFiltered`] is the drop-in for a backend that
//! filters itself: the bounds travel with the request instead.

use crate::filter::passes_filters;
use crate::sort::{SortMode, compare};
use atomscope_types::{Atom, FilterSpec};

/// How many rows to request for a display limit, and whether range filters
/// must still be applied locally
pub trait FetchStrategy: Send + Sync {
    fn fetch_size(&self, limit: usize) -> usize;

    fn applies_client_filters(&self) -> bool {
        true
    }

    /// Bounds the backend must apply, or `None` when filtering stays local
    fn server_filters<'a>(&self, _spec: &'a FilterSpec) -> Option<&'a FilterSpec> {
        None
    }
}

/// Request `multiplier × limit` rows, filter locally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverFetch {
    pub multiplier: usize,
}

impl Default for OverFetch {
    fn default() -> Self {
        Self { multiplier: 2 }
    }
}

impl FetchStrategy for OverFetch {
    fn fetch_size(&self, limit: usize) -> usize {
        limit.saturating_mul(self.multiplier.max(1))
    }
}

/// Forward the range bounds to the backend and fetch exactly `limit`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServerFiltered;

impl FetchStrategy for ServerFiltered {
    fn fetch_size(&self, limit: usize) -> usize {
        limit
    }

    fn applies_client_filters(&self) -> bool {
        false
    }

    fn server_filters<'a>(&self, spec: &'a FilterSpec) -> Option<&'a FilterSpec> {
        Some(spec)
    }
}

/// Project a raw fetched set into the displayed list.
///
/// `raw` is left untouched. The result holds `min(limit, |filtered|)` atoms.
pub fn project(raw: &[Atom], spec: &FilterSpec, mode: &SortMode, limit: usize) -> Vec<Atom> {
    project_with(raw, spec, mode, limit, true)
}

fn project_with(
    raw: &[Atom],
    spec: &FilterSpec,
    mode: &SortMode,
    limit: usize,
    filter: bool,
) -> Vec<Atom> {
    let mut visible: Vec<Atom> = raw
        .iter()
        .filter(|atom| !filter || passes_filters(atom, spec))
        .cloned()
        .collect();
    visible.sort_by(|a, b| compare(a, b, mode));
    visible.truncate(limit);
    visible
}

/// The last successfully fetched raw set together with its projection.
///
/// Changing only the filter or sort re-runs [`ListView::reproject`] against
/// the retained raw set without another fetch.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    raw: Vec<Atom>,
    visible: Vec<Atom>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the raw set with a fresh fetch and project it
    pub fn replace_raw(
        &mut self,
        raw: Vec<Atom>,
        strategy: &dyn FetchStrategy,
        spec: &FilterSpec,
        mode: &SortMode,
        limit: usize,
    ) {
        self.raw = raw;
        self.reproject(strategy, spec, mode, limit);
    }

    pub fn reproject(
        &mut self,
        strategy: &dyn FetchStrategy,
        spec: &FilterSpec,
        mode: &SortMode,
        limit: usize,
    ) {
        self.visible = project_with(
            &self.raw,
            spec,
            mode,
            limit,
            strategy.applies_client_filters(),
        );
    }

    pub fn raw(&self) -> &[Atom] {
        &self.raw
    }

    pub fn visible(&self) -> &[Atom] {
        &self.visible
    }

    pub fn clear(&mut self) {
        self.raw.clear();
        self.visible.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomscope_types::{FilterBound, RawNumber, SortKey, SortOrder};

    fn atoms(caps: &[f64]) -> Vec<Atom> {
        caps.iter()
            .enumerate()
            .map(|(i, cap)| {
                let mut atom = Atom::new(i.to_string());
                atom.market_cap = Some(RawNumber::from(*cap));
                atom
            })
            .collect()
    }

    const DESC: SortMode = SortMode::Ranked {
        key: SortKey::MarketCap,
        order: SortOrder::Desc,
    };

    #[test]
    fn test_over_fetch_doubles_limit() {
        assert_eq!(OverFetch::default().fetch_size(25), 50);
        assert_eq!(OverFetch { multiplier: 0 }.fetch_size(10), 10);
        assert_eq!(ServerFiltered.fetch_size(25), 25);
    }

    #[test]
    fn test_only_server_filtered_forwards_bounds() {
        let spec = FilterSpec::new().with_bound(FilterBound::MinMarketCap, "100");
        assert_eq!(ServerFiltered.server_filters(&spec), Some(&spec));
        assert_eq!(OverFetch::default().server_filters(&spec), None);
    }

    #[test]
    fn test_reproject_uses_retained_raw() {
        let mut view = ListView::new();
        view.replace_raw(
            atoms(&[5.0, 50.0, 500.0]),
            &OverFetch::default(),
            &FilterSpec::new(),
            &DESC,
            10,
        );
        assert_eq!(view.visible().len(), 3);

        let spec = FilterSpec::new().with_bound(FilterBound::MinMarketCap, "10");
        view.reproject(&OverFetch::default(), &spec, &DESC, 10);
        assert_eq!(view.visible().len(), 2);
        assert_eq!(view.raw().len(), 3);
    }

    #[test]
    fn test_server_filtered_skips_local_filter_but_sorts() {
        let spec = FilterSpec::new().with_bound(FilterBound::MinMarketCap, "1000");
        let mut view = ListView::new();
        view.replace_raw(atoms(&[1.0, 3.0, 2.0]), &ServerFiltered, &spec, &DESC, 10);
        let caps: Vec<f64> = view.visible().iter().map(Atom::market_cap).collect();
        assert_eq!(caps, vec![3.0, 2.0, 1.0]);
    }
}
