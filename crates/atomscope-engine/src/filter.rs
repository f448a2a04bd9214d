use atomscope_types::{Atom, FilterBound, FilterSpec, parse_number};

/// Decide whether an atom satisfies every active range bound of `spec`.
///
/// Bounds and fields are both coerced to numbers; a field missing on the atom
/// counts as 0, so any positive minimum excludes it. Sort settings in `spec`
/// are ignored here.
pub fn passes_filters(atom: &Atom, spec: &FilterSpec) -> bool {
    spec.active_bounds().all(|(bound, raw)| {
        let limit = parse_number(raw);
        let value = field_for(atom, bound);
        if bound.is_min() {
            value >= limit
        } else {
            value <= limit
        }
    })
}

fn field_for(atom: &Atom, bound: FilterBound) -> f64 {
    match bound {
        FilterBound::MinMarketCap | FilterBound::MaxMarketCap => atom.market_cap(),
        FilterBound::MinSharePrice | FilterBound::MaxSharePrice => atom.share_price(),
    }
}
