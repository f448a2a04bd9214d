//! Sample data builders.
//!
//! Atoms are built field by field; positions and history samples go through
//! their JSON wire form so the fixtures exercise the same decoding the client
//! does.

use atomscope_types::{Atom, HistoryPoint, Position, RawNumber, TrendingPeriod};
use serde_json::{Value, json};

/// Fluent builder for [`Atom`].
///
/// ```
/// use atomscope_testing::AtomBuilder;
///
/// let atom = AtomBuilder::new(7).market_cap(1500.0).label("Rust").build();
/// assert_eq!(atom.market_cap(), 1500.0);
/// ```
#[derive(Debug, Clone)]
pub struct AtomBuilder {
    atom: Atom,
}

impl AtomBuilder {
    pub fn new(id: impl ToString) -> Self {
        Self {
            atom: Atom::new(id.to_string()),
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.atom.description = Some(label.to_string());
        self
    }

    pub fn did(mut self, did: &str) -> Self {
        self.atom.did = Some(did.to_string());
        self
    }

    pub fn market_cap(mut self, value: f64) -> Self {
        self.atom.market_cap = Some(RawNumber::from(value));
        self
    }

    /// Market cap serialized as a string, the way the backend often sends it
    pub fn market_cap_text(mut self, value: &str) -> Self {
        self.atom.market_cap = Some(RawNumber::from(value));
        self
    }

    pub fn share_price(mut self, value: f64) -> Self {
        self.atom.share_price = Some(RawNumber::from(value));
        self
    }

    pub fn positions_count(mut self, value: f64) -> Self {
        self.atom.positions_count = Some(RawNumber::from(value));
        self
    }

    pub fn created_at(mut self, rfc3339: &str) -> Self {
        self.atom.created_at = Some(rfc3339.to_string());
        self
    }

    pub fn growth(mut self, period: TrendingPeriod, percent: f64) -> Self {
        let value = Some(RawNumber::from(percent));
        match period {
            TrendingPeriod::H1 => self.atom.trend.growth_1h_percent = value,
            TrendingPeriod::H4 => self.atom.trend.growth_4h_percent = value,
            TrendingPeriod::H24 => self.atom.trend.growth_24h_percent = value,
            TrendingPeriod::D7 => self.atom.trend.growth_7d_percent = value,
        }
        self
    }

    pub fn generic_growth(mut self, percent: f64) -> Self {
        self.atom.trend.growth_percentage = Some(RawNumber::from(percent));
        self
    }

    pub fn build(self) -> Atom {
        self.atom
    }
}

/// Atoms with ids `1..=n` and the given market caps, in order
pub fn atoms_with_caps(caps: &[f64]) -> Vec<Atom> {
    caps.iter()
        .enumerate()
        .map(|(i, cap)| AtomBuilder::new(i + 1).market_cap(*cap).build())
        .collect()
}

/// A small mixed set resembling a `/atoms` response
pub fn sample_atoms() -> Vec<Atom> {
    vec![
        AtomBuilder::new(1)
            .label("Ethereum")
            .market_cap(1500.0)
            .share_price(1.25)
            .positions_count(42.0)
            .created_at("2024-03-01T10:00:00Z")
            .build(),
        AtomBuilder::new(2)
            .label("Rust")
            .market_cap_text("150")
            .share_price(0.5)
            .positions_count(7.0)
            .created_at("2024-05-12T08:30:00Z")
            .build(),
        AtomBuilder::new(3)
            .label("Intuition")
            .market_cap(50.0)
            .share_price(0.05)
            .positions_count(3.0)
            .created_at("2023-11-20T16:45:00Z")
            .build(),
    ]
}

pub fn atom_position_json(term_id: u64, label: &str, shares: &str, value: &str) -> Value {
    json!({
        "entity_type": "atom",
        "term_id": term_id,
        "label": label,
        "shares": shares,
        "current_share_price": "1.0",
        "value": value,
        "pnl_percent": 12.5,
    })
}

pub fn triple_position_json(subject: &str, predicate: &str, object: &str) -> Value {
    json!({
        "entity_type": "triple",
        "term_id": "0xtriple",
        "subject_label": subject,
        "predicate_label": predicate,
        "object_label": object,
        "shares": "10",
        "current_share_price": "0.2",
        "value": "2",
    })
}

pub fn position(value: Value) -> Position {
    serde_json::from_value(value).expect("position fixture should decode")
}

pub fn sample_positions() -> Vec<Position> {
    vec![
        position(atom_position_json(1, "Ethereum", "100", "125.5")),
        position(triple_position_json("Alice", "likes", "Rust")),
    ]
}

pub fn history_point(timestamp: &str, signal: f64, share_price: f64) -> HistoryPoint {
    HistoryPoint {
        timestamp: timestamp.to_string(),
        signal_value: Some(RawNumber::from(signal)),
        share_price: Some(RawNumber::from(share_price)),
    }
}

pub fn sample_history() -> Vec<HistoryPoint> {
    vec![
        history_point("2024-06-01T00:00:00Z", 100.0, 1.0),
        history_point("2024-06-02T00:00:00Z", 120.0, 1.1),
        history_point("2024-06-03T00:00:00Z", 90.0, 0.95),
    ]
}

/// A checksum-cased wallet address that passes validation
pub const WALLET: &str = "0xABCDEF1234567890abcdef1234567890ABCDEF12";
