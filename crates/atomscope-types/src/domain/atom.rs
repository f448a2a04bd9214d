use super::Ident;
use crate::numeric::{RawNumber, to_number};
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A knowledge-graph node with its market data.
///
/// Numeric fields may be missing or string-encoded; read them through the
/// coercing accessors (`market_cap()`, `share_price()`, ...) whenever they are
/// compared or combined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub id: Ident,
    #[serde(default)]
    pub did: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub atom_type: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,

    #[serde(default)]
    pub market_cap: Option<RawNumber>,
    /// Older name for the market cap; read only when `market_cap` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_signal_value: Option<RawNumber>,
    #[serde(default)]
    pub share_price: Option<RawNumber>,
    #[serde(default)]
    pub total_shares: Option<RawNumber>,
    #[serde(default)]
    pub positions_count: Option<RawNumber>,

    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub block_number: Option<RawNumber>,
    #[serde(default)]
    pub creator_id: Option<Ident>,
    #[serde(default)]
    pub wallet_id: Option<Ident>,

    #[serde(flatten)]
    pub trend: Trend,
}

/// Growth figures, only populated by the trending endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Trend {
    #[serde(default)]
    pub growth_percentage: Option<RawNumber>,
    #[serde(default)]
    pub growth_direction: Option<GrowthDirection>,
    #[serde(default)]
    pub growth_1h_percent: Option<RawNumber>,
    #[serde(default)]
    pub growth_4h_percent: Option<RawNumber>,
    #[serde(default)]
    pub growth_24h_percent: Option<RawNumber>,
    #[serde(default)]
    pub growth_7d_percent: Option<RawNumber>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthDirection {
    Up,
    Down,
    #[serde(other)]
    Flat,
}

impl Atom {
    pub fn new(id: impl Into<Ident>) -> Self {
        Self {
            id: id.into(),
            did: None,
            description: None,
            atom_type: None,
            image: None,
            emoji: None,
            market_cap: None,
            current_signal_value: None,
            share_price: None,
            total_shares: None,
            positions_count: None,
            created_at: None,
            block_number: None,
            creator_id: None,
            wallet_id: None,
            trend: Trend::default(),
        }
    }

    pub fn market_cap(&self) -> f64 {
        to_number(self.market_cap.as_ref().or(self.current_signal_value.as_ref()))
    }

    pub fn share_price(&self) -> f64 {
        to_number(self.share_price.as_ref())
    }

    pub fn positions_count(&self) -> f64 {
        to_number(self.positions_count.as_ref())
    }

    pub fn total_shares(&self) -> f64 {
        to_number(self.total_shares.as_ref())
    }

    /// Creation time in unix milliseconds, if present and parseable
    pub fn created_at_millis(&self) -> Option<i64> {
        self.created_at.as_deref().and_then(parse_timestamp_millis)
    }

    /// Best human label: description, then DID, then id
    pub fn label(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .or(self.did.as_deref())
            .unwrap_or(self.id.as_str())
    }
}

/// Parse an API timestamp (RFC 3339, or a naive `YYYY-MM-DD HH:MM:SS` as UTC)
pub fn parse_timestamp_millis(value: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp_millis());
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc().timestamp_millis())
}

/// `GET /atoms/:id` payload: the atom plus the triples it takes part in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomDetail {
    #[serde(flatten)]
    pub atom: Atom,
    #[serde(default)]
    pub triples: Vec<Triple>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Triple {
    #[serde(default)]
    pub id: Option<Ident>,
    #[serde(default)]
    pub subject: Option<TripleTerm>,
    #[serde(default)]
    pub predicate: Option<TripleTerm>,
    #[serde(default)]
    pub object: Option<TripleTerm>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TripleTerm {
    #[serde(default)]
    pub id: Option<Ident>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl TripleTerm {
    pub fn display_label(term: Option<&TripleTerm>) -> &str {
        term.and_then(|t| t.label.as_deref().or(t.description.as_deref()))
            .unwrap_or("N/A")
    }
}
