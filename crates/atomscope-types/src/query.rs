//! Query vocabulary shared by the engine, the HTTP client and the CLI:
//! trending periods, sort keys, page limits, dashboard tabs and the
//! user-editable filter specification.

use crate::error::{ParseEnumError, ValidationError};
use crate::numeric::parse_number;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TrendingPeriod {
    #[serde(rename = "1h")]
    H1,
    #[serde(rename = "4h")]
    H4,
    #[serde(rename = "24h")]
    H24,
    #[default]
    #[serde(rename = "7d")]
    D7,
}

impl TrendingPeriod {
    pub const ALL: [TrendingPeriod; 4] = [
        TrendingPeriod::H1,
        TrendingPeriod::H4,
        TrendingPeriod::H24,
        TrendingPeriod::D7,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrendingPeriod::H1 => "1h",
            TrendingPeriod::H4 => "4h",
            TrendingPeriod::H24 => "24h",
            TrendingPeriod::D7 => "7d",
        }
    }

    /// Next period in selector order, wrapping around
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|p| p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for TrendingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrendingPeriod {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("period", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    MarketCap,
    SharePrice,
    PositionsCount,
    CreatedAt,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::MarketCap,
        SortKey::SharePrice,
        SortKey::PositionsCount,
        SortKey::CreatedAt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::MarketCap => "market_cap",
            SortKey::SharePrice => "share_price",
            SortKey::PositionsCount => "positions_count",
            SortKey::CreatedAt => "created_at",
        }
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|k| k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("sort key", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ParseEnumError::new("sort order", s)),
        }
    }
}

/// The four numeric range bounds of a [`FilterSpec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterBound {
    MinMarketCap,
    MaxMarketCap,
    MinSharePrice,
    MaxSharePrice,
}

impl FilterBound {
    pub const ALL: [FilterBound; 4] = [
        FilterBound::MinMarketCap,
        FilterBound::MaxMarketCap,
        FilterBound::MinSharePrice,
        FilterBound::MaxSharePrice,
    ];

    pub fn is_min(&self) -> bool {
        matches!(self, FilterBound::MinMarketCap | FilterBound::MinSharePrice)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterBound::MinMarketCap => "min_market_cap",
            FilterBound::MaxMarketCap => "max_market_cap",
            FilterBound::MinSharePrice => "min_share_price",
            FilterBound::MaxSharePrice => "max_share_price",
        }
    }
}

impl fmt::Display for FilterBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-editable sort and range-filter criteria.
///
/// Bounds are kept as the strings the user typed; an empty string means the
/// bound is inactive. Malformed bounds are not rejected here, they coerce to
/// 0 when the filter runs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    #[serde(default)]
    pub min_market_cap: String,
    #[serde(default)]
    pub max_market_cap: String,
    #[serde(default)]
    pub min_share_price: String,
    #[serde(default)]
    pub max_share_price: String,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort_by = key;
        self.sort_order = order;
        self
    }

    pub fn with_bound(mut self, bound: FilterBound, value: impl Into<String>) -> Self {
        *self.bound_mut(bound) = value.into();
        self
    }

    /// The raw bound text, or `None` when the bound is inactive
    pub fn bound(&self, bound: FilterBound) -> Option<&str> {
        let value = match bound {
            FilterBound::MinMarketCap => &self.min_market_cap,
            FilterBound::MaxMarketCap => &self.max_market_cap,
            FilterBound::MinSharePrice => &self.min_share_price,
            FilterBound::MaxSharePrice => &self.max_share_price,
        };
        (!value.is_empty()).then_some(value.as_str())
    }

    pub fn bound_mut(&mut self, bound: FilterBound) -> &mut String {
        match bound {
            FilterBound::MinMarketCap => &mut self.min_market_cap,
            FilterBound::MaxMarketCap => &mut self.max_market_cap,
            FilterBound::MinSharePrice => &mut self.min_share_price,
            FilterBound::MaxSharePrice => &mut self.max_share_price,
        }
    }

    pub fn active_bounds(&self) -> impl Iterator<Item = (FilterBound, &str)> {
        FilterBound::ALL
            .into_iter()
            .filter_map(|b| self.bound(b).map(|v| (b, v)))
    }

    /// Active bounds as query pairs for a backend that filters itself.
    /// Values are coerced the same way the local filter coerces them.
    pub fn bound_params(&self) -> Vec<(&'static str, String)> {
        self.active_bounds()
            .map(|(bound, raw)| (bound.as_str(), parse_number(raw).to_string()))
            .collect()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when any bound is set or the sort differs from the default
    pub fn has_active_filters(&self) -> bool {
        self.active_bounds().next().is_some()
            || self.sort_by != SortKey::default()
            || self.sort_order != SortOrder::default()
    }
}

/// Page size offered by the limit selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Limit(usize);

impl Limit {
    pub const ALLOWED: [usize; 5] = [10, 25, 50, 100, 200];

    pub fn new(value: usize) -> Result<Self, ValidationError> {
        if Self::ALLOWED.contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::UnsupportedLimit(value))
        }
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALLOWED.iter().position(|v| *v == self.0).unwrap_or(0);
        Self(Self::ALLOWED[(idx + 1) % Self::ALLOWED.len()])
    }

    pub fn prev(&self) -> Self {
        let idx = Self::ALLOWED.iter().position(|v| *v == self.0).unwrap_or(0);
        Self(Self::ALLOWED[(idx + Self::ALLOWED.len() - 1) % Self::ALLOWED.len()])
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(10)
    }
}

impl TryFrom<usize> for Limit {
    type Error = ValidationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Limit> for usize {
    fn from(limit: Limit) -> Self {
        limit.0
    }
}

impl FromStr for Limit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .parse::<usize>()
            .map_err(|_| ValidationError::UnsupportedLimit(0))?;
        Self::new(value)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dashboard tabs. Any tab may be entered from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Top,
    Trending,
    Positions,
    Explorer,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Top, Tab::Trending, Tab::Positions, Tab::Explorer];

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Top => "top",
            Tab::Trending => "trending",
            Tab::Positions => "positions",
            Tab::Explorer => "explorer",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
