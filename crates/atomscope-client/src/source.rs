use crate::Result;
use async_trait::async_trait;
use atomscope_engine::HistoryWindow;
use atomscope_types::{
    Atom, AtomDetail, FilterSpec, HistoryPoint, Position, SyncMode, SyncReport, TrendingPeriod,
};
use serde::Deserialize;

/// Page size for `search` when the caller has no preference
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Operations of the atoms REST API.
///
/// The list endpoints take optional range `filters`; when given, the backend
/// applies them (see `FetchStrategy::server_filters`).
///
/// Implemented by [`crate::HttpSource`] for the real backend and by
/// [`crate::MockSource`] for tests.
#[async_trait]
pub trait AtomSource: Send + Sync {
    /// `GET /atoms?limit=[&min_market_cap=...]`
    async fn list_atoms(&self, limit: usize, filters: Option<&FilterSpec>) -> Result<Vec<Atom>>;

    /// `GET /atoms/:id`
    async fn get_atom(&self, id: &str) -> Result<AtomDetail>;

    /// `GET /atoms/:id/history?hours=|days=`
    async fn atom_history(&self, id: &str, window: HistoryWindow) -> Result<Vec<HistoryPoint>>;

    /// `GET /trending?period=&limit=[&min_market_cap=...]`
    async fn trending(
        &self,
        period: TrendingPeriod,
        limit: usize,
        filters: Option<&FilterSpec>,
    ) -> Result<Vec<Atom>>;

    /// `GET /search?query=&limit=`
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Atom>>;

    /// `POST /sync`. A report with `success == false` is still `Ok`.
    async fn sync(&self, mode: SyncMode, limit: Option<usize>) -> Result<SyncReport>;

    /// `GET /positions?address=&limit=&offset=`
    async fn positions(&self, address: &str, limit: usize, offset: usize)
    -> Result<Vec<Position>>;
}

// Response envelopes. Missing arrays decode as empty.

#[derive(Debug, Deserialize)]
pub(crate) struct AtomsEnvelope {
    #[serde(default)]
    pub atoms: Vec<Atom>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AtomEnvelope {
    pub atom: AtomDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HistoryEnvelope {
    #[serde(default)]
    pub data: Vec<HistoryPoint>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrendingEnvelope {
    #[serde(default)]
    pub trending: Vec<Atom>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PositionsEnvelope {
    #[serde(default)]
    pub positions: Vec<Position>,
}
