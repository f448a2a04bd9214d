//! In-memory [`AtomSource`] for tests and offline runs.
//!
//! The mock returns whatever it was seeded with and records every call, so
//! tests can assert both on results and on what was requested (for example,
//! that the over-fetch strategy asked for twice the display limit).

use crate::source::AtomSource;
use crate::{Error, Result};
use async_trait::async_trait;
use atomscope_engine::HistoryWindow;
use atomscope_types::{
    Atom, AtomDetail, FilterSpec, HistoryPoint, Position, SyncMode, SyncReport, TrendingPeriod,
};
use atomscope_engine::passes_filters;
use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

/// A recorded request
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    ListAtoms { limit: usize, filters: Option<FilterSpec> },
    GetAtom { id: String },
    History { id: String, window: HistoryWindow },
    Trending {
        period: TrendingPeriod,
        limit: usize,
        filters: Option<FilterSpec>,
    },
    Search { query: String, limit: usize },
    Sync { mode: SyncMode, limit: Option<usize> },
    Positions { address: String, limit: usize, offset: usize },
}

#[derive(Default)]
struct Data {
    atoms: Vec<Atom>,
    trending: Vec<Atom>,
    details: HashMap<String, AtomDetail>,
    history: HashMap<String, Vec<HistoryPoint>>,
    positions: HashMap<String, Vec<Position>>,
    sync: SyncReport,
    failure: Option<(u16, String)>,
}

#[derive(Default)]
pub struct MockSource {
    data: RwLock<Data>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_atoms(self, atoms: Vec<Atom>) -> Self {
        self.write(|d| d.atoms = atoms);
        self
    }

    pub fn with_trending(self, atoms: Vec<Atom>) -> Self {
        self.write(|d| d.trending = atoms);
        self
    }

    pub fn with_detail(self, detail: AtomDetail) -> Self {
        self.write(|d| {
            d.details.insert(detail.atom.id.to_string(), detail);
        });
        self
    }

    pub fn with_history(self, id: &str, points: Vec<HistoryPoint>) -> Self {
        self.write(|d| {
            d.history.insert(id.to_string(), points);
        });
        self
    }

    /// Positions are keyed by lowercased address
    pub fn with_positions(self, address: &str, positions: Vec<Position>) -> Self {
        self.write(|d| {
            d.positions.insert(address.to_lowercase(), positions);
        });
        self
    }

    pub fn with_sync_report(self, report: SyncReport) -> Self {
        self.write(|d| d.sync = report);
        self
    }

    /// Make every subsequent call fail with this HTTP status
    pub fn fail_with(&self, status: u16, body: &str) {
        self.write(|d| d.failure = Some((status, body.to_string())));
    }

    pub fn recover(&self) {
        self.write(|d| d.failure = None);
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn write(&self, f: impl FnOnce(&mut Data)) {
        if let Ok(mut data) = self.data.write() {
            f(&mut data);
        }
    }

    /// Record `call`, then either fail or hand the seeded data to `f`
    fn respond<T>(&self, call: MockCall, f: impl FnOnce(&Data) -> Result<T>) -> Result<T> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        let data = self
            .data
            .read()
            .map_err(|_| Error::NotFound("mock data poisoned".to_string()))?;
        if let Some((status, body)) = &data.failure {
            return Err(Error::Status {
                status: *status,
                body: body.clone(),
            });
        }
        f(&data)
    }
}

/// Seeded rows as a filtering backend would return them
fn server_side(atoms: &[Atom], limit: usize, filters: Option<&FilterSpec>) -> Vec<Atom> {
    atoms
        .iter()
        .filter(|atom| filters.is_none_or(|spec| passes_filters(atom, spec)))
        .take(limit)
        .cloned()
        .collect()
}

#[async_trait]
impl AtomSource for MockSource {
    async fn list_atoms(&self, limit: usize, filters: Option<&FilterSpec>) -> Result<Vec<Atom>> {
        let call = MockCall::ListAtoms {
            limit,
            filters: filters.cloned(),
        };
        self.respond(call, |d| Ok(server_side(&d.atoms, limit, filters)))
    }

    async fn get_atom(&self, id: &str) -> Result<AtomDetail> {
        self.respond(MockCall::GetAtom { id: id.to_string() }, |d| {
            d.details
                .get(id)
                .cloned()
                .ok_or_else(|| Error::NotFound(format!("atom {}", id)))
        })
    }

    async fn atom_history(&self, id: &str, window: HistoryWindow) -> Result<Vec<HistoryPoint>> {
        let call = MockCall::History {
            id: id.to_string(),
            window,
        };
        self.respond(call, |d| Ok(d.history.get(id).cloned().unwrap_or_default()))
    }

    async fn trending(
        &self,
        period: TrendingPeriod,
        limit: usize,
        filters: Option<&FilterSpec>,
    ) -> Result<Vec<Atom>> {
        let call = MockCall::Trending {
            period,
            limit,
            filters: filters.cloned(),
        };
        self.respond(call, |d| Ok(server_side(&d.trending, limit, filters)))
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Atom>> {
        let call = MockCall::Search {
            query: query.to_string(),
            limit,
        };
        let needle = query.to_lowercase();
        self.respond(call, |d| {
            Ok(d.atoms
                .iter()
                .filter(|a| a.label().to_lowercase().contains(&needle))
                .take(limit)
                .cloned()
                .collect())
        })
    }

    async fn sync(&self, mode: SyncMode, limit: Option<usize>) -> Result<SyncReport> {
        self.respond(MockCall::Sync { mode, limit }, |d| Ok(d.sync.clone()))
    }

    async fn positions(
        &self,
        address: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Position>> {
        let address = atomscope_types::validate_address(address)?;
        let call = MockCall::Positions {
            address: address.to_string(),
            limit,
            offset,
        };
        self.respond(call, |d| {
            Ok(d.positions
                .get(&address.to_lowercase())
                .map(|p| p.iter().skip(offset).take(limit).cloned().collect())
                .unwrap_or_default())
        })
    }
}
