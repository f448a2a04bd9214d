//! Background fetches for the dashboard.
//!
//! Requests run on the tokio runtime; outcomes come back over a std channel
//! that the UI loop drains between frames. Every outcome carries the token it
//! was issued with so the app can drop superseded results.

use atomscope_client::AtomSource;
use atomscope_engine::{HistoryWindow, RequestKind, RequestToken};
use atomscope_types::{
    Atom, AtomDetail, FilterSpec, HistoryPoint, Position, SyncMode, SyncReport, TrendingPeriod,
};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use tokio::runtime::Handle;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchRequest {
    /// `filters` is set only when the backend applies the range bounds
    Atoms {
        limit: usize,
        filters: Option<FilterSpec>,
    },
    Trending {
        period: TrendingPeriod,
        limit: usize,
        filters: Option<FilterSpec>,
    },
    Search {
        query: String,
        limit: usize,
    },
    Positions {
        address: String,
        limit: usize,
        offset: usize,
    },
    Detail {
        id: String,
    },
    History {
        id: String,
        window: HistoryWindow,
    },
    Sync {
        mode: SyncMode,
        limit: Option<usize>,
    },
}

impl FetchRequest {
    /// Requests of the same kind supersede each other
    pub fn kind(&self) -> RequestKind {
        match self {
            FetchRequest::Atoms { .. } | FetchRequest::Trending { .. } => RequestKind::List,
            FetchRequest::Search { .. } => RequestKind::Search,
            FetchRequest::Positions { .. } => RequestKind::Positions,
            FetchRequest::Detail { .. } => RequestKind::Detail,
            FetchRequest::History { .. } => RequestKind::History,
            FetchRequest::Sync { .. } => RequestKind::Sync,
        }
    }
}

#[derive(Debug, Clone)]
pub enum FetchResult {
    Atoms(Vec<Atom>),
    Search(Vec<Atom>),
    Positions(Vec<Position>),
    Detail(Box<AtomDetail>),
    History(Vec<HistoryPoint>),
    Sync(SyncReport),
}

#[derive(Debug)]
pub struct FetchOutcome {
    pub token: RequestToken,
    pub result: Result<FetchResult, String>,
}

pub struct Worker {
    source: Arc<dyn AtomSource>,
    handle: Handle,
    tx: Sender<FetchOutcome>,
}

impl Worker {
    pub fn new(source: Arc<dyn AtomSource>, handle: Handle) -> (Self, Receiver<FetchOutcome>) {
        let (tx, rx) = mpsc::channel();
        (Self { source, handle, tx }, rx)
    }

    pub fn spawn(&self, token: RequestToken, request: FetchRequest) {
        let source = self.source.clone();
        let tx = self.tx.clone();
        tracing::debug!(?request, seq = token.seq(), "dispatching fetch");
        self.handle.spawn(async move {
            let result = execute(source.as_ref(), request)
                .await
                .map_err(|e| e.user_message());
            if let Err(e) = &result {
                tracing::warn!(seq = token.seq(), error = %e, "fetch failed");
            }
            // the receiver is gone once the dashboard has exited
            let _ = tx.send(FetchOutcome { token, result });
        });
    }
}

async fn execute(
    source: &dyn AtomSource,
    request: FetchRequest,
) -> atomscope_client::Result<FetchResult> {
    Ok(match request {
        FetchRequest::Atoms { limit, filters } => {
            FetchResult::Atoms(source.list_atoms(limit, filters.as_ref()).await?)
        }
        FetchRequest::Trending {
            period,
            limit,
            filters,
        } => FetchResult::Atoms(source.trending(period, limit, filters.as_ref()).await?),
        FetchRequest::Search { query, limit } => {
            FetchResult::Search(source.search(&query, limit).await?)
        }
        FetchRequest::Positions {
            address,
            limit,
            offset,
        } => FetchResult::Positions(source.positions(&address, limit, offset).await?),
        FetchRequest::Detail { id } => FetchResult::Detail(Box::new(source.get_atom(&id).await?)),
        FetchRequest::History { id, window } => {
            FetchResult::History(source.atom_history(&id, window).await?)
        }
        FetchRequest::Sync { mode, limit } => FetchResult::Sync(source.sync(mode, limit).await?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomscope_client::MockSource;
    use atomscope_engine::RequestTracker;
    use atomscope_testing::fixtures::sample_atoms;
    use std::time::Duration;

    #[test]
    fn test_outcome_carries_token() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        let source = Arc::new(MockSource::new().with_atoms(sample_atoms()));
        let (worker, rx) = Worker::new(source, runtime.handle().clone());
        let mut tracker = RequestTracker::new();

        let request = FetchRequest::Atoms {
            limit: 2,
            filters: None,
        };
        let token = tracker.issue(request.kind());
        worker.spawn(token, request);

        let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(outcome.token, token);
        match outcome.result {
            Ok(FetchResult::Atoms(atoms)) => assert_eq!(atoms.len(), 2),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_list_requests_share_a_kind() {
        let top = FetchRequest::Atoms {
            limit: 10,
            filters: None,
        };
        let trending = FetchRequest::Trending {
            period: TrendingPeriod::D7,
            limit: 10,
            filters: None,
        };
        assert_eq!(top.kind(), trending.kind());
    }
}
