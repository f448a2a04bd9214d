//! Request tokens: "latest user intent wins".
//!
//! Each fetch is tagged with a token when it is issued. When it resolves,
//! the result is applied only if no newer request of the same kind has been
//! issued meanwhile.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    List,
    Search,
    Positions,
    Detail,
    History,
    Sync,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken {
    kind: RequestKind,
    seq: u64,
}

impl RequestToken {
    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    next_seq: u64,
    latest: HashMap<RequestKind, u64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token that supersedes every earlier token of the same kind
    pub fn issue(&mut self, kind: RequestKind) -> RequestToken {
        self.next_seq += 1;
        self.latest.insert(kind, self.next_seq);
        RequestToken {
            kind,
            seq: self.next_seq,
        }
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.get(&token.kind) == Some(&token.seq)
    }

    /// Invalidate outstanding requests of `kind` without issuing a new one
    pub fn cancel(&mut self, kind: RequestKind) {
        self.latest.remove(&kind);
    }

    pub fn is_pending(&self, kind: RequestKind) -> bool {
        self.latest.contains_key(&kind)
    }

    pub fn has_pending(&self) -> bool {
        !self.latest.is_empty()
    }

    /// Mark the request as settled; later completions with the same token
    /// are stale
    pub fn settle(&mut self, token: RequestToken) -> bool {
        if self.is_current(token) {
            self.latest.remove(&token.kind);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_token_supersedes_older() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue(RequestKind::List);
        let second = tracker.issue(RequestKind::List);

        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert!(second.seq() > first.seq());
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut tracker = RequestTracker::new();
        let list = tracker.issue(RequestKind::List);
        let history = tracker.issue(RequestKind::History);

        assert!(tracker.is_current(list));
        assert!(tracker.is_current(history));
        assert_eq!(history.kind(), RequestKind::History);
    }

    #[test]
    fn test_settle_once() {
        let mut tracker = RequestTracker::new();
        let token = tracker.issue(RequestKind::Search);
        assert!(tracker.is_pending(RequestKind::Search));
        assert!(tracker.settle(token));
        assert!(!tracker.settle(token));
        assert!(!tracker.is_pending(RequestKind::Search));
    }

    #[test]
    fn test_cancel_makes_outstanding_stale() {
        let mut tracker = RequestTracker::new();
        let token = tracker.issue(RequestKind::Positions);
        tracker.cancel(RequestKind::Positions);
        assert!(!tracker.is_current(token));
    }
}
