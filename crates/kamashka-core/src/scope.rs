//! View Scope
//!
//! Guards view state against stale responses: every fetch takes a ticket,
//! and only the newest ticket of a still-mounted view may apply its result.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Generation stamp handed out when a request is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Lifetime handle of one view instance (clones share state)
#[derive(Debug, Clone, Default)]
pub struct ViewScope {
    generation: Arc<AtomicU64>,
    closed: Arc<AtomicBool>,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket, superseding every earlier one
    pub fn begin(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether a response stamped with `ticket` may still touch view state
    pub fn accepts(&self, ticket: Ticket) -> bool {
        !self.is_closed() && self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// The view unmounted; every outstanding ticket is void
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let scope = ViewScope::new();
        let first = scope.begin();
        let second = scope.begin();
        assert!(!scope.accepts(first));
        assert!(scope.accepts(second));
    }

    #[test]
    fn test_close_voids_tickets() {
        let scope = ViewScope::new();
        let ticket = scope.begin();
        let shared = scope.clone();
        shared.close();
        assert!(!scope.accepts(ticket));
        assert!(scope.is_closed());
    }

    #[test]
    fn test_independent_scopes() {
        let list = ViewScope::new();
        let facets = ViewScope::new();
        let a = list.begin();
        let b = facets.begin();
        assert!(list.accepts(a));
        assert!(facets.accepts(b));
    }
}
