//! Sequence tags for repeated fetches of the same resource.
//!
//! Every fetch takes a ticket before it starts. When the response arrives it
//! is applied only if no newer fetch was issued in the meantime, so a slow
//! early response can never overwrite fresher data.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
    settled: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag a new request; invalidates every ticket issued before it
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// True while no newer request has been issued
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket.0
    }

    /// Mark the response for `ticket` as arrived. Returns false (and
    /// changes nothing) when a newer request was issued meanwhile.
    pub fn settle(&self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.settled.store(ticket.0, Ordering::Relaxed);
        true
    }

    /// No request is waiting for its response
    pub fn is_idle(&self) -> bool {
        self.settled.load(Ordering::Relaxed) == self.latest.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let seq = RequestSequence::new();
        let first = seq.issue();
        assert!(seq.is_current(first));

        let second = seq.issue();
        assert!(first < second);
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_busy_until_latest_response_settles() {
        let seq = RequestSequence::new();
        assert!(seq.is_idle());

        let first = seq.issue();
        assert!(!seq.is_idle());
        assert!(seq.settle(first));
        assert!(seq.is_idle());

        // A slow response for an older ticket does not free the sequence
        let slow = seq.issue();
        let fresh = seq.issue();
        assert!(!seq.settle(slow));
        assert!(!seq.is_idle());
        assert!(seq.settle(fresh));
        assert!(seq.is_idle());
    }

    #[test]
    fn test_clones_share_the_counter() {
        let seq = RequestSequence::new();
        let other = seq.clone();
        let ticket = seq.issue();
        other.issue();
        assert!(!seq.is_current(ticket));
    }
}
