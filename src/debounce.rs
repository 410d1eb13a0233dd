//! Debounce Token
//!
//! Generation counter shared between an input handler and the delayed
//! work it schedules. Every restart invalidates the tickets handed out
//! before it, so a superseded timer never fires and a superseded
//! response is dropped instead of overwriting newer state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub struct DebounceToken {
    current: Arc<AtomicU64>,
}

/// Proof of which generation scheduled a piece of work
#[derive(Clone, Debug)]
pub struct Ticket {
    generation: u64,
    token: DebounceToken,
}

impl DebounceToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation and return its ticket
    pub fn restart(&self) -> Ticket {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            generation,
            token: self.clone(),
        }
    }

    /// Invalidate all outstanding tickets
    pub fn cancel(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }

    fn generation(&self) -> u64 {
        self.current.load(Ordering::SeqCst)
    }
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.token.generation() == self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_is_current() {
        let token = DebounceToken::new();
        let ticket = token.restart();
        assert!(ticket.is_current());
    }

    #[test]
    fn test_restart_supersedes_earlier_tickets() {
        let token = DebounceToken::new();
        let first = token.restart();
        let second = token.restart();
        let third = token.restart();
        assert!(!first.is_current());
        assert!(!second.is_current());
        assert!(third.is_current());
        assert!(third.generation() > first.generation());
    }

    #[test]
    fn test_in_flight_response_is_dropped_after_new_edit() {
        // Request A is in flight when the user types again; only B may apply.
        let token = DebounceToken::new();
        let a = token.restart();
        let b = token.restart();

        let mut applied = Vec::new();
        for (ticket, tags) in [(&b, "from-b"), (&a, "from-a")] {
            if ticket.is_current() {
                applied.push(tags);
            }
        }
        assert_eq!(applied, vec!["from-b"]);
    }

    #[test]
    fn test_cancel_invalidates_everything() {
        let token = DebounceToken::new();
        let ticket = token.restart();
        token.cancel();
        assert!(!ticket.is_current());
    }

    #[test]
    fn test_clones_share_generation() {
        let token = DebounceToken::new();
        let other = token.clone();
        let ticket = token.restart();
        other.restart();
        assert!(!ticket.is_current());
    }
}
