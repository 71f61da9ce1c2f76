//! Stale-response guard for requests that outlive the screen that issued them.
//!
//! Every request is tagged with the ticket current at issue time. Abandoning a screen (or
//! issuing a newer request) moves the counter on, and results carrying an older ticket
//! are dropped instead of being folded into state.

/// Monotonic counter of request generations for one slice of state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationCounter {
    current: u64,
}

/// Opaque tag identifying the generation a request was issued against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenerationTicket(u64);

impl GenerationCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation and returns its ticket. Earlier tickets become stale.
    pub fn issue(&mut self) -> GenerationTicket {
        self.current = self.current.wrapping_add(1);
        GenerationTicket(self.current)
    }

    /// Invalidates every outstanding ticket without issuing a new one.
    pub fn invalidate(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    #[must_use]
    pub fn is_current(&self, ticket: GenerationTicket) -> bool {
        ticket.0 == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_makes_older_stale() {
        let mut counter = GenerationCounter::new();
        let first = counter.issue();
        assert!(counter.is_current(first));
        let second = counter.issue();
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
    }

    #[test]
    fn invalidate_stales_outstanding_ticket() {
        let mut counter = GenerationCounter::new();
        let ticket = counter.issue();
        counter.invalidate();
        assert!(!counter.is_current(ticket));
    }
}
