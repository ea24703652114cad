//! Latest-wins ordering for debounced validation checks
//!
//! While a user types, the form fires debounced existence checks
//! against the word store. Responses can return out of order; only the
//! response for the newest keystroke may be applied. The timer lives
//! in the UI layer; this type owns just the ordering decision: every
//! check takes a ticket, and only the most recently issued ticket is
//! accepted when its result lands.

/// Handle for one in-flight validation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationTicket(u64);

/// Monotonic ticket issuer; superseded tickets are never accepted.
#[derive(Debug, Default)]
pub struct ValidationSequencer {
    latest: u64,
}

impl ValidationSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new check, superseding every earlier one.
    pub fn issue(&mut self) -> ValidationTicket {
        self.latest += 1;
        ValidationTicket(self.latest)
    }

    /// Whether a returning result may be applied.
    pub fn accept(&self, ticket: ValidationTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Apply a result only if its ticket is still current.
    /// Returns the value for current tickets, `None` for stale ones.
    pub fn apply<T>(&self, ticket: ValidationTicket, result: T) -> Option<T> {
        self.accept(ticket).then_some(result)
    }
}
