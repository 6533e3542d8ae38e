use std::cell::Cell;
use std::rc::Rc;

/// Identifies one issued request; compare against the sequence on completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Monotonic request counter shared between a hook and its spawned futures.
///
/// Only the most recently issued ticket is current, so a response that
/// arrives after a newer request was started (or after `invalidate`) can be
/// recognised and dropped instead of overwriting newer state.
///
/// # Example
///
/// ```rust,ignore
/// let ticket = sequence.begin();
/// spawn_local(async move {
///     let result = fetch().await;
///     if sequence.is_current(ticket) {
///         state.set(result);
///     }
/// });
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestSequence {
    latest: Rc<Cell<u64>>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RequestTicket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RequestTicket(next)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.get() == ticket.0
    }

    /// Makes every outstanding ticket stale.
    pub fn invalidate(&self) {
        self.latest.set(self.latest.get() + 1);
    }
}

impl PartialEq for RequestSequence {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.latest, &other.latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let sequence = RequestSequence::new();
        let first = sequence.begin();
        assert!(sequence.is_current(first));

        let second = sequence.begin();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }

    #[test]
    fn test_invalidate_drops_outstanding() {
        let sequence = RequestSequence::new();
        let ticket = sequence.begin();
        sequence.invalidate();
        assert!(!sequence.is_current(ticket));
    }

    #[test]
    fn test_clones_share_counter() {
        let sequence = RequestSequence::new();
        let handle = sequence.clone();
        let ticket = handle.begin();

        assert!(sequence.is_current(ticket));
        assert_eq!(sequence, handle);
        assert_ne!(sequence, RequestSequence::new());
    }
}
