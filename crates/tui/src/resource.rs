//! Remote resource state shared by every view.
//!
//! Responsibilities:
//! - Track one backend fetch as `Idle | Pending | Ready(T) | Failed(message)`.
//! - Hand out request tickets and apply only the result for the current ticket.
//!
//! Does NOT handle:
//! - Issuing requests (views return command actions; see `runtime::side_effects`).
//! - Rendering.
//!
//! Invariants:
//! - Tickets come from one process-wide monotonic counter, so two requests
//!   never share a ticket even across views.
//! - A result is applied only if its ticket is the one currently awaited.
//!   Anything else (superseded request, reset view) is reported as stale.
//! - `Failed` never keeps a previous value.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    /// Allocate a fresh ticket.
    pub fn next() -> Self {
        Self(NEXT_TICKET.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Visible state of a remote resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResourceState<T> {
    #[default]
    Idle,
    Pending,
    Ready(T),
    Failed(String),
}

/// Whether a delivered result was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Stale,
}

impl Resolution {
    pub fn is_stale(self) -> bool {
        self == Resolution::Stale
    }
}

/// One fetchable value plus the ticket of the request it is waiting on.
#[derive(Debug, Clone)]
pub struct RemoteResource<T> {
    state: ResourceState<T>,
    awaiting: Option<Ticket>,
}

impl<T> Default for RemoteResource<T> {
    fn default() -> Self {
        Self {
            state: ResourceState::Idle,
            awaiting: None,
        }
    }
}

impl<T> RemoteResource<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh fetch: any shown value is cleared.
    pub fn begin(&mut self) -> Ticket {
        let ticket = Ticket::next();
        self.state = ResourceState::Pending;
        self.awaiting = Some(ticket);
        ticket
    }

    /// Start a fetch that keeps the current `Ready` value on screen until the
    /// answer arrives. Used to re-sync after a successful write.
    pub fn begin_refresh(&mut self) -> Ticket {
        let ticket = Ticket::next();
        if !matches!(self.state, ResourceState::Ready(_)) {
            self.state = ResourceState::Pending;
        }
        self.awaiting = Some(ticket);
        ticket
    }

    /// Apply a result if `ticket` is the one being awaited.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<T, String>) -> Resolution {
        if self.awaiting != Some(ticket) {
            return Resolution::Stale;
        }
        self.awaiting = None;
        self.state = match result {
            Ok(value) => ResourceState::Ready(value),
            Err(message) => ResourceState::Failed(message),
        };
        Resolution::Applied
    }

    /// Forget everything, including the in-flight ticket.
    pub fn reset(&mut self) {
        self.state = ResourceState::Idle;
        self.awaiting = None;
    }

    /// Whether a request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.awaiting.is_some()
    }

    pub fn awaiting(&self) -> Option<Ticket> {
        self.awaiting
    }

    pub fn state(&self) -> &ResourceState<T> {
        &self.state
    }

    pub fn ready(&self) -> Option<&T> {
        match &self.state {
            ResourceState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            ResourceState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ResourceState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, ResourceState::Idle) && self.awaiting.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_are_monotonic() {
        let a = Ticket::next();
        let b = Ticket::next();
        assert!(b > a);
    }

    #[test]
    fn test_begin_then_resolve_ready() {
        let mut res = RemoteResource::<u32>::new();
        let t = res.begin();
        assert!(res.is_loading());
        assert_eq!(res.state(), &ResourceState::Pending);

        assert_eq!(res.resolve(t, Ok(7)), Resolution::Applied);
        assert_eq!(res.ready(), Some(&7));
        assert!(!res.is_loading());
    }

    #[test]
    fn test_superseded_result_is_stale() {
        let mut res = RemoteResource::<u32>::new();
        let first = res.begin();
        let second = res.begin();

        assert_eq!(res.resolve(first, Ok(1)), Resolution::Stale);
        assert!(res.is_loading());
        assert_eq!(res.resolve(second, Ok(2)), Resolution::Applied);
        assert_eq!(res.ready(), Some(&2));
    }

    #[test]
    fn test_late_result_after_reset_is_stale() {
        let mut res = RemoteResource::<u32>::new();
        let t = res.begin();
        res.reset();
        assert_eq!(res.resolve(t, Ok(1)), Resolution::Stale);
        assert!(res.is_idle());
    }

    #[test]
    fn test_failure_clears_previous_value() {
        let mut res = RemoteResource::<u32>::new();
        let t = res.begin();
        res.resolve(t, Ok(1));
        let t = res.begin_refresh();
        assert_eq!(res.ready(), Some(&1));
        res.resolve(t, Err("boom".into()));
        assert_eq!(res.ready(), None);
        assert_eq!(res.error(), Some("boom"));
    }

    #[test]
    fn test_refresh_from_failed_shows_pending() {
        let mut res = RemoteResource::<u32>::new();
        let t = res.begin();
        res.resolve(t, Err("x".into()));
        res.begin_refresh();
        assert_eq!(res.state(), &ResourceState::Pending);
    }
}
