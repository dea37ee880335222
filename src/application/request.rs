// SPDX-License-Identifier: MPL-2.0
//! Request-generation tracking.
//!
//! Every asynchronous provider call is tagged with a [`RequestId`] taken from
//! a per-component [`RequestTracker`]. Only the most recently issued request
//! may complete; answers to superseded or cancelled requests are stale and
//! must be dropped by the caller.

use std::fmt;

/// Identifier of one asynchronous request, unique per tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic request counter with at most one outstanding request.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    last_issued: u64,
    pending: Option<RequestId>,
}

impl RequestTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new request, superseding any pending one.
    pub fn issue(&mut self) -> RequestId {
        self.last_issued += 1;
        let id = RequestId(self.last_issued);
        if let Some(previous) = self.pending.replace(id) {
            log::debug!("Request {previous} superseded by {id}");
        }
        id
    }

    /// Accepts the answer for `id` if it is the pending request.
    ///
    /// Returns `false` for stale answers; the pending request is then left
    /// untouched.
    pub fn complete(&mut self, id: RequestId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            log::debug!("Discarding stale answer for request {id}");
            false
        }
    }

    /// Invalidates the pending request, if any, and returns it.
    pub fn cancel(&mut self) -> Option<RequestId> {
        self.pending.take()
    }

    #[must_use]
    pub fn pending(&self) -> Option<RequestId> {
        self.pending
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tracker_has_nothing_pending() {
        let tracker = RequestTracker::new();
        assert!(!tracker.is_pending());
        assert!(tracker.pending().is_none());
    }

    #[test]
    fn ids_are_monotonic() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue();
        let second = tracker.issue();
        assert!(second > first);
        assert_eq!(tracker.pending(), Some(second));
    }

    #[test]
    fn only_latest_request_completes() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue();
        let second = tracker.issue();

        assert!(!tracker.complete(first));
        assert!(tracker.is_pending());
        assert!(tracker.complete(second));
        assert!(!tracker.is_pending());
    }

    #[test]
    fn completed_request_cannot_complete_twice() {
        let mut tracker = RequestTracker::new();
        let id = tracker.issue();
        assert!(tracker.complete(id));
        assert!(!tracker.complete(id));
    }

    #[test]
    fn cancelled_request_is_stale() {
        let mut tracker = RequestTracker::new();
        let id = tracker.issue();
        assert_eq!(tracker.cancel(), Some(id));
        assert!(!tracker.complete(id));
        assert!(tracker.cancel().is_none());
    }

    #[test]
    fn ids_keep_growing_after_cancel() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue();
        tracker.cancel();
        let second = tracker.issue();
        assert_ne!(first, second);
        assert_eq!(second.value(), first.value() + 1);
    }
}
