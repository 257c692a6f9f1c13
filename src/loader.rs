//! Global loading indicator
//!
//! Counts outbound requests. Every dispatch takes an [`InFlight`] guard and
//! every settlement (success, failure, or the future being dropped) releases it,
//! so overlapping calls keep the indicator on until the last one settles.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

type Listener = Arc<dyn Fn(bool) + Send + Sync>;

#[derive(Default)]
struct TrackerInner {
    in_flight: AtomicUsize,
    listeners: Mutex<Vec<Listener>>,
}

/// Process-wide request counter observed by the loading overlay
#[derive(Clone, Default)]
pub struct RequestTracker {
    inner: Arc<TrackerInner>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a request. The returned guard settles it on drop.
    pub fn begin(&self) -> InFlight {
        let previous = self.inner.in_flight.fetch_add(1, Ordering::SeqCst);
        if previous == 0 {
            self.notify(true);
        }
        InFlight {
            tracker: self.clone(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight() > 0
    }

    pub fn in_flight(&self) -> usize {
        self.inner.in_flight.load(Ordering::SeqCst)
    }

    /// Observe loading transitions. Called with `true` when the first request
    /// starts and `false` when the last one settles.
    pub fn subscribe(&self, listener: impl Fn(bool) + Send + Sync + 'static) {
        self.inner.listeners.lock().push(Arc::new(listener));
    }

    fn settle(&self) {
        let previous = self.inner.in_flight.fetch_sub(1, Ordering::SeqCst);
        if previous == 1 {
            self.notify(false);
        }
    }

    fn notify(&self, loading: bool) {
        // Listeners run outside the lock; they may subscribe or dispatch.
        let listeners: Vec<Listener> = self.inner.listeners.lock().clone();
        for listener in listeners {
            listener(loading);
        }
    }
}

/// A request registered with a [`RequestTracker`]
#[must_use = "the request settles as soon as the guard is dropped"]
pub struct InFlight {
    tracker: RequestTracker,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.tracker.settle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_request() {
        let tracker = RequestTracker::new();
        assert!(!tracker.is_loading());

        let guard = tracker.begin();
        assert!(tracker.is_loading());
        drop(guard);
        assert!(!tracker.is_loading());
    }

    #[test]
    fn test_overlapping_requests_stay_loading_until_last_settles() {
        let tracker = RequestTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();
        assert_eq!(tracker.in_flight(), 2);

        drop(second);
        assert!(tracker.is_loading());
        drop(first);
        assert!(!tracker.is_loading());
    }

    #[test]
    fn test_listeners_see_transitions_only() {
        let tracker = RequestTracker::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        tracker.subscribe(move |loading| sink.lock().push(loading));

        let a = tracker.begin();
        let b = tracker.begin();
        drop(a);
        drop(b);
        let c = tracker.begin();
        drop(c);

        assert_eq!(*seen.lock(), vec![true, false, true, false]);
    }

    #[test]
    fn test_clones_share_the_counter() {
        let tracker = RequestTracker::new();
        let other = tracker.clone();
        let _guard = other.begin();
        assert!(tracker.is_loading());
    }
}
