//! Request cancellation tied to a view's lifetime

use crate::types::{AppError, Result};
use futures::future::{AbortHandle, Abortable};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

#[derive(Default)]
struct ScopeState {
    cancelled: bool,
    next_id: u64,
    handles: HashMap<u64, AbortHandle>,
}

/// Drops its handle from the scope when the request settles or is dropped
struct InFlight {
    state: Arc<Mutex<ScopeState>>,
    id: u64,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.state.lock().handles.remove(&self.id);
    }
}

/// Owns the outstanding requests of one mounted view.
///
/// Cancelling aborts every future started through [`ViewScope::run`]; the
/// aborted future is dropped, which settles its loading-tracker entry.
#[derive(Clone, Default)]
pub struct ViewScope {
    state: Arc<Mutex<ScopeState>>,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `fut` unless the scope is cancelled first
    pub async fn run<F, T>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let (handle, registration) = AbortHandle::new_pair();
        let _in_flight = {
            let mut state = self.state.lock();
            if state.cancelled {
                return Err(AppError::Cancelled);
            }
            let id = state.next_id;
            state.next_id += 1;
            state.handles.insert(id, handle);
            InFlight {
                state: Arc::clone(&self.state),
                id,
            }
        };

        match Abortable::new(fut, registration).await {
            Ok(result) => result,
            Err(_aborted) => Err(AppError::Cancelled),
        }
    }

    /// Abort everything in flight and refuse new work
    pub fn cancel(&self) {
        let handles = {
            let mut state = self.state.lock();
            state.cancelled = true;
            std::mem::take(&mut state.handles)
        };
        if !handles.is_empty() {
            tracing::debug!(count = handles.len(), "Cancelling outstanding requests");
        }
        for handle in handles.into_values() {
            handle.abort();
        }
    }

    /// Requests started through this scope that have not settled
    pub fn pending(&self) -> usize {
        self.state.lock().handles.len()
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.lock().cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::RequestTracker;

    #[tokio::test]
    async fn test_run_passes_results_through() {
        let scope = ViewScope::new();
        let value = scope.run(async { Ok(7) }).await.unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_settled_requests_release_their_handles() {
        let scope = ViewScope::new();
        for i in 0..1000 {
            let _ = scope.run(async move { Ok(i) }).await;
        }
        let _ = scope
            .run(async { Err::<(), _>(AppError::Network("offline".into())) })
            .await;
        assert_eq!(scope.pending(), 0);
    }

    #[tokio::test]
    async fn test_pending_counts_in_flight_requests() {
        let scope = ViewScope::new();
        let (tx, rx) = futures::channel::oneshot::channel::<()>();

        let observer = scope.clone();
        let (result, seen) = tokio::join!(
            scope.run(async move {
                let _ = rx.await;
                Ok(())
            }),
            async move {
                tokio::task::yield_now().await;
                let seen = observer.pending();
                let _ = tx.send(());
                seen
            }
        );

        assert!(result.is_ok());
        assert_eq!(seen, 1);
        assert_eq!(scope.pending(), 0);
    }

    #[tokio::test]
    async fn test_cancel_aborts_pending_and_settles_tracker() {
        let scope = ViewScope::new();
        let tracker = RequestTracker::new();

        let pending = {
            let tracker = tracker.clone();
            async move {
                let _guard = tracker.begin();
                futures::future::pending::<()>().await;
                Ok(())
            }
        };

        let canceller = scope.clone();
        let (result, _) = tokio::join!(scope.run(pending), async move {
            tokio::task::yield_now().await;
            canceller.cancel();
        });

        assert!(matches!(result, Err(AppError::Cancelled)));
        assert!(!tracker.is_loading());
    }

    #[tokio::test]
    async fn test_cancelled_scope_refuses_new_work() {
        let scope = ViewScope::new();
        scope.cancel();
        assert!(scope.is_cancelled());
        let result = scope.run(async { Ok(()) }).await;
        assert!(matches!(result, Err(AppError::Cancelled)));
    }
}
