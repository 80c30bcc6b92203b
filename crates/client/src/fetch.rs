//! Entity fetch loaders.
//!
//! A [`FetchLoader`] is the client-side counterpart of a detail or list view:
//! it owns the current lookup argument (the *key*), calls a remote accessor
//! when the key changes, and publishes `{ data, loading, error }` snapshots
//! through a watch channel that view code subscribes to.
//!
//! Behavior contract:
//!
//! - An absent key yields empty data immediately, with `loading = false`,
//!   `error = None`, and **zero** remote calls.
//! - A present key triggers exactly one accessor call; while it is in
//!   flight the previous data is kept and `loading` is `true`.
//! - On success the unwrapped value replaces the data wholesale.
//! - On failure the loader stores a fixed localized message, logs the
//!   diagnostic detail, and resets the data to empty - it never keeps a
//!   partial or stale value next to an error.
//! - Every load carries a monotonically increasing generation. A response
//!   whose generation is no longer current is discarded entirely: it writes
//!   neither data nor error and does not clear `loading`. Overlapping loads
//!   therefore resolve to the *newest* request, not the last one to land,
//!   and a load completing after its owner went away is harmless.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures::future::BoxFuture;
use tokio::sync::{Mutex, watch};
use tracing::{debug, error};

use crate::error::ApiError;

/// One published snapshot of a loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchState<T> {
    /// The held value; `T::default()` is the empty state.
    pub data: T,
    /// Whether a load is in flight.
    pub loading: bool,
    /// Localized error message from the last failed load, if any.
    pub error: Option<String>,
}

impl<T: Default> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: T::default(),
            loading: false,
            error: None,
        }
    }
}

type FetchFn<K, T> = dyn Fn(K) -> BoxFuture<'static, Result<T, ApiError>> + Send + Sync;

/// A keyed remote loader publishing [`FetchState`] snapshots.
///
/// Cheap to clone; all clones share the same state channel and key.
pub struct FetchLoader<K, T> {
    inner: Arc<LoaderInner<K, T>>,
}

impl<K, T> Clone for FetchLoader<K, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct LoaderInner<K, T> {
    fetch: Box<FetchFn<K, T>>,
    /// Fixed localized message shown for any failed load.
    error_message: &'static str,
    /// Keys for which this returns `true` are normalized to "absent".
    absent_when: fn(&K) -> bool,
    state: watch::Sender<FetchState<T>>,
    key: Mutex<Option<K>>,
    generation: AtomicU64,
}

impl<K, T> FetchLoader<K, T>
where
    K: Clone + PartialEq + Send + 'static,
    T: Clone + Default + Send + Sync + 'static,
{
    /// Create a loader around a remote accessor.
    ///
    /// The loader starts with an absent key and empty state.
    pub fn new<F>(error_message: &'static str, fetch: F) -> Self
    where
        F: Fn(K) -> BoxFuture<'static, Result<T, ApiError>> + Send + Sync + 'static,
    {
        Self::with_absent_when(error_message, |_| false, fetch)
    }

    /// Create a loader that treats some present keys as absent.
    ///
    /// Detail loaders use this to short-circuit empty identifiers: a key for
    /// which `absent_when` returns `true` behaves exactly like `None` -
    /// empty data, no error, and no remote call.
    pub fn with_absent_when<F>(
        error_message: &'static str,
        absent_when: fn(&K) -> bool,
        fetch: F,
    ) -> Self
    where
        F: Fn(K) -> BoxFuture<'static, Result<T, ApiError>> + Send + Sync + 'static,
    {
        let (state, _) = watch::channel(FetchState::default());
        Self {
            inner: Arc::new(LoaderInner {
                fetch: Box::new(fetch),
                error_message,
                absent_when,
                state,
                key: Mutex::new(None),
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Subscribe to state snapshots.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.inner.state.subscribe()
    }

    /// The current state snapshot.
    #[must_use]
    pub fn state(&self) -> FetchState<T> {
        self.inner.state.borrow().clone()
    }

    /// Replace the lookup key, reloading when it actually changes.
    ///
    /// Setting the same key again is a no-op (use [`refetch`](Self::refetch)
    /// to force a reload). Setting `None` clears the state to empty without
    /// any remote call and invalidates in-flight responses.
    pub async fn set_key(&self, key: Option<K>) {
        let key = key.filter(|key| !(self.inner.absent_when)(key));

        {
            let mut current = self.inner.key.lock().await;
            if *current == key {
                return;
            }
            current.clone_from(&key);
        }

        match key {
            None => {
                // Invalidate anything still in flight for the old key.
                self.inner.generation.fetch_add(1, Ordering::SeqCst);
                self.inner.state.send_replace(FetchState::default());
            }
            Some(key) => self.load(key).await,
        }
    }

    /// Re-run the load with the current key. No-op when the key is absent.
    pub async fn refetch(&self) {
        let key = self.inner.key.lock().await.clone();
        if let Some(key) = key {
            self.load(key).await;
        }
    }

    async fn load(&self, key: K) {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;

        self.inner.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });

        let result = (self.inner.fetch)(key).await;

        if self.inner.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "discarding stale fetch response");
            return;
        }

        match result {
            Ok(data) => {
                self.inner.state.send_replace(FetchState {
                    data,
                    loading: false,
                    error: None,
                });
            }
            Err(err) => {
                error!(error = %err, "entity fetch failed");
                self.inner.state.send_replace(FetchState {
                    data: T::default(),
                    loading: false,
                    error: Some(self.inner.error_message.to_string()),
                });
            }
        }
    }
}
