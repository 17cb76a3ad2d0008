//! Cancellable page data loads

use futures_util::future::{AbortHandle, Abortable, Aborted};
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use crate::client::{ClientError, ClientResult};

struct Tracked {
    key: Option<&'static str>,
    handle: AbortHandle,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    loads: HashMap<u64, Tracked>,
}

/// In-flight loads of the current page
///
/// Navigating away calls [`PageLoads::cancel_all`]; a response that arrives
/// afterwards resolves to [`ClientError::Cancelled`] instead of its data.
/// A load drops out of the registry as soon as it settles.
#[derive(Clone, Default)]
pub struct PageLoads {
    registry: Rc<RefCell<Registry>>,
}

impl PageLoads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a load so the next `cancel_all` can abort it
    pub fn track<F, T>(&self, load: F) -> impl Future<Output = ClientResult<T>>
    where
        F: Future<Output = ClientResult<T>>,
    {
        self.register(None, load)
    }

    /// Like [`track`](Self::track), but first aborts any load still running
    /// under the same key, so only the newest result for `key` arrives
    pub fn track_latest<F, T>(
        &self,
        key: &'static str,
        load: F,
    ) -> impl Future<Output = ClientResult<T>>
    where
        F: Future<Output = ClientResult<T>>,
    {
        {
            let mut registry = self.registry.borrow_mut();
            let stale: Vec<u64> = registry
                .loads
                .iter()
                .filter(|(_, t)| t.key == Some(key))
                .map(|(id, _)| *id)
                .collect();
            for id in stale {
                if let Some(t) = registry.loads.remove(&id) {
                    t.handle.abort();
                    tracing::debug!(key, "Superseded page load");
                }
            }
        }
        self.register(Some(key), load)
    }

    fn register<F, T>(
        &self,
        key: Option<&'static str>,
        load: F,
    ) -> impl Future<Output = ClientResult<T>>
    where
        F: Future<Output = ClientResult<T>>,
    {
        let (handle, registration) = AbortHandle::new_pair();
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.loads.insert(id, Tracked { key, handle });
            id
        };

        let registry = Rc::clone(&self.registry);
        let load = Abortable::new(load, registration);
        async move {
            let outcome = load.await;
            registry.borrow_mut().loads.remove(&id);
            match outcome {
                Ok(result) => result,
                Err(Aborted) => Err(ClientError::Cancelled),
            }
        }
    }

    /// Abort every tracked load; returns how many handles were dropped
    pub fn cancel_all(&self) -> usize {
        let drained: Vec<Tracked> = self
            .registry
            .borrow_mut()
            .loads
            .drain()
            .map(|(_, t)| t)
            .collect();
        for t in &drained {
            t.handle.abort();
        }
        if !drained.is_empty() {
            tracing::debug!(count = drained.len(), "Cancelled page loads");
        }
        drained.len()
    }

    pub fn tracked(&self) -> usize {
        self.registry.borrow().loads.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::TransportError;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_completed_load_passes_through() {
        let loads = PageLoads::new();
        let value = loads.track(async { Ok::<_, ClientError>(7) }).await.unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_settled_loads_leave_the_registry() {
        let loads = PageLoads::new();
        for i in 0..5 {
            let value = loads.track(async move { Ok::<_, ClientError>(i) }).await.unwrap();
            assert_eq!(value, i);
        }
        let offline = ClientError::Network(TransportError::Network("offline".to_string()));
        let failed = loads.track(async { Err::<(), _>(offline) }).await;
        assert!(failed.is_err());
        assert_eq!(loads.tracked(), 0);
    }

    #[tokio::test]
    async fn test_late_response_is_discarded() {
        let loads = PageLoads::new();
        let (tx, rx) = oneshot::channel::<u32>();

        let load = loads.track(async move {
            let v = rx.await.map_err(|_| ClientError::Cancelled)?;
            Ok::<_, ClientError>(v)
        });

        assert_eq!(loads.cancel_all(), 1);
        let _ = tx.send(42);

        let err = load.await.unwrap_err();
        assert!(err.is_cancelled());
        assert_eq!(loads.tracked(), 0);
    }

    #[tokio::test]
    async fn test_loads_after_cancel_are_live() {
        let loads = PageLoads::new();
        let first = loads.track(std::future::pending::<ClientResult<u32>>());
        loads.cancel_all();
        assert!(first.await.unwrap_err().is_cancelled());

        let second = loads.track(async { Ok::<_, ClientError>(1) });
        assert_eq!(second.await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_newer_search_supersedes_older() {
        let loads = PageLoads::new();
        let (slow_tx, slow_rx) = oneshot::channel::<&'static str>();

        let older = loads.track_latest("ingredients", async move {
            let term = slow_rx.await.map_err(|_| ClientError::Cancelled)?;
            Ok::<_, ClientError>(term)
        });
        let unrelated = loads.track(std::future::pending::<ClientResult<u32>>());
        let newer = loads.track_latest("ingredients", async { Ok::<_, ClientError>("arroz") });

        // The older response arriving last must not win
        assert_eq!(newer.await.unwrap(), "arroz");
        let _ = slow_tx.send("ar");
        assert!(older.await.unwrap_err().is_cancelled());

        // Other loads on the page are untouched
        assert_eq!(loads.tracked(), 1);
        drop(unrelated);
    }

    #[tokio::test]
    async fn test_errors_are_preserved() {
        let loads = PageLoads::new();
        let err = loads
            .track(async {
                Err::<(), _>(ClientError::Api {
                    status: 404,
                    message: "Ingrediente não encontrado".to_string(),
                })
            })
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Ingrediente não encontrado");
    }
}
