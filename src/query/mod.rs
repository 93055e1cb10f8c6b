//! Keyed request coordinator shared by every page.
//!
//! At most one request runs per [`QueryKey`]. Callers asking for a key that is already
//! in flight await the same shared future, resolved values are served from the cache
//! until invalidated and failures are never cached.

pub mod key;
pub mod state;

use std::{
    any::Any,
    cell::RefCell,
    collections::HashMap,
    future::Future,
    rc::{Rc, Weak},
};

use dioxus_logger::tracing;
use futures::{
    future::{LocalBoxFuture, Shared},
    FutureExt,
};

use crate::model::api::ApiError;

pub use key::{Collection, QueryKey};
pub use state::LoadState;

type Value = Rc<dyn Any>;
type SharedLoad = Shared<LocalBoxFuture<'static, Result<Value, ApiError>>>;

enum Slot {
    Pending { generation: u64, future: SharedLoad },
    Ready(Value),
}

#[derive(Default)]
struct Cache {
    slots: HashMap<QueryKey, Slot>,
    generation: u64,
}

impl Cache {
    /// Stores the outcome of a load unless the slot was invalidated or replaced meanwhile.
    fn settle(&mut self, key: &QueryKey, generation: u64, result: &Result<Value, ApiError>) {
        let current = matches!(
            self.slots.get(key),
            Some(Slot::Pending { generation: pending, .. }) if *pending == generation
        );
        if !current {
            tracing::debug!(%key, "Discarding result of invalidated query");
            return;
        }

        match result {
            Ok(value) => {
                self.slots.insert(key.clone(), Slot::Ready(value.clone()));
            }
            Err(e) => {
                tracing::debug!(%key, error = %e, "Query failed");
                self.slots.remove(key);
            }
        }
    }
}

/// Cloneable handle to the query cache of the running application.
#[derive(Clone, Default)]
pub struct QueryClient {
    cache: Rc<RefCell<Cache>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key`, running `loader` only when the key is neither cached
    /// nor in flight.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, loader: F) -> Result<T, ApiError>
    where
        T: Clone + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let existing = match self.cache.borrow().slots.get(&key) {
            Some(Slot::Ready(value)) => return downcast(&key, value),
            Some(Slot::Pending { future, .. }) => Some(future.clone()),
            None => None,
        };

        let future = match existing {
            Some(future) => future,
            None => {
                // Loaders may call back into the client.
                let load = loader();
                let mut cache = self.cache.borrow_mut();
                cache.generation += 1;
                let generation = cache.generation;
                let future = self.start(key.clone(), generation, load);
                cache.slots.insert(
                    key.clone(),
                    Slot::Pending {
                        generation,
                        future: future.clone(),
                    },
                );
                future
            }
        };

        let value = future.await?;
        downcast(&key, &value)
    }

    fn start<T, Fut>(&self, key: QueryKey, generation: u64, load: Fut) -> SharedLoad
    where
        T: 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let cache: Weak<RefCell<Cache>> = Rc::downgrade(&self.cache);

        async move {
            let result = load.await.map(|value| Rc::new(value) as Value);
            if let Some(cache) = cache.upgrade() {
                cache.borrow_mut().settle(&key, generation, &result);
            }
            result
        }
        .boxed_local()
        .shared()
    }

    /// Cached value for `key`, if any.
    pub fn get<T: Clone + 'static>(&self, key: &QueryKey) -> Option<T> {
        match self.cache.borrow().slots.get(key) {
            Some(Slot::Ready(value)) => value.downcast_ref::<T>().cloned(),
            _ => None,
        }
    }

    pub fn is_in_flight(&self, key: &QueryKey) -> bool {
        matches!(
            self.cache.borrow().slots.get(key),
            Some(Slot::Pending { .. })
        )
    }

    /// Drops the entry for `key`; a request still in flight will not be stored.
    pub fn invalidate(&self, key: &QueryKey) {
        self.cache.borrow_mut().slots.remove(key);
    }

    /// Drops every entry of `collection`, lists and single resources alike.
    pub fn invalidate_collection(&self, collection: Collection) {
        self.cache
            .borrow_mut()
            .slots
            .retain(|key, _| key.collection != collection);
    }
}

fn downcast<T: Clone + 'static>(key: &QueryKey, value: &Value) -> Result<T, ApiError> {
    value
        .downcast_ref::<T>()
        .cloned()
        .ok_or_else(|| ApiError::Decode(format!("cached value for {} has another type", key)))
}
