//! Async adapter over [`Store`] for UI layers that expect awaitable calls.
//!
//! The store itself is synchronous. [`SharedStore`] puts it behind an async-aware read-write
//! lock so every operation runs as one unit even when callers on several tasks share the
//! store, and exposes it through the [`TodoRepository`] trait.

use std::sync::Arc;

use async_trait::async_trait;
use mea::rwlock::RwLock;

use crate::{
    backend::StoreBackend,
    error::StoreResult,
    query::Query,
    record::{Fields, Record, RecordId},
    store::Store,
};

/// Awaitable counterpart of the [`Store`] operations.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// See [`Store::find`].
    async fn find(&self, query: Query) -> StoreResult<Vec<Record>>;

    /// See [`Store::find_all`].
    async fn find_all(&self) -> StoreResult<Vec<Record>>;

    /// See [`Store::save`].
    async fn save(&self, data: Fields, id: Option<RecordId>) -> StoreResult<Vec<Record>>;

    /// See [`Store::remove`].
    async fn remove(&self, id: RecordId) -> StoreResult<Vec<Record>>;

    /// See [`Store::drop_all`].
    async fn drop_all(&self) -> StoreResult<Vec<Record>>;
}

/// A cloneable handle serialising access to one [`Store`].
///
/// Reads (`find`, `find_all`) may run side by side; writes are exclusive.
#[derive(Debug)]
pub struct SharedStore<B: StoreBackend> {
    inner: Arc<RwLock<Store<B>>>,
}

impl<B: StoreBackend> Clone for SharedStore<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: StoreBackend> SharedStore<B> {
    pub fn new(store: Store<B>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Returns the name of the wrapped store's collection.
    pub async fn name(&self) -> String {
        self.inner.read().await.name().to_string()
    }
}

impl<B: StoreBackend> From<Store<B>> for SharedStore<B> {
    fn from(store: Store<B>) -> Self {
        SharedStore::new(store)
    }
}

#[async_trait]
impl<B: StoreBackend> TodoRepository for SharedStore<B> {
    async fn find(&self, query: Query) -> StoreResult<Vec<Record>> {
        self.inner.read().await.find(&query)
    }

    async fn find_all(&self) -> StoreResult<Vec<Record>> {
        self.inner.read().await.find_all()
    }

    async fn save(&self, data: Fields, id: Option<RecordId>) -> StoreResult<Vec<Record>> {
        self.inner.write().await.save(data, id)
    }

    async fn remove(&self, id: RecordId) -> StoreResult<Vec<Record>> {
        self.inner.write().await.remove(id)
    }

    async fn drop_all(&self) -> StoreResult<Vec<Record>> {
        self.inner.write().await.drop_all()
    }
}
