//! The store: find, save, remove and drop over one named collection.
//!
//! A [`Store`] is bound to a backend and a collection name fixed at construction. Opening a
//! store creates the collection if the backend does not have it yet; an existing collection
//! is reused as-is.
//!
//! # Example
//!
//! ```ignore
//! use todostore::{prelude::*, memory::InMemoryStore};
//! use serde_json::json;
//!
//! let store = Store::open(InMemoryStore::new(), "todos")?;
//!
//! let created = store.save(fields_from_json(json!({ "title": "a" }))?, None)?;
//! let id = created[0].id;
//!
//! let all = store.save(fields_from_json(json!({ "completed": true }))?, Some(id))?;
//! assert_eq!(all.len(), 1);
//! ```

use serde::Deserialize;
use tracing::debug;

use crate::{
    backend::StoreBackend,
    document::{Document, DocumentExt},
    error::StoreResult,
    id::{IdGenerator, SystemClock, TimestampIds},
    query::Query,
    record::{Fields, Record, RecordId},
};

/// Collection name used when none is configured.
pub const DEFAULT_COLLECTION: &str = "todos";

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Name of the collection the store is bound to.
    pub collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

/// A store bound to one collection of a backend.
///
/// All operations are synchronous and run to completion before returning; each returns the
/// resulting records directly rather than handing them to a completion callback.
///
/// # Type Parameters
///
/// * `B` - The backend implementation type
#[derive(Debug)]
pub struct Store<B: StoreBackend> {
    backend: B,
    name: String,
    ids: Box<dyn IdGenerator>,
}

impl<B: StoreBackend> Store<B> {
    /// Opens the collection `name` on `backend`, creating it empty if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn open(backend: B, name: impl Into<String>) -> StoreResult<Self> {
        Self::builder(backend).collection(name).build()
    }

    /// Creates a builder for a store over `backend`.
    pub fn builder(backend: B) -> StoreBuilder<B> {
        StoreBuilder::new(backend)
    }

    /// Returns the name of the collection this store is bound to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a reference to the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Finds the records where every criterion of `query` holds.
    ///
    /// Records missing a queried field do not match. The empty query returns the whole
    /// collection. A query matching nothing returns an empty list.
    pub fn find(&self, query: &Query) -> StoreResult<Vec<Record>> {
        let records = self.backend.query_records(&self.name, query)?;
        debug!(
            collection = %self.name,
            criteria = query.criteria.len(),
            matched = records.len(),
            "find"
        );

        Ok(records)
    }

    /// Returns the entire collection in insertion order.
    pub fn find_all(&self) -> StoreResult<Vec<Record>> {
        let records = self.backend.all_records(&self.name)?;
        debug!(collection = %self.name, records = records.len(), "find_all");

        Ok(records)
    }

    /// Creates or updates a record.
    ///
    /// - With `Some(id)`: merges `data` into the record with that id and returns the entire
    ///   collection. If no record has that id nothing changes, and the unchanged collection is
    ///   still returned.
    /// - With `None`: assigns a fresh id, appends the record and returns a one-element list
    ///   holding it.
    pub fn save(&self, data: Fields, id: Option<RecordId>) -> StoreResult<Vec<Record>> {
        match id {
            Some(id) => self.update(id, data),
            None => Ok(vec![self.insert(data)?]),
        }
    }

    /// Appends a new record with a freshly assigned id and returns it.
    ///
    /// An `id` key in `data` is discarded.
    pub fn insert(&self, data: Fields) -> StoreResult<Record> {
        let record = self
            .backend
            .insert_record(&self.name, data, self.ids.as_ref())?;
        debug!(collection = %self.name, id = %record.id, records = 1, "inserted record");

        Ok(record)
    }

    /// Shallow-merges `data` into the record with id `id` and returns the entire collection.
    ///
    /// Fields absent from `data` are untouched; an `id` key in `data` is ignored.
    pub fn update(&self, id: RecordId, data: Fields) -> StoreResult<Vec<Record>> {
        let updated = self.backend.merge_record(&self.name, id, &data)?;
        let records = self.backend.all_records(&self.name)?;
        debug!(collection = %self.name, %id, updated, records = records.len(), "update");

        Ok(records)
    }

    /// Removes the record with id `id` and returns the remaining collection.
    ///
    /// Removing an unknown id returns the collection unchanged.
    pub fn remove(&self, id: RecordId) -> StoreResult<Vec<Record>> {
        let removed = self.backend.delete_records(&self.name, id)?;
        let records = self.backend.all_records(&self.name)?;
        debug!(collection = %self.name, %id, removed, records = records.len(), "remove");

        Ok(records)
    }

    /// Replaces the collection with an empty one and returns it.
    pub fn drop_all(&self) -> StoreResult<Vec<Record>> {
        self.backend.clear_collection(&self.name)?;
        let records = self.backend.all_records(&self.name)?;
        debug!(collection = %self.name, records = records.len(), "dropped all records");

        Ok(records)
    }

    /// Typed variant of [`Store::find`].
    pub fn find_as<D: Document>(&self, query: &Query) -> StoreResult<Vec<D>> {
        self.find(query)?
            .into_iter()
            .map(<D as DocumentExt>::from_record)
            .collect()
    }

    /// Typed variant of [`Store::find_all`].
    pub fn find_all_as<D: Document>(&self) -> StoreResult<Vec<D>> {
        self.find_all()?
            .into_iter()
            .map(<D as DocumentExt>::from_record)
            .collect()
    }

    /// Stores `document` as a new record and returns it with its assigned id.
    pub fn insert_document<D: Document>(&self, document: &D) -> StoreResult<D> {
        <D as DocumentExt>::from_record(self.insert(document.to_fields()?)?)
    }

    /// Merges the fields of `document` into the record with id `id`.
    ///
    /// Returns the updated document, or `None` if no record has that id.
    pub fn update_document<D: Document>(
        &self,
        id: RecordId,
        document: &D,
    ) -> StoreResult<Option<D>> {
        self.update(id, document.to_fields()?)?
            .into_iter()
            .find(|record| record.id == id)
            .map(<D as DocumentExt>::from_record)
            .transpose()
    }
}

/// Builder for [`Store`] instances.
///
/// # Example
///
/// ```ignore
/// let store = Store::builder(InMemoryStore::new())
///     .collection("todos-vanilla")
///     .build()?;
/// ```
#[derive(Debug)]
pub struct StoreBuilder<B: StoreBackend> {
    backend: B,
    config: StoreConfig,
    ids: Box<dyn IdGenerator>,
}

impl<B: StoreBackend> StoreBuilder<B> {
    /// Creates a builder with the default configuration and timestamp ids.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            config: StoreConfig::default(),
            ids: Box::new(TimestampIds::new(SystemClock)),
        }
    }

    /// Sets the collection name.
    pub fn collection(mut self, name: impl Into<String>) -> Self {
        self.config.collection = name.into();
        self
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the id generator used for new records.
    pub fn id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Opens the configured collection, creating it if the backend does not have it.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn build(self) -> StoreResult<Store<B>> {
        let StoreBuilder { backend, config, ids } = self;

        let existing = backend.create_collection(&config.collection)?;
        debug!(collection = %config.collection, records = existing, "opened store");

        Ok(Store {
            backend,
            name: config.collection,
            ids,
        })
    }
}
