//! In-memory storage implementation for stores.
//!
//! This module provides the namespace that holds collections by name. Each collection is a
//! plain `Vec<Record>` in insertion order, scanned linearly on every query, plus the highest
//! id it has ever assigned so that removed ids are never handed out again.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use tracing::trace;

use todostore_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    error::{StoreError, StoreResult},
    id::IdGenerator,
    query::Query,
    record::{Fields, Record, RecordId},
};

use crate::evaluator::RecordEvaluator;

type CollectionMap = HashMap<String, Collection>;

/// Records of one collection and its id high-water mark.
#[derive(Debug, Default, Clone)]
struct Collection {
    records: Vec<Record>,
    /// Highest id ever held; survives removals and `clear_collection`.
    last_id: Option<RecordId>,
}

impl Collection {
    fn seeded(records: Vec<Record>) -> Self {
        let last_id = records.iter().map(|record| record.id).max();

        Self { records, last_id }
    }
}


/// Thread-safe in-memory namespace of collections.
///
/// This struct implements the [`StoreBackend`] trait on top of a `HashMap` from collection
/// name to the ordered list of its records.
///
/// # Thread Safety
///
/// `InMemoryStore` is cloneable and uses an `Arc`-wrapped internal state. Multiple clones of
/// the same instance share the same underlying data, so two stores opened on clones of one
/// backend with the same collection name operate on the same records. Every backend call
/// holds the lock for its whole duration.
///
/// # Example
///
/// ```ignore
/// use todostore_memory::InMemoryStore;
/// use todostore::store::Store;
///
/// let backend = InMemoryStore::new();
/// let first = Store::open(backend.clone(), "todos")?;
/// let second = Store::open(backend, "todos")?;
///
/// first.insert(fields_from_json(json!({ "title": "a" }))?)?;
/// assert_eq!(second.find_all()?.len(), 1);
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryStore {
    /// collection_name -> records in insertion order
    collections: Arc<RwLock<CollectionMap>>,
}

impl InMemoryStore {
    /// Creates a new, empty namespace.
    pub fn new() -> Self {
        Self {
            collections: Arc::new(RwLock::new(CollectionMap::new())),
        }
    }

    /// Creates a builder for constructing an `InMemoryStore` with seeded collections.
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, CollectionMap>> {
        self.collections
            .read()
            .map_err(|err| StoreError::Backend(err.to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, CollectionMap>> {
        self.collections
            .write()
            .map_err(|err| StoreError::Backend(err.to_string()))
    }
}


impl StoreBackend for InMemoryStore {
    fn create_collection(&self, name: &str) -> StoreResult<usize> {
        Ok(
            self.write()?
                .entry(name.to_string())
                .or_default()
                .records
                .len()
        )
    }

    fn has_collection(&self, name: &str) -> StoreResult<bool> {
        Ok(self.read()?.contains_key(name))
    }

    fn list_collections(&self) -> StoreResult<Vec<String>> {
        Ok(
            self.read()?
                .keys()
                .cloned()
                .collect()
        )
    }

    fn all_records(&self, collection: &str) -> StoreResult<Vec<Record>> {
        Ok(
            self.read()?
                .get(collection)
                .map(|entry| entry.records.clone())
                .unwrap_or_default()
        )
    }

    fn query_records(&self, collection: &str, query: &Query) -> StoreResult<Vec<Record>> {
        let collections = self.read()?;
        let entry = match collections.get(collection) {
            Some(entry) => entry,
            None => return Ok(vec![]),
        };

        Ok(RecordEvaluator::filter_records(&entry.records, query))
    }

    fn insert_record(
        &self,
        collection: &str,
        fields: Fields,
        ids: &dyn IdGenerator,
    ) -> StoreResult<Record> {
        let mut collections = self.write()?;
        let entry = collections
            .entry(collection.to_string())
            .or_default();

        let floor = entry.last_id;
        let id = ids.next_id(floor);
        trace!(collection, ?floor, %id, "assigned record id");

        let record = Record::new(id, fields);
        entry.records.push(record.clone());
        entry.last_id = entry.last_id.max(Some(id));

        Ok(record)
    }

    fn merge_record(&self, collection: &str, id: RecordId, update: &Fields) -> StoreResult<bool> {
        let mut collections = self.write()?;

        match collections
            .get_mut(collection)
            .and_then(|entry| entry.records.iter_mut().find(|record| record.id == id))
        {
            Some(record) => {
                record.merge(update);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_records(&self, collection: &str, id: RecordId) -> StoreResult<usize> {
        let mut collections = self.write()?;
        let records = match collections.get_mut(collection) {
            Some(entry) => &mut entry.records,
            None => return Ok(0),
        };

        let before = records.len();
        records.retain(|record| record.id != id);

        Ok(before - records.len())
    }

    fn clear_collection(&self, collection: &str) -> StoreResult<()> {
        self.write()?
            .entry(collection.to_string())
            .or_default()
            .records
            .clear();

        Ok(())
    }
}


/// Builder for constructing [`InMemoryStore`] instances.
///
/// # Example
///
/// ```ignore
/// use todostore_memory::InMemoryStore;
/// use todostore::backend::StoreBackendBuilder;
///
/// let backend = InMemoryStore::builder()
///     .collection("todos", existing_records)
///     .build()?;
/// ```
#[derive(Default, Debug)]
pub struct InMemoryStoreBuilder {
    seed: HashMap<String, Vec<Record>>,
}

impl InMemoryStoreBuilder {
    /// Pre-populates a collection. Records keep the given order; a later call for the same
    /// name replaces the earlier one.
    pub fn collection(mut self, name: impl Into<String>, records: Vec<Record>) -> Self {
        self.seed.insert(name.into(), records);
        self
    }
}

impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    /// Builds the backend.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if a seeded collection contains the same id twice.
    fn build(self) -> StoreResult<Self::Backend> {
        for (name, records) in &self.seed {
            let mut ids = records.iter().map(|record| record.id).collect::<Vec<_>>();
            ids.sort_unstable();

            if let Some(pair) = ids.windows(2).find(|pair| pair[0] == pair[1]) {
                return Err(StoreError::Backend(format!(
                    "duplicate id {} in seeded collection {name}",
                    pair[0]
                )));
            }
        }

        let collections = self
            .seed
            .into_iter()
            .map(|(name, records)| (name, Collection::seeded(records)))
            .collect::<CollectionMap>();

        Ok(InMemoryStore {
            collections: Arc::new(RwLock::new(collections)),
        })
    }
}
