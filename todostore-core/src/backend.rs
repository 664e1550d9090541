//! Storage backend abstraction for the store.
//!
//! A backend is the namespace that holds collections by name. [`Store`](crate::store::Store)
//! is bound to one collection of one backend; several stores may share a backend, and stores
//! opened with the same name on the same backend see the same collection.
//!
//! # Traits
//!
//! - [`StoreBackend`]: The core trait for storage backends
//! - [`StoreBackendBuilder`]: Factory trait for creating backend instances
//!
//! # Contract
//!
//! Every method is synchronous and atomic with respect to the other methods of the same
//! backend. A collection that was never created reads as empty; writes to it create it.
//! Not-found conditions are not errors: they surface as `false`, `0` or an empty `Vec`.

use std::fmt::Debug;

use crate::{
    error::StoreResult,
    id::IdGenerator,
    query::Query,
    record::{Fields, Record, RecordId},
};

/// Abstract interface for collection namespaces.
///
/// Implementers must be thread-safe; the exact locking strategy is up to the backend.
/// Operations return [`StoreResult<T>`](crate::error::StoreResult) so a backend can report
/// failures of its own machinery, but "no such record" is never an error.
pub trait StoreBackend: Send + Sync + Debug {
    /// Creates an empty collection unless one already exists under `name`.
    ///
    /// # Returns
    ///
    /// The number of records in the (possibly pre-existing) collection.
    fn create_collection(&self, name: &str) -> StoreResult<usize>;

    /// Returns `true` if a collection exists under `name`.
    fn has_collection(&self, name: &str) -> StoreResult<bool>;

    /// Lists the names of all collections.
    fn list_collections(&self) -> StoreResult<Vec<String>>;

    /// Returns every record of a collection in insertion order.
    fn all_records(&self, collection: &str) -> StoreResult<Vec<Record>>;

    /// Returns the records matching `query`, in insertion order.
    fn query_records(&self, collection: &str, query: &Query) -> StoreResult<Vec<Record>>;

    /// Appends a new record built from `fields`, with an id drawn from `ids`.
    ///
    /// The id is requested and the record appended under one critical section, so ids stay
    /// unique when several stores share a collection. The floor passed to the generator is
    /// the largest id the collection has ever held, so removed ids are never reused.
    ///
    /// # Returns
    ///
    /// The created record.
    fn insert_record(
        &self,
        collection: &str,
        fields: Fields,
        ids: &dyn IdGenerator,
    ) -> StoreResult<Record>;

    /// Shallow-merges `update` into the first record whose id is `id`.
    ///
    /// # Returns
    ///
    /// `true` if a record was updated.
    fn merge_record(&self, collection: &str, id: RecordId, update: &Fields) -> StoreResult<bool>;

    /// Removes every record whose id is `id`, keeping the others in order.
    ///
    /// # Returns
    ///
    /// The number of records removed.
    fn delete_records(&self, collection: &str, id: RecordId) -> StoreResult<usize>;

    /// Replaces the collection with an empty one. The id high-water mark is kept.
    fn clear_collection(&self, collection: &str) -> StoreResult<()>;
}

/// Factory trait for constructing backend instances.
pub trait StoreBackendBuilder {
    type Backend: StoreBackend;

    /// Builds a backend instance from this builder's configuration.
    fn build(self) -> StoreResult<Self::Backend>;
}
