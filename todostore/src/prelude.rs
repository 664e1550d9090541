//! Convenient re-exports of commonly used types from todostore.
//!
//! ```ignore
//! use todostore::prelude::*;
//! ```

pub use todostore_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::{Document, DocumentExt, Todo},
    error::{StoreError, StoreResult},
    id::{Clock, IdGenerator, SystemClock, TimestampIds},
    query::{Criterion, Query, QueryBuilder, QueryVisitor},
    record::{Fields, ID_FIELD, Record, RecordId, fields_from_json},
    shared::{SharedStore, TodoRepository},
    store::{Store, StoreBuilder, StoreConfig},
};
