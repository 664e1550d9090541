//! Main todostore crate providing an in-memory todo store.
//!
//! This crate is the primary entry point for users of todostore. It re-exports the core
//! types from the sub-crates and the in-memory backend.
//!
//! # Features
//!
//! - **Schema-less records** - Any JSON object can be saved; the store only owns `id`
//! - **Exact-match queries** - Find records by strict equality on top-level fields
//! - **Upsert semantics** - `save` creates without an id and merges with one
//! - **Typed documents** - Work with [`document::Todo`] or your own serde types
//! - **Async adapter** - [`shared::SharedStore`] for UI layers that await their data
//!
//! # Quick Start
//!
//! ```ignore
//! use todostore::{prelude::*, memory::InMemoryStore, serde_json::json};
//!
//! fn main() -> StoreResult<()> {
//!     let store = Store::open(InMemoryStore::new(), "todos")?;
//!
//!     // Create: no id, so a fresh one is assigned and only the new record comes back
//!     let todo = fields_from_json(json!({ "title": "a", "completed": false }))?;
//!     let created = store.save(todo, None)?;
//!     let id = created[0].id;
//!
//!     // Update: merges the given fields and returns the whole collection
//!     let all = store.save(fields_from_json(json!({ "completed": true }))?, Some(id))?;
//!     assert_eq!(all[0].get("completed"), Some(&json!(true)));
//!
//!     // Query by exact match
//!     let done = store.find(&Query::builder().eq("completed", true).build())?;
//!     assert_eq!(done.len(), 1);
//!
//!     // Remove one, then drop everything
//!     store.remove(id)?;
//!     assert!(store.drop_all()?.is_empty());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Async usage
//!
//! ```ignore
//! use todostore::{prelude::*, memory::InMemoryStore};
//!
//! let repo = SharedStore::new(Store::open(InMemoryStore::new(), "todos")?);
//! let todos = repo.find_all().await?;
//! ```
//!
//! # Backends
//!
//! - [`memory`] - The in-memory namespace of collections

pub mod prelude;

pub use todostore_core::{backend, document, error, id, query, record, shared, store};

// Re-export JSON types for convenience
pub use serde_json;

/// In-memory storage backend implementations.
pub mod memory {
    pub use todostore_memory::{InMemoryStore, InMemoryStoreBuilder};
}
