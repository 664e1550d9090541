//! An in-memory pseudo-database for a single todo collection.
//!
//! This crate is the core of the todostore project and provides:
//!
//! - **Records** ([`record`]) - Schema-less field maps with a store-assigned id
//! - **Typed documents** ([`document`]) - Serde types stored as records, such as
//!   [`document::Todo`]
//! - **Queries** ([`query`]) - Exact-match equality queries on top-level fields
//! - **Ids** ([`id`]) - Timestamp-derived, strictly increasing record ids
//! - **Store backend abstraction** ([`backend`]) - The namespace of named collections
//! - **Store** ([`store`]) - find / find_all / save / remove / drop_all over one collection
//! - **Async adapter** ([`shared`]) - An awaitable, lock-serialised handle over a store
//! - **Error handling** ([`error`]) - Error types and result types
//!
//! # Example
//!
//! ```ignore
//! use todostore::{prelude::*, memory::InMemoryStore};
//!
//! let store = Store::open(InMemoryStore::new(), "todos")?;
//! let todo = store.insert_document(&Todo::new("buy milk"))?;
//!
//! let active = store.find_as::<Todo>(&Query::builder().eq("completed", false).build())?;
//! assert_eq!(active, vec![todo]);
//! ```

#[allow(unused_extern_crates)]
extern crate self as todostore_core;

pub mod backend;
pub mod document;
pub mod error;
pub mod id;
pub mod query;
pub mod record;
pub mod shared;
pub mod store;
