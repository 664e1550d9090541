//! In-memory storage backend for todostore.
//!
//! This crate provides the namespace that holds collections by name, implementing the
//! `StoreBackend` trait. State lives only in process memory for as long as the backend (or
//! any clone of it) is alive.
//!
//! # Features
//!
//! - **Shared namespace** - Clones share the same collections
//! - **Insertion order** - Collections are ordered lists, scanned linearly
//! - **Strict equality** - Exact-match queries with JavaScript-like number comparison
//!
//! # Quick Start
//!
//! ```ignore
//! use todostore::{prelude::*, memory::InMemoryStore};
//!
//! let store = Store::open(InMemoryStore::new(), "todos")?;
//! store.insert_document(&Todo::new("buy milk"))?;
//!
//! assert_eq!(store.find_all()?.len(), 1);
//! ```

#[allow(unused_extern_crates)]
extern crate self as todostore_memory;

pub mod store;
pub mod evaluator;

pub use store::{InMemoryStore, InMemoryStoreBuilder};
