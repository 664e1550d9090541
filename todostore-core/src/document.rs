//! Typed documents layered over schema-less records.
//!
//! Records are plain field maps. This module lets callers work with their own serde types
//! instead: anything implementing [`Document`] converts to the fields of a record and back.
//! [`Todo`] is the item type of the demo application.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{from_value, to_value};

use crate::{
    error::StoreResult,
    record::{Fields, Record, RecordId, fields_from_json},
};

/// Core trait for types that can be stored as records.
///
/// A document must serialize to a JSON object. If it carries an `id` field, that field is
/// ignored on write (the store owns ids) and populated on read.
///
/// # Example
///
/// ```ignore
/// use todostore::document::Document;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct Note {
///     pub id: Option<RecordId>,
///     pub body: String,
/// }
///
/// impl Document for Note {}
/// ```
pub trait Document: Serialize + DeserializeOwned + Send + Sync + Clone + 'static {}

/// Extension trait providing conversions between documents and records.
///
/// This trait is automatically implemented for all types that implement [`Document`].
pub trait DocumentExt: Document {
    /// Converts this document to the field map of a record.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the document is not an object.
    fn to_fields(&self) -> StoreResult<Fields>;

    /// Creates a document from a stored record, id included.
    ///
    /// # Errors
    ///
    /// Returns an error if the record's fields do not fit the document type.
    fn from_record(record: Record) -> StoreResult<Self>;
}

impl<D: Document> DocumentExt for D {
    fn to_fields(&self) -> StoreResult<Fields> {
        fields_from_json(to_value(self)?)
    }

    fn from_record(record: Record) -> StoreResult<Self> {
        Ok(from_value(record.into_json())?)
    }
}

/// One item of the todo list.
///
/// `title` and `completed` are the fields the demo UI reads; anything else a caller stored
/// on the record is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Assigned by the store; `None` until the todo has been saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(flatten)]
    pub extra: Fields,
}

impl Todo {
    /// Creates an unsaved, active todo.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            completed: false,
            extra: Fields::new(),
        }
    }

    /// Sets the completion flag.
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

impl Document for Todo {}
