//! Records, record identifiers and field mappings.
//!
//! A [`Record`] is an open-ended mapping of field names to JSON values plus one reserved
//! field, `id`, which the store assigns on creation and never changes afterwards. Records
//! serialize flat, with the id alongside the other fields:
//!
//! ```ignore
//! { "title": "buy milk", "completed": false, "id": 1700000000000 }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{StoreError, StoreResult};

/// Name of the reserved identifier field.
pub const ID_FIELD: &str = "id";

/// The open-ended field mapping of a record.
pub type Fields = Map<String, Value>;

/// Converts a JSON object into a field mapping.
///
/// # Errors
///
/// Returns [`StoreError::InvalidDocument`] if `value` is not an object.
pub fn fields_from_json(value: Value) -> StoreResult<Fields> {
    match value {
        Value::Object(fields) => Ok(fields),
        other => Err(StoreError::InvalidDocument(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}

/// Identifier of a record within its collection.
///
/// Ids are derived from the millisecond epoch at creation time. Zero is a valid id; absence
/// is expressed with `Option<RecordId>`, never with a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    /// Returns the raw numeric value of this id.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId(value)
    }
}

impl From<RecordId> for Value {
    fn from(id: RecordId) -> Self {
        Value::from(id.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single stored item: its id plus every other field.
///
/// The `fields` map never contains an `id` key. Constructors strip it so the reserved field
/// cannot drift from [`Record::id`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The store-assigned identifier.
    pub id: RecordId,
    /// All other fields of the record.
    #[serde(flatten)]
    pub fields: Fields,
}

impl Record {
    /// Creates a record from an id and a field mapping, discarding any `id` key in `fields`.
    pub fn new(id: RecordId, mut fields: Fields) -> Self {
        fields.remove(ID_FIELD);

        Self { id, fields }
    }

    /// Returns the value of a non-reserved field, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Shallow-merges `update` into this record.
    ///
    /// Every key of `update` overwrites the record's value for that key; keys not present in
    /// `update` are left untouched. An `id` key in `update` is ignored.
    pub fn merge(&mut self, update: &Fields) {
        for (key, value) in update {
            if key == ID_FIELD {
                continue;
            }

            self.fields.insert(key.clone(), value.clone());
        }
    }

    /// Converts this record into a single JSON object including the `id` field.
    pub fn into_json(self) -> Value {
        let mut object = self.fields;
        object.insert(ID_FIELD.to_string(), self.id.into());

        Value::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        fields_from_json(value).unwrap()
    }

    #[test]
    fn new_strips_reserved_id() {
        let record = Record::new(RecordId(7), fields(json!({ "title": "a", "id": 99 })));

        assert_eq!(record.id, RecordId(7));
        assert!(record.get(ID_FIELD).is_none());
        assert_eq!(record.get("title"), Some(&json!("a")));
    }

    #[test]
    fn merge_overwrites_only_named_fields() {
        let mut record = Record::new(
            RecordId(1),
            fields(json!({ "title": "a", "completed": false })),
        );

        record.merge(&fields(json!({ "completed": true, "id": 42 })));

        assert_eq!(record.id, RecordId(1));
        assert_eq!(record.get("title"), Some(&json!("a")));
        assert_eq!(record.get("completed"), Some(&json!(true)));
    }

    #[test]
    fn fields_from_json_requires_object() {
        assert!(fields_from_json(json!({})).unwrap().is_empty());
        assert!(matches!(fields_from_json(json!(1)), Err(StoreError::InvalidDocument(_))));
    }

    #[test]
    fn serializes_flat() {
        let record = Record::new(RecordId(5), fields(json!({ "title": "a" })));

        assert_eq!(serde_json::to_value(&record).unwrap(), json!({ "title": "a", "id": 5 }));
        assert_eq!(record.clone().into_json(), json!({ "title": "a", "id": 5 }));

        let parsed: Record = serde_json::from_value(json!({ "id": 5, "title": "a" })).unwrap();
        assert_eq!(parsed, record);
    }
}
