//! Query evaluation for in-memory record filtering.
//!
//! This module decides whether a record satisfies an exact-match [`Query`]. Equality is
//! strict: values of different JSON types never compare equal, and a record that lacks a
//! queried field never matches.

use std::collections::HashMap;

use serde_json::Value;

use todostore_core::{
    error::StoreError,
    query::{Query, QueryVisitor},
    record::{ID_FIELD, Record},
};

/// Type-erased, comparable representation of JSON values.
///
/// Numbers are normalized to f64 so that `1` and `1.0` compare equal, as they do in the
/// JavaScript front ends this store serves. `NaN` is never equal to anything.
#[derive(Debug)]
pub(crate) enum Comparable<'a> {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Numeric value (all integers and floats normalized to f64)
    Number(f64),
    /// String value
    String(&'a str),
    /// Array of comparable values
    Array(Vec<Comparable<'a>>),
    /// Map/Object of comparable values
    Map(HashMap<&'a str, Comparable<'a>>),
}

impl<'a> From<&'a Value> for Comparable<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => Comparable::Null,
            Value::Bool(value) => Comparable::Bool(*value),
            Value::Number(number) => Comparable::Number(number.as_f64().unwrap_or(f64::NAN)),
            Value::String(value) => Comparable::String(value),
            Value::Array(arr) => Comparable::Array(
                arr
                    .iter()
                    .map(Comparable::from)
                    .collect::<Vec<_>>()
            ),
            Value::Object(map) => Comparable::Map(
                map
                    .iter()
                    .map(|(k, v)| (k.as_str(), Comparable::from(v)))
                    .collect::<HashMap<_, _>>()
            ),
        }
    }
}

impl<'a> PartialEq for Comparable<'a> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Comparable::Null, Comparable::Null) => true,
            (Comparable::Bool(a), Comparable::Bool(b)) => a == b,
            (Comparable::Number(a), Comparable::Number(b)) => a == b,
            (Comparable::String(a), Comparable::String(b)) => a == b,
            (Comparable::Array(a), Comparable::Array(b)) => a == b,
            (Comparable::Map(a), Comparable::Map(b)) => a == b,
            _ => false,
        }
    }
}


pub(crate) struct RecordEvaluator<'a> {
    record: &'a Record,
}

impl<'a> RecordEvaluator<'a> {
    pub fn new(record: &'a Record) -> Self {
        Self { record }
    }

    pub fn evaluate(&mut self, query: &Query) -> bool {
        self.visit_query(query).unwrap_or(false)
    }

    /// Returns clones of the records matching `query`, preserving their order.
    pub fn filter_records(
        records: impl IntoIterator<Item = &'a Record>,
        query: &Query,
    ) -> Vec<Record> {
        records
            .into_iter()
            .filter(|record| RecordEvaluator::new(record).evaluate(query))
            .cloned()
            .collect::<Vec<_>>()
    }
}

impl<'a> QueryVisitor for RecordEvaluator<'a> {
    type Error = StoreError;

    fn visit_eq(&mut self, field: &str, value: &Value) -> Result<bool, Self::Error> {
        if field == ID_FIELD {
            return Ok(Comparable::Number(self.record.id.value() as f64) == Comparable::from(value));
        }

        Ok(match self.record.get(field) {
            Some(field_value) => Comparable::from(field_value) == Comparable::from(value),
            None => false,
        })
    }
}
