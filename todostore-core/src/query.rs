//! Query construction for exact-match lookups.
//!
//! A [`Query`] is a conjunction of equality criteria on top-level fields. The empty query
//! matches every record. There are no other operators: no ranges, no negation, no nesting.
//!
//! ```ignore
//! use todostore::query::Query;
//!
//! let active = Query::builder()
//!     .eq("completed", false)
//!     .build();
//! ```

use serde_json::Value;

use crate::{
    error::{StoreError, StoreResult},
    record::Fields,
};

/// A single `field == value` criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    /// The field name to compare. `id` compares against the record id.
    pub field: String,
    /// The value the field must strictly equal.
    pub value: Value,
}

/// An exact-match query: every criterion must hold for a record to match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    /// The equality criteria, evaluated in order.
    pub criteria: Vec<Criterion>,
}

impl Query {
    /// Creates the empty query, which matches every record.
    pub fn all() -> Self {
        Query::default()
    }

    /// Creates a new query builder for fluent construction.
    pub fn builder() -> QueryBuilder {
        QueryBuilder::new()
    }

    /// Builds a query from a JSON object such as `{"completed": true}`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidQuery`] if `value` is not an object.
    pub fn from_json(value: Value) -> StoreResult<Self> {
        match value {
            Value::Object(map) => Ok(Query::from(map)),
            other => Err(StoreError::InvalidQuery(format!(
                "expected an object, got {other}"
            ))),
        }
    }

    /// Returns `true` if this query has no criteria.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

impl From<Fields> for Query {
    fn from(fields: Fields) -> Self {
        Query {
            criteria: fields
                .into_iter()
                .map(|(field, value)| Criterion { field, value })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    query: Query,
}

impl QueryBuilder {
    /// Creates a new query builder.
    pub fn new() -> Self {
        QueryBuilder { query: Query::default() }
    }

    /// Adds an equality criterion.
    ///
    /// # Arguments
    ///
    /// * `field` - The field name to compare
    /// * `value` - The value the field must equal
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query.criteria.push(Criterion {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Builds and returns the final query.
    pub fn build(self) -> Query {
        self.query
    }
}

/// Visitor over the criteria of a query.
///
/// Backends implement [`QueryVisitor::visit_eq`] for their own record representation;
/// [`QueryVisitor::visit_query`] combines the criteria with logical AND and stops at the
/// first criterion that does not hold.
pub trait QueryVisitor {
    type Error: Into<StoreError>;

    fn visit_eq(&mut self, field: &str, value: &Value) -> Result<bool, Self::Error>;

    fn visit_query(&mut self, query: &Query) -> Result<bool, Self::Error> {
        for criterion in &query.criteria {
            if !self.visit_eq(&criterion.field, &criterion.value)? {
                return Ok(false);
            }
        }

        Ok(true)
    }
}
