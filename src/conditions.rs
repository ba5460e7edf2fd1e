//! Atomic field-level specifications.
//!
//! Each condition extracts a value at a dot-addressable field path and
//! applies one operator family. Evaluation is total: a missing field, a
//! null candidate, or an unrecognized operator yields no match rather than
//! an error.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::cache_key::derive_cache_key;
use crate::compare;
use crate::operator::Operator;
use crate::path::lookup_path;
use crate::query::QueryBuilder;
use crate::specification::{IntoSpecification, Specification};

/// Scalar comparison against a single field: `=`, `!=`, `>`, `>=`, `<`,
/// `<=`, `like`, or an unrecognized operator that matches nothing.
///
/// `=`/`!=` use the loose equality discipline documented in the crate:
/// numbers and numeric strings coerce, everything else compares
/// structurally.
#[derive(Debug, Clone)]
pub struct WhereSpecification {
    field: String,
    operator: Operator,
    value: Value,
}

impl WhereSpecification {
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<Operator>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

impl Specification for WhereSpecification {
    fn is_satisfied_by(&self, candidate: &Value) -> bool {
        compare::evaluate_compare(
            &self.operator,
            lookup_path(candidate, &self.field),
            &self.value,
        )
    }

    fn to_query(&self, query: &mut dyn QueryBuilder) {
        query.filter_compare(&self.field, &self.operator, &self.value);
    }

    fn cache_key(&self) -> String {
        derive_cache_key(
            "where",
            json!({
                "field": self.field,
                "operator": self.operator,
                "value": self.value,
            }),
        )
    }
}

/// Membership in a value set, using strict equality (deliberately stricter
/// than `=`). An empty set never matches.
#[derive(Debug, Clone)]
pub struct WhereInSpecification {
    field: String,
    values: Vec<Value>,
}

impl WhereInSpecification {
    pub fn new(
        field: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<Value>>,
    ) -> Self {
        Self {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl Specification for WhereInSpecification {
    fn is_satisfied_by(&self, candidate: &Value) -> bool {
        compare::evaluate_in(lookup_path(candidate, &self.field), &self.values)
    }

    fn to_query(&self, query: &mut dyn QueryBuilder) {
        query.filter_in(&self.field, &self.values);
    }

    fn cache_key(&self) -> String {
        derive_cache_key(
            "where_in",
            json!({
                "field": self.field,
                "values": self.values,
            }),
        )
    }
}

/// Inclusive range check: `min <= value <= max`. An inverted range
/// (`min > max`) matches nothing instead of erroring.
#[derive(Debug, Clone)]
pub struct WhereBetweenSpecification {
    field: String,
    min: Value,
    max: Value,
}

impl WhereBetweenSpecification {
    pub fn new(field: impl Into<String>, min: impl Into<Value>, max: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

impl Specification for WhereBetweenSpecification {
    fn is_satisfied_by(&self, candidate: &Value) -> bool {
        compare::evaluate_between(
            lookup_path(candidate, &self.field),
            &self.min,
            &self.max,
        )
    }

    fn to_query(&self, query: &mut dyn QueryBuilder) {
        query.filter_between(&self.field, &self.min, &self.max);
    }

    fn cache_key(&self) -> String {
        derive_cache_key(
            "where_between",
            json!({
                "field": self.field,
                "min": self.min,
                "max": self.max,
            }),
        )
    }
}

/// Satisfied when the field is absent or explicitly null. This is the one
/// condition absence satisfies.
#[derive(Debug, Clone)]
pub struct WhereNullSpecification {
    field: String,
}

impl WhereNullSpecification {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl Specification for WhereNullSpecification {
    fn is_satisfied_by(&self, candidate: &Value) -> bool {
        compare::evaluate_null(lookup_path(candidate, &self.field))
    }

    fn to_query(&self, query: &mut dyn QueryBuilder) {
        query.filter_null(&self.field);
    }

    fn cache_key(&self) -> String {
        derive_cache_key("where_null", json!({ "field": self.field }))
    }
}

/// Satisfied when the field is present with a non-null value.
#[derive(Debug, Clone)]
pub struct WhereNotNullSpecification {
    field: String,
}

impl WhereNotNullSpecification {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl Specification for WhereNotNullSpecification {
    fn is_satisfied_by(&self, candidate: &Value) -> bool {
        compare::evaluate_not_null(lookup_path(candidate, &self.field))
    }

    fn to_query(&self, query: &mut dyn QueryBuilder) {
        query.filter_not_null(&self.field);
    }

    fn cache_key(&self) -> String {
        derive_cache_key("where_not_null", json!({ "field": self.field }))
    }
}

/// Applies an inner specification to a relation value. A missing or null
/// relation matches nothing; an array relation matches when any element
/// satisfies the inner specification; any other value is evaluated
/// directly.
#[derive(Clone)]
pub struct WhereHasSpecification {
    relation: String,
    specification: Arc<dyn Specification>,
}

impl WhereHasSpecification {
    pub fn new(relation: impl Into<String>, specification: impl IntoSpecification) -> Self {
        Self {
            relation: relation.into(),
            specification: specification.into_specification(),
        }
    }
}

impl Specification for WhereHasSpecification {
    fn is_satisfied_by(&self, candidate: &Value) -> bool {
        match lookup_path(candidate, &self.relation) {
            None | Some(Value::Null) => false,
            Some(Value::Array(items)) => items
                .iter()
                .any(|item| self.specification.is_satisfied_by(item)),
            Some(related) => self.specification.is_satisfied_by(related),
        }
    }

    fn to_query(&self, query: &mut dyn QueryBuilder) {
        let specification = &self.specification;
        query.filter_has(&self.relation, &mut |scope| specification.to_query(scope));
    }

    fn cache_key(&self) -> String {
        derive_cache_key(
            "where_has",
            json!({
                "relation": self.relation,
                "specification": self.specification.cache_key(),
            }),
        )
    }
}
