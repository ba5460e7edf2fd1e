//! AND / OR / NOT combinators.
//!
//! Composites are sibling implementations of [`Specification`], built with
//! the free functions below (or the method syntax on `SpecificationExt`).
//! They hold shared `Arc` children and never mutate their operands.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::cache_key::derive_cache_key;
use crate::query::QueryBuilder;
use crate::specification::{IntoSpecification, Specification};

/// Both children must be satisfied.
pub fn and(left: impl IntoSpecification, right: impl IntoSpecification) -> AndSpecification {
    AndSpecification {
        left: left.into_specification(),
        right: right.into_specification(),
    }
}

/// Either child may be satisfied.
pub fn or(left: impl IntoSpecification, right: impl IntoSpecification) -> OrSpecification {
    OrSpecification {
        left: left.into_specification(),
        right: right.into_specification(),
    }
}

/// The inner specification must not be satisfied.
pub fn not(inner: impl IntoSpecification) -> NotSpecification {
    NotSpecification {
        inner: inner.into_specification(),
    }
}

#[derive(Clone)]
pub struct AndSpecification {
    left: Arc<dyn Specification>,
    right: Arc<dyn Specification>,
}

impl Specification for AndSpecification {
    fn is_satisfied_by(&self, candidate: &Value) -> bool {
        self.left.is_satisfied_by(candidate) && self.right.is_satisfied_by(candidate)
    }

    fn to_query(&self, query: &mut dyn QueryBuilder) {
        // Sequential filter calls are conjunctive by the builder contract.
        self.left.to_query(query);
        self.right.to_query(query);
    }

    fn cache_key(&self) -> String {
        derive_cache_key(
            "and",
            json!({
                "left": self.left.cache_key(),
                "right": self.right.cache_key(),
            }),
        )
    }
}

#[derive(Clone)]
pub struct OrSpecification {
    left: Arc<dyn Specification>,
    right: Arc<dyn Specification>,
}

impl Specification for OrSpecification {
    fn is_satisfied_by(&self, candidate: &Value) -> bool {
        self.left.is_satisfied_by(candidate) || self.right.is_satisfied_by(candidate)
    }

    fn to_query(&self, query: &mut dyn QueryBuilder) {
        // Each branch gets its own conjunctive sub-scope so a composite
        // branch stays a single disjunct; bare sequential calls would
        // silently degrade OR into AND at the storage layer.
        let left = &self.left;
        let right = &self.right;
        query.grouped_or(&mut |scope| {
            scope.grouped(&mut |branch| left.to_query(branch));
            scope.grouped(&mut |branch| right.to_query(branch));
        });
    }

    fn cache_key(&self) -> String {
        derive_cache_key(
            "or",
            json!({
                "left": self.left.cache_key(),
                "right": self.right.cache_key(),
            }),
        )
    }
}

#[derive(Clone)]
pub struct NotSpecification {
    inner: Arc<dyn Specification>,
}

impl Specification for NotSpecification {
    fn is_satisfied_by(&self, candidate: &Value) -> bool {
        !self.inner.is_satisfied_by(candidate)
    }

    fn to_query(&self, query: &mut dyn QueryBuilder) {
        let inner = &self.inner;
        query.negated_scope(&mut |scope| inner.to_query(scope));
    }

    fn cache_key(&self) -> String {
        derive_cache_key("not", json!({ "inner": self.inner.cache_key() }))
    }
}
