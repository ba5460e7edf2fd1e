use std::sync::Arc;

use serde_json::Value;

use crate::composite::{self, AndSpecification, NotSpecification, OrSpecification};
use crate::query::QueryBuilder;

/// A composable, immutable predicate with two interpretations (direct
/// evaluation against a single candidate, and translation into filter calls
/// on a query builder) plus a stable identity fingerprint.
///
/// Both interpretations must agree: the candidates satisfying
/// `is_satisfied_by` are exactly the rows a query target returns after
/// `to_query` is applied.
///
/// Implementations are immutable once constructed. Combining never mutates
/// an operand; composites hold shared `Arc` children, so a specification can
/// be reused across trees and evaluated concurrently without locking.
pub trait Specification: Send + Sync {
    /// Check whether the candidate satisfies this specification.
    ///
    /// Evaluation is total: bad operators and missing fields yield `false`,
    /// never an error.
    fn is_satisfied_by(&self, candidate: &Value) -> bool;

    /// Translate this specification into filter calls on a query builder.
    fn to_query(&self, query: &mut dyn QueryBuilder);

    /// Stable fingerprint derived from structure and parameters: equal
    /// structure always yields equal keys, independent of object identity.
    fn cache_key(&self) -> String;
}

/// Conversion into a shared specification handle.
///
/// Lets combinators and the builder accept both owned specifications and
/// already-shared `Arc<dyn Specification>` handles.
pub trait IntoSpecification {
    fn into_specification(self) -> Arc<dyn Specification>;
}

impl<S: Specification + 'static> IntoSpecification for S {
    fn into_specification(self) -> Arc<dyn Specification> {
        Arc::new(self)
    }
}

impl IntoSpecification for Arc<dyn Specification> {
    fn into_specification(self) -> Arc<dyn Specification> {
        self
    }
}

/// Combinator method syntax for any specification.
///
/// These delegate to the free `and`/`or`/`not` functions and consume the
/// receiver into a shared child; clone (or wrap in `Arc`) first to keep
/// using the original.
pub trait SpecificationExt: Specification + Sized + 'static {
    fn and(self, other: impl IntoSpecification) -> AndSpecification {
        composite::and(self, other)
    }

    fn or(self, other: impl IntoSpecification) -> OrSpecification {
        composite::or(self, other)
    }

    fn not(self) -> NotSpecification {
        composite::not(self)
    }
}

impl<S: Specification + Sized + 'static> SpecificationExt for S {}
