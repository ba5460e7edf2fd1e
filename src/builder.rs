//! Fluent accumulation of conditions into a specification tree.

use std::sync::Arc;

use serde_json::Value;

use crate::composite;
use crate::conditions::{
    WhereBetweenSpecification, WhereHasSpecification, WhereInSpecification,
    WhereNotNullSpecification, WhereNullSpecification, WhereSpecification,
};
use crate::error::SpecificationError;
use crate::operator::Operator;
use crate::specification::{IntoSpecification, Specification};

/// How an entry joins the accumulated specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    And,
    Or,
}

/// Accumulates `(connector, specification)` entries and compiles them into a
/// composite tree with a left fold, so entries compose in the order they
/// were appended: `where_eq(X).or().where_eq(Y).where_eq(Z)` builds
/// `(X OR Y) AND Z`.
///
/// All methods consume and return the builder; [`build`](Self::build)
/// consumes it for good and fails on an empty builder rather than producing
/// a match-everything or match-nothing specification.
pub struct SpecificationBuilder {
    entries: Vec<(Connector, Arc<dyn Specification>)>,
    next_connector: Connector,
}

impl SpecificationBuilder {
    pub fn create() -> Self {
        Self {
            entries: Vec::new(),
            next_connector: Connector::And,
        }
    }

    /// Join the next condition with OR instead of AND. Applies to the next
    /// entry only; the connector resets to AND afterwards.
    pub fn or(mut self) -> Self {
        self.next_connector = Connector::Or;
        self
    }

    pub fn where_(
        self,
        field: impl Into<String>,
        operator: impl Into<Operator>,
        value: impl Into<Value>,
    ) -> Self {
        self.where_specification(WhereSpecification::new(field, operator, value))
    }

    /// The operator-defaulted form of [`where_`](Self::where_): equality.
    pub fn where_eq(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.where_(field, "=", value)
    }

    pub fn where_in(
        self,
        field: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<Value>>,
    ) -> Self {
        self.where_specification(WhereInSpecification::new(field, values))
    }

    pub fn where_between(
        self,
        field: impl Into<String>,
        min: impl Into<Value>,
        max: impl Into<Value>,
    ) -> Self {
        self.where_specification(WhereBetweenSpecification::new(field, min, max))
    }

    pub fn where_null(self, field: impl Into<String>) -> Self {
        self.where_specification(WhereNullSpecification::new(field))
    }

    pub fn where_not_null(self, field: impl Into<String>) -> Self {
        self.where_specification(WhereNotNullSpecification::new(field))
    }

    pub fn where_has(
        self,
        relation: impl Into<String>,
        specification: impl IntoSpecification,
    ) -> Self {
        self.where_specification(WhereHasSpecification::new(relation, specification))
    }

    /// Append an already-built or custom specification as an entry.
    pub fn where_specification(mut self, specification: impl IntoSpecification) -> Self {
        let connector = self.next_connector;
        self.next_connector = Connector::And;
        self.entries
            .push((connector, specification.into_specification()));
        self
    }

    /// Compile the entries into a single specification tree.
    ///
    /// The first entry's connector is ignored; each later entry joins the
    /// accumulator via its own connector.
    pub fn build(self) -> Result<Arc<dyn Specification>, SpecificationError> {
        let mut entries = self.entries.into_iter();
        let Some((_, first)) = entries.next() else {
            return Err(SpecificationError::EmptyBuild);
        };

        Ok(entries.fold(first, |accumulated, (connector, next)| match connector {
            Connector::And => composite::and(accumulated, next).into_specification(),
            Connector::Or => composite::or(accumulated, next).into_specification(),
        }))
    }
}
