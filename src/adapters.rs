//! Boundary adapters proving the dual-evaluation contract: one filters an
//! in-memory sequence, one applies a specification to a query builder.
//! Pure delegation, no business logic.

use std::borrow::Borrow;

use serde_json::Value;

use crate::query::QueryBuilder;
use crate::specification::Specification;

/// Lazily filter a candidate sequence with a specification, preserving
/// order.
pub trait SpecificationIterator: Iterator + Sized
where
    Self::Item: Borrow<Value>,
{
    fn where_specification<'a>(
        self,
        specification: &'a dyn Specification,
    ) -> impl Iterator<Item = Self::Item> + 'a
    where
        Self: 'a,
    {
        self.filter(move |candidate| specification.is_satisfied_by(candidate.borrow()))
    }
}

impl<I> SpecificationIterator for I
where
    I: Iterator,
    I::Item: Borrow<Value>,
{
}

/// Apply a specification to any query builder, chaining-style.
pub trait QueryBuilderExt: QueryBuilder + Sized {
    fn where_specification(&mut self, specification: &dyn Specification) -> &mut Self {
        specification.to_query(&mut *self);
        self
    }
}

impl<Q: QueryBuilder> QueryBuilderExt for Q {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::WhereSpecification;
    use crate::memory::MemoryQuery;
    use crate::query::Execute;
    use serde_json::json;

    fn candidates() -> Vec<Value> {
        vec![
            json!({"status": "active", "role": "admin"}),
            json!({"status": "active", "role": "user"}),
            json!({"status": "inactive", "role": "admin"}),
        ]
    }

    #[test]
    fn filters_owned_sequence_lazily() {
        let spec = WhereSpecification::new("status", "=", "active");
        let filtered: Vec<Value> = candidates()
            .into_iter()
            .where_specification(&spec)
            .collect();

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|c| c["status"] == "active"));
    }

    #[test]
    fn filters_borrowed_sequence() {
        let rows = candidates();
        let spec = WhereSpecification::new("role", "=", "admin");
        let filtered: Vec<&Value> = rows.iter().where_specification(&spec).collect();

        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn empty_sequence_stays_empty() {
        let spec = WhereSpecification::new("status", "=", "active");
        let filtered: Vec<Value> = Vec::<Value>::new()
            .into_iter()
            .where_specification(&spec)
            .collect();
        assert!(filtered.is_empty());
    }

    #[test]
    fn applies_specification_to_query_builder() {
        let spec = WhereSpecification::new("status", "=", "active");
        let mut query = MemoryQuery::new(candidates());
        query.where_specification(&spec);

        assert_eq!(query.get().len(), 2);
    }
}
