use serde_json::Value;

use crate::operator::Operator;

/// Field-level filter capabilities a query target must provide for
/// specifications to translate onto it.
///
/// The default grouping between sequential filter calls is conjunctive.
/// Scopes nest: a scope callback receives a builder whose calls land inside
/// the scope being opened.
pub trait QueryBuilder {
    fn filter_compare(&mut self, field: &str, operator: &Operator, value: &Value);

    fn filter_in(&mut self, field: &str, values: &[Value]);

    fn filter_between(&mut self, field: &str, min: &Value, max: &Value);

    fn filter_null(&mut self, field: &str);

    fn filter_not_null(&mut self, field: &str);

    /// Nested conjunctive scope: its contents are combined with AND and the
    /// scope joins the surrounding group as a single unit.
    fn grouped(&mut self, build: &mut dyn FnMut(&mut dyn QueryBuilder));

    /// Nested disjunctive scope: each direct child is one alternative.
    fn grouped_or(&mut self, build: &mut dyn FnMut(&mut dyn QueryBuilder));

    /// Scope matching exactly the rows its contents would exclude. Whether
    /// negation is realized natively or as an exclusion idiom is the
    /// target's concern; the result must be semantically exact.
    fn negated_scope(&mut self, build: &mut dyn FnMut(&mut dyn QueryBuilder));

    /// Scope applied to a named relation value; an array relation matches
    /// when any element satisfies the scope.
    fn filter_has(&mut self, relation: &str, build: &mut dyn FnMut(&mut dyn QueryBuilder));
}

/// Execute a built query and materialize the matching rows.
pub trait Execute {
    fn get(&self) -> Vec<Value>;
}
