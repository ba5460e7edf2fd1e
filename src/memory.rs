//! In-memory query target.
//!
//! `MemoryQuery` owns a row set and accumulates filter calls into a boolean
//! tree; `get()` materializes the rows matching the tree. It is the
//! reference implementation of the `QueryBuilder` capability set and exists
//! to exercise the dual-evaluation contract against a real query target.
//! Clause evaluation reuses the shared comparison semantics, so equivalence
//! tests exercise the grouping translation rather than a second copy of the
//! operators.

use serde_json::Value;

use crate::compare;
use crate::operator::Operator;
use crate::path::lookup_path;
use crate::query::{Execute, QueryBuilder};

enum Connective {
    And,
    Or,
}

enum FilterNode {
    Compare {
        field: String,
        operator: Operator,
        value: Value,
    },
    In {
        field: String,
        values: Vec<Value>,
    },
    Between {
        field: String,
        min: Value,
        max: Value,
    },
    Null {
        field: String,
    },
    NotNull {
        field: String,
    },
    Group(FilterGroup),
    Not(FilterGroup),
    Has {
        relation: String,
        group: FilterGroup,
    },
}

impl FilterNode {
    fn matches(&self, row: &Value) -> bool {
        match self {
            FilterNode::Compare {
                field,
                operator,
                value,
            } => compare::evaluate_compare(operator, lookup_path(row, field), value),
            FilterNode::In { field, values } => {
                compare::evaluate_in(lookup_path(row, field), values)
            }
            FilterNode::Between { field, min, max } => {
                compare::evaluate_between(lookup_path(row, field), min, max)
            }
            FilterNode::Null { field } => compare::evaluate_null(lookup_path(row, field)),
            FilterNode::NotNull { field } => {
                compare::evaluate_not_null(lookup_path(row, field))
            }
            FilterNode::Group(group) => group.matches(row),
            FilterNode::Not(group) => !group.matches(row),
            FilterNode::Has { relation, group } => match lookup_path(row, relation) {
                None | Some(Value::Null) => false,
                Some(Value::Array(items)) => items.iter().any(|item| group.matches(item)),
                Some(related) => group.matches(related),
            },
        }
    }
}

struct FilterGroup {
    connective: Connective,
    nodes: Vec<FilterNode>,
}

impl FilterGroup {
    fn new(connective: Connective) -> Self {
        Self {
            connective,
            nodes: Vec::new(),
        }
    }

    fn collect(connective: Connective, build: &mut dyn FnMut(&mut dyn QueryBuilder)) -> Self {
        let mut scope = FilterGroup::new(connective);
        build(&mut scope);
        scope
    }

    // Empty conjunction matches every row; empty disjunction matches none.
    fn matches(&self, row: &Value) -> bool {
        match self.connective {
            Connective::And => self.nodes.iter().all(|node| node.matches(row)),
            Connective::Or => self.nodes.iter().any(|node| node.matches(row)),
        }
    }
}

impl QueryBuilder for FilterGroup {
    fn filter_compare(&mut self, field: &str, operator: &Operator, value: &Value) {
        self.nodes.push(FilterNode::Compare {
            field: field.to_string(),
            operator: operator.clone(),
            value: value.clone(),
        });
    }

    fn filter_in(&mut self, field: &str, values: &[Value]) {
        self.nodes.push(FilterNode::In {
            field: field.to_string(),
            values: values.to_vec(),
        });
    }

    fn filter_between(&mut self, field: &str, min: &Value, max: &Value) {
        self.nodes.push(FilterNode::Between {
            field: field.to_string(),
            min: min.clone(),
            max: max.clone(),
        });
    }

    fn filter_null(&mut self, field: &str) {
        self.nodes.push(FilterNode::Null {
            field: field.to_string(),
        });
    }

    fn filter_not_null(&mut self, field: &str) {
        self.nodes.push(FilterNode::NotNull {
            field: field.to_string(),
        });
    }

    fn grouped(&mut self, build: &mut dyn FnMut(&mut dyn QueryBuilder)) {
        self.nodes
            .push(FilterNode::Group(FilterGroup::collect(Connective::And, build)));
    }

    fn grouped_or(&mut self, build: &mut dyn FnMut(&mut dyn QueryBuilder)) {
        self.nodes
            .push(FilterNode::Group(FilterGroup::collect(Connective::Or, build)));
    }

    fn negated_scope(&mut self, build: &mut dyn FnMut(&mut dyn QueryBuilder)) {
        self.nodes
            .push(FilterNode::Not(FilterGroup::collect(Connective::And, build)));
    }

    fn filter_has(&mut self, relation: &str, build: &mut dyn FnMut(&mut dyn QueryBuilder)) {
        self.nodes.push(FilterNode::Has {
            relation: relation.to_string(),
            group: FilterGroup::collect(Connective::And, build),
        });
    }
}

/// An in-memory data source with an accumulated filter tree.
pub struct MemoryQuery {
    rows: Vec<Value>,
    root: FilterGroup,
}

impl MemoryQuery {
    pub fn new(rows: Vec<Value>) -> Self {
        Self {
            rows,
            root: FilterGroup::new(Connective::And),
        }
    }
}

impl QueryBuilder for MemoryQuery {
    fn filter_compare(&mut self, field: &str, operator: &Operator, value: &Value) {
        self.root.filter_compare(field, operator, value);
    }

    fn filter_in(&mut self, field: &str, values: &[Value]) {
        self.root.filter_in(field, values);
    }

    fn filter_between(&mut self, field: &str, min: &Value, max: &Value) {
        self.root.filter_between(field, min, max);
    }

    fn filter_null(&mut self, field: &str) {
        self.root.filter_null(field);
    }

    fn filter_not_null(&mut self, field: &str) {
        self.root.filter_not_null(field);
    }

    fn grouped(&mut self, build: &mut dyn FnMut(&mut dyn QueryBuilder)) {
        self.root.grouped(build);
    }

    fn grouped_or(&mut self, build: &mut dyn FnMut(&mut dyn QueryBuilder)) {
        self.root.grouped_or(build);
    }

    fn negated_scope(&mut self, build: &mut dyn FnMut(&mut dyn QueryBuilder)) {
        self.root.negated_scope(build);
    }

    fn filter_has(&mut self, relation: &str, build: &mut dyn FnMut(&mut dyn QueryBuilder)) {
        self.root.filter_has(relation, build);
    }
}

impl Execute for MemoryQuery {
    fn get(&self) -> Vec<Value> {
        self.rows
            .iter()
            .filter(|row| self.root.matches(row))
            .cloned()
            .collect()
    }
}
