//! Value comparison semantics shared by predicate evaluation and the
//! in-memory query target, so the two interpretations cannot drift.
//!
//! Equality discipline, per operator:
//! - `=`/`!=` are loose: null equals null, numbers compare numerically
//!   across integer/float representations, and a number and a numeric string
//!   compare numerically (both directions). Every other pair falls back to
//!   strict structural equality, so cross-type pairs are unequal.
//! - `in` membership is strict (`Value::eq`), deliberately stricter than
//!   `=`; an empty value set never matches.
//! - Ordering covers numbers (including numeric strings) and lexicographic
//!   strings; anything else is incomparable and yields no match.
//!
//! Absent fields (`None`) match nothing here; the `null` check lives with
//! the null specifications, which are the only ones satisfied by absence.

use std::cmp::Ordering;

use serde_json::Value;

use crate::operator::Operator;

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

pub(crate) fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(_), Value::Number(_))
        | (Value::Number(_), Value::String(_))
        | (Value::String(_), Value::Number(_)) => match (numeric(a), numeric(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
        _ => a == b,
    }
}

pub(crate) fn strict_eq(a: &Value, b: &Value) -> bool {
    a == b
}

pub(crate) fn ordering(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        _ => {
            let x = numeric(a)?;
            let y = numeric(b)?;
            x.partial_cmp(&y)
        }
    }
}

pub(crate) fn like(candidate: &Value, pattern: &Value) -> bool {
    let (Value::String(haystack), Value::String(pattern)) = (candidate, pattern) else {
        return false;
    };
    let needle = pattern.trim_matches('%').to_lowercase();
    haystack.to_lowercase().contains(&needle)
}

/// Evaluate a scalar comparison against a looked-up candidate value.
///
/// An absent field matches nothing, whatever the operator. An unrecognized
/// operator matches nothing instead of erroring.
pub(crate) fn evaluate_compare(
    operator: &Operator,
    candidate: Option<&Value>,
    expected: &Value,
) -> bool {
    let Some(value) = candidate else {
        return false;
    };

    match operator {
        Operator::Eq => loose_eq(value, expected),
        Operator::NotEq => !loose_eq(value, expected),
        Operator::Gt => matches!(ordering(value, expected), Some(Ordering::Greater)),
        Operator::Gte => matches!(
            ordering(value, expected),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        Operator::Lt => matches!(ordering(value, expected), Some(Ordering::Less)),
        Operator::Lte => matches!(
            ordering(value, expected),
            Some(Ordering::Less | Ordering::Equal)
        ),
        Operator::Like => like(value, expected),
        Operator::Unrecognized(_) => false,
    }
}

pub(crate) fn evaluate_in(candidate: Option<&Value>, values: &[Value]) -> bool {
    let Some(value) = candidate else {
        return false;
    };
    values.iter().any(|member| strict_eq(value, member))
}

pub(crate) fn evaluate_between(candidate: Option<&Value>, min: &Value, max: &Value) -> bool {
    let Some(value) = candidate else {
        return false;
    };
    matches!(
        ordering(value, min),
        Some(Ordering::Greater | Ordering::Equal)
    ) && matches!(ordering(value, max), Some(Ordering::Less | Ordering::Equal))
}

pub(crate) fn evaluate_null(candidate: Option<&Value>) -> bool {
    matches!(candidate, None | Some(Value::Null))
}

pub(crate) fn evaluate_not_null(candidate: Option<&Value>) -> bool {
    !evaluate_null(candidate)
}
