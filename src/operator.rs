use std::fmt;

use serde::{Serialize, Serializer};

/// Comparison operator for a field condition.
///
/// Parsing never fails: a symbol outside the recognized set becomes
/// [`Operator::Unrecognized`], which matches nothing when evaluated. Keeping
/// bad operators representable keeps predicate evaluation total.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    NotEq,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    Unrecognized(String),
}

impl Operator {
    pub fn parse(symbol: &str) -> Operator {
        match symbol {
            "=" => Operator::Eq,
            "!=" => Operator::NotEq,
            ">" => Operator::Gt,
            ">=" => Operator::Gte,
            "<" => Operator::Lt,
            "<=" => Operator::Lte,
            "like" => Operator::Like,
            other => Operator::Unrecognized(other.to_string()),
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            Operator::Eq => "=",
            Operator::NotEq => "!=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Like => "like",
            Operator::Unrecognized(symbol) => symbol,
        }
    }
}

impl From<&str> for Operator {
    fn from(symbol: &str) -> Self {
        Operator::parse(symbol)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// Serialized as its symbol so cache-key payloads stay readable and stable.
impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognized_symbols() {
        assert_eq!(Operator::parse("="), Operator::Eq);
        assert_eq!(Operator::parse("!="), Operator::NotEq);
        assert_eq!(Operator::parse(">"), Operator::Gt);
        assert_eq!(Operator::parse(">="), Operator::Gte);
        assert_eq!(Operator::parse("<"), Operator::Lt);
        assert_eq!(Operator::parse("<="), Operator::Lte);
        assert_eq!(Operator::parse("like"), Operator::Like);
    }

    #[test]
    fn parse_keeps_unrecognized_symbol() {
        let operator = Operator::parse("~~");
        assert_eq!(operator, Operator::Unrecognized("~~".to_string()));
        assert_eq!(operator.symbol(), "~~");
    }

    #[test]
    fn symbol_round_trips() {
        for symbol in ["=", "!=", ">", ">=", "<", "<=", "like"] {
            assert_eq!(Operator::parse(symbol).symbol(), symbol);
        }
    }

    #[test]
    fn serializes_as_symbol() {
        assert_eq!(
            serde_json::to_string(&Operator::Gte).unwrap(),
            "\">=\""
        );
        assert_eq!(
            serde_json::to_string(&Operator::Unrecognized("regexp".into())).unwrap(),
            "\"regexp\""
        );
    }
}
