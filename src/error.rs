use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecificationError {
    EmptyBuild,
    CachePoisoned(&'static str),
}

impl fmt::Display for SpecificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecificationError::EmptyBuild => {
                write!(f, "cannot build an empty specification")
            }
            SpecificationError::CachePoisoned(operation) => {
                write!(f, "cache lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for SpecificationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            SpecificationError::EmptyBuild.to_string(),
            "cannot build an empty specification"
        );
        assert_eq!(
            SpecificationError::CachePoisoned("cache read").to_string(),
            "cache lock poisoned during cache read"
        );
    }
}
