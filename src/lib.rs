mod adapters;
mod builder;
mod cache;
mod cache_key;
mod cacheable;
mod compare;
mod composite;
mod conditions;
mod config;
mod error;
mod memory;
mod operator;
mod path;
mod query;
mod specification;

pub use adapters::{QueryBuilderExt, SpecificationIterator};
pub use builder::{Connector, SpecificationBuilder};
pub use cache::{InMemoryCache, SpecificationCache};
pub use cache_key::derive_cache_key;
pub use cacheable::Cacheable;
pub use composite::{and, not, or, AndSpecification, NotSpecification, OrSpecification};
pub use conditions::{
    WhereBetweenSpecification, WhereHasSpecification, WhereInSpecification,
    WhereNotNullSpecification, WhereNullSpecification, WhereSpecification,
};
pub use config::CacheConfig;
pub use error::SpecificationError;
pub use memory::MemoryQuery;
pub use operator::Operator;
pub use path::lookup_path;
pub use query::{Execute, QueryBuilder};
pub use specification::{IntoSpecification, Specification, SpecificationExt};

// Re-export the JSON value type candidates are evaluated against.
pub use serde_json::Value;
