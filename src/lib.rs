//! Runtime-composed boolean filters over records.
//!
//! Structured search criteria are assembled into an immutable predicate
//! expression tree, validated against a record schema up front. The same
//! tree then drives two interchangeable consumers: an in-memory evaluator
//! for local record sources, and a translator that compiles the tree into a
//! backend-native filter (the reference adapter emits parameterized
//! Postgres SQL via sea-query) for data sources that cannot run a compiled
//! closure.
//!
//! ```
//! use criteria_filter::{
//!     Criterion, CriteriaGroup, FieldType, FilterRequest, PredicateBuilder, Schema,
//! };
//!
//! let schema = Schema::new()
//!     .field("AssignedTo", FieldType::Text)
//!     .field("Status", FieldType::Enum);
//!
//! // Bob's jobs, or Mary's cancelled ones.
//! let request = FilterRequest::new()
//!     .group(CriteriaGroup::new().with(Criterion::equals("AssignedTo", "Bob")))
//!     .group(
//!         CriteriaGroup::new()
//!             .with(Criterion::equals("AssignedTo", "Mary"))
//!             .with(Criterion::equals("Status", "Cancelled")),
//!     );
//!
//! let predicate = PredicateBuilder::new(schema).build(&request)?;
//! assert!(!predicate.matches_nothing());
//! # Ok::<(), criteria_filter::BuildError>(())
//! ```

pub mod builder;
pub mod criteria;
pub mod error;
pub mod evaluator;
pub mod predicate;
pub mod schema;
pub mod translator;

#[cfg(test)]
pub(crate) mod fixture;

pub use builder::PredicateBuilder;
pub use criteria::{Criterion, CriteriaGroup, FilterRequest, Literal, Operator};
pub use error::{BuildError, SchemaError, TranslateError};
pub use evaluator::{evaluate, filter, FieldValue, Record};
pub use predicate::Predicate;
pub use schema::{FieldType, Schema};
pub use translator::{SqlFilter, SqlTranslator, SqlTranslatorConfig, Translate};
