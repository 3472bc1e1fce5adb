//! Error taxonomy for the filter core.
//!
//! Build errors are raised while assembling a predicate tree and are
//! caller-correctable (fix the input, retry). Translation errors are
//! recoverable: a caller holding the tree can always fall back to
//! client-side evaluation. Evaluation itself has no error path; see
//! [`crate::evaluator::evaluate`].

use std::path::PathBuf;

use thiserror::Error;

use crate::criteria::Operator;

/// Raised while validating criteria against the schema. Never deferred to
/// evaluation or translation time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("unknown field `{field}`")]
    UnknownField { field: String },

    #[error("type mismatch on field `{field}`: {detail}")]
    TypeMismatch { field: String, detail: String },

    #[error("invalid criterion on field `{field}`: {reason}")]
    InvalidCriterion { field: String, reason: String },
}

/// Raised when a backend adapter cannot express part of a predicate tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("backend has no native support for the {0} operator")]
    UnsupportedOperator(Operator),
}

/// Raised while loading a schema description from disk.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read schema file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid schema JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
