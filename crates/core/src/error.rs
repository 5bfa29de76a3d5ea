//! Domain error model.

use thiserror::Error;

use crate::dataset::Dataset;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic data/input failures. Storage concerns
/// (unreadable files, malformed CSV rows) belong to the table store layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A `created_at` value could not be parsed into a timestamp.
    ///
    /// Fatal for the whole run: rows are never silently dropped or coerced
    /// to a default date.
    #[error("malformed timestamp in {dataset}: {value:?}")]
    MalformedTimestamp { dataset: Dataset, value: String },

    /// A caller-supplied account filter was not a valid account identifier.
    #[error("invalid account filter: {0:?}")]
    InvalidFilter(String),
}

impl DomainError {
    pub fn malformed_timestamp(dataset: Dataset, value: impl Into<String>) -> Self {
        Self::MalformedTimestamp {
            dataset,
            value: value.into(),
        }
    }

    pub fn invalid_filter(value: impl Into<String>) -> Self {
        Self::InvalidFilter(value.into())
    }
}
