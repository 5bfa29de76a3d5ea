//! Storage error model.
//!
//! Every variant carries the dataset name so a shape problem can be traced
//! to the table it came from. Note what is *not* an error: a dataset with
//! no backing file loads as zero rows (an empty catalog is a legitimate
//! steady state).

use thiserror::Error;

use abcrank_core::Dataset;

pub type StoreResult<T> = Result<T, StoreError>;

/// Table store failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file exists but could not be opened or read.
    #[error("failed to read table {dataset}: {source}")]
    Io {
        dataset: Dataset,
        #[source]
        source: std::io::Error,
    },

    /// A row or header failed to decode (missing column, wrong type).
    /// Detected eagerly at load time, never deferred into the core.
    #[error("malformed row in table {dataset}: {source}")]
    Malformed {
        dataset: Dataset,
        #[source]
        source: csv::Error,
    },

    /// The derived table could not be written back.
    #[error("failed to write table {dataset}: {source}")]
    Write {
        dataset: Dataset,
        #[source]
        source: csv::Error,
    },
}

impl StoreError {
    pub fn dataset(&self) -> Dataset {
        match self {
            StoreError::Io { dataset, .. }
            | StoreError::Malformed { dataset, .. }
            | StoreError::Write { dataset, .. } => *dataset,
        }
    }
}
