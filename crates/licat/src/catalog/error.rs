//! Error types for catalog loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::Dataset;

/// A dataset could not be obtained or parsed.
///
/// Any one of these aborts the whole catalog build.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a dataset file.
    #[error("failed to read {dataset} from '{path}': {source}")]
    Io {
        dataset: Dataset,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Transport failure or non-success status when fetching a dataset.
    #[error("failed to fetch {dataset} from '{url}': {message}")]
    Http {
        dataset: Dataset,
        url: String,
        message: String,
    },

    /// The dataset document is not a JSON array of `{ "data": ... }` records.
    #[error("failed to parse {dataset}: {source}")]
    Parse {
        dataset: Dataset,
        #[source]
        source: serde_json::Error,
    },

    /// The provider has no document for this dataset.
    #[error("no document available for {dataset}")]
    Missing { dataset: Dataset },
}

impl LoadError {
    /// The dataset whose load failed.
    pub fn dataset(&self) -> Dataset {
        match self {
            LoadError::Io { dataset, .. }
            | LoadError::Http { dataset, .. }
            | LoadError::Parse { dataset, .. }
            | LoadError::Missing { dataset } => *dataset,
        }
    }
}
