//! Sources for the four catalog datasets.

use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::catalog::LoadError;

/// One of the four datasets making up a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    Licenses,
    Actions,
    Conditions,
    Notices,
}

impl Dataset {
    /// All datasets, in the order failures are reported.
    pub const ALL: [Dataset; 4] = [
        Dataset::Licenses,
        Dataset::Actions,
        Dataset::Conditions,
        Dataset::Notices,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Dataset::Licenses => "licenses",
            Dataset::Actions => "actions",
            Dataset::Conditions => "conditions",
            Dataset::Notices => "notices",
        }
    }

    /// File name of the dataset document, e.g. `licenses.json`.
    pub fn file_name(self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl Display for Dataset {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Fetches the raw JSON document of a dataset.
///
/// Implementations are shared across the threads that fetch the datasets
/// concurrently, so they must be `Sync`.
pub trait DataProvider: Sync {
    fn fetch(&self, dataset: Dataset) -> Result<String, LoadError>;
}

/// Reads `<dir>/licenses.json`, `<dir>/actions.json`, and so on.
#[derive(Debug, Clone)]
pub struct DirectoryProvider {
    root: PathBuf,
}

impl DirectoryProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `dataset`.
    pub fn path_for(&self, dataset: Dataset) -> PathBuf {
        self.root.join(dataset.file_name())
    }
}

impl DataProvider for DirectoryProvider {
    fn fetch(&self, dataset: Dataset) -> Result<String, LoadError> {
        let path = self.path_for(dataset);
        fs::read_to_string(&path).map_err(|source| LoadError::Io {
            dataset,
            path,
            source,
        })
    }
}

/// Serves dataset documents held in memory.
///
/// # Example
///
/// ```
/// use licat::{Dataset, DataProvider, MemoryProvider};
///
/// let provider = MemoryProvider::new().with(Dataset::Licenses, "[]");
/// assert_eq!(provider.fetch(Dataset::Licenses).unwrap(), "[]");
/// assert!(provider.fetch(Dataset::Notices).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    documents: HashMap<Dataset, String>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document for `dataset`, replacing any previous one.
    pub fn with(mut self, dataset: Dataset, document: impl Into<String>) -> Self {
        self.documents.insert(dataset, document.into());
        self
    }

    /// A provider serving an empty array for every dataset.
    pub fn empty() -> Self {
        Dataset::ALL
            .into_iter()
            .fold(Self::new(), |provider, dataset| provider.with(dataset, "[]"))
    }
}

impl DataProvider for MemoryProvider {
    fn fetch(&self, dataset: Dataset) -> Result<String, LoadError> {
        self.documents
            .get(&dataset)
            .cloned()
            .ok_or(LoadError::Missing { dataset })
    }
}

/// Fetches `<base_url>/licenses.json` and the other documents over HTTP.
#[cfg(feature = "http")]
#[derive(Clone)]
pub struct HttpProvider {
    base_url: String,
    agent: ureq::Agent,
}

#[cfg(feature = "http")]
impl HttpProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent: ureq::Agent::new_with_defaults(),
        }
    }

    pub fn url_for(&self, dataset: Dataset) -> String {
        format!("{}/{}", self.base_url, dataset.file_name())
    }
}

#[cfg(feature = "http")]
impl DataProvider for HttpProvider {
    fn fetch(&self, dataset: Dataset) -> Result<String, LoadError> {
        let url = self.url_for(dataset);
        let http_error = |err: ureq::Error| LoadError::Http {
            dataset,
            url: url.clone(),
            message: err.to_string(),
        };
        let response = self.agent.get(&url).call().map_err(http_error)?;
        response.into_body().read_to_string().map_err(http_error)
    }
}
