//! Catalog loading and assembly.
//!
//! A catalog is built from four datasets (licenses, actions, conditions,
//! notices) obtained through a [`DataProvider`]. Loading is all-or-nothing:
//! every dataset must fetch and parse before any card is composed.

mod assemble;
mod error;
mod lint;
mod provider;

pub use assemble::{Catalog, Datasets, assemble, parse_dataset};
pub use error::LoadError;
pub use lint::{ReferenceWarning, lint_references};
#[cfg(feature = "http")]
pub use provider::HttpProvider;
pub use provider::{DataProvider, Dataset, DirectoryProvider, MemoryProvider};
