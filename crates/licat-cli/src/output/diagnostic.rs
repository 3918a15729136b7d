//! Miette diagnostic wrapper for catalog load failures.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![expect(unused_assignments)]

use licat::LoadError;
use miette::Diagnostic;
use thiserror::Error;

/// A miette-compatible diagnostic for a failed catalog build.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("cannot load the license catalog")]
#[diagnostic(code(licat::load))]
pub struct LoadDiagnostic {
    #[source]
    source: LoadError,

    #[help]
    help: Option<String>,
}

impl From<LoadError> for LoadDiagnostic {
    fn from(source: LoadError) -> Self {
        let help = match &source {
            LoadError::Io { path, .. } => Some(format!(
                "check that {} exists, or point --data at the dataset directory",
                path.display()
            )),
            LoadError::Http { url, .. } => Some(format!("check that {url} is reachable")),
            LoadError::Parse { source: err, .. } => Some(format!(
                "expected a JSON array of {{\"data\": ...}} records (line {}, column {})",
                err.line(),
                err.column()
            )),
            LoadError::Missing { .. } => None,
        };
        LoadDiagnostic { source, help }
    }
}
