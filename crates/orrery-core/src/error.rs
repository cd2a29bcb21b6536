//! Typed errors for catalog loading.

use thiserror::Error;

/// Errors that can occur while loading the catalog from disk.
///
/// All of these are fatal at startup: the service must not begin
/// serving with a partially loaded table. The matcher itself has no
/// error path — malformed criteria degrade to "no constraint" instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open catalog '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog '{path}': {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("catalog is missing required column '{0}'")]
    MissingColumn(String),
}
