//! Errors raised while reading the reference data.
//!
//! A missing data file is not an error: the loader reports it as an empty
//! collection. Everything here means the data is present but unusable, and
//! callers are expected to abort rather than search a partial catalog.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("malformed data in {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown collection: '{0}' (expected one of: style, tone, structure, industry, blacklist)")]
    UnknownCollection(String),
}
