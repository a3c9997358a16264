//! Error taxonomy for loading and rendering.
//!
//! Everything raised while reading the JSON sources is startup-fatal. Record-level
//! problems surface only when that record is rendered. Lookup misses are not errors at
//! all: the store falls back to the first entry.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// A required input file is missing or unreadable.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file is not valid JSON (or does not match the document shape).
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Document parsed but lacks a structural key.
    #[error("malformed document {path}: {reason}")]
    MalformedDocument { path: String, reason: String },

    /// A prospect is missing a field the view uses unconditionally.
    #[error("prospect '{key}' cannot be rendered: {source}")]
    MalformedRecord {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Output data could not be encoded as JSON.
    #[error("failed to serialize {what}: {source}")]
    Serialize {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DashboardError>;
