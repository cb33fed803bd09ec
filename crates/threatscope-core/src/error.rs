use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::model::GENERAL_CATEGORY;

/// Failure to load the threat catalog at start-up.
///
/// Every variant is fatal: without a well-formed catalog nothing can be
/// classified.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read threat catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed threat catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("threat catalog has no `{}` fallback category", GENERAL_CATEGORY)]
    MissingFallback,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// Empty or whitespace-only description. Shells treat this as a no-op.
    #[error("please provide a description of the application or system")]
    EmptyDescription,

    /// The classifier only ever yields known categories, so hitting this
    /// means the caller passed a table that does not match the result.
    #[error("category `{0}` is not present in the threat catalog")]
    UnknownCategory(String),
}
