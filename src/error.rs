use crate::lister::ItemRef;
use thiserror::Error;

/// Failures a `Lister` implementation must surface instead of returning a
/// partial or empty listing.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("permission denied: {0}")]
    Permission(String),
    #[error("malformed listing entry: {0}")]
    Malformed(String),
}

/// Fatal failure during tree construction. Carries the reference and display
/// name of the folder whose listing failed.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to list folder {name:?} ({folder}): {source}")]
    List {
        folder: ItemRef,
        name: String,
        source: ListError,
    },
}

/// Failure loading a listing snapshot from disk.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse snapshot: {0}")]
    Json(#[from] serde_json::Error),
}
