//! Manifest error types

use std::path::PathBuf;
use thiserror::Error;

/// Module-local result type for manifest operations
pub type ManifestResult<T> = std::result::Result<T, ManifestError>;

/// Errors raised while computing or writing the version manifest.
///
/// All of these are fatal to the build step that invoked the writer; there is
/// no retry path.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The configured version strategy could not produce a value
    #[error("Failed to determine version: {reason}")]
    Version { reason: String },

    /// Creating the output directory or writing the file failed
    #[error("Failed to write version manifest {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialising the version record failed
    #[error("Failed to encode version manifest: {0}")]
    Encode(#[from] serde_json::Error),
}
