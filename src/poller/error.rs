//! Poller error types

use thiserror::Error;

/// Module-local result type for poller operations
pub type PollerResult<T> = std::result::Result<T, PollerError>;

/// Errors raised while fetching or decoding the version document.
///
/// None of these stop the polling loop; each tick logs the failure and the
/// next tick tries again.
#[derive(Debug, Error)]
pub enum PollerError {
    /// The HTTP request failed or returned a non-success status
    #[error("Version fetch failed: {reason}")]
    Fetch { reason: String },

    /// The response body was not the expected JSON document
    #[error("Version document invalid: {reason}")]
    Parse { reason: String },
}
