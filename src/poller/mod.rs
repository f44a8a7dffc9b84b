//! Version Poller
//!
//! Periodically fetches a version manifest over HTTP and notifies the host
//! application exactly once when the served version differs from the one
//! first observed. After that single notification the poller stops itself;
//! fetch or parse failures are logged and the loop continues.
//!
//! The fetch is abstracted behind [`VersionFetch`] so hosts and tests can
//! substitute their own transport; [`HttpVersionFetcher`] is the production
//! implementation.

pub mod error;
pub mod fetch;
pub mod manager;
pub mod state;

pub use error::{PollerError, PollerResult};
pub use fetch::{HttpVersionFetcher, VersionFetch};
pub use manager::{PollerHandle, VersionChange, VersionPoller, VersionPollerBuilder};
pub use state::{Observation, PollerState};
