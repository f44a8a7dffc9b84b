//! Version Manifest Writer
//!
//! Produces the version manifest: a small JSON file recording the build
//! version and a build timestamp, written into the build output directory as
//! the last step of a build pipeline. The version value comes from a
//! configurable strategy (caller-supplied closure, git revision, or
//! timestamp). The runtime poller fetches the file this module writes.

pub mod error;
pub mod record;
pub mod strategy;
pub mod writer;

pub use error::{ManifestError, ManifestResult};
pub use record::VersionRecord;
pub use strategy::VersionStrategy;
pub use writer::ManifestWriter;

#[cfg(test)]
mod tests;
