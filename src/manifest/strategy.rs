//! Version strategies for the manifest writer.
//!
//! Priority order when configuring a writer: a caller-supplied closure wins,
//! then the git revision lookup, then the timestamp default.

use std::fmt;
use std::process::Command;
use std::str::FromStr;

use chrono::Local;

use crate::manifest::error::{ManifestError, ManifestResult};
use crate::manifest::record::TIMESTAMP_VERSION_FORMAT;

/// How the manifest writer computes the version value.
pub enum VersionStrategy {
    /// Caller-supplied closure; its return value is used verbatim.
    Custom(Box<dyn Fn() -> String + Send + Sync>),
    /// Short revision identifier from `git rev-parse --short HEAD`.
    Git,
    /// Local time formatted as `YYYYMMDDHHmmss`. The default.
    Timestamp,
}

impl VersionStrategy {
    /// Wrap a closure as a custom strategy.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        VersionStrategy::Custom(Box::new(f))
    }

    /// Compute the version value.
    ///
    /// Failures of the git lookup (command missing, not a repository) are
    /// fatal and propagate; there is no fallback between strategies once one
    /// is selected.
    pub fn compute(&self) -> ManifestResult<String> {
        match self {
            VersionStrategy::Custom(f) => Ok(f()),
            VersionStrategy::Git => git_short_hash(),
            VersionStrategy::Timestamp => {
                Ok(Local::now().format(TIMESTAMP_VERSION_FORMAT).to_string())
            }
        }
    }
}

impl Default for VersionStrategy {
    fn default() -> Self {
        VersionStrategy::Timestamp
    }
}

impl fmt::Debug for VersionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionStrategy::Custom(_) => f.write_str("Custom(..)"),
            VersionStrategy::Git => f.write_str("Git"),
            VersionStrategy::Timestamp => f.write_str("Timestamp"),
        }
    }
}

impl FromStr for VersionStrategy {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "git" => Ok(VersionStrategy::Git),
            "timestamp" => Ok(VersionStrategy::Timestamp),
            other => Err(ManifestError::Version {
                reason: format!("unknown version strategy '{other}' (expected git or timestamp)"),
            }),
        }
    }
}

fn git_short_hash() -> ManifestResult<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .map_err(|e| ManifestError::Version {
            reason: format!("could not run git: {e}"),
        })?;

    if !output.status.success() {
        return Err(ManifestError::Version {
            reason: format!("git rev-parse exited with {}", output.status),
        });
    }

    let hash = String::from_utf8(output.stdout)
        .map_err(|e| ManifestError::Version {
            reason: format!("git output was not UTF-8: {e}"),
        })?
        .trim()
        .to_string();

    if hash.is_empty() {
        return Err(ManifestError::Version {
            reason: "git rev-parse produced no output".to_string(),
        });
    }

    Ok(hash)
}
