//! Writes the version manifest file into the build output directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::manifest::error::{ManifestError, ManifestResult};
use crate::manifest::record::VersionRecord;
use crate::manifest::strategy::VersionStrategy;

/// Default manifest file name.
pub const DEFAULT_FILE_NAME: &str = "version.json";

/// Default build output directory when the build configuration supplies none.
pub const DEFAULT_OUT_DIR: &str = "dist";

/// One-shot writer for the version manifest.
///
/// Intended to run exactly once, after all other build output has been
/// written. Any failure propagates to the caller as a build failure.
#[derive(Debug)]
pub struct ManifestWriter {
    out_dir: PathBuf,
    file_name: String,
    strategy: VersionStrategy,
}

impl ManifestWriter {
    /// Writer for `out_dir` with the default file name and timestamp strategy.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            strategy: VersionStrategy::default(),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_strategy(mut self, strategy: VersionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Path the manifest will be written to.
    pub fn target_path(&self) -> PathBuf {
        self.out_dir.join(&self.file_name)
    }

    /// Compute the version, stamp the record and write it.
    ///
    /// Creates the output directory if absent. Returns the path of the
    /// written file.
    pub fn write(&self) -> ManifestResult<PathBuf> {
        let version = self.strategy.compute()?;
        let record = VersionRecord::stamped(version);

        fs::create_dir_all(&self.out_dir).map_err(|e| io_error(&self.out_dir, e))?;

        let path = self.target_path();
        let json = serde_json::to_string(&record)?;
        fs::write(&path, json).map_err(|e| io_error(&path, e))?;

        log::info!(
            "Wrote version manifest {} (version {})",
            path.display(),
            record.version
        );
        Ok(path)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> ManifestError {
    ManifestError::Io {
        path: path.to_path_buf(),
        source,
    }
}
