//! Build metadata accessors.
//! Includes the generated version.rs from the build script, providing a
//! single source of truth for the binary's own build provenance.

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Short git hash captured by the build script
pub fn git_hash() -> &'static str {
    GIT_HASH
}

/// Extended version string for `--version` output.
pub fn long_version() -> String {
    format!(
        "{} (rev {}, built {})",
        env!("CARGO_PKG_VERSION"),
        git_hash(),
        build_time()
    )
}
