//! Manifest writer and strategy tests

use std::str::FromStr;

use chrono::NaiveDateTime;
use tempfile::TempDir;

use super::record::{VersionRecord, BUILD_TIME_FORMAT, TIMESTAMP_VERSION_FORMAT};
use super::strategy::VersionStrategy;
use super::writer::{ManifestWriter, DEFAULT_FILE_NAME};

#[test]
fn test_writer_uses_custom_strategy_output() {
    let dir = TempDir::new().unwrap();
    let writer = ManifestWriter::new(dir.path())
        .with_strategy(VersionStrategy::custom(|| "build-42".to_string()));

    let path = writer.write().unwrap();
    assert_eq!(path, dir.path().join(DEFAULT_FILE_NAME));

    let contents = std::fs::read_to_string(&path).unwrap();
    let record: VersionRecord = serde_json::from_str(&contents).unwrap();
    assert_eq!(record.version, "build-42");
    assert!(NaiveDateTime::parse_from_str(&record.build_time, BUILD_TIME_FORMAT).is_ok());
}

#[test]
fn test_writer_creates_missing_output_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("dist").join("assets");
    assert!(!nested.exists());

    let writer = ManifestWriter::new(&nested)
        .with_strategy(VersionStrategy::custom(|| "1.0.0".to_string()));
    let path = writer.write().unwrap();

    assert!(nested.is_dir());
    assert!(path.exists());
}

#[test]
fn test_writer_honours_file_name_override() {
    let dir = TempDir::new().unwrap();
    let writer = ManifestWriter::new(dir.path())
        .with_file_name("release.json")
        .with_strategy(VersionStrategy::custom(|| "v7".to_string()));

    let path = writer.write().unwrap();
    assert_eq!(path, dir.path().join("release.json"));
    assert!(!dir.path().join(DEFAULT_FILE_NAME).exists());
}

#[test]
fn test_writer_overwrites_existing_manifest() {
    let dir = TempDir::new().unwrap();
    let first = ManifestWriter::new(dir.path())
        .with_strategy(VersionStrategy::custom(|| "one".to_string()));
    let second = ManifestWriter::new(dir.path())
        .with_strategy(VersionStrategy::custom(|| "two".to_string()));

    first.write().unwrap();
    let path = second.write().unwrap();

    let record: VersionRecord =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(record.version, "two");
}

#[test]
fn test_timestamp_strategy_matches_format() {
    let version = VersionStrategy::Timestamp.compute().unwrap();
    assert_eq!(version.len(), 14);
    assert!(
        NaiveDateTime::parse_from_str(&version, TIMESTAMP_VERSION_FORMAT).is_ok(),
        "timestamp version '{version}' should match {TIMESTAMP_VERSION_FORMAT}"
    );
}

#[test]
fn test_strategy_parses_from_cli_names() {
    assert!(matches!(
        VersionStrategy::from_str("git").unwrap(),
        VersionStrategy::Git
    ));
    assert!(matches!(
        VersionStrategy::from_str("timestamp").unwrap(),
        VersionStrategy::Timestamp
    ));
    assert!(VersionStrategy::from_str("svn").is_err());
}

#[test]
fn test_default_strategy_is_timestamp() {
    assert!(matches!(
        VersionStrategy::default(),
        VersionStrategy::Timestamp
    ));
}
