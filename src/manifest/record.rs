//! The version record written to and read from the manifest file.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Timestamp format used for the `buildTime` field.
pub const BUILD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format used when the version itself is a timestamp.
pub const TIMESTAMP_VERSION_FORMAT: &str = "%Y%m%d%H%M%S";

/// Contents of the version manifest file.
///
/// Written once per build and immutable thereafter. Consumers reading the
/// file only need `version`; extra fields in a fetched document are ignored
/// during deserialisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub version: String,
    #[serde(rename = "buildTime")]
    pub build_time: String,
}

impl VersionRecord {
    /// Create a record for `version` stamped with the current local time.
    pub fn stamped(version: String) -> Self {
        Self {
            version,
            build_time: Local::now().format(BUILD_TIME_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_stamped_build_time_matches_format() {
        let record = VersionRecord::stamped("1.2.3".to_string());
        assert_eq!(record.version, "1.2.3");
        assert!(
            NaiveDateTime::parse_from_str(&record.build_time, BUILD_TIME_FORMAT).is_ok(),
            "buildTime '{}' should match {}",
            record.build_time,
            BUILD_TIME_FORMAT
        );
    }

    #[test]
    fn test_serializes_with_camel_case_build_time() {
        let record = VersionRecord {
            version: "abc1234".to_string(),
            build_time: "2025-01-02 03:04:05".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"version":"abc1234","buildTime":"2025-01-02 03:04:05"}"#
        );
    }

    #[test]
    fn test_round_trips_through_json() {
        let record = VersionRecord::stamped("20250102030405".to_string());
        let json = serde_json::to_string(&record).unwrap();
        let parsed: VersionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
