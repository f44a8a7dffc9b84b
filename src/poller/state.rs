//! Per-instance poller state and the version observation transition.
//!
//! The state is owned by the polling task; there are no ambient globals. The
//! `notified` flag is the only overlap guard: once a change notification has
//! been delivered, every later observation is suppressed regardless of the
//! fetched value.

/// Outcome of comparing a fetched version against the recorded one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    /// First successful poll; the version was recorded, nothing to report.
    Recorded,
    /// Same version as before; polling continues.
    Unchanged,
    /// A different version appeared; exactly one notification is due and
    /// polling must stop.
    Changed {
        current_version: String,
        latest_version: String,
    },
    /// A notification was already delivered; ignored.
    Suppressed,
}

/// In-memory state of one poller instance.
#[derive(Debug, Default)]
pub struct PollerState {
    last_known: Option<String>,
    notified: bool,
}

impl PollerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Version recorded on the first successful poll, if any.
    pub fn last_known(&self) -> Option<&str> {
        self.last_known.as_deref()
    }

    /// Whether the one-shot notification has been delivered.
    pub fn notified(&self) -> bool {
        self.notified
    }

    /// Fold a fetched version into the state.
    pub fn observe(&mut self, latest: &str) -> Observation {
        if self.notified {
            return Observation::Suppressed;
        }

        match &self.last_known {
            None => {
                self.last_known = Some(latest.to_string());
                Observation::Recorded
            }
            Some(current) if current == latest => Observation::Unchanged,
            Some(current) => {
                let current_version = current.clone();
                self.notified = true;
                Observation::Changed {
                    current_version,
                    latest_version: latest.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_observation_records_without_notifying() {
        let mut state = PollerState::new();
        assert_eq!(state.observe("1.0.0"), Observation::Recorded);
        assert_eq!(state.last_known(), Some("1.0.0"));
        assert!(!state.notified());
    }

    #[test]
    fn test_unchanged_version_keeps_polling() {
        let mut state = PollerState::new();
        state.observe("1.0.0");
        assert_eq!(state.observe("1.0.0"), Observation::Unchanged);
        assert!(!state.notified());
    }

    #[test]
    fn test_changed_version_notifies_once() {
        let mut state = PollerState::new();
        state.observe("1.0.0");
        assert_eq!(
            state.observe("2.0.0"),
            Observation::Changed {
                current_version: "1.0.0".to_string(),
                latest_version: "2.0.0".to_string(),
            }
        );
        assert!(state.notified());
    }

    #[test]
    fn test_observations_after_notification_are_suppressed() {
        let mut state = PollerState::new();
        state.observe("1.0.0");
        state.observe("2.0.0");
        // Even a third, different version must not notify again.
        assert_eq!(state.observe("3.0.0"), Observation::Suppressed);
        assert_eq!(state.observe("1.0.0"), Observation::Suppressed);
    }
}
