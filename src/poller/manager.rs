//! Poller lifecycle: builder, spawned polling task and handle.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::interval;

use crate::poller::fetch::VersionFetch;
use crate::poller::state::{Observation, PollerState};

/// Default poll interval (60 s)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Payload delivered to the change callback, exactly once per poller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionChange {
    /// Version observed on the first poll
    pub current_version: String,
    /// Version that triggered the notification
    pub latest_version: String,
}

type ChangeCallback = Box<dyn Fn(VersionChange) + Send + Sync>;
type IgnorePredicate = Box<dyn Fn() -> bool + Send + Sync>;

/// Configured but not yet started poller. Build via [`VersionPoller::builder`].
pub struct VersionPoller {
    fetcher: Arc<dyn VersionFetch>,
    poll_interval: Duration,
    on_new_version: Option<ChangeCallback>,
    ignore: Option<IgnorePredicate>,
    dev_mode: bool,
}

/// Builder for [`VersionPoller`].
pub struct VersionPollerBuilder {
    fetcher: Arc<dyn VersionFetch>,
    poll_interval: Duration,
    on_new_version: Option<ChangeCallback>,
    ignore: Option<IgnorePredicate>,
    dev_mode: bool,
}

impl VersionPollerBuilder {
    fn new(fetcher: Arc<dyn VersionFetch>) -> Self {
        Self {
            fetcher,
            poll_interval: DEFAULT_POLL_INTERVAL,
            on_new_version: None,
            ignore: None,
            // Mirrors the development/production signal of the host build
            dev_mode: cfg!(debug_assertions),
        }
    }

    /// Set the poll interval. A zero interval is invalid (the repeating
    /// timer requires a non-zero period) and is ignored, keeping the
    /// previous value.
    pub fn poll_interval(mut self, poll_interval: Duration) -> Self {
        if poll_interval.is_zero() {
            log::warn!(
                "Ignoring zero poll interval; keeping {:?}",
                self.poll_interval
            );
        } else {
            self.poll_interval = poll_interval;
        }
        self
    }

    /// Callback invoked once when a new version is detected. Without one the
    /// poller falls back to a prominent stderr message.
    pub fn on_new_version<F>(mut self, callback: F) -> Self
    where
        F: Fn(VersionChange) + Send + Sync + 'static,
    {
        self.on_new_version = Some(Box::new(callback));
        self
    }

    /// Predicate evaluated at activation; returning true suppresses polling
    /// altogether.
    pub fn ignore_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.ignore = Some(Box::new(predicate));
        self
    }

    /// Override the development-mode signal (defaults to
    /// `cfg!(debug_assertions)`). Polling is skipped entirely in dev mode.
    pub fn dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    pub fn build(self) -> VersionPoller {
        VersionPoller {
            fetcher: self.fetcher,
            poll_interval: self.poll_interval,
            on_new_version: self.on_new_version,
            ignore: self.ignore,
            dev_mode: self.dev_mode,
        }
    }
}

impl VersionPoller {
    pub fn builder(fetcher: Arc<dyn VersionFetch>) -> VersionPollerBuilder {
        VersionPollerBuilder::new(fetcher)
    }

    /// Activate the poller.
    ///
    /// Polls immediately, then every interval, until deactivated or a version
    /// change has been notified (at which point the task stops itself). In
    /// dev mode, or when the ignore predicate returns true, no task is
    /// spawned and the returned handle is inert.
    ///
    /// Must be called within a tokio runtime.
    pub fn start(self) -> PollerHandle {
        if self.dev_mode {
            log::debug!("Version polling disabled in development mode");
            return PollerHandle::inert();
        }
        if let Some(ignore) = &self.ignore {
            if ignore() {
                log::debug!("Version polling suppressed by ignore predicate");
                return PollerHandle::inert();
            }
        }

        let (shutdown_tx, shutdown_rx) = tokio::sync::broadcast::channel(1);
        let task = tokio::spawn(run_poll_loop(
            self.fetcher,
            self.poll_interval,
            self.on_new_version,
            shutdown_rx,
        ));

        PollerHandle {
            task: Some(task),
            shutdown: shutdown_tx,
        }
    }
}

/// Handle owning the spawned polling task.
///
/// Dropping the handle deactivates the poller.
pub struct PollerHandle {
    task: Option<tokio::task::JoinHandle<()>>,
    shutdown: tokio::sync::broadcast::Sender<()>,
}

impl PollerHandle {
    fn inert() -> Self {
        let (shutdown, _) = tokio::sync::broadcast::channel(1);
        Self {
            task: None,
            shutdown,
        }
    }

    /// True while the polling task is running.
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Deactivate: cancel the repeating timer and clear the handle.
    /// Idempotent; safe to call on an already stopped or inert handle.
    pub fn stop(&mut self) {
        let _ = self.shutdown.send(());
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Wait for the polling task to finish on its own (version change
    /// delivered). Returns immediately for inert or stopped handles.
    /// A task that ended by panicking is logged rather than mistaken for a
    /// normal finish.
    pub async fn join(&mut self) {
        if let Some(task) = self.task.as_mut() {
            if let Err(e) = task.await {
                if e.is_panic() {
                    log::error!("Polling task panicked: {e}");
                }
            }
            self.task = None;
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_poll_loop(
    fetcher: Arc<dyn VersionFetch>,
    poll_interval: Duration,
    on_new_version: Option<ChangeCallback>,
    mut shutdown_rx: tokio::sync::broadcast::Receiver<()>,
) {
    let mut state = PollerState::new();
    // First tick fires immediately, so activation polls right away
    let mut ticker = interval(poll_interval);

    loop {
        tokio::select! {
            _ = shutdown_rx.recv() => return,

            _ = ticker.tick() => {
                match fetcher.latest_version().await {
                    Ok(latest) => match state.observe(&latest) {
                        Observation::Recorded => {
                            log::debug!("Recorded current version {latest}");
                        }
                        Observation::Unchanged => {
                            log::trace!("Version unchanged ({latest})");
                        }
                        Observation::Changed { current_version, latest_version } => {
                            deliver(&on_new_version, VersionChange {
                                current_version,
                                latest_version,
                            });
                            // Stop the repeating timer for good
                            return;
                        }
                        Observation::Suppressed => {}
                    },
                    // Non-fatal: log and keep polling
                    Err(e) => log::warn!("Version check failed: {e}"),
                }
            }
        }
    }
}

fn deliver(callback: &Option<ChangeCallback>, change: VersionChange) {
    log::warn!(
        "New version {} available (running {})",
        change.latest_version,
        change.current_version
    );
    match callback {
        Some(callback) => callback(change),
        None => {
            // No callback supplied: user-facing fallback notice
            eprintln!(
                "A new version ({}) is available; you are running {}. Please restart to update.",
                change.latest_version, change.current_version
            );
        }
    }
}
