//! Progress reporting boundary.
//!
//! Status lines are observational only — they never affect control flow.
//! The embedding application may bridge them to a terminal spinner or UI;
//! the default forwards to the tracing subscriber.

use tracing::info;

/// Fire-and-forget status sink for deploy progress.
pub trait ProgressReporter: Send + Sync {
    fn status(&self, message: &str);
}

/// Default reporter: emits status lines through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl ProgressReporter for LogReporter {
    fn status(&self, message: &str) {
        info!("{message}");
    }
}

/// Reporter that discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn status(&self, _message: &str) {}
}
