//! Timing for import reads and library searches.
use log::{debug, log_enabled, Level};
use std::time::Instant;

/// Logs at `debug` level, when dropped, how long the enclosing scope took.
///
/// The label is only built when debug logging is on, so searches don't pay
/// for a `format!` they'd throw away.
pub(crate) struct Timer {
    label: Option<String>,
    start: Instant,
}

impl Timer {
    pub(crate) fn start<F: FnOnce() -> String>(label: F) -> Self {
        Self {
            label: log_enabled!(Level::Debug).then(label),
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if let Some(label) = &self.label {
            let elapsed = self.start.elapsed();
            debug!(
                "[timer] {} : {}.{:03}ms",
                label,
                elapsed.as_millis(),
                elapsed.subsec_micros() % 1000
            );
        }
    }
}
