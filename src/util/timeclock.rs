//! Time-tracking widget logic.
//!
//! DESIGN
//! ======
//! The current time is injected as epoch milliseconds so the accounting is
//! deterministic under test; the widget passes `js_sys::Date::now()` in the
//! browser.

#[cfg(test)]
#[path = "timeclock_test.rs"]
mod timeclock_test;

/// Accumulated work time across start/stop cycles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeClock {
    /// Seconds accumulated by completed start/stop cycles.
    accumulated_secs: u64,
    /// Epoch milliseconds of the running cycle's start, if running.
    running_since_ms: Option<f64>,
}

impl TimeClock {
    /// Start a cycle; no-op if already running.
    pub fn start(&mut self, now_ms: f64) {
        if self.running_since_ms.is_none() {
            self.running_since_ms = Some(now_ms);
        }
    }

    /// Stop the running cycle and fold it into the accumulated total.
    pub fn stop(&mut self, now_ms: f64) {
        if let Some(started_ms) = self.running_since_ms.take() {
            self.accumulated_secs += elapsed_whole_secs(started_ms, now_ms);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running_since_ms.is_some()
    }

    /// Total tracked seconds, including the running cycle.
    pub fn elapsed_secs(&self, now_ms: f64) -> u64 {
        let running = self
            .running_since_ms
            .map_or(0, |started_ms| elapsed_whole_secs(started_ms, now_ms));
        self.accumulated_secs + running
    }

    /// Discard all tracked time.
    pub fn reset(&mut self) {
        self.accumulated_secs = 0;
        self.running_since_ms = None;
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn elapsed_whole_secs(started_ms: f64, now_ms: f64) -> u64 {
    // A clock that moved backwards counts as zero, not as underflow.
    (((now_ms - started_ms) / 1000.0).floor().max(0.0)) as u64
}

/// Render seconds as `h:mm:ss`.
pub fn format_elapsed(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}
