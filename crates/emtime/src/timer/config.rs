use super::error::TimerError;

/// Timer construction options.
///
/// `interval` is the tick period in seconds. `start_paused` selects the initial
/// state; a paused timer reports zero elapsed time until resumed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TimerConfig {
    pub interval: f64,
    pub start_paused: bool,
}

impl TimerConfig {
    /// Running timer with the given tick interval.
    pub fn new(interval: f64) -> Self {
        Self { interval, start_paused: false }
    }

    pub fn with_interval(mut self, interval: f64) -> Self {
        self.interval = interval;
        self
    }

    pub fn paused(mut self, start_paused: bool) -> Self {
        self.start_paused = start_paused;
        self
    }

    /// Checks that the interval is a finite, strictly positive number of seconds.
    pub fn validate(&self) -> Result<(), TimerError> {
        if self.interval.is_finite() && self.interval > 0.0 {
            Ok(())
        } else {
            Err(TimerError::InvalidInterval(self.interval))
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self { interval: 1.0, start_paused: false }
    }
}
