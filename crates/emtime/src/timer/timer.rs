use std::time::{Duration, Instant};

use crate::clock::{Clock, MonotonicClock};

use super::config::TimerConfig;
use super::error::TimerError;

/// Stopwatch with pause/resume, per-call laps and interval ticks.
///
/// All readings are in seconds (`f64`). The timer keeps three independent
/// anchors, each captured from the same clock:
/// - the running-segment origin used by `elapsed()`
/// - the lap origin used by `delta()`
/// - the tick anchor used by `tick_delta()` / `tick()`
///
/// Tick bookkeeping follows the clock, not the running state: boundaries keep
/// being crossed while the timer is paused.
///
/// Accessors that touch the clock take `&mut self` because reading may advance
/// the tick anchor. Sharing a `Timer` between threads needs an outer lock.
#[derive(Debug, Clone)]
pub struct Timer<C: Clock = MonotonicClock> {
    clock: C,
    interval: f64,
    start_time: Instant,
    last_delta_time: Instant,
    last_tick_time: Instant,
    is_paused: bool,
    has_ticked: bool,
    accumulated: f64,
}

impl Timer {
    /// Creates a timer on the process monotonic clock.
    ///
    /// `interval` is the tick period in seconds and must be finite and > 0.
    pub fn new(interval: f64, start_paused: bool) -> Result<Self, TimerError> {
        Self::from_config(TimerConfig { interval, start_paused })
    }

    pub fn from_config(config: TimerConfig) -> Result<Self, TimerError> {
        Self::with_clock(config, MonotonicClock)
    }
}

impl<C: Clock> Timer<C> {
    /// Creates a timer reading time from `clock`.
    pub fn with_clock(config: TimerConfig, clock: C) -> Result<Self, TimerError> {
        config.validate()?;
        Ok(Self::build(config, clock))
    }

    fn build(config: TimerConfig, clock: C) -> Self {
        let now = clock.now();
        Self {
            clock,
            interval: config.interval,
            start_time: now,
            last_delta_time: now,
            last_tick_time: now,
            is_paused: config.start_paused,
            has_ticked: false,
            accumulated: 0.0,
        }
    }

    /// Tick period in seconds.
    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    /// Seconds banked by earlier pauses.
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Whether a tick boundary has been detected and not yet consumed by `tick()`.
    ///
    /// Does not read the clock; boundaries are only detected by `elapsed()`,
    /// `tick_delta()`, `tick()` and `pause()`.
    pub fn has_ticked(&self) -> bool {
        self.has_ticked
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Total running time in seconds, excluding paused spans.
    ///
    /// While paused this is constant and equal to the banked time.
    pub fn elapsed(&mut self) -> f64 {
        if self.is_paused {
            return self.accumulated;
        }

        let now = self.clock.now();
        self.advance_ticks(now);
        secs_between(self.start_time, now) + self.accumulated
    }

    /// Fractional number of intervals covered by `elapsed()`.
    pub fn elapsed_ticks(&mut self) -> f64 {
        self.elapsed() / self.interval
    }

    /// Whole number of intervals covered by `elapsed()`.
    pub fn elapsed_ticks_int(&mut self) -> u64 {
        self.elapsed_ticks().floor() as u64
    }

    /// Seconds since the last tick boundary (or since construction before the first).
    pub fn tick_delta(&mut self) -> f64 {
        let now = self.clock.now();
        self.advance_ticks(now)
    }

    /// Returns `true` once for every call that finds at least one new boundary.
    ///
    /// Skipping several intervals between calls still yields a single `true`.
    pub fn tick(&mut self) -> bool {
        self.tick_delta();
        std::mem::take(&mut self.has_ticked)
    }

    /// Seconds since the previous call (or since construction on the first call).
    pub fn delta(&mut self) -> f64 {
        let now = self.clock.now();
        let dt = secs_between(self.last_delta_time, now);
        self.last_delta_time = now;
        dt
    }

    /// Restarts the running segment at the current instant.
    ///
    /// Banked time, pause state and tick state are kept. While paused this has
    /// no visible effect; see `restart()` for a full zero.
    pub fn reset(&mut self) {
        self.start_time = self.clock.now();
    }

    /// Zeroes the timer: banked time, lap origin and tick anchor all restart now.
    ///
    /// The pause state is kept.
    pub fn restart(&mut self) {
        let now = self.clock.now();
        self.start_time = now;
        self.last_delta_time = now;
        self.last_tick_time = now;
        self.has_ticked = false;
        self.accumulated = 0.0;
        log::debug!("timer restarted (paused: {})", self.is_paused);
    }

    /// Freezes `elapsed()` at its current value.
    ///
    /// Calling `pause()` on a paused timer does nothing.
    pub fn pause(&mut self) {
        if self.is_paused {
            log::debug!("timer already paused; ignoring pause");
            return;
        }

        let now = self.clock.now();
        self.advance_ticks(now);
        self.accumulated += secs_between(self.start_time, now);
        self.is_paused = true;
        log::debug!("timer paused at {:.6}s", self.accumulated);
    }

    /// Continues measuring on top of the banked time.
    pub fn resume(&mut self) {
        self.is_paused = false;
        self.start_time = self.clock.now();
        log::debug!("timer resumed from {:.6}s", self.accumulated);
    }

    /// Moves the tick anchor forward by whole intervals and returns the
    /// remaining seconds since the anchor.
    fn advance_ticks(&mut self, now: Instant) -> f64 {
        let raw = now.saturating_duration_since(self.last_tick_time);
        let raw_secs = raw.as_secs_f64();

        if raw_secs > self.interval {
            let crossed = (raw_secs / self.interval).floor();
            // Rounding into `Duration` must not push the anchor past `now`.
            let step = Duration::try_from_secs_f64(crossed * self.interval)
                .map_or(raw, |step| step.min(raw));

            self.last_tick_time += step;
            self.has_ticked = true;
            log::trace!("tick boundary crossed ({crossed} interval(s))");
        }

        secs_between(self.last_tick_time, now)
    }
}

impl<C: Clock + Default> Default for Timer<C> {
    fn default() -> Self {
        Self::build(TimerConfig::default(), C::default())
    }
}

fn secs_between(earlier: Instant, later: Instant) -> f64 {
    later.saturating_duration_since(earlier).as_secs_f64()
}
