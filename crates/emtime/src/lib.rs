//! emtime crate.
//!
//! A small stopwatch built on a monotonic clock: elapsed time with pause/resume,
//! per-call lap deltas, and a periodic "tick" signal for interval polling loops.

pub mod clock;
pub mod timer;

pub mod logging;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use timer::{Timer, TimerConfig, TimerError};
