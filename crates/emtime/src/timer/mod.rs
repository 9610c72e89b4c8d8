//! Timer subsystem.
//!
//! Intended usage:
//! - build one `Timer` per measured activity (or per polling loop)
//! - poll `tick()` to run work once per `interval`
//! - use `delta()` for per-call laps and `elapsed()` for total running time

mod config;
mod error;
mod timer;

pub use config::TimerConfig;
pub use error::TimerError;
pub use timer::Timer;
