//! Clock sources.
//!
//! `Timer` reads time only through the `Clock` trait so that timing logic can be
//! exercised without sleeping:
//! - `MonotonicClock` for real use (wraps `Instant::now()`)
//! - `ManualClock` for tests and simulations (moves only when advanced)

mod manual;
mod monotonic;

use std::time::Instant;

pub use manual::ManualClock;
pub use monotonic::MonotonicClock;

/// A monotonic time source.
///
/// Successive calls to `now` on the same clock must never go backwards.
pub trait Clock {
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
