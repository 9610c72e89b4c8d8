use std::time::Duration;

use anyhow::{ensure, Result};
use clap::Parser;
use emtime::TimerConfig;

use crate::driver::Schedule;

/// Run a tick timer and print every tick.
#[derive(Debug, Parser)]
#[command(name = "emtime", version, about)]
pub struct Args {
    /// Seconds between ticks.
    #[arg(long, default_value_t = 1.0)]
    pub interval: f64,

    /// Total seconds to run.
    #[arg(long, default_value_t = 5.0)]
    pub duration: f64,

    /// Milliseconds to sleep between polls.
    #[arg(long, default_value_t = 10)]
    pub poll: u64,

    /// Pause the timer this many seconds into the run.
    #[arg(long)]
    pub pause_at: Option<f64>,

    /// Resume the timer this many seconds into the run.
    #[arg(long)]
    pub resume_at: Option<f64>,

    /// Start with the timer paused.
    #[arg(long)]
    pub start_paused: bool,

    /// Log filter (env_logger syntax); overrides RUST_LOG.
    #[arg(long = "log")]
    pub log_filter: Option<String>,
}

impl Args {
    pub fn timer_config(&self) -> TimerConfig {
        TimerConfig::new(self.interval).paused(self.start_paused)
    }

    pub fn schedule(&self) -> Result<Schedule> {
        ensure!(
            self.duration.is_finite() && self.duration >= 0.0,
            "--duration must be a finite number of seconds >= 0 (got {})",
            self.duration
        );
        ensure!(self.poll > 0, "--poll must be at least 1 ms");
        for (flag, value) in [("--pause-at", self.pause_at), ("--resume-at", self.resume_at)] {
            if let Some(secs) = value {
                ensure!(
                    secs.is_finite() && secs >= 0.0,
                    "{flag} must be a finite number of seconds >= 0 (got {secs})"
                );
            }
        }

        Ok(Schedule {
            duration: self.duration,
            poll: Duration::from_millis(self.poll),
            pause_at: self.pause_at,
            resume_at: self.resume_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("emtime").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let a = parse(&[]);
        assert_eq!(a.timer_config(), TimerConfig::default());
        let s = a.schedule().unwrap();
        assert_eq!(s.duration, 5.0);
        assert_eq!(s.poll, Duration::from_millis(10));
        assert!(s.pause_at.is_none() && s.resume_at.is_none());
    }

    #[test]
    fn all_flags() {
        let a = parse(&[
            "--interval", "0.25", "--duration", "2", "--poll", "5",
            "--pause-at", "0.5", "--resume-at", "1.5", "--start-paused", "--log", "debug",
        ]);
        assert_eq!(a.timer_config(), TimerConfig { interval: 0.25, start_paused: true });
        assert_eq!(a.log_filter.as_deref(), Some("debug"));

        let s = a.schedule().unwrap();
        assert_eq!(s.pause_at, Some(0.5));
        assert_eq!(s.resume_at, Some(1.5));
        assert_eq!(s.poll, Duration::from_millis(5));
    }

    #[test]
    fn rejects_bad_schedule() {
        assert!(parse(&["--duration=-1"]).schedule().is_err());
        assert!(parse(&["--poll", "0"]).schedule().is_err());
        assert!(parse(&["--pause-at=-0.5"]).schedule().is_err());
    }

    #[test]
    fn interval_is_checked_by_the_timer() {
        let a = parse(&["--interval", "0"]);
        assert!(a.timer_config().validate().is_err());
    }
}
