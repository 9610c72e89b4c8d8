use std::time::{Duration, Instant};

use emtime::{Clock, Timer};

/// When to stop and when to pause/resume, in seconds of driver wall time.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub duration: f64,
    pub poll: Duration,
    pub pause_at: Option<f64>,
    pub resume_at: Option<f64>,
}

/// One observed tick.
#[derive(Debug, Copy, Clone)]
pub struct TickEvent {
    /// 1-based count of `tick()` calls that returned true.
    pub index: u64,
    pub elapsed: f64,
    pub elapsed_ticks: u64,
    pub tick_delta: f64,
}

/// End-of-run totals.
#[derive(Debug, Copy, Clone)]
pub struct Summary {
    pub ticks: u64,
    pub elapsed: f64,
    pub accumulated: f64,
    /// Sum of every `delta()` lap taken by the loop.
    pub lap_total: f64,
}

/// Polls `timer` until `schedule.duration` has passed on the timer's clock.
///
/// `sleep` is called between polls; `on_tick` receives every tick.
pub fn run<C: Clock>(
    timer: &mut Timer<C>,
    schedule: &Schedule,
    mut sleep: impl FnMut(Duration),
    mut on_tick: impl FnMut(&TickEvent),
) -> Summary {
    let origin = timer.clock().now();
    let mut pause_pending = schedule.pause_at;
    let mut resume_pending = schedule.resume_at;
    let mut ticks = 0;
    let mut lap_total = 0.0;

    loop {
        let wall = wall_secs(origin, timer.clock().now());

        if pause_pending.is_some_and(|at| wall >= at) {
            timer.pause();
            pause_pending = None;
        }
        if resume_pending.is_some_and(|at| wall >= at) {
            timer.resume();
            resume_pending = None;
        }

        if timer.tick() {
            ticks += 1;
            let event = TickEvent {
                index: ticks,
                elapsed: timer.elapsed(),
                elapsed_ticks: timer.elapsed_ticks_int(),
                tick_delta: timer.tick_delta(),
            };
            on_tick(&event);
        }

        lap_total += timer.delta();

        if wall >= schedule.duration {
            break;
        }
        sleep(schedule.poll);
    }

    Summary {
        ticks,
        elapsed: timer.elapsed(),
        accumulated: timer.accumulated(),
        lap_total,
    }
}

fn wall_secs(origin: Instant, now: Instant) -> f64 {
    now.saturating_duration_since(origin).as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use emtime::{ManualClock, TimerConfig};

    fn schedule(duration: f64) -> Schedule {
        Schedule {
            duration,
            poll: Duration::from_millis(10),
            pause_at: None,
            resume_at: None,
        }
    }

    fn drive(config: TimerConfig, schedule: &Schedule) -> (Summary, Vec<TickEvent>) {
        let clock = ManualClock::new();
        let mut timer = Timer::with_clock(config, clock.clone()).unwrap();
        let mut events = Vec::new();
        let summary = run(&mut timer, schedule, |d| clock.advance(d), |e| events.push(*e));
        (summary, events)
    }

    #[test]
    fn counts_ticks_over_the_run() {
        // Boundaries need strictly more than one interval, so the 10ms poll
        // sees them at 0.11, 0.21, ... 0.91.
        let (summary, events) = drive(TimerConfig::new(0.1), &schedule(1.0));
        assert_eq!(summary.ticks, 9);
        assert_eq!(events.len(), 9);
        assert_eq!(events.last().map(|e| e.index), Some(9));
        assert!((summary.elapsed - 1.0).abs() < 1e-6);
        assert!((summary.lap_total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn tick_events_are_consistent() {
        let (_, events) = drive(TimerConfig::new(0.25), &schedule(1.0));
        for e in &events {
            assert!(e.tick_delta < 0.25);
            assert_eq!(e.elapsed_ticks, (e.elapsed / 0.25).floor() as u64);
        }
    }

    #[test]
    fn pause_window_is_excluded_from_elapsed() {
        let mut s = schedule(1.0);
        s.pause_at = Some(0.3);
        s.resume_at = Some(0.5);
        let (summary, _) = drive(TimerConfig::new(1.0), &s);

        assert!((summary.elapsed - 0.8).abs() < 1e-6, "{}", summary.elapsed);
        assert!((summary.accumulated - 0.3).abs() < 1e-6);
        assert!((summary.lap_total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn start_paused_without_resume_reports_zero() {
        let (summary, _) = drive(TimerConfig::new(1.0).paused(true), &schedule(0.5));
        assert_eq!(summary.elapsed, 0.0);
    }

    #[test]
    fn zero_duration_polls_once() {
        let mut sleeps = 0;
        let clock = ManualClock::new();
        let mut timer = Timer::with_clock(TimerConfig::default(), clock.clone()).unwrap();
        let summary = run(&mut timer, &schedule(0.0), |_| sleeps += 1, |_| {});
        assert_eq!(sleeps, 0);
        assert_eq!(summary.ticks, 0);
    }
}
