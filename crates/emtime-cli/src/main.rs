mod args;
mod driver;

use anyhow::{Context, Result};
use clap::Parser;
use emtime::logging::{init_logging, LoggingConfig};
use emtime::Timer;

use args::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log_filter.clone(),
        ..LoggingConfig::default()
    });

    let schedule = args.schedule()?;
    let mut timer = Timer::from_config(args.timer_config())
        .context("failed to build timer from command line options")?;
    log::debug!("running {schedule:?} with interval {}s", timer.interval());

    let summary = driver::run(&mut timer, &schedule, std::thread::sleep, |e| {
        println!(
            "tick #{:<4} elapsed {:>9.4}s  ticks {:>5}  since tick {:.4}s",
            e.index, e.elapsed, e.elapsed_ticks, e.tick_delta
        );
    });

    println!(
        "done: {} tick(s), elapsed {:.4}s, banked {:.4}s, laps {:.4}s",
        summary.ticks, summary.elapsed, summary.accumulated, summary.lap_total
    );
    Ok(())
}
