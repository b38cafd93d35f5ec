//! Watch mode: periodic daily-reset polling.
//!
//! Checks the reset predicate once a minute. The predicate is
//! date-based, so a reset is never missed even if the process was
//! asleep at 07:00. The first check runs immediately on startup.
//! Ctrl-c stops the loop, dropping the timer.

use std::time::Duration;

use anyhow::{Context, Result};
use bounty_core::Tracker;
use jiff::Timestamp;
use log::info;
use tokio::{signal, time};

const RESET_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Runs the reset polling loop until ctrl-c.
pub async fn run(mut tracker: Tracker) -> Result<()> {
    let mut ticker = time::interval(RESET_POLL_INTERVAL);
    println!("Watching for the daily reset; press ctrl-c to stop.");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if tracker.maybe_reset(Timestamp::now()) {
                    info!("Daily reset applied");
                    println!("Daily reset: mission progress cleared for the new cycle.");
                }
            }
            result = signal::ctrl_c() => {
                result.context("Failed to listen for ctrl-c")?;
                info!("Watch mode stopped");
                break;
            }
        }
    }

    Ok(())
}
