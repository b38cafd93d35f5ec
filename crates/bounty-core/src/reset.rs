//! Daily reset oracle.
//!
//! Decides whether a new reward day has started. A "day" is the
//! calendar date in the Europe/Kyiv timezone, and the reset only fires
//! from 07:00 local time onward. The oracle is stateless per call:
//! idempotence comes from the caller rewriting the marker immediately
//! after acting on a true result, so the next check within the same
//! day compares equal and returns false.

use jiff::{tz::TimeZone, Timestamp, Zoned};
use log::warn;

/// Timezone that defines the reward day.
pub const RESET_TIMEZONE: &str = "Europe/Kyiv";

/// Local hour-of-day from which the reset may fire.
pub const RESET_HOUR: i8 = 7;

/// Clock for the daily reset, pinned to the reward timezone.
#[derive(Debug, Clone)]
pub struct ResetClock {
    tz: TimeZone,
}

impl ResetClock {
    /// Create a clock for [`RESET_TIMEZONE`].
    ///
    /// If the system tzdb cannot resolve the zone the clock degrades
    /// to UTC with a warning rather than failing; reset timing shifts
    /// but no state is ever lost.
    pub fn new() -> Self {
        let tz = match TimeZone::get(RESET_TIMEZONE) {
            Ok(tz) => tz,
            Err(e) => {
                warn!("Timezone {RESET_TIMEZONE} unavailable, falling back to UTC: {e}");
                TimeZone::UTC
            }
        };
        Self { tz }
    }

    fn local(&self, now: Timestamp) -> Zoned {
        now.to_zoned(self.tz.clone())
    }

    /// Whether a new reward day has started since the stored marker.
    ///
    /// Returns false when no marker exists: a brand-new install must
    /// never have its state wiped on first run. Otherwise fires once
    /// the local calendar date differs from the marker and the local
    /// hour is at or past [`RESET_HOUR`]. The predicate is date-based,
    /// so a process that was asleep at 07:00 still resets on its first
    /// check afterwards.
    pub fn should_reset(&self, now: Timestamp, marker: Option<&str>) -> bool {
        let Some(marker) = marker else {
            return false;
        };
        let local = self.local(now);
        let is_new_day = local.date().to_string() != marker;
        is_new_day && local.hour() >= RESET_HOUR
    }

    /// The marker for the current reward day: the local calendar date
    /// in ISO form. The caller stores this right after a reset.
    pub fn date_marker(&self, now: Timestamp) -> String {
        self.local(now).date().to_string()
    }
}

impl Default for ResetClock {
    fn default() -> Self {
        Self::new()
    }
}
