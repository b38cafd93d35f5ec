//! Cooldown countdown formatting.

use std::fmt;

/// A wrapper around a remaining-cooldown duration in milliseconds that
/// formats as `M:SS`, rounding partial seconds up so the display never
/// shows `0:00` while a purchase is still gated.
pub struct Cooldown(pub i64);

impl fmt::Display for Cooldown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_secs = (self.0.max(0) + 999) / 1000;
        write!(f, "{}:{:02}", total_secs / 60, total_secs % 60)
    }
}
