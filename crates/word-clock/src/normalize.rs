//! Time normalization: wall-clock components to the `(hour, minute)` pair
//! every line rule reads.
//!
//! The hour is reduced to a 12-hour dial and rolled forward once the minute
//! passes the half-hour window, so "ten to four" lights FOUR while the wall
//! clock still reads 3:50.

use chrono::Timelike;

use crate::options::ClockOptions;

/// Hours on the dial.
const DIAL_HOURS: u32 = 12;

/// The time as the face sees it.
///
/// `hour` is in `0..=12`: it has already been rolled forward and is not
/// wrapped, so 11:45 yields 12. Rules treat 12 the same as 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedTime {
    pub hour: u32,
    /// Minute of the hour with seconds folded in, in `[0, 60)`.
    pub minute: f64,
}

/// Normalize raw wall-clock components.
///
/// Callers must pass calendar-valid components (`hour < 24`, `minute < 60`,
/// `second < 60`); nothing is validated here.
///
/// ```
/// use word_clock::{normalize, ClockOptions};
///
/// let t = normalize(14, 47, 0, &ClockOptions::default());
/// assert_eq!(t.hour, 3);
/// assert_eq!(t.minute, 47.0);
/// ```
pub fn normalize(hour: u32, minute: u32, second: u32, options: &ClockOptions) -> NormalizedTime {
    let minute = f64::from(minute) + f64::from(second) / 60.0;
    let mut hour = hour % DIAL_HOURS;
    if minute >= options.rollover_boundary() {
        hour += 1;
    }
    NormalizedTime { hour, minute }
}

/// Normalize any chrono time value (`NaiveTime`, `DateTime<Tz>`, ...).
pub fn normalize_time<T: Timelike>(time: &T, options: &ClockOptions) -> NormalizedTime {
    normalize(time.hour(), time.minute(), time.second(), options)
}
