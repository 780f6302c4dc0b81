//! Turning caller-supplied text into wall-clock times.
//!
//! Nothing here reads the system clock; see [`crate::source`] for that.

use chrono::{DateTime, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::error::{ClockError, Result};

/// Parse a wall-clock time.
///
/// Accepts `HH:MM`, `HH:MM:SS`, or an RFC 3339 datetime, in which case the
/// datetime's own local time is used (`2026-03-15T14:05:00-05:00` -> 14:05).
///
/// # Errors
///
/// Returns [`ClockError::InvalidTime`] if none of the forms match.
///
/// ```
/// use word_clock::time::parse_wall_time;
///
/// let t = parse_wall_time("09:15").unwrap();
/// assert_eq!(t.to_string(), "09:15:00");
/// ```
pub fn parse_wall_time(s: &str) -> Result<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.time()))
        .ok_or_else(|| {
            ClockError::InvalidTime(format!(
                "'{s}': expected HH:MM, HH:MM:SS or an RFC 3339 datetime"
            ))
        })
}

/// The wall-clock time of an RFC 3339 instant in an IANA timezone.
///
/// # Errors
///
/// Returns [`ClockError::InvalidDatetime`] if the datetime cannot be parsed,
/// or [`ClockError::InvalidTimezone`] if the zone is unknown.
pub fn wall_time_in(datetime: &str, timezone: &str) -> Result<NaiveTime> {
    let dt = parse_rfc3339(datetime)?;
    let tz = parse_timezone(timezone)?;
    Ok(dt.with_timezone(&tz).time())
}

/// Parse an IANA timezone name.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.parse::<Tz>()
        .map_err(|_| ClockError::InvalidTimezone(format!("'{s}'")))
}

fn parse_rfc3339(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ClockError::InvalidDatetime(format!("'{s}': {e}")))
}
