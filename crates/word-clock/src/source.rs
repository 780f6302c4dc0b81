//! Where "now" comes from.
//!
//! The resolver never reads a clock. Callers that refresh the face on a
//! timer hold a [`TimeSource`] and pass each reading to
//! [`resolve_at`](crate::resolve_at).

use chrono::{Local, NaiveTime, Utc};
use chrono_tz::Tz;

/// A provider of the current wall-clock time.
pub trait TimeSource {
    fn now(&self) -> NaiveTime;
}

/// The operating system clock, read in the machine's local zone or in a
/// fixed IANA zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    zone: Option<Tz>,
}

impl SystemClock {
    /// Local time of the host.
    pub fn local() -> Self {
        Self { zone: None }
    }

    /// Wall-clock time in `zone`, regardless of the host's setting.
    pub fn in_zone(zone: Tz) -> Self {
        Self { zone: Some(zone) }
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> NaiveTime {
        match self.zone {
            Some(tz) => Utc::now().with_timezone(&tz).time(),
            None => Local::now().time(),
        }
    }
}

/// Always reports the same time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl TimeSource for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

impl<S: TimeSource + ?Sized> TimeSource for &S {
    fn now(&self) -> NaiveTime {
        (**self).now()
    }
}
