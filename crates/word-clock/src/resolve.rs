//! Assembly of a full face from the line rules.

use chrono::Timelike;
use tracing::trace;

use crate::face::ClockFace;
use crate::normalize::{normalize_time, NormalizedTime};
use crate::options::ClockOptions;
use crate::rules::LINE_RULES;

/// Run every line rule against `time` and collect the rows, top to bottom.
///
/// Pure: the same input always yields an equal face, and nothing is cached
/// between calls.
pub fn resolve(time: NormalizedTime, options: &ClockOptions) -> ClockFace {
    let face = ClockFace::new(LINE_RULES.iter().map(|rule| rule(&time, options)).collect());
    trace!(
        hour = time.hour,
        minute = time.minute,
        phrase = %face.phrase(),
        "resolved clock face"
    );
    face
}

/// Normalize a chrono time value and resolve it.
///
/// ```
/// use chrono::NaiveTime;
/// use word_clock::{resolve_at, ClockOptions};
///
/// let time = NaiveTime::from_hms_opt(2, 48, 0).unwrap();
/// let face = resolve_at(&time, &ClockOptions::default());
/// assert_eq!(face.phrase(), "IT IS TEN TO THREE");
/// ```
pub fn resolve_at<T: Timelike>(time: &T, options: &ClockOptions) -> ClockFace {
    resolve(normalize_time(time, options), options)
}
