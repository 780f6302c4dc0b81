//! Fuzzy matching of a minute value against a canonical mark.

/// Minutes in an hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Whether `value` lies within `threshold` minutes of `target`, or of its
/// mirror `60 - target`.
///
/// The mirror lets a single target serve both the "past" and the "to"
/// reading: a target of 10 matches 10 ("ten past") and 50 ("ten to"). A
/// target of 0 mirrors to 60, so it also matches the last `threshold`
/// minutes of the hour.
///
/// ```
/// use word_clock::within_threshold;
///
/// assert!(within_threshold(11.0, 10.0, 2.5));
/// assert!(within_threshold(49.0, 10.0, 2.5));
/// assert!(!within_threshold(30.0, 10.0, 2.5));
/// ```
pub fn within_threshold(value: f64, target: f64, threshold: f64) -> bool {
    (value - target).abs() < threshold || (value - (MINUTES_PER_HOUR - target)).abs() < threshold
}
