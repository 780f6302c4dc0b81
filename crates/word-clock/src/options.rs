//! Tuning for the resolver.

use crate::error::{ClockError, Result};

/// Half-width, in minutes, of the window around each five-minute mark.
pub const DEFAULT_THRESHOLD: f64 = 2.5;

/// Minutes in the first half of the hour.
pub const HALF_HOUR: f64 = 30.0;

/// Separation between canonical marks on the face ("five past", "ten past", ...).
const MARK_SPACING: f64 = 5.0;

/// Options for [`resolve`](crate::resolve()) and [`normalize`](crate::normalize()).
///
/// The threshold is fixed at construction. Values that would let the windows
/// of two adjacent five-minute marks overlap are rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockOptions {
    threshold: f64,
}

impl Default for ClockOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl ClockOptions {
    /// Build options with a custom snap threshold in minutes.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidThreshold`] unless `0 < threshold < 5`.
    pub fn with_threshold(threshold: f64) -> Result<Self> {
        if !threshold.is_finite() {
            return Err(ClockError::InvalidThreshold(format!(
                "'{threshold}' is not a finite number"
            )));
        }
        if threshold <= 0.0 || threshold >= MARK_SPACING {
            return Err(ClockError::InvalidThreshold(format!(
                "'{threshold}' must be greater than 0 and less than {MARK_SPACING} minutes"
            )));
        }
        Ok(Self { threshold })
    }

    /// The snap threshold in minutes.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Minute at or after which the displayed hour rolls forward.
    pub fn rollover_boundary(&self) -> f64 {
        HALF_HOUR + self.threshold
    }
}
