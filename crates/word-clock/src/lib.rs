//! # word-clock
//!
//! Deterministic resolution of a time of day onto a fixed English word clock
//! face ("IT IS HALF PAST THREE").
//!
//! Minutes snap to the nearest five-minute mark within a threshold window
//! (2.5 minutes by default), the hour rolls forward for "to the hour"
//! phrases, and each of the ten rows of the grid is resolved by its own rule
//! into highlighted and dimmed segments. Everything here is a pure function
//! of its inputs: callers own the clock, the refresh timer and the painting.
//!
//! ## Modules
//!
//! - [`normalize`] — wall-clock components → dial hour and fractional minute
//! - [`threshold`] — fuzzy matching of a minute against a mark and its mirror
//! - [`rules`] — the ten line rules
//! - [`resolve`](mod@resolve) — assembly of a full [`ClockFace`]
//! - [`face`] — segment, line and face types
//! - [`time`] — parsing of caller-supplied times and zones
//! - [`source`] — system and fixed time sources
//! - [`options`] — resolver tuning
//! - [`error`] — error types

pub mod error;
pub mod face;
pub mod normalize;
pub mod options;
pub mod resolve;
pub mod rules;
pub mod source;
pub mod threshold;
pub mod time;

pub use error::ClockError;
pub use face::{ClockFace, Line, Segment};
pub use normalize::{normalize, normalize_time, NormalizedTime};
pub use options::{ClockOptions, DEFAULT_THRESHOLD};
pub use resolve::{resolve, resolve_at};
pub use rules::{FiveMark, LineRule, LINE_RULES};
pub use source::{FixedClock, SystemClock, TimeSource};
pub use threshold::within_threshold;
