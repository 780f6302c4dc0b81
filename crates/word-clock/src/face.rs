//! The resolved clock face: lines of highlighted and dimmed segments.

use std::fmt;

use serde::Serialize;

/// One run of grid letters, lit or dimmed.
///
/// `text` is copied verbatim from the grid, letters separated by single
/// spaces and ending in a space (`"I T "`). Renderers must keep the spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: &'static str,
    pub highlighted: bool,
}

impl Segment {
    /// A segment that is always lit.
    pub const fn lit(text: &'static str) -> Self {
        Self {
            text,
            highlighted: true,
        }
    }

    /// Filler letters that are never lit.
    pub const fn dim(text: &'static str) -> Self {
        Self {
            text,
            highlighted: false,
        }
    }

    /// Lit iff `on`.
    pub const fn switch(text: &'static str, on: bool) -> Self {
        Self {
            text,
            highlighted: on,
        }
    }

    /// The letters with grid spacing removed (`"O ' C L O C K "` -> `"O'CLOCK"`).
    pub fn word(&self) -> String {
        self.text.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

/// One row of the grid, segments in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    segments: Vec<Segment>,
}

impl Line {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The row's letters exactly as emitted, spacing included.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text).collect()
    }

    pub fn highlighted(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.iter().filter(|s| s.highlighted)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(segment.text)?;
        }
        Ok(())
    }
}

/// A complete resolution snapshot: every row of the face, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockFace {
    lines: Vec<Line>,
}

impl ClockFace {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Lit words in reading order.
    pub fn highlighted_words(&self) -> impl Iterator<Item = String> + '_ {
        self.lines
            .iter()
            .flat_map(|line| line.highlighted())
            .map(Segment::word)
    }

    /// The lit words joined into a sentence, e.g. `"IT IS TEN TO THREE"`.
    ///
    /// ```
    /// use word_clock::{resolve_at, ClockOptions};
    /// use chrono::NaiveTime;
    ///
    /// let time = NaiveTime::from_hms_opt(15, 30, 0).unwrap();
    /// let face = resolve_at(&time, &ClockOptions::default());
    /// assert_eq!(face.phrase(), "IT IS HALF PAST THREE");
    /// ```
    pub fn phrase(&self) -> String {
        self.highlighted_words().collect::<Vec<_>>().join(" ")
    }
}

impl fmt::Display for ClockFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ClockFace {
        ClockFace::new(vec![
            Line::new(vec![
                Segment::lit("I T "),
                Segment::dim("K "),
                Segment::lit("I S "),
            ]),
            Line::new(vec![
                Segment::switch("T E N ", false),
                Segment::dim("B "),
                Segment::switch("O ' C L O C K ", true),
            ]),
        ])
    }

    #[test]
    fn test_word_strips_grid_spacing() {
        assert_eq!(Segment::lit("Q U A R T E R ").word(), "QUARTER");
        assert_eq!(Segment::lit("O ' C L O C K ").word(), "O'CLOCK");
    }

    #[test]
    fn test_line_text_keeps_trailing_spaces() {
        let face = sample();
        assert_eq!(face.lines()[0].text(), "I T K I S ");
        assert_eq!(face.lines()[0].to_string(), "I T K I S ");
    }

    #[test]
    fn test_phrase_joins_lit_words() {
        assert_eq!(sample().phrase(), "IT IS O'CLOCK");
    }

    #[test]
    fn test_display_one_row_per_line() {
        let rendered = sample().to_string();
        assert_eq!(rendered, "I T K I S \nT E N B O ' C L O C K ");
    }

    #[test]
    fn test_serializes_segments_in_order() {
        let json = serde_json::to_value(sample()).unwrap();
        let first = &json["lines"][0]["segments"][0];
        assert_eq!(first["text"], "I T ");
        assert_eq!(first["highlighted"], true);
        assert_eq!(json["lines"][1]["segments"][0]["highlighted"], false);
    }
}
