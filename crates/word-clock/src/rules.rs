//! The ten line rules of the face.
//!
//! Each rule is a plain function of the normalized time and owns one row of
//! the grid. Rules never look at each other's output; [`LINE_RULES`] lists
//! them top to bottom.
//!
//! ```text
//! I T K I S L D F X L C
//! A V Q U A R T E R M Y
//! T W E N T Y F I V E Z
//! H A L F J T E N G T O
//! D R P A S T F N I N E
//! T W O F I V E F O U R
//! O N E S I X T H R E E
//! E I G H T E L E V E N
//! S E V E N T W E L V E
//! T E N B O ' C L O C K
//! ```

use crate::face::{Line, Segment};
use crate::normalize::NormalizedTime;
use crate::options::{ClockOptions, HALF_HOUR};
use crate::threshold::within_threshold;

/// A rule producing one row of the face.
pub type LineRule = fn(&NormalizedTime, &ClockOptions) -> Line;

/// Every row of the face, top to bottom.
pub const LINE_RULES: [LineRule; 10] = [
    it_is,
    quarter,
    twenty_five,
    half_ten_to,
    past_nine,
    two_five_four,
    one_six_three,
    eight_eleven,
    seven_twelve,
    ten_oclock,
];

fn near(t: &NormalizedTime, mark: f64, options: &ClockOptions) -> bool {
    within_threshold(t.minute, mark, options.threshold())
}

// ── Minute rows ─────────────────────────────────────────────────────────────

/// Row 1: "IT IS", always lit.
pub fn it_is(_: &NormalizedTime, _: &ClockOptions) -> Line {
    Line::new(vec![
        Segment::lit("I T "),
        Segment::dim("K "),
        Segment::lit("I S "),
        Segment::dim("L D F X L C "),
    ])
}

/// Row 2: "A QUARTER" around quarter past and quarter to.
pub fn quarter(t: &NormalizedTime, options: &ClockOptions) -> Line {
    let q = near(t, 15.0, options);
    Line::new(vec![
        Segment::switch("A ", q),
        Segment::dim("V "),
        Segment::switch("Q U A R T E R ", q),
        Segment::dim("M Y "),
    ])
}

/// Which of row 3's mutually exclusive readings applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiveMark {
    Twenty,
    TwentyFive,
    Five,
    Unlit,
}

impl FiveMark {
    /// First match wins, in the order twenty, twenty-five, five.
    pub fn classify(minute: f64, threshold: f64) -> Self {
        if within_threshold(minute, 20.0, threshold) {
            FiveMark::Twenty
        } else if within_threshold(minute, 25.0, threshold) {
            FiveMark::TwentyFive
        } else if within_threshold(minute, 5.0, threshold) {
            FiveMark::Five
        } else {
            FiveMark::Unlit
        }
    }
}

/// Row 3: "TWENTY", "TWENTY FIVE" or "FIVE".
///
/// "TWENTY FIVE" is emitted as two lit segments, `T W E N T Y ` and
/// `F I V E `, so [`ClockFace::phrase`](crate::ClockFace::phrase) separates the
/// words. The row text is the same as a single `T W E N T Y F I V E ` segment,
/// so JSON consumers see three segments on this row in that branch.
pub fn twenty_five(t: &NormalizedTime, options: &ClockOptions) -> Line {
    let segments = match FiveMark::classify(t.minute, options.threshold()) {
        FiveMark::Twenty => vec![Segment::lit("T W E N T Y "), Segment::dim("F I V E Z ")],
        FiveMark::TwentyFive => vec![
            Segment::lit("T W E N T Y "),
            Segment::lit("F I V E "),
            Segment::dim("Z "),
        ],
        FiveMark::Five => vec![
            Segment::dim("T W E N T Y "),
            Segment::lit("F I V E "),
            Segment::dim("Z "),
        ],
        FiveMark::Unlit => vec![Segment::dim("T W E N T Y F I V E Z ")],
    };
    Line::new(segments)
}

/// Row 4: "HALF", "TEN" and the "TO" of the second half hour.
pub fn half_ten_to(t: &NormalizedTime, options: &ClockOptions) -> Line {
    let half = near(t, HALF_HOUR, options);
    let ten = near(t, 10.0, options);
    let second_half = t.minute >= HALF_HOUR && !half && t.minute != 0.0;
    Line::new(vec![
        Segment::switch("H A L F ", half),
        Segment::dim("J "),
        Segment::switch("T E N ", ten),
        Segment::dim("G "),
        Segment::switch("T O ", second_half),
    ])
}

/// Row 5: "PAST" for the first half hour, and the hour NINE.
///
/// `<=` here against the `>=` of the rollover means a minute of exactly the
/// boundary lights PAST and the next hour together.
pub fn past_nine(t: &NormalizedTime, options: &ClockOptions) -> Line {
    let first_half = t.minute <= options.rollover_boundary() && t.minute != 0.0;
    Line::new(vec![
        Segment::dim("D R "),
        Segment::switch("P A S T ", first_half),
        Segment::dim("F "),
        Segment::switch("N I N E ", t.hour == 9),
    ])
}

// ── Hour rows ───────────────────────────────────────────────────────────────

pub fn two_five_four(t: &NormalizedTime, _: &ClockOptions) -> Line {
    Line::new(vec![
        Segment::switch("T W O ", t.hour == 2),
        Segment::switch("F I V E ", t.hour == 5),
        Segment::switch("F O U R ", t.hour == 4),
    ])
}

pub fn one_six_three(t: &NormalizedTime, _: &ClockOptions) -> Line {
    Line::new(vec![
        Segment::switch("O N E ", t.hour == 1),
        Segment::switch("S I X ", t.hour == 6),
        Segment::switch("T H R E E ", t.hour == 3),
    ])
}

pub fn eight_eleven(t: &NormalizedTime, _: &ClockOptions) -> Line {
    Line::new(vec![
        Segment::switch("E I G H T ", t.hour == 8),
        Segment::switch("E L E V E N ", t.hour == 11),
    ])
}

/// Row 9. TWELVE covers both midnight/noon (0) and 11 rolled forward (12).
pub fn seven_twelve(t: &NormalizedTime, _: &ClockOptions) -> Line {
    Line::new(vec![
        Segment::switch("S E V E N ", t.hour == 7),
        Segment::switch("T W E L V E ", t.hour % 12 == 0),
    ])
}

/// Row 10: the hour TEN and "O'CLOCK" near the top of the hour.
pub fn ten_oclock(t: &NormalizedTime, options: &ClockOptions) -> Line {
    Line::new(vec![
        Segment::switch("T E N ", t.hour == 10),
        Segment::dim("B "),
        Segment::switch("O ' C L O C K ", near(t, 0.0, options)),
    ])
}
