//! Painting a resolved face onto a terminal stream.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use termcolor::{Color, ColorChoice, ColorSpec, WriteColor};
use word_clock::ClockFace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Grid rows; lit letters upper case, dimmed letters lower case
    Text,
    /// Grid rows with terminal styling (bold lit, grey dimmed)
    Color,
    /// The resolved face as JSON
    Json,
    /// Only the lit words, e.g. "IT IS HALF PAST THREE"
    Phrase,
}

impl Format {
    pub fn color_choice(self) -> ColorChoice {
        match self {
            Format::Color => ColorChoice::Always,
            _ => ColorChoice::Never,
        }
    }
}

pub fn render(face: &ClockFace, format: Format, out: &mut dyn WriteColor) -> Result<()> {
    match format {
        Format::Text => {
            for line in face.lines() {
                for segment in line.segments() {
                    if segment.highlighted {
                        write!(out, "{}", segment.text)?;
                    } else {
                        write!(out, "{}", segment.text.to_lowercase())?;
                    }
                }
                writeln!(out)?;
            }
        }
        Format::Color => {
            let mut lit = ColorSpec::new();
            lit.set_bold(true).set_fg(Some(Color::White));
            let mut dim = ColorSpec::new();
            dim.set_dimmed(true)
                .set_intense(true)
                .set_fg(Some(Color::Black));
            for line in face.lines() {
                for segment in line.segments() {
                    out.set_color(if segment.highlighted { &lit } else { &dim })?;
                    write!(out, "{}", segment.text)?;
                }
                out.reset()?;
                writeln!(out)?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, face)?;
            writeln!(out)?;
        }
        Format::Phrase => writeln!(out, "{}", face.phrase())?,
    }
    out.flush()?;
    Ok(())
}
