//! `wordclock` — prints the time as lit words on the word clock grid.

mod render;

use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use termcolor::StandardStream;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use word_clock::time::{parse_timezone, parse_wall_time, wall_time_in};
use word_clock::{
    resolve_at, ClockFace, ClockOptions, SystemClock, TimeSource, DEFAULT_THRESHOLD,
};

use crate::render::{render, Format};

#[derive(Parser)]
#[command(name = "wordclock", version, about = "Word clock for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the face once
    Show {
        /// Time to show: HH:MM, HH:MM:SS or RFC 3339 (default: now)
        #[arg(long)]
        at: Option<String>,

        #[command(flatten)]
        face: FaceArgs,
    },
    /// Redraw the face on a fixed interval
    Watch {
        /// Seconds between readings of the clock
        #[arg(long, default_value_t = 1.0)]
        interval: f64,

        /// Stop after this many readings
        #[arg(long)]
        count: Option<u64>,

        /// Print on every reading, not only when the lit words change
        #[arg(long)]
        every_tick: bool,

        #[command(flatten)]
        face: FaceArgs,
    },
}

#[derive(Args)]
struct FaceArgs {
    /// IANA timezone, e.g. Europe/London (default: local time). Converts RFC 3339
    /// `--at` values; a plain HH:MM is shown as given
    #[arg(long)]
    tz: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Snap window around each five-minute mark, in minutes
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,
}

impl FaceArgs {
    fn options(&self) -> Result<ClockOptions> {
        Ok(ClockOptions::with_threshold(self.threshold)?)
    }

    fn source(&self) -> Result<SystemClock> {
        match &self.tz {
            Some(tz) => Ok(SystemClock::in_zone(parse_timezone(tz)?)),
            None => Ok(SystemClock::local()),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Show { at, face } => show(at.as_deref(), &face),
        Commands::Watch {
            interval,
            count,
            every_tick,
            face,
        } => watch(interval, count, every_tick, &face),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn show(at: Option<&str>, args: &FaceArgs) -> Result<()> {
    let options = args.options()?;
    let time = match (at, args.tz.as_deref()) {
        (Some(at), Some(tz)) => {
            parse_timezone(tz)?;
            // A bare HH:MM is already a wall-clock time; only instants are converted.
            wall_time_in(at, tz)
                .or_else(|_| parse_wall_time(at))
                .with_context(|| format!("cannot show {at} in {tz}"))?
        }
        (Some(at), None) => parse_wall_time(at)?,
        (None, _) => args.source()?.now(),
    };
    debug!(%time, threshold = options.threshold(), "showing face");
    print_face(&resolve_at(&time, &options), args.format)
}

fn watch(interval: f64, count: Option<u64>, every_tick: bool, args: &FaceArgs) -> Result<()> {
    let Ok(pause) = Duration::try_from_secs_f64(interval) else {
        bail!("interval must be a non-negative number of seconds, got {interval}");
    };
    let options = args.options()?;
    let source = args.source()?;

    let mut last_phrase: Option<String> = None;
    let mut ticks = 0u64;
    loop {
        let time = source.now();
        let face = resolve_at(&time, &options);
        let phrase = face.phrase();
        let changed = last_phrase.as_deref() != Some(phrase.as_str());
        debug!(%time, tick = ticks, changed, "tick");

        if changed || every_tick {
            if changed {
                info!(%time, %phrase, "face changed");
            }
            print_face(&face, args.format)?;
            last_phrase = Some(phrase);
        }

        ticks += 1;
        if count.is_some_and(|n| ticks >= n) {
            return Ok(());
        }
        thread::sleep(pause);
    }
}

fn print_face(face: &ClockFace, format: Format) -> Result<()> {
    let mut stdout = StandardStream::stdout(format.color_choice());
    render(face, format, &mut stdout).context("failed to write face")
}
