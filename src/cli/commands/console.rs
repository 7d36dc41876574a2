//! Interactive operator console.
//!
//! Resolves the match configuration from CLI arguments, then runs two
//! loops: a renderer that prints one scoreboard line per published
//! snapshot, and a stdin reader that turns short line commands into engine
//! commands. Both are thin wrappers; all match logic lives in the engine.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::WatchStream;
use tracing::warn;

use crate::bout::{Command, MatchEngine, Points, Side, Snapshot, format_clock};
use crate::cli::args::{ConsoleArgs, OutputFormat};
use crate::config::{MAX_ROUND_SECS, MIN_ROUND_SECS, MatchConfig};
use crate::error::Result;

const HELP: &str = "\
commands:
  c, clock      start / pause the round clock
  rc, reset     reset the clock to the full round (scores kept)
  r+1 r+2 r+3   award points to the red corner (b+N for blue)
  r-N           subtract N points from red, floor at zero (b-N for blue)
  rp, bp        penalty against red / blue (opponent gains 1 point)
  new           discard the bout and return to pre-match
  h, help, ?    show this help
  q, quit       leave the console";

/// Run the operator console until quit or EOF on stdin.
///
/// # Errors
///
/// Returns an error if the configuration is rejected or stdin fails.
pub async fn run(args: &ConsoleArgs) -> Result<()> {
    let duration_secs = clamp_round_secs(args.duration.as_secs());
    let config = MatchConfig::resolve(&args.red, &args.blue, args.category, duration_secs)?;

    let engine = Arc::new(MatchEngine::new());

    // One scoreboard line per published snapshot. The watch stream yields
    // the latest state only, which is all a scoreboard wants.
    let format = args.format;
    let mut snapshots = WatchStream::new(engine.subscribe());
    let renderer = tokio::spawn(async move {
        while let Some(snapshot) = snapshots.next().await {
            match render(&snapshot, format) {
                Ok(line) => println!("{line}"),
                Err(err) => warn!(%err, "failed to render snapshot"),
            }
        }
    });

    engine.start(config);
    if format == OutputFormat::Human {
        println!("{HELP}");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            ConsoleInput::Command(cmd) => {
                engine.apply(cmd);
            }
            ConsoleInput::Help => println!("{HELP}"),
            ConsoleInput::Quit => break,
            ConsoleInput::Empty => {}
            ConsoleInput::Unknown => {
                eprintln!("unrecognized command: {} (h for help)", line.trim());
            }
        }
    }

    engine.shutdown();
    renderer.abort();
    Ok(())
}

/// Clamps a requested round duration to the selectable range.
///
/// Range enforcement lives here in the input layer; the resolver itself
/// only rejects zero.
fn clamp_round_secs(secs: u64) -> u32 {
    let secs = u32::try_from(secs).unwrap_or(MAX_ROUND_SECS);
    let clamped = secs.clamp(MIN_ROUND_SECS, MAX_ROUND_SECS);
    if clamped != secs {
        warn!(
            requested = secs,
            used = clamped,
            "round duration clamped to the selectable range"
        );
    }
    clamped
}

// ============================================================================
// Line Commands
// ============================================================================

/// Parsed operator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleInput {
    Command(Command),
    Help,
    Quit,
    Empty,
    Unknown,
}

fn parse_line(line: &str) -> ConsoleInput {
    let token = line.trim().to_ascii_lowercase();
    match token.as_str() {
        "" => ConsoleInput::Empty,
        "c" | "clock" => ConsoleInput::Command(Command::ToggleClock),
        "rc" | "reset" => ConsoleInput::Command(Command::ResetClock),
        "new" => ConsoleInput::Command(Command::ResetMatch),
        "rp" => ConsoleInput::Command(Command::AddPenalty { side: Side::Red }),
        "bp" => ConsoleInput::Command(Command::AddPenalty { side: Side::Blue }),
        "h" | "help" | "?" => ConsoleInput::Help,
        "q" | "quit" | "exit" => ConsoleInput::Quit,
        _ => parse_score(&token).map_or(ConsoleInput::Unknown, ConsoleInput::Command),
    }
}

/// Parses `r+N` / `b+N` score awards and `r-N` / `b-N` corrections.
fn parse_score(token: &str) -> Option<Command> {
    let side = match token.chars().next()? {
        'r' => Side::Red,
        'b' => Side::Blue,
        _ => return None,
    };
    let rest = &token[1..];
    if let Some(n) = rest.strip_prefix('+') {
        let points = Points::from_value(n.parse().ok()?)?;
        Some(Command::AddScore { side, points })
    } else if let Some(n) = rest.strip_prefix('-') {
        let points = n.parse().ok()?;
        Some(Command::SubtractScore { side, points })
    } else {
        None
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn render(snapshot: &Snapshot, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Human => Ok(render_human(snapshot)),
        OutputFormat::Json => serde_json::to_string(snapshot),
    }
}

fn render_human(snapshot: &Snapshot) -> String {
    let (Some(config), Some(bout)) = (&snapshot.config, &snapshot.bout) else {
        return "-- no match --".to_string();
    };

    let category = config
        .category
        .map_or_else(String::new, |band| format!(" [{band}]"));

    format!(
        "{clock} {phase:<7} round {round}{category} | {red} {red_score} ({red_pen}p) vs {blue} {blue_score} ({blue_pen}p)",
        clock = format_clock(bout.time_remaining),
        phase = bout.phase,
        round = bout.round,
        red = config.red_name,
        red_score = bout.red_score,
        red_pen = bout.red_penalties,
        blue = config.blue_name,
        blue_score = bout.blue_score,
        blue_pen = bout.blue_penalties,
    )
}

// ============================================================================
// Tests
// ============================================================================
