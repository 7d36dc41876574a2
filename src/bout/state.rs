//! Bout state representation and transition rules.
//!
//! `BoutState` is the single mutable record of a live match: the clock
//! phase, remaining time, and both competitors' scores and penalty counts.
//! Every mutation goes through [`BoutState::apply`], which validates the
//! transition centrally and tells the caller what the countdown clock
//! should do next.

use serde::Serialize;

// ============================================================================
// Small Types
// ============================================================================

/// Competitor corner.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Red corner.
    Red,
    /// Blue corner.
    Blue,
}

impl Side {
    /// Returns the opposing corner.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Blue => Self::Red,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Blue => write!(f, "blue"),
        }
    }
}

/// Valid point increments for a scoring technique.
///
/// The ruleset awards exactly 1, 2, or 3 points per exchange; other
/// increments are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Points {
    /// One point.
    One,
    /// Two points.
    Two,
    /// Three points.
    Three,
}

impl Points {
    /// All valid increments, ascending.
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    /// Numeric value of the increment.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Maps a raw number to an increment, if valid.
    #[must_use]
    pub const fn from_value(value: u32) -> Option<Self> {
        match value {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            _ => None,
        }
    }
}

/// Countdown clock phase for a started bout.
///
/// The fourth lifecycle state, "unconfigured", is the absence of a bout
/// and lives one level up in the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockPhase {
    /// Clock stopped with time on it.
    #[default]
    Paused,
    /// Clock counting down.
    Running,
    /// Time reached zero; the clock cannot restart until it is reset.
    Expired,
}

impl std::fmt::Display for ClockPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // f.pad so width specifiers in scoreboard formats are honored
        match self {
            Self::Paused => f.pad("paused"),
            Self::Running => f.pad("running"),
            Self::Expired => f.pad("expired"),
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

/// Operator command applied to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start or pause the countdown.
    ToggleClock,
    /// Stop the clock and restore the full round duration. Scores untouched.
    ResetClock,
    /// One-second heartbeat, issued only by the clock task.
    Tick,
    /// Award points to a corner.
    AddScore {
        /// Corner being awarded.
        side: Side,
        /// Increment, limited to the valid set.
        points: Points,
    },
    /// Correct a corner's score downward, clamping at zero.
    SubtractScore {
        /// Corner being corrected.
        side: Side,
        /// Amount to remove.
        points: u32,
    },
    /// Record a penalty against a corner, awarding the opponent one point.
    AddPenalty {
        /// Corner being penalized.
        side: Side,
    },
    /// Discard the bout and return to the pre-match state.
    ResetMatch,
}

/// What the countdown clock task should do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEffect {
    /// No change to clock scheduling.
    None,
    /// The bout entered `Running`; a clock task must be started.
    Start,
    /// The bout left `Running`; any clock task must be cancelled.
    Stop,
}

// ============================================================================
// Bout State
// ============================================================================

/// Mutable state of a started bout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoutState {
    /// Current clock phase.
    pub phase: ClockPhase,
    /// Seconds left on the round clock.
    pub time_remaining: u32,
    /// Round number. Never advanced automatically; the operator manages
    /// multi-round matches outside the engine.
    pub round: u32,
    /// Red corner score.
    pub red_score: u32,
    /// Blue corner score.
    pub blue_score: u32,
    /// Red corner penalty count.
    pub red_penalties: u32,
    /// Blue corner penalty count.
    pub blue_penalties: u32,
}

impl BoutState {
    /// Creates the initial state for a bout of the given duration:
    /// full clock, paused, round 1, all counters zero.
    #[must_use]
    pub const fn new(round_duration_secs: u32) -> Self {
        Self {
            phase: ClockPhase::Paused,
            time_remaining: round_duration_secs,
            round: 1,
            red_score: 0,
            blue_score: 0,
            red_penalties: 0,
            blue_penalties: 0,
        }
    }

    /// Returns whether the clock is actively counting down.
    #[must_use]
    pub fn running(&self) -> bool {
        self.phase == ClockPhase::Running
    }

    /// Score for the given corner.
    #[must_use]
    pub const fn score(&self, side: Side) -> u32 {
        match side {
            Side::Red => self.red_score,
            Side::Blue => self.blue_score,
        }
    }

    /// Penalty count for the given corner.
    #[must_use]
    pub const fn penalties(&self, side: Side) -> u32 {
        match side {
            Side::Red => self.red_penalties,
            Side::Blue => self.blue_penalties,
        }
    }

    const fn score_mut(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::Red => &mut self.red_score,
            Side::Blue => &mut self.blue_score,
        }
    }

    const fn penalties_mut(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::Red => &mut self.red_penalties,
            Side::Blue => &mut self.blue_penalties,
        }
    }

    /// Applies a command to the bout and returns the clock directive.
    ///
    /// This is the single transition function: commands invoked in a phase
    /// that forbids them leave the state unchanged and return
    /// [`ClockEffect::None`]. A stale `Tick` delivered after pause or
    /// expiry falls into that bucket, so a racing timer callback can never
    /// be observed.
    ///
    /// Scoring and penalty commands are legal in every phase, including
    /// `Expired` — corrections are part of normal officiating and do not
    /// depend on the clock.
    pub fn apply(&mut self, cmd: Command, round_duration_secs: u32) -> ClockEffect {
        match cmd {
            Command::ToggleClock => match self.phase {
                ClockPhase::Paused => {
                    self.phase = ClockPhase::Running;
                    ClockEffect::Start
                }
                ClockPhase::Running => {
                    self.phase = ClockPhase::Paused;
                    ClockEffect::Stop
                }
                // Restarting an expired clock requires ResetClock first.
                ClockPhase::Expired => ClockEffect::None,
            },
            Command::ResetClock => {
                self.phase = ClockPhase::Paused;
                self.time_remaining = round_duration_secs;
                ClockEffect::Stop
            }
            Command::Tick => {
                if self.phase != ClockPhase::Running || self.time_remaining == 0 {
                    return ClockEffect::None;
                }
                self.time_remaining -= 1;
                if self.time_remaining == 0 {
                    self.phase = ClockPhase::Expired;
                    ClockEffect::Stop
                } else {
                    ClockEffect::None
                }
            }
            Command::AddScore { side, points } => {
                let score = self.score_mut(side);
                *score = score.saturating_add(points.value());
                ClockEffect::None
            }
            Command::SubtractScore { side, points } => {
                let score = self.score_mut(side);
                *score = score.saturating_sub(points);
                ClockEffect::None
            }
            Command::AddPenalty { side } => {
                // Atomic pair: the penalty and the opponent's point land in
                // the same transition, never one without the other.
                let penalties = self.penalties_mut(side);
                *penalties = penalties.saturating_add(1);
                let opponent_score = self.score_mut(side.opponent());
                *opponent_score = opponent_score.saturating_add(1);
                ClockEffect::None
            }
            // The bout itself has nothing to reset; the engine discards it.
            Command::ResetMatch => ClockEffect::Stop,
        }
    }
}

// ============================================================================
// Clock Formatting
// ============================================================================

/// Renders remaining seconds as `minutes:seconds` with zero-padded seconds,
/// e.g. 65 → `"1:05"`.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

// ============================================================================
// Tests
// ============================================================================
