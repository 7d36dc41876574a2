//! Live bout engine: clock, scoring, and lifecycle.
//!
//! [`state`] holds the pure state machine and transition rules; [`engine`]
//! wraps it with command serialization, the countdown clock task, and
//! snapshot publication.

pub mod engine;
pub mod state;

pub use engine::{MatchEngine, Snapshot};
pub use state::{BoutState, ClockEffect, ClockPhase, Command, Points, Side, format_clock};
