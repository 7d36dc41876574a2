//! Pre-match configuration and the match resolver.
//!
//! A [`MatchConfig`] freezes everything the operator enters before a match:
//! both competitor names, an optional weight category, and the round
//! duration. [`MatchConfig::resolve`] is the only way to build one, so a
//! started match can never carry an empty name or a zero-length round.
//! Editing a frozen config means resetting the match and resolving again.

use clap::ValueEnum;
use serde::Serialize;

use crate::bout::{BoutState, Side};
use crate::error::ConfigError;

/// Default round duration in seconds (3 minutes).
pub const DEFAULT_ROUND_SECS: u32 = 180;

/// Shortest selectable round duration in seconds.
pub const MIN_ROUND_SECS: u32 = 60;

/// Longest selectable round duration in seconds.
pub const MAX_ROUND_SECS: u32 = 600;

/// Fixed weight bands selectable for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum WeightClass {
    /// Under 54 kg.
    Under54,
    /// Under 58 kg.
    Under58,
    /// Under 63 kg.
    Under63,
    /// Under 68 kg.
    Under68,
    /// Under 74 kg.
    Under74,
    /// Under 80 kg.
    Under80,
    /// Over 80 kg.
    Over80,
}

impl WeightClass {
    /// All selectable bands, lightest first.
    pub const ALL: [Self; 7] = [
        Self::Under54,
        Self::Under58,
        Self::Under63,
        Self::Under68,
        Self::Under74,
        Self::Under80,
        Self::Over80,
    ];
}

impl std::fmt::Display for WeightClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Under54 => "Under 54kg",
            Self::Under58 => "Under 58kg",
            Self::Under63 => "Under 63kg",
            Self::Under68 => "Under 68kg",
            Self::Under74 => "Under 74kg",
            Self::Under80 => "Under 80kg",
            Self::Over80 => "Over 80kg",
        };
        write!(f, "{label}")
    }
}

/// Frozen pre-match setup.
///
/// Immutable once the match starts; the engine hands out clones in
/// snapshots and never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchConfig {
    /// Red corner competitor name, trimmed, never empty.
    pub red_name: String,
    /// Blue corner competitor name, trimmed, never empty.
    pub blue_name: String,
    /// Weight band, if the operator selected one.
    pub category: Option<WeightClass>,
    /// Round length in seconds. The input layer clamps this to
    /// [`MIN_ROUND_SECS`]..=[`MAX_ROUND_SECS`]; the resolver only rejects
    /// zero defensively.
    pub round_duration_secs: u32,
}

impl MatchConfig {
    /// Validates operator input and freezes it into a `MatchConfig`.
    ///
    /// Rejects empty or whitespace-only names and a zero duration. Has no
    /// side effects and does not start the clock.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyName`] or [`ConfigError::InvalidDuration`].
    pub fn resolve(
        red_name: &str,
        blue_name: &str,
        category: Option<WeightClass>,
        round_duration_secs: u32,
    ) -> Result<Self, ConfigError> {
        let red_name = red_name.trim();
        if red_name.is_empty() {
            return Err(ConfigError::EmptyName { side: Side::Red });
        }
        let blue_name = blue_name.trim();
        if blue_name.is_empty() {
            return Err(ConfigError::EmptyName { side: Side::Blue });
        }
        if round_duration_secs == 0 {
            return Err(ConfigError::InvalidDuration {
                seconds: round_duration_secs,
            });
        }

        Ok(Self {
            red_name: red_name.to_string(),
            blue_name: blue_name.to_string(),
            category,
            round_duration_secs,
        })
    }

    /// Produces the initial bout state for this configuration: full clock,
    /// paused, round 1, all counters zero.
    #[must_use]
    pub const fn initial_bout(&self) -> BoutState {
        BoutState::new(self.round_duration_secs)
    }

    /// Name of the competitor in the given corner.
    #[must_use]
    pub fn name(&self, side: Side) -> &str {
        match side {
            Side::Red => &self.red_name,
            Side::Blue => &self.blue_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bout::ClockPhase;

    #[test]
    fn resolve_valid_config() {
        let config = MatchConfig::resolve("Kim", "Lee", Some(WeightClass::Under68), 180).unwrap();
        assert_eq!(config.red_name, "Kim");
        assert_eq!(config.blue_name, "Lee");
        assert_eq!(config.category, Some(WeightClass::Under68));
        assert_eq!(config.round_duration_secs, 180);
    }

    #[test]
    fn resolve_trims_names() {
        let config = MatchConfig::resolve("  Kim ", "\tLee\n", None, 180).unwrap();
        assert_eq!(config.red_name, "Kim");
        assert_eq!(config.blue_name, "Lee");
    }

    #[test]
    fn resolve_rejects_empty_red_name() {
        let err = MatchConfig::resolve("", "Lee", None, 180).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyName { side: Side::Red }));
    }

    #[test]
    fn resolve_rejects_whitespace_blue_name() {
        let err = MatchConfig::resolve("Kim", "   ", None, 180).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyName { side: Side::Blue }));
    }

    #[test]
    fn resolve_rejects_zero_duration() {
        let err = MatchConfig::resolve("Kim", "Lee", None, 0).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDuration { seconds: 0 }));
    }

    #[test]
    fn category_is_optional() {
        let config = MatchConfig::resolve("Kim", "Lee", None, 180).unwrap();
        assert_eq!(config.category, None);
    }

    #[test]
    fn initial_bout_matches_config() {
        let config = MatchConfig::resolve("Kim", "Lee", None, 240).unwrap();
        let bout = config.initial_bout();
        assert_eq!(bout.time_remaining, 240);
        assert_eq!(bout.phase, ClockPhase::Paused);
        assert_eq!(bout.round, 1);
        assert_eq!(bout.red_score + bout.blue_score, 0);
    }

    #[test]
    fn name_by_side() {
        let config = MatchConfig::resolve("Kim", "Lee", None, 180).unwrap();
        assert_eq!(config.name(Side::Red), "Kim");
        assert_eq!(config.name(Side::Blue), "Lee");
    }

    #[test]
    fn seven_weight_bands() {
        assert_eq!(WeightClass::ALL.len(), 7);
        assert_eq!(WeightClass::ALL[0].to_string(), "Under 54kg");
        assert_eq!(WeightClass::ALL[6].to_string(), "Over 80kg");
    }

    #[test]
    fn duration_bounds_are_sane() {
        assert!(MIN_ROUND_SECS <= DEFAULT_ROUND_SECS);
        assert!(DEFAULT_ROUND_SECS <= MAX_ROUND_SECS);
    }
}
