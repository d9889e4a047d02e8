//! Planner-facing configuration

use drift_errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Tie-breaking strategy used when the topological sequencer has more
/// than one ready vertex to choose from.
///
/// Lexicographic-by-moniker is the only strategy the sequencer
/// implements; this type exists so the choice is documented and
/// validated rather than silently assumed, and so a future second
/// strategy has somewhere to land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    #[default]
    Lexicographic,
}

/// Configuration governing plan construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningConfig {
    #[serde(default)]
    pub tie_break: TieBreak,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::Lexicographic,
        }
    }
}

impl PlanningConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `tie_break` names a
    /// strategy the sequencer does not implement.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.tie_break {
            TieBreak::Lexicographic => Ok(()),
        }
    }
}

impl FromStr for TieBreak {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lexicographic" => Ok(Self::Lexicographic),
            _ => Err(()),
        }
    }
}
