//! Configuration types for the minimax search.

use serde::{Deserialize, Serialize};

/// Strategy for breaking ties when multiple actions have equal value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep the first action, in row-major order, that reaches the best value
    #[default]
    First,
    /// Keep the last action, in row-major order, that reaches the best value
    Last,
}

/// Configuration for a [`Minimax`](super::Minimax) engine.
///
/// # Examples
///
/// ```
/// use tictactoe_minimax::{SearchConfig, TieBreak};
///
/// let config = SearchConfig::new().with_tie_break(TieBreak::Last);
/// assert_eq!(config.tie_break, TieBreak::Last);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// How equally valued actions are resolved
    pub tie_break: TieBreak,
}

impl SearchConfig {
    /// Create a configuration with the default tie-break (`TieBreak::First`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tie-break rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}
