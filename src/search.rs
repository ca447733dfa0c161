//! Exhaustive minimax search over the tic-tac-toe game tree
//!
//! Values are always from X's perspective: X maximizes, O minimizes. The
//! tree is small enough that no pruning or memoization is applied; every
//! call explores the full subtree below the board it is given.

mod config;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

pub use config::{SearchConfig, TieBreak};

use crate::tictactoe::{Action, Board, Player};

/// The optimal action for the side to move under the default configuration.
///
/// Returns `None` if the board is terminal.
pub fn minimax(board: &Board) -> Option<Action> {
    Minimax::default().choose(board)
}

/// Game value of a board when X is to move next
pub fn max_value(board: &Board) -> i32 {
    Search::default().max_value(board)
}

/// Game value of a board when O is to move next
pub fn min_value(board: &Board) -> i32 {
    Search::default().min_value(board)
}

/// A chosen action together with the evidence behind it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub action: Action,
    /// Minimax value of the board after `action`
    pub value: i32,
    /// Boards evaluated below the root
    pub nodes: u64,
}

/// Minimax engine with a configurable tie-break
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    config: SearchConfig,
}

impl Minimax {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The optimal action for the side to move, or `None` on a terminal board
    pub fn choose(&self, board: &Board) -> Option<Action> {
        self.decide(board).map(|decision| decision.action)
    }

    /// Search the full tree below `board` and report the chosen action.
    ///
    /// Actions are visited in row-major order and folded into a single
    /// best candidate; the configured [`TieBreak`] decides whether an
    /// equally valued later action replaces the incumbent.
    #[instrument(level = "debug", skip(self, board), fields(occupied = board.occupied_count()))]
    pub fn decide(&self, board: &Board) -> Option<Decision> {
        if board.is_terminal() {
            return None;
        }
        let player = board.player()?;

        let mut search = Search::default();
        let mut best: Option<(Action, i32)> = None;
        for (action, next) in board.successors() {
            let value = search.reply_value(player, &next);
            if self.prefers(player, value, best.map(|(_, v)| v)) {
                best = Some((action, value));
            }
        }

        let (action, value) = best?;
        debug!(?player, %action, value, nodes = search.nodes, "minimax decision");
        Some(Decision {
            action,
            value,
            nodes: search.nodes,
        })
    }

    /// Minimax value of every legal action, in row-major order
    pub fn action_values(&self, board: &Board) -> Vec<(Action, i32)> {
        if board.is_terminal() {
            return Vec::new();
        }
        let Some(player) = board.player() else {
            return Vec::new();
        };

        let mut search = Search::default();
        board
            .successors()
            .map(|(action, next)| (action, search.reply_value(player, &next)))
            .collect()
    }

    fn prefers(&self, player: Player, candidate: i32, incumbent: Option<i32>) -> bool {
        let Some(best) = incumbent else {
            return true;
        };
        let ordering = match player {
            Player::X => candidate.cmp(&best),
            Player::O => best.cmp(&candidate),
        };
        match self.config.tie_break {
            TieBreak::First => ordering.is_gt(),
            TieBreak::Last => ordering.is_ge(),
        }
    }
}

/// Recursion state shared by one top-level search
#[derive(Debug, Default)]
struct Search {
    nodes: u64,
}

impl Search {
    /// Value of the board reached after `mover` has played
    fn reply_value(&mut self, mover: Player, next: &Board) -> i32 {
        match mover {
            Player::X => self.min_value(next),
            Player::O => self.max_value(next),
        }
    }

    fn max_value(&mut self, board: &Board) -> i32 {
        self.nodes += 1;
        if let Some(value) = board.utility() {
            return value;
        }
        board
            .successors()
            .fold(i32::MIN, |v, (_, next)| v.max(self.min_value(&next)))
    }

    fn min_value(&mut self, board: &Board) -> i32 {
        self.nodes += 1;
        if let Some(value) = board.utility() {
            return value;
        }
        board
            .successors()
            .fold(i32::MAX, |v, (_, next)| v.min(self.max_value(&next)))
    }
}
