//! High-level game management

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::board::{Action, Board, Player};
use crate::{Error, Result, search::Minimax};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Signed value from X's perspective
    pub fn utility(self) -> i32 {
        match self {
            GameOutcome::Win(Player::X) => 1,
            GameOutcome::Win(Player::O) => -1,
            GameOutcome::Draw => 0,
        }
    }
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Game {
            initial: Board::initial_state(),
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play an action for the side to move
    pub fn play(&mut self, action: Action) -> Result<()> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }

        let current = self.current_state()?;
        let player = current.player().ok_or(Error::GameOver)?;
        let next = current.result(action)?;

        trace!(?player, %action, "move played");
        self.moves.push(Move { action, player });
        self.outcome = next.outcome();

        Ok(())
    }

    /// Let the engine choose and play the next action.
    ///
    /// Returns the action played, or `None` if the game was already over.
    pub fn play_optimal(&mut self, engine: &Minimax) -> Result<Option<Action>> {
        if self.outcome.is_some() {
            return Ok(None);
        }

        let Some(action) = engine.choose(&self.current_state()?) else {
            return Ok(None);
        };
        self.play(action)?;
        Ok(Some(action))
    }

    /// Replay moves up to a given index (exclusive)
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the state it
    /// was applied to. This indicates corrupted game data.
    fn replay_moves_until(&self, end_index: usize) -> Result<Board> {
        self.moves
            .iter()
            .take(end_index)
            .try_fold(self.initial, |board, m| board.result(m.action))
    }

    /// Get current board state
    pub fn current_state(&self) -> Result<Board> {
        self.replay_moves_until(self.moves.len())
    }

    /// Get the sequence of board states, starting with the initial board
    pub fn state_sequence(&self) -> Result<Vec<Board>> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        states.push(self.initial);

        for i in 1..=self.moves.len() {
            states.push(self.replay_moves_until(i)?);
        }

        Ok(states)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
