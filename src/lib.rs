//! Optimal tic-tac-toe play by exhaustive minimax search
//!
//! This crate provides:
//! - An immutable 3x3 board model with move generation and outcome detection
//! - A full-depth minimax search returning the optimal action for the side to move
//! - An in-memory game record for driving play against the engine
//!
//! ```
//! use tictactoe_minimax::{Board, search::minimax};
//!
//! let board = Board::initial_state();
//! let action = minimax(&board).unwrap();
//! let next = board.result(action).unwrap();
//! assert_eq!(next.occupied_count(), 1);
//! ```

pub mod error;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{Decision, Minimax, SearchConfig, TieBreak, minimax};
pub use tictactoe::{Action, Board, Cell, Game, GameOutcome, Move, Player};
