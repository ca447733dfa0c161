//! Board state representation and basic operations

use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

use super::{game::GameOutcome, lines::LineAnalyzer};
use crate::{Error, Result};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player whose mark occupies this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A `(row, col)` cell coordinate. Orders row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub const fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }

    fn in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 board of cells.
///
/// `Board` is `Copy` and every transition returns a fresh value, so search
/// branches never observe each other's moves. The player to move is derived
/// from the piece counts rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard", into = "RawBoard")]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

/// Serialized form of a [`Board`]; checked on the way back in
#[derive(Serialize, Deserialize)]
struct RawBoard {
    cells: [[Cell; 3]; 3],
}

impl TryFrom<RawBoard> for Board {
    type Error = Error;

    fn try_from(raw: RawBoard) -> Result<Self> {
        Board::from_cells(raw.cells)
    }
}

impl From<Board> for RawBoard {
    fn from(board: Board) -> Self {
        RawBoard { cells: board.cells }
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl Board {
    /// The empty starting board
    pub fn initial_state() -> Self {
        Board {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// Create a board from a grid, checking the alternation rule:
    /// X and O counts equal, or X ahead by one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPieceCounts`] if the grid could not arise from
    /// alternating play.
    pub fn from_cells(cells: [[Cell; 3]; 3]) -> Result<Self> {
        let board = Board { cells };
        let count = board.count_pieces();
        if count.x != count.o && count.x != count.o + 1 {
            return Err(Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }
        Ok(board)
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain exactly 9 cell characters in row-major
    /// order (whitespace is filtered out).
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string does not have exactly 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The piece counts could not arise from alternating play
    pub fn from_string(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [[Cell::Empty; 3]; 3];
        for (i, &c) in chars.iter().enumerate() {
            cells[i / 3][i % 3] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Self::from_cells(cells)
    }

    /// Get the cell at an action's coordinates, or `None` when out of range
    pub fn get(&self, action: Action) -> Option<Cell> {
        self.cells
            .get(action.row)
            .and_then(|row| row.get(action.col))
            .copied()
    }

    /// Borrow the raw grid
    pub fn cells(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    /// The player who moves next, or `None` once all nine cells are filled.
    ///
    /// A won board that still has empty cells reports the player whose turn
    /// it would be; use [`is_terminal`](Self::is_terminal) to stop play.
    pub fn player(&self) -> Option<Player> {
        let count = self.count_pieces();
        if count.x + count.o == 9 {
            None
        } else if count.x > count.o {
            Some(Player::O)
        } else {
            Some(Player::X)
        }
    }

    /// All empty cells, in row-major order
    pub fn actions(&self) -> BTreeSet<Action> {
        (0..3)
            .flat_map(|row| (0..3).map(move |col| Action::new(row, col)))
            .filter(|&action| self.cells[action.row][action.col] == Cell::Empty)
            .collect()
    }

    /// Apply an action for the player to move and return the successor board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`] if the action is out of range or the
    /// cell is already occupied.
    #[must_use = "result returns a new board; the original is unchanged"]
    pub fn result(&self, action: Action) -> Result<Board> {
        let invalid = || Error::InvalidMove {
            row: action.row,
            col: action.col,
        };
        if !action.in_bounds() || self.cells[action.row][action.col] != Cell::Empty {
            return Err(invalid());
        }
        // An empty in-range cell means the board cannot be full.
        let mover = self.player().ok_or_else(invalid)?;
        Ok(self.place(action, mover))
    }

    /// Every legal action paired with the board it produces
    pub fn successors(&self) -> impl Iterator<Item = (Action, Board)> + '_ {
        let mover = self.player();
        self.actions()
            .into_iter()
            .filter_map(move |action| mover.map(|player| (action, self.place(action, player))))
    }

    fn place(&self, action: Action, player: Player) -> Board {
        let mut next = *self;
        next.cells[action.row][action.col] = player.to_cell();
        next
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::first_complete_line(&self.cells)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.occupied_count() == 9
    }

    /// The finished game's outcome, or `None` while play continues
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.winner() {
            Some(player) => Some(GameOutcome::Win(player)),
            None if self.occupied_count() == 9 => Some(GameOutcome::Draw),
            None => None,
        }
    }

    /// +1 if X has won, -1 if O has won, 0 for a draw.
    ///
    /// Returns `None` for boards that are not terminal.
    pub fn utility(&self) -> Option<i32> {
        self.outcome().map(GameOutcome::utility)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial_state()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
