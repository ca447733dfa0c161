//! Common test utilities for the engine test suite.

use std::collections::HashSet;

use tictactoe_minimax::{Action, Board, Cell};

/// Every board reachable from the empty board by legal alternating play,
/// stopping at terminal boards.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut boards = Vec::new();
    let mut stack = vec![Board::initial_state()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        if board.is_terminal() {
            continue;
        }
        for (_, next) in board.successors() {
            stack.push(next);
        }
    }

    boards
}

/// All 9 in-range coordinates in row-major order
pub fn all_cells() -> impl Iterator<Item = Action> {
    (0..3).flat_map(|row| (0..3).map(move |col| Action::new(row, col)))
}

/// Positions at which two boards differ
pub fn changed_cells(before: &Board, after: &Board) -> Vec<(Action, Cell)> {
    all_cells()
        .filter_map(|action| {
            let now = after.get(action)?;
            (before.get(action) != Some(now)).then_some((action, now))
        })
        .collect()
}
