use rand::{SeedableRng, rngs::StdRng, seq::IteratorRandom};
use tictactoe_minimax::{
    Action, Board, Game, GameOutcome, Minimax, Player, SearchConfig, TieBreak,
    search::{max_value, min_value, minimax},
};

/// Play every possible line for `opponent` against the engine and return the
/// worst outcome the engine ever reaches, from the engine's perspective.
fn worst_outcome_against_all_replies(board: Board, engine_side: Player, engine: &Minimax) -> i32 {
    let sign = match engine_side {
        Player::X => 1,
        Player::O => -1,
    };
    if let Some(value) = board.utility() {
        return value * sign;
    }

    let mover = board.player().expect("non-terminal board has a mover");
    if mover == engine_side {
        let action = engine.choose(&board).expect("non-terminal board has a move");
        let next = board.result(action).expect("engine returned a legal move");
        worst_outcome_against_all_replies(next, engine_side, engine)
    } else {
        board
            .successors()
            .map(|(_, next)| worst_outcome_against_all_replies(next, engine_side, engine))
            .min()
            .unwrap_or(0)
    }
}

#[test]
fn empty_board_is_a_draw() {
    let board = Board::initial_state();
    assert_eq!(max_value(&board), 0);

    let values = Minimax::default().action_values(&board);
    assert_eq!(values.len(), 9);
    assert!(values.iter().all(|&(_, v)| v == 0));
}

#[test]
fn completes_top_row() {
    // XX.
    // O..
    // O..
    let board = Board::from_string("XX. O.. O..").unwrap();
    let action = minimax(&board).unwrap();
    assert_eq!(action, Action::new(0, 2));

    let next = board.result(action).unwrap();
    assert_eq!(next.winner(), Some(Player::X));
    assert!(next.is_terminal());
    assert_eq!(next.utility(), Some(1));
}

#[test]
fn answers_corner_opening_with_center() {
    let board = Board::from_string("X.. ... ...").unwrap();
    for tie_break in [TieBreak::First, TieBreak::Last] {
        let engine = Minimax::new(SearchConfig::new().with_tie_break(tie_break));
        assert_eq!(engine.choose(&board), Some(Action::new(1, 1)));
    }
    assert_eq!(min_value(&board), 0);
}

#[test]
fn opening_move_never_loses() {
    let board = Board::initial_state();
    let action = minimax(&board).unwrap();
    let next = board.result(action).unwrap();
    assert_eq!(min_value(&next), 0);
}

#[test]
fn engine_as_x_never_loses_to_any_line() {
    let engine = Minimax::default();
    let worst = worst_outcome_against_all_replies(Board::initial_state(), Player::X, &engine);
    assert!(worst >= 0, "X lost a line");
}

#[test]
fn engine_as_o_never_loses_to_any_line() {
    let engine = Minimax::new(SearchConfig::new().with_tie_break(TieBreak::Last));
    let worst = worst_outcome_against_all_replies(Board::initial_state(), Player::O, &engine);
    assert!(worst >= 0, "O lost a line");
}

#[test]
fn self_play_ends_in_a_draw() {
    let engine = Minimax::default();
    let mut game = Game::new();
    while game.play_optimal(&engine).unwrap().is_some() {}

    assert_eq!(game.outcome, Some(GameOutcome::Draw));
    assert_eq!(game.moves.len(), 9);
    assert_eq!(game.play_optimal(&engine).unwrap(), None);
}

#[test]
fn choice_is_deterministic() {
    let board = Board::from_string("X.. .O. ...").unwrap();
    let first = minimax(&board);
    for _ in 0..3 {
        assert_eq!(minimax(&board), first);
    }
}

#[test]
fn random_opponent_never_wins() {
    let engine = Minimax::default();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let mut game = Game::new();
        while game.outcome.is_none() {
            let board = game.current_state().unwrap();
            if board.player() == Some(Player::X) {
                game.play_optimal(&engine).unwrap();
            } else {
                let action = board.actions().into_iter().choose(&mut rng).unwrap();
                game.play(action).unwrap();
            }
        }
        assert_ne!(game.outcome, Some(GameOutcome::Win(Player::O)));
    }
}
