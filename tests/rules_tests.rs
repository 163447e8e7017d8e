//! Rule engine integration tests.
//!
//! Positions are reached through legal play only, via the public API.

use ultimate_ttt::core::{Cell, Constraint, GameError, GameState, Move, Player, GRID_SIZE};
use ultimate_ttt::rules::{self, Outcome};

const E: Cell = Cell::Empty;
const X: Cell = Cell::X;
const O: Cell = Cell::O;

/// X takes the top row of sub-board 0 while O holds cells 3 and 4 there.
fn x_wins_sub_board_zero() -> Vec<Move> {
    vec![
        Move::new(0, 0),
        Move::new(0, 3),
        Move::new(3, 0),
        Move::new(0, 4),
        Move::new(4, 1),
        Move::new(1, 0),
        Move::new(0, 1),
        Move::new(1, 3),
        Move::new(3, 2),
        Move::new(2, 0),
        Move::new(0, 2),
    ]
}

// =============================================================================
// Empty Grid
// =============================================================================

#[test]
fn test_empty_grid() {
    let state = GameState::new();

    assert_eq!(state.global_result(), Outcome::Undecided);
    assert_eq!(rules::legal_moves(&state, Constraint::Any).len(), GRID_SIZE);
    assert_eq!(state.legal_moves().len(), GRID_SIZE);
    assert_eq!(state.to_move(), Player::X);
}

// =============================================================================
// Forcing Rule
// =============================================================================

#[test]
fn test_center_move_forces_center_board() {
    let mut state = GameState::new();

    let constraint = state.apply_move(Move::new(4, 4), Player::X).unwrap();

    assert_eq!(constraint, Constraint::Board(4));
    let moves = state.legal_moves();
    assert_eq!(moves.len(), 8);
    assert!(moves.iter().all(|mv| mv.sub == 4 && mv.cell != 4));
}

#[test]
fn test_cell_index_picks_next_board() {
    let mut state = GameState::new();

    state.apply_move(Move::new(0, 7), Player::X).unwrap();
    assert_eq!(state.constraint(), Constraint::Board(7));

    state.apply_move(Move::new(7, 2), Player::O).unwrap();
    assert_eq!(state.constraint(), Constraint::Board(2));
}

#[test]
fn test_won_board_result_and_relaxed_constraint() {
    let mut state = GameState::from_moves(x_wins_sub_board_zero()).unwrap();

    assert_eq!(state.sub_board(0), &[X, X, X, O, O, E, E, E, E]);
    assert_eq!(state.result(0), Outcome::Won(Player::X));
    assert_eq!(rules::sub_board_result(state.sub_board(0)), Outcome::Won(Player::X));
    assert_eq!(state.global_result(), Outcome::Undecided);

    // O is sent to sub-board 2, then sends X to 4, whose cell 0 points back
    // at the finished sub-board 0.
    state.apply_move(Move::new(2, 4), Player::O).unwrap();
    let constraint = state.apply_move(Move::new(4, 0), Player::X).unwrap();

    assert_eq!(constraint, Constraint::Any);
    let moves = state.legal_moves();
    assert!(moves.iter().all(|mv| mv.sub != 0));
    // 8 open sub-boards, 8 marks outside sub-board 0.
    assert_eq!(moves.len(), 8 * 9 - 8);
}

#[test]
fn test_cannot_play_in_won_board_even_when_free() {
    let mut state = GameState::from_moves(x_wins_sub_board_zero()).unwrap();
    state.apply_move(Move::new(2, 4), Player::O).unwrap();
    state.apply_move(Move::new(4, 0), Player::X).unwrap();

    let err = state.apply_move(Move::new(0, 8), Player::O).unwrap_err();
    assert_eq!(err, GameError::IllegalMove(Move::new(0, 8)));
}

// =============================================================================
// Undo
// =============================================================================

#[test]
fn test_undo_winning_move_reopens_board() {
    let mut state = GameState::from_moves(x_wins_sub_board_zero()).unwrap();

    let record = state.undo_last_move().unwrap();

    assert_eq!(record.mv, Move::new(0, 2));
    assert_eq!(record.player, Player::X);
    assert_eq!(record.constraint, Constraint::Board(0));
    assert_eq!(state.result(0), Outcome::Undecided);
    assert_eq!(state.to_move(), Player::X);
    assert_eq!(state.constraint(), Constraint::Board(0));
}

#[test]
fn test_undo_everything_returns_to_empty_grid() {
    let mut state = GameState::from_moves(x_wins_sub_board_zero()).unwrap();

    while state.undo_last_move().is_some() {}

    assert_eq!(state, GameState::new());
}

#[test]
fn test_history_tracks_filled_cells() {
    let state = GameState::from_moves(x_wins_sub_board_zero()).unwrap();
    assert_eq!(state.history().len(), GRID_SIZE - state.empty_count());
    assert_eq!(state.last_move().map(|record| record.mv), Some(Move::new(0, 2)));
}
