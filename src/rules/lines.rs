//! Three-in-a-row detection at both levels of the grid.

use crate::core::{Cell, GameState, BOARD_COUNT};

use super::outcome::Outcome;

/// The 8 winning lines of a 3x3 board, as row-major indices.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Result of a single sub-board from its cells alone.
///
/// Three equal marks on a line win; otherwise a full board is a tie.
///
/// ```
/// use ultimate_ttt::core::{Cell, Player};
/// use ultimate_ttt::rules::{sub_board_result, Outcome};
///
/// let cells = [
///     Cell::X, Cell::X, Cell::X,
///     Cell::O, Cell::O, Cell::Empty,
///     Cell::Empty, Cell::Empty, Cell::Empty,
/// ];
/// assert_eq!(sub_board_result(&cells), Outcome::Won(Player::X));
/// ```
#[must_use]
pub fn sub_board_result(cells: &[Cell; 9]) -> Outcome {
    for [a, b, c] in WIN_LINES {
        if let Some(player) = cells[a].player() {
            if cells[a] == cells[b] && cells[b] == cells[c] {
                return Outcome::Won(player);
            }
        }
    }

    if cells.iter().all(|cell| !cell.is_empty()) {
        Outcome::Tie
    } else {
        Outcome::Undecided
    }
}

/// Result of the whole game.
///
/// Scans the meta board of sub-board results; a tied sub-board fills its
/// slot but never counts towards a line.
#[must_use]
pub fn global_result(state: &GameState) -> Outcome {
    let results = state.results();

    for [a, b, c] in WIN_LINES {
        if let Outcome::Won(player) = results[a] {
            if results[b] == results[a] && results[c] == results[a] {
                return Outcome::Won(player);
            }
        }
    }

    if results.iter().all(|result| result.is_decided()) {
        return Outcome::Tie;
    }

    // Redundant while results are written on fullness; kept as a stalemate
    // guard for boards that are full without a recorded result.
    if (0..BOARD_COUNT).all(|sub| results[sub].is_decided() || state.is_sub_board_full(sub)) {
        return Outcome::Tie;
    }

    Outcome::Undecided
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::X;
    const O: Cell = Cell::O;

    #[test]
    fn test_empty_board_undecided() {
        assert_eq!(sub_board_result(&[E; 9]), Outcome::Undecided);
    }

    #[test]
    fn test_row_win() {
        let cells = [X, X, X, O, O, E, E, E, E];
        assert_eq!(sub_board_result(&cells), Outcome::Won(Player::X));
    }

    #[test]
    fn test_column_win() {
        let cells = [O, X, E, O, X, E, O, E, E];
        assert_eq!(sub_board_result(&cells), Outcome::Won(Player::O));
    }

    #[test]
    fn test_diagonal_win() {
        let cells = [E, X, O, X, O, E, O, E, X];
        assert_eq!(sub_board_result(&cells), Outcome::Won(Player::O));
    }

    #[test]
    fn test_full_board_tie() {
        let cells = [X, O, X, X, O, O, O, X, X];
        assert_eq!(sub_board_result(&cells), Outcome::Tie);
    }

    #[test]
    fn test_win_on_last_cell_beats_tie() {
        let cells = [X, O, X, O, X, O, O, X, X];
        assert_eq!(sub_board_result(&cells), Outcome::Won(Player::X));
    }

    #[test]
    fn test_global_empty_undecided() {
        let state = GameState::new();
        assert_eq!(global_result(&state), Outcome::Undecided);
    }

    #[test]
    fn test_global_meta_row_win() {
        let mut state = GameState::new();
        let won = [O, O, O, E, E, E, E, E, E];
        for sub in [0, 1, 2] {
            state.load_sub_board(sub, won);
        }
        assert_eq!(global_result(&state), Outcome::Won(Player::O));
    }

    #[test]
    fn test_global_ties_do_not_win() {
        let mut state = GameState::new();
        let tied = [X, O, X, X, O, O, O, X, X];
        for sub in [0, 4, 8] {
            state.load_sub_board(sub, tied);
        }
        assert_eq!(global_result(&state), Outcome::Undecided);
    }

    #[test]
    fn test_global_mixed_line_no_win() {
        let mut state = GameState::new();
        state.load_sub_board(0, [X, X, X, E, E, E, E, E, E]);
        state.load_sub_board(1, [O, O, O, E, E, E, E, E, E]);
        state.load_sub_board(2, [X, X, X, E, E, E, E, E, E]);
        assert_eq!(global_result(&state), Outcome::Undecided);
    }

    #[test]
    fn test_global_all_decided_without_line_is_tie() {
        let mut state = GameState::new();
        let x_won = [X, X, X, E, E, E, E, E, E];
        let o_won = [O, O, O, E, E, E, E, E, E];
        let tied = [X, O, X, X, O, O, O, X, X];
        // X O X / X O O / O X T: no line of three equal wins.
        let layout = [x_won, o_won, x_won, x_won, o_won, o_won, o_won, x_won, tied];
        for (sub, cells) in layout.into_iter().enumerate() {
            state.load_sub_board(sub, cells);
        }
        assert_eq!(global_result(&state), Outcome::Tie);
    }
}
