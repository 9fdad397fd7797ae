//! Weighted-corner strategy
//!
//! Scores every legal move with a static positional table and plays the
//! highest-valued cell. Corners are worth 100, the cells touching a corner
//! carry heavy penalties (-20 and -50) because occupying them tends to hand
//! the corner to the opponent, edges are mildly positive and the interior
//! is near neutral. Ties go to the first candidate in row-major order.
//!
//! The table is only defined for the standard 8x8 board; callers with a
//! different board size want the `maxflip` strategy instead.

use crate::Board;

const EMPTY: u8 = 0;
const BLACK: u8 = 1;
const WHITE: u8 = 2;

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Positional value of each cell, indexed by row * 8 + col.
const POSITION_WEIGHTS: [i32; 64] = [
    100, -20, 10, 5, 5, 10, -20, 100, //
    -20, -50, -2, -2, -2, -2, -50, -20, //
    10, -2, 5, 1, 1, 5, -2, 10, //
    5, -2, 1, 0, 0, 1, -2, 5, //
    5, -2, 1, 0, 0, 1, -2, 5, //
    10, -2, 5, 1, 1, 5, -2, 10, //
    -20, -50, -2, -2, -2, -2, -50, -20, //
    100, -20, 10, 5, 5, 10, -20, 100, //
];

/// Pick the legal move with the highest positional weight
///
/// # Arguments
/// * `board` - Board state as [u8; 64] where 0=Empty, 1=Black, 2=White
/// * `player` - Player to move (1 = Black, 2 = White)
///
/// # Returns
/// The best (row, col), or `None` if the player has no legal move. Among
/// equally weighted candidates the first in row-major order wins: a
/// candidate only displaces the current best on a strictly higher weight.
pub fn select_move(board: &Board, player: u8) -> Option<(usize, usize)> {
    let valid_moves = get_valid_moves(board, player);

    let mut best_move = None;
    let mut best_weight = i32::MIN;

    for (index, &valid) in valid_moves.iter().enumerate() {
        if valid && POSITION_WEIGHTS[index] > best_weight {
            best_weight = POSITION_WEIGHTS[index];
            best_move = Some((index / 8, index % 8));
        }
    }

    best_move
}

/// Get all legal moves for a player as a 64-element bool array
fn get_valid_moves(board: &Board, player: u8) -> [bool; 64] {
    let mut valid_moves = [false; 64];

    for row in 0..8 {
        for col in 0..8 {
            let index = row * 8 + col;
            if board[index] == EMPTY && is_valid_move(board, player, row, col) {
                valid_moves[index] = true;
            }
        }
    }

    valid_moves
}

/// Check whether placing a stone at (row, col) closes a bracket in any direction
fn is_valid_move(board: &Board, player: u8, row: usize, col: usize) -> bool {
    let index = row * 8 + col;
    if board[index] != EMPTY {
        return false;
    }

    for (dr, dc) in DIRECTIONS {
        if would_flip_in_direction(board, player, row, col, dr, dc) {
            return true;
        }
    }

    false
}

/// Walk outward from (row, col): legal iff the walk crosses at least one
/// opponent stone and ends on one of the player's own
fn would_flip_in_direction(
    board: &Board,
    player: u8,
    row: usize,
    col: usize,
    dr: i8,
    dc: i8,
) -> bool {
    let opponent = if player == BLACK { WHITE } else { BLACK };

    let mut r = row as i8 + dr;
    let mut c = col as i8 + dc;
    let mut found_opponent = false;

    while r >= 0 && r < 8 && c >= 0 && c < 8 {
        let cell = board[(r as usize) * 8 + (c as usize)];

        if cell == EMPTY {
            return false;
        } else if cell == opponent {
            found_opponent = true;
            r += dr;
            c += dc;
        } else if cell == player {
            return found_opponent;
        } else {
            return false;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opening_board() -> Board {
        let mut board = [EMPTY; 64];
        board[27] = WHITE; // d4
        board[28] = BLACK; // e4
        board[35] = BLACK; // d5
        board[36] = WHITE; // e5
        board
    }

    #[test]
    fn test_table_favours_corners() {
        assert_eq!(POSITION_WEIGHTS[0], 100); // a1
        assert_eq!(POSITION_WEIGHTS[7], 100); // h1
        assert_eq!(POSITION_WEIGHTS[56], 100); // a8
        assert_eq!(POSITION_WEIGHTS[63], 100); // h8
    }

    #[test]
    fn test_table_penalizes_corner_neighbours() {
        assert_eq!(POSITION_WEIGHTS[1], -20); // b1
        assert_eq!(POSITION_WEIGHTS[8], -20); // a2
        assert_eq!(POSITION_WEIGHTS[9], -50); // b2
        assert_eq!(POSITION_WEIGHTS[54], -50); // g7
    }

    #[test]
    fn test_opening_position_picks_first_of_equal_candidates() {
        // All four opening moves for Black sit on equally weighted cells,
        // so the first in row-major order must win.
        let board = opening_board();
        assert_eq!(select_move(&board, BLACK), Some((2, 3)));
    }

    #[test]
    fn test_opening_position_white() {
        // White's opening candidates are (2,4), (3,5), (4,2), (5,3), again
        // all on equal weights.
        let board = opening_board();
        assert_eq!(select_move(&board, WHITE), Some((2, 4)));
    }

    #[test]
    fn test_prefers_corner_over_penalty_cell() {
        let mut board = [EMPTY; 64];
        // (0,0) closes a bracket along row 0 and is worth 100.
        board[1] = WHITE;
        board[2] = BLACK;
        // (1,1) closes a diagonal bracket but is worth -50.
        board[18] = WHITE; // (2,2)
        board[27] = BLACK; // (3,3)

        assert_eq!(select_move(&board, BLACK), Some((0, 0)));
    }

    #[test]
    fn test_avoids_corner_neighbour_when_alternative_exists() {
        let mut board = [EMPTY; 64];
        // (1,1) is legal but worth -50.
        board[18] = WHITE; // (2,2)
        board[27] = BLACK; // (3,3)
        // (2,3) is legal and worth 1.
        board[20] = WHITE; // (2,4)
        board[21] = BLACK; // (2,5)

        assert_eq!(select_move(&board, BLACK), Some((2, 3)));
    }

    #[test]
    fn test_no_legal_move_returns_none() {
        let board = [EMPTY; 64];
        assert_eq!(select_move(&board, BLACK), None);

        let full = [BLACK; 64];
        assert_eq!(select_move(&full, WHITE), None);
    }

    #[test]
    fn test_never_picks_occupied_cell() {
        let board = opening_board();
        let chosen = select_move(&board, BLACK).unwrap();
        assert_eq!(board[chosen.0 * 8 + chosen.1], EMPTY);
    }

    #[test]
    fn test_selected_move_is_legal() {
        let board = opening_board();
        let (row, col) = select_move(&board, BLACK).unwrap();
        assert!(is_valid_move(&board, BLACK, row, col));
    }

    #[test]
    fn test_deterministic() {
        let board = opening_board();
        assert_eq!(select_move(&board, BLACK), select_move(&board, BLACK));
    }
}
