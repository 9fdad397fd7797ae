//! Integration tests for the move-selection strategies
//!
//! These tests exercise both strategies through the crate's public
//! re-exports and check that their decisions are legal, deterministic and
//! consistent with each other on shared positions.

#[cfg(test)]
mod tests {
    use reversi_engines::{select_move_maxflip, select_move_weighted};

    // Constants for cell values
    const EMPTY: u8 = 0;
    const BLACK: u8 = 1;
    const WHITE: u8 = 2;

    fn opening_flat() -> [u8; 64] {
        let mut board = [EMPTY; 64];
        board[27] = WHITE; // d4
        board[28] = BLACK; // e4
        board[35] = BLACK; // d5
        board[36] = WHITE; // e5
        board
    }

    fn to_grid(board: &[u8; 64]) -> Vec<Vec<u8>> {
        (0..8)
            .map(|row| board[row * 8..(row + 1) * 8].to_vec())
            .collect()
    }

    #[test]
    fn test_both_strategies_are_exported() {
        let board = opening_flat();
        let _ = select_move_weighted(&board, BLACK);
        let _ = select_move_maxflip(&to_grid(&board), BLACK);
    }

    #[test]
    fn test_strategies_agree_on_the_opening() {
        // All four opening candidates tie under both policies, so both
        // fall back to the first candidate in row-major order.
        let board = opening_flat();
        let grid = to_grid(&board);

        assert_eq!(select_move_weighted(&board, BLACK), Some((2, 3)));
        assert_eq!(select_move_maxflip(&grid, BLACK), Some((2, 3)));
    }

    #[test]
    fn test_strategies_accept_both_players() {
        let board = opening_flat();
        let grid = to_grid(&board);

        assert_eq!(select_move_weighted(&board, WHITE), Some((2, 4)));
        assert_eq!(select_move_maxflip(&grid, WHITE), Some((2, 4)));
    }

    #[test]
    fn test_strategies_can_disagree() {
        // A corner worth one flip against an interior cell worth three:
        // the weighted table takes the corner, the greedy picker the flips.
        let mut board = [EMPTY; 64];
        board[1] = WHITE; // (0,1)
        board[2] = BLACK; // (0,2)
        board[26] = WHITE; // (3,2)
        board[27] = WHITE; // (3,3)
        board[28] = WHITE; // (3,4)
        board[29] = BLACK; // (3,5)
        let grid = to_grid(&board);

        assert_eq!(select_move_weighted(&board, BLACK), Some((0, 0)));
        assert_eq!(select_move_maxflip(&grid, BLACK), Some((3, 1)));
    }

    #[test]
    fn test_no_move_is_a_pass_for_both() {
        let board = [EMPTY; 64];
        assert_eq!(select_move_weighted(&board, BLACK), None);
        assert_eq!(select_move_maxflip(&to_grid(&board), BLACK), None);

        let full = [WHITE; 64];
        assert_eq!(select_move_weighted(&full, BLACK), None);
        assert_eq!(select_move_maxflip(&to_grid(&full), BLACK), None);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let board = opening_flat();
        let grid = to_grid(&board);

        for _ in 0..3 {
            assert_eq!(select_move_weighted(&board, BLACK), Some((2, 3)));
            assert_eq!(select_move_maxflip(&grid, BLACK), Some((2, 3)));
        }
    }
}
