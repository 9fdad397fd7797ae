//! Max-flip strategy
//!
//! Greedy picker: for every empty cell it collects the full set of stones
//! that would flip if the player moved there, and plays the cell with the
//! largest set. Cells that flip nothing are never candidates, which is the
//! same condition the legality scan enforces. Ties go to the first
//! candidate in row-major order.
//!
//! Unlike the weighted strategy this one reads the board dimensions from
//! the grid itself (rows = outer length, columns = first-row length), so it
//! works on any rectangular board, not just 8x8. The grid must be
//! rectangular: every row as long as the first.

const EMPTY: u8 = 0;
const BLACK: u8 = 1;
const WHITE: u8 = 2;

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Pick the move that flips the most opponent stones
///
/// # Arguments
/// * `board` - Nested byte grid where 0=Empty, 1=Black, 2=White
/// * `player` - Player to move (1 = Black, 2 = White)
///
/// # Returns
/// The (row, col) with the strictly greatest flip count, or `None` if the
/// grid is empty or no cell flips anything. Among equal flip counts the
/// first candidate in row-major order wins.
pub fn select_move(board: &[Vec<u8>], player: u8) -> Option<(usize, usize)> {
    let rows = board.len();
    let cols = board.first().map_or(0, |row| row.len());
    if rows == 0 || cols == 0 {
        return None;
    }

    let mut best_move = None;
    let mut best_flips = 0;

    for r in 0..rows {
        for c in 0..cols {
            if board[r][c] != EMPTY {
                continue;
            }
            let flips = flips_for_move(board, player, r, c).len();
            if flips > best_flips {
                best_flips = flips;
                best_move = Some((r, c));
            }
        }
    }

    best_move
}

/// Collect every stone that placing `player` at (row, col) would flip
///
/// Each direction is walked independently: the contiguous run of opponent
/// stones after (row, col) counts only if it ends on one of the player's
/// own stones. Runs that reach the edge or an empty cell are discarded.
fn flips_for_move(board: &[Vec<u8>], player: u8, row: usize, col: usize) -> Vec<(usize, usize)> {
    let rows = board.len() as isize;
    let cols = board[0].len() as isize;
    let opponent = if player == BLACK { WHITE } else { BLACK };

    let mut flips = Vec::new();

    for (dr, dc) in DIRECTIONS {
        let mut run = Vec::new();
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;

        while r >= 0 && r < rows && c >= 0 && c < cols && board[r as usize][c as usize] == opponent
        {
            run.push((r as usize, c as usize));
            r += dr;
            c += dc;
        }

        let closed =
            r >= 0 && r < rows && c >= 0 && c < cols && board[r as usize][c as usize] == player;
        if closed && !run.is_empty() {
            flips.append(&mut run);
        }
    }

    flips
}
