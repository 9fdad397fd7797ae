//! Core types and move logic for Reversi (Othello)
//!
//! A [`Board`] is an immutable position value: the legality oracle and the
//! move enumerator borrow it, and [`Board::apply_move`] returns a fresh
//! board with the placed stone and every bracketed opponent stone flipped.
//! Nothing here tracks whose turn it is, keeps score or declares the game
//! over; the caller owns all of that. A side with no legal moves simply
//! gets an empty move list, which is the pass signal.

// PyO3 bindings module
#[cfg(feature = "python")]
pub mod bindings;

use thiserror::Error;

/// Side length of the standard board built by [`Board::new`].
pub const STANDARD_SIZE: usize = 8;

/// A move target as (row, column), 0-indexed.
pub type Move = (usize, usize);

/// The eight scan directions shared by the legality and flip walks.
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

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A color or cell byte outside the 0/1/2 encoding.
    #[error("invalid color value {0}")]
    InvalidColor(u8),
    /// A coordinate outside the board.
    #[error("({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
    /// The target cell does not close a bracket for the moving player.
    #[error("move at ({0}, {1}) is not legal")]
    InvalidMove(usize, usize),
    /// A flat state whose length does not match the requested board size.
    #[error("state has {actual} cells, expected {expected}")]
    BadDimensions { expected: usize, actual: usize },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// Decode a wire byte (0 = Empty, 1 = Black, 2 = White)
    pub fn from_u8(value: u8) -> Result<Cell, GameError> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Black),
            2 => Ok(Cell::White),
            other => Err(GameError::InvalidColor(other)),
        }
    }

    /// Encode as a wire byte
    pub fn as_u8(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Player {
    Black = 1,
    White = 2,
}

impl Player {
    /// Get the opposing player
    pub fn opponent(&self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The cell state a stone of this player occupies
    pub fn stone(&self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    /// Decode a wire byte (1 = Black, 2 = White)
    pub fn from_u8(value: u8) -> Result<Player, GameError> {
        match value {
            1 => Ok(Player::Black),
            2 => Ok(Player::White),
            other => Err(GameError::InvalidColor(other)),
        }
    }

    /// Encode as a wire byte
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

/// A square Reversi position
///
/// The side length travels with the value, so every operation works for
/// non-standard sizes; only [`Board::new`] assumes the 8x8 layout. Cells
/// are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    size: usize,
}

impl Board {
    /// Create the standard 8x8 opening position
    /// - (3,3) and (4,4) are White
    /// - (3,4) and (4,3) are Black
    pub fn new() -> Self {
        let mut board = Board::empty(STANDARD_SIZE);
        board.cells[3 * STANDARD_SIZE + 3] = Cell::White;
        board.cells[3 * STANDARD_SIZE + 4] = Cell::Black;
        board.cells[4 * STANDARD_SIZE + 3] = Cell::Black;
        board.cells[4 * STANDARD_SIZE + 4] = Cell::White;
        board
    }

    /// Create an all-empty size x size board
    pub fn empty(size: usize) -> Self {
        Board {
            cells: vec![Cell::Empty; size * size],
            size,
        }
    }

    /// Rebuild a board from a flat row-major byte state
    ///
    /// The state must hold exactly size * size bytes, each one a valid
    /// cell encoding (0 = Empty, 1 = Black, 2 = White).
    pub fn from_state(size: usize, state: &[u8]) -> Result<Board, GameError> {
        let expected = size * size;
        if state.len() != expected {
            return Err(GameError::BadDimensions {
                expected,
                actual: state.len(),
            });
        }

        let mut cells = Vec::with_capacity(expected);
        for &value in state {
            cells.push(Cell::from_u8(value)?);
        }

        Ok(Board { cells, size })
    }

    /// Flatten to a row-major byte state (0 = Empty, 1 = Black, 2 = White)
    pub fn to_state(&self) -> Vec<u8> {
        self.cells.iter().map(Cell::as_u8).collect()
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Look up a cell; `None` outside the board
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Check whether `player` may place a stone at (row, col)
    ///
    /// Out-of-range coordinates and occupied cells are never legal. An
    /// empty cell is legal iff at least one of the 8 directions holds a
    /// bracket: one or more opponent stones immediately next to the cell,
    /// ended by one of the player's own stones.
    pub fn is_legal_move(&self, player: Player, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        if self.cells[row * self.size + col] != Cell::Empty {
            return false;
        }

        for (dr, dc) in DIRECTIONS {
            if self.would_flip_in_direction(player, row, col, dr, dc) {
                return true;
            }
        }

        false
    }

    /// Enumerate every legal move for `player` in row-major order
    ///
    /// An empty result means the player has to pass; that is a normal
    /// game state, not an error.
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        let mut moves = Vec::new();

        for row in 0..self.size {
            for col in 0..self.size {
                if self.is_legal_move(player, row, col) {
                    moves.push((row, col));
                }
            }
        }

        moves
    }

    /// Place a stone for `player` at (row, col) and return the resulting board
    ///
    /// The input board is never modified. Returns `OutOfBounds` for a
    /// coordinate off the board and `InvalidMove` when the cell fails the
    /// legality check. On success the result differs from the input only
    /// in the placed cell and the bracketed opponent runs; each of the 8
    /// directions is flipped independently of the others.
    pub fn apply_move(&self, player: Player, row: usize, col: usize) -> Result<Board, GameError> {
        if row >= self.size || col >= self.size {
            return Err(GameError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        if !self.is_legal_move(player, row, col) {
            return Err(GameError::InvalidMove(row, col));
        }

        let mut next = self.clone();
        next.cells[row * self.size + col] = player.stone();

        for (dr, dc) in DIRECTIONS {
            if self.would_flip_in_direction(player, row, col, dr, dc) {
                next.flip_in_direction(player, row, col, dr, dc);
            }
        }

        Ok(next)
    }

    /// Walk outward from (row, col): true iff the walk crosses at least
    /// one opponent stone and ends on one of the player's own
    fn would_flip_in_direction(
        &self,
        player: Player,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
    ) -> bool {
        let own = player.stone();
        let opponent = player.opponent().stone();
        let size = self.size as isize;

        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        let mut found_opponent = false;

        while r >= 0 && r < size && c >= 0 && c < size {
            match self.cells[(r as usize) * self.size + (c as usize)] {
                Cell::Empty => return false,
                cell if cell == opponent => {
                    found_opponent = true;
                    r += dr;
                    c += dc;
                }
                cell if cell == own => return found_opponent,
                _ => return false,
            }
        }

        false
    }

    /// Flip the opponent run following (row, col) in one direction
    ///
    /// The caller has already established that the run is bracketed.
    fn flip_in_direction(&mut self, player: Player, row: usize, col: usize, dr: isize, dc: isize) {
        let own = player.stone();
        let opponent = player.opponent().stone();
        let size = self.size as isize;

        let mut r = row as isize + dr;
        let mut c = col as isize + dc;

        while r >= 0 && r < size && c >= 0 && c < size {
            let index = (r as usize) * self.size + (c as usize);
            if self.cells[index] == opponent {
                self.cells[index] = own;
                r += dr;
                c += dc;
            } else {
                break;
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
