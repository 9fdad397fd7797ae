//! PyO3 bindings for the Reversi move core
//! Exposes the pure move operations and both selection strategies to Python

use crate::{Board, GameError, Player};
use ndarray::Array2;
use numpy::{PyArray2, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use reversi_engines::{select_move_maxflip, select_move_weighted};

fn to_value_error(err: GameError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Build a typed board from a square 2-D numpy array
fn board_from_array(array: &PyReadonlyArray2<'_, u8>) -> PyResult<Board> {
    let view = array.as_array();
    let (rows, cols) = (view.nrows(), view.ncols());
    if rows != cols {
        return Err(PyValueError::new_err(format!(
            "Board must be square, got {}x{}",
            rows, cols
        )));
    }

    let state: Vec<u8> = view.iter().copied().collect();
    Board::from_state(rows, &state).map_err(to_value_error)
}

/// Enumerate the legal moves for a player
///
/// Args:
///     board (np.ndarray): Square array with dtype uint8
///         (0 = Empty, 1 = Black, 2 = White)
///     player (int): Player to move (1 = Black, 2 = White)
///
/// Returns:
///     list[tuple[int, int]]: Legal (row, col) targets in row-major order.
///     An empty list means the player has to pass.
///
/// Raises:
///     ValueError: If the board is malformed or the player code is invalid
#[pyfunction]
fn get_valid_moves(board: PyReadonlyArray2<'_, u8>, player: u8) -> PyResult<Vec<(usize, usize)>> {
    let player = Player::from_u8(player).map_err(to_value_error)?;
    let board = board_from_array(&board)?;
    Ok(board.legal_moves(player))
}

/// Apply a move and return the resulting board
///
/// The input array is left untouched; the flips land in the returned copy.
///
/// Args:
///     board (np.ndarray): Square array with dtype uint8
///     player (int): Player to move (1 = Black, 2 = White)
///     row (int): Target row
///     col (int): Target column
///
/// Returns:
///     np.ndarray: A new array with the placed stone and all flips applied
///
/// Raises:
///     ValueError: If the move is out of range or not legal
#[pyfunction]
fn apply_move<'py>(
    py: Python<'py>,
    board: PyReadonlyArray2<'_, u8>,
    player: u8,
    row: usize,
    col: usize,
) -> PyResult<&'py PyArray2<u8>> {
    let player = Player::from_u8(player).map_err(to_value_error)?;
    let board = board_from_array(&board)?;
    let next = board.apply_move(player, row, col).map_err(to_value_error)?;

    let size = next.size();
    let state = next.to_state();
    let array = Array2::from_shape_fn((size, size), |(r, c)| state[r * size + c]);

    Ok(PyArray2::from_owned_array(py, array))
}

/// Pick a move with the weighted-corner strategy
///
/// Args:
///     board (list): Flat board state as 64 elements (0=Empty, 1=Black, 2=White)
///     player (int): Player to move (1 = Black, 2 = White)
///
/// Returns:
///     tuple[int, int] | None: The chosen (row, col), or None to pass
#[pyfunction]
fn select_move_weighted_py(board: Vec<u8>, player: u8) -> PyResult<Option<(usize, usize)>> {
    Player::from_u8(player).map_err(to_value_error)?;
    if board.len() != 64 {
        return Err(PyValueError::new_err(format!(
            "Board must have exactly 64 elements, got {}",
            board.len()
        )));
    }

    let mut board_array: [u8; 64] = [0; 64];
    board_array.copy_from_slice(&board);

    Ok(select_move_weighted(&board_array, player))
}

/// Pick a move with the max-flip strategy
///
/// Board dimensions are taken from the nested list itself, so any
/// rectangular size works.
///
/// Args:
///     board (list[list]): Nested board state (0=Empty, 1=Black, 2=White)
///     player (int): Player to move (1 = Black, 2 = White)
///
/// Returns:
///     tuple[int, int] | None: The chosen (row, col), or None to pass
#[pyfunction]
fn select_move_maxflip_py(board: Vec<Vec<u8>>, player: u8) -> PyResult<Option<(usize, usize)>> {
    Player::from_u8(player).map_err(to_value_error)?;
    let cols = board.first().map_or(0, |row| row.len());
    if board.iter().any(|row| row.len() != cols) {
        return Err(PyValueError::new_err(
            "Board rows must all have the same length",
        ));
    }

    Ok(select_move_maxflip(&board, player))
}

/// Python module definition
///
/// This module can be imported in Python as `reversi_rust`
#[pymodule]
fn reversi_rust(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(get_valid_moves, m)?)?;
    m.add_function(wrap_pyfunction!(apply_move, m)?)?;
    m.add_function(wrap_pyfunction!(select_move_weighted_py, m)?)?;
    m.add_function(wrap_pyfunction!(select_move_maxflip_py, m)?)?;
    Ok(())
}
