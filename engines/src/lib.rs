//! Reversi move-selection strategies
//!
//! This crate contains two self-contained move pickers:
//! - `weighted`: plays the legal cell with the highest value in a static
//!   positional table, favouring corners and edges and avoiding the cells
//!   next to a corner
//! - `maxflip`: greedy picker that plays the cell flipping the most
//!   opponent stones right now
//!
//! Both strategies run the same 8-direction bracket scan over raw byte
//! grids (0 = Empty, 1 = Black, 2 = White) and break ties by the first
//! candidate in row-major order. They share no state and no helpers;
//! callers pick a policy by name. `None` means the player has no legal
//! move and must pass.

pub mod maxflip;
pub mod weighted;

pub use maxflip::select_move as select_move_maxflip;
pub use weighted::select_move as select_move_weighted;

/// Flat 8x8 board used by the weighted strategy
/// Cells are indexed as row * 8 + col, 0 = Empty, 1 = Black, 2 = White
pub type Board = [u8; 64];
