//! Game rules for 5x5 Hexapawn
//!
//! This module implements the rule set:
//! - Move generation (straight advance, diagonal capture)
//! - Move application with undo support
//! - Win conditions (reaching the far row, opponent out of moves)

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{apply_move, legal_moves, undo_move};
pub use win::{game_outcome, has_won, Outcome};
