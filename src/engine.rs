//! AI engine wrapper around the minimax search
//!
//! Owns the fixed search depth and reports per-move statistics so the UI
//! can display what the search did.
//!
//! # Example
//!
//! ```
//! use hexapawn::{Board, Engine};
//!
//! let engine = Engine::new();
//! let board = Board::new();
//!
//! let result = engine.choose_move(&board);
//! if let Some(mv) = result.best_move {
//!     println!("AI plays ({}, {}) -> ({}, {})", mv.from.row, mv.from.col, mv.to.row, mv.to.col);
//! }
//! ```

use crate::board::{Board, Move};
use crate::search::search;
use std::time::Instant;

/// Fixed search horizon. Deep enough for a capable opponent on a 5x5
/// board while staying instant for interactive play.
pub const SEARCH_DEPTH: u8 = 3;

/// Result of a move search with statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found; `None` means the AI has no legal move and the
    /// caller must treat the position as terminal rather than play
    pub best_move: Option<Move>,
    /// Minimax score of the chosen line (positive favors the AI)
    pub score: i32,
    /// Nodes visited during the search
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// AI engine choosing moves for the computer side.
///
/// The search is synchronous and blocking: the state space at the fixed
/// depth is small enough that a move decision is effectively instant, so
/// no background thread or cancellation is needed.
pub struct Engine {
    depth: u8,
}

impl Engine {
    /// Create an engine with the standard search depth
    pub fn new() -> Self {
        Self::with_depth(SEARCH_DEPTH)
    }

    /// Create an engine searching to a custom depth
    pub fn with_depth(depth: u8) -> Self {
        Self { depth }
    }

    /// Pick the best move for the AI in the given position.
    pub fn choose_move(&self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let result = search(board, self.depth);
        MoveResult {
            best_move: result.best_move,
            score: result.score,
            nodes: result.nodes,
            time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
