//! 5x5 Hexapawn with a minimax AI opponent
//!
//! Hexapawn on a 5x5 board, played against the computer. Pawns advance
//! one square toward the far row and capture diagonally; you win by
//! reaching the opponent's home row, and a side that cannot move on its
//! turn loses (if neither side can move, the game is drawn).
//!
//! # Architecture
//!
//! - [`board`]: Board grid, cell/side/position/move types
//! - [`rules`]: Move generation, move application, win detection
//! - [`search`]: Depth-limited minimax with alpha-beta pruning
//! - [`engine`]: AI engine wrapper with per-move statistics
//! - [`ui`]: egui front end (board rendering, animation, end screen)
//!
//! # Quick Start
//!
//! ```
//! use hexapawn::{Board, Engine, Side};
//! use hexapawn::rules::{apply_move, legal_moves};
//!
//! let mut board = Board::new();
//!
//! // Human opens with the first legal move
//! let opening = legal_moves(&board, Side::Player)[0];
//! apply_move(&mut board, opening);
//!
//! // AI responds
//! let engine = Engine::new();
//! if let Some(reply) = engine.choose_move(&board).best_move {
//!     apply_move(&mut board, reply);
//! }
//! ```

pub mod board;
pub mod engine;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Move, Pos, Side, BOARD_SIZE};
pub use engine::{Engine, MoveResult, SEARCH_DEPTH};
pub use rules::Outcome;
