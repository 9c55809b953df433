//! Search module for the Hexapawn AI
//!
//! Contains:
//! - Material evaluation
//! - Depth-limited minimax with alpha-beta pruning

pub mod minimax;

pub use minimax::{evaluate, search, SearchResult, INF};
