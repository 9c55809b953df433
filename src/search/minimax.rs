//! Minimax search with alpha-beta pruning
//!
//! The AI is the maximizing side. Positions are scored by the material
//! balance alone, and the same function serves as both the horizon cutoff
//! and the terminal-win value, so a won position and a material-equal
//! quiet position past the horizon score identically.
//!
//! Hypothetical lines are explored by make/unmake on a single board
//! rather than copying the board per branch. Move ordering follows
//! [`legal_moves`] and ties keep the first move seen, so results are
//! fully reproducible.

use crate::board::{Board, Move, Side, BOARD_SIZE};
use crate::rules::{apply_move, has_won, legal_moves, undo_move};

/// Score bound strictly outside the reachable evaluation range.
/// Material balance never exceeds one side's full pawn row.
pub const INF: i32 = BOARD_SIZE as i32 + 1;

/// Result of a search from the root position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any legal move exists
    pub best_move: Option<Move>,
    /// Minimax score of the position (positive favors the AI)
    pub score: i32,
    /// Nodes visited, counting the root
    pub nodes: u64,
}

/// Evaluate the board: AI pawns minus Player pawns.
#[inline]
pub fn evaluate(board: &Board) -> i32 {
    board.pawn_count(Side::Ai) - board.pawn_count(Side::Player)
}

/// Search from the AI's perspective with a full alpha-beta window.
pub fn search(board: &Board, depth: u8) -> SearchResult {
    let mut scratch = *board;
    let mut nodes = 0;
    let (score, best_move) = minimax(&mut scratch, depth, -INF, INF, true, &mut nodes);
    debug_assert_eq!(scratch, *board, "search must leave the board untouched");
    SearchResult {
        best_move,
        score,
        nodes,
    }
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// Returns the score and the move achieving it (`None` at leaves and when
/// the mover has no legal moves). The mover is the AI when `maximizing`,
/// the Player otherwise. Ties are broken toward the first move in
/// generation order because comparisons are strict.
fn minimax(
    board: &mut Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    nodes: &mut u64,
) -> (i32, Option<Move>) {
    *nodes += 1;

    if depth == 0 || has_won(board, Side::Player) || has_won(board, Side::Ai) {
        return (evaluate(board), None);
    }

    let side = if maximizing { Side::Ai } else { Side::Player };
    let moves = legal_moves(board, side);
    if moves.is_empty() {
        // A stuck mover is scored statically, not as a loss; the
        // orchestration layer handles no-moves-ends-the-game.
        return (evaluate(board), None);
    }

    let mut best_move = None;
    if maximizing {
        let mut best_score = -INF;
        for mv in moves {
            let captured = apply_move(board, mv);
            let (score, _) = minimax(board, depth - 1, alpha, beta, false, nodes);
            undo_move(board, mv, captured);
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        (best_score, best_move)
    } else {
        let mut best_score = INF;
        for mv in moves {
            let captured = apply_move(board, mv);
            let (score, _) = minimax(board, depth - 1, alpha, beta, true, nodes);
            undo_move(board, mv, captured);
            if score < best_score {
                best_score = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        (best_score, best_move)
    }
}
