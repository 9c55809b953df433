//! Move generation and application
//!
//! Hexapawn pawns have three move shapes: a straight advance into an empty
//! cell, and two diagonal captures onto an enemy pawn. Move generation
//! scans the board in row-major order and emits straight, then diagonal
//! left, then diagonal right per pawn, so the move list is deterministic
//! for a given position. The search relies on this order for reproducible
//! tie-breaking.

use crate::board::{Board, Cell, Move, Pos, Side};

/// Enumerate all legal moves for `side`.
///
/// Destinations are bounds-checked here; `apply_move` trusts its input.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();
    let dir = side.direction();

    for row in 0..board.size() {
        for col in 0..board.size() {
            let from = Pos::new(row as u8, col as u8);
            if board.get(from) != side.cell() {
                continue;
            }

            let next_row = row as i32 + dir;
            if !Pos::is_valid(next_row, col as i32) {
                continue;
            }

            // Straight advance into an empty cell
            let ahead = Pos::new(next_row as u8, col as u8);
            if board.is_empty(ahead) {
                moves.push(Move::new(from, ahead));
            }

            // Diagonal captures, left then right
            for dc in [-1, 1] {
                let next_col = col as i32 + dc;
                if !Pos::is_valid(next_row, next_col) {
                    continue;
                }
                let target = Pos::new(next_row as u8, next_col as u8);
                match board.get(target).side() {
                    Some(occupant) if occupant != side => {
                        moves.push(Move::new(from, target));
                    }
                    _ => {}
                }
            }
        }
    }

    moves
}

/// Apply a move: the pawn leaves its source cell and lands on the
/// destination, overwriting any captured pawn.
///
/// Returns the destination's previous content so the caller can undo.
/// No legality check is performed; callers must have validated the move
/// against `legal_moves`.
#[inline]
pub fn apply_move(board: &mut Board, mv: Move) -> Cell {
    let piece = board.get(mv.from);
    debug_assert!(piece != Cell::Empty, "apply_move from an empty cell");
    let captured = board.get(mv.to);
    board.set(mv.to, piece);
    board.set(mv.from, Cell::Empty);
    captured
}

/// Undo a move previously applied with `apply_move`, restoring the
/// captured cell content. The search explores hypothetical lines by
/// make/unmake on a single board instead of copying it per branch.
#[inline]
pub fn undo_move(board: &mut Board, mv: Move, captured: Cell) {
    let piece = board.get(mv.to);
    board.set(mv.from, piece);
    board.set(mv.to, captured);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;

    #[test]
    fn test_initial_moves_are_straight_advances() {
        let board = Board::new();

        let player_moves = legal_moves(&board, Side::Player);
        assert_eq!(player_moves.len(), 5);
        for (col, mv) in player_moves.iter().enumerate() {
            assert_eq!(mv.from, Pos::new(4, col as u8));
            assert_eq!(mv.to, Pos::new(3, col as u8));
        }

        let ai_moves = legal_moves(&board, Side::Ai);
        assert_eq!(ai_moves.len(), 5);
        for (col, mv) in ai_moves.iter().enumerate() {
            assert_eq!(mv.from, Pos::new(0, col as u8));
            assert_eq!(mv.to, Pos::new(1, col as u8));
        }
    }

    #[test]
    fn test_generated_moves_are_legal() {
        // Mid-game position with contact between the pawn lines
        let mut board = Board::new();
        apply_move(&mut board, Move::new(Pos::new(4, 1), Pos::new(3, 1)));
        apply_move(&mut board, Move::new(Pos::new(0, 2), Pos::new(1, 2)));
        apply_move(&mut board, Move::new(Pos::new(3, 1), Pos::new(2, 1)));
        apply_move(&mut board, Move::new(Pos::new(1, 2), Pos::new(2, 2)));

        for side in [Side::Player, Side::Ai] {
            for mv in legal_moves(&board, side) {
                assert_eq!(board.get(mv.from), side.cell());
                assert_eq!(mv.to.row as i32, mv.from.row as i32 + side.direction());
                if mv.is_diagonal() {
                    assert_eq!(board.get(mv.to), side.opponent().cell());
                } else {
                    assert!(board.is_empty(mv.to));
                }
            }
        }
    }

    #[test]
    fn test_move_order_is_deterministic() {
        let mut board = Board::new();
        apply_move(&mut board, Move::new(Pos::new(4, 2), Pos::new(3, 2)));
        apply_move(&mut board, Move::new(Pos::new(0, 1), Pos::new(1, 1)));
        apply_move(&mut board, Move::new(Pos::new(1, 1), Pos::new(2, 1)));

        let first = legal_moves(&board, Side::Player);
        let second = legal_moves(&board, Side::Player);
        assert_eq!(first, second);

        // Row-major scan, straight before diagonals
        let from = Pos::new(3, 2);
        let own: Vec<Move> = first.into_iter().filter(|m| m.from == from).collect();
        assert_eq!(
            own,
            vec![
                Move::new(from, Pos::new(2, 2)),
                Move::new(from, Pos::new(2, 1)),
            ]
        );
    }

    #[test]
    fn test_initial_moves_are_mirror_symmetric() {
        let board = Board::new();
        let player_moves = legal_moves(&board, Side::Player);
        let ai_moves = legal_moves(&board, Side::Ai);
        assert_eq!(player_moves.len(), ai_moves.len());

        let flip = |pos: Pos| {
            Pos::new(
                (BOARD_SIZE - 1) as u8 - pos.row,
                (BOARD_SIZE - 1) as u8 - pos.col,
            )
        };
        let mut mirrored: Vec<Move> = player_moves
            .iter()
            .map(|m| Move::new(flip(m.from), flip(m.to)))
            .collect();
        mirrored.reverse();
        assert_eq!(mirrored, ai_moves);
    }

    #[test]
    fn test_no_capture_of_own_pawn() {
        let mut board = Board::empty();
        board.set(Pos::new(3, 2), Cell::Player);
        board.set(Pos::new(2, 1), Cell::Player);
        board.set(Pos::new(2, 3), Cell::Player);

        // Each pawn keeps its straight advance, in row-major order
        let moves = legal_moves(&board, Side::Player);
        assert_eq!(
            moves,
            vec![
                Move::new(Pos::new(2, 1), Pos::new(1, 1)),
                Move::new(Pos::new(2, 3), Pos::new(1, 3)),
                Move::new(Pos::new(3, 2), Pos::new(2, 2)),
            ]
        );

        // The pawn at (3,2) gets no diagonals: both hold own pawns
        let from_center: Vec<Move> = moves
            .into_iter()
            .filter(|mv| mv.from == Pos::new(3, 2))
            .collect();
        assert_eq!(from_center, vec![Move::new(Pos::new(3, 2), Pos::new(2, 2))]);
    }

    #[test]
    fn test_blocked_straight_advance() {
        let mut board = Board::empty();
        board.set(Pos::new(3, 2), Cell::Player);
        board.set(Pos::new(2, 2), Cell::Ai);

        let moves = legal_moves(&board, Side::Player);
        // Straight is blocked, but the blocker is not capturable head-on;
        // the only moves are the two diagonals if occupied, which they are not
        assert!(moves.is_empty());

        // Add a capture target and it becomes the only move
        board.set(Pos::new(2, 3), Cell::Ai);
        let moves = legal_moves(&board, Side::Player);
        assert_eq!(moves, vec![Move::new(Pos::new(3, 2), Pos::new(2, 3))]);
    }

    #[test]
    fn test_opening_response_scenario() {
        // Player opens (4,0) -> (3,0); every AI reply must be a straight
        // advance since no capture targets exist yet
        let mut board = Board::new();
        apply_move(&mut board, Move::new(Pos::new(4, 0), Pos::new(3, 0)));

        let ai_moves = legal_moves(&board, Side::Ai);
        assert!(ai_moves.contains(&Move::new(Pos::new(0, 0), Pos::new(1, 0))));
        assert_eq!(ai_moves.len(), 5);
        assert!(ai_moves.iter().all(|m| !m.is_diagonal()));
    }

    #[test]
    fn test_apply_then_undo_restores_board() {
        let mut board = Board::new();
        board.set(Pos::new(3, 1), Cell::Ai);
        let before = board;

        let capture = Move::new(Pos::new(4, 0), Pos::new(3, 1));
        let captured = apply_move(&mut board, capture);
        assert_eq!(captured, Cell::Ai);
        assert_eq!(board.get(Pos::new(3, 1)), Cell::Player);
        assert!(board.is_empty(Pos::new(4, 0)));

        undo_move(&mut board, capture, captured);
        assert_eq!(board, before);
    }
}
