//! Win detection and game outcome selection

use crate::board::{Board, Pos, Side, BOARD_SIZE};

use super::legal_moves;

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    AiWins,
    PlayerWins,
    Draw,
}

impl Outcome {
    /// Text shown on the end-of-game screen
    pub fn label(self) -> &'static str {
        match self {
            Outcome::AiWins => "AI Wins!",
            Outcome::PlayerWins => "Player Wins!",
            Outcome::Draw => "It's a Draw!",
        }
    }
}

/// Check whether `side` has reached its winning row.
///
/// Running out of moves also loses, but that is a property of whose turn
/// it is, so it is decided by [`game_outcome`], not here.
pub fn has_won(board: &Board, side: Side) -> bool {
    let row = side.win_row() as u8;
    (0..BOARD_SIZE as u8).any(|col| board.get(Pos::new(row, col)) == side.cell())
}

/// Decide whether the game is over with `to_move` about to play.
///
/// Checked in priority order: a pawn on the far row wins outright; if
/// neither side can move the game is drawn; a side that cannot move on
/// its turn loses.
pub fn game_outcome(board: &Board, to_move: Side) -> Option<Outcome> {
    if has_won(board, Side::Ai) {
        return Some(Outcome::AiWins);
    }
    if has_won(board, Side::Player) {
        return Some(Outcome::PlayerWins);
    }

    let player_stuck = legal_moves(board, Side::Player).is_empty();
    let ai_stuck = legal_moves(board, Side::Ai).is_empty();

    if player_stuck && ai_stuck {
        return Some(Outcome::Draw);
    }
    match to_move {
        Side::Player if player_stuck => Some(Outcome::AiWins),
        Side::Ai if ai_stuck => Some(Outcome::PlayerWins),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_player_wins_on_row_zero() {
        let mut board = Board::empty();
        board.set(Pos::new(0, 3), Cell::Player);
        assert!(has_won(&board, Side::Player));
        assert!(!has_won(&board, Side::Ai));
        assert_eq!(game_outcome(&board, Side::Ai), Some(Outcome::PlayerWins));
    }

    #[test]
    fn test_ai_wins_on_row_four() {
        let mut board = Board::empty();
        board.set(Pos::new(4, 1), Cell::Ai);
        board.set(Pos::new(3, 0), Cell::Player);
        assert!(has_won(&board, Side::Ai));
        assert!(!has_won(&board, Side::Player));
        assert_eq!(game_outcome(&board, Side::Player), Some(Outcome::AiWins));
    }

    #[test]
    fn test_no_outcome_in_initial_position() {
        let board = Board::new();
        assert!(!has_won(&board, Side::Player));
        assert!(!has_won(&board, Side::Ai));
        assert_eq!(game_outcome(&board, Side::Player), None);
        assert_eq!(game_outcome(&board, Side::Ai), None);
    }

    #[test]
    fn test_blocked_player_loses_on_their_turn() {
        // Player's only pawn is blocked head-on with no capture targets
        // on its diagonals, while the AI still has a free pawn
        let mut board = Board::empty();
        board.set(Pos::new(3, 0), Cell::Player);
        board.set(Pos::new(2, 0), Cell::Ai);
        board.set(Pos::new(0, 4), Cell::Ai);

        assert!(legal_moves(&board, Side::Player).is_empty());
        assert!(!legal_moves(&board, Side::Ai).is_empty());
        assert_eq!(game_outcome(&board, Side::Player), Some(Outcome::AiWins));
        // Same position with the AI to move is not over
        assert_eq!(game_outcome(&board, Side::Ai), None);
    }

    #[test]
    fn test_mutual_stalemate_is_a_draw() {
        // Two opposing pawns head to head in the same column, nothing
        // else on the board: neither side can advance or capture
        let mut board = Board::empty();
        board.set(Pos::new(2, 2), Cell::Ai);
        board.set(Pos::new(3, 2), Cell::Player);

        assert!(legal_moves(&board, Side::Player).is_empty());
        assert!(legal_moves(&board, Side::Ai).is_empty());
        assert_eq!(game_outcome(&board, Side::Player), Some(Outcome::Draw));
        assert_eq!(game_outcome(&board, Side::Ai), Some(Outcome::Draw));
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(Outcome::AiWins.label(), "AI Wins!");
        assert_eq!(Outcome::PlayerWins.label(), "Player Wins!");
        assert_eq!(Outcome::Draw.label(), "It's a Draw!");
    }
}
