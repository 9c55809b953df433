//! Game state management for the Hexapawn GUI
//!
//! The orchestration loop lives here: it owns the one authoritative
//! board, alternates turns, validates human moves, invokes the engine on
//! the AI's turn, and maps terminal positions to an end-of-game outcome.
//! Everything is synchronous and single-threaded; the search at the
//! fixed depth is far quicker than a frame.

use crate::board::{Board, Cell, Move, Pos, Side};
use crate::engine::{Engine, MoveResult};
use crate::rules::{apply_move, game_outcome, legal_moves, Outcome};
use std::time::Instant;

use super::theme::MOVE_ANIMATION;

/// A pawn sliding from its source square to its destination. The board
/// itself still shows the pre-move position; the move is applied only
/// once the slide finishes.
#[derive(Debug, Clone, Copy)]
pub struct MoveAnimation {
    pub mv: Move,
    /// The pawn being animated (drawn instead of the source cell)
    pub cell: Cell,
    pub started: Instant,
}

impl MoveAnimation {
    fn new(mv: Move, cell: Cell) -> Self {
        Self {
            mv,
            cell,
            started: Instant::now(),
        }
    }

    /// Slide progress in 0..=1
    pub fn progress(&self) -> f32 {
        (self.started.elapsed().as_secs_f32() / MOVE_ANIMATION.as_secs_f32()).min(1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.started.elapsed() >= MOVE_ANIMATION
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub turn: Side,
    pub selected: Option<Pos>,
    pub outcome: Option<Outcome>,
    pub last_move: Option<Move>,
    pub animation: Option<MoveAnimation>,
    pub last_ai_result: Option<MoveResult>,
    engine: Engine,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Side::Player,
            selected: None,
            outcome: None,
            last_move: None,
            animation: None,
            last_ai_result: None,
            engine: Engine::new(),
        }
    }

    /// Restart: back to the exact starting position
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Side::Player;
        self.selected = None;
        self.outcome = None;
        self.last_move = None;
        self.animation = None;
        self.last_ai_result = None;
    }

    pub fn is_player_turn(&self) -> bool {
        self.turn == Side::Player
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Handle a click on a board square during the player's turn.
    ///
    /// First click selects one of the player's pawns; a second click
    /// either plays a legal move or silently clears the selection.
    /// Illegal destinations are not an error.
    pub fn handle_click(&mut self, pos: Pos) {
        if self.outcome.is_some() || self.is_animating() || !self.is_player_turn() {
            return;
        }

        if let Some(from) = self.selected {
            let mv = Move::new(from, pos);
            self.selected = None;
            if legal_moves(&self.board, Side::Player).contains(&mv) {
                self.start_move(mv);
            }
        } else if self.board.get(pos) == Cell::Player {
            self.selected = Some(pos);
        }
    }

    /// Begin animating a validated move; it is applied on completion
    fn start_move(&mut self, mv: Move) {
        let cell = self.board.get(mv.from);
        self.animation = Some(MoveAnimation::new(mv, cell));
    }

    /// Per-frame advance: finish animations, then let the AI move.
    pub fn tick(&mut self) {
        if let Some(animation) = self.animation {
            if !animation.is_complete() {
                return;
            }
            self.animation = None;
            apply_move(&mut self.board, animation.mv);
            self.last_move = Some(animation.mv);
            self.turn = self.turn.opponent();
            self.outcome = game_outcome(&self.board, self.turn);
        }

        if self.outcome.is_none() && !self.is_player_turn() && !self.is_animating() {
            let result = self.engine.choose_move(&self.board);
            self.last_ai_result = Some(result);
            match result.best_move {
                Some(mv) => self.start_move(mv),
                // No move from the search means the position is terminal;
                // game_outcome has the final say, never a crash
                None => self.outcome = game_outcome(&self.board, self.turn),
            }
        }
    }

    /// Legal destinations for the currently selected pawn
    pub fn selected_targets(&self) -> Vec<Pos> {
        match self.selected {
            Some(from) => legal_moves(&self.board, Side::Player)
                .into_iter()
                .filter(|mv| mv.from == from)
                .map(|mv| mv.to)
                .collect(),
            None => Vec::new(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
