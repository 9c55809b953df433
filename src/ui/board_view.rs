//! Board rendering for the Hexapawn GUI

use crate::board::{Board, Cell, Move, Pos, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::game_state::MoveAnimation;
use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached square size for coordinate calculations
    square_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            square_size: 80.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked square, if any
    #[allow(clippy::too_many_arguments)]
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        selected: Option<Pos>,
        targets: &[Pos],
        last_move: Option<Move>,
        animation: Option<&MoveAnimation>,
        game_over: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y) - 2.0 * BOARD_MARGIN;
        self.square_size = board_size / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        self.draw_squares(&painter, last_move);

        if let Some(pos) = selected {
            self.draw_selection(&painter, pos);
        }
        for &pos in targets {
            self.draw_target_dot(&painter, pos);
        }

        // During a slide the source square is drawn empty and the moving
        // pawn is interpolated between the two squares
        let skip = animation.map(|a| a.mv.from);
        self.draw_pawns(&painter, board, skip);
        if let Some(animation) = animation {
            self.draw_sliding_pawn(&painter, animation);
        }

        if game_over || animation.is_some() {
            return None;
        }
        if response.clicked() {
            let pointer = response.interact_pointer_pos()?;
            return self.screen_to_board(pointer);
        }
        None
    }

    /// Draw the 5x5 checkerboard
    fn draw_squares(&self, painter: &Painter, last_move: Option<Move>) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                let color = if (row + col) % 2 == 0 {
                    SQUARE_LIGHT
                } else {
                    SQUARE_DARK
                };
                let rect = self.square_rect(pos);
                painter.rect_filled(rect, CornerRadius::ZERO, color);

                if last_move.is_some_and(|mv| mv.from == pos || mv.to == pos) {
                    painter.rect_filled(rect, CornerRadius::ZERO, LAST_MOVE_TINT);
                }
            }
        }
    }

    /// Outline the selected square
    fn draw_selection(&self, painter: &Painter, pos: Pos) {
        painter.rect_stroke(
            self.square_rect(pos),
            CornerRadius::ZERO,
            Stroke::new(SELECTED_OUTLINE_WIDTH, SELECTED_OUTLINE),
            egui::StrokeKind::Inside,
        );
    }

    /// Mark a legal destination for the selected pawn
    fn draw_target_dot(&self, painter: &Painter, pos: Pos) {
        let center = self.square_rect(pos).center();
        painter.circle_filled(center, self.square_size * 0.12, LEGAL_TARGET_DOT);
    }

    /// Draw all pawns, optionally skipping one square (the animated source)
    fn draw_pawns(&self, painter: &Painter, board: &Board, skip: Option<Pos>) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                if skip == Some(pos) {
                    continue;
                }
                let cell = board.get(pos);
                if cell != Cell::Empty {
                    self.draw_pawn(painter, self.square_rect(pos).center(), cell);
                }
            }
        }
    }

    /// Draw a single pawn disc with a shadow and rim
    fn draw_pawn(&self, painter: &Painter, center: Pos2, cell: Cell) {
        let radius = self.square_size * PAWN_RADIUS_RATIO;
        let (fill, rim) = match cell {
            Cell::Player => (PLAYER_PAWN, PLAYER_PAWN_RIM),
            Cell::Ai => (AI_PAWN, AI_PAWN_RIM),
            Cell::Empty => return,
        };

        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 50),
        );
        painter.circle_filled(center, radius, fill);
        painter.circle_stroke(center, radius, Stroke::new(radius * 0.12, rim));
    }

    /// Draw the pawn sliding between its source and destination squares
    fn draw_sliding_pawn(&self, painter: &Painter, animation: &MoveAnimation) {
        let from = self.square_rect(animation.mv.from).center();
        let to = self.square_rect(animation.mv.to).center();
        let t = animation.progress();
        let center = Pos2::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
        self.draw_pawn(painter, center, animation.cell);
    }

    /// Screen rectangle of a board square
    fn square_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                pos.col as f32 * self.square_size,
                pos.row as f32 * self.square_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.square_size))
    }

    /// Convert screen coordinates to a board square
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = (relative.x / self.square_size).floor() as i32;
        let row = (relative.y / self.square_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }
}
