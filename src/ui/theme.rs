//! Theme constants for the Hexapawn GUI

use egui::Color32;
use std::time::Duration;

// Checkerboard squares - classic chessboard tones
pub const SQUARE_LIGHT: Color32 = Color32::from_rgb(240, 217, 181);
pub const SQUARE_DARK: Color32 = Color32::from_rgb(181, 136, 99);
pub const SELECTED_OUTLINE: Color32 = Color32::from_rgb(186, 202, 68);

// Pawn colors
pub const PLAYER_PAWN: Color32 = Color32::from_rgb(248, 248, 246);
pub const PLAYER_PAWN_RIM: Color32 = Color32::from_rgb(150, 150, 148);
pub const AI_PAWN: Color32 = Color32::from_rgb(45, 42, 40);
pub const AI_PAWN_RIM: Color32 = Color32::from_rgb(90, 86, 82);

// Markers
pub const LAST_MOVE_TINT: Color32 = Color32::from_rgba_premultiplied(40, 60, 20, 60);
pub const LEGAL_TARGET_DOT: Color32 = Color32::from_rgba_premultiplied(33, 49, 22, 140);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BOARD_AREA_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_THINKING: Color32 = Color32::from_rgb(255, 180, 50);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// End screen
pub const END_CARD_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const END_BUTTON_BG: Color32 = Color32::from_rgb(100, 200, 100);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const PAWN_RADIUS_RATIO: f32 = 0.36;
pub const SELECTED_OUTLINE_WIDTH: f32 = 4.0;

/// Sliding-pawn animation length
pub const MOVE_ANIMATION: Duration = Duration::from_millis(300);
