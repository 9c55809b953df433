//! egui front end for Hexapawn

pub mod app;
pub mod board_view;
pub mod game_state;
pub mod theme;

pub use app::HexapawnApp;
pub use board_view::BoardView;
pub use game_state::{GameState, MoveAnimation};
