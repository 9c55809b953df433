//! Board grid with the Hexapawn starting position

use super::{Cell, Pos, Side, BOARD_SIZE};

/// Game board: a fixed 5x5 grid of cells.
///
/// The board is small enough to be `Copy`, but the authoritative game
/// board is mutated in place; the search uses make/unmake instead of
/// copying (see [`crate::rules::undo_move`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a board in the starting position: row 0 all AI pawns,
    /// row 4 all Player pawns, interior empty.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        cells[0] = [Cell::Ai; BOARD_SIZE];
        cells[BOARD_SIZE - 1] = [Cell::Player; BOARD_SIZE];
        Self { cells }
    }

    /// Create an empty board (used to set up test positions)
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Set cell at position
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Number of pawns the given side has on the board
    pub fn pawn_count(&self, side: Side) -> i32 {
        let target = side.cell();
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == target)
            .count() as i32
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
