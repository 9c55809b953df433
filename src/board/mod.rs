//! Board representation for Hexapawn

pub mod board;


// Re-exports
pub use board::Board;

/// Board size (5x5)
pub const BOARD_SIZE: usize = 5;

/// Cell occupancy states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player,
    Ai,
}

impl Cell {
    /// The side occupying this cell, if any
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Player => Some(Side::Player),
            Cell::Ai => Some(Side::Ai),
            Cell::Empty => None,
        }
    }
}

/// The two players. Empty is a cell state, not a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Human, starts on row 4 and pushes toward row 0
    Player,
    /// Computer, starts on row 0 and pushes toward row 4
    Ai,
}

impl Side {
    /// Get the opposing side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    /// The cell state a pawn of this side occupies
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Side::Player => Cell::Player,
            Side::Ai => Cell::Ai,
        }
    }

    /// Row delta for a forward move
    #[inline]
    pub fn direction(self) -> i32 {
        match self {
            Side::Player => -1,
            Side::Ai => 1,
        }
    }

    /// Reaching this row wins the game for this side
    #[inline]
    pub fn win_row(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Ai => BOARD_SIZE - 1,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }
}

/// A move from a source cell to a destination cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
}

impl Move {
    #[inline]
    pub fn new(from: Pos, to: Pos) -> Self {
        Self { from, to }
    }

    /// True if the move changes column (a capture shape)
    #[inline]
    pub fn is_diagonal(self) -> bool {
        self.from.col != self.to.col
    }
}
