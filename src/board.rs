//! Board storage and the marks it holds.

use crate::cell::Cell;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Player {
    /// Player X.
    X,
    /// Player O (moves first in the default configuration).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// No mark placed.
    Empty,
    /// Marked by a player.
    Marked(Player),
}

/// 3x3 board, cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [CellState; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [CellState::Empty; 9],
        }
    }

    /// Gets the state of a cell.
    pub fn get(&self, cell: Cell) -> CellState {
        self.cells[cell.index()]
    }

    /// Marks a cell for a player. Overwrites without complaint; move
    /// legality lives in the engine, not the storage.
    pub(crate) fn mark(&mut self, cell: Cell, player: Player) {
        self.cells[cell.index()] = CellState::Marked(player);
    }

    /// Resets every cell to empty.
    pub(crate) fn clear(&mut self) {
        self.cells = [CellState::Empty; 9];
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == CellState::Empty
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != CellState::Empty)
    }

    /// Returns all cells as a slice, row-major.
    pub fn cells(&self) -> &[CellState; 9] {
        &self.cells
    }

    /// Formats the board as a human-readable grid. Empty cells show
    /// their index, marked cells their player.
    pub fn display(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match self.cells[idx] {
                    CellState::Empty => out.push_str(&idx.to_string()),
                    CellState::Marked(Player::X) => out.push('X'),
                    CellState::Marked(Player::O) => out.push('O'),
                }
                if col < 2 {
                    out.push('|');
                }
            }
            if row < 2 {
                out.push_str("\n-+-+-\n");
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert!(Cell::iter().all(|c| board.is_empty(c)));
        assert!(!board.is_full());
    }

    #[test]
    fn mark_and_clear() {
        let mut board = Board::new();
        board.mark(Cell::Center, Player::O);
        assert_eq!(board.get(Cell::Center), CellState::Marked(Player::O));
        board.clear();
        assert!(board.is_empty(Cell::Center));
    }

    #[test]
    fn full_board_detected() {
        let mut board = Board::new();
        for cell in Cell::iter() {
            board.mark(cell, Player::X);
        }
        assert!(board.is_full());
    }

    #[test]
    fn display_shows_marks_and_open_indices() {
        let mut board = Board::new();
        board.mark(Cell::TopLeft, Player::O);
        board.mark(Cell::Center, Player::X);
        let text = board.display();
        assert_eq!(text, "O|1|2\n-+-+-\n3|X|5\n-+-+-\n6|7|8");
    }
}
