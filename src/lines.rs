//! Win lines: the eight canonical tic-tac-toe lines plus the V-shape
//! extras, and the scan that finds a completed line.
//!
//! Scanning order is fixed and observable through the reported winning
//! line: rows top to bottom, columns left to right, main diagonal,
//! anti-diagonal, then extra lines in their configured order.

use crate::board::{Board, CellState, Player};
use crate::cell::Cell;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A triple of board indices that wins the game when one player owns
/// all three.
///
/// Indices are kept raw rather than typed so that externally supplied
/// extra lines with bad indices can be skipped during scanning instead
/// of poisoning the whole rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine(pub [i32; 3]);

impl WinLine {
    /// Creates a line from three raw indices.
    pub const fn new(a: i32, b: i32, c: i32) -> Self {
        Self([a, b, c])
    }

    /// The raw indices of this line.
    pub fn indices(&self) -> [i32; 3] {
        self.0
    }

    /// Resolves the line to typed cells, or `None` if any index is out
    /// of range.
    pub fn cells(&self) -> Option<[Cell; 3]> {
        let [a, b, c] = self.0;
        Some([Cell::from_index(a)?, Cell::from_index(b)?, Cell::from_index(c)?])
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "({a},{b},{c})")
    }
}

/// The eight canonical lines, in scan order.
pub const FIXED_LINES: [WinLine; 8] = [
    // Rows
    WinLine::new(0, 1, 2),
    WinLine::new(3, 4, 5),
    WinLine::new(6, 7, 8),
    // Columns
    WinLine::new(0, 3, 6),
    WinLine::new(1, 4, 7),
    WinLine::new(2, 5, 8),
    // Diagonals
    WinLine::new(0, 4, 8),
    WinLine::new(2, 4, 6),
];

/// The four default V-shape extra lines. Each joins two corners of one
/// board edge through the center cell.
pub fn default_extra_lines() -> Vec<WinLine> {
    vec![
        WinLine::new(0, 4, 2),
        WinLine::new(2, 4, 8),
        WinLine::new(8, 4, 6),
        WinLine::new(6, 4, 0),
    ]
}

/// Scans fixed lines then `extras` for a line fully owned by one
/// player. Returns the first match together with the line itself.
/// Extra lines that fail to resolve are skipped, not rejected.
pub(crate) fn find_completed_line(
    board: &Board,
    extras: &[WinLine],
) -> Option<(Player, WinLine)> {
    for line in FIXED_LINES.iter().chain(extras.iter()) {
        let Some([a, b, c]) = line.cells() else {
            debug!(line = %line, "skipping win line with out-of-range index");
            continue;
        };
        let first = board.get(a);
        if first != CellState::Empty && first == board.get(b) && first == board.get(c) {
            if let CellState::Marked(player) = first {
                return Some((player, *line));
            }
        }
    }
    None
}
