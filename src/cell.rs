//! Board cells: the nine positions of the 3x3 grid.

use serde::{Deserialize, Serialize};

/// A cell on the board, row-major from the top-left.
///
/// Input adapters translate raw pointer/ray hits into a cell index;
/// [`Cell::from_index`] is the single place where untrusted indices
/// become typed positions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Cell {
    /// Top-left (index 0).
    TopLeft,
    /// Top-center (index 1).
    TopCenter,
    /// Top-right (index 2).
    TopRight,
    /// Middle-left (index 3).
    MiddleLeft,
    /// Center (index 4).
    Center,
    /// Middle-right (index 5).
    MiddleRight,
    /// Bottom-left (index 6).
    BottomLeft,
    /// Bottom-center (index 7).
    BottomCenter,
    /// Bottom-right (index 8).
    BottomRight,
}

impl Cell {
    /// Converts a raw index to a cell. `None` for anything outside 0-8,
    /// including the negative sentinel a ray-pick miss produces.
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Cell::TopLeft),
            1 => Some(Cell::TopCenter),
            2 => Some(Cell::TopRight),
            3 => Some(Cell::MiddleLeft),
            4 => Some(Cell::Center),
            5 => Some(Cell::MiddleRight),
            6 => Some(Cell::BottomLeft),
            7 => Some(Cell::BottomCenter),
            8 => Some(Cell::BottomRight),
            _ => None,
        }
    }

    /// Board index of this cell (0-8, row-major).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Iterates all nine cells in index order.
    pub fn iter() -> impl Iterator<Item = Cell> {
        <Cell as strum::IntoEnumIterator>::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for cell in Cell::iter() {
            assert_eq!(Cell::from_index(cell.index() as i32), Some(cell));
        }
    }

    #[test]
    fn out_of_range_indices_rejected() {
        assert_eq!(Cell::from_index(-1), None);
        assert_eq!(Cell::from_index(9), None);
        assert_eq!(Cell::from_index(i32::MAX), None);
    }

    #[test]
    fn iter_covers_board_in_order() {
        let indices: Vec<usize> = Cell::iter().map(Cell::index).collect();
        assert_eq!(indices, (0..9).collect::<Vec<_>>());
    }
}
