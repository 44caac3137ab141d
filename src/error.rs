//! Move rejection taxonomy.
//!
//! Every variant is expected and recoverable; the presentation layer
//! typically logs the rejection and keeps waiting for the next input.

use crate::cell::Cell;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why an attempted move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, Serialize, Deserialize)]
pub enum MoveError {
    /// The game is not in progress (not yet started, or already over).
    #[display("game is not in progress")]
    GameOver,
    /// The cell index is outside 0-8.
    #[display("cell index {index} is out of range")]
    OutOfRange {
        /// The rejected raw index.
        index: i32,
    },
    /// The target cell already holds a mark.
    #[display("cell {cell} is already occupied")]
    Occupied {
        /// The occupied cell.
        cell: Cell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_for_logs() {
        assert_eq!(MoveError::GameOver.to_string(), "game is not in progress");
        assert_eq!(
            MoveError::OutOfRange { index: -1 }.to_string(),
            "cell index -1 is out of range"
        );
        assert_eq!(
            MoveError::Occupied { cell: Cell::Center }.to_string(),
            "cell Center is already occupied"
        );
    }
}
