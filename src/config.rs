//! Engine configuration.

use crate::board::Player;
use crate::lines::{default_extra_lines, WinLine};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Recognized configuration options for a game engine.
///
/// The defaults match the observed behavior of the original game: four
/// V-shape extra lines, a two second auto-restart delay, and O moving
/// first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Win lines checked after the eight fixed lines, in order. Lines
    /// with out-of-range indices are skipped during scanning.
    pub extra_lines: Vec<WinLine>,
    /// Delay before the scheduled auto-restart after a terminal result.
    pub restart_delay: Duration,
    /// Which player moves first after every start/reset.
    pub starting_player: Player,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            extra_lines: default_extra_lines(),
            restart_delay: Duration::from_secs(2),
            starting_player: Player::O,
        }
    }
}
