//! The rules engine: move legality, terminal detection, lifecycle,
//! and the session score tally.

use crate::board::{Board, Player};
use crate::cell::Cell;
use crate::config::EngineConfig;
use crate::error::MoveError;
use crate::lines::{find_completed_line, WinLine};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Lifecycle state of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Engine constructed, no match started yet. Moves are rejected.
    AwaitingStart,
    /// A match is running and moves are accepted.
    InProgress,
    /// A match ended with a winner.
    Won(Player),
    /// A match ended with a full board and no winner.
    Tie,
}

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terminal {
    /// A player completed a win line.
    Won {
        /// The winner.
        player: Player,
        /// The first completed line in scan order.
        line: WinLine,
    },
    /// The board filled with no completed line.
    Tie,
}

/// Win counters for the session. Increment-only; they persist across
/// resets and are zeroed only when the engine is constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    x_wins: u32,
    o_wins: u32,
}

impl ScoreTally {
    /// Wins recorded for X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Wins recorded for O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x_wins += 1,
            Player::O => self.o_wins += 1,
        }
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The player whose mark was placed.
    pub player: Player,
    /// The cell that was marked.
    pub cell: Cell,
    /// Match status after the move.
    pub status: GameStatus,
    /// Set when this move ended the match.
    pub terminal: Option<Terminal>,
}

/// Authoritative game rules and state machine.
///
/// The engine owns the board, the turn, the win-line rule set, and the
/// score tally. It is single-writer by design: hosts in concurrent
/// environments should serialize all calls through one owner.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: EngineConfig,
    board: Board,
    turn: Player,
    status: GameStatus,
    score: ScoreTally,
    history: Vec<Cell>,
}

impl GameEngine {
    /// Creates an engine in `AwaitingStart` with a zeroed tally.
    #[instrument]
    pub fn new(config: EngineConfig) -> Self {
        let turn = config.starting_player;
        Self {
            config,
            board: Board::new(),
            turn,
            status: GameStatus::AwaitingStart,
            score: ScoreTally::default(),
            history: Vec::new(),
        }
    }

    /// Creates an engine with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Starts a fresh match: empty board, configured starting player,
    /// `InProgress`. Safe to call from any state.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        info!(starting_player = %self.config.starting_player, "starting match");
        self.fresh_match();
    }

    /// Resets to a fresh match. Identical in effect to [`start`], kept
    /// separate so hosts can distinguish an explicit restart from the
    /// scheduled post-game one.
    ///
    /// [`start`]: GameEngine::start
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(prior_status = ?self.status, "resetting match");
        self.fresh_match();
    }

    fn fresh_match(&mut self) {
        self.board.clear();
        self.history.clear();
        self.turn = self.config.starting_player;
        self.status = GameStatus::InProgress;
    }

    /// Attempts to mark `cell_index` for the player on turn.
    ///
    /// On success the turn flips and the terminal condition is
    /// evaluated; a win increments the winner's tally. Rejections are
    /// ordered: a finished or unstarted game reports `GameOver` before
    /// the index is even looked at, then range, then occupancy.
    #[instrument(skip(self), fields(player = %self.turn))]
    pub fn attempt_move(&mut self, cell_index: i32) -> Result<MoveOutcome, MoveError> {
        if self.status != GameStatus::InProgress {
            debug!(status = ?self.status, "move rejected, game not in progress");
            return Err(MoveError::GameOver);
        }
        let cell = Cell::from_index(cell_index)
            .ok_or(MoveError::OutOfRange { index: cell_index })?;
        if !self.board.is_empty(cell) {
            debug!(%cell, "move rejected, cell occupied");
            return Err(MoveError::Occupied { cell });
        }

        let player = self.turn;
        self.board.mark(cell, player);
        self.history.push(cell);
        self.turn = player.opponent();

        let terminal = self.check_win();
        match terminal {
            Some(Terminal::Won { player: winner, line }) => {
                self.status = GameStatus::Won(winner);
                self.score.record_win(winner);
                info!(%winner, %line, score = ?self.score, "match won");
            }
            Some(Terminal::Tie) => {
                self.status = GameStatus::Tie;
                info!("match tied");
            }
            None => {
                debug!(%player, %cell, next = %self.turn, "move accepted");
            }
        }

        Ok(MoveOutcome {
            player,
            cell,
            status: self.status,
            terminal,
        })
    }

    /// Pure terminal-condition query: first completed line in scan
    /// order, else tie when the board is full, else `None`. Win is
    /// checked before tie, so a win on the ninth move reports a win.
    pub fn check_win(&self) -> Option<Terminal> {
        if let Some((player, line)) = find_completed_line(&self.board, &self.config.extra_lines) {
            return Some(Terminal::Won { player, line });
        }
        if self.board.is_full() {
            return Some(Terminal::Tie);
        }
        None
    }

    /// Cells currently legal to play.
    pub fn open_cells(&self) -> Vec<Cell> {
        Cell::iter().filter(|c| self.board.is_empty(*c)).collect()
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current lifecycle status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player who moves next.
    pub fn current_turn(&self) -> Player {
        self.turn
    }

    /// The session score tally.
    pub fn score(&self) -> ScoreTally {
        self.score
    }

    /// Cells played this match, in order.
    pub fn history(&self) -> &[Cell] {
        &self.history
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
