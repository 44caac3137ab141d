//! oxo-engine: a tic-tac-toe rules engine with a V-shape win-line
//! variant.
//!
//! The crate is the authoritative core of a game whose rendering,
//! input, and audio live elsewhere. It owns the board, the turn, the
//! win-line rule set, and the session score tally; everything
//! environment-specific reaches it through two small traits.
//!
//! # Architecture
//!
//! - **Engine**: move legality, win/tie detection, lifecycle
//!   (`AwaitingStart` → `InProgress` → `Won`/`Tie` → `InProgress`).
//! - **Session**: wires the engine to a [`Presenter`] (rendering/UI
//!   notifications) and a [`RestartScheduler`] (deferred, cancelable
//!   auto-restart).
//! - **Lines**: the eight canonical lines plus configurable extras,
//!   defaulting to four V-shapes through the center.
//!
//! # Example
//!
//! ```
//! use oxo_engine::{GameEngine, GameSession, NoopPresenter, NoopScheduler, Player};
//!
//! let engine = GameEngine::with_defaults();
//! let mut session = GameSession::new(engine, NoopPresenter, NoopScheduler);
//!
//! session.start();
//! let outcome = session.attempt_move(4).unwrap();
//! assert_eq!(outcome.player, Player::O); // O moves first by default
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod config;
mod engine;
mod error;
mod lines;
mod scheduler;
mod session;

pub use board::{Board, CellState, Player};
pub use cell::Cell;
pub use config::EngineConfig;
pub use engine::{GameEngine, GameStatus, MoveOutcome, ScoreTally, Terminal};
pub use error::MoveError;
pub use lines::{default_extra_lines, WinLine, FIXED_LINES};
pub use scheduler::{NoopScheduler, RestartScheduler, TokioRestartTimer};
pub use session::{GameSession, NoopPresenter, Presenter};
