//! Session layer: one engine, one presenter, one scheduler.
//!
//! The session is the boundary the hosting environment talks to. It
//! forwards validated input to the engine, fans engine outcomes out to
//! the presenter, and holds the auto-restart contract: a terminal
//! result schedules a timer, any start or reset cancels it.

use crate::board::Player;
use crate::cell::Cell;
use crate::engine::{GameEngine, MoveOutcome, ScoreTally, Terminal};
use crate::error::MoveError;
use crate::scheduler::RestartScheduler;
use tracing::{info, instrument, warn};

/// Notifications consumed by the presentation layer.
///
/// Every method has a no-op default so hosts implement only what they
/// render.
pub trait Presenter {
    /// An explicit start happened (enable audio, hide the start
    /// control).
    fn game_started(&mut self) {}
    /// The board was cleared; remove rendered marks and reset labels.
    fn board_cleared(&mut self) {}
    /// A mark was placed; render it.
    fn mark_placed(&mut self, player: Player, cell: Cell) {
        let _ = (player, cell);
    }
    /// The match ended; display the winner (and line) or the tie.
    fn match_ended(&mut self, terminal: &Terminal) {
        let _ = terminal;
    }
    /// The score tally changed after a win.
    fn score_updated(&mut self, score: &ScoreTally) {
        let _ = score;
    }
}

/// Presenter that renders nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPresenter;

impl Presenter for NoopPresenter {}

/// A running game session.
#[derive(Debug)]
pub struct GameSession<P, S> {
    engine: GameEngine,
    presenter: P,
    scheduler: S,
}

impl<P: Presenter, S: RestartScheduler> GameSession<P, S> {
    /// Creates a session around an engine and its collaborators.
    pub fn new(engine: GameEngine, presenter: P, scheduler: S) -> Self {
        Self {
            engine,
            presenter,
            scheduler,
        }
    }

    /// Starts a fresh match, canceling any pending auto-restart.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        self.scheduler.cancel();
        self.engine.start();
        self.presenter.board_cleared();
        self.presenter.game_started();
    }

    /// Resets to a fresh match, canceling any pending auto-restart.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.scheduler.cancel();
        self.engine.reset();
        self.presenter.board_cleared();
    }

    /// Entry point for the scheduler's timer: same effect as a reset.
    /// The cancel inside is a no-op when the timer just fired, but it
    /// keeps the single-pending-timer invariant unconditional.
    #[instrument(skip(self))]
    pub fn auto_restart(&mut self) {
        info!("auto-restart fired");
        self.reset();
    }

    /// Forwards a move from the input adapter and dispatches the
    /// resulting notifications. Rejections are logged and returned, not
    /// escalated.
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, cell_index: i32) -> Result<MoveOutcome, MoveError> {
        let outcome = self.engine.attempt_move(cell_index).map_err(|e| {
            warn!(cell_index, error = %e, "move rejected");
            e
        })?;

        self.presenter.mark_placed(outcome.player, outcome.cell);
        if let Some(terminal) = &outcome.terminal {
            self.presenter.match_ended(terminal);
            if matches!(terminal, Terminal::Won { .. }) {
                self.presenter.score_updated(&self.engine.score());
            }
            self.scheduler.schedule(self.engine.config().restart_delay);
        }
        Ok(outcome)
    }

    /// The engine, for read access to board, status, and score.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The presenter, mainly for test inspection.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}
