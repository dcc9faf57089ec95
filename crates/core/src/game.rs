//! Game driver - owns the current state and applies actions in order
//!
//! A thin layer over [`reduce`]: it holds the state, the piece source and the
//! gravity clock, and turns elapsed frame time into `Tick` actions.

use crate::clock::GravityClock;
use crate::game_state::{reduce, Effects, GameState};
use crate::rng::PieceSource;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, GameStatus};

pub struct Game<S> {
    state: GameState,
    source: S,
    clock: GravityClock,
}

impl<S: PieceSource> Game<S> {
    /// Start a fresh running game
    pub fn new(mut source: S) -> Self {
        let state = GameState::new(&mut source);
        Self::from_state(state, source)
    }

    /// Resume from a prepared state
    pub fn from_state(state: GameState, source: S) -> Self {
        Self {
            clock: GravityClock::new(state.drop_interval_ms()),
            state,
            source,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.state.drop_interval_ms()
    }

    pub fn clock(&self) -> &GravityClock {
        &self.clock
    }

    /// Apply one action and keep the gravity clock in step with the result.
    pub fn apply_action(&mut self, action: GameAction) -> Effects {
        let before = self.state;
        let (next, effects) = reduce(before, action, &mut self.source);
        self.state = next;

        if before.status() != next.status() || action == GameAction::Restart {
            self.clock.reset();
        }
        self.clock.set_interval(next.drop_interval_ms());

        effects
    }

    /// Feed elapsed frame time; dispatches a gravity `Tick` when one is due.
    ///
    /// Paused and finished games never tick.
    pub fn advance(&mut self, elapsed_ms: u32) -> Option<Effects> {
        if self.state.status() != GameStatus::Running {
            self.clock.reset();
            return None;
        }
        if self.clock.advance(elapsed_ms) {
            Some(self.apply_action(GameAction::Tick))
        } else {
            None
        }
    }
}
