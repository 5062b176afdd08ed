//! Game session: the single owner of the current state
//!
//! Clock ticks and key presses are merged into one ordered stream and folded
//! through `sim::step`. Every new state is handed to the presenter before the
//! next event is processed.

use crate::input::{FixedClock, KeyFilter};
use crate::sim::{GameEvent, GameState, step};
use crate::view::Presenter;

/// Game instance holding the current state and its input sources
#[derive(Debug, Default)]
pub struct Session {
    state: GameState,
    clock: FixedClock,
    keys: KeyFilter,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Fold one event and present the result
    pub fn handle<P: Presenter + ?Sized>(&mut self, event: GameEvent, presenter: &mut P) {
        self.state = step(&self.state, event);
        presenter.present(&self.state);
    }

    /// Fold a whole stream of events in order
    pub fn run<I, P>(&mut self, events: I, presenter: &mut P)
    where
        I: IntoIterator<Item = GameEvent>,
        P: Presenter + ?Sized,
    {
        for event in events {
            self.handle(event, presenter);
        }
    }

    /// Raw key-down from the platform. Returns true if it became a move.
    pub fn key_down<P: Presenter + ?Sized>(
        &mut self,
        code: &str,
        repeat: bool,
        presenter: &mut P,
    ) -> bool {
        match self.keys.key_down(code, repeat) {
            Some(event) => {
                self.handle(event, presenter);
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, code: &str) {
        self.keys.key_up(code);
    }

    /// Window lost focus: key-ups may never arrive
    pub fn blur(&mut self) {
        self.keys.release_all();
    }

    /// Let wall-clock time pass; returns the number of ticks simulated
    pub fn advance<P: Presenter + ?Sized>(&mut self, dt_ms: f64, presenter: &mut P) -> usize {
        let ticks = self.clock.advance(dt_ms);
        let count = ticks.len();
        self.run(ticks, presenter);
        count
    }
}
