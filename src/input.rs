//! Input source
//!
//! Raw keyboard events become `Move` events only on the key-down edge, so a
//! held key or OS auto-repeat never produces more than one hop. The clock
//! turns wall time into `Tick` events at a fixed cadence.

use std::collections::HashSet;

use crate::consts::{MAX_SUBSTEPS, TICK_PERIOD_MS};
use crate::sim::{Direction, GameEvent};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.code`; anything else is ignored
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            _ => None,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Key::ArrowLeft => Direction::Left,
            Key::ArrowRight => Direction::Right,
            Key::ArrowUp => Direction::Forward,
            Key::ArrowDown => Direction::Backward,
        }
    }
}

/// Debounces key events into one `Move` per physical press
#[derive(Debug, Default)]
pub struct KeyFilter {
    held: HashSet<Key>,
}

impl KeyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key went down. `repeat` is the platform's auto-repeat flag.
    pub fn key_down(&mut self, code: &str, repeat: bool) -> Option<GameEvent> {
        let key = Key::from_code(code)?;
        if repeat || !self.held.insert(key) {
            return None;
        }
        Some(GameEvent::Move(key.direction()))
    }

    /// Key released
    pub fn key_up(&mut self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            self.held.remove(&key);
        }
    }

    /// Forget held keys (e.g. on focus loss, when key-up events are missed)
    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

/// Fixed-cadence clock producing `Tick` events
#[derive(Debug, Default)]
pub struct FixedClock {
    accumulator_ms: f64,
    elapsed: u64,
}

impl FixedClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ticks emitted so far
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    /// Feed wall-clock time and collect the ticks that became due
    pub fn advance(&mut self, dt_ms: f64) -> Vec<GameEvent> {
        let period = f64::from(TICK_PERIOD_MS);
        // Clamp huge gaps (tab switch, debugger) instead of replaying them
        self.accumulator_ms += dt_ms.clamp(0.0, 100.0);

        let mut ticks = Vec::new();
        let mut substeps = 0;
        while self.accumulator_ms >= period && substeps < MAX_SUBSTEPS {
            ticks.push(GameEvent::Tick(self.elapsed));
            self.elapsed += 1;
            self.accumulator_ms -= period;
            substeps += 1;
        }

        // Whatever is left over after hitting the cap is dropped
        if substeps == MAX_SUBSTEPS {
            self.accumulator_ms = self.accumulator_ms.min(period);
        }

        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_codes_filtered() {
        let mut keys = KeyFilter::new();
        assert_eq!(keys.key_down("Space", false), None);
        assert_eq!(keys.key_down("KeyW", false), None);
    }

    #[test]
    fn test_one_move_per_press() {
        let mut keys = KeyFilter::new();
        assert_eq!(
            keys.key_down("ArrowUp", false),
            Some(GameEvent::Move(Direction::Forward))
        );
        // Auto-repeat and duplicate key-downs while held are ignored
        assert_eq!(keys.key_down("ArrowUp", true), None);
        assert_eq!(keys.key_down("ArrowUp", false), None);

        keys.key_up("ArrowUp");
        assert_eq!(
            keys.key_down("ArrowUp", false),
            Some(GameEvent::Move(Direction::Forward))
        );
    }

    #[test]
    fn test_keys_are_independent() {
        let mut keys = KeyFilter::new();
        assert!(keys.key_down("ArrowLeft", false).is_some());
        assert_eq!(
            keys.key_down("ArrowRight", false),
            Some(GameEvent::Move(Direction::Right))
        );
        assert_eq!(
            keys.key_down("ArrowDown", false),
            Some(GameEvent::Move(Direction::Backward))
        );
        keys.release_all();
        assert!(keys.key_down("ArrowLeft", false).is_some());
    }

    #[test]
    fn test_clock_emits_consecutive_ticks() {
        let mut clock = FixedClock::new();
        assert!(clock.advance(4.0).is_empty());
        assert_eq!(clock.advance(16.0), vec![GameEvent::Tick(0), GameEvent::Tick(1)]);
        // 0 ms left over
        assert_eq!(clock.advance(10.0), vec![GameEvent::Tick(2)]);
        assert_eq!(clock.elapsed(), 3);
    }

    #[test]
    fn test_clock_caps_substeps() {
        let mut clock = FixedClock::new();
        let ticks = clock.advance(1_000.0);
        assert_eq!(ticks.len(), MAX_SUBSTEPS as usize);
        assert_eq!(ticks.last(), Some(&GameEvent::Tick(u64::from(MAX_SUBSTEPS) - 1)));
        // Backlog is not replayed
        assert!(clock.advance(0.0).len() <= 1);
    }
}
