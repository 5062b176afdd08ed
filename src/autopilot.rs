//! Demo autopilot
//!
//! Plays the game for headless runs. Hops every so often, never onto a spot
//! that would be fatal on the next tick, and grabs an empty zone whenever one
//! is a single hop away. Seeded, so a run is reproducible.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{
    CollisionReport, Direction, GameEvent, GameState, advance_bodies, apply_move, detect,
};

/// Ticks to wait between hops
const MIN_WAIT_TICKS: u32 = 15;
const MAX_WAIT_TICKS: u32 = 60;
/// Chance of hopping forward when it is safe
const FORWARD_BIAS: f64 = 0.7;

/// What the next tick would make of a hop: the frog and everything around
/// it move (and wrap) first, then collisions are checked
fn hop_outcome(state: &GameState, direction: Direction) -> CollisionReport {
    detect(&advance_bodies(&apply_move(state, direction), state.time))
}

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    cooldown: u32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            cooldown: 0,
        }
    }

    /// Called once per tick; returns a hop when it is time for one
    pub fn decide(&mut self, state: &GameState) -> Option<GameEvent> {
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return None;
        }
        self.cooldown = self.rng.random_range(MIN_WAIT_TICKS..=MAX_WAIT_TICKS);

        let outcomes: Vec<(Direction, bool, bool)> = Direction::ALL
            .into_iter()
            .map(|d| {
                let report = hop_outcome(state, d);
                (d, report.life_lost(), report.scored)
            })
            .collect();

        if let Some(&(d, _, _)) = outcomes.iter().find(|(_, lost, scored)| *scored && !*lost) {
            return Some(GameEvent::Move(d));
        }

        let safe: Vec<Direction> = outcomes
            .iter()
            .filter(|(_, lost, _)| !*lost)
            .map(|&(d, _, _)| d)
            .collect();

        if safe.contains(&Direction::Forward) && self.rng.random_bool(FORWARD_BIAS) {
            return Some(GameEvent::Move(Direction::Forward));
        }

        // Nowhere safe to go: sit tight
        safe.choose(&mut self.rng).map(|&d| GameEvent::Move(d))
    }
}
