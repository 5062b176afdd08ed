//! Game state and core simulation types
//!
//! `GameState` is a snapshot. Nothing mutates it in place: every event
//! produces a new value from the previous one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, BodyKind};
use super::zone::Zone;
use crate::consts::*;

/// Direction of a single hop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
    ];

    /// Displacement applied to the player for one hop
    pub fn offset(self) -> Vec2 {
        match self {
            Direction::Forward => Vec2::new(0.0, -STEP_Y),
            Direction::Backward => Vec2::new(0.0, STEP_Y),
            Direction::Left => Vec2::new(-STEP_X, 0.0),
            Direction::Right => Vec2::new(STEP_X, 0.0),
        }
    }
}

/// An input to the transition function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Clock tick carrying the elapsed tick count
    Tick(u64),
    /// One hop of the frog
    Move(Direction),
}

/// Where the turtles are in their dive cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Submersion {
    /// Under water: cannot be stood on, not drawn
    Submerged,
    /// Afloat and safe
    Surfaced,
    /// Afloat, about to dive
    Warning,
}

impl Submersion {
    /// Band for a tick counter value
    pub fn for_counter(counter: u64) -> Self {
        let phase = counter % SUBMERSION_PERIOD;
        if phase < SUBMERGED_UNTIL {
            Submersion::Submerged
        } else if phase > WARNING_AFTER {
            Submersion::Warning
        } else {
            Submersion::Surfaced
        }
    }

    /// Whether supports can be stood on
    #[inline]
    pub fn is_afloat(self) -> bool {
        self != Submersion::Submerged
    }
}

/// Fill counters for the four scoring zones (0 = empty)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneCounters(pub [u32; 4]);

impl ZoneCounters {
    #[inline]
    pub fn get(&self, zone: Zone) -> u32 {
        self.0[zone.index()]
    }

    #[inline]
    pub fn is_filled(&self, zone: Zone) -> bool {
        self.get(zone) > 0
    }

    /// Every zone is occupied
    pub fn all_filled(&self) -> bool {
        self.0.iter().all(|&c| c > 0)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Elapsed value of the last clock tick
    pub time: u64,
    /// The frog
    pub player: Body,
    /// Cars
    pub hazards: Vec<Body>,
    /// Logs
    pub platforms: Vec<Body>,
    /// Turtles
    pub supports: Vec<Body>,
    /// Always empty for now
    #[serde(default)]
    pub projectiles: Vec<Body>,
    /// True for exactly one tick when the last life is gone
    pub game_over: bool,
    pub score: u32,
    pub high_score: u32,
    /// Scoring zone fill counters
    pub zones: ZoneCounters,
    /// Tick counter (drives the submersion cycle)
    pub counter: u64,
    pub lives: u32,
    pub level: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game with the fixed starting layout
    pub fn new() -> Self {
        Self {
            time: 0,
            player: Body::player(),
            hazards: initial_hazards(),
            platforms: initial_platforms(),
            supports: initial_supports(),
            projectiles: Vec::new(),
            game_over: false,
            score: 0,
            high_score: 0,
            zones: ZoneCounters::default(),
            counter: 0,
            lives: START_LIVES,
            level: 1,
        }
    }

    /// Current band of the turtle dive cycle
    pub fn submersion(&self) -> Submersion {
        Submersion::for_counter(self.counter)
    }

    /// Copy with the player placed somewhere else
    pub fn with_player_at(&self, pos: Vec2) -> Self {
        Self {
            player: self.player.with_pos(pos),
            ..self.clone()
        }
    }
}

fn initial_hazards() -> Vec<Body> {
    const POSITIONS: [(f32, f32); HAZARD_COUNT] = [(0.0, 490.0), (200.0, 430.0), (400.0, 370.0)];

    POSITIONS
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            // Alternate lanes drive in opposite directions
            let vel = if i % 2 == 0 {
                Vec2::new(0.8, 0.0)
            } else {
                Vec2::new(-1.0, 0.0)
            };
            Body::rectangle(
                BodyKind::Hazard,
                i,
                0,
                Vec2::new(x, y),
                Vec2::new(HAZARD_WIDTH, HAZARD_HEIGHT),
                vel,
            )
        })
        .collect()
}

fn initial_platforms() -> Vec<Body> {
    const POSITIONS: [(f32, f32); PLATFORM_COUNT] =
        [(0.0, 250.0), (50.0, 130.0), (400.0, 250.0), (450.0, 130.0)];

    POSITIONS
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            let vel = if i % 2 == 0 {
                Vec2::new(1.0, 0.0)
            } else {
                Vec2::new(0.8, 0.0)
            };
            Body::rectangle(
                BodyKind::Platform,
                i,
                0,
                Vec2::new(x, y),
                Vec2::new(PLATFORM_WIDTH, PLATFORM_HEIGHT),
                vel,
            )
        })
        .collect()
}

fn initial_supports() -> Vec<Body> {
    const XS: [f32; SUPPORT_COUNT] = [
        0.0, 20.0, 60.0, 80.0, 120.0, 140.0, 300.0, 320.0, 360.0, 380.0, 420.0, 440.0,
    ];

    XS.iter()
        .enumerate()
        .map(|(i, &x)| {
            // Pairs of turtles straddle two rows
            let (y, vel) = if i % 2 == 0 {
                (90.0, Vec2::new(-1.0, 0.0))
            } else {
                (210.0, Vec2::new(-0.8, 0.0))
            };
            Body::circle(
                BodyKind::Support,
                i,
                0,
                Vec2::new(x, y),
                SUPPORT_RADIUS,
                vel,
            )
        })
        .collect()
}
