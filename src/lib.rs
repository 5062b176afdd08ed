//! Frogger - A river crossing arcade game
//!
//! Core modules:
//! - `sim`: Pure simulation (motion, collisions, scoring rules, game state)
//! - `input`: Key edge filtering and the fixed-cadence game clock
//! - `session`: Folds the event stream into the current state
//! - `view`: Presentation adapter contract and scene model
//! - `settings`: Presentation preferences
//! - `autopilot`: Seeded input generator for headless runs

pub mod autopilot;
pub mod input;
pub mod session;
pub mod settings;
pub mod sim;
pub mod view;

pub use session::Session;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield is a square canvas
    pub const CANVAS_SIZE: f32 = 600.0;

    /// Clock period between ticks (ms)
    pub const TICK_PERIOD_MS: u32 = 10;
    /// Maximum ticks emitted per clock advance to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Player defaults
    pub const SPAWN_X: f32 = 300.0;
    pub const SPAWN_Y: f32 = 570.0;
    pub const PLAYER_WIDTH: f32 = 20.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const START_LIVES: u32 = 3;

    /// Move step sizes (pixels per key press)
    pub const STEP_X: f32 = 40.0;
    pub const STEP_Y: f32 = 60.0;

    /// Hazards (cars)
    pub const HAZARD_COUNT: usize = 3;
    pub const HAZARD_WIDTH: f32 = 80.0;
    pub const HAZARD_HEIGHT: f32 = 40.0;

    /// Platforms (logs)
    pub const PLATFORM_COUNT: usize = 4;
    pub const PLATFORM_WIDTH: f32 = 200.0;
    pub const PLATFORM_HEIGHT: f32 = 40.0;

    /// Supports (turtles)
    pub const SUPPORT_COUNT: usize = 12;
    pub const SUPPORT_RADIUS: f32 = 25.0;
    /// Extra reach added to each radius in the support proximity test
    pub const SUPPORT_REACH: f32 = 10.0;

    /// River band (exclusive bounds)
    pub const RIVER_TOP: f32 = 50.0;
    pub const RIVER_BOTTOM: f32 = 300.0;
    /// Top band holding the scoring zones (inclusive bounds)
    pub const TOP_BAND_BOTTOM: f32 = 50.0;

    /// Submersion cycle (ticks)
    pub const SUBMERSION_PERIOD: u64 = 500;
    pub const SUBMERGED_UNTIL: u64 = 100;
    pub const WARNING_AFTER: u64 = 400;
}

/// Where the player (re)appears
#[inline]
pub fn spawn_point() -> Vec2 {
    Vec2::new(consts::SPAWN_X, consts::SPAWN_Y)
}
