//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One event in, one new state out
//! - No in-place mutation of a published state
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod motion;
pub mod rules;
pub mod state;
pub mod tick;
pub mod zone;

pub use body::{Body, BodyKind};
pub use collision::{CollisionReport, circle_overlap, detect, is_supported, rect_overlap};
pub use motion::{move_default, move_platform, platform_wrap, torus_wrap};
pub use rules::apply_rules;
pub use state::{Direction, GameEvent, GameState, Submersion, ZoneCounters};
pub use tick::{advance_bodies, apply_move, step, tick};
pub use zone::{Zone, in_restricted, in_river, in_top_band};
