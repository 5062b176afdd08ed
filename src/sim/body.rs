//! Entities that take part in the simulation
//!
//! Every object in play is a `Body`: the frog, the cars, the logs and the
//! turtles. Rectangles carry width/height and zero radius; circles carry a
//! radius and zero width/height.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// What a body is, which decides how it moves and how it is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    /// The frog
    Player,
    /// Car: lethal on contact
    Hazard,
    /// Log: safe to stand on in the river
    Platform,
    /// Turtle: safe to stand on unless submerged
    Support,
}

impl BodyKind {
    /// Prefix used to build stable element ids
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyKind::Player => "frog",
            BodyKind::Hazard => "car",
            BodyKind::Platform => "log",
            BodyKind::Support => "turtle",
        }
    }
}

/// A simulated entity (immutable value, replaced every tick)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Stable identifier, e.g. `car0`
    pub id: String,
    pub kind: BodyKind,
    /// Tick at which the body was created
    pub create_time: u64,
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    pub width: f32,
    pub height: f32,
    pub radius: f32,
    /// Unused by current rules
    #[serde(default)]
    pub score: u32,
}

impl Body {
    /// Rectangular body (cars, logs)
    pub fn rectangle(
        kind: BodyKind,
        index: usize,
        create_time: u64,
        pos: Vec2,
        size: Vec2,
        vel: Vec2,
    ) -> Self {
        Self {
            id: format!("{}{}", kind.as_str(), index),
            kind,
            create_time,
            pos,
            vel,
            acc: Vec2::ZERO,
            width: size.x,
            height: size.y,
            radius: 0.0,
            score: 0,
        }
    }

    /// Circular body (turtles)
    pub fn circle(
        kind: BodyKind,
        index: usize,
        create_time: u64,
        pos: Vec2,
        radius: f32,
        vel: Vec2,
    ) -> Self {
        Self {
            id: format!("{}{}", kind.as_str(), index),
            kind,
            create_time,
            pos,
            vel,
            acc: Vec2::ZERO,
            width: 0.0,
            height: 0.0,
            radius,
            score: 0,
        }
    }

    /// The frog, standing at the spawn point
    pub fn player() -> Self {
        Self {
            id: BodyKind::Player.as_str().to_string(),
            kind: BodyKind::Player,
            create_time: 0,
            pos: crate::spawn_point(),
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            radius: 0.0,
            score: 0,
        }
    }

    /// Copy of this body placed somewhere else
    pub fn with_pos(&self, pos: Vec2) -> Self {
        Self {
            pos,
            ..self.clone()
        }
    }

    /// True for turtles and other round bodies
    #[inline]
    pub fn is_circle(&self) -> bool {
        self.radius > 0.0 && self.width == 0.0 && self.height == 0.0
    }
}
