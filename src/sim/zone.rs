//! Playfield regions
//!
//! The four scoring zones sit in the top band, separated by restricted grass.
//! Below the top band is the river, where the player needs something to stand on.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// One of the four scoring zones, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    One,
    Two,
    Three,
    Four,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::One, Zone::Two, Zone::Three, Zone::Four];

    /// Slot in the zone counter array
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Zone::One => 0,
            Zone::Two => 1,
            Zone::Three => 2,
            Zone::Four => 3,
        }
    }

    /// Inclusive `(x_min, x_max, y_min, y_max)` bounds
    pub fn bounds(self) -> (f32, f32, f32, f32) {
        match self {
            Zone::One => (50.0, 110.0, 20.0, 40.0),
            Zone::Two => (210.0, 270.0, 20.0, 40.0),
            Zone::Three => (370.0, 430.0, 20.0, 40.0),
            Zone::Four => (530.0, 590.0, 20.0, 40.0),
        }
    }

    /// Check if a point lies inside this zone (edges included)
    pub fn contains(self, p: Vec2) -> bool {
        let (x_min, x_max, y_min, y_max) = self.bounds();
        p.x >= x_min && p.x <= x_max && p.y >= y_min && p.y <= y_max
    }

    /// The zone containing a point, if any
    pub fn at(p: Vec2) -> Option<Zone> {
        Zone::ALL.into_iter().find(|z| z.contains(p))
    }
}

/// Inside the river, where the player drowns unless supported
#[inline]
pub fn in_river(p: Vec2) -> bool {
    p.y > RIVER_TOP && p.y < RIVER_BOTTOM
}

/// Inside the top band (zones plus the grass between them)
#[inline]
pub fn in_top_band(p: Vec2) -> bool {
    p.y >= 0.0 && p.y <= TOP_BAND_BOTTOM
}

/// On the grass between zones
pub fn in_restricted(p: Vec2) -> bool {
    in_top_band(p) && Zone::at(p).is_none()
}
