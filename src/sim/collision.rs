//! Collision detection for the frog
//!
//! The frog is treated as a point at its position. Cars and logs are boxes
//! anchored at their top-left corner; turtles are circles with some extra
//! reach so a frog landing near the shell still counts as aboard.

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::state::GameState;
use super::zone::{Zone, in_restricted, in_river};
use crate::consts::SUPPORT_REACH;

/// Point-in-box test of `a`'s position against `b`'s rectangle (edges included)
#[inline]
pub fn rect_overlap(a: &Body, b: &Body) -> bool {
    a.pos.x <= b.pos.x + b.width
        && a.pos.x >= b.pos.x
        && a.pos.y <= b.pos.y + b.height
        && a.pos.y >= b.pos.y
}

/// Circular proximity test between `a` and `b`
#[inline]
pub fn circle_overlap(a: &Body, b: &Body) -> bool {
    (a.pos - b.pos).length() < a.radius + SUPPORT_REACH + b.radius + SUPPORT_REACH
}

/// Everything the rules need to know about the frog this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionReport {
    /// Frog touched a car
    pub hazard_hit: bool,
    /// Frog is in the river with nothing under it
    pub drowned: bool,
    /// Zone the frog is standing in, if any
    pub zone: Option<Zone>,
    /// Frog reached an empty zone
    pub scored: bool,
    /// Frog landed on the grass between zones
    pub restricted: bool,
    /// All four zones were already occupied
    pub all_zones_filled: bool,
}

impl CollisionReport {
    /// The frog goes back to the spawn point
    pub fn respawn(&self) -> bool {
        self.scored || self.life_lost()
    }

    /// The frog loses a life
    pub fn life_lost(&self) -> bool {
        self.hazard_hit || self.drowned || self.restricted
    }
}

/// Frog is standing on a log or a surfaced turtle (always true outside the river)
pub fn is_supported(state: &GameState) -> bool {
    let frog = &state.player;
    if !in_river(frog.pos) {
        return true;
    }

    let on_platform = state.platforms.iter().any(|p| rect_overlap(frog, p));
    let on_support = state.submersion().is_afloat()
        && state.supports.iter().any(|s| circle_overlap(frog, s));

    on_platform || on_support
}

/// Evaluate the frog against everything in play
pub fn detect(state: &GameState) -> CollisionReport {
    let frog = &state.player;
    let zone = Zone::at(frog.pos);

    CollisionReport {
        hazard_hit: state.hazards.iter().any(|h| rect_overlap(frog, h)),
        drowned: !is_supported(state),
        zone,
        scored: zone.is_some_and(|z| !state.zones.is_filled(z)),
        restricted: in_restricted(frog.pos),
        all_zones_filled: state.zones.all_filled(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::BodyKind;
    use crate::sim::state::ZoneCounters;
    use glam::Vec2;

    fn bare_state(frog: Vec2) -> GameState {
        let mut state = GameState::new().with_player_at(frog);
        state.hazards.clear();
        state.platforms.clear();
        state.supports.clear();
        state
    }

    fn car(x: f32, y: f32) -> Body {
        Body::rectangle(
            BodyKind::Hazard,
            0,
            0,
            Vec2::new(x, y),
            Vec2::new(80.0, 40.0),
            Vec2::ZERO,
        )
    }

    fn turtle(x: f32, y: f32) -> Body {
        Body::circle(BodyKind::Support, 0, 0, Vec2::new(x, y), 25.0, Vec2::ZERO)
    }

    #[test]
    fn test_rect_overlap_edges() {
        let b = car(100.0, 400.0);
        let at = |x, y| Body::player().with_pos(Vec2::new(x, y));
        assert!(rect_overlap(&at(100.0, 400.0), &b));
        assert!(rect_overlap(&at(180.0, 440.0), &b));
        assert!(!rect_overlap(&at(99.9, 420.0), &b));
        assert!(!rect_overlap(&at(140.0, 440.1), &b));
    }

    #[test]
    fn test_circle_overlap_reach() {
        let t = turtle(100.0, 200.0);
        // Frog radius 0: reach is 0 + 10 + 25 + 10 = 45
        let at = |x| Body::player().with_pos(Vec2::new(x, 200.0));
        assert!(circle_overlap(&at(144.0), &t));
        assert!(!circle_overlap(&at(145.0), &t));
    }

    #[test]
    fn test_hazard_hit() {
        let mut state = bare_state(Vec2::new(120.0, 420.0));
        state.hazards.push(car(100.0, 400.0));
        let report = detect(&state);
        assert!(report.hazard_hit);
        assert!(report.life_lost());
        assert!(report.respawn());
    }

    #[test]
    fn test_dry_land_is_supported() {
        let state = bare_state(Vec2::new(300.0, 570.0));
        assert!(is_supported(&state));
        assert!(!detect(&state).drowned);
    }

    #[test]
    fn test_river_without_support_drowns() {
        let state = bare_state(Vec2::new(230.0, 200.0));
        assert!(detect(&state).drowned);
    }

    #[test]
    fn test_log_supports() {
        let mut state = bare_state(Vec2::new(100.0, 260.0));
        state.platforms.push(Body::rectangle(
            BodyKind::Platform,
            0,
            0,
            Vec2::new(50.0, 250.0),
            Vec2::new(200.0, 40.0),
            Vec2::ZERO,
        ));
        assert!(is_supported(&state));
    }

    #[test]
    fn test_turtle_supports_only_when_afloat() {
        let mut state = bare_state(Vec2::new(100.0, 200.0));
        state.supports.push(turtle(110.0, 210.0));

        state.counter = 50;
        assert!(!is_supported(&state), "submerged turtles cannot be stood on");

        state.counter = 150;
        assert!(is_supported(&state));

        state.counter = 450;
        assert!(is_supported(&state), "warning band is still afloat");
    }

    #[test]
    fn test_scoring_requires_empty_zone() {
        let state = bare_state(Vec2::new(80.0, 30.0));
        let report = detect(&state);
        assert_eq!(report.zone, Some(Zone::One));
        assert!(report.scored);
        assert!(!report.restricted);

        let mut filled = state.clone();
        filled.zones = ZoneCounters([3, 0, 0, 0]);
        let report = detect(&filled);
        assert_eq!(report.zone, Some(Zone::One));
        assert!(!report.scored);
        assert!(!report.respawn());
    }

    #[test]
    fn test_restricted_grass() {
        let report = detect(&bare_state(Vec2::new(160.0, 30.0)));
        assert!(report.restricted);
        assert!(report.life_lost());
        assert_eq!(report.zone, None);
    }

    #[test]
    fn test_all_zones_filled_uses_counters() {
        let mut state = bare_state(Vec2::new(300.0, 570.0));
        state.zones = ZoneCounters([1, 1, 1, 0]);
        assert!(!detect(&state).all_zones_filled);
        state.zones = ZoneCounters([1, 5, 1, 2]);
        assert!(detect(&state).all_zones_filled);
    }
}
