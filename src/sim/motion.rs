//! Per-tick movement with screen wrapping
//!
//! Cars, turtles and the frog wrap around the playfield like a torus.
//! Logs are wide, so they leave the screen completely before reappearing on
//! the opposite edge.

use glam::Vec2;

use super::body::Body;
use crate::consts::CANVAS_SIZE;

/// Map one coordinate back into `[0, CANVAS_SIZE)`
fn wrap_axis(v: f32) -> f32 {
    let w = if v < 0.0 {
        v + CANVAS_SIZE
    } else if v >= CANVAS_SIZE {
        v - CANVAS_SIZE
    } else {
        v
    };
    // A tiny negative plus the canvas size can round up to the edge itself
    if w >= CANVAS_SIZE { 0.0 } else { w }
}

/// Wrap a position around the edges of the screen
pub fn torus_wrap(p: Vec2) -> Vec2 {
    Vec2::new(wrap_axis(p.x), wrap_axis(p.y))
}

/// Wrap a wide body's x into `[-width, CANVAS_SIZE)`, leaving y alone
pub fn platform_wrap(p: Vec2, width: f32) -> Vec2 {
    let x = if p.x < -width {
        p.x + CANVAS_SIZE + width
    } else if p.x >= CANVAS_SIZE {
        p.x - CANVAS_SIZE - width
    } else {
        p.x
    };
    let x = if x >= CANVAS_SIZE { -width } else { x };
    Vec2::new(x, p.y)
}

/// Default movement: integrate velocity, torus wrap
pub fn move_default(body: &Body) -> Body {
    Body {
        pos: torus_wrap(body.pos + body.vel),
        vel: body.vel + body.acc,
        ..body.clone()
    }
}

/// Log movement: integrate velocity, wrap x using the body's width
pub fn move_platform(body: &Body) -> Body {
    Body {
        pos: platform_wrap(body.pos + body.vel, body.width),
        vel: body.vel + body.acc,
        ..body.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{PLATFORM_HEIGHT, PLATFORM_WIDTH};
    use crate::sim::body::BodyKind;
    use proptest::prelude::*;

    fn log_at(x: f32, vx: f32) -> Body {
        Body::rectangle(
            BodyKind::Platform,
            0,
            0,
            Vec2::new(x, 250.0),
            Vec2::new(PLATFORM_WIDTH, PLATFORM_HEIGHT),
            Vec2::new(vx, 0.0),
        )
    }

    #[test]
    fn test_torus_wrap_edges() {
        assert_eq!(torus_wrap(Vec2::new(-1.0, 601.0)), Vec2::new(599.0, 1.0));
        assert_eq!(torus_wrap(Vec2::new(600.0, 0.0)), Vec2::new(0.0, 0.0));
        assert_eq!(torus_wrap(Vec2::new(300.0, 570.0)), Vec2::new(300.0, 570.0));
    }

    #[test]
    fn test_move_default_applies_acceleration_after_position() {
        let mut body = log_at(10.0, 1.0);
        body.acc = Vec2::new(0.5, 0.0);
        let moved = move_default(&body);
        assert_eq!(moved.pos, Vec2::new(11.0, 250.0));
        assert_eq!(moved.vel, Vec2::new(1.5, 0.0));
        assert_eq!(moved.id, body.id);
    }

    #[test]
    fn test_platform_reappears_at_minus_width() {
        let moved = move_platform(&log_at(599.5, 1.0));
        assert!((moved.pos.x - (-PLATFORM_WIDTH + 0.5)).abs() < 1e-3);
        assert_eq!(moved.pos.y, 250.0);
    }

    #[test]
    fn test_platform_stays_visible_until_fully_off_left() {
        // Partially off screen on the left: no wrap yet
        let moved = move_platform(&log_at(-150.0, -1.0));
        assert_eq!(moved.pos.x, -151.0);

        // Past -width: wraps to the right edge
        let moved = move_platform(&log_at(-199.5, -1.0));
        assert!((moved.pos.x - 599.5).abs() < 1e-3);
    }

    #[test]
    fn test_platform_eventually_wraps() {
        let mut log = log_at(0.0, 1.0);
        let mut wrapped = false;
        for _ in 0..700 {
            let next = move_platform(&log);
            if next.pos.x < log.pos.x {
                wrapped = true;
                assert!(next.pos.x >= -PLATFORM_WIDTH && next.pos.x < -PLATFORM_WIDTH + 1.0);
            }
            log = next;
        }
        assert!(wrapped);
    }

    proptest! {
        #[test]
        fn prop_move_default_stays_on_canvas(
            x in 0.0f32..CANVAS_SIZE,
            y in 0.0f32..CANVAS_SIZE,
            vx in -599.0f32..599.0,
            vy in -599.0f32..599.0,
        ) {
            let mut body = Body::player();
            body.pos = Vec2::new(x, y);
            body.vel = Vec2::new(vx, vy);
            let moved = move_default(&body);
            prop_assert!(moved.pos.x >= 0.0 && moved.pos.x < CANVAS_SIZE);
            prop_assert!(moved.pos.y >= 0.0 && moved.pos.y < CANVAS_SIZE);
        }

        #[test]
        fn prop_platform_x_in_range(
            x in -PLATFORM_WIDTH..CANVAS_SIZE,
            vx in -5.0f32..5.0,
        ) {
            let moved = move_platform(&log_at(x, vx));
            prop_assert!(moved.pos.x >= -PLATFORM_WIDTH && moved.pos.x < CANVAS_SIZE);
            prop_assert_eq!(moved.pos.y, 250.0);
        }
    }
}
