//! State transitions
//!
//! `step` folds one event into the state: a move hops the frog, a tick
//! advances every body and then applies the game rules.

use super::motion::{move_default, move_platform};
use super::rules::apply_rules;
use super::state::{Direction, GameEvent, GameState};

/// Hop the frog one step. No bounds or collision checks happen here;
/// the next tick sorts out where the frog landed.
pub fn apply_move(state: &GameState, direction: Direction) -> GameState {
    state.with_player_at(state.player.pos + direction.offset())
}

/// Move every body one tick along, wrapping at the edges, without
/// applying any rules
pub fn advance_bodies(state: &GameState, elapsed: u64) -> GameState {
    GameState {
        time: elapsed,
        player: move_default(&state.player),
        hazards: state.hazards.iter().map(move_default).collect(),
        platforms: state.platforms.iter().map(move_platform).collect(),
        supports: state.supports.iter().map(move_default).collect(),
        projectiles: state.projectiles.iter().map(move_default).collect(),
        ..state.clone()
    }
}

/// Advance one clock tick
pub fn tick(state: &GameState, elapsed: u64) -> GameState {
    apply_rules(&advance_bodies(state, elapsed))
}

/// The state transducer: previous state plus one event gives the next state
pub fn step(state: &GameState, event: GameEvent) -> GameState {
    match event {
        GameEvent::Move(direction) => apply_move(state, direction),
        GameEvent::Tick(elapsed) => tick(state, elapsed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ZoneCounters;
    use crate::spawn_point;
    use glam::Vec2;

    #[test]
    fn test_moves() {
        let state = GameState::new();
        let cases = [
            (Direction::Forward, Vec2::new(300.0, 510.0)),
            (Direction::Backward, Vec2::new(300.0, 630.0)),
            (Direction::Left, Vec2::new(260.0, 570.0)),
            (Direction::Right, Vec2::new(340.0, 570.0)),
        ];
        for (direction, expected) in cases {
            let next = step(&state, GameEvent::Move(direction));
            assert_eq!(next.player.pos, expected, "{direction:?}");
            // Moves never advance the clock or touch anything else
            assert_eq!(next.counter, state.counter);
            assert_eq!(next.hazards, state.hazards);
        }
    }

    #[test]
    fn test_forward_then_quiet_tick() {
        let state = GameState::new();
        let hopped = step(&state, GameEvent::Move(Direction::Forward));
        assert_eq!(hopped.player.pos, Vec2::new(300.0, 510.0));

        let next = step(&hopped, GameEvent::Tick(10));
        assert_eq!(next.player.pos, Vec2::new(300.0, 510.0));
        assert_eq!(next.counter, hopped.counter + 1);
        assert_eq!(next.time, 10);
        assert_eq!(next.lives, 3);
    }

    #[test]
    fn test_tick_moves_bodies() {
        let state = GameState::new();
        let next = tick(&state, 1);
        assert_eq!(next.hazards[0].pos, Vec2::new(0.8, 490.0));
        // Odd lanes drive left
        assert_eq!(next.hazards[1].pos, Vec2::new(199.0, 430.0));
        assert_eq!(next.platforms[0].pos, Vec2::new(1.0, 250.0));
        // Turtle 0 starts at x=0 moving left: torus wrap to the right edge
        assert_eq!(next.supports[0].pos, Vec2::new(599.0, 90.0));
    }

    #[test]
    fn test_advance_bodies_wraps_without_rules() {
        let state = GameState::new().with_player_at(Vec2::new(300.0, 630.0));
        let moved = advance_bodies(&state, 1);
        assert_eq!(moved.player.pos, Vec2::new(300.0, 30.0));
        assert_eq!(moved.counter, state.counter);
        assert_eq!(moved.lives, state.lives);
        assert_eq!(moved.hazards[0].pos, Vec2::new(0.8, 490.0));
    }

    #[test]
    fn test_backward_off_screen_wraps_on_tick() {
        // Hopping down off the bottom edge wraps to the top, right into zone two
        let state = GameState::new().with_player_at(Vec2::new(240.0, 570.0));
        let hopped = step(&state, GameEvent::Move(Direction::Backward));
        assert_eq!(hopped.player.pos, Vec2::new(240.0, 630.0));

        let next = step(&hopped, GameEvent::Tick(1));
        assert_eq!(next.zones, ZoneCounters([0, 1, 0, 0]));
        assert_eq!(next.score, 1);
        assert_eq!(next.player.pos, spawn_point());
    }

    #[test]
    fn test_zone_one_scenario() {
        let mut state = GameState::new().with_player_at(Vec2::new(80.0, 30.0));
        state.hazards.clear();
        let next = step(&state, GameEvent::Tick(1));
        assert_eq!(next.zones, ZoneCounters([1, 0, 0, 0]));
        assert_eq!(next.score, 1);
        assert_eq!(next.player.pos, spawn_point());
    }

    #[test]
    fn test_river_scenario_into_game_over() {
        let drop_in_river = |s: &GameState| s.with_player_at(Vec2::new(230.0, 200.0));

        let mut state = GameState::new();
        for expected_lives in [2, 1, 0] {
            state = step(&drop_in_river(&state), GameEvent::Tick(state.time + 1));
            assert_eq!(state.lives, expected_lives);
            assert_eq!(state.player.pos, spawn_point());
            assert!(!state.game_over);
        }

        state = step(&state, GameEvent::Tick(state.time + 1));
        assert!(state.game_over);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);

        state = step(&state, GameEvent::Tick(state.time + 1));
        assert!(!state.game_over);
    }

    #[test]
    fn test_step_is_pure() {
        let state = GameState::new();
        let a = step(&state, GameEvent::Tick(1));
        let b = step(&state, GameEvent::Tick(1));
        assert_eq!(a, b);
        assert_eq!(state, GameState::new());
    }
}
