//! Game rules applied once per tick
//!
//! Turns a `CollisionReport` into the next state:
//! 1. Game over when the previous tick left the frog without lives
//! 2. Frog dies on cars, in open water and on the grass between zones
//! 3. Frog scores by reaching an empty zone, then respawns
//! 4. Filling all four zones raises the level and empties them again
//! 5. Lives refill on game over; the run carries on

use super::collision::{CollisionReport, detect};
use super::state::{GameState, ZoneCounters};
use super::zone::Zone;
use crate::consts::START_LIVES;
use crate::spawn_point;

/// Next value of one zone counter
fn next_zone_count(
    zone: Zone,
    prev: &ZoneCounters,
    report: &CollisionReport,
    game_over: bool,
) -> u32 {
    // A restricted landing clears zones two to four only; zone one keeps its count.
    let cleared_by_restricted = report.restricted && zone != Zone::One;

    if report.all_zones_filled || game_over || cleared_by_restricted {
        0
    } else if report.zone == Some(zone) {
        prev.get(zone).saturating_add(1)
    } else {
        prev.get(zone)
    }
}

/// Apply collisions, scoring and life bookkeeping to a moved state
pub fn apply_rules(state: &GameState) -> GameState {
    let report = detect(state);
    let game_over = state.lives == 0;

    let player = if report.respawn() {
        state.player.with_pos(spawn_point())
    } else {
        state.player.clone()
    };

    let zones = ZoneCounters(
        Zone::ALL.map(|zone| next_zone_count(zone, &state.zones, &report, game_over)),
    );

    let score = if game_over {
        0
    } else if report.scored {
        state.score + 1
    } else {
        state.score
    };

    let lives = if game_over {
        START_LIVES
    } else if report.life_lost() {
        state.lives.saturating_sub(1)
    } else {
        state.lives
    };

    let level = if report.all_zones_filled {
        state.level + 1
    } else {
        state.level
    };

    if game_over {
        log::info!("Game over (score {}, level {})", state.score, state.level);
    }
    if report.all_zones_filled {
        log::info!("All zones filled, level {} -> {}", state.level, level);
    }
    if report.life_lost() {
        log::debug!(
            "Life lost (hazard={}, drowned={}, restricted={}), {} left",
            report.hazard_hit,
            report.drowned,
            report.restricted,
            lives
        );
    }

    GameState {
        player,
        game_over,
        zones,
        score,
        high_score: state.high_score.max(score),
        counter: state.counter + 1,
        lives,
        level,
        ..state.clone()
    }
}
