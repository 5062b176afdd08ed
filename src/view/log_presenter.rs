//! Headless presenter that reports through the `log` facade

use super::scene::{GameOverOverlay, Hud, RetainedScene, Scene};
use super::Presenter;
use crate::settings::Settings;
use crate::sim::{GameState, Submersion};

/// Keeps a retained scene in sync and logs what a player would see change
#[derive(Debug)]
pub struct LogPresenter {
    settings: Settings,
    surface: RetainedScene,
    overlay: GameOverOverlay,
    overlay_visible: bool,
    last_hud: Option<Hud>,
    last_submersion: Option<Submersion>,
    frames: u64,
    games_over: u32,
}

impl LogPresenter {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            surface: RetainedScene::new(),
            overlay: GameOverOverlay::new(),
            overlay_visible: false,
            last_hud: None,
            last_submersion: None,
            frames: 0,
            games_over: 0,
        }
    }

    pub fn surface(&self) -> &RetainedScene {
        &self.surface
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// States presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Game-over pulses seen so far
    pub fn games_over(&self) -> u32 {
        self.games_over
    }

    pub fn last_hud(&self) -> Option<Hud> {
        self.last_hud
    }
}

impl Presenter for LogPresenter {
    fn present(&mut self, state: &GameState) {
        self.frames += 1;
        let scene = Scene::from_state(state, &self.settings);

        for e in self.surface.apply(&scene) {
            log::debug!("{e}");
        }

        if self.last_submersion != Some(scene.submersion) {
            log::debug!("Turtles: {:?} (tick {})", scene.submersion, state.counter);
            self.last_submersion = Some(scene.submersion);
        }

        let interval = self.settings.hud_log_interval_ticks;
        let periodic = interval > 0 && state.counter > 0 && state.counter % interval == 0;
        if self.last_hud != Some(scene.hud) || periodic {
            let hud = scene.hud;
            log::info!(
                "Score {} | High {} | Lives {} | Level {} | Zones {:?}",
                hud.score,
                hud.high_score,
                hud.lives,
                hud.level,
                scene.zone_indicators
            );
            self.last_hud = Some(hud);
        }

        if scene.game_over {
            self.games_over += 1;
        }
        let visible = self
            .overlay
            .update(state, self.settings.game_over_overlay_ticks());
        if visible != self.overlay_visible {
            if visible {
                log::info!("=== GAME OVER ===");
            } else {
                log::debug!("Game over overlay hidden");
            }
            self.overlay_visible = visible;
        }
    }
}
