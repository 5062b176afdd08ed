//! What to draw for a given state
//!
//! `Scene` is derived from a `GameState` plus presentation settings.
//! `RetainedScene` mirrors a retained-mode surface (like the DOM) so
//! presenters that keep elements around can be exercised without one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ViewError;
use crate::settings::Settings;
use crate::sim::{Body, BodyKind, GameState, Submersion, Zone};

/// Geometry of a sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Anchored at the top-left corner
    Rect { width: f32, height: f32 },
    /// Anchored at the center
    Circle { radius: f32 },
}

/// A drawable body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub id: String,
    pub kind: BodyKind,
    pub pos: Vec2,
    pub shape: Shape,
    pub fill: String,
}

impl Sprite {
    fn from_body(body: &Body, fill: &str) -> Self {
        let shape = if body.is_circle() {
            Shape::Circle {
                radius: body.radius,
            }
        } else {
            Shape::Rect {
                width: body.width,
                height: body.height,
            }
        };
        Self {
            id: body.id.clone(),
            kind: body.kind,
            pos: body.pos,
            shape,
            fill: fill.to_string(),
        }
    }
}

/// Text readouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u32,
    pub high_score: u32,
    pub lives: u32,
    pub level: u32,
}

/// Everything a presenter shows for one state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub hud: Hud,
    /// Frog icon shown in each occupied zone
    pub zone_indicators: [bool; 4],
    /// Back to front: logs, cars, turtles, frog
    pub sprites: Vec<Sprite>,
    /// Elements that must not be on screen (submerged turtles)
    pub hidden: Vec<String>,
    pub submersion: Submersion,
    /// This state is the game-over pulse
    pub game_over: bool,
}

impl Scene {
    pub fn from_state(state: &GameState, settings: &Settings) -> Self {
        let palette = &settings.palette;
        let submersion = state.submersion();

        let support_fill = match submersion {
            Submersion::Warning => &palette.support_warning,
            _ => &palette.support,
        };

        let mut sprites: Vec<Sprite> = Vec::with_capacity(
            state.platforms.len() + state.hazards.len() + state.supports.len() + 1,
        );
        sprites.extend(
            state
                .platforms
                .iter()
                .map(|b| Sprite::from_body(b, &palette.platform)),
        );
        sprites.extend(
            state
                .hazards
                .iter()
                .map(|b| Sprite::from_body(b, &palette.hazard)),
        );

        let hidden = if submersion.is_afloat() {
            sprites.extend(
                state
                    .supports
                    .iter()
                    .map(|b| Sprite::from_body(b, support_fill)),
            );
            Vec::new()
        } else {
            state.supports.iter().map(|b| b.id.clone()).collect()
        };

        sprites.push(Sprite::from_body(&state.player, &palette.player));

        Self {
            hud: Hud {
                score: state.score,
                high_score: state.high_score,
                lives: state.lives,
                level: state.level,
            },
            zone_indicators: Zone::ALL.map(|z| state.zones.is_filled(z)),
            sprites,
            hidden,
            submersion,
            game_over: state.game_over,
        }
    }

    /// Sprites that must paint over everything else, in order
    pub fn on_top(&self) -> impl Iterator<Item = &str> {
        self.sprites
            .iter()
            .filter(|s| s.kind == BodyKind::Player)
            .map(|s| s.id.as_str())
    }
}

/// Keeps the Game Over text up for a while after the one-tick pulse
#[derive(Debug, Clone, Default)]
pub struct GameOverOverlay {
    visible_until: Option<u64>,
}

impl GameOverOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a new state; returns whether the overlay should be visible
    pub fn update(&mut self, state: &GameState, duration_ticks: u64) -> bool {
        if state.game_over {
            self.visible_until = Some(state.counter + duration_ticks);
        }
        match self.visible_until {
            Some(until) if state.counter < until => true,
            Some(_) => {
                self.visible_until = None;
                false
            }
            None => false,
        }
    }
}

/// In-memory retained display list, back to front
#[derive(Debug, Clone, Default)]
pub struct RetainedScene {
    elements: Vec<Sprite>,
}

impl RetainedScene {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|s| s.id == id)
    }

    /// Update an element in place or append it on top; returns true if it
    /// was created
    pub fn upsert(&mut self, sprite: Sprite) -> bool {
        match self.position(&sprite.id) {
            Some(i) => {
                self.elements[i] = sprite;
                false
            }
            None => {
                self.elements.push(sprite);
                true
            }
        }
    }

    /// Remove an element that must be on the surface
    pub fn remove(&mut self, id: &str) -> Result<Sprite, ViewError> {
        self.position(id)
            .map(|i| self.elements.remove(i))
            .ok_or_else(|| ViewError::MissingElement { id: id.to_string() })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Move an element to the top of the paint order
    pub fn raise(&mut self, id: &str) {
        if let Some(i) = self.position(id) {
            let sprite = self.elements.remove(i);
            self.elements.push(sprite);
        }
    }

    /// Bring the surface in line with a scene. Removal failures are
    /// returned rather than aborting the update.
    pub fn apply(&mut self, scene: &Scene) -> Vec<ViewError> {
        for sprite in &scene.sprites {
            self.upsert(sprite.clone());
        }
        let errors = scene
            .hidden
            .iter()
            .filter_map(|id| self.remove(id).err())
            .collect();
        for id in scene.on_top() {
            self.raise(id);
        }
        errors
    }
}
