//! Browser presenter drawing into an inline SVG element

use web_sys::{Document, Element};

use super::scene::{GameOverOverlay, Scene, Shape, Sprite};
use super::{Presenter, ViewError};
use crate::consts::CANVAS_SIZE;
use crate::settings::Settings;
use crate::sim::GameState;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const OVERLAY_ID: &str = "gameover";

/// Zone indicator element ids, in zone order
const ZONE_INDICATOR_IDS: [&str; 4] = ["inArea1", "inArea2", "inArea3", "inArea4"];

fn backend(op: &'static str) -> impl Fn(wasm_bindgen::JsValue) -> ViewError {
    move |e| ViewError::Backend {
        op,
        detail: format!("{e:?}"),
    }
}

/// Set several attributes on an element at once
fn attr(el: &Element, attrs: &[(&str, String)]) -> Result<(), ViewError> {
    for (name, value) in attrs {
        el.set_attribute(name, value).map_err(backend("setAttribute"))?;
    }
    Ok(())
}

pub struct SvgPresenter {
    document: Document,
    svg: Element,
    settings: Settings,
    overlay: GameOverOverlay,
}

impl SvgPresenter {
    /// Attach to the `<svg>` element with the given id
    pub fn new(document: Document, svg_id: &str, settings: Settings) -> Result<Self, ViewError> {
        let svg = document
            .get_element_by_id(svg_id)
            .ok_or_else(|| ViewError::MissingElement {
                id: svg_id.to_string(),
            })?;
        Ok(Self {
            document,
            svg,
            settings,
            overlay: GameOverOverlay::new(),
        })
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(&self, id: &str, hidden: bool) -> Result<(), ViewError> {
        let el = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| ViewError::MissingElement { id: id.to_string() })?;
        let classes = el.class_list();
        if hidden {
            classes.add_1("hidden").map_err(backend("classList.add"))
        } else {
            classes.remove_1("hidden").map_err(backend("classList.remove"))
        }
    }

    fn create_sprite_element(&self, sprite: &Sprite) -> Result<Element, ViewError> {
        let tag = match sprite.shape {
            Shape::Rect { .. } => "rect",
            Shape::Circle { .. } => "ellipse",
        };
        let el = self
            .document
            .create_element_ns(Some(SVG_NS), tag)
            .map_err(backend("createElementNS"))?;
        el.set_id(&sprite.id);
        el.class_list()
            .add_1(sprite.kind.as_str())
            .map_err(backend("classList.add"))?;
        self.svg.append_child(&el).map_err(backend("appendChild"))?;
        Ok(el)
    }

    fn draw_sprite(&self, sprite: &Sprite) -> Result<(), ViewError> {
        let el = match self.document.get_element_by_id(&sprite.id) {
            Some(el) => el,
            None => self.create_sprite_element(sprite)?,
        };
        match sprite.shape {
            Shape::Rect { width, height } => attr(
                &el,
                &[
                    ("x", sprite.pos.x.to_string()),
                    ("y", sprite.pos.y.to_string()),
                    ("width", width.to_string()),
                    ("height", height.to_string()),
                    ("fill", sprite.fill.clone()),
                ],
            ),
            Shape::Circle { radius } => attr(
                &el,
                &[
                    ("cx", sprite.pos.x.to_string()),
                    ("cy", sprite.pos.y.to_string()),
                    ("rx", radius.to_string()),
                    ("ry", radius.to_string()),
                    ("fill", sprite.fill.clone()),
                ],
            ),
        }
    }

    fn remove(&self, id: &str) -> Result<(), ViewError> {
        let el = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| ViewError::MissingElement { id: id.to_string() })?;
        self.svg.remove_child(&el).map_err(backend("removeChild"))?;
        Ok(())
    }

    /// Re-append an element so it paints over everything drawn so far
    fn raise(&self, id: &str) -> Result<(), ViewError> {
        let el = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| ViewError::MissingElement { id: id.to_string() })?;
        self.svg.append_child(&el).map_err(backend("appendChild"))?;
        Ok(())
    }

    fn show_overlay(&self, visible: bool) -> Result<(), ViewError> {
        let existing = self.document.get_element_by_id(OVERLAY_ID);
        match (visible, existing) {
            (true, None) => {
                let el = self
                    .document
                    .create_element_ns(Some(SVG_NS), "text")
                    .map_err(backend("createElementNS"))?;
                el.set_id(OVERLAY_ID);
                attr(
                    &el,
                    &[
                        ("x", (CANVAS_SIZE / 6.0).to_string()),
                        ("y", (CANVAS_SIZE / 2.0).to_string()),
                        ("class", "gameover".to_string()),
                    ],
                )?;
                el.set_text_content(Some("Game Over"));
                self.svg.append_child(&el).map_err(backend("appendChild"))?;
                Ok(())
            }
            (true, Some(_)) => self.raise(OVERLAY_ID),
            (false, Some(_)) => self.remove(OVERLAY_ID),
            (false, None) => Ok(()),
        }
    }
}

impl Presenter for SvgPresenter {
    fn present(&mut self, state: &GameState) {
        let scene = Scene::from_state(state, &self.settings);

        self.set_text("score", &scene.hud.score.to_string());
        self.set_text("highscore", &scene.hud.high_score.to_string());
        self.set_text("lives", &scene.hud.lives.to_string());
        self.set_text("level", &scene.hud.level.to_string());

        for (id, filled) in ZONE_INDICATOR_IDS.iter().zip(scene.zone_indicators) {
            if let Err(e) = self.set_hidden(id, !filled) {
                log::warn!("{e}");
            }
        }

        for sprite in &scene.sprites {
            if let Err(e) = self.draw_sprite(sprite) {
                log::warn!("{e}");
            }
        }

        // Submerged turtles are asked to leave every tick; most are already gone
        for id in &scene.hidden {
            if let Err(e) = self.remove(id) {
                log::debug!("{e}");
            }
        }

        // Resurfaced turtles were appended after the frog
        for id in scene.on_top() {
            if let Err(e) = self.raise(id) {
                log::warn!("{e}");
            }
        }

        let visible = self
            .overlay
            .update(state, self.settings.game_over_overlay_ticks());
        if let Err(e) = self.show_overlay(visible) {
            log::warn!("{e}");
        }
    }
}
