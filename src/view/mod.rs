//! Presentation adapters
//!
//! A presenter observes each emitted `GameState` and draws it. It never writes
//! back into the state. `Scene` holds everything a presenter needs so the
//! drawing code itself stays thin.

pub mod log_presenter;
pub mod scene;
#[cfg(target_arch = "wasm32")]
pub mod svg;

use std::fmt;

use crate::sim::GameState;

pub use log_presenter::LogPresenter;
pub use scene::{GameOverOverlay, Hud, RetainedScene, Scene, Shape, Sprite};
#[cfg(target_arch = "wasm32")]
pub use svg::SvgPresenter;

/// Receives every state the session produces
pub trait Presenter {
    fn present(&mut self, state: &GameState);
}

/// Presenter that draws nothing
impl Presenter for () {
    fn present(&mut self, _state: &GameState) {}
}

/// Failures while updating a display surface. Presenters log these and carry on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Tried to remove or update an element that is not on the surface
    MissingElement { id: String },
    /// The display backend rejected an operation
    Backend { op: &'static str, detail: String },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement { id } => write!(f, "element already removed: {id}"),
            Self::Backend { op, detail } => write!(f, "{op} failed: {detail}"),
        }
    }
}

impl std::error::Error for ViewError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_error_display() {
        let e = ViewError::MissingElement {
            id: "turtle3".to_string(),
        };
        assert_eq!(e.to_string(), "element already removed: turtle3");

        let e = ViewError::Backend {
            op: "createElementNS",
            detail: "bad namespace".to_string(),
        };
        assert_eq!(e.to_string(), "createElementNS failed: bad namespace");
    }
}
