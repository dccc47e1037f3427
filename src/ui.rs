//! Modal dialogs shown by the controller
//!
//! A modal is a rectangle with child buttons. Button rectangles are stored
//! relative to the modal origin; clicks arrive in screen space.

use glam::Vec2;

use crate::sim::collision::Hitbox;
use crate::sim::entity::Bounds;

pub const MODAL_WIDTH: f32 = 400.0;
pub const MODAL_HEIGHT: f32 = 300.0;
pub const BUTTON_WIDTH: f32 = 160.0;
pub const BUTTON_HEIGHT: f32 = 48.0;
const BUTTON_GAP: f32 = 20.0;
const BUTTON_ROW_Y: f32 = 200.0;

/// What a button does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Start,
    Resume,
    Retry,
    Quit,
}

impl UiAction {
    pub fn label(self) -> &'static str {
        match self {
            UiAction::Start => "Start",
            UiAction::Resume => "Resume",
            UiAction::Retry => "Retry",
            UiAction::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Start,
    Pause,
    GameOver,
}

/// Clickable area, top-left anchored, relative to its modal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub action: UiAction,
    pub offset: Vec2,
    pub size: Vec2,
}

impl Button {
    fn contains(&self, origin: Vec2, point: Vec2) -> bool {
        Hitbox::new(self.center(origin), self.size).contains_point(point)
    }

    /// Screen-space center, for drawing the label or clicking it
    pub fn center(&self, origin: Vec2) -> Vec2 {
        origin + self.offset + self.size * 0.5
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Modal {
    pub kind: ModalKind,
    /// Top-left corner in screen space
    pub origin: Vec2,
    pub size: Vec2,
    pub title: String,
    /// Extra line under the title (final score on game over)
    pub body: Option<String>,
    pub buttons: Vec<Button>,
}

impl Modal {
    fn centered(kind: ModalKind, bounds: &Bounds, title: &str, actions: [UiAction; 2]) -> Self {
        let size = Vec2::new(MODAL_WIDTH, MODAL_HEIGHT);
        let origin = bounds.center() - size * 0.5;
        let row_width = 2.0 * BUTTON_WIDTH + BUTTON_GAP;
        let left = (MODAL_WIDTH - row_width) / 2.0;

        let buttons = actions
            .iter()
            .enumerate()
            .map(|(i, &action)| Button {
                action,
                offset: Vec2::new(left + i as f32 * (BUTTON_WIDTH + BUTTON_GAP), BUTTON_ROW_Y),
                size: Vec2::new(BUTTON_WIDTH, BUTTON_HEIGHT),
            })
            .collect();

        Self {
            kind,
            origin,
            size,
            title: title.to_string(),
            body: None,
            buttons,
        }
    }

    pub fn start(bounds: &Bounds) -> Self {
        Self::centered(ModalKind::Start, bounds, "Astro Drift", [UiAction::Start, UiAction::Quit])
    }

    pub fn pause(bounds: &Bounds) -> Self {
        Self::centered(ModalKind::Pause, bounds, "Paused", [UiAction::Resume, UiAction::Quit])
    }

    pub fn game_over(bounds: &Bounds, score: u64) -> Self {
        let mut modal = Self::centered(
            ModalKind::GameOver,
            bounds,
            "Game Over",
            [UiAction::Retry, UiAction::Quit],
        );
        modal.body = Some(format!("Score: {}", score));
        modal
    }

    /// Action of the button under `point`, if any
    pub fn hit_test(&self, point: Vec2) -> Option<UiAction> {
        self.buttons
            .iter()
            .find(|b| b.contains(self.origin, point))
            .map(|b| b.action)
    }

    /// Screen-space center of the button for `action`
    pub fn button_center(&self, action: UiAction) -> Option<Vec2> {
        self.buttons
            .iter()
            .find(|b| b.action == action)
            .map(|b| b.center(self.origin))
    }
}
