//! Rendering seam
//!
//! The host supplies a [`Renderer`] that can blit a sprite and draw text.
//! [`scene::render_frame`] walks the final state of a frame and submits it.

pub mod recorder;
pub mod scene;

use glam::Vec2;

use crate::assets::ImageHandle;

pub use recorder::{DrawCommand, RecordingRenderer};
pub use scene::{FrameStats, render_frame};

/// RGBA color, 0-255 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 220, 80);
    pub const RED: Color = Color::rgb(230, 60, 60);
    pub const GREY: Color = Color::rgb(160, 160, 160);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

pub trait Renderer {
    /// Draw `image` centered on `position`, rotated counter-clockwise
    fn draw_sprite(&mut self, image: ImageHandle, position: Vec2, rotation_degrees: f32);
    fn draw_text(&mut self, text: &str, position: Vec2, color: Color);
    /// Flip the finished frame to the screen
    fn present(&mut self);
}
