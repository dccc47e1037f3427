//! Renderer that keeps the last frame's draw calls in memory

use glam::Vec2;

use super::{Color, Renderer};
use crate::assets::ImageHandle;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite {
        image: ImageHandle,
        position: Vec2,
        rotation: f32,
    },
    Text {
        text: String,
        position: Vec2,
        color: Color,
    },
}

/// Headless renderer. `commands` holds the frame being built; `present`
/// moves it to `last_frame`.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<DrawCommand>,
    pub last_frame: Vec<DrawCommand>,
    /// Frames presented so far
    pub frames: u64,
}

impl Renderer for RecordingRenderer {
    fn draw_sprite(&mut self, image: ImageHandle, position: Vec2, rotation_degrees: f32) {
        self.commands.push(DrawCommand::Sprite {
            image,
            position,
            rotation: rotation_degrees,
        });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            color,
        });
    }

    fn present(&mut self) {
        self.last_frame = std::mem::take(&mut self.commands);
        self.frames += 1;
    }
}
