//! Shared entity contract and playfield bounds
//!
//! Player, Asteroid, Projectile and Pickup all expose a position, velocity
//! and hitbox, and advance themselves by a delta time.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Hitbox;

/// Playfield dimensions in pixels (origin top-left, Y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Teleport a position that crossed an edge to the opposite one.
    ///
    /// `margin` extends the field on every side: a coordinate below
    /// `-margin` jumps to `max + margin` and vice versa. Positions inside
    /// the extended field are untouched.
    pub fn wrap(&self, mut pos: Vec2, margin: f32) -> Vec2 {
        if pos.x < -margin {
            pos.x = self.width + margin;
        } else if pos.x > self.width + margin {
            pos.x = -margin;
        }
        if pos.y < -margin {
            pos.y = self.height + margin;
        } else if pos.y > self.height + margin {
            pos.y = -margin;
        }
        pos
    }
}

/// Behavior common to every simulated object
pub trait Entity {
    fn position(&self) -> Vec2;

    fn velocity(&self) -> Vec2;

    /// Collision shape at the current position
    fn hitbox(&self) -> Hitbox;

    /// Sprite rotation in degrees, already in screen convention
    fn sprite_rotation(&self) -> f32 {
        0.0
    }

    /// Advance by `dt` seconds
    fn update(&mut self, dt: f32, bounds: &Bounds);

    /// Whether this entity overlaps another
    fn collides_with(&self, other: &impl Entity) -> bool
    where
        Self: Sized,
    {
        self.hitbox().overlaps(&other.hitbox())
    }
}
