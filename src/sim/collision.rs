//! Collision detection
//!
//! Everything collides as an axis-aligned rectangle centred on the entity
//! position. Sprite rotation does not change the box.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Axis-aligned collision box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Hitbox {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half_extents: size / 2.0,
        }
    }

    /// Square box of side `size`
    pub fn square(center: Vec2, size: f32) -> Self {
        Self::new(center, Vec2::splat(size))
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }

    /// Strict overlap: boxes that only share an edge do not collide
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        let delta = (self.center - other.center).abs();
        let reach = self.half_extents + other.half_extents;
        delta.x < reach.x && delta.y < reach.y
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

/// Indices of every entity in `others` overlapping `hitbox`, in order
pub fn overlapping_indices<E: Entity>(hitbox: &Hitbox, others: &[E]) -> Vec<usize> {
    others
        .iter()
        .enumerate()
        .filter(|(_, e)| hitbox.overlaps(&e.hitbox()))
        .map(|(i, _)| i)
        .collect()
}
