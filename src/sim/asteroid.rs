//! Asteroids: drifting, spinning rocks that split when destroyed

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Hitbox;
use super::entity::{Bounds, Entity};
use crate::consts::*;
use crate::from_polar;

/// Size category. Only ever shrinks, one step per split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AsteroidSize {
    Small = 1,
    Medium = 2,
    Large = 3,
}

impl AsteroidSize {
    pub const ALL: [AsteroidSize; 3] =
        [AsteroidSize::Small, AsteroidSize::Medium, AsteroidSize::Large];

    /// Size from its numeric level (1..=3). Anything else is a caller bug.
    pub fn from_level(level: u8) -> Self {
        assert!(
            (1..=3).contains(&level),
            "asteroid size must be 1..=3, got {}",
            level
        );
        match level {
            1 => AsteroidSize::Small,
            2 => AsteroidSize::Medium,
            _ => AsteroidSize::Large,
        }
    }

    pub fn level(self) -> u8 {
        self as u8
    }

    /// Next size down, `None` for the smallest
    pub fn smaller(self) -> Option<Self> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }

    /// Sprite folder name
    pub fn category(self) -> &'static str {
        match self {
            AsteroidSize::Small => "small",
            AsteroidSize::Medium => "medium",
            AsteroidSize::Large => "large",
        }
    }

    /// Sprite families available in this category
    pub fn variants(self) -> &'static [&'static str] {
        match self {
            AsteroidSize::Large => &["a1", "a3", "b1", "b3", "c1", "c3", "c4"],
            AsteroidSize::Medium => &["a1", "a3", "b1", "b3", "c1", "c4"],
            AsteroidSize::Small => &["a1", "a3", "b1", "c1"],
        }
    }

    /// Side of the square hitbox
    pub fn hitbox_size(self) -> f32 {
        match self {
            AsteroidSize::Small => 32.0,
            AsteroidSize::Medium => 64.0,
            AsteroidSize::Large => 96.0,
        }
    }

    /// Weighted pick for wave spawns: large 30%, medium 60%, small 10%
    pub fn random_spawn(rng: &mut impl Rng) -> Self {
        let roll: f32 = rng.random();
        if roll < 0.3 {
            AsteroidSize::Large
        } else if roll < 0.9 {
            AsteroidSize::Medium
        } else {
            AsteroidSize::Small
        }
    }
}

/// Pick a sprite family. A filter that matches nothing falls back to any
/// family of the category.
pub fn pick_variant(size: AsteroidSize, wanted: Option<&str>, rng: &mut impl Rng) -> &'static str {
    let all = size.variants();
    let matching: Vec<&'static str> = match wanted {
        Some(filter) => all.iter().copied().filter(|v| v.contains(filter)).collect(),
        None => Vec::new(),
    };
    let pool: &[&'static str] = if matching.is_empty() { all } else { &matching };
    pool[rng.random_range(0..pool.len())]
}

/// A point just outside a random screen edge
pub fn random_edge_position(bounds: &Bounds, rng: &mut impl Rng) -> Vec2 {
    let off = ASTEROID_SPAWN_OFFSET;
    match rng.random_range(0..4) {
        0 => Vec2::new(rng.random_range(0.0..=bounds.width), -off),
        1 => Vec2::new(rng.random_range(0.0..=bounds.width), bounds.height + off),
        2 => Vec2::new(-off, rng.random_range(0.0..=bounds.height)),
        _ => Vec2::new(bounds.width + off, rng.random_range(0.0..=bounds.height)),
    }
}

/// A drifting asteroid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: AsteroidSize,
    pub health: i32,
    pub points: u32,
    /// Cosmetic rotation (degrees)
    pub rotation: f32,
    /// Degrees per update tick
    pub rotation_speed: f32,
    /// Sprite family, kept by fragments
    pub variant: String,
}

impl Asteroid {
    /// Create an asteroid. Without a position it appears just off-screen.
    pub fn new(
        pos: Option<Vec2>,
        size: AsteroidSize,
        variant: Option<&str>,
        bounds: &Bounds,
        rng: &mut impl Rng,
    ) -> Self {
        let pos = pos.unwrap_or_else(|| random_edge_position(bounds, rng));
        let speed = rng.random_range(ASTEROID_MIN_SPEED..ASTEROID_MAX_SPEED) / size.level() as f32;
        let angle = rng.random_range(0.0..360.0);
        let level = size.level() as i32;
        Self {
            pos,
            vel: from_polar(speed, angle),
            size,
            health: level * 10,
            points: level as u32 * 10,
            rotation: rng.random_range(0.0..360.0),
            rotation_speed: rng.random_range(-ASTEROID_MAX_SPIN..=ASTEROID_MAX_SPIN),
            variant: pick_variant(size, variant, rng).to_string(),
        }
    }

    /// Apply damage; true once health is at or below zero
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.health -= amount;
        self.is_destroyed()
    }

    pub fn is_destroyed(&self) -> bool {
        self.health <= 0
    }

    /// Two fragments one size down at `pos ± (20, 20)`, none for small rocks
    pub fn split(&self, bounds: &Bounds, rng: &mut impl Rng) -> Vec<Asteroid> {
        let Some(smaller) = self.size.smaller() else {
            return Vec::new();
        };
        let offset = Vec2::splat(ASTEROID_SPLIT_OFFSET);
        [self.pos + offset, self.pos - offset]
            .into_iter()
            .map(|pos| Asteroid::new(Some(pos), smaller, Some(self.variant.as_str()), bounds, rng))
            .collect()
    }

    /// Sprite key, e.g. `large/a3`
    pub fn sprite_key(&self) -> String {
        format!("{}/{}", self.size.category(), self.variant)
    }
}

impl Entity for Asteroid {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn velocity(&self) -> Vec2 {
        self.vel
    }

    fn hitbox(&self) -> Hitbox {
        Hitbox::square(self.pos, self.size.hitbox_size())
    }

    fn sprite_rotation(&self) -> f32 {
        self.rotation
    }

    fn update(&mut self, dt: f32, bounds: &Bounds) {
        self.pos += self.vel * dt;
        self.rotation = (self.rotation + self.rotation_speed) % 360.0;
        self.pos = bounds.wrap(self.pos, ASTEROID_WRAP_MARGIN);
    }
}
