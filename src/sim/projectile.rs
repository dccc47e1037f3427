//! Player-fired projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Hitbox;
use super::entity::{Bounds, Entity};
use crate::consts::*;
use crate::from_polar;

/// A straight-line, time-limited bullet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Firing angle in degrees
    pub heading: f32,
    /// Milliseconds since spawn
    pub time_alive: f32,
    /// Lifetime in milliseconds
    pub ttl: f32,
    /// Damage boost captured when fired
    pub boosted: bool,
    /// Set once expired or spent on a hit
    pub destroyed: bool,
}

impl Projectile {
    pub fn new(origin: Vec2, heading: f32, boosted: bool) -> Self {
        Self {
            pos: origin,
            vel: from_polar(PROJECTILE_SPEED, heading),
            heading,
            time_alive: 0.0,
            ttl: PROJECTILE_TTL_MS,
            boosted,
            destroyed: false,
        }
    }

    /// Damage dealt on hit
    pub fn damage(&self) -> i32 {
        if self.boosted {
            PROJECTILE_BOOSTED_DAMAGE
        } else {
            PROJECTILE_DAMAGE
        }
    }

    pub fn is_expired(&self) -> bool {
        self.time_alive > self.ttl
    }
}

impl Entity for Projectile {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn velocity(&self) -> Vec2 {
        self.vel
    }

    fn hitbox(&self) -> Hitbox {
        Hitbox::square(self.pos, PROJECTILE_SIZE)
    }

    fn sprite_rotation(&self) -> f32 {
        -self.heading - 90.0
    }

    fn update(&mut self, dt: f32, bounds: &Bounds) {
        self.time_alive += dt * 1000.0;
        if self.is_expired() {
            self.destroyed = true;
            return;
        }
        self.pos += self.vel * dt;
        self.pos = bounds.wrap(self.pos, 0.0);
    }
}
