//! The player's ship
//!
//! Handling is arcade-style: each movement input adds a fixed acceleration
//! on one axis and friction bleeds a fixed amount per tick back toward zero.
//! Both are per update tick; only the position integration uses `dt`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Hitbox;
use super::entity::{Bounds, Entity};
use super::manager::AsteroidManager;
use super::pickup::PickupKind;
use super::projectile::Projectile;
use super::state::{GameEvent, GameSession};
use crate::consts::*;
use crate::{from_polar, to_polar};

/// Movement input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Protective bubble attached to the ship while a shield boost is active
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shield {
    pub pos: Vec2,
}

impl Entity for Shield {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn velocity(&self) -> Vec2 {
        Vec2::ZERO
    }

    fn hitbox(&self) -> Hitbox {
        Hitbox::square(self.pos, SHIELD_SIZE)
    }

    // Follows the ship; the player moves it
    fn update(&mut self, _dt: f32, _bounds: &Bounds) {}
}

/// The player-controlled ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acceleration: f32,
    pub friction: f32,
    pub max_speed: f32,
    /// Milliseconds required between shots
    pub fire_delay: f32,
    /// Milliseconds since the last shot
    pub last_shot_elapsed: f32,
    /// Facing angle in degrees, derived from `aim_target`
    pub angle: f32,
    /// Point the ship turns toward (pointer position)
    pub aim_target: Vec2,
    pub damage_boost_ticks: u32,
    pub shield_boost_ticks: u32,
    pub shield: Option<Shield>,
    pub alive: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            acceleration: PLAYER_ACCELERATION,
            friction: PLAYER_FRICTION,
            max_speed: PLAYER_MAX_SPEED,
            fire_delay: PLAYER_FIRE_DELAY_MS,
            last_shot_elapsed: 0.0,
            angle: -90.0,
            aim_target: pos,
            damage_boost_ticks: 0,
            shield_boost_ticks: 0,
            shield: None,
            alive: true,
        }
    }

    pub fn is_damage_boosted(&self) -> bool {
        self.damage_boost_ticks > 0
    }

    pub fn is_shielded(&self) -> bool {
        self.shield.is_some()
    }

    /// Set the point the ship turns toward on its next update
    pub fn aim_at(&mut self, target: Vec2) {
        self.aim_target = target;
    }

    /// Full per-frame step.
    ///
    /// Order: asteroid collisions, pickup collisions, then motion/timers
    /// via [`Entity::update`]. Returns false if the ship was destroyed, in
    /// which case nothing after the collision check runs.
    pub fn simulate(
        &mut self,
        dt: f32,
        asteroids: &mut AsteroidManager,
        session: &mut GameSession,
    ) -> bool {
        if !self.resolve_asteroid_collisions(asteroids, session) {
            return false;
        }
        self.resolve_pickup_collisions(session);
        self.update(dt, &session.bounds);
        true
    }

    fn resolve_asteroid_collisions(
        &mut self,
        asteroids: &mut AsteroidManager,
        session: &mut GameSession,
    ) -> bool {
        if let Some(shield) = &self.shield {
            let shield_box = shield.hitbox();
            if asteroids.overlapping(&shield_box).is_empty() {
                return true;
            }
            let removed = asteroids.destroy_overlapping(&shield_box);
            log::debug!("Shield absorbed {} asteroid(s)", removed);
            self.shield = None;
            self.shield_boost_ticks = 0;
            session.pickups.clear();
            session.emit(GameEvent::ShieldBroken);
            return true;
        }

        if asteroids.overlapping(&self.hitbox()).is_empty() {
            return true;
        }
        self.destroy(session);
        false
    }

    fn resolve_pickup_collisions(&mut self, session: &mut GameSession) {
        let (collected, remaining): (Vec<_>, Vec<_>) = std::mem::take(&mut session.pickups)
            .into_iter()
            .partition(|p| self.collides_with(p));
        session.pickups = remaining;

        for pickup in collected {
            match pickup.kind {
                PickupKind::Shield => self.add_shield_boost(),
                PickupKind::Damage => self.add_damage_boost(),
                PickupKind::Xp => {}
            }
            log::debug!("Collected {:?} pickup", pickup.kind);
            session.emit(GameEvent::PickupCollected { kind: pickup.kind });
        }
    }

    /// Accelerate along one axis, never beyond `max_speed`
    pub fn move_in(&mut self, direction: Direction) {
        let (max, acc) = (self.max_speed, self.acceleration);
        match direction {
            Direction::Up => {
                if -self.vel.y < max {
                    self.vel.y = (self.vel.y - acc).max(-max);
                }
            }
            Direction::Down => {
                if self.vel.y < max {
                    self.vel.y = (self.vel.y + acc).min(max);
                }
            }
            Direction::Left => {
                if -self.vel.x < max {
                    self.vel.x = (self.vel.x - acc).max(-max);
                }
            }
            Direction::Right => {
                if self.vel.x < max {
                    self.vel.x = (self.vel.x + acc).min(max);
                }
            }
        }
    }

    pub fn can_fire(&self) -> bool {
        self.last_shot_elapsed >= self.fire_delay
    }

    /// Fire from the nose of the ship if the cooldown has elapsed
    pub fn shoot(&mut self, session: &mut GameSession) -> bool {
        if !self.can_fire() {
            return false;
        }
        let boosted = self.is_damage_boosted();
        let origin = self.pos + from_polar(PLAYER_HEIGHT / 2.0, self.angle);
        session
            .projectiles
            .push(Projectile::new(origin, self.angle, boosted));
        self.last_shot_elapsed = 0.0;
        session.emit(GameEvent::ShotFired { boosted });
        true
    }

    pub fn add_damage_boost(&mut self) {
        self.damage_boost_ticks += BOOST_DURATION_TICKS;
    }

    pub fn add_shield_boost(&mut self) {
        self.shield_boost_ticks += BOOST_DURATION_TICKS;
        if self.shield.is_none() {
            self.shield = Some(Shield { pos: self.pos });
        }
    }

    /// Lose a life and leave the field
    pub fn destroy(&mut self, session: &mut GameSession) {
        session.lose_life();
        self.alive = false;
        self.shield = None;
        log::info!("Player destroyed ({} lives left)", session.lives);
        session.emit(GameEvent::PlayerDestroyed);
    }

    fn tick_boosts(&mut self) {
        if self.damage_boost_ticks > 0 {
            self.damage_boost_ticks -= 1;
            if self.damage_boost_ticks == 0 {
                log::debug!("Damage boost expired");
            }
        }
        if self.shield_boost_ticks > 0 {
            self.shield_boost_ticks -= 1;
            if self.shield_boost_ticks == 0 {
                log::debug!("Shield boost expired");
                self.shield = None;
            }
        }
    }

    fn update_aim(&mut self) {
        let to_target = self.aim_target - self.pos;
        if to_target.length_squared() > f32::EPSILON {
            self.angle = to_polar(to_target).1;
        }
    }

    /// Bleed a fixed amount of speed per axis without crossing zero
    pub fn reduce_velocity(&mut self) {
        let f = self.friction;
        let damp = |v: f32| if v.abs() <= f { 0.0 } else { v - f * v.signum() };
        self.vel = Vec2::new(damp(self.vel.x), damp(self.vel.y));
    }
}

impl Entity for Player {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn velocity(&self) -> Vec2 {
        self.vel
    }

    fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.pos, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT))
    }

    fn sprite_rotation(&self) -> f32 {
        -self.angle + PLAYER_SPRITE_ROTATION_OFFSET
    }

    fn update(&mut self, dt: f32, bounds: &Bounds) {
        self.pos += self.vel * dt;
        self.last_shot_elapsed += dt * 1000.0;
        self.tick_boosts();
        self.update_aim();
        self.pos = bounds.wrap(self.pos, 0.0);
        self.reduce_velocity();
        if let Some(shield) = &mut self.shield {
            shield.pos = self.pos;
        }
    }
}
