//! Astro Drift - a top-down asteroid-field shooter
//!
//! Core modules:
//! - `sim`: Frame-rate independent simulation (entities, collisions, waves)
//! - `game`: Mode state machine driving the simulation and the modals
//! - `ui`: Start/pause/game-over modals and click hit-testing
//! - `platform`: Input and clock collaborators
//! - `assets`, `audio`, `renderer`: Thin seams to the surrounding engine
//! - `settings`: Runtime configuration

pub mod assets;
pub mod audio;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod runner;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::{AssetError, ConfigError};
pub use game::{Game, GameMode};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default playfield dimensions
    pub const WINDOW_WIDTH: f32 = 1280.0;
    pub const WINDOW_HEIGHT: f32 = 720.0;
    /// Frame limiter target
    pub const TARGET_FPS: u32 = 60;

    /// Session defaults
    pub const STARTING_LIVES: u8 = 3;
    /// Seconds between a fatal hit and the respawn
    pub const RESPAWN_DELAY: f32 = 3.0;

    /// Player handling (per update tick, not scaled by dt)
    pub const PLAYER_ACCELERATION: f32 = 4.0;
    pub const PLAYER_FRICTION: f32 = 1.0;
    pub const PLAYER_MAX_SPEED: f32 = 500.0;
    /// Milliseconds between shots
    pub const PLAYER_FIRE_DELAY_MS: f32 = 700.0;
    /// Hitbox of the ship sprite
    pub const PLAYER_WIDTH: f32 = 48.0;
    pub const PLAYER_HEIGHT: f32 = 64.0;
    /// The ship art points up; rotate by this to face +x at angle 0
    pub const PLAYER_SPRITE_ROTATION_OFFSET: f32 = -90.0;
    /// Boost durations in update ticks
    pub const BOOST_DURATION_TICKS: u32 = 300;
    pub const SHIELD_SIZE: f32 = 96.0;

    /// Projectiles
    pub const PROJECTILE_SPEED: f32 = 500.0;
    pub const PROJECTILE_TTL_MS: f32 = 2500.0;
    pub const PROJECTILE_DAMAGE: i32 = 10;
    pub const PROJECTILE_BOOSTED_DAMAGE: i32 = 30;
    pub const PROJECTILE_SIZE: f32 = 10.0;

    /// Asteroids
    pub const ASTEROID_MIN_SPEED: f32 = 50.0;
    pub const ASTEROID_MAX_SPEED: f32 = 100.0;
    /// Max cosmetic spin in degrees per update tick
    pub const ASTEROID_MAX_SPIN: f32 = 1.5;
    /// How far outside the screen edge random spawns appear
    pub const ASTEROID_SPAWN_OFFSET: f32 = 50.0;
    /// Asteroids drift this far off-screen before wrapping
    pub const ASTEROID_WRAP_MARGIN: f32 = 100.0;
    /// Offset of each split fragment from the parent
    pub const ASTEROID_SPLIT_OFFSET: f32 = 20.0;
    /// Chance that a destroyed asteroid drops a pickup
    pub const PICKUP_DROP_CHANCE: f64 = 0.3;
    pub const PICKUP_SIZE: f32 = 32.0;

    /// Wave scheduling (seconds)
    pub const WAVE_DURATION: f32 = 60.0;
    pub const BREAK_DURATION: f32 = 10.0;
    pub const BASE_SPAWN_RATE: f32 = 1.0;
    pub const SPAWN_RATE_PER_WAVE: f32 = 0.2;
    pub const MAX_SPAWN_RATE: f32 = 3.0;
}

/// Vector from a magnitude and an angle in degrees (0° along +x)
#[inline]
pub fn from_polar(magnitude: f32, angle_deg: f32) -> Vec2 {
    let theta = angle_deg.to_radians();
    Vec2::new(magnitude * theta.cos(), magnitude * theta.sin())
}

/// Decompose a vector into (magnitude, angle in degrees)
#[inline]
pub fn to_polar(v: Vec2) -> (f32, f32) {
    (v.length(), v.y.atan2(v.x).to_degrees())
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}
