//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Every update takes the frame delta in seconds
//! - Seeded RNG only, owned by the session
//! - Side effects (sounds, wave announcements) leave as `GameEvent`s

pub mod asteroid;
pub mod collision;
pub mod entity;
pub mod manager;
pub mod pickup;
pub mod player;
pub mod projectile;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, AsteroidSize};
pub use collision::Hitbox;
pub use entity::{Bounds, Entity};
pub use manager::{AsteroidManager, HitReport, WaveSignal, spawn_rate_for_wave};
pub use pickup::{Pickup, PickupKind};
pub use player::{Direction, Player, Shield};
pub use projectile::Projectile;
pub use state::{GameEvent, GameSession, SessionSummary};
pub use tick::{TickInput, resolve_projectile_hits, tick};
