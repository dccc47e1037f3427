//! Session state shared by every simulation component
//!
//! Score, lives, the loose projectile/pickup collections, the event queue
//! and the RNG all live here and are handed to components by reference.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::AsteroidSize;
use super::entity::Bounds;
use super::pickup::{Pickup, PickupKind};
use super::projectile::Projectile;
use crate::consts::STARTING_LIVES;

/// Something that happened during a frame, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    WaveStarted { wave: u32 },
    WaveEnded { wave: u32 },
    ShotFired { boosted: bool },
    PlayerDestroyed,
    PlayerRespawned,
    /// Shield absorbed a collision and is gone
    ShieldBroken,
    AsteroidDestroyed { size: AsteroidSize },
    PickupCollected { kind: PickupKind },
    GameOver { score: u64 },
}

/// Per-run mutable state
#[derive(Debug, Clone)]
pub struct GameSession {
    pub bounds: Bounds,
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub score: u64,
    pub lives: u8,
    /// Live projectiles
    pub projectiles: Vec<Projectile>,
    /// Pickups lying on the field
    pub pickups: Vec<Pickup>,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    /// Simulation frames advanced while running
    pub time_ticks: u64,
}

impl GameSession {
    pub fn new(bounds: Bounds, seed: u64) -> Self {
        Self {
            bounds,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            lives: STARTING_LIVES,
            projectiles: Vec::new(),
            pickups: Vec::new(),
            events: Vec::new(),
            time_ticks: 0,
        }
    }

    /// Fresh score and lives, empty field. The RNG keeps its stream.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.projectiles.clear();
        self.pickups.clear();
        self.time_ticks = 0;
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    pub fn is_out_of_lives(&self) -> bool {
        self.lives < 1
    }

    pub fn summary(&self, wave: u32) -> SessionSummary {
        SessionSummary {
            seed: self.seed,
            score: self.score,
            lives: self.lives,
            wave,
            ticks: self.time_ticks,
        }
    }
}

/// Serializable end-of-run report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub score: u64,
    pub lives: u8,
    pub wave: u32,
    pub ticks: u64,
}
