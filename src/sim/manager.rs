//! Asteroid field ownership and wave scheduling
//!
//! Waves alternate with breaks: during a wave asteroids spawn at
//! `spawn_rate` per second, during a break nothing spawns. Each new wave
//! raises the rate up to a cap.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::asteroid::{Asteroid, AsteroidSize};
use super::collision::{Hitbox, overlapping_indices};
use super::entity::{Bounds, Entity};
use super::pickup::{Pickup, PickupKind};
use super::projectile::Projectile;
use crate::consts::*;

/// Wave transitions reported by the manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveSignal {
    WaveStart,
    WaveEnd,
}

/// Outcome of resolving one projectile against the field
#[derive(Debug, Clone, Default)]
pub struct HitReport {
    /// Asteroids the projectile overlapped
    pub hits: usize,
    /// Points from asteroids destroyed by this projectile
    pub points: u32,
    /// Sizes of the asteroids destroyed
    pub destroyed: Vec<AsteroidSize>,
    /// Pickups dropped where asteroids died
    pub drops: Vec<Pickup>,
}

impl HitReport {
    pub fn hit(&self) -> bool {
        self.hits > 0
    }
}

/// Spawn rate for a wave, capped
pub fn spawn_rate_for_wave(wave: u32) -> f32 {
    (BASE_SPAWN_RATE + SPAWN_RATE_PER_WAVE * wave as f32).min(MAX_SPAWN_RATE)
}

/// Owns the live asteroids and the wave timers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsteroidManager {
    pub asteroids: Vec<Asteroid>,
    /// Seconds since the last spawn
    pub spawn_timer: f32,
    /// Asteroids per second while a wave is active
    pub spawn_rate: f32,
    pub wave_number: u32,
    /// Seconds into the current wave or break
    pub wave_timer: f32,
    pub wave_active: bool,
    pub wave_duration: f32,
    pub break_duration: f32,
}

impl Default for AsteroidManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AsteroidManager {
    pub fn new() -> Self {
        Self {
            asteroids: Vec::new(),
            spawn_timer: 0.0,
            spawn_rate: BASE_SPAWN_RATE,
            wave_number: 0,
            wave_timer: 0.0,
            wave_active: false,
            wave_duration: WAVE_DURATION,
            break_duration: BREAK_DURATION,
        }
    }

    /// Begin wave 1
    pub fn start_game(&mut self) -> WaveSignal {
        self.wave_active = true;
        self.wave_timer = 0.0;
        self.wave_number = 1;
        self.spawn_rate = BASE_SPAWN_RATE;
        log::info!("Wave {} started", self.wave_number);
        WaveSignal::WaveStart
    }

    /// Clear the field and restart the wave cycle
    pub fn reset_game(&mut self) -> WaveSignal {
        self.asteroids.clear();
        self.spawn_timer = 0.0;
        self.start_game()
    }

    /// Advance timers and asteroids by `dt` seconds
    pub fn update(&mut self, dt: f32, bounds: &Bounds, rng: &mut impl Rng) -> Option<WaveSignal> {
        for asteroid in &mut self.asteroids {
            asteroid.update(dt, bounds);
        }

        self.wave_timer += dt;

        if self.wave_active && self.wave_timer >= self.wave_duration {
            self.wave_active = false;
            self.wave_timer = 0.0;
            log::info!("Wave {} ended", self.wave_number);
            return Some(WaveSignal::WaveEnd);
        }

        if self.wave_active {
            self.spawn_timer += dt;
            if self.spawn_timer >= 1.0 / self.spawn_rate {
                self.spawn_asteroid(None, None, bounds, rng);
                self.spawn_timer = 0.0;
            }
            return None;
        }

        if self.wave_timer >= self.break_duration {
            self.wave_number += 1;
            self.spawn_rate = spawn_rate_for_wave(self.wave_number);
            self.wave_timer = 0.0;
            self.wave_active = true;
            log::info!(
                "Wave {} started ({:.1} asteroids/s)",
                self.wave_number,
                self.spawn_rate
            );
            return Some(WaveSignal::WaveStart);
        }

        None
    }

    /// Add an asteroid; unspecified size uses the weighted wave pick
    pub fn spawn_asteroid(
        &mut self,
        pos: Option<Vec2>,
        size: Option<AsteroidSize>,
        bounds: &Bounds,
        rng: &mut impl Rng,
    ) -> &Asteroid {
        let size = size.unwrap_or_else(|| AsteroidSize::random_spawn(rng));
        let asteroid = Asteroid::new(pos, size, None, bounds, rng);
        log::debug!("Spawned {:?} asteroid at {:?}", size, asteroid.pos);
        self.asteroids.push(asteroid);
        &self.asteroids[self.asteroids.len() - 1]
    }

    /// Indices of asteroids overlapping a hitbox
    pub fn overlapping(&self, hitbox: &Hitbox) -> Vec<usize> {
        overlapping_indices(hitbox, &self.asteroids)
    }

    /// Damage every asteroid the projectile overlaps.
    ///
    /// Destroyed asteroids award their points, leave their fragments in the
    /// field and may drop a pickup. Fragments created here are not tested
    /// against the same projectile.
    pub fn handle_collision(
        &mut self,
        projectile: &Projectile,
        bounds: &Bounds,
        rng: &mut impl Rng,
    ) -> HitReport {
        let hit_indices = self.overlapping(&projectile.hitbox());
        let mut report = HitReport {
            hits: hit_indices.len(),
            ..Default::default()
        };

        let mut dead = Vec::new();
        for idx in hit_indices {
            if self.asteroids[idx].take_damage(projectile.damage()) {
                dead.push(idx);
            }
        }

        let mut fragments = Vec::new();
        for idx in dead.into_iter().rev() {
            let asteroid = self.asteroids.remove(idx);
            report.points += asteroid.points;
            report.destroyed.push(asteroid.size);
            fragments.extend(asteroid.split(bounds, rng));
            if rng.random_bool(PICKUP_DROP_CHANCE) {
                let kind = PickupKind::random_drop(rng);
                log::debug!("{:?} pickup dropped at {:?}", kind, asteroid.pos);
                report.drops.push(Pickup::new(kind, asteroid.pos));
            }
        }
        self.asteroids.extend(fragments);

        report
    }

    /// Remove every asteroid overlapping `hitbox` without splitting.
    /// Returns how many were removed.
    pub fn destroy_overlapping(&mut self, hitbox: &Hitbox) -> usize {
        let before = self.asteroids.len();
        self.asteroids.retain(|a| !hitbox.overlaps(&a.hitbox()));
        before - self.asteroids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const FIELD: Bounds = Bounds {
        width: 800.0,
        height: 600.0,
    };

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    fn place(manager: &mut AsteroidManager, pos: Vec2, size: AsteroidSize, rng: &mut Pcg32) {
        manager.spawn_asteroid(Some(pos), Some(size), &FIELD, rng);
    }

    #[test]
    fn test_initial_state() {
        let manager = AsteroidManager::new();
        assert_eq!(manager.spawn_rate, 1.0);
        assert_eq!(manager.wave_number, 0);
        assert!(!manager.wave_active);
    }

    #[test]
    fn test_start_game() {
        let mut manager = AsteroidManager::new();
        assert_eq!(manager.start_game(), WaveSignal::WaveStart);
        assert!(manager.wave_active);
        assert_eq!(manager.wave_number, 1);
        assert_eq!(manager.spawn_rate, 1.0);
    }

    #[test]
    fn test_wave_cycle() {
        let mut rng = rng();
        let mut manager = AsteroidManager::new();
        manager.start_game();

        assert_eq!(manager.update(WAVE_DURATION, &FIELD, &mut rng), Some(WaveSignal::WaveEnd));
        assert!(!manager.wave_active);
        assert_eq!(manager.wave_timer, 0.0);

        // Mid-break: nothing happens
        assert_eq!(manager.update(BREAK_DURATION / 2.0, &FIELD, &mut rng), None);
        assert!(!manager.wave_active);

        assert_eq!(
            manager.update(BREAK_DURATION / 2.0, &FIELD, &mut rng),
            Some(WaveSignal::WaveStart)
        );
        assert!(manager.wave_active);
        assert_eq!(manager.wave_number, 2);
        assert!((manager.spawn_rate - 1.4).abs() < 1e-5);
    }

    #[test]
    fn test_spawn_rate_caps() {
        assert!((spawn_rate_for_wave(1) - 1.2).abs() < 1e-5);
        assert!((spawn_rate_for_wave(10) - 3.0).abs() < 1e-5);
        assert_eq!(spawn_rate_for_wave(50), MAX_SPAWN_RATE);
    }

    #[test]
    fn test_spawns_once_per_interval() {
        let mut rng = rng();
        let mut manager = AsteroidManager::new();
        manager.start_game();

        manager.update(0.5, &FIELD, &mut rng);
        assert!(manager.asteroids.is_empty());
        manager.update(0.5, &FIELD, &mut rng);
        assert_eq!(manager.asteroids.len(), 1);
        assert_eq!(manager.spawn_timer, 0.0);
    }

    #[test]
    fn test_no_spawns_during_break() {
        let mut rng = rng();
        let mut manager = AsteroidManager::new();
        manager.start_game();
        manager.update(WAVE_DURATION, &FIELD, &mut rng);
        let count = manager.asteroids.len();
        for _ in 0..5 {
            manager.update(1.0, &FIELD, &mut rng);
        }
        assert_eq!(manager.asteroids.len(), count);
    }

    #[test]
    fn test_spawn_asteroid_adds_to_field() {
        let mut rng = rng();
        let mut manager = AsteroidManager::new();
        let size = manager
            .spawn_asteroid(
                Some(Vec2::new(10.0, 10.0)),
                Some(AsteroidSize::Large),
                &FIELD,
                &mut rng,
            )
            .size;
        assert_eq!(size, AsteroidSize::Large);
        manager.spawn_asteroid(None, None, &FIELD, &mut rng);
        assert_eq!(manager.asteroids.len(), 2);
    }

    #[test]
    fn test_handle_collision_splits_and_scores() {
        let mut rng = rng();
        let mut manager = AsteroidManager::new();
        place(&mut manager, Vec2::new(400.0, 300.0), AsteroidSize::Medium, &mut rng);
        let projectile = Projectile::new(Vec2::new(400.0, 300.0), 0.0, false);

        let first = manager.handle_collision(&projectile, &FIELD, &mut rng);
        assert!(first.hit());
        assert_eq!(first.points, 0);
        assert_eq!(manager.asteroids.len(), 1);
        assert_eq!(manager.asteroids[0].health, 10);

        let second = manager.handle_collision(&projectile, &FIELD, &mut rng);
        assert_eq!(second.points, 20);
        assert_eq!(second.destroyed, vec![AsteroidSize::Medium]);
        assert_eq!(manager.asteroids.len(), 2);
        let positions: Vec<Vec2> = manager.asteroids.iter().map(|a| a.pos).collect();
        assert!(positions.contains(&Vec2::new(420.0, 320.0)));
        assert!(positions.contains(&Vec2::new(380.0, 280.0)));
        assert!(manager.asteroids.iter().all(|a| a.size == AsteroidSize::Small));
    }

    #[test]
    fn test_handle_collision_hits_every_overlap() {
        let mut rng = rng();
        let mut manager = AsteroidManager::new();
        for _ in 0..3 {
            place(&mut manager, Vec2::new(200.0, 200.0), AsteroidSize::Small, &mut rng);
        }
        place(&mut manager, Vec2::new(600.0, 500.0), AsteroidSize::Small, &mut rng);

        let projectile = Projectile::new(Vec2::new(200.0, 200.0), 0.0, false);
        let report = manager.handle_collision(&projectile, &FIELD, &mut rng);
        assert_eq!(report.hits, 3);
        assert_eq!(report.points, 30);
        assert_eq!(manager.asteroids.len(), 1);
        assert!(report.drops.iter().all(|d| d.pos == Vec2::new(200.0, 200.0)));
    }

    #[test]
    fn test_boosted_projectile_one_shots_large() {
        let mut rng = rng();
        let mut manager = AsteroidManager::new();
        place(&mut manager, Vec2::new(400.0, 300.0), AsteroidSize::Large, &mut rng);
        let projectile = Projectile::new(Vec2::new(400.0, 300.0), 0.0, true);
        let report = manager.handle_collision(&projectile, &FIELD, &mut rng);
        assert_eq!(report.points, 30);
        assert_eq!(manager.asteroids.len(), 2);
    }

    #[test]
    fn test_miss_reports_nothing() {
        let mut rng = rng();
        let mut manager = AsteroidManager::new();
        place(&mut manager, Vec2::new(400.0, 300.0), AsteroidSize::Large, &mut rng);
        let projectile = Projectile::new(Vec2::new(10.0, 10.0), 0.0, false);
        let report = manager.handle_collision(&projectile, &FIELD, &mut rng);
        assert!(!report.hit());
        assert_eq!(manager.asteroids[0].health, 30);
    }

    #[test]
    fn test_reset_game_clears_field() {
        let mut rng = rng();
        let mut manager = AsteroidManager::new();
        manager.start_game();
        manager.update(WAVE_DURATION, &FIELD, &mut rng);
        manager.update(BREAK_DURATION, &FIELD, &mut rng);
        manager.spawn_asteroid(None, None, &FIELD, &mut rng);
        assert_eq!(manager.reset_game(), WaveSignal::WaveStart);
        assert!(manager.asteroids.is_empty());
        assert_eq!(manager.wave_number, 1);
        assert!(manager.wave_active);
    }
}
