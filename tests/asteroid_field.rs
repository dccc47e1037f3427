//! Asteroid field scenarios driven through the public simulation API.
//!
//! Covered scenarios:
//! 1. Shooting a medium asteroid apart splits it into two small fragments.
//! 2. A boosted projectile kills the same asteroid in one hit.
//! 3. The wave cycle ramps the spawn rate up to its cap.

use astro_drift::sim::{
    AsteroidManager, AsteroidSize, Bounds, GameSession, Projectile, WaveSignal,
    resolve_projectile_hits,
};
use glam::Vec2;

const FIELD: Bounds = Bounds {
    width: 800.0,
    height: 600.0,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn session() -> GameSession {
    GameSession::new(FIELD, 1234)
}

fn medium_at_center(manager: &mut AsteroidManager, session: &mut GameSession) {
    manager.spawn_asteroid(
        Some(Vec2::new(400.0, 300.0)),
        Some(AsteroidSize::Medium),
        &FIELD,
        &mut session.rng,
    );
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// Two regular hits break a medium asteroid into two small ones offset by
/// (+20, +20) and (-20, -20), worth 20 points.
#[test]
fn medium_asteroid_splits_after_enough_damage() {
    let mut session = session();
    let mut manager = AsteroidManager::new();
    medium_at_center(&mut manager, &mut session);
    let shot = Projectile::new(Vec2::new(400.0, 300.0), 0.0, false);

    let first = manager.handle_collision(&shot, &FIELD, &mut session.rng);
    assert!(first.hit());
    assert_eq!(first.points, 0);
    assert_eq!(manager.asteroids.len(), 1);
    assert_eq!(manager.asteroids[0].health, 10);

    let second = manager.handle_collision(&shot, &FIELD, &mut session.rng);
    assert_eq!(second.points, 20);
    assert_eq!(second.destroyed, vec![AsteroidSize::Medium]);

    let mut positions: Vec<Vec2> = manager.asteroids.iter().map(|a| a.pos).collect();
    positions.sort_by(|a, b| a.x.total_cmp(&b.x));
    assert_eq!(positions, vec![Vec2::new(380.0, 280.0), Vec2::new(420.0, 320.0)]);
    assert!(manager.asteroids.iter().all(|a| a.size == AsteroidSize::Small));
}

/// Boosted shots carry triple damage from the moment they were fired.
#[test]
fn boosted_projectile_one_shots_a_medium() {
    let mut session = session();
    let mut manager = AsteroidManager::new();
    medium_at_center(&mut manager, &mut session);
    session
        .projectiles
        .push(Projectile::new(Vec2::new(400.0, 300.0), 90.0, true));

    resolve_projectile_hits(&mut manager, &mut session);
    assert_eq!(session.score, 20);
    assert!(session.projectiles.is_empty());
    assert_eq!(manager.asteroids.len(), 2);
}

/// Waves alternate with breaks and the spawn rate grows 0.2 per wave up to 3.
#[test]
fn wave_cycle_ramps_spawn_rate() {
    let mut session = session();
    let mut manager = AsteroidManager::new();
    manager.start_game();
    assert_eq!(manager.spawn_rate, 1.0);

    let mut last_rate = manager.spawn_rate;
    for wave in 2..=12u32 {
        manager.wave_timer = manager.wave_duration;
        assert_eq!(
            manager.update(0.0, &FIELD, &mut session.rng),
            Some(WaveSignal::WaveEnd)
        );
        manager.wave_timer = manager.break_duration;
        assert_eq!(
            manager.update(0.0, &FIELD, &mut session.rng),
            Some(WaveSignal::WaveStart)
        );
        assert_eq!(manager.wave_number, wave);
        assert!(manager.spawn_rate >= last_rate);
        assert!(manager.spawn_rate <= 3.0);
        last_rate = manager.spawn_rate;
    }
    assert_eq!(manager.spawn_rate, 3.0);
}
