//! One simulation step while the game is running
//!
//! Applies held input to the ship, advances the asteroid field, the ship
//! and every projectile by the frame delta, then resolves projectile hits.

use glam::Vec2;

use super::entity::Entity;
use super::manager::{AsteroidManager, WaveSignal};
use super::player::{Direction, Player};
use super::state::{GameEvent, GameSession};

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Movement keys held this frame
    pub moves: Vec<Direction>,
    /// Fire key or left mouse button held
    pub fire: bool,
    /// Pointer position the ship aims at
    pub pointer: Option<Vec2>,
}

/// Advance the running game by `dt` seconds. The player must be present.
pub fn tick(
    player: &mut Player,
    asteroids: &mut AsteroidManager,
    session: &mut GameSession,
    input: &TickInput,
    dt: f32,
) {
    session.time_ticks += 1;

    for &direction in &input.moves {
        player.move_in(direction);
    }
    if input.fire {
        player.shoot(session);
    }
    if let Some(pointer) = input.pointer {
        player.aim_at(pointer);
    }

    let bounds = session.bounds;
    match asteroids.update(dt, &bounds, &mut session.rng) {
        Some(WaveSignal::WaveStart) => session.emit(GameEvent::WaveStarted {
            wave: asteroids.wave_number,
        }),
        Some(WaveSignal::WaveEnd) => session.emit(GameEvent::WaveEnded {
            wave: asteroids.wave_number,
        }),
        None => {}
    }

    player.simulate(dt, asteroids, session);

    for projectile in &mut session.projectiles {
        projectile.update(dt, &bounds);
    }

    resolve_projectile_hits(asteroids, session);
}

/// Test every live projectile against the field; spent projectiles and
/// expired ones are dropped afterwards.
pub fn resolve_projectile_hits(asteroids: &mut AsteroidManager, session: &mut GameSession) {
    let bounds = session.bounds;
    let mut projectiles = std::mem::take(&mut session.projectiles);

    for projectile in projectiles.iter_mut().filter(|p| !p.destroyed) {
        let report = asteroids.handle_collision(projectile, &bounds, &mut session.rng);
        if !report.hit() {
            continue;
        }
        projectile.destroyed = true;
        session.score += report.points as u64;
        for size in report.destroyed {
            session.emit(GameEvent::AsteroidDestroyed { size });
        }
        session.pickups.extend(report.drops);
    }

    projectiles.retain(|p| !p.destroyed);
    session.projectiles = projectiles;
}
