//! Stationary boost pickups dropped by destroyed asteroids

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Hitbox;
use super::entity::{Bounds, Entity};
use crate::consts::PICKUP_SIZE;

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    Shield,
    Damage,
    /// Reserved for experience orbs; collecting one has no effect yet
    Xp,
}

impl PickupKind {
    /// Kinds that asteroids actually drop
    pub const DROPPABLE: [PickupKind; 2] = [PickupKind::Shield, PickupKind::Damage];

    pub fn random_drop(rng: &mut impl Rng) -> Self {
        Self::DROPPABLE[rng.random_range(0..Self::DROPPABLE.len())]
    }
}

/// A pickup entity. Pickups never move; the player collects them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PickupKind,
    pub pos: Vec2,
}

impl Pickup {
    pub fn new(kind: PickupKind, pos: Vec2) -> Self {
        Self { kind, pos }
    }
}

impl Entity for Pickup {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn velocity(&self) -> Vec2 {
        Vec2::ZERO
    }

    fn hitbox(&self) -> Hitbox {
        Hitbox::square(self.pos, PICKUP_SIZE)
    }

    fn update(&mut self, _dt: f32, _bounds: &Bounds) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_pickup_is_stationary() {
        let mut p = Pickup::new(PickupKind::Shield, Vec2::new(10.0, 20.0));
        p.update(1.0, &Bounds::new(800.0, 600.0));
        assert_eq!(p.pos, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_random_drop_never_xp() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut seen = [false; 2];
        for _ in 0..100 {
            match PickupKind::random_drop(&mut rng) {
                PickupKind::Shield => seen[0] = true,
                PickupKind::Damage => seen[1] = true,
                PickupKind::Xp => panic!("xp is never dropped"),
            }
        }
        assert!(seen[0] && seen[1]);
    }
}
