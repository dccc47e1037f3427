//! Sprite and sound handles
//!
//! Everything is loaded once at startup through an [`AssetProvider`]. A
//! missing file fails the whole load; the game cannot run without art.

use std::collections::HashMap;

use crate::audio::SoundEffect;
use crate::error::AssetError;
use crate::sim::asteroid::{Asteroid, AsteroidSize};
use crate::sim::pickup::PickupKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundHandle(pub u32);

/// Host-side loader for image and sound files
pub trait AssetProvider {
    fn load_image(&mut self, path: &str) -> Result<ImageHandle, AssetError>;
    fn load_sound(&mut self, path: &str) -> Result<SoundHandle, AssetError>;
}

pub const BACKGROUND_PATH: &str = "assets/art/background.png";
pub const PLAYER_PATH: &str = "assets/art/spaceships/bgbattleship.png";
pub const SHIELD_PATH: &str = "assets/art/effects/shield.png";
pub const PROJECTILE_PATH: &str = "assets/art/projectiles/laserBullet.png";

pub fn pickup_path(kind: PickupKind) -> &'static str {
    match kind {
        PickupKind::Shield => "assets/art/pickups/shield.png",
        PickupKind::Damage => "assets/art/pickups/damage.png",
        PickupKind::Xp => "assets/art/pickups/xp.png",
    }
}

/// First frame of an asteroid variant's sprite sheet
pub fn asteroid_path(size: AsteroidSize, variant: &str) -> String {
    format!("assets/art/asteroids/{}/{}0000.png", size.category(), variant)
}

/// Loaded handle table
#[derive(Debug, Clone)]
pub struct Assets {
    pub background: ImageHandle,
    pub player: ImageHandle,
    pub shield: ImageHandle,
    pub projectile: ImageHandle,
    pickups: HashMap<PickupKind, ImageHandle>,
    /// Keyed by `Asteroid::sprite_key`
    asteroids: HashMap<String, ImageHandle>,
    pub sounds: HashMap<SoundEffect, SoundHandle>,
}

impl Assets {
    /// Load every sprite and sound, stopping at the first failure
    pub fn load<P: AssetProvider + ?Sized>(provider: &mut P) -> Result<Self, AssetError> {
        let background = provider.load_image(BACKGROUND_PATH)?;
        let player = provider.load_image(PLAYER_PATH)?;
        let shield = provider.load_image(SHIELD_PATH)?;
        let projectile = provider.load_image(PROJECTILE_PATH)?;

        let mut pickups = HashMap::new();
        for kind in [PickupKind::Shield, PickupKind::Damage, PickupKind::Xp] {
            pickups.insert(kind, provider.load_image(pickup_path(kind))?);
        }

        let mut asteroids = HashMap::new();
        for size in AsteroidSize::ALL {
            for variant in size.variants() {
                let handle = provider.load_image(&asteroid_path(size, variant))?;
                asteroids.insert(format!("{}/{}", size.category(), variant), handle);
            }
        }

        let mut sounds = HashMap::new();
        for effect in SoundEffect::ALL {
            sounds.insert(effect, provider.load_sound(effect.path())?);
        }

        log::info!(
            "Loaded {} images, {} sounds",
            4 + pickups.len() + asteroids.len(),
            sounds.len()
        );

        Ok(Self {
            background,
            player,
            shield,
            projectile,
            pickups,
            asteroids,
            sounds,
        })
    }

    pub fn pickup(&self, kind: PickupKind) -> Option<ImageHandle> {
        self.pickups.get(&kind).copied()
    }

    pub fn asteroid(&self, asteroid: &Asteroid) -> Option<ImageHandle> {
        self.asteroids.get(&asteroid.sprite_key()).copied()
    }
}

/// Provider that hands out sequential handles without touching disk.
/// Paths listed in `missing` fail with `NotFound`.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    next: u32,
    pub loaded: Vec<String>,
    pub missing: Vec<String>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn issue(&mut self, path: &str) -> Result<u32, AssetError> {
        if self.missing.iter().any(|m| m == path) {
            return Err(AssetError::NotFound {
                path: path.to_string(),
            });
        }
        self.loaded.push(path.to_string());
        self.next += 1;
        Ok(self.next)
    }
}

impl AssetProvider for MemoryProvider {
    fn load_image(&mut self, path: &str) -> Result<ImageHandle, AssetError> {
        self.issue(path).map(ImageHandle)
    }

    fn load_sound(&mut self, path: &str) -> Result<SoundHandle, AssetError> {
        self.issue(path).map(SoundHandle)
    }
}
