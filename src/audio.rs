//! Audio system
//!
//! Sound effects are loaded once as handles; the backend only needs to play
//! a handle at a volume. Gameplay never calls in here directly: the runner
//! feeds each frame's `GameEvent`s through [`AudioManager::handle_events`].

use std::collections::HashMap;

use crate::assets::SoundHandle;
use crate::settings::Settings;
use crate::sim::state::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Regular shot
    Shoot,
    /// Shot fired under a damage boost
    ShootBoosted,
    /// Ship hit without a shield
    ShipDestroyed,
    /// Pickup collected
    PowerUp,
    /// Asteroid broken by a shot or a shield
    AsteroidBreak,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 5] = [
        SoundEffect::Shoot,
        SoundEffect::ShootBoosted,
        SoundEffect::ShipDestroyed,
        SoundEffect::PowerUp,
        SoundEffect::AsteroidBreak,
    ];

    pub fn path(self) -> &'static str {
        match self {
            SoundEffect::Shoot | SoundEffect::ShootBoosted => "assets/sounds/alienshoot1.wav",
            SoundEffect::ShipDestroyed => "assets/sounds/mechanical_explosion.wav",
            SoundEffect::PowerUp => "assets/sounds/power_up.wav",
            SoundEffect::AsteroidBreak => "assets/sounds/rock_break.wav",
        }
    }

    /// Per-effect mix level before master/sfx volume
    pub fn base_volume(self) -> f32 {
        match self {
            SoundEffect::Shoot => 0.5,
            SoundEffect::ShootBoosted => 0.7,
            SoundEffect::ShipDestroyed => 0.5,
            SoundEffect::PowerUp => 0.6,
            SoundEffect::AsteroidBreak => 0.4,
        }
    }

    /// Sound for a gameplay event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::ShotFired { boosted: false } => Some(SoundEffect::Shoot),
            GameEvent::ShotFired { boosted: true } => Some(SoundEffect::ShootBoosted),
            GameEvent::PlayerDestroyed => Some(SoundEffect::ShipDestroyed),
            GameEvent::PickupCollected { .. } => Some(SoundEffect::PowerUp),
            GameEvent::AsteroidDestroyed { .. } | GameEvent::ShieldBroken => {
                Some(SoundEffect::AsteroidBreak)
            }
            GameEvent::WaveStarted { .. }
            | GameEvent::WaveEnded { .. }
            | GameEvent::PlayerRespawned
            | GameEvent::GameOver { .. } => None,
        }
    }
}

/// Whatever actually makes noise
pub trait AudioBackend {
    fn play(&mut self, sound: SoundHandle, volume: f32);
}

/// Backend that drops everything
#[derive(Debug, Default)]
pub struct SilentBackend;

impl AudioBackend for SilentBackend {
    fn play(&mut self, _sound: SoundHandle, _volume: f32) {}
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    sounds: HashMap<SoundEffect, SoundHandle>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B, sounds: HashMap<SoundEffect, SoundHandle>, settings: &Settings) -> Self {
        let missing = SoundEffect::ALL
            .iter()
            .filter(|e| !sounds.contains_key(e))
            .count();
        if missing > 0 {
            log::warn!("{} sound effect(s) have no loaded sound", missing);
        }
        Self {
            backend,
            sounds,
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume() * effect.base_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(&handle) = self.sounds.get(&effect) else {
            return;
        };
        self.backend.play(handle, vol);
    }

    /// Play whatever this frame's events call for
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::asteroid::AsteroidSize;

    #[derive(Default)]
    struct Recorder {
        played: Vec<(SoundHandle, f32)>,
    }

    impl AudioBackend for Recorder {
        fn play(&mut self, sound: SoundHandle, volume: f32) {
            self.played.push((sound, volume));
        }
    }

    fn sounds() -> HashMap<SoundEffect, SoundHandle> {
        SoundEffect::ALL
            .iter()
            .enumerate()
            .map(|(i, &e)| (e, SoundHandle(i as u32)))
            .collect()
    }

    #[test]
    fn test_events_map_to_sounds() {
        let mut audio = AudioManager::new(Recorder::default(), sounds(), &Settings::default());
        audio.handle_events(&[
            GameEvent::ShotFired { boosted: false },
            GameEvent::WaveStarted { wave: 1 },
            GameEvent::AsteroidDestroyed {
                size: AsteroidSize::Large,
            },
        ]);
        let handles: Vec<_> = audio.backend().played.iter().map(|p| p.0).collect();
        assert_eq!(handles, vec![SoundHandle(0), SoundHandle(4)]);
    }

    #[test]
    fn test_volume_mixing() {
        let settings = Settings {
            master_volume: 0.5,
            sfx_volume: 0.5,
            ..Default::default()
        };
        let mut audio = AudioManager::new(Recorder::default(), sounds(), &settings);
        audio.play(SoundEffect::Shoot);
        let (_, vol) = audio.backend().played[0];
        assert!((vol - 0.125).abs() < 1e-6);
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut audio = AudioManager::new(Recorder::default(), sounds(), &Settings::default());
        audio.set_muted(true);
        audio.play(SoundEffect::PowerUp);
        assert!(audio.backend().played.is_empty());
    }

    #[test]
    fn test_missing_sound_is_skipped() {
        let settings = Settings::default();
        let mut audio = AudioManager::new(Recorder::default(), HashMap::new(), &settings);
        audio.play(SoundEffect::ShipDestroyed);
        assert!(audio.backend().played.is_empty());
    }
}
