//! Frame loop
//!
//! One thread, one frame at a time: wait on the clock, poll input, update
//! the controller, play sounds, render. A quit seen during the update stops
//! the loop before anything else is drawn.

use crate::assets::Assets;
use crate::audio::{AudioBackend, AudioManager};
use crate::game::Game;
use crate::platform::{Clock, FrameInput, Input};
use crate::renderer::{FrameStats, Renderer, render_frame};
use crate::sim::state::SessionSummary;

/// Longest delta fed to the simulation, in seconds
pub const MAX_FRAME_DT: f32 = 0.1;

/// Simulation delta in seconds for a frame that took `elapsed_ms`.
/// A stall longer than [`MAX_FRAME_DT`] is simulated as that long.
pub fn frame_delta(elapsed_ms: f32) -> f32 {
    (elapsed_ms / 1000.0).min(MAX_FRAME_DT)
}

const FPS_WINDOW: usize = 60;

/// Rolling average over the last second of frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f32; FPS_WINDOW],
    frame_index: usize,
    filled: usize,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            filled: 0,
        }
    }
}

impl FpsCounter {
    /// Record one frame time in milliseconds
    pub fn push(&mut self, elapsed_ms: f32) {
        self.frame_times[self.frame_index] = elapsed_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.filled = (self.filled + 1).min(FPS_WINDOW);
    }

    pub fn fps(&self) -> u32 {
        let total: f32 = self.frame_times[..self.filled].iter().sum();
        if total <= 0.0 {
            return 0;
        }
        (self.filled as f32 * 1000.0 / total).round() as u32
    }
}

pub struct Runner<I: Input, C: Clock, R: Renderer, B: AudioBackend> {
    pub game: Game,
    pub input: I,
    pub clock: C,
    pub renderer: R,
    pub audio: AudioManager<B>,
    pub assets: Assets,
    pub fps: FpsCounter,
    /// Frames completed
    pub frames: u64,
}

impl<I: Input, C: Clock, R: Renderer, B: AudioBackend> Runner<I, C, R, B> {
    pub fn new(game: Game, input: I, clock: C, renderer: R, backend: B, assets: Assets) -> Self {
        let audio = AudioManager::new(backend, assets.sounds.clone(), &game.settings);
        Self {
            game,
            input,
            clock,
            renderer,
            audio,
            assets,
            fps: FpsCounter::default(),
            frames: 0,
        }
    }

    /// Run a single frame. Returns false once the game wants to exit.
    pub fn run_frame(&mut self) -> bool {
        let elapsed_ms = self.clock.tick(self.game.settings.target_fps);
        self.fps.push(elapsed_ms);
        let dt = frame_delta(elapsed_ms);

        let input = FrameInput::poll(&mut self.input);
        self.game.update(&input, dt);

        let events = self.game.drain_events();
        self.audio.handle_events(&events);

        if !self.game.is_running() {
            log::info!("Exit requested after {} frames", self.frames);
            return false;
        }

        let stats = FrameStats {
            fps: self.fps.fps(),
        };
        render_frame(&mut self.renderer, &self.game, &self.assets, &stats);
        self.frames += 1;
        true
    }

    /// Run until exit or until `max_frames` frames have been drawn
    pub fn run(&mut self, max_frames: Option<u64>) -> SessionSummary {
        while max_frames.is_none_or(|max| self.frames < max) {
            if !self.run_frame() {
                break;
            }
        }
        self.game.summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MemoryProvider;
    use crate::audio::SilentBackend;
    use crate::platform::{FixedClock, InputEvent, Key, MouseButton};
    use crate::renderer::RecordingRenderer;
    use crate::settings::Settings;
    use glam::Vec2;

    #[derive(Default)]
    struct QueueInput {
        events: Vec<Vec<InputEvent>>,
    }

    impl Input for QueueInput {
        fn poll_events(&mut self) -> Vec<InputEvent> {
            if self.events.is_empty() {
                Vec::new()
            } else {
                self.events.remove(0)
            }
        }
        fn is_key_held(&self, _key: Key) -> bool {
            false
        }
        fn is_mouse_held(&self, _button: MouseButton) -> bool {
            false
        }
        fn mouse_position(&self) -> Vec2 {
            Vec2::ZERO
        }
    }

    type TestRunner = Runner<QueueInput, FixedClock, RecordingRenderer, SilentBackend>;

    fn runner(input: QueueInput) -> TestRunner {
        let assets = Assets::load(&mut MemoryProvider::new()).unwrap();
        Runner::new(
            Game::new(Settings::default()),
            input,
            FixedClock::default(),
            RecordingRenderer::default(),
            SilentBackend,
            assets,
        )
    }

    #[test]
    fn test_quit_stops_before_render() {
        let input = QueueInput {
            events: vec![vec![], vec![InputEvent::Quit]],
        };
        let mut runner = runner(input);
        assert!(runner.run_frame());
        assert!(!runner.run_frame());
        assert_eq!(runner.renderer.frames, 1);
    }

    #[test]
    fn test_run_respects_frame_cap() {
        let mut runner = runner(QueueInput::default());
        let summary = runner.run(Some(30));
        assert_eq!(runner.frames, 30);
        assert_eq!(summary.lives, 3);
        assert_eq!(runner.clock.frames, 30);
    }

    #[test]
    fn test_frame_delta_uses_elapsed_time_up_to_cap() {
        assert!((frame_delta(1000.0 / 60.0) - 1.0 / 60.0).abs() < 1e-6);
        assert!((frame_delta(40.0) - 0.04).abs() < 1e-6);
        assert_eq!(frame_delta(100.0), MAX_FRAME_DT);
        assert_eq!(frame_delta(750.0), MAX_FRAME_DT);
    }

    #[test]
    fn test_fps_counter() {
        let mut fps = FpsCounter::default();
        assert_eq!(fps.fps(), 0);
        for _ in 0..120 {
            fps.push(1000.0 / 60.0);
        }
        assert_eq!(fps.fps(), 60);
        fps.push(1000.0 / 30.0);
        assert_eq!(fps.fps(), 59);
    }
}
