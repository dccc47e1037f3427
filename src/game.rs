//! Game state controller
//!
//! Mode machine driving one frame at a time:
//!
//! ```text
//! Start -> Waiting -> Running <-> Paused
//!                     Running -> GameOver -> Waiting
//! Waiting: Start/Resume -> Running, Retry -> Start, Quit -> Exit
//! ```
//!
//! Paused and GameOver only put a modal up and hand over to Waiting, which
//! blocks on a click.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::RESPAWN_DELAY;
use crate::platform::FrameInput;
use crate::settings::Settings;
use crate::sim::entity::Bounds;
use crate::sim::manager::AsteroidManager;
use crate::sim::player::Player;
use crate::sim::state::{GameEvent, GameSession, SessionSummary};
use crate::sim::tick::tick;
use crate::ui::{Modal, ModalKind, UiAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Fresh session, start modal goes up
    Start,
    /// Frozen behind a modal until a button is clicked
    Waiting,
    Running,
    Paused,
    GameOver,
    /// Loop should stop before the next render
    Exit,
}

pub struct Game {
    pub settings: Settings,
    pub mode: GameMode,
    pub session: GameSession,
    pub asteroids: AsteroidManager,
    /// Absent while waiting to respawn
    pub player: Option<Player>,
    /// Seconds left before the ship comes back
    pub respawn_timer: f32,
    /// Modal currently on screen
    pub modal: Option<Modal>,
    last_click: Option<UiAction>,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        let bounds = Bounds::new(settings.window_width, settings.window_height);
        let seed = settings.effective_seed();
        log::info!("New game (seed {:#x})", seed);
        Self {
            settings,
            mode: GameMode::Start,
            session: GameSession::new(bounds, seed),
            asteroids: AsteroidManager::new(),
            player: None,
            respawn_timer: 0.0,
            modal: None,
            last_click: None,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.session.bounds
    }

    pub fn is_running(&self) -> bool {
        self.mode != GameMode::Exit
    }

    /// Run one frame. `dt` is the frame time in seconds.
    pub fn update(&mut self, input: &FrameInput, dt: f32) {
        if input.quit {
            self.set_mode(GameMode::Exit);
            return;
        }

        match self.mode {
            GameMode::Start => self.enter_start(),
            GameMode::Waiting => self.update_waiting(input),
            GameMode::Running => self.update_running(input, dt),
            GameMode::Paused => {
                if input.toggle_pause {
                    self.resume();
                } else {
                    self.modal = Some(Modal::pause(&self.bounds()));
                    self.set_mode(GameMode::Waiting);
                }
            }
            GameMode::GameOver => {
                self.modal = Some(Modal::game_over(&self.bounds(), self.session.score));
                self.set_mode(GameMode::Waiting);
            }
            GameMode::Exit => {}
        }
    }

    fn enter_start(&mut self) {
        self.session.reset();
        let signal = self.asteroids.reset_game();
        log::debug!("Field reset: {:?}", signal);
        self.session.emit(GameEvent::WaveStarted {
            wave: self.asteroids.wave_number,
        });
        self.player = Some(Player::new(self.bounds().center()));
        self.respawn_timer = 0.0;
        self.last_click = None;
        self.modal = Some(Modal::start(&self.bounds()));
        self.set_mode(GameMode::Waiting);
    }

    fn update_waiting(&mut self, input: &FrameInput) {
        let paused = matches!(&self.modal, Some(m) if m.kind == ModalKind::Pause);
        if paused && input.toggle_pause {
            self.resume();
            return;
        }

        if let (Some(pos), Some(modal)) = (input.click, &self.modal) {
            if let Some(action) = modal.hit_test(pos) {
                self.last_click = Some(action);
            }
        }

        match self.last_click.take() {
            Some(UiAction::Start) | Some(UiAction::Resume) => self.resume(),
            Some(UiAction::Retry) => self.set_mode(GameMode::Start),
            Some(UiAction::Quit) => self.set_mode(GameMode::Exit),
            None => {}
        }
    }

    fn resume(&mut self) {
        self.modal = None;
        self.set_mode(GameMode::Running);
    }

    fn update_running(&mut self, input: &FrameInput, dt: f32) {
        if input.toggle_pause {
            self.set_mode(GameMode::Paused);
            return;
        }

        let Some(player) = self.player.as_mut() else {
            self.respawn_timer -= dt;
            if self.respawn_timer <= 0.0 {
                self.respawn();
            }
            return;
        };

        tick(player, &mut self.asteroids, &mut self.session, &input.tick, dt);

        if !player.alive {
            self.player = None;
            self.respawn_timer = RESPAWN_DELAY;
            if self.session.is_out_of_lives() {
                let score = self.session.score;
                log::info!("Game over, final score {}", score);
                self.session.emit(GameEvent::GameOver { score });
                self.set_mode(GameMode::GameOver);
            }
        }
    }

    fn respawn(&mut self) {
        self.asteroids.reset_game();
        self.session.emit(GameEvent::WaveStarted {
            wave: self.asteroids.wave_number,
        });
        self.player = Some(Player::new(self.bounds().center()));
        self.respawn_timer = 0.0;
        log::info!("Player respawned ({} lives)", self.session.lives);
        self.session.emit(GameEvent::PlayerRespawned);
    }

    fn set_mode(&mut self, mode: GameMode) {
        if self.mode != mode {
            log::info!("Mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.session.drain_events()
    }

    pub fn summary(&self) -> SessionSummary {
        self.session.summary(self.asteroids.wave_number)
    }

    /// Screen position of a button on the current modal
    pub fn button_position(&self, action: UiAction) -> Option<Vec2> {
        self.modal.as_ref()?.button_center(action)
    }
}
