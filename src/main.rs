//! Astro Drift - headless entry point
//!
//! Runs the real frame loop against in-memory assets, audio and renderer,
//! with an autopilot standing in for the keyboard and mouse. Prints a JSON
//! summary of the session when it stops.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::{env, path::PathBuf};

    use anyhow::{Context, Result, anyhow};
    use glam::Vec2;

    use astro_drift::assets::{Assets, MemoryProvider};
    use astro_drift::consts::PROJECTILE_SPEED;
    use astro_drift::audio::SilentBackend;
    use astro_drift::game::{Game, GameMode};
    use astro_drift::platform::{
        Clock, FixedClock, FrameLimiter, Input, InputEvent, Key, MouseButton,
    };
    use astro_drift::renderer::RecordingRenderer;
    use astro_drift::runner::Runner;
    use astro_drift::settings::Settings;
    use astro_drift::sim::entity::Entity;
    use astro_drift::ui::UiAction;

    /// Asteroids closer than this make the ship back off
    const DANGER_RADIUS: f32 = 180.0;
    /// Pickups worth detouring for
    const PICKUP_RADIUS: f32 = 250.0;
    /// Log progress every this many frames
    const REPORT_EVERY: u64 = 600;

    const USAGE: &str =
        "Usage: astro-drift [--frames <n>] [--seed <n>] [--config <settings.json>] [--realtime]";

    #[derive(Debug)]
    struct Cli {
        frames: u64,
        seed: Option<u64>,
        config: Option<PathBuf>,
        realtime: bool,
    }

    impl Cli {
        fn parse() -> Result<Self> {
            let mut args = env::args().skip(1);
            let mut frames = 3_600u64;
            let mut seed = None;
            let mut config = None;
            let mut realtime = false;

            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--frames" => {
                        let value = args
                            .next()
                            .ok_or_else(|| anyhow!("--frames requires a number"))?;
                        frames = value
                            .parse()
                            .with_context(|| format!("invalid --frames value: {value}"))?;
                    }
                    "--seed" => {
                        let value = args
                            .next()
                            .ok_or_else(|| anyhow!("--seed requires a number"))?;
                        seed = Some(
                            value
                                .parse()
                                .with_context(|| format!("invalid --seed value: {value}"))?,
                        );
                    }
                    "--config" => {
                        let value = args
                            .next()
                            .ok_or_else(|| anyhow!("--config requires a file path"))?;
                        config = Some(PathBuf::from(value));
                    }
                    "--realtime" => realtime = true,
                    "-h" | "--help" => {
                        println!("{USAGE}");
                        std::process::exit(0);
                    }
                    other => {
                        return Err(anyhow!("unknown argument: {other}. Use --help for usage."));
                    }
                }
            }

            Ok(Self {
                frames,
                seed,
                config,
                realtime,
            })
        }
    }

    /// Plays the game: clicks through modals, keeps away from nearby rocks,
    /// detours for pickups and shoots at the closest asteroid.
    #[derive(Debug, Default)]
    struct Autopilot {
        pending: Vec<InputEvent>,
        held: Vec<Key>,
        firing: bool,
        pointer: Vec2,
    }

    impl Autopilot {
        fn observe(&mut self, game: &Game) {
            self.held.clear();
            self.firing = false;

            if game.mode == GameMode::Waiting {
                let button = [UiAction::Start, UiAction::Resume, UiAction::Retry]
                    .into_iter()
                    .find_map(|action| game.button_position(action));
                if let Some(pos) = button {
                    self.pending.push(InputEvent::MouseClick(pos));
                }
                return;
            }

            let Some(player) = &game.player else { return };
            let ship = player.position();

            let nearest = game.asteroids.asteroids.iter().min_by(|a, b| {
                a.position()
                    .distance(ship)
                    .partial_cmp(&b.position().distance(ship))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            let mut heading = Vec2::ZERO;
            if let Some(rock) = nearest {
                self.pointer = lead_target(ship, rock);
                self.firing = true;
                if rock.position().distance(ship) < DANGER_RADIUS {
                    heading = ship - rock.position();
                }
            }

            if heading == Vec2::ZERO {
                let pickup = game
                    .session
                    .pickups
                    .iter()
                    .map(|p| p.position())
                    .filter(|p| p.distance(ship) < PICKUP_RADIUS)
                    .min_by(|a, b| {
                        a.distance(ship)
                            .partial_cmp(&b.distance(ship))
                            .unwrap_or(std::cmp::Ordering::Equal)
                    });
                if let Some(target) = pickup {
                    heading = target - ship;
                }
            }

            // Drift back toward the middle when nothing else is going on
            if heading == Vec2::ZERO {
                heading = game.bounds().center() - ship;
                if heading.length() < 50.0 {
                    heading = Vec2::ZERO;
                }
            }

            if heading.x > 1.0 {
                self.held.push(Key::D);
            } else if heading.x < -1.0 {
                self.held.push(Key::A);
            }
            if heading.y > 1.0 {
                self.held.push(Key::S);
            } else if heading.y < -1.0 {
                self.held.push(Key::W);
            }
        }
    }

    /// Where `target` will be by the time a shot from `ship` reaches it
    fn lead_target(ship: Vec2, target: &impl Entity) -> Vec2 {
        let flight = target.position().distance(ship) / PROJECTILE_SPEED;
        target.position() + target.velocity() * flight
    }

    impl Input for Autopilot {
        fn poll_events(&mut self) -> Vec<InputEvent> {
            std::mem::take(&mut self.pending)
        }

        fn is_key_held(&self, key: Key) -> bool {
            self.held.contains(&key) || (key == Key::Space && self.firing)
        }

        fn is_mouse_held(&self, _button: MouseButton) -> bool {
            false
        }

        fn mouse_position(&self) -> Vec2 {
            self.pointer
        }
    }

    fn drive<C: Clock>(game: Game, clock: C, assets: Assets, frames: u64) -> Result<()> {
        let mut runner = Runner::new(
            game,
            Autopilot::default(),
            clock,
            RecordingRenderer::default(),
            SilentBackend,
            assets,
        );

        while runner.frames < frames {
            runner.input.observe(&runner.game);
            if !runner.run_frame() {
                break;
            }
            if runner.frames % REPORT_EVERY == 0 {
                let summary = runner.game.summary();
                log::info!(
                    "frame {}: wave {}, score {}, lives {}",
                    runner.frames,
                    summary.wave,
                    summary.score,
                    summary.lives
                );
            }
        }

        let summary = runner.game.summary();
        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }


    pub fn run() -> Result<()> {
        let cli = Cli::parse()?;

        let mut settings = match &cli.config {
            Some(path) => Settings::load_from(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => Settings::default(),
        };
        if cli.seed.is_some() {
            settings.seed = cli.seed;
        }

        let assets = Assets::load(&mut MemoryProvider::new()).context("loading assets")?;
        let game = Game::new(settings);

        log::info!("Running {} frames (realtime: {})", cli.frames, cli.realtime);
        if cli.realtime {
            drive(game, FrameLimiter::new(), assets, cli.frames)
        } else {
            drive(game, FixedClock::default(), assets, cli.frames)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Astro Drift (headless) starting...");
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is embedded by a host instead
}
