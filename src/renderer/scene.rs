//! Per-frame scene submission

use glam::Vec2;

use super::{Color, Renderer};
use crate::assets::Assets;
use crate::game::{Game, GameMode};
use crate::sim::entity::Entity;
use crate::ui::Modal;

const HUD_ORIGIN: Vec2 = Vec2::new(16.0, 16.0);
const HUD_LINE: f32 = 28.0;

/// Loop measurements shown on the HUD
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    pub fps: u32,
}

/// Draw the whole frame back to front and present it
pub fn render_frame<R: Renderer + ?Sized>(
    renderer: &mut R,
    game: &Game,
    assets: &Assets,
    stats: &FrameStats,
) {
    let bounds = game.bounds();
    renderer.draw_sprite(assets.background, bounds.center(), 0.0);

    for pickup in &game.session.pickups {
        if let Some(image) = assets.pickup(pickup.kind) {
            renderer.draw_sprite(image, pickup.position(), pickup.sprite_rotation());
        }
    }

    for asteroid in &game.asteroids.asteroids {
        if let Some(image) = assets.asteroid(asteroid) {
            renderer.draw_sprite(image, asteroid.position(), asteroid.sprite_rotation());
        }
    }

    for projectile in &game.session.projectiles {
        let rotation = projectile.sprite_rotation();
        renderer.draw_sprite(assets.projectile, projectile.position(), rotation);
    }

    if let Some(player) = &game.player {
        renderer.draw_sprite(assets.player, player.position(), player.sprite_rotation());
        if let Some(shield) = &player.shield {
            renderer.draw_sprite(assets.shield, shield.position(), 0.0);
        }
    }

    draw_hud(renderer, game, stats);

    if let Some(modal) = &game.modal {
        draw_modal(renderer, modal);
    }

    renderer.present();
}

fn draw_hud<R: Renderer + ?Sized>(renderer: &mut R, game: &Game, stats: &FrameStats) {
    let lines = [
        format!("Score: {}", game.session.score),
        format!("Lives: {}", game.session.lives),
        format!("Wave: {}", game.asteroids.wave_number),
    ];
    for (i, line) in lines.iter().enumerate() {
        renderer.draw_text(line, HUD_ORIGIN + Vec2::new(0.0, i as f32 * HUD_LINE), Color::WHITE);
    }

    if game.settings.show_fps {
        let pos = Vec2::new(game.bounds().width - 120.0, HUD_ORIGIN.y);
        renderer.draw_text(&format!("FPS: {}", stats.fps), pos, Color::GREY);
    }

    if game.mode == GameMode::Running && game.player.is_none() {
        let text = format!("Respawning in {:.1}", game.respawn_timer.max(0.0));
        renderer.draw_text(&text, game.bounds().center(), Color::RED);
    }
}

fn draw_modal<R: Renderer + ?Sized>(renderer: &mut R, modal: &Modal) {
    let title_pos = modal.origin + Vec2::new(modal.size.x * 0.5, 60.0);
    renderer.draw_text(&modal.title, title_pos, Color::YELLOW);

    if let Some(body) = &modal.body {
        renderer.draw_text(body, title_pos + Vec2::new(0.0, 60.0), Color::WHITE);
    }

    for button in &modal.buttons {
        renderer.draw_text(button.action.label(), button.center(modal.origin), Color::WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MemoryProvider;
    use crate::platform::FrameInput;
    use crate::renderer::{DrawCommand, RecordingRenderer};
    use crate::settings::Settings;

    fn setup() -> (Game, Assets) {
        let assets = Assets::load(&mut MemoryProvider::new()).unwrap();
        (Game::new(Settings::default()), assets)
    }

    fn texts(renderer: &RecordingRenderer) -> Vec<String> {
        renderer
            .last_frame
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_start_modal_drawn() {
        let (mut game, assets) = setup();
        game.update(&FrameInput::default(), 0.016);

        let mut renderer = RecordingRenderer::default();
        render_frame(&mut renderer, &game, &assets, &FrameStats { fps: 60 });
        let texts = texts(&renderer);
        assert!(texts.contains(&"Start".to_string()));
        assert!(texts.contains(&"Quit".to_string()));
        assert!(texts.contains(&"FPS: 60".to_string()));
        assert_eq!(renderer.frames, 1);
    }

    #[test]
    fn test_background_first_then_player() {
        let (mut game, assets) = setup();
        game.update(&FrameInput::default(), 0.016);

        let mut renderer = RecordingRenderer::default();
        render_frame(&mut renderer, &game, &assets, &FrameStats::default());
        let sprites: Vec<_> = renderer
            .last_frame
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Sprite { image, .. } => Some(*image),
                _ => None,
            })
            .collect();
        assert_eq!(sprites.first(), Some(&assets.background));
        assert!(sprites.contains(&assets.player));
    }

    #[test]
    fn test_fps_hidden_when_disabled() {
        let assets = Assets::load(&mut MemoryProvider::new()).unwrap();
        let game = Game::new(Settings {
            show_fps: false,
            ..Default::default()
        });
        let mut renderer = RecordingRenderer::default();
        render_frame(&mut renderer, &game, &assets, &FrameStats { fps: 60 });
        assert!(!texts(&renderer).iter().any(|t| t.starts_with("FPS")));
    }
}
