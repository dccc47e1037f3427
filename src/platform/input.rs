//! Input polling
//!
//! Edge events (quit, key presses, clicks) come from `poll_events`; held
//! state is queried separately for continuous controls.

use glam::Vec2;

use crate::sim::player::Direction;
use crate::sim::tick::TickInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Space,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
}

/// One-shot events since the previous poll
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window closed
    Quit,
    KeyDown(Key),
    MouseClick(Vec2),
}

pub trait Input {
    fn poll_events(&mut self) -> Vec<InputEvent>;
    fn is_key_held(&self, key: Key) -> bool;
    fn is_mouse_held(&self, button: MouseButton) -> bool;
    fn mouse_position(&self) -> Vec2;
}

const MOVE_KEYS: [(Key, Direction); 4] = [
    (Key::W, Direction::Up),
    (Key::S, Direction::Down),
    (Key::A, Direction::Left),
    (Key::D, Direction::Right),
];

/// Everything the controller needs from input for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Continuous controls for the running game
    pub tick: TickInput,
    pub quit: bool,
    /// Escape pressed this frame
    pub toggle_pause: bool,
    /// Last click this frame, screen space
    pub click: Option<Vec2>,
}

impl FrameInput {
    /// Drain events and sample held state
    pub fn poll<I: Input + ?Sized>(input: &mut I) -> Self {
        let mut frame = FrameInput::default();

        for event in input.poll_events() {
            match event {
                InputEvent::Quit => frame.quit = true,
                InputEvent::KeyDown(Key::Escape) => frame.toggle_pause = true,
                InputEvent::KeyDown(_) => {}
                InputEvent::MouseClick(pos) => frame.click = Some(pos),
            }
        }

        frame.tick.moves = MOVE_KEYS
            .iter()
            .filter(|(key, _)| input.is_key_held(*key))
            .map(|&(_, direction)| direction)
            .collect();
        frame.tick.fire =
            input.is_key_held(Key::Space) || input.is_mouse_held(MouseButton::Left);
        frame.tick.pointer = Some(input.mouse_position());

        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Default)]
    struct ScriptedInput {
        events: Vec<InputEvent>,
        held: HashSet<Key>,
        left_mouse: bool,
        mouse: Vec2,
    }

    impl Input for ScriptedInput {
        fn poll_events(&mut self) -> Vec<InputEvent> {
            std::mem::take(&mut self.events)
        }
        fn is_key_held(&self, key: Key) -> bool {
            self.held.contains(&key)
        }
        fn is_mouse_held(&self, button: MouseButton) -> bool {
            button == MouseButton::Left && self.left_mouse
        }
        fn mouse_position(&self) -> Vec2 {
            self.mouse
        }
    }

    #[test]
    fn test_held_keys_become_moves() {
        let mut input = ScriptedInput::default();
        input.held.insert(Key::W);
        input.held.insert(Key::D);
        let frame = FrameInput::poll(&mut input);
        assert_eq!(frame.tick.moves, vec![Direction::Up, Direction::Right]);
        assert!(!frame.tick.fire);
    }

    #[test]
    fn test_fire_from_space_or_mouse() {
        let mut input = ScriptedInput::default();
        input.left_mouse = true;
        assert!(FrameInput::poll(&mut input).tick.fire);

        input.left_mouse = false;
        input.held.insert(Key::Space);
        assert!(FrameInput::poll(&mut input).tick.fire);
    }

    #[test]
    fn test_events_are_edges() {
        let mut input = ScriptedInput {
            events: vec![
                InputEvent::KeyDown(Key::Escape),
                InputEvent::MouseClick(Vec2::new(10.0, 20.0)),
            ],
            mouse: Vec2::new(5.0, 5.0),
            ..Default::default()
        };
        let frame = FrameInput::poll(&mut input);
        assert!(frame.toggle_pause);
        assert_eq!(frame.click, Some(Vec2::new(10.0, 20.0)));
        assert_eq!(frame.tick.pointer, Some(Vec2::new(5.0, 5.0)));

        // Drained: the next frame sees nothing
        let frame = FrameInput::poll(&mut input);
        assert!(!frame.toggle_pause);
        assert!(frame.click.is_none());
    }

    #[test]
    fn test_quit_event() {
        let mut input = ScriptedInput {
            events: vec![InputEvent::Quit],
            ..Default::default()
        };
        assert!(FrameInput::poll(&mut input).quit);
    }
}
