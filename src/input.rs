use winit::event::{ElementState, KeyboardInput, VirtualKeyCode};
use std::collections::HashSet;

/// The four direction edges polled by the widget once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionalInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionalInput {
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Turns winit keyboard events into just-pressed edges. Held keys are
/// tracked so OS key-repeat does not re-fire an edge before release.
pub struct InputHandler {
    pressed_keys: HashSet<VirtualKeyCode>,
    pending: DirectionalInput,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            pending: DirectionalInput::default(),
        }
    }

    pub fn handle_keyboard_input(&mut self, input: &KeyboardInput) {
        if let Some(key_code) = input.virtual_keycode {
            self.key_event(key_code, input.state);
        }
    }

    pub fn key_event(&mut self, key_code: VirtualKeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.pressed_keys.insert(key_code) {
                    self.mark_pressed(key_code);
                }
            }
            ElementState::Released => {
                self.pressed_keys.remove(&key_code);
            }
        }
    }

    fn mark_pressed(&mut self, key_code: VirtualKeyCode) {
        match key_code {
            VirtualKeyCode::Up => self.pending.up = true,
            VirtualKeyCode::Down => self.pending.down = true,
            VirtualKeyCode::Left => self.pending.left = true,
            VirtualKeyCode::Right => self.pending.right = true,
            _ => {}
        }
    }

    /// Hands the edges accumulated since the last call to exactly one
    /// consumer and clears them.
    pub fn take(&mut self) -> DirectionalInput {
        std::mem::take(&mut self.pending)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_sets_edge_once() {
        let mut handler = InputHandler::new();
        handler.key_event(VirtualKeyCode::Left, ElementState::Pressed);

        let first = handler.take();
        assert!(first.left);
        assert!(!first.up && !first.down && !first.right);

        // Repeated Pressed events without a Released in between are key-repeat.
        handler.key_event(VirtualKeyCode::Left, ElementState::Pressed);
        assert_eq!(handler.take(), DirectionalInput::default());
    }

    #[test]
    fn release_rearms_the_edge() {
        let mut handler = InputHandler::new();
        handler.key_event(VirtualKeyCode::Down, ElementState::Pressed);
        handler.take();

        handler.key_event(VirtualKeyCode::Down, ElementState::Released);
        handler.key_event(VirtualKeyCode::Down, ElementState::Pressed);
        assert!(handler.take().down);
    }

    #[test]
    fn take_clears_pending_edges() {
        let mut handler = InputHandler::new();
        handler.key_event(VirtualKeyCode::Up, ElementState::Pressed);
        handler.key_event(VirtualKeyCode::Right, ElementState::Pressed);

        let edges = handler.take();
        assert!(edges.up && edges.right);
        assert!(!handler.take().any());
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let mut handler = InputHandler::new();
        handler.key_event(VirtualKeyCode::Space, ElementState::Pressed);
        handler.key_event(VirtualKeyCode::A, ElementState::Pressed);
        assert!(!handler.take().any());
    }
}
