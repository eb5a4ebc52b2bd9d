// Keyboard event translation

use std::collections::HashMap;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::action::{default_bindings, Action};
use super::state::InputState;

/// Owns the binding table and the live input state
pub struct InputManager {
    bindings: HashMap<KeyCode, Action>,
    state: InputState,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            bindings: default_bindings().into_iter().collect(),
            state: InputState::new(),
        }
    }

    /// Translate a winit keyboard event into action state.
    /// OS key repeats are ignored; the game wants clean edges.
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return;
        };
        let Some(&action) = self.bindings.get(&key_code) else {
            return;
        };

        match event.state {
            ElementState::Pressed => {
                if !event.repeat {
                    self.state.press(action);
                }
            }
            ElementState::Released => self.state.release(action),
        }
    }

    /// Action bound to a physical key, if any
    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Current input state
    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Roll edge state over; call once per frame after the update
    pub fn end_frame(&mut self) {
        self.state.end_frame();
    }

    /// Drop all input, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_resolve() {
        let manager = InputManager::new();
        assert_eq!(manager.action_for(KeyCode::KeyW), Some(Action::MoveUp));
        assert_eq!(manager.action_for(KeyCode::KeyX), Some(Action::Attack));
        assert_eq!(
            manager.action_for(KeyCode::KeyG),
            Some(Action::RegenerateMap)
        );
    }

    #[test]
    fn test_unbound_key_resolves_to_nothing() {
        let manager = InputManager::new();
        assert_eq!(manager.action_for(KeyCode::KeyZ), None);
    }

    #[test]
    fn test_fresh_manager_has_no_input() {
        let manager = InputManager::new();
        assert!(!manager.state().is_pressed(Action::MoveUp));
        assert!(!manager.state().just_pressed(Action::Attack));
    }
}
