// Frame-coherent input state

use std::collections::HashSet;

use super::action::Action;

/// Held, just-pressed and just-released action sets.
///
/// Event handlers feed `press`/`release` as window events arrive, the
/// game reads the sets during its update, and `end_frame` rolls the
/// edge sets over once per frame. Reads in between are stable: an
/// action's edge stays visible for exactly one full frame.
#[derive(Debug, Default)]
pub struct InputState {
    pressed: HashSet<Action>,
    just_pressed: HashSet<Action>,
    just_released: HashSet<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action went down this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action came up this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register a press event. Repeated presses of an already-held
    /// action do not retrigger the edge.
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register a release event
    pub(crate) fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Clear the edge sets; call once per frame after the game has
    /// read them
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Drop all input, held keys included
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }
}
