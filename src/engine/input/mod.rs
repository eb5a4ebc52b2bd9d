// Input handling
//
// Keyboard events come in from winit, get mapped through the binding
// table, and the rest of the game only ever sees `Action`s:
//
// - `action`: the action enum and the default key bindings
// - `state`: held / just-pressed / just-released bookkeeping
// - `manager`: owns both and consumes winit events

pub mod action;
pub mod manager;
pub mod state;

pub use action::Action;
pub use manager::InputManager;
pub use state::InputState;
