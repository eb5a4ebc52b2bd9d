// Player control and animation
//
// The controller owns position and the combat state machine, `state`
// holds the plain data types it runs on, and `animation` supplies the
// frames the renderer ends up drawing.

pub mod animation;
pub mod controller;
pub mod state;

pub use animation::{Activity, AnimationClip, AnimationSet};
pub use controller::{FrameInput, Player};
pub use state::Direction;
