// Game logic: configuration, world generation and the player
//
// `world` owns the map and its paint order, `player` the movement and
// combat state machine, and `session` ties both to input and camera.

pub mod assets;
pub mod config;
pub mod player;
pub mod session;
pub mod world;

pub use config::GameConfig;
pub use session::Session;
