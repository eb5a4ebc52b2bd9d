// World generation and drawing
//
// `tilemap` rolls the terrain, `iso` projects grid cells onto the
// screen, and `renderer` turns the two into an ordered sprite batch.

pub mod iso;
pub mod renderer;
pub mod tile;
pub mod tilemap;

pub use iso::TileMetrics;
pub use renderer::{TileSpriteSet, WorldRenderer};
pub use tilemap::TileMap;
