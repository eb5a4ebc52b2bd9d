// Procedural tile map generation

use rand::Rng;

use super::tile::TileCode;
use crate::game::config::MapConfig;

/// A square, row-major grid of tile codes.
///
/// Maps are immutable once generated; regeneration builds a whole new map
/// and swaps it in between frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    side: usize,
    tiles: Vec<TileCode>,
}

impl TileMap {
    /// Generate a fresh map from the given source of randomness.
    ///
    /// The side length is rolled in [0, side_max) and then clamped up to
    /// side_min, so every roll below the minimum produces a minimum-size
    /// map. Cell (0, 0) is forced to plain ground afterwards; the player
    /// spawns there.
    pub fn generate(rng: &mut impl Rng, config: &MapConfig) -> Self {
        let side = rng.random_range(0..config.side_max).max(config.side_min);
        let mut tiles = Vec::with_capacity(side * side);

        for _ in 0..side * side {
            let roll = rng.random_range(0..100u32);
            tiles.push(config.weights.pick(roll));
        }

        // Spawn cell stays walkable no matter what was rolled
        tiles[0] = TileCode::GroundA;

        Self { side, tiles }
    }

    /// Build a uniform map, mostly for tooling and tests
    #[allow(dead_code)]
    pub fn filled(side: usize, code: TileCode) -> Self {
        Self {
            side,
            tiles: vec![code; side * side],
        }
    }

    /// Side length of the square grid
    pub fn side(&self) -> usize {
        self.side
    }

    /// Tile code at (row, col)
    pub fn tile(&self, row: usize, col: usize) -> TileCode {
        self.tiles[row * self.side + col]
    }
}
