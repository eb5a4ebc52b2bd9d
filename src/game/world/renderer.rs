// Back-to-front world drawing

use glam::Vec2;
use log::info;
use rand::Rng;

use super::iso::TileMetrics;
use super::tile::TileCode;
use super::tilemap::TileMap;
use crate::engine::renderer::{SpriteBatch, TextureHandle};
use crate::game::config::MapConfig;
use crate::game::player::Player;

/// Prop sprites sit this fraction of a tile height above the tile origin
const PROP_RISE_DIVISOR: f32 = 1.5;
/// Tree sprites poke out above the tile diamond by this many pixels
const TREE_CANOPY_EXTRA: f32 = 30.0;

/// Ground and prop textures for every tile code
#[derive(Debug, Clone, Copy)]
pub struct TileSpriteSet {
    pub ground_a: TextureHandle,
    pub ground_b: TextureHandle,
    pub ground_c: TextureHandle,
    pub tree_a: TextureHandle,
    pub tree_b: TextureHandle,
    pub stump: TextureHandle,
}

impl TileSpriteSet {
    /// Ground texture drawn for a cell; prop cells sit on plain grass
    pub fn ground(&self, code: TileCode) -> TextureHandle {
        match code {
            TileCode::GroundB => self.ground_b,
            TileCode::GroundC => self.ground_c,
            _ => self.ground_a,
        }
    }
}

/// Draws the tile map and decides where the player slots into the
/// paint order
pub struct WorldRenderer {
    map: TileMap,
    sprites: TileSpriteSet,
    metrics: TileMetrics,
    map_config: MapConfig,
}

impl WorldRenderer {
    pub fn new(
        map: TileMap,
        sprites: TileSpriteSet,
        metrics: TileMetrics,
        map_config: MapConfig,
    ) -> Self {
        Self {
            map,
            sprites,
            metrics,
            map_config,
        }
    }

    /// The map currently being drawn
    pub fn map(&self) -> &TileMap {
        &self.map
    }

    /// Swap in a freshly generated map.
    ///
    /// Runs during the update phase, so the map never changes underneath
    /// an in-progress draw.
    pub fn regenerate(&mut self, rng: &mut impl Rng) {
        self.map = TileMap::generate(rng, &self.map_config);
        info!("Regenerated map, side {}", self.map.side());
    }

    /// Paint the whole map back to front, slotting the player in.
    ///
    /// Rows and columns both run last to first: cells projected lower on
    /// the screen are submitted later and overlap what is already down.
    /// The player is emitted right after any cell whose origin lies
    /// within half a tile of them, which near cell boundaries can emit
    /// the player twice or skip them for a frame.
    pub fn draw(&self, batch: &mut SpriteBatch, player: &Player) {
        let side = self.map.side();
        let (w, h) = (self.metrics.width, self.metrics.height);

        for row in (0..side).rev() {
            for col in (0..side).rev() {
                let origin = self.metrics.project(row as i32, col as i32);
                let code = self.map.tile(row, col);

                batch.draw(self.sprites.ground(code), origin.x, origin.y, w, h);

                let prop_y = origin.y + h / PROP_RISE_DIVISOR;
                match code {
                    TileCode::TreeA => {
                        batch.draw(self.sprites.tree_a, origin.x, prop_y, w, h + TREE_CANOPY_EXTRA);
                    }
                    TileCode::TreeB => {
                        batch.draw(self.sprites.tree_b, origin.x, prop_y, w, h + TREE_CANOPY_EXTRA);
                    }
                    TileCode::Stump => {
                        batch.draw(self.sprites.stump, origin.x, prop_y, w, h / 2.0);
                    }
                    _ => {}
                }

                if self.player_occupies(player.position(), origin) {
                    player.render(batch);
                }
            }
        }
    }

    fn player_occupies(&self, player_pos: Vec2, origin: Vec2) -> bool {
        (player_pos.x - origin.x).abs() < self.metrics.width / 2.0
            && (player_pos.y - origin.y).abs() < self.metrics.height / 2.0
    }
}
