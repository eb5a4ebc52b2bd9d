// Tunable gameplay parameters, validated once at startup

use crate::game::player::{Activity, Direction};
use crate::game::world::iso::TileMetrics;
use crate::game::world::tile::TileCode;

/// Configuration errors, all fatal at startup
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("terrain weights must sum to 100, got {0}")]
    WeightSum(u32),

    #[error("map side range [{min}, {max}) is empty")]
    SideRange { min: usize, max: usize },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("animation clip has no frames")]
    EmptyClip,

    #[error("animation set is missing {direction:?}/{activity:?}")]
    MissingClip {
        direction: Direction,
        activity: Activity,
    },
}

/// Percentage weight of each tile code during generation.
///
/// Field order is the order the cumulative roll walks through, so
/// reordering fields reshuffles which roll values land on which code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerrainWeights {
    pub ground_b: u32,
    pub ground_a: u32,
    pub ground_c: u32,
    pub tree_a: u32,
    pub tree_b: u32,
    pub stump: u32,
}

/// Stock terrain mix: mostly grass, a scattering of trees
pub const DEFAULT_WEIGHTS: TerrainWeights = TerrainWeights {
    ground_b: 15,
    ground_a: 55,
    ground_c: 15,
    tree_a: 8,
    tree_b: 5,
    stump: 2,
};

impl TerrainWeights {
    /// Resolve a roll in [0, 100) to a tile code by walking the
    /// cumulative bands in declared order
    pub fn pick(&self, roll: u32) -> TileCode {
        let mut threshold = self.ground_b;
        if roll < threshold {
            return TileCode::GroundB;
        }
        threshold += self.ground_a;
        if roll < threshold {
            return TileCode::GroundA;
        }
        threshold += self.ground_c;
        if roll < threshold {
            return TileCode::GroundC;
        }
        threshold += self.tree_a;
        if roll < threshold {
            return TileCode::TreeA;
        }
        threshold += self.tree_b;
        if roll < threshold {
            return TileCode::TreeB;
        }
        TileCode::Stump
    }

    pub fn sum(&self) -> u32 {
        self.ground_b + self.ground_a + self.ground_c + self.tree_a + self.tree_b + self.stump
    }
}

impl Default for TerrainWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

/// Map generation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapConfig {
    /// Smallest allowed side length; low rolls clamp up to this
    pub side_min: usize,
    /// Exclusive upper bound on the side roll
    pub side_max: usize,
    pub weights: TerrainWeights,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            side_min: 10,
            side_max: 50,
            weights: DEFAULT_WEIGHTS,
        }
    }
}

/// Everything tunable about the game in one place.
///
/// `validate` runs once at startup; past that point the rest of the code
/// trusts these values without rechecking.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Tile diamond width in pixels
    pub tile_width: f32,
    /// Nominal tile height in pixels; projection flattens it by half
    pub tile_height: f32,
    pub map: MapConfig,
    /// Pixels the player moves per update tick
    pub move_speed: f32,
    /// Seconds each animation frame stays on screen
    pub frame_duration: f32,
    /// Seconds after a first swing starts during which a second press chains
    pub combo_window: f32,
    /// Player sprite magnification over its source pixel size
    pub sprite_scale: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_width: 64.0,
            tile_height: 64.0,
            map: MapConfig::default(),
            move_speed: 2.0,
            frame_duration: 0.1,
            combo_window: 0.4,
            sprite_scale: 1.5,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("tile_width", self.tile_width)?;
        ensure_positive("tile_height", self.tile_height)?;
        ensure_positive("move_speed", self.move_speed)?;
        ensure_positive("frame_duration", self.frame_duration)?;
        ensure_positive("combo_window", self.combo_window)?;
        ensure_positive("sprite_scale", self.sprite_scale)?;

        if self.map.side_min == 0 || self.map.side_min >= self.map.side_max {
            return Err(ConfigError::SideRange {
                min: self.map.side_min,
                max: self.map.side_max,
            });
        }

        let sum = self.map.weights.sum();
        if sum != 100 {
            return Err(ConfigError::WeightSum(sum));
        }

        Ok(())
    }

    /// Tile footprint used by projection and drawing
    pub fn metrics(&self) -> TileMetrics {
        TileMetrics::new(self.tile_width, self.tile_height)
    }
}

fn ensure_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}
