// Tile codes for generated terrain

/// Categorical code for one map cell.
///
/// The three ground variants are purely cosmetic. The prop codes draw an
/// overlay sprite on top of a plain ground tile and block the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileCode {
    /// Common grass, the bulk of the map
    GroundA,
    /// Grass variant B
    GroundB,
    /// Grass variant C
    GroundC,
    /// Broad-canopy tree
    TreeA,
    /// Thin tree
    TreeB,
    /// Cut-down stump
    Stump,
}

impl Default for TileCode {
    fn default() -> Self {
        Self::GroundA
    }
}

impl TileCode {
    /// Check if this cell can be stood on
    pub fn is_walkable(&self) -> bool {
        matches!(self, Self::GroundA | Self::GroundB | Self::GroundC)
    }

    /// Check if this cell draws a prop overlay on top of its ground tile
    pub fn is_prop(&self) -> bool {
        matches!(self, Self::TreeA | Self::TreeB | Self::Stump)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_codes_are_walkable() {
        assert!(TileCode::GroundA.is_walkable());
        assert!(TileCode::GroundB.is_walkable());
        assert!(TileCode::GroundC.is_walkable());
        assert!(!TileCode::TreeA.is_walkable());
        assert!(!TileCode::TreeB.is_walkable());
        assert!(!TileCode::Stump.is_walkable());
    }

    #[test]
    fn test_prop_codes_are_exactly_the_non_walkable_ones() {
        let all = [
            TileCode::GroundA,
            TileCode::GroundB,
            TileCode::GroundC,
            TileCode::TreeA,
            TileCode::TreeB,
            TileCode::Stump,
        ];
        for code in all {
            assert_eq!(code.is_prop(), !code.is_walkable());
        }
    }

    #[test]
    fn test_default_is_plain_ground() {
        assert_eq!(TileCode::default(), TileCode::GroundA);
    }
}
