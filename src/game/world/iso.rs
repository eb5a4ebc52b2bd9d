// Grid-to-screen projection for the isometric view

use glam::Vec2;

/// Tile footprint in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileMetrics {
    pub width: f32,
    pub height: f32,
}

impl TileMetrics {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Screen-space origin of a grid cell's diamond
    pub fn project(&self, row: i32, col: i32) -> Vec2 {
        project(row, col, self.width, self.height)
    }
}

/// Map a grid cell to the screen-space origin of its tile diamond.
///
/// Columns step right-and-up, rows step left-and-up. The vertical divisor
/// is 4 rather than 2, which flattens the diamonds to half their nominal
/// height; every on-screen spacing in the game assumes that ratio.
pub fn project(row: i32, col: i32, tile_width: f32, tile_height: f32) -> Vec2 {
    Vec2::new(
        (col - row) as f32 * (tile_width / 2.0),
        (col + row) as f32 * (tile_height / 4.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_projections() {
        let origin = project(0, 0, 64.0, 64.0);
        assert_relative_eq!(origin.x, 0.0);
        assert_relative_eq!(origin.y, 0.0);

        let p = project(2, 3, 64.0, 64.0);
        assert_relative_eq!(p.x, 32.0);
        assert_relative_eq!(p.y, 80.0);

        let q = project(3, 2, 64.0, 64.0);
        assert_relative_eq!(q.x, -32.0);
        assert_relative_eq!(q.y, 80.0);
    }

    #[test]
    fn test_swapping_row_and_col_mirrors_x() {
        for row in 0..8 {
            for col in 0..8 {
                let a = project(row, col, 64.0, 64.0);
                let b = project(col, row, 64.0, 64.0);
                assert_relative_eq!(a.x, -b.x);
                assert_relative_eq!(a.y, b.y);
            }
        }
    }

    #[test]
    fn test_y_grows_with_row_plus_col() {
        let mut last_y = f32::MIN;
        for sum in 0..16 {
            let y = project(sum, 0, 64.0, 64.0).y;
            assert!(y > last_y);
            last_y = y;

            // Same diagonal, same height
            for col in 0..=sum {
                let p = project(sum - col, col, 64.0, 64.0);
                assert_relative_eq!(p.y, y);
            }
        }
    }

    #[test]
    fn test_metrics_delegate_to_projection() {
        let metrics = TileMetrics::new(64.0, 32.0);
        let p = metrics.project(1, 1);
        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.y, 16.0);
    }
}
