// 2D camera with zoom support

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// World-space camera mapping a zoomed viewport onto the screen
#[derive(Debug, Clone)]
pub struct Camera {
    /// World position the view is centered on
    pub position: Vec2,
    /// Magnification; larger values show less of the world
    pub zoom: f32,
    viewport_width: f32,
    viewport_height: f32,
    view_proj: Mat4,
}

impl Camera {
    pub fn new(position: Vec2, viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            position,
            zoom: 1.0,
            viewport_width,
            viewport_height,
            view_proj: Mat4::IDENTITY,
        };
        camera.update_view_proj();
        camera
    }

    /// Update the view-projection matrix after changing position or zoom
    pub fn update_view_proj(&mut self) {
        let half_width = self.viewport_width / (2.0 * self.zoom);
        let half_height = self.viewport_height / (2.0 * self.zoom);

        self.view_proj = Mat4::orthographic_rh(
            self.position.x - half_width,
            self.position.x + half_width,
            self.position.y - half_height,
            self.position.y + half_height,
            -100.0,
            100.0,
        );
    }

    /// Current view-projection matrix
    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }

    /// Move the camera center
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.update_view_proj();
    }

    /// Set zoom, clamped away from zero and negative values
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.max(0.1);
        self.update_view_proj();
    }

    /// Resize the viewport (e.g. when the window resizes)
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.update_view_proj();
    }
}

/// Camera data in the layout the shader expects
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }

    pub fn identity() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::{Vec3, Vec4Swizzles};

    fn ndc_of(camera: &Camera, world: Vec2) -> Vec2 {
        let clip = camera.view_proj_matrix() * world.extend(0.0).extend(1.0);
        clip.xy()
    }

    #[test]
    fn test_camera_center_maps_to_ndc_origin() {
        let camera = Camera::new(Vec2::new(140.0, 360.0), 1280.0, 720.0);

        let center = ndc_of(&camera, Vec2::new(140.0, 360.0));
        assert_relative_eq!(center.x, 0.0);
        assert_relative_eq!(center.y, 0.0);
    }

    #[test]
    fn test_viewport_edges_map_to_unit_ndc() {
        let camera = Camera::new(Vec2::ZERO, 1280.0, 720.0);

        let right = ndc_of(&camera, Vec2::new(640.0, 0.0));
        assert_relative_eq!(right.x, 1.0);

        let top = ndc_of(&camera, Vec2::new(0.0, 360.0));
        assert_relative_eq!(top.y, 1.0);
    }

    #[test]
    fn test_zoom_magnifies_world_units() {
        let mut camera = Camera::new(Vec2::ZERO, 1280.0, 720.0);
        camera.set_zoom(2.0);

        // At 2x zoom only 320 world units reach the right edge
        let right = ndc_of(&camera, Vec2::new(320.0, 0.0));
        assert_relative_eq!(right.x, 1.0);
    }

    #[test]
    fn test_zoom_clamps_above_zero() {
        let mut camera = Camera::new(Vec2::ZERO, 1280.0, 720.0);
        camera.set_zoom(-5.0);
        assert_relative_eq!(camera.zoom, 0.1);

        camera.set_zoom(0.0);
        assert_relative_eq!(camera.zoom, 0.1);
    }

    #[test]
    fn test_uniform_mirrors_camera_matrix() {
        let camera = Camera::new(Vec2::new(10.0, 20.0), 800.0, 600.0);
        let uniform = CameraUniform::new(&camera);
        let from_matrix = camera.view_proj_matrix().to_cols_array_2d();

        for col in 0..4 {
            for row in 0..4 {
                assert_relative_eq!(uniform.view_proj[col][row], from_matrix[col][row]);
            }
        }
    }

    #[test]
    fn test_matrix_w_column_is_affine() {
        let camera = Camera::new(Vec2::ZERO, 1280.0, 720.0);
        let clip = camera.view_proj_matrix() * Vec3::new(100.0, 50.0, 0.0).extend(1.0);
        assert_relative_eq!(clip.w, 1.0);
    }
}
