//! Session camera.
//!
//! Groups the eye/target/up triple with the perspective parameters so the
//! frame loop can rebuild the projection from the live aspect ratio while
//! the view stays fixed.

use crate::math::{Mat4, Vec3};

/// Fixed-target camera with a symmetric perspective projection.
#[derive(Debug, Copy, Clone)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,

    /// Vertical field of view, radians.
    pub fovy: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Camera {
    /// World-to-eye transform. Independent of the window, so callers may
    /// compute it once per session.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.eye, self.target, self.up)
    }

    /// Eye-to-clip transform for the given width/height aspect ratio.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective(self.fovy, aspect, self.z_near, self.z_far)
    }

    /// `projection * view` for the given aspect ratio.
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera {
            eye: Vec3::new(3.0, 4.0, 5.0),
            target: Vec3::zero(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fovy: 0.5,
            z_near: 1.0,
            z_far: 15.0,
        }
    }

    #[test]
    fn projection_scales_x_by_aspect() {
        let narrow = camera().projection_matrix(1.0).to_cols_array();
        let wide = camera().projection_matrix(2.0).to_cols_array();
        assert_eq!(narrow[5], wide[5]);
        assert!((wide[0] * 2.0 - narrow[0]).abs() < 1e-6);
    }

    #[test]
    fn view_projection_keeps_target_centered() {
        let [x, y, _, w] = camera().view_projection(1.5).transform_point(Vec3::zero());
        assert!(w > 0.0);
        assert!(x.abs() < 1e-5 && y.abs() < 1e-5);
    }
}
