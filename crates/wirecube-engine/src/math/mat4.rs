use core::ops::Mul;

use bytemuck::{Pod, Zeroable};

use super::Vec3;

/// Column-major 4x4 transform matrix.
///
/// Elements `0..4` are the first column, `4..8` the second, and so on.
/// `Pod`/`Zeroable` let the raw 64 bytes go straight into a uniform buffer.
///
/// Projection constructors take the caller on trust: equal plane extents
/// (`right == left`, `z_far == z_near`, ...) divide by zero and produce
/// non-finite entries rather than an error.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4([f32; 16]);

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    #[inline]
    pub const fn from_cols_array(cols: [f32; 16]) -> Self {
        Self(cols)
    }

    #[inline]
    pub const fn to_cols_array(self) -> [f32; 16] {
        self.0
    }

    /// Translation by `offset`.
    pub fn translation(offset: Vec3) -> Self {
        let mut m = Self::IDENTITY.0;
        m[12] = offset.x;
        m[13] = offset.y;
        m[14] = offset.z;
        Self(m)
    }

    /// Orthographic projection mapping the box `[left, right] x
    /// [bottom, top] x [-z_near, -z_far]` (eye space) to the canonical
    /// clip cube.
    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        let mut m = [0.0; 16];
        m[0] = 2.0 / (right - left);
        m[5] = 2.0 / (top - bottom);
        m[10] = -2.0 / (z_far - z_near);
        m[12] = -(right + left) / (right - left);
        m[13] = -(top + bottom) / (top - bottom);
        m[14] = -(z_far + z_near) / (z_far - z_near);
        m[15] = 1.0;
        Self(m)
    }

    /// Perspective projection from near-plane extents and near/far distances.
    pub fn frustum(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        let mut m = [0.0; 16];
        m[0] = 2.0 * z_near / (right - left);
        m[5] = 2.0 * z_near / (top - bottom);
        m[8] = (right + left) / (right - left);
        m[9] = (top + bottom) / (top - bottom);
        m[10] = -(z_far + z_near) / (z_far - z_near);
        m[11] = -1.0;
        m[14] = -2.0 * z_far * z_near / (z_far - z_near);
        Self(m)
    }

    /// Perspective projection from a vertical field of view (radians) and a
    /// width/height aspect ratio.
    ///
    /// Derives symmetric near-plane extents and defers to [`Mat4::frustum`].
    pub fn perspective(fovy: f32, aspect: f32, z_near: f32, z_far: f32) -> Self {
        let top = z_near * (fovy * 0.5).tan();
        let right = top * aspect;
        Self::frustum(-right, right, -top, top, z_near, z_far)
    }

    /// Right-handed view matrix: camera at `eye`, looking at `target`, with
    /// `up` as the roll hint.
    ///
    /// The rotation rows are the orthonormal camera basis (side, corrected
    /// up, negated forward); the last column translates by `-eye` expressed
    /// in that basis.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize();
        let side = forward.cross(up).normalize();
        let up = side.cross(forward);

        let mut m = [0.0; 16];
        m[0] = side.x;
        m[4] = side.y;
        m[8] = side.z;
        m[12] = -side.dot(eye);

        m[1] = up.x;
        m[5] = up.y;
        m[9] = up.z;
        m[13] = -up.dot(eye);

        m[2] = -forward.x;
        m[6] = -forward.y;
        m[10] = -forward.z;
        m[14] = forward.dot(eye);

        m[15] = 1.0;
        Self(m)
    }

    /// Applies the matrix to the point `p` with an implied `w = 1`,
    /// returning homogeneous clip-space coordinates `[x, y, z, w]`.
    pub fn transform_point(self, p: Vec3) -> [f32; 4] {
        let m = &self.0;
        [
            m[0] * p.x + m[4] * p.y + m[8] * p.z + m[12],
            m[1] * p.x + m[5] * p.y + m[9] * p.z + m[13],
            m[2] * p.x + m[6] * p.y + m[10] * p.z + m[14],
            m[3] * p.x + m[7] * p.y + m[11] * p.z + m[15],
        ]
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    /// Matrix product `self x rhs`: column `k` of the result is `self`
    /// applied to column `k` of `rhs`.
    fn mul(self, rhs: Mat4) -> Mat4 {
        let a = &self.0;
        let b = &rhs.0;
        let mut m = [0.0f32; 16];
        for (i, out) in m.iter_mut().enumerate() {
            let row = i & 3;
            let col = i & !3;
            *out = a[row] * b[col]
                + a[4 + row] * b[col + 1]
                + a[8 + row] * b[col + 2]
                + a[12 + row] * b[col + 3];
        }
        Mat4(m)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Mat4, b: Mat4, eps: f32) -> bool {
        a.to_cols_array()
            .iter()
            .zip(b.to_cols_array().iter())
            .all(|(x, y)| (x - y).abs() <= eps)
    }

    // An arbitrary well-conditioned matrix for algebra tests.
    fn sample() -> Mat4 {
        Mat4::translation(Vec3::new(1.0, -2.0, 3.0))
            * Mat4::perspective(0.9, 1.5, 0.5, 20.0)
            * Mat4::look_at(
                Vec3::new(2.0, 1.0, 4.0),
                Vec3::zero(),
                Vec3::new(0.0, 1.0, 0.0),
            )
    }

    // ── multiply ──────────────────────────────────────────────────────────

    #[test]
    fn identity_is_multiplicative_unit() {
        let a = sample();
        assert_eq!(a * Mat4::IDENTITY, a);
        assert_eq!(Mat4::IDENTITY * a, a);
    }

    #[test]
    fn multiply_is_associative() {
        let a = sample();
        let b = Mat4::orthographic(-2.0, 3.0, -1.0, 1.0, 0.1, 50.0);
        let c = Mat4::translation(Vec3::new(-4.0, 0.5, 2.0));
        assert!(approx_eq((a * b) * c, a * (b * c), 1e-4));
    }

    #[test]
    fn translation_composes_by_addition() {
        let t = Mat4::translation(Vec3::new(1.0, 2.0, 3.0))
            * Mat4::translation(Vec3::new(-4.0, 0.0, 1.0));
        assert_eq!(t, Mat4::translation(Vec3::new(-3.0, 2.0, 4.0)));
    }

    // ── projections ───────────────────────────────────────────────────────

    #[test]
    fn orthographic_unit_box_literals() {
        let m = Mat4::orthographic(-1.0, 1.0, -1.0, 1.0, 1.0, 100.0).to_cols_array();
        assert_eq!(m[0], 1.0);
        assert_eq!(m[5], 1.0);
        assert_eq!(m[10], -2.0 / 99.0);
        assert_eq!(m[12], 0.0);
        assert_eq!(m[13], 0.0);
        assert_eq!(m[14], -101.0 / 99.0);
        assert_eq!(m[15], 1.0);
    }

    #[test]
    fn perspective_matches_equivalent_frustum() {
        // tan(PI/4) = 1, so a 90-degree fov at aspect 1 spans [-1, 1] on the
        // near plane.
        let p = Mat4::perspective(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 10.0);
        let f = Mat4::frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
        assert!(approx_eq(p, f, 1e-5));
    }

    #[test]
    fn frustum_degenerate_planes_are_non_finite() {
        let m = Mat4::frustum(-1.0, 1.0, -1.0, 1.0, 5.0, 5.0).to_cols_array();
        assert!(!m[10].is_finite() || !m[14].is_finite());
    }

    // ── look_at ───────────────────────────────────────────────────────────

    #[test]
    fn look_at_axis_aligned_is_pure_translation() {
        let v = Mat4::look_at(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::zero(),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(v, Mat4::translation(Vec3::new(0.0, 0.0, -5.0)));
    }

    #[test]
    fn look_at_maps_target_onto_negative_z_axis() {
        let v = Mat4::look_at(
            Vec3::new(3.0, 4.0, 5.0),
            Vec3::zero(),
            Vec3::new(0.0, 1.0, 0.0),
        );
        let [x, y, z, w] = v.transform_point(Vec3::zero());
        let dist = (9.0f32 + 16.0 + 25.0).sqrt();
        assert!(x.abs() < 1e-5 && y.abs() < 1e-5);
        assert!((z + dist).abs() < 1e-4);
        assert_eq!(w, 1.0);
    }

    // ── end to end ────────────────────────────────────────────────────────

    #[test]
    fn clip_space_depth_ordering_matches_eye_distance() {
        // The session camera from the viewer: eye (3,4,5) looking at the
        // origin, square aspect.
        let eye = Vec3::new(3.0, 4.0, 5.0);
        let view = Mat4::look_at(eye, Vec3::zero(), Vec3::new(0.0, 1.0, 0.0));
        let proj = Mat4::perspective(0.5, 1.0, 1.0, 15.0);
        let combined = proj * view;

        let near_corner = Vec3::new(0.9, 0.9, 0.9);
        let far_corner = Vec3::new(-0.9, -0.9, -0.9);
        assert!((near_corner - eye).length() < (far_corner - eye).length());

        let [_, _, nz, nw] = combined.transform_point(near_corner);
        let [_, _, fz, fw] = combined.transform_point(far_corner);

        // Both corners sit in front of the camera.
        assert!(nw > 0.0 && fw > 0.0);
        // After perspective divide, depth increases with eye distance.
        assert!(nz / nw < fz / fw);
    }
}
