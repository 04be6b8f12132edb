//! Off-axis viewing frustum for a fixed virtual window.
//!
//! Derives the six frustum bounds from an arbitrary eye position looking
//! through a fixed-size window, and builds the corresponding generalized
//! perspective projection. This is the standard off-axis derivation — a
//! symmetric field of view cannot reproduce the parallax shear when the
//! eye is off-center, so the bounds are computed from first principles
//! rather than by adjusting a FOV.

use glam::{Mat4, Vec3, Vec4};

/// The six bounds of an asymmetric perspective viewing volume.
///
/// `left`/`right`/`top`/`bottom` are measured on the near plane. Derived
/// fresh every update from the smoothed eye position and the viewport
/// aspect ratio; never stored across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffAxisFrustum {
    /// Left bound at the near plane.
    pub left: f32,
    /// Right bound at the near plane.
    pub right: f32,
    /// Top bound at the near plane.
    pub top: f32,
    /// Bottom bound at the near plane.
    pub bottom: f32,
    /// Near clipping plane distance (always `> 0`).
    pub near: f32,
    /// Far clipping plane distance (always `> near`).
    pub far: f32,
}

impl OffAxisFrustum {
    /// Compute the frustum for an eye looking through a virtual window.
    ///
    /// The window is centered on the origin in the XY plane with width
    /// `window_width`; its height follows from the viewport aspect ratio
    /// so the rendered image fills the screen. For each edge of the
    /// window, the bound is the edge's offset from the eye scaled down to
    /// the near plane by `near / eye.z`.
    ///
    /// The caller guarantees `eye.z > 0` (the smoother clamps the eye
    /// well in front of the window plane).
    #[must_use]
    pub fn from_eye(
        eye: Vec3,
        window_width: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let half_w = window_width / 2.0;
        let half_h = (window_width / aspect) / 2.0;
        let scale = near / eye.z;

        Self {
            left: (-half_w - eye.x) * scale,
            right: (half_w - eye.x) * scale,
            top: (half_h - eye.y) * scale,
            bottom: (-half_h - eye.y) * scale,
            near,
            far,
        }
    }

    /// Build the generalized perspective projection for these bounds.
    ///
    /// Right-handed, [0,1] depth range (wgpu/Vulkan convention), matching
    /// what `Mat4::perspective_rh` produces for the symmetric case.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        let (l, r) = (self.left, self.right);
        let (b, t) = (self.bottom, self.top);
        let (n, f) = (self.near, self.far);

        Mat4::from_cols(
            Vec4::new(2.0 * n / (r - l), 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 * n / (t - b), 0.0, 0.0),
            Vec4::new(
                (r + l) / (r - l),
                (t + b) / (t - b),
                f / (n - f),
                -1.0,
            ),
            Vec4::new(0.0, 0.0, f * n / (n - f), 0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: f32 = 10.0;
    const NEAR: f32 = 0.1;
    const FAR: f32 = 1000.0;

    #[test]
    fn centered_eye_degenerates_to_symmetric() {
        let f = OffAxisFrustum::from_eye(
            Vec3::new(0.0, 0.0, 10.0),
            WINDOW,
            16.0 / 9.0,
            NEAR,
            FAR,
        );
        assert!((f.left + f.right).abs() < 1e-6);
        assert!((f.top + f.bottom).abs() < 1e-6);
    }

    #[test]
    fn off_center_eye_shears_opposite() {
        // Eye to the right of center: the visible window region shifts
        // left relative to the eye, so both horizontal bounds decrease.
        let centered = OffAxisFrustum::from_eye(
            Vec3::new(0.0, 0.0, 10.0),
            WINDOW,
            1.0,
            NEAR,
            FAR,
        );
        let shifted = OffAxisFrustum::from_eye(
            Vec3::new(2.0, 0.0, 10.0),
            WINDOW,
            1.0,
            NEAR,
            FAR,
        );
        assert!(shifted.left < centered.left);
        assert!(shifted.right < centered.right);
        // Vertical bounds unaffected by horizontal offset.
        assert!((shifted.top - centered.top).abs() < 1e-6);
        assert!((shifted.bottom - centered.bottom).abs() < 1e-6);
    }

    #[test]
    fn bounds_match_hand_computation() {
        // eye (1, -0.5, 10), window 10 wide, square viewport:
        // halfW = halfH = 5, scale = 0.1/10 = 0.01.
        let f = OffAxisFrustum::from_eye(
            Vec3::new(1.0, -0.5, 10.0),
            WINDOW,
            1.0,
            NEAR,
            FAR,
        );
        assert!((f.left - (-5.0 - 1.0) * 0.01).abs() < 1e-7);
        assert!((f.right - (5.0 - 1.0) * 0.01).abs() < 1e-7);
        assert!((f.top - (5.0 + 0.5) * 0.01).abs() < 1e-7);
        assert!((f.bottom - (-5.0 + 0.5) * 0.01).abs() < 1e-7);
        assert!(f.near > 0.0 && f.near < f.far);
    }

    #[test]
    fn symmetric_projection_matches_perspective_rh() {
        // For a centered eye the off-axis matrix must agree with glam's
        // symmetric perspective with the equivalent FOV.
        let aspect = 1.5;
        let eye = Vec3::new(0.0, 0.0, 12.0);
        let f = OffAxisFrustum::from_eye(eye, WINDOW, aspect, NEAR, FAR);
        let proj = f.projection();

        let half_h = (WINDOW / aspect) / 2.0;
        let fovy = 2.0 * (half_h / eye.z).atan();
        let reference = Mat4::perspective_rh(fovy, aspect, NEAR, FAR);

        let a = proj.to_cols_array();
        let b = reference.to_cols_array();
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-5, "{x} vs {y}");
        }
    }

    #[test]
    fn projection_is_invertible() {
        let f = OffAxisFrustum::from_eye(
            Vec3::new(3.0, -2.0, 9.0),
            WINDOW,
            1.77,
            NEAR,
            FAR,
        );
        let proj = f.projection();
        let inv = proj.inverse();
        let round_trip = proj * inv;
        let identity = Mat4::IDENTITY.to_cols_array();
        for (x, y) in round_trip.to_cols_array().iter().zip(identity.iter()) {
            assert!((x - y).abs() < 1e-4);
        }
    }

    #[test]
    fn near_plane_corners_project_to_clip_edges() {
        let f = OffAxisFrustum::from_eye(
            Vec3::new(2.0, 1.0, 10.0),
            WINDOW,
            1.0,
            NEAR,
            FAR,
        );
        let proj = f.projection();

        // A point on the near plane at the left/bottom bound (view space,
        // looking down -Z) must land at clip (-1, -1) after divide.
        let p = proj * Vec4::new(f.left, f.bottom, -f.near, 1.0);
        let ndc = p / p.w;
        assert!((ndc.x + 1.0).abs() < 1e-5);
        assert!((ndc.y + 1.0).abs() < 1e-5);
        assert!(ndc.z.abs() < 1e-5); // near maps to depth 0

        let q = proj * Vec4::new(f.right, f.top, -f.near, 1.0);
        let ndc = q / q.w;
        assert!((ndc.x - 1.0).abs() < 1e-5);
        assert!((ndc.y - 1.0).abs() < 1e-5);
    }
}
