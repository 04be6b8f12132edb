use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Smallest scale a committed transform may carry. Guards against a zero
/// or negative scale collapsing the model (and its inverse matrices).
pub const MIN_SCALE: f32 = 1e-6;

/// Pose of the displayed model inside the virtual window.
///
/// Rotation is stored and exchanged in degrees — the unit the UI layer
/// shows — and converted to radians only at the render boundary
/// ([`matrix`](Self::matrix)). Position `z` is window-relative: `0` is the
/// window plane, negative values recede into the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelTransform {
    /// Translation in window space.
    pub position: Vec3,
    /// Euler rotation in degrees (XYZ order).
    pub rotation_degrees: Vec3,
    /// Uniform scale factor (always `> 0`).
    pub scale: f32,
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation_degrees: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl ModelTransform {
    /// Return a copy with the domain clamps applied.
    ///
    /// `position.z` is clamped to `≤ 0` (the model cannot move through
    /// the window plane toward the viewer) and `scale` to `≥` [`MIN_SCALE`].
    /// Every commit path — gestures, wheel, external set — goes through
    /// this, so no caller can produce an unrenderable state.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.position.z = self.position.z.min(0.0);
        self.scale = self.scale.max(MIN_SCALE);
        self
    }

    /// Model matrix for the renderer. Degrees become radians here and
    /// nowhere else.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        let r = self.rotation_degrees;
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            r.x.to_radians(),
            r.y.to_radians(),
            r.z.to_radians(),
        );
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            rotation,
            self.position,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_pins_z_to_window_plane() {
        let t = ModelTransform {
            position: Vec3::new(1.0, 2.0, 3.0),
            ..Default::default()
        }
        .clamped();
        assert_eq!(t.position.z, 0.0);
        // x and y are unrestricted.
        assert_eq!(t.position.x, 1.0);
        assert_eq!(t.position.y, 2.0);
    }

    #[test]
    fn clamp_leaves_valid_z_alone() {
        let t = ModelTransform {
            position: Vec3::new(0.0, 0.0, -4.5),
            ..Default::default()
        }
        .clamped();
        assert_eq!(t.position.z, -4.5);
    }

    #[test]
    fn clamp_enforces_positive_scale() {
        let t = ModelTransform {
            scale: -2.0,
            ..Default::default()
        }
        .clamped();
        assert!(t.scale >= MIN_SCALE);
    }

    #[test]
    fn matrix_converts_degrees_at_the_boundary() {
        // 90 degrees about Y maps +X onto -Z.
        let t = ModelTransform {
            rotation_degrees: Vec3::new(0.0, 90.0, 0.0),
            ..Default::default()
        };
        let p = t.matrix().transform_point3(Vec3::X);
        assert!(p.x.abs() < 1e-6);
        assert!((p.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn matrix_applies_scale_then_translation() {
        let t = ModelTransform {
            position: Vec3::new(0.0, 0.0, -2.0),
            scale: 3.0,
            ..Default::default()
        };
        let p = t.matrix().transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(p, Vec3::new(3.0, 0.0, -2.0));
    }

    #[test]
    fn serde_round_trip() {
        let t = ModelTransform {
            position: Vec3::new(0.5, -1.0, -3.0),
            rotation_degrees: Vec3::new(10.0, 20.0, 0.0),
            scale: 1.5,
        };
        let json = serde_json::to_string(&t).unwrap();
        let back: ModelTransform = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
