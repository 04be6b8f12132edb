use glam::{Mat4, Quat, Vec3};

use super::frustum::OffAxisFrustum;

/// Window-anchored camera defined by eye position and virtual window
/// geometry.
///
/// Unlike a look-at camera, this one has a permanently fixed identity
/// orientation: moving the eye shears the projection instead of rotating
/// the view. Rotating the camera toward the scene would break the
/// fixed-window illusion.
#[derive(Debug, Clone, Copy)]
pub struct WindowCamera {
    /// Eye (viewer) position in window space.
    pub eye: Vec3,
    /// Viewport aspect ratio (width / height), refreshed on resize.
    pub aspect: f32,
    /// Width of the virtual window in world units.
    pub window_width: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl WindowCamera {
    /// Frustum bounds for the current eye position and aspect ratio.
    #[must_use]
    pub fn frustum(&self) -> OffAxisFrustum {
        OffAxisFrustum::from_eye(
            self.eye,
            self.window_width,
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Snapshot the camera into an immutable per-frame output.
    #[must_use]
    pub fn frame(&self) -> CameraFrame {
        let projection = self.frustum().projection();
        CameraFrame {
            projection,
            projection_inverse: projection.inverse(),
            eye: self.eye,
        }
    }
}

/// Immutable camera output for one rendered frame.
///
/// A fresh value is produced by every update and adopted whole by the
/// renderer, so a partially updated projection can never be observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    /// Off-axis projection matrix.
    pub projection: Mat4,
    /// Inverse of the projection matrix (for unprojection).
    pub projection_inverse: Mat4,
    /// Eye position the projection was derived from.
    pub eye: Vec3,
}

impl CameraFrame {
    /// The camera's orientation, which is always identity.
    #[must_use]
    pub fn orientation() -> Quat {
        Quat::IDENTITY
    }

    /// View matrix for the fixed-orientation camera: a pure translation
    /// by the negated eye position.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        Mat4::from_translation(-self.eye)
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the projection pair and camera metadata.
pub struct CameraUniform {
    /// Off-axis projection matrix.
    pub projection: [[f32; 4]; 4],
    /// Inverse projection matrix.
    pub projection_inverse: [[f32; 4]; 4],
    /// Eye position in window space.
    pub eye: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            projection_inverse: Mat4::IDENTITY.to_cols_array_2d(),
            eye: [0.0, 0.0, 5.0],
            aspect: 1.6,
        }
    }

    /// Update uniform fields from the given frame output.
    pub fn update_from_frame(&mut self, frame: &CameraFrame, aspect: f32) {
        self.projection = frame.projection.to_cols_array_2d();
        self.projection_inverse =
            frame.projection_inverse.to_cols_array_2d();
        self.eye = frame.eye.to_array();
        self.aspect = aspect;
    }
}
