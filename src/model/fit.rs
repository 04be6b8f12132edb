//! Auto-fit of a loaded model to a standard display size.
//!
//! Source assets arrive at arbitrary scales and offsets. Fitting computes
//! a uniform scale that brings the bounding box's largest dimension to a
//! fixed target size, plus an offset that moves the scaled bounding-box
//! centroid onto the origin, so framing is consistent regardless of the
//! asset. Fit state is applied to the asset's scene node and kept
//! separate from the interactive transform, which stays clamped to the
//! window.

use glam::Vec3;

/// Bounding boxes smaller than this along every axis count as degenerate
/// and fall back to unit scale instead of dividing toward infinity.
pub const MIN_DIMENSION: f32 = 1e-6;

/// Axis-aligned bounding box of a loaded model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Bounding box of a point set. Returns `None` for an empty set.
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points.iter().fold(
            (first, first),
            |(min, max), p| (min.min(*p), max.max(*p)),
        );
        Some(Self { min, max })
    }

    /// Extent along each axis.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Center point of the box.
    #[must_use]
    pub fn centroid(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    /// The largest of the three extents.
    #[must_use]
    pub fn max_dimension(&self) -> f32 {
        let s = self.size();
        s.x.max(s.y).max(s.z)
    }
}

/// Uniform scale and recentering offset applied to a loaded asset's node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelFit {
    /// Uniform scale bringing the largest dimension to the target size.
    pub scale: f32,
    /// Offset placing the scaled bounding-box centroid at the origin.
    pub offset: Vec3,
}

impl Default for ModelFit {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec3::ZERO,
        }
    }
}

impl ModelFit {
    /// Compute the fit for a bounding box and target size.
    ///
    /// A degenerate box (largest dimension below [`MIN_DIMENSION`])
    /// falls back to unit scale — propagating an infinite or NaN scale
    /// would silently corrupt every subsequent frame, so it is stopped
    /// here at the source.
    #[must_use]
    pub fn from_bounds(bounds: Aabb, target_size: f32) -> Self {
        let max_dim = bounds.max_dimension();
        if max_dim < MIN_DIMENSION {
            log::warn!(
                "degenerate bounding box (max dimension {max_dim}); \
                 falling back to unit scale"
            );
            return Self {
                scale: 1.0,
                offset: -bounds.centroid(),
            };
        }

        let scale = target_size / max_dim;
        Self {
            scale,
            offset: -bounds.centroid() * scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_equals_target_over_max_dimension() {
        let bounds = Aabb {
            min: Vec3::new(-1.0, -2.0, -0.5),
            max: Vec3::new(1.0, 4.0, 0.5),
        };
        // Max dimension is 6 (y axis).
        let fit = ModelFit::from_bounds(bounds, 3.0);
        assert!((fit.scale - 0.5).abs() < 1e-6);
    }

    #[test]
    fn fitted_centroid_lands_on_origin() {
        let bounds = Aabb {
            min: Vec3::new(2.0, 10.0, -6.0),
            max: Vec3::new(6.0, 14.0, -2.0),
        };
        let fit = ModelFit::from_bounds(bounds, 3.0);
        let fitted_centroid = bounds.centroid() * fit.scale + fit.offset;
        assert!(fitted_centroid.length() < 1e-5);
    }

    #[test]
    fn degenerate_box_falls_back_to_unit_scale() {
        let p = Vec3::new(3.0, -1.0, 2.0);
        let bounds = Aabb { min: p, max: p };
        let fit = ModelFit::from_bounds(bounds, 3.0);
        assert_eq!(fit.scale, 1.0);
        assert!(fit.scale.is_finite());
        // Still recentered on the (single) point.
        assert_eq!(fit.offset, -p);
    }

    #[test]
    fn from_points_covers_the_set() {
        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(-1.0, 5.0, 2.0),
            Vec3::new(3.0, -2.0, 1.0),
        ];
        let bounds = Aabb::from_points(&points).unwrap();
        assert_eq!(bounds.min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(bounds.max, Vec3::new(3.0, 5.0, 2.0));
        assert_eq!(Aabb::from_points(&[]), None);
    }
}
