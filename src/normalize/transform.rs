//! Rotation handling for source geometry.
//!
//! Design tools report a rotated node by the position of its *unrotated*
//! origin corner plus an angle. Layout wants the box the node actually
//! occupies, so rotated nodes are repositioned to the origin of the
//! axis-aligned box around their rotated corners ("loose bounds"):
//! 1. Take the 4 corners of the unrotated box
//! 2. Rotate each one around the node's origin
//! 3. Take the axis-aligned box of the rotated corners
//!
//! Only the origin is replaced (and, for lines, the height). Width and height
//! keep their source values; downstream stages apply the rotation itself.
//!
//! ## Rotation Convention
//!
//! Figma angles are in degrees, counter-clockwise positive, in a y-down
//! space. [`RotationTransform`] uses the SVG convention (clockwise positive),
//! so source angles are negated before use.

use crate::scene::Geometry;

use super::types::{BoundingBox, Point};

/// A 2D rotation around a center point.
#[derive(Debug, Clone, Copy)]
pub struct RotationTransform {
    /// Rotation angle in degrees (clockwise positive, per SVG convention)
    pub angle_degrees: f64,
    /// Center point of rotation
    pub center: Point,
}

impl RotationTransform {
    pub fn new(angle_degrees: f64, center: Point) -> Self {
        Self {
            angle_degrees,
            center,
        }
    }

    /// Build the transform for a source rotation (counter-clockwise positive)
    /// around the node's origin.
    pub fn from_source(rotation: f64, origin: Point) -> Self {
        Self::new(-rotation, origin)
    }

    /// Check if this is effectively a no-op (0° rotation).
    pub fn is_identity(&self) -> bool {
        self.angle_degrees.abs() < f64::EPSILON
    }

    /// Rotate a point around the center.
    ///
    /// In a y-down system, clockwise rotation is:
    /// ```text
    /// x' = cx + (x - cx) * cos(θ) - (y - cy) * sin(θ)
    /// y' = cy + (x - cx) * sin(θ) + (y - cy) * cos(θ)
    /// ```
    pub fn transform_point(&self, point: Point) -> Point {
        if self.is_identity() {
            return point;
        }

        let radians = self.angle_degrees.to_radians();
        let (sin_a, cos_a) = radians.sin_cos();

        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;

        Point {
            x: self.center.x + dx * cos_a - dy * sin_a,
            y: self.center.y + dx * sin_a + dy * cos_a,
        }
    }

    /// Axis-aligned box around the rotated corners of `bounds`.
    pub fn transform_bounds(&self, bounds: &BoundingBox) -> BoundingBox {
        if self.is_identity() {
            return *bounds;
        }

        BoundingBox::from_points(bounds.corners().map(|p| self.transform_point(p)))
            .unwrap_or(*bounds)
    }
}

/// Whether a source angle counts as rotated: it must round to a non-zero
/// whole degree. Halves round towards positive infinity, so -0.5 is not
/// rotated while 0.5 is.
pub fn is_rotated(rotation: f64) -> bool {
    (rotation + 0.5).floor() != 0.0
}

/// Source box with the origin moved to the rotated bounding box. Width and
/// height stay those of the unrotated node.
pub fn rotation_compensated_bounds(geometry: &Geometry) -> BoundingBox {
    let bounds = geometry.bounds();
    if !is_rotated(geometry.rotation) {
        return bounds;
    }

    let transform = RotationTransform::from_source(geometry.rotation, Point::new(bounds.x, bounds.y));
    let rotated = transform.transform_bounds(&bounds);

    BoundingBox {
        x: rotated.x,
        y: rotated.y,
        width: bounds.width,
        height: bounds.height,
    }
}
