use nalgebra::Rotation2;

use super::Aabb;
use crate::math::{Point2, Vector2};

/// Half-extent sign pattern, walked in a consistent winding.
const SIGNS: [(f64, f64); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

/// A rectangle of `width × height` centered at `center`, rotated by
/// `rotation_degrees` about that center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedRect {
    pub center: Point2,
    pub width: f64,
    pub height: f64,
    pub rotation_degrees: f64,
}

impl OrientedRect {
    #[must_use]
    pub fn new(center: Point2, width: f64, height: f64, rotation_degrees: f64) -> Self {
        Self {
            center,
            width,
            height,
            rotation_degrees,
        }
    }

    /// The four rotated corners.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        corners_of(self.center, self.width, self.height, self.rotation_degrees)
    }

    /// Conservative axis-aligned bounds of the rotated rectangle.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        aabb_of(&self.corners())
    }
}

/// Computes the corners of a rotated rectangle.
///
/// The offsets `(±w/2, ±h/2)` are rotated by `rotation_degrees` and
/// translated to `center`.
#[must_use]
pub fn corners_of(center: Point2, width: f64, height: f64, rotation_degrees: f64) -> [Point2; 4] {
    let rot = Rotation2::new(rotation_degrees.to_radians());
    let (half_w, half_h) = (width / 2.0, height / 2.0);
    SIGNS.map(|(sx, sy)| center + rot * Vector2::new(sx * half_w, sy * half_h))
}

/// Axis-aligned bounding box of a set of corners.
#[must_use]
pub fn aabb_of(corners: &[Point2]) -> Aabb {
    Aabb::from_points(corners)
}
