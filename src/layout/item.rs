use slotmap::new_key_type;

use crate::geometry::{Aabb, OrientedRect};
use crate::math::Point2;

new_key_type! {
    /// Key of a [`FurnitureDefinition`] in a layout session's catalogue.
    pub struct FurnitureId;
}

/// A kind of furniture that can be placed: name, footprint and display color.
#[derive(Debug, Clone, PartialEq)]
pub struct FurnitureDefinition {
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

impl FurnitureDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, width: f64, height: f64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            color: color.into(),
        }
    }
}

/// A furniture instance placed in the room. `position` is its center.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem {
    pub id: u32,
    pub furniture: FurnitureId,
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub position: Point2,
    /// Always within `[0, 360)`.
    pub rotation_degrees: f64,
}

impl PlacedItem {
    /// Creates an unrotated item from a catalogue entry.
    #[must_use]
    pub fn new(id: u32, furniture: FurnitureId, def: &FurnitureDefinition, position: Point2) -> Self {
        Self {
            id,
            furniture,
            name: def.name.clone(),
            width: def.width,
            height: def.height,
            color: def.color.clone(),
            position,
            rotation_degrees: 0.0,
        }
    }

    /// Builder-style helper setting the rotation (normalized into `[0, 360)`).
    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation_degrees = normalize_degrees(degrees);
        self
    }

    #[must_use]
    pub fn footprint(&self) -> OrientedRect {
        OrientedRect::new(self.position, self.width, self.height, self.rotation_degrees)
    }

    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        self.footprint().corners()
    }

    #[must_use]
    pub fn aabb(&self) -> Aabb {
        self.footprint().aabb()
    }
}

/// Wraps an angle into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
