//! Furniture collision detection.
//!
//! Item-vs-item checks use the separating axis test on the rotated
//! footprints. Wall and opening checks compare axis-aligned bounds only,
//! since they drive advisory warnings rather than hard constraints.

use super::opening_zones::OpeningZone;
use super::room_polygon::RoomBounds;
use crate::geometry::OpeningKind;
use crate::layout::PlacedItem;
use crate::math::polygon_2d;

/// A single overlap reported for a subject item.
#[derive(Debug, Clone, PartialEq)]
pub enum Collision {
    /// Overlaps another placed item.
    Furniture { other: u32 },
    /// Bounding box leaves the room bounds.
    Wall,
    /// Bounding box enters an opening's clearance zone.
    Opening {
        /// Index into the zone slice the check ran against.
        zone: usize,
        kind: OpeningKind,
        wall_name: String,
    },
}

impl Collision {
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Furniture { .. } => "furniture",
            Self::Wall => "wall",
            Self::Opening { .. } => "opening",
        }
    }
}

/// Collects every collision of one item against the rest of the layout.
#[derive(Debug)]
pub struct CheckCollisions<'a> {
    subject: &'a PlacedItem,
    items: &'a [PlacedItem],
    bounds: Option<&'a RoomBounds>,
    zones: &'a [OpeningZone],
}

impl<'a> CheckCollisions<'a> {
    /// Creates a new check.
    ///
    /// `items` may contain the subject itself; it is skipped by id.
    /// With no `bounds` (a room without walls) the wall check is skipped.
    #[must_use]
    pub fn new(
        subject: &'a PlacedItem,
        items: &'a [PlacedItem],
        bounds: Option<&'a RoomBounds>,
        zones: &'a [OpeningZone],
    ) -> Self {
        Self {
            subject,
            items,
            bounds,
            zones,
        }
    }

    /// Runs all checks. An empty result means no collisions.
    #[must_use]
    pub fn execute(&self) -> Vec<Collision> {
        let mut collisions = Vec::new();
        let corners = self.subject.corners();
        let aabb = self.subject.aabb();

        for other in self.items.iter().filter(|o| o.id != self.subject.id) {
            if polygon_2d::convex_polygons_overlap(&corners, &other.corners()) {
                collisions.push(Collision::Furniture { other: other.id });
            }
        }

        if let Some(bounds) = self.bounds {
            if !bounds.as_aabb().contains(&aabb) {
                collisions.push(Collision::Wall);
            }
        }

        for (index, zone) in self.zones.iter().enumerate() {
            if aabb.intersects(&zone.bounding_box) {
                collisions.push(Collision::Opening {
                    zone: index,
                    kind: zone.kind,
                    wall_name: zone.wall_name.clone(),
                });
            }
        }

        if !collisions.is_empty() {
            tracing::debug!(
                item = self.subject.id,
                count = collisions.len(),
                "collisions detected"
            );
        }
        collisions
    }
}

/// Convenience wrapper around [`CheckCollisions`].
#[must_use]
pub fn check_collisions(
    subject: &PlacedItem,
    items: &[PlacedItem],
    bounds: Option<&RoomBounds>,
    zones: &[OpeningZone],
) -> Vec<Collision> {
    CheckCollisions::new(subject, items, bounds, zones).execute()
}
