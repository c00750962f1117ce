use super::room_polygon::WallSegment;
use crate::geometry::{Aabb, OpeningKind, OrientedRect};
use crate::math::{polygon_2d, Point2, Vector2};

/// Clearance footprint in front of a door, window or closet.
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningZone {
    /// Midpoint of the opening on the wall line.
    pub center: Point2,
    /// Unit vector along the wall, in traversal direction.
    pub along_dir: Vector2,
    /// Unit vector pointing out of the room.
    pub normal_dir: Vector2,
    pub width: f64,
    /// Extent across the wall line: wall thickness plus clearance margin.
    pub depth: f64,
    pub kind: OpeningKind,
    pub wall_name: String,
    pub bounding_box: Aabb,
}

impl OpeningZone {
    /// The zone as an oriented rectangle aligned with its wall.
    #[must_use]
    pub fn footprint(&self) -> OrientedRect {
        let angle = self.along_dir.y.atan2(self.along_dir.x).to_degrees();
        OrientedRect::new(self.center, self.width, self.depth, angle)
    }
}

/// Derives one [`OpeningZone`] per physical opening on a set of wall segments.
#[derive(Debug)]
pub struct DeriveOpeningZones<'a> {
    segments: &'a [WallSegment],
    depth: f64,
}

impl<'a> DeriveOpeningZones<'a> {
    /// Creates a new derivation over `segments`.
    ///
    /// * `depth` - Full zone extent across the wall line.
    #[must_use]
    pub fn new(segments: &'a [WallSegment], depth: f64) -> Self {
        Self { segments, depth }
    }

    /// Executes the derivation. Zones come out in segment order, then opening order.
    #[must_use]
    pub fn execute(&self) -> Vec<OpeningZone> {
        let mut zones = Vec::new();
        for segment in self.segments {
            let Some(along_dir) = segment.direction() else {
                if segment.wall.openings.iter().any(|o| o.kind.is_physical()) {
                    tracing::debug!(wall = %segment.name, "zero-length wall, openings skipped");
                }
                continue;
            };
            let normal_dir = polygon_2d::outward_normal(along_dir);

            for opening in segment.wall.openings.iter().filter(|o| o.kind.is_physical()) {
                let center = segment.start + along_dir * opening.midpoint();
                let mut zone = OpeningZone {
                    center,
                    along_dir,
                    normal_dir,
                    width: opening.width,
                    depth: self.depth,
                    kind: opening.kind,
                    wall_name: segment.name.clone(),
                    bounding_box: Aabb::default(),
                };
                zone.bounding_box = zone.footprint().aabb();
                zones.push(zone);
            }
        }
        tracing::debug!(zones = zones.len(), "derived opening zones");
        zones
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::{Opening, Wall};
    use crate::operations::room_polygon::BuildRoomPolygon;

    const DEPTH: f64 = 30.0;

    fn bedroom(south: Wall) -> Vec<Wall> {
        vec![
            Wall::new("north", 180.0),
            south,
            Wall::new("east", 144.0),
            Wall::new("west", 144.0),
        ]
    }

    fn zones_for(walls: &[Wall]) -> Vec<OpeningZone> {
        let poly = BuildRoomPolygon::new(walls).execute();
        DeriveOpeningZones::new(&poly.segments, DEPTH).execute()
    }

    #[test]
    fn door_on_south_wall() {
        let south = Wall::new("south", 180.0).with_opening(Opening::new(OpeningKind::Door, 72.0, 36.0));
        let zones = zones_for(&bedroom(south));

        assert_eq!(zones.len(), 1);
        let zone = &zones[0];
        assert_eq!(zone.kind, OpeningKind::Door);
        assert_eq!(zone.wall_name, "south");
        assert_relative_eq!(zone.center, Point2::new(90.0, 144.0), epsilon = 1e-9);
        // South wall runs right to left, so outward is +y.
        assert_relative_eq!(zone.along_dir, Vector2::new(-1.0, 0.0), epsilon = 1e-9);
        assert_relative_eq!(zone.normal_dir, Vector2::new(0.0, 1.0), epsilon = 1e-9);

        let b = zone.bounding_box;
        assert_relative_eq!(b.x, 72.0, epsilon = 1e-9);
        assert_relative_eq!(b.w, 36.0, epsilon = 1e-9);
        assert_relative_eq!(b.y, 144.0 - DEPTH / 2.0, epsilon = 1e-9);
        assert_relative_eq!(b.h, DEPTH, epsilon = 1e-9);
    }

    #[test]
    fn opening_on_vertical_wall_has_swapped_box() {
        let walls = vec![
            Wall::new("north", 180.0),
            Wall::new("south", 180.0),
            Wall::new("east", 144.0).with_opening(Opening::new(OpeningKind::Window, 20.0, 40.0)),
            Wall::new("west", 144.0),
        ];
        let zones = zones_for(&walls);
        let zone = &zones[0];
        assert_relative_eq!(zone.center, Point2::new(180.0, 40.0), epsilon = 1e-9);
        assert_relative_eq!(zone.normal_dir, Vector2::new(1.0, 0.0), epsilon = 1e-9);
        assert_relative_eq!(zone.bounding_box.w, DEPTH, epsilon = 1e-9);
        assert_relative_eq!(zone.bounding_box.h, 40.0, epsilon = 1e-9);
    }

    #[test]
    fn none_openings_are_skipped() {
        let south = Wall::new("south", 180.0)
            .with_opening(Opening::new(OpeningKind::None, 0.0, 0.0))
            .with_opening(Opening::new(OpeningKind::Closet, 10.0, 48.0));
        let zones = zones_for(&bedroom(south));
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].kind, OpeningKind::Closet);
    }

    #[test]
    fn zero_length_segment_is_skipped() {
        let walls = vec![
            Wall::new("a", 100.0),
            Wall::new("b", 0.0).with_opening(Opening::new(OpeningKind::Door, 0.0, 30.0)),
            Wall::new("c", 100.0),
        ];
        assert!(zones_for(&walls).is_empty());
    }

    #[test]
    fn opening_past_wall_end_is_kept() {
        let south = Wall::new("south", 180.0).with_opening(Opening::new(OpeningKind::Door, 170.0, 36.0));
        let zones = zones_for(&bedroom(south));
        assert_eq!(zones.len(), 1);
        // Extends past the west corner at x = 0.
        assert!(zones[0].bounding_box.x < 0.0);
    }

    #[test]
    fn angled_wall_box_is_conservative() {
        let walls: Vec<Wall> = (0..6)
            .map(|i| {
                let w = Wall::new(format!("w{i}"), 100.0);
                if i == 1 {
                    w.with_opening(Opening::new(OpeningKind::Door, 30.0, 40.0))
                } else {
                    w
                }
            })
            .collect();
        let zones = zones_for(&walls);
        let zone = &zones[0];
        for corner in zone.footprint().corners() {
            let b = zone.bounding_box;
            assert!(corner.x >= b.x - 1e-9 && corner.x <= b.x + b.w + 1e-9);
            assert!(corner.y >= b.y - 1e-9 && corner.y <= b.y + b.h + 1e-9);
        }
        assert!(zone.bounding_box.w > 40.0_f64.min(DEPTH));
    }
}
