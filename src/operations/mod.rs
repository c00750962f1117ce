pub mod collision;
pub mod opening_zones;
pub mod room_polygon;

pub use collision::{check_collisions, CheckCollisions, Collision};
pub use opening_zones::{DeriveOpeningZones, OpeningZone};
pub use room_polygon::{BuildRoomPolygon, LayoutStrategy, RoomBounds, RoomPolygon, WallSegment};

use crate::config::LayoutConfig;
use crate::geometry::Room;

/// Everything derived from a room's walls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomGeometry {
    pub wall_segments: Vec<WallSegment>,
    pub opening_zones: Vec<OpeningZone>,
    /// `None` for a room without walls.
    pub bounds: Option<RoomBounds>,
}

/// Builds wall segments, room bounds and opening zones for `room`.
///
/// Total: a room without walls yields empty geometry.
#[must_use]
pub fn build_geometry(room: &Room, config: &LayoutConfig) -> RoomGeometry {
    let RoomPolygon { segments, bounds } = BuildRoomPolygon::new(&room.walls).execute();
    let opening_zones = DeriveOpeningZones::new(&segments, config.zone_depth()).execute();
    RoomGeometry {
        wall_segments: segments,
        opening_zones,
        bounds,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Opening, OpeningKind, Wall};

    #[test]
    fn empty_room_builds_empty_geometry() {
        let geometry = build_geometry(&Room::default(), &LayoutConfig::default());
        assert_eq!(geometry, RoomGeometry::default());
    }

    #[test]
    fn zone_depth_follows_config() {
        let room = Room::new(
            "hall",
            vec![
                Wall::new("north", 120.0)
                    .with_opening(Opening::new(OpeningKind::Window, 30.0, 40.0)),
                Wall::new("south", 120.0),
                Wall::new("east", 96.0),
                Wall::new("west", 96.0),
            ],
        );
        let config = LayoutConfig {
            wall_thickness: 4.0,
            clearance_margin: 12.0,
            ..LayoutConfig::default()
        };
        let geometry = build_geometry(&room, &config);
        assert_eq!(geometry.wall_segments.len(), 4);
        assert_eq!(geometry.opening_zones.len(), 1);
        assert!((geometry.opening_zones[0].depth - 16.0).abs() < 1e-12);
        assert!((geometry.opening_zones[0].bounding_box.h - 16.0).abs() < 1e-9);
    }
}
