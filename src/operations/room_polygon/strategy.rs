use std::collections::HashMap;

use super::WallSegment;
use crate::geometry::Wall;
use crate::math::{Point2, Vector2};

/// How a wall list is turned into a closed boundary.
///
/// Decided once per build by looking at wall names only.
#[derive(Debug, Clone, Copy)]
pub enum LayoutStrategy<'a> {
    /// Walls named `north`, `east`, `south` and `west` (any case) form an
    /// axis-aligned rectangle sized by the longer wall of each opposite pair.
    Rectangular {
        north: &'a Wall,
        east: &'a Wall,
        south: &'a Wall,
        west: &'a Wall,
    },
    /// Any other wall set: walls are laid end to end, turning `360° / N`
    /// after each one.
    Polygon,
}

impl<'a> LayoutStrategy<'a> {
    /// Picks the strategy for `walls`. Duplicate names collide and the last one wins.
    #[must_use]
    pub fn classify(walls: &'a [Wall]) -> Self {
        let mut by_name: HashMap<String, &'a Wall> = HashMap::with_capacity(walls.len());
        for wall in walls {
            by_name.insert(wall.name.to_lowercase(), wall);
        }
        match (
            by_name.get("north"),
            by_name.get("east"),
            by_name.get("south"),
            by_name.get("west"),
        ) {
            (Some(&north), Some(&east), Some(&south), Some(&west)) => Self::Rectangular {
                north,
                east,
                south,
                west,
            },
            _ => Self::Polygon,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rectangular { .. } => "rectangular",
            Self::Polygon => "polygon",
        }
    }

    /// Lays out raw (not yet normalized) segments.
    pub(super) fn lay_out(&self, walls: &[Wall]) -> Vec<WallSegment> {
        match *self {
            Self::Rectangular {
                north,
                east,
                south,
                west,
            } => rectangle(north, east, south, west),
            Self::Polygon => walk(walls),
        }
    }
}

/// Clockwise rectangle: north along y = 0, east down x = width, south back
/// along y = height, west up x = 0.
fn rectangle(north: &Wall, east: &Wall, south: &Wall, west: &Wall) -> Vec<WallSegment> {
    let width = north.length.max(south.length);
    let height = east.length.max(west.length);

    let top_left = Point2::new(0.0, 0.0);
    let top_right = Point2::new(width, 0.0);
    let bottom_right = Point2::new(width, height);
    let bottom_left = Point2::new(0.0, height);

    vec![
        WallSegment::new(top_left, top_right, north),
        WallSegment::new(top_right, bottom_right, east),
        WallSegment::new(bottom_right, bottom_left, south),
        WallSegment::new(bottom_left, top_left, west),
    ]
}

/// Walks each wall forward from heading 0, turning by an equal share of a
/// full turn after each one. Closure is not checked.
#[allow(clippy::cast_precision_loss)]
fn walk(walls: &[Wall]) -> Vec<WallSegment> {
    if walls.is_empty() {
        return Vec::new();
    }
    let turn = 360.0 / walls.len() as f64;

    let mut segments = Vec::with_capacity(walls.len());
    let mut cursor = Point2::new(0.0, 0.0);
    let mut heading: f64 = 0.0;
    for wall in walls {
        let rad = heading.to_radians();
        let end = cursor + Vector2::new(rad.cos(), rad.sin()) * wall.length;
        segments.push(WallSegment::new(cursor, end, wall));
        cursor = end;
        heading += turn;
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walls(named: &[(&str, f64)]) -> Vec<Wall> {
        named.iter().map(|&(n, l)| Wall::new(n, l)).collect()
    }

    #[test]
    fn cardinal_names_pick_rectangle() {
        let w = walls(&[("West", 1.0), ("NORTH", 1.0), ("south", 1.0), ("East", 1.0)]);
        assert!(matches!(LayoutStrategy::classify(&w), LayoutStrategy::Rectangular { .. }));
    }

    #[test]
    fn missing_cardinal_name_falls_back() {
        let w = walls(&[("north", 1.0), ("south", 1.0), ("east", 1.0), ("left", 1.0)]);
        assert!(matches!(LayoutStrategy::classify(&w), LayoutStrategy::Polygon));
    }

    #[test]
    fn extra_walls_still_pick_rectangle() {
        let w = walls(&[
            ("north", 1.0),
            ("south", 1.0),
            ("east", 1.0),
            ("west", 1.0),
            ("nook", 1.0),
        ]);
        assert_eq!(LayoutStrategy::classify(&w).name(), "rectangular");
    }

    #[test]
    fn duplicate_name_last_wins() {
        let w = walls(&[
            ("north", 100.0),
            ("south", 50.0),
            ("east", 40.0),
            ("west", 40.0),
            ("North", 70.0),
        ]);
        let LayoutStrategy::Rectangular { north, .. } = LayoutStrategy::classify(&w) else {
            panic!("expected rectangular strategy");
        };
        assert!((north.length - 70.0).abs() < 1e-12);
    }

    #[test]
    fn walk_of_four_walls_matches_rectangle_order() {
        let w = walls(&[("a", 10.0), ("b", 5.0), ("c", 10.0), ("d", 5.0)]);
        let segs = walk(&w);
        let ends: Vec<(f64, f64)> = segs.iter().map(|s| (s.end.x, s.end.y)).collect();
        let expected = [(10.0, 0.0), (10.0, 5.0), (0.0, 5.0), (0.0, 0.0)];
        for (got, want) in ends.iter().zip(expected) {
            assert!((got.0 - want.0).abs() < 1e-9 && (got.1 - want.1).abs() < 1e-9);
        }
    }
}
