mod strategy;

pub use strategy::LayoutStrategy;

use crate::geometry::{Aabb, Wall};
use crate::math::{polygon_2d, Point2, Vector2};

/// One wall placed in room coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct WallSegment {
    pub start: Point2,
    pub end: Point2,
    pub name: String,
    /// The wall this segment was laid out from, openings included.
    pub wall: Wall,
}

impl WallSegment {
    #[must_use]
    pub fn new(start: Point2, end: Point2, wall: &Wall) -> Self {
        Self {
            start,
            end,
            name: wall.name.clone(),
            wall: wall.clone(),
        }
    }

    /// Geometric length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Unit direction from `start` to `end`, or `None` for a zero-length segment.
    #[must_use]
    pub fn direction(&self) -> Option<Vector2> {
        polygon_2d::segment_direction(&self.start, &self.end)
    }

    fn translate(&mut self, offset: Vector2) {
        self.start += offset;
        self.end += offset;
    }
}

/// Extent of the room after normalization. `min` is always the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomBounds {
    pub min: Point2,
    pub max: Point2,
    pub width: f64,
    pub height: f64,
}

impl RoomBounds {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            min: Point2::origin(),
            max: Point2::new(width, height),
            width,
            height,
        }
    }

    #[must_use]
    pub fn as_aabb(&self) -> Aabb {
        Aabb::new(self.min.x, self.min.y, self.width, self.height)
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(self.min.x + self.width / 2.0, self.min.y + self.height / 2.0)
    }
}

/// Output of [`BuildRoomPolygon`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomPolygon {
    /// Segments in traversal order.
    pub segments: Vec<WallSegment>,
    /// `None` when the room has no walls.
    pub bounds: Option<RoomBounds>,
}

impl RoomPolygon {
    /// Boundary vertices: the start point of every segment.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point2> {
        self.segments.iter().map(|s| s.start).collect()
    }

    /// Returns `true` if the last segment ends where the first one starts.
    ///
    /// The polygon walk does not enforce this for arbitrary wall lengths.
    #[must_use]
    pub fn is_closed(&self, tolerance: f64) -> bool {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => (last.end - first.start).norm() <= tolerance,
            _ => false,
        }
    }
}

/// Converts an ordered wall list into absolute, origin-normalized segments.
#[derive(Debug)]
pub struct BuildRoomPolygon<'a> {
    walls: &'a [Wall],
}

impl<'a> BuildRoomPolygon<'a> {
    #[must_use]
    pub fn new(walls: &'a [Wall]) -> Self {
        Self { walls }
    }

    /// Executes the build. Never fails; an empty wall list gives an empty polygon.
    #[must_use]
    pub fn execute(&self) -> RoomPolygon {
        if self.walls.is_empty() {
            tracing::debug!("room has no walls, geometry cleared");
            return RoomPolygon::default();
        }

        let strategy = LayoutStrategy::classify(self.walls);
        let mut segments = strategy.lay_out(self.walls);
        let bounds = normalize(&mut segments);

        tracing::debug!(
            strategy = strategy.name(),
            segments = segments.len(),
            width = bounds.width,
            height = bounds.height,
            "built room polygon"
        );

        RoomPolygon {
            segments,
            bounds: Some(bounds),
        }
    }
}

/// Shifts all segments so the minimum x and y become zero and returns the span.
fn normalize(segments: &mut [WallSegment]) -> RoomBounds {
    let points: Vec<Point2> = segments.iter().flat_map(|s| [s.start, s.end]).collect();
    let extent = Aabb::from_points(&points);

    let offset = -extent.min().coords;
    for seg in segments.iter_mut() {
        seg.translate(offset);
    }
    RoomBounds::new(extent.w, extent.h)
}
