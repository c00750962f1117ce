use crate::math::Point2;

/// An axis-aligned bounding box in room coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Aabb {
    #[must_use]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Smallest box enclosing all `points`. An empty slice yields a zero box at the origin.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };
        let (mut min_x, mut min_y) = (first.x, first.y);
        let (mut max_x, mut max_y) = (first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    #[must_use]
    pub fn min(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    #[must_use]
    pub fn max(&self) -> Point2 {
        Point2::new(self.x + self.w, self.y + self.h)
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap test: boxes that only share an edge do not intersect.
    #[must_use]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    /// True if `other` lies entirely within this box (edges inclusive).
    #[must_use]
    pub fn contains(&self, other: &Aabb) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.w <= self.x + self.w
            && other.y + other.h <= self.y + self.h
    }
}
