use super::{Point2, Vector2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// In the y-down room frame a clockwise walk on screen yields a positive area.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// Returns `None` if the segment has zero length.
#[must_use]
pub fn segment_direction(a: &Point2, b: &Point2) -> Option<Vector2> {
    let d = b - a;
    let len = d.norm();
    if len < TOLERANCE {
        return None;
    }
    Some(d / len)
}

/// Returns the outward normal of a wall direction.
///
/// Room boundaries are walked clockwise on screen (y down), so the exterior
/// lies on the left-hand side in math terms: `(dir.y, -dir.x)`.
#[must_use]
pub fn outward_normal(dir: Vector2) -> Vector2 {
    Vector2::new(dir.y, -dir.x)
}

/// Projects every point onto `axis`, returning the `(min, max)` interval.
#[must_use]
pub fn project_onto_axis(points: &[Point2], axis: &Vector2) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for p in points {
        let dot = p.coords.dot(axis);
        lo = lo.min(dot);
        hi = hi.max(dot);
    }
    (lo, hi)
}

/// Edge normals of a closed polygon, skipping zero-length edges.
fn edge_normals(points: &[Point2]) -> impl Iterator<Item = Vector2> + '_ {
    let n = points.len();
    (0..n).filter_map(move |i| {
        let edge = points[(i + 1) % n] - points[i];
        if edge.norm_squared() < TOLERANCE * TOLERANCE {
            None
        } else {
            Some(Vector2::new(-edge.y, edge.x))
        }
    })
}

/// True if the interiors of two convex polygons overlap (separating axis test).
///
/// Every edge normal of both polygons is a candidate axis. Touching along an
/// edge or at a corner is not an overlap, and a polygon with zero area never
/// overlaps anything.
#[must_use]
pub fn convex_polygons_overlap(a: &[Point2], b: &[Point2]) -> bool {
    if signed_area_2d(a).abs() < TOLERANCE || signed_area_2d(b).abs() < TOLERANCE {
        return false;
    }
    for axis in edge_normals(a).chain(edge_normals(b)) {
        let (min_a, max_a) = project_onto_axis(a, &axis);
        let (min_b, max_b) = project_onto_axis(b, &axis);
        if max_a <= min_b || max_b <= min_a {
            return false;
        }
    }
    true
}
