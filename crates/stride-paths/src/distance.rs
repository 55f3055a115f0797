use stride_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible and consistent as an A* heuristic under 4-directional
/// movement with unit step cost.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
