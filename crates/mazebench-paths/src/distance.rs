use mazebench_core::Point;

/// Manhattan (L1) distance between two points.
///
/// On a uniform-cost grid without diagonal movement this never
/// overestimates the remaining cost, so it is an admissible (and
/// consistent) A* heuristic.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(3, 4)), 7);
        assert_eq!(manhattan(Point::new(3, 4), Point::new(0, 0)), 7);
        assert_eq!(manhattan(Point::new(-2, 1), Point::new(2, -1)), 6);
        assert_eq!(manhattan(Point::ZERO, Point::ZERO), 0);
    }
}
