use mazebench_core::{MazeGrid, Point};

/// Fixed neighbor order: up, down, left, right.
///
/// DFS pushes neighbors onto its stack in this order, so the last one
/// pushed ("right") is explored first. Changing the order changes DFS
/// paths and expansion counts, so tests pin it down.
pub(crate) const CARDINALS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(1, 0),
];

/// Minimal search interface — provides neighbor enumeration.
pub trait Pather {
    /// Append the admissible neighbors of `p` into `buf`. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Cardinal movement over open cells, no diagonals.
impl Pather for MazeGrid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for d in CARDINALS {
            let n = p + d;
            if self.is_open(n) {
                buf.push(n);
            }
        }
    }
}
