//! Maze generation via randomized recursive backtracking.
//!
//! [`MazeGen`] carves a perfect maze on the odd-coordinate sublattice of a
//! grid of walls, forces an entrance and an exit on the border, then opens
//! a handful of random interior cells. The extra openings deliberately
//! break maze perfection so that different search strategies can return
//! genuinely different-quality answers on the same grid.
//!
//! The random source is an explicit parameter of the generator, so seeded
//! generation is reproducible:
//!
//! ```
//! use mazebench_gen::MazeGen;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut mazegen = MazeGen::new(StdRng::seed_from_u64(7));
//! let maze = mazegen.generate(21, 21);
//! assert!(maze.is_open(mazebench_gen::entrance(&maze)));
//! ```

use mazebench_core::{MazeGrid, Point, Tile};
use rand::{Rng, RngExt};
use rand::seq::SliceRandom;

/// The four cardinal carving directions (unit steps).
const DIRS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(1, 0),
];

/// One frame of the explicit carving stack: a cell, its shuffled direction
/// order, and the next direction to try when the frame resumes.
struct Frame {
    pos: Point,
    dirs: [Point; 4],
    next: usize,
}

/// Maze generator carrying its own random source.
pub struct MazeGen<R: Rng> {
    rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator using the given random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a maze of roughly the requested dimensions.
    ///
    /// Even dimensions are incremented to the next odd value so that
    /// carving lands on a consistent parity lattice; callers should read
    /// the actual size back from the returned grid.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is below 3.
    pub fn generate(&mut self, width: i32, height: i32) -> MazeGrid {
        assert!(
            width >= 3 && height >= 3,
            "maze dimensions must be at least 3x3, got {width}x{height}"
        );
        let width = if width % 2 == 0 { width + 1 } else { width };
        let height = if height % 2 == 0 { height + 1 } else { height };

        let mut grid = MazeGrid::new(width, height);
        self.carve(&mut grid, Point::new(1, 1));

        // Entrance on the top border, exit on the bottom border.
        grid.set(Point::new(1, 0), Tile::Open);
        grid.set(Point::new(width - 2, height - 1), Tile::Open);

        let extra = (width * height) / 10;
        for _ in 0..extra {
            let x = self.rng.random_range(1..=width - 2);
            let y = self.rng.random_range(1..=height - 2);
            grid.set(Point::new(x, y), Tile::Open);
        }

        log::debug!(
            "generated {}x{} maze: {} open cells, {} extra openings",
            width,
            height,
            grid.count(Tile::Open),
            extra,
        );
        grid
    }

    /// Depth-first carve from `start`, using an explicit stack rather than
    /// call-stack recursion so large mazes cannot overflow.
    ///
    /// Each first visit opens the cell two steps away together with the
    /// intermediate cell, producing a spanning tree on the odd-coordinate
    /// sublattice.
    fn carve(&mut self, grid: &mut MazeGrid, start: Point) {
        grid.set(start, Tile::Open);
        let mut stack = vec![Frame {
            pos: start,
            dirs: self.shuffled_dirs(),
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            if frame.next == DIRS.len() {
                stack.pop();
                continue;
            }
            let d = frame.dirs[frame.next];
            frame.next += 1;
            let pos = frame.pos;

            // The wall check must happen when the direction is tried, not
            // when the frame is created: a sibling branch may have carved
            // through here in the meantime.
            let target = pos.shift(d.x * 2, d.y * 2);
            if grid.at(target) == Some(Tile::Wall) {
                grid.set(pos.shift(d.x, d.y), Tile::Open);
                grid.set(target, Tile::Open);
                stack.push(Frame {
                    pos: target,
                    dirs: self.shuffled_dirs(),
                    next: 0,
                });
            }
        }
    }

    fn shuffled_dirs(&mut self) -> [Point; 4] {
        let mut dirs = DIRS;
        dirs.shuffle(&mut self.rng);
        dirs
    }
}

/// The entrance cell the generator always opens: top border, column 1.
pub fn entrance(_grid: &MazeGrid) -> Point {
    Point::new(1, 0)
}

/// The exit cell the generator always opens: bottom border, second-to-last
/// column.
pub fn exit(grid: &MazeGrid) -> Point {
    Point::new(grid.width() - 2, grid.height() - 1)
}
