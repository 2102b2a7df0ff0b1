use mazebench_core::{MazeGrid, Point};

use crate::report::{SearchReport, Strategy};
use crate::traits::Pather;

/// Parent sentinel: only the start cell carries it.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Internal per-cell search state
// ---------------------------------------------------------------------------

/// Flat per-cell record shared by all four strategies.
///
/// `generation` marks the record as belonging to the current solve;
/// records from earlier solves are invalidated by bumping the counter
/// instead of clearing the array.
#[derive(Clone)]
pub(crate) struct Node {
    /// Cost from the start (cost-based strategies only).
    pub(crate) g: i32,
    /// Index of the predecessor, or [`NO_PARENT`] for the start.
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    /// Whether the cell currently sits on the frontier (heap strategies).
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: NO_PARENT,
            generation: 0,
            open: false,
        }
    }
}

/// Frontier entry for the heap-based strategies, ordered so that
/// `BinaryHeap` (a max-heap) pops the smallest `(f, g, seq)` first.
///
/// `seq` is a per-solve insertion counter: entries with equal `f` and `g`
/// pop in the order they were pushed, which keeps heap solves
/// deterministic.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct HeapEntry {
    pub(crate) f: i32,
    pub(crate) g: i32,
    pub(crate) seq: u32,
    pub(crate) idx: usize,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .f
            .cmp(&self.f)
            .then(other.g.cmp(&self.g))
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchRange
// ---------------------------------------------------------------------------

/// Central coordinator for searches over a `width × height` grid.
///
/// Owns the flat node array and scratch buffers so that repeated solves
/// reuse allocations. No search state survives a solve: each entry point
/// bumps the generation counter, so results only ever reflect the current
/// grid, start, and goal.
pub struct SearchRange {
    width: usize,
    height: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    /// Shared scratch buffer for neighbor queries.
    pub(crate) nbuf: Vec<Point>,
}

impl SearchRange {
    /// Create a search range for a `width × height` grid.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0) as usize;
        let height = height.max(0) as usize;
        Self {
            width,
            height,
            nodes: vec![Node::default(); width * height],
            generation: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Create a search range matching a grid's dimensions.
    pub fn for_grid(grid: &MazeGrid) -> Self {
        Self::new(grid.width(), grid.height())
    }

    /// Run the given strategy. This is the dispatch point for frontends
    /// that let the user pick a strategy per solve.
    pub fn solve<P: Pather>(
        &mut self,
        strategy: Strategy,
        pather: &P,
        from: Point,
        to: Point,
    ) -> SearchReport {
        match strategy {
            Strategy::Bfs => self.bfs_path(pather, from, to),
            Strategy::Dfs => self.dfs_path(pather, from, to),
            Strategy::UniformCost => self.uniform_cost_path(pather, from, to),
            Strategy::AStar => self.astar_path(pather, from, to),
        }
    }

    // -----------------------------------------------------------------------
    // Shared plumbing for the strategy implementations
    // -----------------------------------------------------------------------

    /// Resolve start and goal to flat indices, failing fast on coordinates
    /// outside the range (a caller contract violation).
    pub(crate) fn endpoints(&self, from: Point, to: Point) -> (usize, usize) {
        let Some(start) = self.idx(from) else {
            panic!(
                "start {from} outside the {}x{} search range",
                self.width, self.height
            );
        };
        let Some(goal) = self.idx(to) else {
            panic!(
                "goal {to} outside the {}x{} search range",
                self.width, self.height
            );
        };
        (start, goal)
    }

    /// Begin a new solve: bump the generation so every node record from
    /// earlier solves becomes stale.
    pub(crate) fn begin(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Mark a cell visited in the current solve with the given parent.
    pub(crate) fn visit(&mut self, idx: usize, parent: usize) {
        let generation = self.generation;
        let n = &mut self.nodes[idx];
        n.parent = parent;
        n.generation = generation;
    }

    /// Walk parent links back from the goal and reverse.
    ///
    /// Returns an empty path if the goal was never visited during the
    /// current solve; otherwise the path starts at the start cell (the one
    /// with the [`NO_PARENT`] sentinel) and ends at the goal.
    pub(crate) fn reconstruct(&self, goal: usize) -> Vec<Point> {
        if self.nodes[goal].generation != self.generation {
            return Vec::new();
        }
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != NO_PARENT {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazebench_core::Tile;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn open_grid(w: i32, h: i32) -> MazeGrid {
        let mut g = MazeGrid::new(w, h);
        g.fill(Tile::Open);
        g
    }

    /// A 5x5 grid split by a full wall column: nothing right of x = 2 is
    /// reachable from the left half.
    fn split_grid() -> MazeGrid {
        let mut g = open_grid(5, 5);
        for y in 0..5 {
            g.set(Point::new(2, y), Tile::Wall);
        }
        g
    }

    fn assert_cardinal_path(path: &[Point], from: Point, to: Point) {
        assert_eq!(path.first(), Some(&from));
        assert_eq!(path.last(), Some(&to));
        for pair in path.windows(2) {
            let d = pair[1] - pair[0];
            assert_eq!(d.x.abs() + d.y.abs(), 1, "non-cardinal step {d:?}");
        }
    }

    #[test]
    fn every_strategy_finds_a_path() {
        let g = open_grid(5, 5);
        let from = Point::new(1, 0);
        let to = Point::new(3, 4);
        let mut sr = SearchRange::for_grid(&g);
        for strategy in Strategy::ALL {
            let report = sr.solve(strategy, &g, from, to);
            assert!(report.found(), "{strategy} found no path");
            assert_cardinal_path(&report.path, from, to);
        }
    }

    #[test]
    fn unreachable_goal_expands_every_reachable_cell() {
        let g = split_grid();
        let from = Point::new(0, 0);
        let to = Point::new(4, 0);
        let mut sr = SearchRange::for_grid(&g);
        for strategy in Strategy::ALL {
            let report = sr.solve(strategy, &g, from, to);
            assert!(!report.found(), "{strategy} crossed the wall");
            // The left half is 2 columns x 5 rows.
            assert_eq!(report.expansions, 10, "{strategy} expansion count");
        }
    }

    #[test]
    fn solves_are_idempotent() {
        let g = open_grid(7, 7);
        let from = Point::new(1, 0);
        let to = Point::new(5, 6);
        let mut sr = SearchRange::for_grid(&g);
        for strategy in Strategy::ALL {
            let a = sr.solve(strategy, &g, from, to);
            let b = sr.solve(strategy, &g, from, to);
            assert_eq!(a.path, b.path, "{strategy} path changed between runs");
            assert_eq!(a.expansions, b.expansions);
        }
    }

    #[test]
    fn optimal_strategies_agree_on_generated_mazes() {
        for seed in 0..4 {
            let maze = mazebench_gen::MazeGen::new(StdRng::seed_from_u64(seed)).generate(21, 21);
            let from = mazebench_gen::entrance(&maze);
            let to = mazebench_gen::exit(&maze);
            let mut sr = SearchRange::for_grid(&maze);

            let bfs = sr.solve(Strategy::Bfs, &maze, from, to);
            let dfs = sr.solve(Strategy::Dfs, &maze, from, to);
            let uc = sr.solve(Strategy::UniformCost, &maze, from, to);
            let astar = sr.solve(Strategy::AStar, &maze, from, to);

            assert!(bfs.found(), "entrance and exit disconnected (seed {seed})");
            assert_cardinal_path(&bfs.path, from, to);
            assert_cardinal_path(&dfs.path, from, to);

            // BFS is optimal by edge count; with unit edge costs the
            // cost-based strategies must match it exactly, and DFS can
            // only be worse or equal.
            assert_eq!(uc.path_len(), bfs.path_len(), "seed {seed}");
            assert_eq!(astar.path_len(), bfs.path_len(), "seed {seed}");
            assert!(dfs.path_len() >= bfs.path_len(), "seed {seed}");
        }
    }

    #[test]
    #[should_panic(expected = "outside the 5x5 search range")]
    fn out_of_range_start_panics() {
        let g = open_grid(5, 5);
        let mut sr = SearchRange::for_grid(&g);
        let _ = sr.bfs_path(&g, Point::new(-1, 0), Point::new(3, 4));
    }
}
