use std::time::Instant;

use mazebench_core::Point;

use crate::SearchRange;
use crate::report::SearchReport;
use crate::searcher::NO_PARENT;
use crate::traits::Pather;

impl SearchRange {
    /// Depth-first search from `from` to `to`.
    ///
    /// Same skeleton as BFS but with a LIFO frontier, so there is no
    /// shortest-path guarantee. Neighbors are pushed in the fixed order
    /// up, down, left, right, which means the last-pushed "right" neighbor
    /// is explored first.
    pub fn dfs_path<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> SearchReport {
        let (start, goal) = self.endpoints(from, to);
        let cur_gen = self.begin();

        let t0 = Instant::now();
        let mut stack: Vec<usize> = Vec::new();
        self.visit(start, NO_PARENT);
        stack.push(start);

        let mut expansions = 0usize;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = stack.pop() {
            expansions += 1;
            if ci == goal {
                break;
            }
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.nodes[ni].generation == cur_gen {
                    continue;
                }
                self.visit(ni, ci);
                stack.push(ni);
            }
        }

        let path = self.reconstruct(goal);
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;

        self.nbuf = nbuf;
        SearchReport {
            path,
            expansions,
            elapsed_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazebench_core::{MazeGrid, Tile};

    fn open_grid(w: i32, h: i32) -> MazeGrid {
        let mut g = MazeGrid::new(w, h);
        g.fill(Tile::Open);
        g
    }

    #[test]
    fn explores_right_neighbor_first() {
        // From the center of an open 3x3 grid the right neighbor is
        // pushed last, so it pops first and the goal is reached after
        // exactly two expansions.
        let g = open_grid(3, 3);
        let mut sr = SearchRange::for_grid(&g);
        let report = sr.dfs_path(&g, Point::new(1, 1), Point::new(2, 1));
        assert_eq!(report.expansions, 2);
        assert_eq!(report.path, vec![Point::new(1, 1), Point::new(2, 1)]);
    }

    #[test]
    fn follows_a_corridor() {
        let g = open_grid(4, 1);
        let mut sr = SearchRange::for_grid(&g);
        let report = sr.dfs_path(&g, Point::new(0, 0), Point::new(3, 0));
        assert_eq!(report.path_len(), 4);
        assert_eq!(report.expansions, 4);
    }

    #[test]
    fn finds_some_path_on_open_grid() {
        let g = open_grid(5, 5);
        let from = Point::new(1, 0);
        let to = Point::new(3, 4);
        let mut sr = SearchRange::for_grid(&g);
        let report = sr.dfs_path(&g, from, to);
        assert!(report.found());
        assert_eq!(report.path.first(), Some(&from));
        assert_eq!(report.path.last(), Some(&to));
        // DFS may wander: only a lower bound is guaranteed.
        assert!(report.path_len() >= 7);
    }
}
