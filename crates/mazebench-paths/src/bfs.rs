use std::collections::VecDeque;
use std::time::Instant;

use mazebench_core::Point;

use crate::SearchRange;
use crate::report::SearchReport;
use crate::searcher::NO_PARENT;
use crate::traits::Pather;

impl SearchRange {
    /// Breadth-first search from `from` to `to`.
    ///
    /// The FIFO frontier expands cells in non-decreasing depth order, so
    /// the returned path has the minimum possible edge count. Cells are
    /// marked visited when discovered, and the search stops as soon as the
    /// goal is dequeued.
    pub fn bfs_path<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> SearchReport {
        let (start, goal) = self.endpoints(from, to);
        let cur_gen = self.begin();

        let t0 = Instant::now();
        let mut queue: VecDeque<usize> = VecDeque::new();
        self.visit(start, NO_PARENT);
        queue.push_back(start);

        let mut expansions = 0usize;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = queue.pop_front() {
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
                queue.push_back(ni);
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
