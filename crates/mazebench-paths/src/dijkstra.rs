use std::collections::BinaryHeap;
use std::time::Instant;

use mazebench_core::Point;

use crate::SearchRange;
use crate::report::SearchReport;
use crate::searcher::{HeapEntry, NO_PARENT};
use crate::traits::Pather;

impl SearchRange {
    /// Uniform-cost (Dijkstra) search from `from` to `to`.
    ///
    /// Every edge costs 1. The frontier is a binary heap with lazy
    /// deletion: a cell may sit in the heap several times with different
    /// costs, stale entries are skipped on pop, and a cell is relaxed
    /// (cost and parent updated, re-pushed) whenever a strictly better
    /// cost is found — even if it was already expanded once. The search
    /// stops at the first expansion of the goal.
    pub fn uniform_cost_path<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> SearchReport {
        let (start, goal) = self.endpoints(from, to);
        let cur_gen = self.begin();

        let t0 = Instant::now();
        let mut open: BinaryHeap<HeapEntry> = BinaryHeap::new();
        let mut seq = 0u32;

        {
            let n = &mut self.nodes[start];
            n.g = 0;
            n.parent = NO_PARENT;
            n.generation = cur_gen;
            n.open = true;
        }
        open.push(HeapEntry {
            f: 0,
            g: 0,
            seq,
            idx: start,
        });

        let mut expansions = 0usize;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(entry) = open.pop() {
            let ci = entry.idx;

            // Skip stale entries superseded by a later relaxation.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }
            self.nodes[ci].open = false;
            expansions += 1;

            if ci == goal {
                break;
            }
            let current_g = self.nodes[ci].g;
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen && tentative >= n.g {
                    continue;
                }
                n.g = tentative;
                n.parent = ci;
                n.generation = cur_gen;
                n.open = true;

                seq += 1;
                open.push(HeapEntry {
                    f: tentative,
                    g: tentative,
                    seq,
                    idx: ni,
                });
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
