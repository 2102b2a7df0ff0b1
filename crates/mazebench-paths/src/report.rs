use std::fmt;

use mazebench_core::Point;

/// Which frontier discipline to run a solve with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Breadth-first search (FIFO frontier).
    Bfs,
    /// Depth-first search (LIFO frontier).
    Dfs,
    /// Uniform-cost search / Dijkstra (min-cost frontier).
    UniformCost,
    /// A* with the Manhattan heuristic (min-(f, g) frontier).
    AStar,
}

impl Strategy {
    /// All strategies, in comparison-table order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::UniformCost,
        Strategy::AStar,
    ];

    /// Human-readable name, as shown by a display frontend.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
            Strategy::UniformCost => "Uniform Cost",
            Strategy::AStar => "A*",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The outcome of a single solve.
///
/// An unreachable goal is a normal outcome, not an error: the path is
/// empty while `expansions` and `elapsed_ms` still describe the work done.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    /// Ordered cells from start to goal inclusive, or empty if the goal
    /// was never reached.
    pub path: Vec<Point>,
    /// Cells dequeued from the frontier and expanded.
    pub expansions: usize,
    /// Wall-clock duration of the search loop, in fractional milliseconds.
    pub elapsed_ms: f64,
}

impl SearchReport {
    /// Whether a path to the goal was found.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Path length in cells (0 when no path was found).
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn report_round_trip() {
        let report = SearchReport {
            path: vec![Point::new(1, 0), Point::new(1, 1)],
            expansions: 2,
            elapsed_ms: 0.25,
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: SearchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }

    #[test]
    fn strategy_round_trip() {
        let json = serde_json::to_string(&Strategy::UniformCost).unwrap();
        let back: Strategy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Strategy::UniformCost);
    }
}
