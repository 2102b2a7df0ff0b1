//! Four classical graph-search strategies over maze grids.
//!
//! Each strategy walks the open cells of a grid from a start cell toward a
//! goal cell and reports the path it found together with how many cells it
//! expanded and how long the search took:
//!
//! | Strategy | Frontier | Shortest path? |
//! |---|---|---|
//! | BFS ([`SearchRange::bfs_path`]) | FIFO queue | yes (edge count) |
//! | DFS ([`SearchRange::dfs_path`]) | LIFO stack | no |
//! | Uniform cost ([`SearchRange::uniform_cost_path`]) | min-cost heap | yes |
//! | A* ([`SearchRange::astar_path`]) | min-(f, g) heap | yes |
//!
//! All four run through [`SearchRange`], which owns and reuses the internal
//! node caches so repeated solves incur no allocations after warm-up. The
//! grid (or any other map type) plugs in through the [`Pather`] neighbor
//! trait; an unreachable goal is reported as an empty path, not an error.

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod report;
mod searcher;
mod traits;

pub use distance::manhattan;
pub use report::{SearchReport, Strategy};
pub use searcher::SearchRange;
pub use traits::Pather;
