//! Core types shared by the maze generator and the search strategies.
//!
//! - [`Point`]: a 2D integer coordinate (x = column, y = row, y grows down).
//! - [`Tile`]: the state of a single maze cell, wall or open.
//! - [`MazeGrid`]: an owned rectangular grid of tiles.
//!
//! A grid is produced once by the generator, consumed read-only by the
//! search side, and replaced wholesale by the next generation request.

mod geom;
mod grid;

pub use geom::Point;
pub use grid::{MazeGrid, Tile};
