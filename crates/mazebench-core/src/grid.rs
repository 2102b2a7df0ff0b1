//! The maze grid: a rectangle of [`Tile`] values.

use crate::geom::Point;

/// The state of a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Impassable cell.
    #[default]
    Wall,
    /// Walkable cell.
    Open,
}

/// An owned `width × height` grid of [`Tile`] values.
///
/// Cells are addressed by [`Point`] with `x` as the column and `y` as the
/// row; `(0, 0)` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl MazeGrid {
    /// Create a new grid with every cell set to [`Tile::Wall`].
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is not positive.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {width}x{height}"
        );
        Self {
            width,
            height,
            tiles: vec![Tile::default(); (width * height) as usize],
        }
    }

    /// Width of the grid (number of columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid (number of rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Get the tile at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Tile> {
        if !self.contains(p) {
            return None;
        }
        Some(self.tiles[self.index(p)])
    }

    /// Set the tile at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if !self.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.tiles[idx] = tile;
    }

    /// Whether the cell at `p` is inside the grid and open.
    ///
    /// This is the admissibility check used when expanding neighbors.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p) == Some(Tile::Open)
    }

    /// Fill the entire grid with the given tile.
    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }

    /// Count cells equal to the given tile.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }
}
