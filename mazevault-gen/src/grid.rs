//! Cell grid with per-cell wall bitmasks.

use serde::{Deserialize, Serialize};

/// One side of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    North,
    East,
    South,
    West,
}

impl Wall {
    /// Bit used for this wall in a cell's mask.
    pub fn bit(self) -> u8 {
        match self {
            Wall::North => 0b0001,
            Wall::East => 0b0010,
            Wall::South => 0b0100,
            Wall::West => 0b1000,
        }
    }

    /// The matching wall on the adjacent cell.
    pub fn opposite(self) -> Wall {
        match self {
            Wall::North => Wall::South,
            Wall::East => Wall::West,
            Wall::South => Wall::North,
            Wall::West => Wall::East,
        }
    }
}

/// All four walls present.
const WALLED: u8 = 0b1111;

/// Rectangular cell grid, row-major, one wall bitmask per cell.
#[derive(Debug, Clone)]
pub struct Grid {
    height: u32,
    width: u32,
    cells: Vec<u8>,
}

impl Grid {
    /// A grid with every wall intact.
    pub fn walled(height: u32, width: u32) -> Self {
        Self {
            height,
            width,
            cells: vec![WALLED; (height * width) as usize],
        }
    }

    /// Row-major index of `(row, col)`.
    pub fn index(&self, row: u32, col: u32) -> usize {
        (row * self.width + col) as usize
    }

    /// The raw wall masks, row-major.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// In-bounds neighbors of `(row, col)` with the wall leading to each.
    pub fn neighbors(&self, row: u32, col: u32) -> impl Iterator<Item = (u32, u32, Wall)> {
        let mut out = Vec::with_capacity(4);
        if row > 0 {
            out.push((row - 1, col, Wall::North));
        }
        if col + 1 < self.width {
            out.push((row, col + 1, Wall::East));
        }
        if row + 1 < self.height {
            out.push((row + 1, col, Wall::South));
        }
        if col > 0 {
            out.push((row, col - 1, Wall::West));
        }
        out.into_iter()
    }

    /// Knock down `wall` of `(row, col)` and the matching wall next door.
    ///
    /// Caller must ensure the neighbor exists; `walled` grids rely on
    /// `neighbors` only yielding in-bounds moves.
    pub fn carve(&mut self, row: u32, col: u32, wall: Wall) {
        let here = self.index(row, col);
        self.cells[here] &= !wall.bit();

        let (nr, nc) = match wall {
            Wall::North => (row - 1, col),
            Wall::East => (row, col + 1),
            Wall::South => (row + 1, col),
            Wall::West => (row, col - 1),
        };
        let there = self.index(nr, nc);
        self.cells[there] &= !wall.opposite().bit();
    }

    /// True if `wall` of `(row, col)` has been carved away.
    pub fn is_open(&self, row: u32, col: u32, wall: Wall) -> bool {
        self.cells[self.index(row, col)] & wall.bit() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walled_grid_is_closed() {
        let grid = Grid::walled(3, 3);
        assert_eq!(grid.cells().len(), 9);
        assert!(!grid.is_open(1, 1, Wall::North));
        assert!(!grid.is_open(1, 1, Wall::East));
    }

    #[test]
    fn carve_opens_both_sides() {
        let mut grid = Grid::walled(2, 2);
        grid.carve(0, 0, Wall::East);
        assert!(grid.is_open(0, 0, Wall::East));
        assert!(grid.is_open(0, 1, Wall::West));
        assert!(!grid.is_open(0, 0, Wall::South));
    }

    #[test]
    fn corner_neighbors() {
        let grid = Grid::walled(3, 3);
        let n: Vec<_> = grid.neighbors(0, 0).collect();
        assert_eq!(n.len(), 2);
        let n: Vec<_> = grid.neighbors(1, 1).collect();
        assert_eq!(n.len(), 4);
    }
}
