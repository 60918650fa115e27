//! mazevault-gen: seeded maze generation
//!
//! Generates perfect mazes (exactly one path between any two cells) with an
//! iterative randomized backtracker. Generation is deterministic: the same
//! `(height, width, seed)` always produces the same maze, which is what lets
//! the serving layer key stored mazes by those three values.
//!
//! Consumers that only need to persist or display a maze should use
//! [`Maze::to_body`], which encodes the maze as a self-describing JSON
//! document including a pre-rendered ASCII view.

mod grid;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value as JsonValue};
use thiserror::Error;

pub use grid::{Grid, Wall};

/// Smallest accepted maze dimension.
pub const MIN_DIM: u32 = 2;

/// Largest accepted maze dimension.
pub const MAX_DIM: u32 = 500;

/// Identifier for the carving algorithm, recorded in the body.
const ALGORITHM: &str = "recursive-backtracker";

#[derive(Debug, Error)]
pub enum GenError {
    #[error("maze dimension {0} out of range {MIN_DIM}..={MAX_DIM}")]
    DimensionOutOfRange(u32),
}

/// A generated maze: the carved grid plus the inputs that produced it.
#[derive(Debug, Clone)]
pub struct Maze {
    height: u32,
    width: u32,
    seed: u64,
    grid: Grid,
}

impl Maze {
    /// Generate a maze of `height` rows by `width` columns from `seed`.
    ///
    /// Uses an iterative randomized backtracker: walk to a random unvisited
    /// neighbor, knocking down the wall between, and back up when stuck.
    /// The result is a perfect maze.
    pub fn generate(height: u32, width: u32, seed: u64) -> Result<Self, GenError> {
        for dim in [height, width] {
            if !(MIN_DIM..=MAX_DIM).contains(&dim) {
                return Err(GenError::DimensionOutOfRange(dim));
            }
        }

        let mut grid = Grid::walled(height, width);
        let mut rng = StdRng::seed_from_u64(seed);

        let mut visited = vec![false; (height * width) as usize];
        let mut stack = Vec::with_capacity((height * width) as usize);

        let start = (0u32, 0u32);
        visited[grid.index(start.0, start.1)] = true;
        stack.push(start);

        while let Some(&(row, col)) = stack.last() {
            let mut candidates = [(0u32, 0u32, Wall::North); 4];
            let mut n = 0;
            for (nr, nc, wall) in grid.neighbors(row, col) {
                if !visited[grid.index(nr, nc)] {
                    candidates[n] = (nr, nc, wall);
                    n += 1;
                }
            }

            if n == 0 {
                stack.pop();
                continue;
            }

            let (nr, nc, wall) = candidates[rng.gen_range(0..n)];
            grid.carve(row, col, wall);
            visited[grid.index(nr, nc)] = true;
            stack.push((nr, nc));
        }

        Ok(Self {
            height,
            width,
            seed,
            grid,
        })
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Encode the maze as the opaque JSON body the serving layer stores.
    ///
    /// `cells` holds one wall bitmask per cell, row-major. The `ascii` field
    /// carries [`Maze::render_ascii`] so display code never has to decode
    /// `cells` itself.
    pub fn to_body(&self) -> JsonValue {
        json!({
            "algorithm": ALGORITHM,
            "height": self.height,
            "width": self.width,
            "seed": self.seed,
            "cells": self.grid.cells(),
            "ascii": self.render_ascii(),
        })
    }

    /// Render the maze as a `#`/space text grid.
    ///
    /// Output is `2*height + 1` lines of `2*width + 1` characters. The entry
    /// is a gap in the top wall above the first cell, the exit a gap in the
    /// bottom wall below the last cell.
    pub fn render_ascii(&self) -> String {
        let rows = (2 * self.height + 1) as usize;
        let cols = (2 * self.width + 1) as usize;
        let mut canvas = vec![vec![b'#'; cols]; rows];

        for row in 0..self.height {
            for col in 0..self.width {
                let r = (2 * row + 1) as usize;
                let c = (2 * col + 1) as usize;
                canvas[r][c] = b' ';
                if self.grid.is_open(row, col, Wall::East) {
                    canvas[r][c + 1] = b' ';
                }
                if self.grid.is_open(row, col, Wall::South) {
                    canvas[r + 1][c] = b' ';
                }
            }
        }

        // Entry over the first cell, exit under the last.
        canvas[0][1] = b' ';
        canvas[rows - 1][cols - 2] = b' ';

        let mut out = String::with_capacity(rows * (cols + 1));
        for line in canvas {
            // canvas is pure ASCII by construction
            out.push_str(std::str::from_utf8(&line).expect("ascii canvas"));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_dimensions() {
        assert!(matches!(
            Maze::generate(1, 10, 0),
            Err(GenError::DimensionOutOfRange(1))
        ));
        assert!(matches!(
            Maze::generate(10, MAX_DIM + 1, 0),
            Err(GenError::DimensionOutOfRange(_))
        ));
        assert!(Maze::generate(MIN_DIM, MIN_DIM, 0).is_ok());
    }

    #[test]
    fn same_seed_same_maze() {
        let a = Maze::generate(12, 9, 42).unwrap();
        let b = Maze::generate(12, 9, 42).unwrap();
        assert_eq!(a.grid().cells(), b.grid().cells());
        assert_eq!(a.to_body(), b.to_body());
    }

    #[test]
    fn different_seed_different_maze() {
        let a = Maze::generate(12, 9, 42).unwrap();
        let b = Maze::generate(12, 9, 43).unwrap();
        assert_ne!(a.grid().cells(), b.grid().cells());
    }

    #[test]
    fn every_cell_is_reachable() {
        let maze = Maze::generate(15, 20, 7).unwrap();
        let grid = maze.grid();

        let mut seen = vec![false; (15 * 20) as usize];
        let mut queue = vec![(0u32, 0u32)];
        seen[0] = true;
        let mut count = 1;

        while let Some((row, col)) = queue.pop() {
            for (nr, nc, wall) in grid.neighbors(row, col) {
                if grid.is_open(row, col, wall) && !seen[grid.index(nr, nc)] {
                    seen[grid.index(nr, nc)] = true;
                    count += 1;
                    queue.push((nr, nc));
                }
            }
        }

        assert_eq!(count, 15 * 20);
    }

    #[test]
    fn body_has_expected_fields() {
        let maze = Maze::generate(4, 5, 99).unwrap();
        let body = maze.to_body();
        assert_eq!(body["algorithm"], "recursive-backtracker");
        assert_eq!(body["height"], 4);
        assert_eq!(body["width"], 5);
        assert_eq!(body["seed"], 99);
        assert_eq!(body["cells"].as_array().unwrap().len(), 20);
        assert!(body["ascii"].as_str().unwrap().contains('#'));
    }

    #[test]
    fn ascii_dimensions() {
        let maze = Maze::generate(3, 4, 1).unwrap();
        let ascii = maze.render_ascii();
        let lines: Vec<&str> = ascii.lines().collect();
        assert_eq!(lines.len(), 2 * 3 + 1);
        assert!(lines.iter().all(|l| l.len() == 2 * 4 + 1));
        // entry and exit gaps
        assert_eq!(&lines[0][1..2], " ");
        let last = lines.last().unwrap();
        assert_eq!(&last[last.len() - 2..last.len() - 1], " ");
    }
}
