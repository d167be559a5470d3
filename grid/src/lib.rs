//! Binary cell grids.
//!
//! A grid file is `n * n` raw bytes in row-major order, one byte per cell,
//! `0x00` for dead and `0x01` for alive. There is no header, length prefix or
//! magic number; `n` is recovered from the file size.

pub mod compile;
pub mod decompile;
pub mod error;
pub mod random;
pub mod stream;

use cellgrid::{
    Cell, Dimension,
    encoder::{EncodableTo, Encoder},
};
use error::Error;

pub use stream::{
    compile_pattern, decompile_pattern, generate_random, read_grid, read_pattern, write_grid,
};

/// A dense `n × n` grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dimension: Dimension,
    cells: Vec<Cell>,
}

/// Smallest rectangle holding every live cell, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl BoundingBox {
    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }

    pub fn height(&self) -> usize {
        self.bottom - self.top + 1
    }
}

impl Grid {
    /// An all-dead grid.
    pub fn new(dimension: Dimension) -> Self {
        Grid {
            dimension,
            cells: vec![Cell::Dead; dimension.cell_count()],
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Returns the cell at `(row, column)`, or `None` outside the grid.
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        let n = self.dimension.get();
        if row >= n || column >= n {
            return None;
        }
        self.cells.get(row * n + column).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.dimension.get())
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Returns `None` when no cell is alive.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let n = self.dimension.get();
        let mut bbox: Option<BoundingBox> = None;
        for (i, _) in self.cells.iter().enumerate().filter(|(_, c)| c.is_alive()) {
            let (row, column) = (i / n, i % n);
            bbox = Some(match bbox {
                None => BoundingBox {
                    top: row,
                    left: column,
                    bottom: row,
                    right: column,
                },
                Some(b) => BoundingBox {
                    top: b.top.min(row),
                    left: b.left.min(column),
                    bottom: b.bottom.max(row),
                    right: b.right.max(column),
                },
            });
        }
        bbox
    }

    /// The grid file contents.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.as_byte()).collect()
    }
}

impl EncodableTo<Grid> for Vec<u8> {}

impl Encoder<Grid, Vec<u8>> for Grid {
    type Error = Error;

    fn encode(&self) -> Result<Vec<u8>, Self::Error> {
        Ok(self.to_bytes())
    }
}
