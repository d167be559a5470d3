use cellgrid::{Cell, Dimension, Offset};
use plaintext::Pattern;

use crate::Grid;
use crate::error::Error;

impl Grid {
    /// Places `pattern` on an `n × n` grid, translated by `offset`.
    ///
    /// Only cells that land inside the grid are read, so pattern content
    /// beyond the grid is ignored without being validated. Missing cells are
    /// dead. The first invalid character inside the grid aborts compilation.
    pub fn compile(pattern: &Pattern, dimension: Dimension, offset: Offset) -> Result<Grid, Error> {
        let n = dimension.get();
        tracing::debug!(
            n,
            offset_x = offset.x,
            offset_y = offset.y,
            pattern_height = pattern.height(),
            pattern_width = pattern.width(),
            "compiling pattern"
        );
        let mut cells = Vec::with_capacity(dimension.cell_count());
        for row in 0..n {
            for column in 0..n {
                cells.push(placed_cell(pattern, offset, row, column)?);
            }
        }
        Ok(Grid { dimension, cells })
    }
}

fn placed_cell(
    pattern: &Pattern,
    offset: Offset,
    row: usize,
    column: usize,
) -> Result<Cell, plaintext::error::Error> {
    if row < offset.y || column < offset.x {
        return Ok(Cell::Dead);
    }
    pattern.cell(row - offset.y, column - offset.x)
}
