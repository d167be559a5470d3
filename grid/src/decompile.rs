use cellgrid::{
    Cell, Dimension,
    decoder::{DecodableFrom, Decoder},
};
use plaintext::Pattern;

use crate::Grid;
use crate::error::Error;

impl Grid {
    /// Decodes the contents of a grid file.
    ///
    /// The size is checked before any byte is looked at: it must be a power
    /// of four, i.e. `n * n` for a power-of-two `n`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Grid, Error> {
        let dimension =
            Dimension::from_cell_count(bytes.len()).ok_or(Error::InvalidGridSize(bytes.len()))?;
        let n = dimension.get();
        tracing::debug!(size = bytes.len(), n, "decoding grid");

        let cells = bytes
            .iter()
            .enumerate()
            .map(|(i, &byte)| {
                Cell::from_byte(byte).ok_or(Error::InvalidCellByte {
                    byte,
                    row: i / n,
                    column: i % n,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Grid { dimension, cells })
    }
}

impl DecodableFrom<Vec<u8>> for Grid {}

impl Decoder<Vec<u8>, Grid> for Vec<u8> {
    type Error = Error;

    fn decode(&self) -> Result<Grid, Self::Error> {
        Grid::from_bytes(self)
    }
}

impl DecodableFrom<Grid> for Pattern {}

impl Decoder<Grid, Pattern> for Grid {
    type Error = Error;

    /// Renders every row of the grid, `n` lines of `n` characters.
    fn decode(&self) -> Result<Pattern, Self::Error> {
        Ok(Pattern::from_cells(
            self.rows().map(|row| row.iter().copied()),
        ))
    }
}
