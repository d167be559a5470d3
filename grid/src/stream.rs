//! Pipelines over already-opened streams.
//!
//! Each pipeline reads its whole input and builds the complete result before
//! writing anything, so a decoding error never leaves a truncated output
//! behind. Callers own the streams; wrapping a file in a `BufWriter` is the
//! caller's choice, as is flushing it.

use std::io::{Read, Write};

use cellgrid::{Dimension, Offset, decoder::Decoder, encoder::Encoder};
use plaintext::Pattern;

use crate::Grid;
use crate::error::Error;

pub fn read_pattern<R: Read>(mut input: R) -> Result<Pattern, Error> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    Ok(Pattern::parse(&text))
}

pub fn read_grid<R: Read>(mut input: R) -> Result<Grid, Error> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    bytes.decode()
}

pub fn write_grid<W: Write>(mut output: W, grid: &Grid) -> Result<(), Error> {
    let bytes: Vec<u8> = grid.encode()?;
    output.write_all(&bytes)?;
    Ok(())
}

/// Plaintext pattern in, `n * n` grid bytes out.
pub fn compile_pattern<R: Read, W: Write>(
    input: R,
    output: W,
    dimension: Dimension,
    offset: Offset,
) -> Result<Grid, Error> {
    let pattern = read_pattern(input)?;
    let grid = Grid::compile(&pattern, dimension, offset)?;
    write_grid(output, &grid)?;
    Ok(grid)
}

/// Writes `n * n` random grid bytes.
pub fn generate_random<W: Write>(
    output: W,
    dimension: Dimension,
    seed: Option<u64>,
) -> Result<Grid, Error> {
    let grid = Grid::random_seeded(dimension, seed);
    write_grid(output, &grid)?;
    Ok(grid)
}

/// Grid bytes in, one line of `n` characters per row out.
pub fn decompile_pattern<R: Read, W: Write>(input: R, mut output: W) -> Result<Pattern, Error> {
    let grid = read_grid(input)?;
    let pattern: Pattern = grid.decode()?;
    write!(output, "{pattern}")?;
    Ok(pattern)
}
