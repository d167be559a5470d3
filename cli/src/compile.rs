use cellgrid::{Dimension, Offset};
use clap::Args;

use crate::error::Result;
use crate::utils::{format_hex_dump, read_input, write_output};

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the .cells pattern. If not specified, reads from stdin
    file: Option<String>,

    /// Path to the grid file to write. If not specified, writes to stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Side length of the grid (power of 2)
    #[arg(short = 'n', long = "dimension", value_name = "N")]
    dimension: Dimension,

    /// Dead columns to prepend to the pattern
    #[arg(short = 'x', long, default_value_t = 0)]
    offset_x: usize,

    /// Dead rows to prepend to the pattern
    #[arg(short = 'y', long, default_value_t = 0)]
    offset_y: usize,

    /// Reject invalid characters anywhere in the pattern, not only inside the grid
    #[arg(long)]
    strict: bool,

    /// Output as hexadecimal dump instead of binary
    #[arg(long, conflicts_with = "output")]
    hex: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input = read_input(config.file.as_deref())?;
    let offset = Offset::new(config.offset_x, config.offset_y);

    if config.strict {
        grid::read_pattern(input.as_slice())?.validate()?;
    }

    let mut buffer = Vec::with_capacity(config.dimension.cell_count());
    let grid = grid::compile_pattern(input.as_slice(), &mut buffer, config.dimension, offset)?;
    tracing::info!(
        n = config.dimension.get(),
        population = grid.population(),
        "compiled pattern"
    );

    if config.hex {
        print!("{}", format_hex_dump(&buffer));
    } else {
        write_output(config.output.as_deref(), &buffer)?;
    }

    Ok(())
}
