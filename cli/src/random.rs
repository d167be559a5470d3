use cellgrid::Dimension;
use clap::Args;

use crate::error::Result;
use crate::utils::{format_hex_dump, write_output};

#[derive(Args)]
pub(crate) struct Config {
    /// Side length of the grid (power of 2)
    #[arg(short = 'n', long = "dimension", value_name = "N")]
    dimension: Dimension,

    /// Path to the grid file to write. If not specified, writes to stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Seed for a reproducible grid
    #[arg(long)]
    seed: Option<u64>,

    /// Output as hexadecimal dump instead of binary
    #[arg(long, conflicts_with = "output")]
    hex: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let mut buffer = Vec::with_capacity(config.dimension.cell_count());
    let grid = grid::generate_random(&mut buffer, config.dimension, config.seed)?;
    tracing::info!(
        n = config.dimension.get(),
        population = grid.population(),
        "generated random grid"
    );

    if config.hex {
        print!("{}", format_hex_dump(&buffer));
    } else {
        write_output(config.output.as_deref(), &buffer)?;
    }

    Ok(())
}
