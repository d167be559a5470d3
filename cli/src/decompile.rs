use clap::Args;

use crate::error::Result;
use crate::utils::{read_input, write_output};

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the grid file. If not specified, reads from stdin
    file: Option<String>,

    /// Path to the .cells file to write. If not specified, writes to stdout
    #[arg(short, long)]
    output: Option<String>,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input = read_input(config.file.as_deref())?;

    let mut buffer = Vec::with_capacity(input.len() + input.len().isqrt());
    let pattern = grid::decompile_pattern(input.as_slice(), &mut buffer)?;
    tracing::info!(rows = pattern.height(), "decompiled grid");

    write_output(config.output.as_deref(), &buffer)?;

    Ok(())
}
