use clap::Args;
use grid::Grid;

use crate::error::Result;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the grid file. If not specified, reads from stdin
    file: Option<String>,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input = read_input(config.file.as_deref())?;
    let grid = grid::read_grid(input.as_slice())?;

    print!("{}", format_summary(&grid));

    Ok(())
}

fn format_summary(grid: &Grid) -> String {
    let n = grid.dimension();
    let mut output = String::new();

    output.push_str(&format!("Dimension: {n}x{n}\n"));
    output.push_str(&format!("Cells: {}\n", n.cell_count()));
    output.push_str(&format!("Population: {}\n", grid.population()));
    match grid.bounding_box() {
        Some(b) => output.push_str(&format!(
            "Bounding box: rows {}..={}, columns {}..={} ({}x{})\n",
            b.top,
            b.bottom,
            b.left,
            b.right,
            b.width(),
            b.height()
        )),
        None => output.push_str("Bounding box: empty\n"),
    }

    output
}
