use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod compile;
mod decompile;
mod error;
mod inspect;
mod random;
mod utils;

use error::Result;

#[derive(Parser)]
#[command(name = "cellgrid")]
#[command(about = "Cellular-automaton pattern compiler and decompiler", long_about = None)]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace). Defaults to RUST_LOG or warn
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a plaintext (.cells) pattern into a binary grid
    Compile {
        #[command(flatten)]
        config: compile::Config,
    },
    /// Generate a binary grid of random cells
    Random {
        #[command(flatten)]
        config: random::Config,
    },
    /// Decompile a binary grid into a plaintext (.cells) pattern
    Decompile {
        #[command(flatten)]
        config: decompile::Config,
    },
    /// Show the dimension and live cells of a binary grid
    Inspect {
        #[command(flatten)]
        config: inspect::Config,
    },
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Compile { config } => compile::execute(config)?,
        Commands::Random { config } => random::execute(config)?,
        Commands::Decompile { config } => decompile::execute(config)?,
        Commands::Inspect { config } => inspect::execute(config)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
