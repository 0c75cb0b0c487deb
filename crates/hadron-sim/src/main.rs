use std::error::Error;
use std::fs;
use std::path::Path;

use clap::{Parser, Subcommand};
use commands::{
    cg::{self, CgArgs},
    run::{self, RunArgs},
    survival::{self, SurvivalArgs},
    tabulate::{self, TabulateArgs},
    version::{self, VersionArgs},
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod transport;

#[derive(Parser, Debug)]
#[command(name = "hadron-sim", about = "Hadron decay transport driver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Step a particle list through time, executing decays as they are found.
    Run(RunArgs),
    /// Print one Clebsch-Gordan coefficient (doubled spins).
    Cg(CgArgs),
    /// Print the analytic Clebsch-Gordan table up to a maximum doubled spin.
    Tabulate(TabulateArgs),
    /// Compare the decayed fraction of one step with the exponential law.
    Survival(SurvivalArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => run::run(&args),
        Command::Cg(args) => cg::run(&args),
        Command::Tabulate(args) => tabulate::run(&args),
        Command::Survival(args) => survival::run(&args),
        Command::Version(args) => version::run(&args),
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hadron=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub(crate) fn write_json<P: AsRef<Path>, T: Serialize>(
    path: P,
    value: &T,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
