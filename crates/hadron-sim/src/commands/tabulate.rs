use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use hadron_cg::{tabulate, ThreeSpins};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct TabulateArgs {
    /// Largest doubled spin of the two coupled states.
    #[arg(long, default_value_t = 3)]
    pub max_j: i32,
    /// Emit JSON instead of whitespace-separated rows.
    #[arg(long)]
    pub json: bool,
    /// Write to a file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Row {
    #[serde(flatten)]
    spins: ThreeSpins,
    value: f64,
}

pub fn run(args: &TabulateArgs) -> Result<(), Box<dyn Error>> {
    if args.max_j < 0 {
        return Err("--max-j must be non-negative".into());
    }
    let rows: Vec<Row> = tabulate(args.max_j)?
        .into_iter()
        .map(|(spins, value)| Row { spins, value })
        .collect();

    let text = if args.json {
        serde_json::to_string_pretty(&rows)?
    } else {
        let mut text = String::new();
        for Row { spins, value } in &rows {
            writeln!(
                text,
                "{} {} {} {} {} {} {:.17e}",
                spins.j1, spins.j2, spins.j3, spins.m1, spins.m2, spins.m3, value
            )?;
        }
        text
    };
    match &args.out {
        Some(path) => fs::write(path, text)?,
        None => print!("{text}"),
    }
    Ok(())
}
