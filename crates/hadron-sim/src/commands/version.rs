use std::error::Error;
use std::process::Command;

use clap::Args;
use hadron_catalog::{canonical_hash, SpeciesCatalog};
use hadron_cg::{ClebschGordanCache, WARM_TABLE};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit extended metadata including git and catalog information.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: String,
    git_commit: String,
    standard_catalog_hash: String,
    warm_table_entries: usize,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let info = gather_info()?;
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}

fn gather_info() -> Result<VersionInfo, Box<dyn Error>> {
    let git_commit = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|out| {
            if out.status.success() {
                Some(String::from_utf8_lossy(&out.stdout).trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".into());
    let cg = ClebschGordanCache::warmed();
    let catalog = SpeciesCatalog::standard(&cg)?;
    Ok(VersionInfo {
        version: env!("CARGO_PKG_VERSION").into(),
        git_commit,
        standard_catalog_hash: canonical_hash(&catalog)?,
        warm_table_entries: WARM_TABLE.len(),
    })
}
