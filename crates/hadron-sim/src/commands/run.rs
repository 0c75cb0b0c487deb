use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Args;
use hadron_catalog::canonical_hash;
use hadron_cg::ClebschGordanCache;
use hadron_core::{PdgCode, RunProvenance};
use serde::Serialize;
use tracing::info;

use crate::config::RunConfig;
use crate::transport::simulate;
use crate::write_json;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// YAML configuration describing the run.
    #[arg(long)]
    pub config: PathBuf,
    /// Output directory for run artefacts.
    #[arg(long)]
    pub out: PathBuf,
    /// Overrides the configured master seed.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    provenance: RunProvenance,
    end_time: f64,
    initial_particles: usize,
    step_decays: usize,
    final_decays: usize,
    undecayable: usize,
    multiplicities: BTreeMap<PdgCode, usize>,
}

pub fn run(args: &RunArgs) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(&args.out)?;
    let mut config = RunConfig::load(&args.config)?;
    if let Some(seed) = args.seed {
        config.seed_policy.master_seed = seed;
    }
    let base = args.config.parent().unwrap_or_else(|| Path::new("."));
    let cg = ClebschGordanCache::warmed();
    let catalog = config.catalog.resolve(&cg, base)?;

    let outcome = simulate(&config, &catalog)?;

    let mut tool_versions = BTreeMap::new();
    tool_versions.insert("hadron-sim".to_string(), env!("CARGO_PKG_VERSION").to_string());
    let provenance = RunProvenance {
        config_hash: config.hash()?,
        catalog_hash: canonical_hash(&catalog)?,
        seed: config.seed_policy.master_seed,
        dt: config.dt,
        steps: config.steps,
        parallel: config.parallel,
        created_at: Utc::now().to_rfc3339(),
        tool_versions,
    };
    let summary = RunSummary {
        provenance,
        end_time: outcome.end_time,
        initial_particles: outcome.initial_particles,
        step_decays: outcome.step_decays,
        final_decays: outcome.final_decays,
        undecayable: outcome.undecayable,
        multiplicities: outcome.multiplicities.clone(),
    };
    write_json(args.out.join(&config.output.summary_file), &summary)?;
    if let Some(decays_file) = &config.output.decays_file {
        write_json(args.out.join(decays_file), &outcome.decays)?;
    }

    // Persist the configuration next to the artefacts.
    fs::copy(&args.config, args.out.join("config.yaml")).ok();
    info!(
        out = %args.out.display(),
        cg_calculations = cg.calculations(),
        "artefacts written"
    );
    Ok(())
}
