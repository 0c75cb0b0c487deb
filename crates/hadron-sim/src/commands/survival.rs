use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use hadron_catalog::{CatalogDef, SpeciesCatalog};
use hadron_cg::ClebschGordanCache;
use hadron_core::{total_width, DecayChannelSource, ParticleData, PdgCode, RngHandle};
use hadron_decay::{decay_probability, decay_rate, ActionFinder, DecayActionsFinder};
use serde::Serialize;
use tracing::info;

#[derive(Args, Debug)]
pub struct SurvivalArgs {
    /// Species to test.
    #[arg(long, default_value_t = 2214, allow_negative_numbers = true)]
    pub pdg: i32,
    /// Mass in GeV; the catalog pole mass when absent.
    #[arg(long)]
    pub mass: Option<f64>,
    /// Number of particles.
    #[arg(long, default_value_t = 100_000)]
    pub count: usize,
    /// Timestep in fm/c.
    #[arg(long, default_value_t = 1.0)]
    pub dt: f64,
    /// Master seed.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Catalog file; the bundled catalog when absent.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Fail when the observed fraction is further than this many standard errors away.
    #[arg(long, default_value_t = 5.0)]
    pub max_pull: f64,
}

#[derive(Debug, Serialize)]
struct SurvivalReport {
    pdg: PdgCode,
    mass: f64,
    width: f64,
    dt: f64,
    count: usize,
    decayed: usize,
    observed: f64,
    expected: f64,
    sigma: f64,
    pull: f64,
}

pub fn run(args: &SurvivalArgs) -> Result<(), Box<dyn Error>> {
    if args.count == 0 {
        return Err("--count must be positive".into());
    }
    let cg = ClebschGordanCache::warmed();
    let definition = match &args.catalog {
        Some(path) => CatalogDef::load(path)?,
        None => CatalogDef::standard()?,
    };
    let catalog = SpeciesCatalog::new(definition, &cg)?;
    let pdg = PdgCode::new(args.pdg);
    let mass = match args.mass {
        Some(mass) => mass,
        None => catalog.species(pdg)?.mass,
    };

    let particles: Vec<ParticleData> = (0..args.count as u64)
        .map(|id| ParticleData::at_rest(id, pdg, mass, 0.0))
        .collect();
    let finder = DecayActionsFinder::new(&catalog);
    let mut rng = RngHandle::from_seed(args.seed);
    let decayed = finder
        .find_actions_in_cell(&particles, args.dt, &mut rng)?
        .len();

    let width = if catalog.is_stable(pdg)? {
        0.0
    } else {
        total_width(&catalog.partial_widths_hadronic(pdg, mass)?)
    };
    let expected = decay_probability(decay_rate(width, 1.0), args.dt);
    let observed = decayed as f64 / args.count as f64;
    let sigma = (expected * (1.0 - expected) / args.count as f64).sqrt();
    let pull = if sigma > 0.0 {
        (observed - expected) / sigma
    } else if decayed == 0 {
        0.0
    } else {
        f64::INFINITY
    };

    let report = SurvivalReport {
        pdg,
        mass,
        width,
        dt: args.dt,
        count: args.count,
        decayed,
        observed,
        expected,
        sigma,
        pull,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    info!(pull, "survival check finished");
    if pull.abs() > args.max_pull {
        return Err(format!("decayed fraction {observed} is {pull:.2} sigma from {expected}").into());
    }
    Ok(())
}
