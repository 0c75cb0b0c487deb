//! Minimal transport loop: free streaming plus decays.

use std::collections::{BTreeMap, BTreeSet};

use hadron_catalog::SpeciesCatalog;
use hadron_core::{
    derive_substream_seed, DecayChannel, FourVector, HadronError, ParticleData, ParticleId,
    PdgCode, RngHandle,
};
use hadron_decay::{ActionFinder, ActionList, DecayAction, DecayActionsFinder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::RunConfig;

const DISCOVERY_STREAM: u64 = 0;
const EXECUTION_STREAM: u64 = 1;
const STEP_STREAM_BASE: u64 = 1 << 32;

/// Upper bound on forced-decay generations after the last step.
const MAX_FINAL_GENERATIONS: usize = 16;

/// One executed decay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayRecord {
    /// Timestep in which the decay was found; `None` for the final sweep.
    pub step: Option<usize>,
    /// Decaying particle.
    pub parent: ParticleId,
    /// Species of the decaying particle.
    pub pdg: PdgCode,
    /// Absolute decay time.
    pub time: f64,
    /// Effective mass at the decay.
    pub mass: f64,
    /// Channel that was chosen.
    pub channel: DecayChannel,
    /// Ids given to the products.
    pub products: Vec<ParticleId>,
}

/// Deterministic result of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Time reached after the last step.
    pub end_time: f64,
    /// Particles created from the configuration.
    pub initial_particles: usize,
    /// Decays executed during the timesteps.
    pub step_decays: usize,
    /// Decays executed by the final sweep.
    pub final_decays: usize,
    /// Unstable particles whose forced decay had no open channel.
    pub undecayable: usize,
    /// Surviving particles per species.
    pub multiplicities: BTreeMap<PdgCode, usize>,
    /// Every executed decay in execution order.
    pub decays: Vec<DecayRecord>,
}

struct Transport<'c> {
    catalog: &'c SpeciesCatalog,
    particles: Vec<ParticleData>,
    next_id: ParticleId,
    rng: RngHandle,
    decays: Vec<DecayRecord>,
    /// Parents that had no open channel; a particle stuck in every
    /// final-sweep generation is counted once.
    undecayable: BTreeSet<ParticleId>,
}

/// Runs the configured number of timesteps and, optionally, the final sweep.
pub fn simulate(config: &RunConfig, catalog: &SpeciesCatalog) -> Result<RunOutcome, HadronError> {
    config.validate()?;
    let particles = initial_particles(config, catalog)?;
    let initial_particles = particles.len();
    let master_seed = config.seed_policy.master_seed;
    let finder = DecayActionsFinder::new(catalog);
    let mut discovery_rng = RngHandle::for_substream(master_seed, DISCOVERY_STREAM);
    let mut transport = Transport {
        catalog,
        next_id: particles.len() as ParticleId,
        particles,
        rng: RngHandle::for_substream(master_seed, EXECUTION_STREAM),
        decays: Vec::new(),
        undecayable: BTreeSet::new(),
    };

    let mut time = 0.0;
    for step in 0..config.steps {
        let actions = if config.parallel {
            let step_seed = derive_substream_seed(master_seed, STEP_STREAM_BASE + step as u64);
            finder.find_actions_in_cell_par(&transport.particles, config.dt, step_seed)?
        } else {
            finder.find_actions_in_cell(&transport.particles, config.dt, &mut discovery_rng)?
        };
        transport.execute(actions, Some(step))?;
        time += config.dt;
        transport.propagate_to(time);
        debug!(step, time, particles = transport.particles.len(), "step finished");
    }
    let step_decays = transport.decays.len();

    if config.final_decays {
        for generation in 0..MAX_FINAL_GENERATIONS {
            let before = transport.decays.len();
            let actions = finder.find_final_actions(&transport.particles, true)?;
            transport.execute(actions, None)?;
            if transport.decays.len() == before {
                break;
            }
            if generation + 1 == MAX_FINAL_GENERATIONS {
                warn!(generation, "final sweep stopped with unstable particles left");
            }
        }
    }

    let mut multiplicities = BTreeMap::new();
    for particle in &transport.particles {
        *multiplicities.entry(particle.pdg).or_insert(0) += 1;
    }
    let outcome = RunOutcome {
        end_time: time,
        initial_particles,
        step_decays,
        final_decays: transport.decays.len() - step_decays,
        undecayable: transport.undecayable.len(),
        multiplicities,
        decays: transport.decays,
    };
    info!(
        steps = config.steps,
        step_decays = outcome.step_decays,
        final_decays = outcome.final_decays,
        survivors = transport.particles.len(),
        "run finished"
    );
    Ok(outcome)
}

fn initial_particles(
    config: &RunConfig,
    catalog: &SpeciesCatalog,
) -> Result<Vec<ParticleData>, HadronError> {
    let mut particles = Vec::new();
    for spec in &config.particles {
        let mass = match spec.mass {
            Some(mass) => mass,
            None => catalog.species(spec.pdg)?.mass,
        };
        let [px, py, pz] = spec.momentum;
        let energy = (mass * mass + px * px + py * py + pz * pz).sqrt();
        for _ in 0..spec.count {
            let id = particles.len() as ParticleId;
            particles.push(
                ParticleData::at_rest(id, spec.pdg, mass, 0.0)
                    .with_momentum(FourVector::new(energy, px, py, pz))
                    .with_formation_time(spec.formation_delay),
            );
        }
    }
    Ok(particles)
}

impl Transport<'_> {
    /// Executes `actions` in time order. Each parent is replaced by the
    /// products of one sampled channel.
    fn execute(&mut self, mut actions: ActionList, step: Option<usize>) -> Result<(), HadronError> {
        actions.sort_by(|a, b| a.time_of_execution().total_cmp(&b.time_of_execution()));
        for action in &actions {
            let Some(index) = self
                .particles
                .iter()
                .position(|particle| particle.id == action.particle().id)
            else {
                continue;
            };
            let Some(branch) = action.sample_channel(&mut self.rng) else {
                if self.undecayable.insert(action.particle().id) {
                    warn!(id = action.particle().id, "decay skipped, no open channel");
                }
                continue;
            };
            let parent = self.particles.swap_remove(index);
            let products = self.spawn_products(&parent, action, &branch.channel)?;
            self.decays.push(DecayRecord {
                step,
                parent: parent.id,
                pdg: parent.pdg,
                time: action.time_of_execution(),
                mass: parent.effective_mass(),
                channel: branch.channel.clone(),
                products,
            });
        }
        // swap_remove scrambles the order; keep discovery input deterministic
        self.particles.sort_by_key(|particle| particle.id);
        Ok(())
    }

    /// Places the products at the decay vertex, moving with the parent's
    /// velocity and formed at the decay instant.
    fn spawn_products(
        &mut self,
        parent: &ParticleData,
        action: &DecayAction,
        channel: &DecayChannel,
    ) -> Result<Vec<ParticleId>, HadronError> {
        let mut vertex = parent.clone();
        vertex.propagate(action.decay_time());
        let velocity = parent.momentum.velocity();
        let gamma = 1.0 / parent.inverse_gamma().max(f64::MIN_POSITIVE);

        let mut ids = Vec::with_capacity(channel.products.len());
        for &pdg in &channel.products {
            let mass = self.catalog.species(pdg)?.mass;
            let energy = gamma * mass;
            let momentum = FourVector::new(
                energy,
                energy * velocity[0],
                energy * velocity[1],
                energy * velocity[2],
            );
            let id = self.next_id;
            self.next_id += 1;
            self.particles.push(
                ParticleData::at_rest(id, pdg, mass, vertex.position.x0)
                    .with_position(vertex.position)
                    .with_momentum(momentum),
            );
            ids.push(id);
        }
        Ok(ids)
    }

    fn propagate_to(&mut self, time: f64) {
        for particle in &mut self.particles {
            let remaining = time - particle.position.x0;
            if remaining > 0.0 {
                particle.propagate(remaining);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParticleSpec;
    use hadron_cg::ClebschGordanCache;

    fn spec(pdg: i32, count: usize) -> ParticleSpec {
        ParticleSpec {
            pdg: PdgCode::new(pdg),
            count,
            mass: None,
            momentum: [0.0; 3],
            formation_delay: 0.0,
        }
    }

    fn config(particles: Vec<ParticleSpec>) -> RunConfig {
        RunConfig {
            dt: 0.5,
            steps: 10,
            particles,
            ..RunConfig::default()
        }
    }

    #[test]
    fn every_resonance_decays_exactly_once() {
        let cg = ClebschGordanCache::warmed();
        let catalog = SpeciesCatalog::standard(&cg).unwrap();
        let outcome = simulate(&config(vec![spec(2214, 50), spec(113, 30), spec(211, 5)]), &catalog)
            .unwrap();

        assert_eq!(outcome.initial_particles, 85);
        assert_eq!(outcome.step_decays + outcome.final_decays, 80);
        let parents: std::collections::BTreeSet<_> =
            outcome.decays.iter().map(|record| record.parent).collect();
        assert_eq!(parents.len(), 80);
        for pdg in outcome.multiplicities.keys() {
            assert!(matches!(pdg.code(), 211 | 111 | -211 | 2212 | 2112 | 11 | -11));
        }
    }

    #[test]
    fn step_decays_happen_within_the_run() {
        let cg = ClebschGordanCache::warmed();
        let catalog = SpeciesCatalog::standard(&cg).unwrap();
        let outcome = simulate(&config(vec![spec(2224, 200)]), &catalog).unwrap();
        assert!(outcome.step_decays > 0);
        for record in outcome.decays.iter().filter(|record| record.step.is_some()) {
            assert!(record.time >= 0.0 && record.time < outcome.end_time);
            assert_eq!(record.channel.products.len(), 2);
        }
        assert!((outcome.end_time - 5.0).abs() < 1e-12);
    }

    #[test]
    fn serial_runs_repeat_for_a_seed() {
        let cg = ClebschGordanCache::warmed();
        let catalog = SpeciesCatalog::standard(&cg).unwrap();
        let config = config(vec![spec(2214, 40), spec(223, 40)]);
        assert_eq!(
            simulate(&config, &catalog).unwrap(),
            simulate(&config, &catalog).unwrap()
        );
        let parallel = RunConfig {
            parallel: true,
            ..config
        };
        assert_eq!(
            simulate(&parallel, &catalog).unwrap(),
            simulate(&parallel, &catalog).unwrap()
        );
    }

    #[test]
    fn disabled_final_sweep_leaves_resonances() {
        let cg = ClebschGordanCache::warmed();
        let catalog = SpeciesCatalog::standard(&cg).unwrap();
        let config = RunConfig {
            steps: 0,
            final_decays: false,
            ..config(vec![spec(2214, 3)])
        };
        let outcome = simulate(&config, &catalog).unwrap();
        assert!(outcome.decays.is_empty());
        assert_eq!(outcome.multiplicities.get(&PdgCode::new(2214)), Some(&3));
    }

    #[test]
    fn stuck_particle_counts_once_across_final_generations() {
        let cg = ClebschGordanCache::warmed();
        let catalog = SpeciesCatalog::standard(&cg).unwrap();
        let below_threshold = ParticleSpec {
            mass: Some(1.0),
            ..spec(2214, 1)
        };
        let config = RunConfig {
            steps: 0,
            ..config(vec![below_threshold, spec(113, 1)])
        };
        let outcome = simulate(&config, &catalog).unwrap();
        assert_eq!(outcome.final_decays, 1);
        assert_eq!(outcome.undecayable, 1);
        assert_eq!(outcome.multiplicities.get(&PdgCode::new(2214)), Some(&1));
    }

    #[test]
    fn unknown_species_in_config_is_reported() {
        let cg = ClebschGordanCache::warmed();
        let catalog = SpeciesCatalog::standard(&cg).unwrap();
        let err = simulate(&config(vec![spec(42, 1)]), &catalog).unwrap_err();
        assert_eq!(err.info().code, "unknown-species");
    }
}
