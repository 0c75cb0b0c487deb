//! Decay action discovery, per timestep and at the end of a run.

use hadron_core::errors::ErrorInfo;
use hadron_core::{total_width, DecayChannelSource, HadronError, ParticleData, RngHandle};
use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::action::{ActionList, DecayAction, DecayActionBuilder};
use crate::gate::FormationGate;
use crate::sampler::{DecayTimeSampler, ExponentialDecayTime};

/// Most timesteps are short enough that fewer decays than this are found.
const EXPECTED_DECAYS_PER_STEP: usize = 10;

/// Interface shared by the action finders of a transport loop.
pub trait ActionFinder {
    /// Actions taking place within `[x0, x0 + dt)` of the given particles.
    fn find_actions_in_cell<R: Rng + ?Sized>(
        &self,
        particles: &[ParticleData],
        dt: f64,
        rng: &mut R,
    ) -> Result<ActionList, HadronError>;

    /// Actions performed once the run has ended. `only_resonances` limits
    /// finders that distinguish resonances from other particles.
    fn find_final_actions(
        &self,
        particles: &[ParticleData],
        only_resonances: bool,
    ) -> Result<ActionList, HadronError>;
}

/// Finds the particles that decay within a timestep.
///
/// Each unstable particle draws a fresh decay time from its current,
/// mass-dependent hadronic width every step; it decays if that time falls
/// within the step and the particle is formed by then.
pub struct DecayActionsFinder<'c, C: ?Sized, S = ExponentialDecayTime> {
    catalog: &'c C,
    sampler: S,
    gate: FormationGate,
}

impl<C: ?Sized, S: Clone> Clone for DecayActionsFinder<'_, C, S> {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog,
            sampler: self.sampler.clone(),
            gate: self.gate,
        }
    }
}

impl<C: ?Sized, S: std::fmt::Debug> std::fmt::Debug for DecayActionsFinder<'_, C, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecayActionsFinder")
            .field("sampler", &self.sampler)
            .finish_non_exhaustive()
    }
}

impl<'c, C> DecayActionsFinder<'c, C, ExponentialDecayTime>
where
    C: DecayChannelSource + ?Sized,
{
    /// Creates a finder drawing exponential decay times.
    pub fn new(catalog: &'c C) -> Self {
        Self {
            catalog,
            sampler: ExponentialDecayTime,
            gate: FormationGate,
        }
    }
}

impl<'c, C, S> DecayActionsFinder<'c, C, S>
where
    C: DecayChannelSource + ?Sized,
    S: DecayTimeSampler,
{
    /// Replaces the decay-time sampler.
    pub fn with_sampler<T: DecayTimeSampler>(self, sampler: T) -> DecayActionsFinder<'c, C, T> {
        DecayActionsFinder {
            catalog: self.catalog,
            sampler,
            gate: self.gate,
        }
    }

    /// Parallel form of [`ActionFinder::find_actions_in_cell`].
    ///
    /// Every particle draws from its own substream of `step_seed`, keyed by
    /// particle id, so the result is independent of thread scheduling and
    /// keeps the input order.
    pub fn find_actions_in_cell_par(
        &self,
        particles: &[ParticleData],
        dt: f64,
        step_seed: u64,
    ) -> Result<ActionList, HadronError> {
        check_step(dt)?;
        let candidates = particles
            .par_iter()
            .map(|particle| {
                let mut rng = RngHandle::for_substream(step_seed, particle.id);
                self.decay_within(particle, dt, &mut rng)
            })
            .collect::<Result<Vec<_>, HadronError>>()?;
        let actions: ActionList = candidates.into_iter().flatten().collect();
        debug!(
            candidates = particles.len(),
            decays = actions.len(),
            dt,
            "parallel decay discovery finished"
        );
        Ok(actions)
    }

    fn decay_within<R: Rng + ?Sized>(
        &self,
        particle: &ParticleData,
        dt: f64,
        rng: &mut R,
    ) -> Result<Option<DecayAction>, HadronError> {
        if self.catalog.is_stable(particle.pdg)? {
            return Ok(None);
        }
        let branches = self
            .catalog
            .partial_widths_hadronic(particle.pdg, particle.effective_mass())?;
        let width = total_width(&branches);
        if !(width > 0.0) {
            return Ok(None);
        }

        let decay_time = self.sampler.sample(width, particle.inverse_gamma(), rng)?;
        if !((0.0..dt).contains(&decay_time) && self.gate.accepts(particle, decay_time)) {
            return Ok(None);
        }
        debug_assert!(!branches.is_empty());
        trace!(
            id = particle.id,
            pdg = %particle.pdg,
            decay_time,
            width,
            "decay found"
        );
        Ok(Some(
            DecayActionBuilder::new(particle, decay_time).with_decays(branches),
        ))
    }
}

impl<'c, C, S> ActionFinder for DecayActionsFinder<'c, C, S>
where
    C: DecayChannelSource + ?Sized,
    S: DecayTimeSampler,
{
    fn find_actions_in_cell<R: Rng + ?Sized>(
        &self,
        particles: &[ParticleData],
        dt: f64,
        rng: &mut R,
    ) -> Result<ActionList, HadronError> {
        check_step(dt)?;
        let mut actions = ActionList::with_capacity(EXPECTED_DECAYS_PER_STEP);
        for particle in particles {
            if let Some(action) = self.decay_within(particle, dt, rng)? {
                actions.push(action);
            }
        }
        debug!(
            candidates = particles.len(),
            decays = actions.len(),
            dt,
            "decay discovery finished"
        );
        Ok(actions)
    }

    /// Forces every unstable particle to decay immediately, over its full
    /// channel list. Decays do not distinguish resonances, so
    /// `only_resonances` is ignored.
    fn find_final_actions(
        &self,
        particles: &[ParticleData],
        _only_resonances: bool,
    ) -> Result<ActionList, HadronError> {
        let mut actions = ActionList::new();
        for particle in particles {
            if self.catalog.is_stable(particle.pdg)? {
                continue;
            }
            let branches = self
                .catalog
                .partial_widths(particle.pdg, particle.effective_mass())?;
            if branches.is_empty() {
                warn!(id = particle.id, pdg = %particle.pdg, "forced decay has no open channel");
            }
            actions.push(DecayActionBuilder::new(particle, 0.0).with_decays(branches));
        }
        debug!(decays = actions.len(), "final decays collected");
        Ok(actions)
    }
}

fn check_step(dt: f64) -> Result<(), HadronError> {
    if dt > 0.0 && dt.is_finite() {
        return Ok(());
    }
    Err(HadronError::Precondition(
        ErrorInfo::new("non-positive-step", "timestep must be finite and positive")
            .with_context("dt", dt.to_string()),
    ))
}
