//! Decay actions handed to the execution stage.

use hadron_core::{total_width, DecayBranch, DecayBranchList, ParticleData};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Ordered actions found within one finder call.
pub type ActionList = Vec<DecayAction>;

/// A particle scheduled to decay, with every channel open to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayAction {
    particle: ParticleData,
    decay_time: f64,
    branches: DecayBranchList,
    total_width: f64,
}

impl DecayAction {
    /// Snapshot of the decaying particle.
    pub fn particle(&self) -> &ParticleData {
        &self.particle
    }

    /// Time from the particle's current time `x0` to the decay.
    pub fn decay_time(&self) -> f64 {
        self.decay_time
    }

    /// Absolute time at which the decay happens.
    pub fn time_of_execution(&self) -> f64 {
        self.particle.position.x0 + self.decay_time
    }

    /// Channels with their partial widths, in catalog order.
    pub fn branches(&self) -> &[DecayBranch] {
        &self.branches
    }

    /// Sum of the partial widths.
    pub fn total_width(&self) -> f64 {
        self.total_width
    }

    /// Picks a channel with probability proportional to its partial width.
    ///
    /// Returns `None` when no channel carries weight.
    pub fn sample_channel<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&DecayBranch> {
        let weights = WeightedIndex::new(self.branches.iter().map(|branch| branch.width)).ok()?;
        self.branches.get(weights.sample(rng))
    }
}

/// Two-step constructor for [`DecayAction`].
///
/// The channel list is attached exactly once, by [`DecayActionBuilder::with_decays`],
/// which consumes the builder.
#[derive(Debug, Clone)]
pub struct DecayActionBuilder {
    particle: ParticleData,
    decay_time: f64,
}

impl DecayActionBuilder {
    /// Starts an action for `particle` decaying `decay_time` after its current time.
    pub fn new(particle: &ParticleData, decay_time: f64) -> Self {
        Self {
            particle: particle.clone(),
            decay_time,
        }
    }

    /// Attaches the channel list and finishes the action.
    pub fn with_decays(self, branches: DecayBranchList) -> DecayAction {
        let total_width = total_width(&branches);
        DecayAction {
            particle: self.particle,
            decay_time: self.decay_time,
            branches,
            total_width,
        }
    }
}
