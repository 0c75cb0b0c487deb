//! Particle snapshots as seen by the decay finder.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::kinematics::FourVector;

/// PDG Monte Carlo numbering code identifying a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PdgCode(i32);

impl PdgCode {
    /// Wraps a raw PDG code.
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Returns the raw integer code.
    pub const fn code(&self) -> i32 {
        self.0
    }
}

impl Display for PdgCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique particle identifier within a run.
pub type ParticleId = u64;

/// Phase-space state of a single particle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleData {
    /// Identifier, unique within the run.
    pub id: ParticleId,
    /// Species of the particle.
    pub pdg: PdgCode,
    /// Space-time position; `x0` is the particle's current time.
    pub position: FourVector,
    /// Four-momentum; its invariant mass is the effective mass.
    pub momentum: FourVector,
    /// Time at which the particle is formed and allowed to decay.
    pub formation_time: f64,
}

impl ParticleData {
    /// Creates a particle at rest at the spatial origin at time `time`,
    /// already formed.
    pub fn at_rest(id: ParticleId, pdg: PdgCode, mass: f64, time: f64) -> Self {
        Self {
            id,
            pdg,
            position: FourVector::new(time, 0.0, 0.0, 0.0),
            momentum: FourVector::new(mass, 0.0, 0.0, 0.0),
            formation_time: time,
        }
    }

    /// Replaces the formation time.
    pub fn with_formation_time(mut self, formation_time: f64) -> Self {
        self.formation_time = formation_time;
        self
    }

    /// Replaces the four-momentum.
    pub fn with_momentum(mut self, momentum: FourVector) -> Self {
        self.momentum = momentum;
        self
    }

    /// Replaces the space-time position.
    pub fn with_position(mut self, position: FourVector) -> Self {
        self.position = position;
        self
    }

    /// Instantaneous invariant mass of the four-momentum.
    pub fn effective_mass(&self) -> f64 {
        self.momentum.abs()
    }

    /// Inverse Lorentz factor `sqrt(1 - v²)`.
    pub fn inverse_gamma(&self) -> f64 {
        let v = self.momentum.velocity();
        let v_sqr = v[0] * v[0] + v[1] * v[1] + v[2] * v[2];
        (1.0 - v_sqr).max(0.0).sqrt()
    }

    /// Advances the particle along a straight line by `dt`.
    pub fn propagate(&mut self, dt: f64) {
        let v = self.momentum.velocity();
        self.position.x0 += dt;
        self.position.x1 += v[0] * dt;
        self.position.x2 += v[1] * dt;
        self.position.x3 += v[2] * dt;
    }
}
