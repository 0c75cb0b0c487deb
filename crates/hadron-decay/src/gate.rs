//! Formation-time causality check.

use hadron_core::ParticleData;

/// Forbids decays of particles that are not yet formed at the decay instant.
///
/// A candidate decay at `x0 + decay_time` is accepted only if
/// `formation_time < x0 + decay_time`; equality counts as not yet formed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormationGate;

impl FormationGate {
    /// Returns `true` if `particle` may decay `decay_time` after its current time.
    pub fn accepts(&self, particle: &ParticleData, decay_time: f64) -> bool {
        particle.formation_time < particle.position.x0 + decay_time
    }
}
