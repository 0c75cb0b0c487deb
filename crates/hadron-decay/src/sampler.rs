//! Exponential decay-time sampling.

use hadron_core::errors::ErrorInfo;
use hadron_core::units::ONE_OVER_HBARC;
use hadron_core::HadronError;
use rand::Rng;
use rand_distr::{Distribution, Exp};

/// Decay rate in 1/fm of a particle with total width `width` (GeV) moving
/// with inverse Lorentz factor `inverse_gamma`.
///
/// The clock runs slower in the rest frame of the particle, so the rate seen
/// in the computational frame is reduced by `inverse_gamma`.
pub fn decay_rate(width: f64, inverse_gamma: f64) -> f64 {
    width * inverse_gamma * ONE_OVER_HBARC
}

/// Probability `1 - exp(-rate dt)` of decaying within `dt`.
pub fn decay_probability(rate: f64, dt: f64) -> f64 {
    -(-rate * dt).exp_m1()
}

/// Source of candidate decay times in the computational frame.
pub trait DecayTimeSampler: Send + Sync {
    /// Draws a decay time for total width `width` and dilation
    /// `inverse_gamma`. Callers guarantee `width > 0`.
    fn sample<R: Rng + ?Sized>(
        &self,
        width: f64,
        inverse_gamma: f64,
        rng: &mut R,
    ) -> Result<f64, HadronError>;
}

/// Draws decay times from `Exp(decay_rate(width, inverse_gamma))`.
///
/// Redrawing every timestep from the current width is statistically
/// equivalent to a single draw at creation, since exponential waiting times
/// are memoryless.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialDecayTime;

impl DecayTimeSampler for ExponentialDecayTime {
    fn sample<R: Rng + ?Sized>(
        &self,
        width: f64,
        inverse_gamma: f64,
        rng: &mut R,
    ) -> Result<f64, HadronError> {
        let rate = decay_rate(width, inverse_gamma);
        if !(rate > 0.0 && rate.is_finite()) {
            return Err(HadronError::Precondition(
                ErrorInfo::new("invalid-decay-rate", "decay rate must be finite and positive")
                    .with_context("width", width.to_string())
                    .with_context("inverse_gamma", inverse_gamma.to_string()),
            ));
        }
        let law = Exp::new(rate).map_err(|err| {
            HadronError::Precondition(
                ErrorInfo::new("invalid-decay-rate", err.to_string())
                    .with_context("rate", rate.to_string()),
            )
        })?;
        Ok(law.sample(rng))
    }
}
