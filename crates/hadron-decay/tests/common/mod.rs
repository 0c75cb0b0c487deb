#![allow(dead_code)]

use hadron_core::{
    DecayBranch, DecayBranchList, DecayChannel, DecayChannelSource, DecayKind, HadronError,
    ParticleData, PdgCode,
};
use hadron_decay::DecayTimeSampler;
use rand::Rng;

pub const PION: PdgCode = PdgCode::new(211);
pub const NUCLEON: PdgCode = PdgCode::new(2212);
pub const RESONANCE: PdgCode = PdgCode::new(2224);
/// Unstable species whose channels are all closed.
pub const CLOSED: PdgCode = PdgCode::new(9_000_111);

pub const HADRONIC_WIDTH: f64 = 0.1;

fn branch(products: &[PdgCode], width: f64, kind: DecayKind) -> DecayBranch {
    DecayBranch {
        channel: DecayChannel {
            products: products.to_vec(),
            angular_momentum: 1,
            kind,
        },
        width,
    }
}

/// Channel source whose widths do not depend on mass.
pub struct FixedWidthCatalog {
    hadronic: DecayBranchList,
    dilepton: DecayBranchList,
}

impl FixedWidthCatalog {
    pub fn new() -> Self {
        Self {
            hadronic: vec![
                branch(&[NUCLEON, PION], 0.06, DecayKind::Hadronic),
                branch(&[NUCLEON, PION, PION], 0.04, DecayKind::Hadronic),
            ],
            dilepton: vec![branch(&[PdgCode::new(11), PdgCode::new(-11)], 0.01, DecayKind::Dilepton)],
        }
    }
}

impl DecayChannelSource for FixedWidthCatalog {
    fn is_stable(&self, pdg: PdgCode) -> Result<bool, HadronError> {
        match pdg {
            PION | NUCLEON => Ok(true),
            RESONANCE | CLOSED => Ok(false),
            other => Err(HadronError::unknown_species(other)),
        }
    }

    fn partial_widths_hadronic(
        &self,
        pdg: PdgCode,
        _mass: f64,
    ) -> Result<DecayBranchList, HadronError> {
        match pdg {
            RESONANCE => Ok(self.hadronic.clone()),
            PION | NUCLEON | CLOSED => Ok(Vec::new()),
            other => Err(HadronError::unknown_species(other)),
        }
    }

    fn partial_widths(&self, pdg: PdgCode, mass: f64) -> Result<DecayBranchList, HadronError> {
        let mut branches = self.partial_widths_hadronic(pdg, mass)?;
        if pdg == RESONANCE {
            branches.extend(self.dilepton.iter().cloned());
        }
        Ok(branches)
    }
}

/// Always returns the same decay time.
#[derive(Debug, Clone, Copy)]
pub struct FixedDecayTime(pub f64);

impl DecayTimeSampler for FixedDecayTime {
    fn sample<R: Rng + ?Sized>(
        &self,
        _width: f64,
        _inverse_gamma: f64,
        _rng: &mut R,
    ) -> Result<f64, HadronError> {
        Ok(self.0)
    }
}

/// Resonance at rest at time `x0`, formed one fm/c earlier.
pub fn resonance(id: u64, x0: f64) -> ParticleData {
    ParticleData::at_rest(id, RESONANCE, 1.232, x0).with_formation_time(x0 - 1.0)
}

pub fn resonances(count: u64, x0: f64) -> Vec<ParticleData> {
    (0..count).map(|id| resonance(id, x0)).collect()
}

/// Standard error of a binomial fraction.
pub fn binomial_sigma(p: f64, n: usize) -> f64 {
    (p * (1.0 - p) / n as f64).sqrt()
}
