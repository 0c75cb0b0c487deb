#![deny(missing_docs)]
#![doc = "Core traits and data types for the hadron decay engine."]

pub mod decay;
pub mod errors;
pub mod kinematics;
pub mod particle;
pub mod provenance;
pub mod rng;
pub mod units;

pub use decay::{total_width, DecayBranch, DecayBranchList, DecayChannel, DecayKind};
pub use errors::{ErrorInfo, HadronError};
pub use kinematics::FourVector;
pub use particle::{ParticleData, ParticleId, PdgCode};
pub use provenance::RunProvenance;
pub use rng::{derive_substream_seed, RngHandle};

/// Capability interface of a particle catalog as consumed by decay discovery.
///
/// Implementations resolve a species by its PDG code and report the decay
/// channels that are open at a given effective mass.
pub trait DecayChannelSource: Send + Sync {
    /// Returns `true` if the species never decays.
    fn is_stable(&self, pdg: PdgCode) -> Result<bool, HadronError>;

    /// Hadronic channels open at `mass`, with mass-dependent partial widths.
    fn partial_widths_hadronic(
        &self,
        pdg: PdgCode,
        mass: f64,
    ) -> Result<DecayBranchList, HadronError>;

    /// All channels (hadronic and dilepton) open at `mass`.
    fn partial_widths(&self, pdg: PdgCode, mass: f64) -> Result<DecayBranchList, HadronError>;
}
