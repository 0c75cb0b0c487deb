//! Provenance attached to run artefacts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything needed to reproduce a run summary: the inputs by hash, the
/// seed and the stepping parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RunProvenance {
    /// Hash of the run configuration used to produce the data.
    pub config_hash: String,
    /// Canonical hash of the species catalog the run decayed against.
    pub catalog_hash: String,
    /// Master deterministic seed used for all randomness.
    pub seed: u64,
    /// Timestep in fm/c.
    pub dt: f64,
    /// Number of timesteps executed.
    pub steps: usize,
    /// Whether decays were discovered with the parallel finder. Parallel
    /// runs draw per-particle substreams, so the flag is part of the
    /// reproduction recipe.
    pub parallel: bool,
    /// ISO-8601 timestamp recording when the artefact was generated.
    pub created_at: String,
    /// Version map for all tools involved in the run.
    pub tool_versions: BTreeMap<String, String>,
}
