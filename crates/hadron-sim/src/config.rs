use std::fs;
use std::path::{Path, PathBuf};

use hadron_catalog::{CatalogDef, SpeciesCatalog};
use hadron_cg::ClebschGordanCache;
use hadron_core::{ErrorInfo, HadronError, PdgCode};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// YAML-configurable parameters of a transport run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Timestep in fm/c.
    #[serde(default = "default_dt")]
    pub dt: f64,
    /// Number of timesteps to execute.
    #[serde(default = "default_steps")]
    pub steps: usize,
    /// Master seed and substream policy.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
    /// Discover decays with the parallel finder.
    #[serde(default)]
    pub parallel: bool,
    /// Force the remaining unstable particles to decay after the last step.
    #[serde(default = "default_final_decays")]
    pub final_decays: bool,
    /// Species catalog the run decays against.
    #[serde(default)]
    pub catalog: CatalogSource,
    /// Initial particle content.
    #[serde(default)]
    pub particles: Vec<ParticleSpec>,
    /// Output file layout.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_dt() -> f64 {
    0.1
}

fn default_steps() -> usize {
    100
}

fn default_final_decays() -> bool {
    true
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            dt: default_dt(),
            steps: default_steps(),
            seed_policy: SeedPolicy::default(),
            parallel: false,
            final_decays: default_final_decays(),
            catalog: CatalogSource::default(),
            particles: Vec::new(),
            output: OutputConfig::default(),
        }
    }
}

impl RunConfig {
    /// Reads and validates a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, HadronError> {
        let source = fs::read_to_string(path).map_err(|err| {
            HadronError::Io(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        let config: Self = serde_yaml::from_str(&source).map_err(|err| {
            HadronError::Config(
                ErrorInfo::new("config-yaml", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the numeric parameters.
    pub fn validate(&self) -> Result<(), HadronError> {
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return Err(HadronError::Config(
                ErrorInfo::new("invalid-dt", "dt must be finite and positive")
                    .with_context("dt", self.dt.to_string()),
            ));
        }
        for spec in &self.particles {
            if let Some(mass) = spec.mass {
                if !(mass > 0.0 && mass.is_finite()) {
                    return Err(HadronError::Config(
                        ErrorInfo::new("invalid-mass", "particle mass must be positive")
                            .with_context("pdg", spec.pdg.to_string())
                            .with_context("mass", mass.to_string()),
                    ));
                }
            }
            if spec.momentum.iter().any(|p| !p.is_finite()) || !spec.formation_delay.is_finite() {
                return Err(HadronError::Config(
                    ErrorInfo::new("invalid-particle", "particle kinematics must be finite")
                        .with_context("pdg", spec.pdg.to_string()),
                ));
            }
        }
        Ok(())
    }

    /// SHA-256 of the canonical JSON form of the configuration.
    pub fn hash(&self) -> Result<String, HadronError> {
        let bytes = serde_json::to_vec(self)
            .map_err(|err| HadronError::Serde(ErrorInfo::new("config-hash", err.to_string())))?;
        let mut hasher = Sha256::new();
        hasher.update(b"hadron-sim:config:v1");
        hasher.update(&bytes);
        Ok(format!("{:x}", hasher.finalize()))
    }
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Master seed used for the run.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
}

fn default_master_seed() -> u64 {
    0x05EE_D5EE_DD15_5EED_u64
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
        }
    }
}

/// Where the species catalog comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CatalogSource {
    /// The bundled catalog.
    #[default]
    Standard,
    /// A YAML or JSON catalog file, relative to the configuration file.
    File {
        /// Catalog path.
        path: PathBuf,
    },
    /// A catalog written out inside the configuration.
    Inline(CatalogDef),
}

impl CatalogSource {
    /// Loads and resolves the catalog. Relative file paths are taken from `base`.
    pub fn resolve(
        &self,
        cg: &ClebschGordanCache,
        base: &Path,
    ) -> Result<SpeciesCatalog, HadronError> {
        let definition = match self {
            CatalogSource::Standard => CatalogDef::standard()?,
            CatalogSource::File { path } => CatalogDef::load(&base.join(path))?,
            CatalogSource::Inline(definition) => definition.clone(),
        };
        SpeciesCatalog::new(definition, cg)
    }
}

/// A group of identical particles created at `t = 0` at the origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleSpec {
    /// Species.
    pub pdg: PdgCode,
    /// Number of copies.
    #[serde(default = "default_count")]
    pub count: usize,
    /// Mass in GeV; the catalog pole mass when absent.
    #[serde(default)]
    pub mass: Option<f64>,
    /// Three-momentum in GeV.
    #[serde(default)]
    pub momentum: [f64; 3],
    /// Formation time relative to the start of the run.
    #[serde(default)]
    pub formation_delay: f64,
}

fn default_count() -> usize {
    1
}

/// Output file layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Run summary, relative to the output directory.
    #[serde(default = "default_summary_file")]
    pub summary_file: PathBuf,
    /// Per-decay log, relative to the output directory. Not written when absent.
    #[serde(default = "default_decays_file")]
    pub decays_file: Option<PathBuf>,
}

fn default_summary_file() -> PathBuf {
    PathBuf::from("summary.json")
}

fn default_decays_file() -> Option<PathBuf> {
    Some(PathBuf::from("decays.json"))
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            summary_file: default_summary_file(),
            decays_file: default_decays_file(),
        }
    }
}
