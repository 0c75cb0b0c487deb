//! Serializable catalog definitions and loaders.

use std::fs;
use std::path::Path;

use hadron_core::errors::ErrorInfo;
use hadron_core::{DecayKind, HadronError, PdgCode};
use serde::{Deserialize, Serialize};

const STANDARD_CATALOG: &str = include_str!("../data/standard.yaml");

/// One decay mode of a species as written in a catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayModeDef {
    /// Daughter species.
    pub products: Vec<PdgCode>,
    /// Branching ratio at the pole mass.
    pub ratio: f64,
    /// Relative orbital angular momentum of the daughters.
    #[serde(default)]
    pub angular_momentum: u8,
    /// Hadronic or dilepton.
    #[serde(default)]
    pub kind: DecayKind,
    /// Multiply the ratio by the squared isospin Clebsch-Gordan coefficient
    /// of the two daughters coupling to the parent.
    #[serde(default)]
    pub isospin_weighted: bool,
}

/// A species and its decay modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesDef {
    /// Display name.
    pub name: String,
    /// PDG code, unique within a catalog.
    pub pdg: PdgCode,
    /// Pole mass in GeV.
    pub mass: f64,
    /// Total width at the pole mass in GeV; zero for stable species.
    #[serde(default)]
    pub width: f64,
    /// Doubled isospin.
    #[serde(default)]
    pub isospin: i32,
    /// Doubled isospin projection.
    #[serde(default)]
    pub isospin3: i32,
    /// Decay modes; empty for stable species.
    #[serde(default)]
    pub decays: Vec<DecayModeDef>,
}

/// Full catalog definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CatalogDef {
    /// Species in definition order.
    #[serde(default)]
    pub species: Vec<SpeciesDef>,
}

impl CatalogDef {
    /// Bundled catalog of light mesons, nucleons and Δ resonances.
    pub fn standard() -> Result<Self, HadronError> {
        Self::from_yaml_str(STANDARD_CATALOG)
    }

    /// Parses a YAML catalog.
    pub fn from_yaml_str(source: &str) -> Result<Self, HadronError> {
        serde_yaml::from_str(source).map_err(|err| {
            HadronError::Serde(ErrorInfo::new("catalog-yaml", err.to_string()))
        })
    }

    /// Parses a JSON catalog.
    pub fn from_json_str(source: &str) -> Result<Self, HadronError> {
        serde_json::from_str(source).map_err(|err| {
            HadronError::Serde(ErrorInfo::new("catalog-json", err.to_string()))
        })
    }

    /// Loads a catalog file; `.json` files are read as JSON, anything else as YAML.
    pub fn load(path: &Path) -> Result<Self, HadronError> {
        let source = fs::read_to_string(path).map_err(|err| {
            HadronError::Io(
                ErrorInfo::new("catalog-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&source),
            _ => Self::from_yaml_str(&source),
        }
    }
}
