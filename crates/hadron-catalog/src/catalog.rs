//! Species catalog implementing [`DecayChannelSource`].

use std::collections::BTreeMap;

use hadron_cg::ClebschGordanCache;
use hadron_core::errors::ErrorInfo;
use hadron_core::{
    DecayBranch, DecayBranchList, DecayChannel, DecayChannelSource, DecayKind, HadronError,
    PdgCode,
};
use tracing::{debug, warn};

use crate::def::{CatalogDef, DecayModeDef, SpeciesDef};
use crate::width::two_body_width;

/// Pole widths below this value (GeV) mark a species as stable.
pub const WIDTH_CUTOFF: f64 = 1e-5;

#[derive(Debug, Clone)]
struct ResolvedMode {
    channel: DecayChannel,
    /// Partial width at the pole mass, isospin weight included.
    pole_width: f64,
    /// Sum of daughter pole masses.
    threshold: f64,
    /// Daughter masses for two-body modes.
    daughters: Option<(f64, f64)>,
}

#[derive(Debug, Clone)]
struct SpeciesEntry {
    def: SpeciesDef,
    modes: Vec<ResolvedMode>,
}

/// Species catalog resolved from a [`CatalogDef`].
///
/// Decay modes are resolved once at construction: daughters are looked up,
/// thresholds computed and isospin weights taken from the shared
/// [`ClebschGordanCache`]. Queries then only evaluate the mass dependence.
#[derive(Debug, Clone)]
pub struct SpeciesCatalog {
    species: BTreeMap<PdgCode, SpeciesEntry>,
    definition: CatalogDef,
}

impl SpeciesCatalog {
    /// Validates `definition` and resolves every decay mode.
    pub fn new(definition: CatalogDef, cg: &ClebschGordanCache) -> Result<Self, HadronError> {
        let mut by_pdg = BTreeMap::new();
        for species in &definition.species {
            validate_species(species)?;
            if by_pdg.insert(species.pdg, species).is_some() {
                return Err(HadronError::Catalog(
                    ErrorInfo::new("duplicate-species", "species defined twice")
                        .with_context("pdg", species.pdg.to_string()),
                ));
            }
        }

        let mut entries = BTreeMap::new();
        for species in &definition.species {
            let mut modes = Vec::with_capacity(species.decays.len());
            for mode in &species.decays {
                modes.push(resolve_mode(species, mode, &by_pdg, cg)?);
            }
            entries.insert(
                species.pdg,
                SpeciesEntry {
                    def: species.clone(),
                    modes,
                },
            );
        }
        debug!(
            species = entries.len(),
            cached_coefficients = cg.len(),
            "species catalog resolved"
        );
        Ok(Self {
            species: entries,
            definition,
        })
    }

    /// Resolves the bundled catalog.
    pub fn standard(cg: &ClebschGordanCache) -> Result<Self, HadronError> {
        Self::new(CatalogDef::standard()?, cg)
    }

    /// Definition the catalog was built from.
    pub fn definition(&self) -> &CatalogDef {
        &self.definition
    }

    /// Looks up a species definition.
    pub fn species(&self, pdg: PdgCode) -> Result<&SpeciesDef, HadronError> {
        self.entry(pdg).map(|entry| &entry.def)
    }

    /// Iterates over all species in PDG order.
    pub fn iter(&self) -> impl Iterator<Item = &SpeciesDef> + '_ {
        self.species.values().map(|entry| &entry.def)
    }

    fn entry(&self, pdg: PdgCode) -> Result<&SpeciesEntry, HadronError> {
        self.species
            .get(&pdg)
            .ok_or_else(|| HadronError::unknown_species(pdg))
    }

    fn widths(
        &self,
        pdg: PdgCode,
        mass: f64,
        hadronic_only: bool,
    ) -> Result<DecayBranchList, HadronError> {
        let entry = self.entry(pdg)?;
        let branches = entry
            .modes
            .iter()
            .filter(|mode| !hadronic_only || mode.channel.kind == DecayKind::Hadronic)
            .filter_map(|mode| {
                let width = mode_width(mode, entry.def.mass, mass);
                (width > 0.0).then(|| DecayBranch {
                    channel: mode.channel.clone(),
                    width,
                })
            })
            .collect();
        Ok(branches)
    }
}

impl DecayChannelSource for SpeciesCatalog {
    fn is_stable(&self, pdg: PdgCode) -> Result<bool, HadronError> {
        let entry = self.entry(pdg)?;
        Ok(entry.def.width < WIDTH_CUTOFF || entry.modes.is_empty())
    }

    fn partial_widths_hadronic(
        &self,
        pdg: PdgCode,
        mass: f64,
    ) -> Result<DecayBranchList, HadronError> {
        self.widths(pdg, mass, true)
    }

    fn partial_widths(&self, pdg: PdgCode, mass: f64) -> Result<DecayBranchList, HadronError> {
        self.widths(pdg, mass, false)
    }
}

fn mode_width(mode: &ResolvedMode, pole_mass: f64, mass: f64) -> f64 {
    if mass <= mode.threshold {
        return 0.0;
    }
    match mode.daughters {
        Some(daughters) => two_body_width(
            mode.pole_width,
            pole_mass,
            mass,
            daughters,
            mode.channel.angular_momentum,
        ),
        None => mode.pole_width,
    }
}

fn validate_species(species: &SpeciesDef) -> Result<(), HadronError> {
    let invalid = |field: &str, value: f64| {
        HadronError::Catalog(
            ErrorInfo::new("invalid-species", format!("{field} must be finite and non-negative"))
                .with_context("pdg", species.pdg.to_string())
                .with_context(field, value.to_string()),
        )
    };
    if !(species.mass.is_finite() && species.mass >= 0.0) {
        return Err(invalid("mass", species.mass));
    }
    if !(species.width.is_finite() && species.width >= 0.0) {
        return Err(invalid("width", species.width));
    }
    if let Some(mode) = species
        .decays
        .iter()
        .find(|mode| !(mode.ratio.is_finite() && mode.ratio >= 0.0))
    {
        return Err(invalid("ratio", mode.ratio));
    }
    if species.width >= WIDTH_CUTOFF && species.decays.is_empty() {
        warn!(pdg = %species.pdg, "species has a width but no decay modes; treated as stable");
    }
    Ok(())
}

fn resolve_mode(
    parent: &SpeciesDef,
    mode: &DecayModeDef,
    species: &BTreeMap<PdgCode, &SpeciesDef>,
    cg: &ClebschGordanCache,
) -> Result<ResolvedMode, HadronError> {
    let mut daughters = Vec::with_capacity(mode.products.len());
    for pdg in &mode.products {
        let daughter = species.get(pdg).ok_or_else(|| {
            HadronError::Catalog(
                ErrorInfo::new("unknown-daughter", "decay product is not a catalog species")
                    .with_context("parent", parent.pdg.to_string())
                    .with_context("daughter", pdg.to_string()),
            )
        })?;
        daughters.push(*daughter);
    }

    let mut pole_width = parent.width * mode.ratio;
    if mode.isospin_weighted {
        let [a, b] = daughters.as_slice() else {
            return Err(HadronError::Catalog(
                ErrorInfo::new(
                    "isospin-weight-arity",
                    "isospin weighting needs exactly two daughters",
                )
                .with_context("parent", parent.pdg.to_string())
                .with_context("products", mode.products.len().to_string()),
            ));
        };
        let weight = if a.isospin3.checked_add(b.isospin3) == Some(parent.isospin3) {
            cg.squared_2to1(a.isospin, b.isospin, parent.isospin, a.isospin3, b.isospin3)
                .map_err(|err| {
                    HadronError::Catalog(
                        err.info()
                            .clone()
                            .with_context("parent", parent.pdg.to_string()),
                    )
                })?
        } else {
            warn!(parent = %parent.pdg, "isospin projection not conserved; mode closed");
            0.0
        };
        pole_width *= weight;
    }

    let two_body = match daughters.as_slice() {
        [a, b] => Some((a.mass, b.mass)),
        _ => None,
    };
    Ok(ResolvedMode {
        channel: DecayChannel {
            products: mode.products.clone(),
            angular_momentum: mode.angular_momentum,
            kind: mode.kind,
        },
        pole_width,
        threshold: daughters.iter().map(|daughter| daughter.mass).sum(),
        daughters: two_body,
    })
}
