#![deny(missing_docs)]

//! Reference particle catalog for the hadron decay engine.
//!
//! Species and their decay modes are described by serde structs
//! ([`CatalogDef`]) that load from YAML or JSON; [`SpeciesCatalog`] resolves
//! them into mass-dependent channel lists and implements
//! [`hadron_core::DecayChannelSource`].

/// Resolved catalog and channel queries.
pub mod catalog;
/// Serializable definitions and loaders.
pub mod def;
/// Canonical catalog hashing.
pub mod hash;
/// Mass-dependent width parametrisations.
pub mod width;

pub use catalog::{SpeciesCatalog, WIDTH_CUTOFF};
pub use def::{CatalogDef, DecayModeDef, SpeciesDef};
pub use hash::canonical_hash;
