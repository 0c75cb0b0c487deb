//! Physical constants in the natural units used throughout the engine.
//!
//! Energies, masses and widths are in GeV; lengths and times in fm (fm/c).

/// ħc in GeV·fm, converting a width in GeV into a rate in 1/fm.
pub const HBARC: f64 = 0.197_327_053;

/// Inverse of [`HBARC`].
pub const ONE_OVER_HBARC: f64 = 1.0 / HBARC;
