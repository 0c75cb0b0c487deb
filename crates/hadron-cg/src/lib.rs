#![deny(missing_docs)]

//! Memoized Clebsch-Gordan coefficients for isospin weighting of decay channels.
//!
//! The analytic calculator in [`wigner`] is exact but runs a factorial sum on
//! every call; [`ClebschGordanCache`] turns repeated lookups into a single
//! hash-table read. Keys hash through [`ThreeSpins::spin_index`], which is
//! injective over physical quantum numbers, so a physical key never shares
//! its hash with a different key. Doubled spins are capped at
//! [`MAX_DOUBLED_SPIN`].

/// Write-once coefficient cache.
pub mod cache;
/// Finalizing hasher for spin keys.
pub mod hash;
/// Doubled spin triples and their index.
pub mod spins;
/// Bundled coefficients for small spins.
pub mod table;
/// Analytic 3j and Clebsch-Gordan evaluation.
pub mod wigner;

pub use cache::ClebschGordanCache;
pub use hash::{BuildSpinHasher, SpinIndexHasher};
pub use spins::{ThreeSpins, MAX_DOUBLED_SPIN};
pub use table::WARM_TABLE;
pub use wigner::{calculate_coefficient, tabulate, wigner_3j};
