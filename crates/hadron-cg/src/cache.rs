//! Write-once memo table for Clebsch-Gordan coefficients.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use hadron_core::HadronError;
use tracing::trace;

use crate::hash::BuildSpinHasher;
use crate::spins::ThreeSpins;
use crate::table::WARM_TABLE;
use crate::wigner::calculate_coefficient;

/// Memoized Clebsch-Gordan lookup shared by every width calculation of a run.
///
/// Readers take a shared lock; a miss computes the coefficient outside the
/// lock and publishes it with first-writer-wins semantics, so every caller
/// observes the same bits for a key no matter how lookups interleave.
/// Entries are never evicted.
#[derive(Debug, Default)]
pub struct ClebschGordanCache {
    table: RwLock<HashMap<ThreeSpins, f64, BuildSpinHasher>>,
    calculations: AtomicU64,
}

impl ClebschGordanCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache pre-populated with [`WARM_TABLE`].
    pub fn warmed() -> Self {
        let mut table =
            HashMap::with_capacity_and_hasher(WARM_TABLE.len(), BuildSpinHasher::default());
        table.extend(WARM_TABLE.iter().copied());
        Self {
            table: RwLock::new(table),
            calculations: AtomicU64::new(0),
        }
    }

    /// Coefficient `<j_a m_a, j_b m_b | j_c m_c>` for doubled quantum numbers.
    ///
    /// Unphysical combinations yield `0.0`. Spins above
    /// [`MAX_DOUBLED_SPIN`](crate::MAX_DOUBLED_SPIN) are an error and are
    /// never stored.
    pub fn coefficient(
        &self,
        j_a: i32,
        j_b: i32,
        j_c: i32,
        m_a: i32,
        m_b: i32,
        m_c: i32,
    ) -> Result<f64, HadronError> {
        let key = ThreeSpins::new(j_a, j_b, j_c, m_a, m_b, m_c);
        key.check_range()?;
        if let Some(value) = self.lookup(&key) {
            return Ok(value);
        }

        let value = calculate_coefficient(j_a, j_b, j_c, m_a, m_b, m_c)?;
        self.calculations.fetch_add(1, Ordering::Relaxed);
        trace!(?key, value, "computed clebsch-gordan coefficient");

        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        Ok(*table.entry(key).or_insert(value))
    }

    /// Squared coefficient for two daughters `(j_a, m_a)` and `(j_b, m_b)`
    /// coupling to a parent of spin `j_r` and projection `m_a + m_b`.
    pub fn squared_2to1(
        &self,
        j_a: i32,
        j_b: i32,
        j_r: i32,
        m_a: i32,
        m_b: i32,
    ) -> Result<f64, HadronError> {
        // an overflowing projection cannot satisfy |m| <= j
        let Some(m_r) = m_a.checked_add(m_b) else {
            return Ok(0.0);
        };
        let value = self.coefficient(j_a, j_b, j_r, m_a, m_b, m_r)?;
        Ok(value * value)
    }

    /// Number of analytic evaluations performed so far.
    pub fn calculations(&self) -> u64 {
        self.calculations.load(Ordering::Relaxed)
    }

    /// Number of stored coefficients.
    pub fn len(&self) -> usize {
        self.table.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns `true` if no coefficient is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, key: &ThreeSpins) -> Option<f64> {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .copied()
    }
}
