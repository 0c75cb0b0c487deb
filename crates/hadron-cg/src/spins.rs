//! Doubled angular-momentum triples used as cache keys.

use std::hash::{Hash, Hasher};

use hadron_core::{ErrorInfo, HadronError};
use serde::{Deserialize, Serialize};
use siphasher::sip::SipHasher13;

/// Largest doubled spin the analytic calculator accepts.
///
/// The Racah sum alternates in sign; beyond this its terms grow large
/// enough that cancellation eats the double-precision mantissa.
pub const MAX_DOUBLED_SPIN: i32 = 64;

/// Width of one packed field of [`ThreeSpins::spin_index`].
const FIELD_BITS: u32 = 12;
const FIELD_MASK: u64 = (1 << FIELD_BITS) - 1;
/// Marks keys outside the physical domain so they never alias a physical one.
const UNPHYSICAL_FLAG: u64 = 1 << 63;

/// Input of one Clebsch-Gordan coefficient `<j1 m1, j2 m2 | j3 m3>`.
///
/// All six numbers are doubled so half-integer spins are exact integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ThreeSpins {
    /// Doubled spin of the first particle.
    pub j1: i32,
    /// Doubled spin of the second particle.
    pub j2: i32,
    /// Doubled spin of the coupled state.
    pub j3: i32,
    /// Doubled z-component of the first particle.
    pub m1: i32,
    /// Doubled z-component of the second particle.
    pub m2: i32,
    /// Doubled z-component of the coupled state.
    pub m3: i32,
}

impl ThreeSpins {
    /// Creates a key from doubled quantum numbers.
    pub const fn new(j1: i32, j2: i32, j3: i32, m1: i32, m2: i32, m3: i32) -> Self {
        Self {
            j1,
            j2,
            j3,
            m1,
            m2,
            m3,
        }
    }

    /// Returns `true` when the selection rules allow a non-zero coefficient:
    /// `m3 = m1 + m2`, `|m| <= j` with matching parity, and the triangle rule.
    ///
    /// Total for every `i32` input; sums are taken in `i64`.
    pub fn is_physical(&self) -> bool {
        let pairs = [(self.j1, self.m1), (self.j2, self.m2), (self.j3, self.m3)];
        // parity via the low bit, which two's complement keeps for negatives
        if pairs
            .iter()
            .any(|&(j, m)| j < 0 || m < -j || m > j || (j ^ m) & 1 != 0)
        {
            return false;
        }
        let [j1, j2, j3, m1, m2, m3] =
            [self.j1, self.j2, self.j3, self.m1, self.m2, self.m3].map(i64::from);
        m1 + m2 == m3 && (j1 + j2 + j3) % 2 == 0 && j3 <= j1 + j2 && j3 >= (j1 - j2).abs()
    }

    /// Rejects keys with a doubled spin above [`MAX_DOUBLED_SPIN`].
    ///
    /// Negative spins pass; they are unphysical and evaluate to zero.
    pub fn check_range(&self) -> Result<(), HadronError> {
        if [self.j1, self.j2, self.j3]
            .iter()
            .all(|&j| j <= MAX_DOUBLED_SPIN)
        {
            return Ok(());
        }
        Err(HadronError::Precondition(
            ErrorInfo::new(
                "spin-out-of-range",
                format!("doubled spins above {MAX_DOUBLED_SPIN} are not supported"),
            )
            .with_context("key", format!("{self:?}")),
        ))
    }

    /// Integer index of the key, injective over physical keys.
    ///
    /// A physical key is fixed by `(j1, j2, j3, (j1 - m1)/2, (j2 - m2)/2)`
    /// because `m3 = m1 + m2`; all five are non-negative and are packed into
    /// 12-bit fields, so distinct physical keys with doubled spins below 4096
    /// never share an index. Every other key gets bit 63 set plus a SipHash
    /// of its six fields.
    pub fn spin_index(&self) -> u64 {
        let fits = |value: i32| (value as u64) <= FIELD_MASK;
        if self.is_physical() && fits(self.j1) && fits(self.j2) && fits(self.j3) {
            let x = ((self.j1 - self.m1) / 2) as u64;
            let b = ((self.j2 - self.m2) / 2) as u64;
            return [self.j1 as u64, self.j2 as u64, self.j3 as u64, x, b]
                .into_iter()
                .fold(0, |acc, field| (acc << FIELD_BITS) | field);
        }
        let mut hasher = SipHasher13::new_with_keys(0, 0);
        for value in [self.j1, self.j2, self.j3, self.m1, self.m2, self.m3] {
            hasher.write_i32(value);
        }
        hasher.finish() | UNPHYSICAL_FLAG
    }
}

impl Hash for ThreeSpins {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.spin_index());
    }
}
