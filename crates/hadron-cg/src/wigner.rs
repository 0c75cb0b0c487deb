//! Closed-form Wigner 3j symbols and Clebsch-Gordan coefficients.
//!
//! Arguments are doubled angular momenta throughout.

use hadron_core::{ErrorInfo, HadronError};

use crate::spins::{ThreeSpins, MAX_DOUBLED_SPIN};

/// Largest `(j1 + j2 + j3)/2 + 1` evaluated with plain factorial products.
/// Above it the sum runs on log-factorials, which cannot overflow.
const DIRECT_FACTORIAL_LIMIT: i32 = 20;

fn factorial(n: i32) -> f64 {
    (2..=n).fold(1.0, |acc, k| acc * f64::from(k))
}

fn ln_factorial(n: i32) -> f64 {
    (2..=n).map(|k| f64::from(k).ln()).sum()
}

/// Wigner 3j symbol `(j1 j2 j3; m1 m2 m3)` by the Racah sum.
///
/// Returns `0.0` for any combination that violates the selection rules and
/// an error when a doubled spin exceeds [`MAX_DOUBLED_SPIN`].
pub fn wigner_3j(
    j1: i32,
    j2: i32,
    j3: i32,
    m1: i32,
    m2: i32,
    m3: i32,
) -> Result<f64, HadronError> {
    // (j1 j2 j3; m1 m2 m3) is non-zero exactly when <j1 m1, j2 m2 | j3 -m3> is
    let Some(coupled) = m3.checked_neg() else {
        return Ok(0.0);
    };
    let key = ThreeSpins::new(j1, j2, j3, m1, m2, coupled);
    key.check_range()?;
    if !key.is_physical() {
        return Ok(0.0);
    }

    // Every combination below is even once the selection rules hold.
    let half = |doubled: i32| doubled / 2;
    let a = half(j1 + j2 - j3);
    let triangle = [a, half(j1 - j2 + j3), half(-j1 + j2 + j3)];
    let projections = [
        half(j1 + m1),
        half(j1 - m1),
        half(j2 + m2),
        half(j2 - m2),
        half(j3 + m3),
        half(j3 - m3),
    ];
    let total = half(j1 + j2 + j3) + 1;
    let k_min = 0.max(half(j2 - j3 - m1)).max(half(j1 - j3 + m2));
    let k_max = a.min(half(j1 - m1)).min(half(j2 + m2));
    let denominator = |k: i32| {
        [
            k,
            half(j3 - j2 + m1) + k,
            half(j3 - j1 - m2) + k,
            a - k,
            half(j1 - m1) - k,
            half(j2 + m2) - k,
        ]
    };
    let sign = |k: i32| -> f64 {
        if k % 2 == 0 {
            1.0
        } else {
            -1.0
        }
    };

    let magnitude = if total <= DIRECT_FACTORIAL_LIMIT {
        let delta = triangle.iter().map(|&n| factorial(n)).product::<f64>() / factorial(total);
        let prefactor = projections
            .iter()
            .fold(delta, |acc, &n| acc * factorial(n))
            .sqrt();
        let sum: f64 = (k_min..=k_max)
            .map(|k| sign(k) / denominator(k).iter().map(|&n| factorial(n)).product::<f64>())
            .sum();
        prefactor * sum
    } else {
        let ln_prefactor = 0.5
            * (triangle.iter().chain(&projections).map(|&n| ln_factorial(n)).sum::<f64>()
                - ln_factorial(total));
        (k_min..=k_max)
            .map(|k| {
                let ln_denominator: f64 = denominator(k).iter().map(|&n| ln_factorial(n)).sum();
                sign(k) * (ln_prefactor - ln_denominator).exp()
            })
            .sum::<f64>()
    };

    let phase = if half(j1 - j2 - m3) % 2 == 0 { 1.0 } else { -1.0 };
    Ok(phase * magnitude)
}

/// Clebsch-Gordan coefficient `<j_a m_a, j_b m_b | j_c m_c>`.
///
/// Computed as `(-1)^((j_a - j_b + m_c)/2) sqrt(j_c + 1) (j_a j_b j_c; m_a m_b -m_c)`.
pub fn calculate_coefficient(
    j_a: i32,
    j_b: i32,
    j_c: i32,
    m_a: i32,
    m_b: i32,
    m_c: i32,
) -> Result<f64, HadronError> {
    let key = ThreeSpins::new(j_a, j_b, j_c, m_a, m_b, m_c);
    key.check_range()?;
    if !key.is_physical() {
        return Ok(0.0);
    }
    let value = wigner_3j(j_a, j_b, j_c, m_a, m_b, -m_c)? * f64::from(j_c + 1).sqrt();
    if (j_a - j_b + m_c).rem_euclid(4) == 0 {
        Ok(value)
    } else {
        Ok(-value)
    }
}

/// Evaluates every physical coefficient whose doubled daughter spins are at
/// most `max_j`.
///
/// Rows are ordered by `(j1, j2, j3, m1, m2)`, the layout of
/// [`WARM_TABLE`](crate::WARM_TABLE). Zero coefficients are skipped. The
/// coupled spin reaches `2 * max_j`, so `max_j` is bounded by half of
/// [`MAX_DOUBLED_SPIN`].
pub fn tabulate(max_j: i32) -> Result<Vec<(ThreeSpins, f64)>, HadronError> {
    if max_j > MAX_DOUBLED_SPIN / 2 {
        return Err(HadronError::Precondition(
            ErrorInfo::new(
                "spin-out-of-range",
                "tabulation would exceed the largest supported spin",
            )
            .with_context("max_j", max_j.to_string()),
        ));
    }
    let mut rows = Vec::new();
    for j1 in 0..=max_j {
        for j2 in 0..=max_j {
            let mut j3 = (j1 - j2).abs();
            while j3 <= j1 + j2 {
                for m1 in (-j1..=j1).step_by(2) {
                    for m2 in (-j2..=j2).step_by(2) {
                        let key = ThreeSpins::new(j1, j2, j3, m1, m2, m1 + m2);
                        if !key.is_physical() {
                            continue;
                        }
                        let value = calculate_coefficient(j1, j2, j3, m1, m2, m1 + m2)?;
                        if value != 0.0 {
                            rows.push((key, value));
                        }
                    }
                }
                j3 += 2;
            }
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_half_singlet() {
        let expected = std::f64::consts::FRAC_1_SQRT_2;
        assert!((wigner_3j(1, 1, 0, 1, -1, 0).unwrap() - expected).abs() < 1e-15);
        assert!((wigner_3j(1, 1, 0, -1, 1, 0).unwrap() + expected).abs() < 1e-15);
    }

    #[test]
    fn selection_rules_give_zero() {
        assert_eq!(wigner_3j(1, 1, 2, 1, 1, 0).unwrap(), 0.0);
        assert_eq!(wigner_3j(2, 2, 6, 0, 0, 0).unwrap(), 0.0);
        assert_eq!(calculate_coefficient(2, 2, 2, 1, -1, 0).unwrap(), 0.0);
    }

    #[test]
    fn stretched_states_are_unity() {
        for j in 0..6 {
            let value = calculate_coefficient(j, j, 2 * j, j, j, 2 * j).unwrap();
            assert!((value - 1.0).abs() < 1e-12, "j={j} value={value}");
        }
    }

    #[test]
    fn largest_spins_stay_finite() {
        let stretched = calculate_coefficient(32, 32, 64, 32, 32, 64).unwrap();
        assert!((stretched - 1.0).abs() < 1e-12, "value={stretched}");
        // <j m, 0 0 | j m> = 1 for any j
        let trivial = calculate_coefficient(64, 0, 64, 10, 0, 10).unwrap();
        assert!((trivial - 1.0).abs() < 1e-12, "value={trivial}");

        // completeness: sum over m1 of <j1 m1, j2 m-m1 | j m>^2 = 1
        let (j1, j2, j) = (33, 31, 40);
        let norm: f64 = (-j1..=j1)
            .step_by(2)
            .map(|m1| calculate_coefficient(j1, j2, j, m1, 2 - m1, 2).unwrap().powi(2))
            .sum();
        assert!((norm - 1.0).abs() < 1e-9, "norm={norm}");
    }

    #[test]
    fn oversized_spins_are_rejected() {
        let err = calculate_coefficient(66, 0, 66, 0, 0, 0).unwrap_err();
        assert_eq!(err.info().code, "spin-out-of-range");
        assert!(wigner_3j(1000, 1000, 0, 0, 0, 0).is_err());
        assert!(tabulate(MAX_DOUBLED_SPIN).is_err());
    }

    #[test]
    fn extreme_projections_do_not_panic() {
        assert_eq!(wigner_3j(1, 1, 2, i32::MIN, 1, 0).unwrap(), 0.0);
        assert_eq!(wigner_3j(1, 1, 2, 1, -1, i32::MIN).unwrap(), 0.0);
        assert_eq!(calculate_coefficient(1, 1, 2, 1, 1, i32::MIN).unwrap(), 0.0);
        assert_eq!(calculate_coefficient(i32::MIN, 1, 1, 0, 1, 1).unwrap(), 0.0);
    }
}
