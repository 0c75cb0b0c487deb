//! Mass dependence of partial widths.

/// Centre-of-mass momentum of two daughters of masses `m1`, `m2` in a
/// parent of mass `mass`; zero below threshold.
pub fn pcm(mass: f64, m1: f64, m2: f64) -> f64 {
    let sum = m1 + m2;
    let diff = m1 - m2;
    let arg = (mass * mass - sum * sum) * (mass * mass - diff * diff);
    if mass <= 0.0 || arg <= 0.0 {
        0.0
    } else {
        arg.sqrt() / (2.0 * mass)
    }
}

/// Two-body partial width with the `p^(2L+1)` threshold behaviour,
/// normalised to `pole_width` at `pole_mass`:
/// `Γ(m) = Γ0 (m0/m) (p(m)/p(m0))^(2L+1)`.
pub fn two_body_width(
    pole_width: f64,
    pole_mass: f64,
    mass: f64,
    daughters: (f64, f64),
    angular_momentum: u8,
) -> f64 {
    let p = pcm(mass, daughters.0, daughters.1);
    let p0 = pcm(pole_mass, daughters.0, daughters.1);
    if p <= 0.0 {
        return 0.0;
    }
    if p0 <= 0.0 {
        return pole_width;
    }
    let exponent = 2 * i32::from(angular_momentum) + 1;
    pole_width * (pole_mass / mass) * (p / p0).powi(exponent)
}
