use hadron_core::{FourVector, ParticleData, PdgCode};

const DELTA_PP: PdgCode = PdgCode::new(2224);

#[test]
fn particle_at_rest_has_unit_dilation() {
    let particle = ParticleData::at_rest(1, DELTA_PP, 1.232, 0.0);
    assert!((particle.effective_mass() - 1.232).abs() < 1e-12);
    assert_eq!(particle.inverse_gamma(), 1.0);
    assert_eq!(particle.formation_time, 0.0);
}

#[test]
fn moving_particle_is_time_dilated() {
    // E = 5/3 m, |p| = 4/3 m  =>  v = 0.8, 1/gamma = 0.6
    let mass = 1.5;
    let particle = ParticleData::at_rest(1, DELTA_PP, mass, 0.0)
        .with_momentum(FourVector::new(5.0 / 3.0 * mass, 4.0 / 3.0 * mass, 0.0, 0.0));
    assert!((particle.effective_mass() - mass).abs() < 1e-12);
    assert!((particle.inverse_gamma() - 0.6).abs() < 1e-12);
}

#[test]
fn propagation_moves_along_velocity() {
    let mut particle = ParticleData::at_rest(4, DELTA_PP, 1.0, 2.0)
        .with_momentum(FourVector::new(2.0, 0.0, 1.0, 0.0));
    particle.propagate(0.5);
    assert_eq!(particle.position, FourVector::new(2.5, 0.0, 0.25, 0.0));
}

#[test]
fn spacelike_vectors_have_negative_abs() {
    let v = FourVector::new(1.0, 2.0, 0.0, 0.0);
    assert!((v.abs() + 3.0_f64.sqrt()).abs() < 1e-12);
}
