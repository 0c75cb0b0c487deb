mod common;

use common::{resonance, FixedWidthCatalog, CLOSED, NUCLEON, PION};
use hadron_core::{ParticleData, RngHandle};
use hadron_decay::{ActionFinder, DecayActionsFinder};
use proptest::prelude::*;

proptest! {
    #[test]
    fn stable_and_closed_species_never_decay(
        seed in any::<u64>(),
        dt in 0.01f64..50.0,
        count in 1usize..64,
    ) {
        let catalog = FixedWidthCatalog::new();
        let finder = DecayActionsFinder::new(&catalog);
        let particles: Vec<ParticleData> = (0..count as u64)
            .map(|id| match id % 3 {
                0 => ParticleData::at_rest(id, PION, 0.138, 0.0),
                1 => ParticleData::at_rest(id, NUCLEON, 0.938, 0.0),
                _ => ParticleData::at_rest(id, CLOSED, 0.5, 0.0).with_formation_time(-1.0),
            })
            .collect();
        let mut rng = RngHandle::from_seed(seed);
        let actions = finder.find_actions_in_cell(&particles, dt, &mut rng).unwrap();
        prop_assert!(actions.is_empty());
    }

    #[test]
    fn found_actions_respect_step_and_formation(
        seed in any::<u64>(),
        dt in 0.01f64..5.0,
        x0 in -5.0f64..5.0,
        formation_offset in -2.0f64..2.0,
    ) {
        let catalog = FixedWidthCatalog::new();
        let finder = DecayActionsFinder::new(&catalog);
        let particles: Vec<ParticleData> = (0..32)
            .map(|id| resonance(id, x0).with_formation_time(x0 + formation_offset))
            .collect();
        let mut rng = RngHandle::from_seed(seed);
        for action in finder.find_actions_in_cell(&particles, dt, &mut rng).unwrap() {
            prop_assert!(action.decay_time() >= 0.0 && action.decay_time() < dt);
            prop_assert!(action.particle().formation_time < action.time_of_execution());
            prop_assert!(!action.branches().is_empty());
        }
    }
}
