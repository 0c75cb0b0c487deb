use std::collections::HashSet;
use std::hash::BuildHasher;

use hadron_cg::{calculate_coefficient, tabulate, BuildSpinHasher, ThreeSpins, WARM_TABLE};

#[test]
fn warm_table_matches_analytic_values() {
    for (key, value) in WARM_TABLE {
        let computed =
            calculate_coefficient(key.j1, key.j2, key.j3, key.m1, key.m2, key.m3).unwrap();
        assert!((computed - value).abs() < 1e-12, "{key:?}: {computed} vs {value}");
        assert!(key.is_physical());
    }
}

#[test]
fn tabulate_regenerates_the_warm_table() {
    let rows = tabulate(3).unwrap();
    assert_eq!(rows.len(), WARM_TABLE.len());
    for ((key, value), (warm_key, warm_value)) in rows.iter().zip(WARM_TABLE) {
        assert_eq!(key, warm_key);
        assert!((value - warm_value).abs() < 1e-12);
    }
}

fn physical_keys(max_j: i32) -> Vec<ThreeSpins> {
    let mut keys = Vec::new();
    for j1 in 0..=max_j {
        for j2 in 0..=max_j {
            for j3 in (j1 - j2).abs()..=(j1 + j2) {
                for m1 in (-j1..=j1).step_by(2) {
                    for m2 in (-j2..=j2).step_by(2) {
                        let key = ThreeSpins::new(j1, j2, j3, m1, m2, m1 + m2);
                        if key.is_physical() {
                            keys.push(key);
                        }
                    }
                }
            }
        }
    }
    keys
}

#[test]
fn spin_index_is_injective_on_physical_keys() {
    let keys = physical_keys(8);
    let indices: HashSet<u64> = keys.iter().map(ThreeSpins::spin_index).collect();
    assert!(keys.len() > 1000);
    assert_eq!(indices.len(), keys.len());
}

#[test]
fn hashes_spread_over_home_buckets() {
    let keys = physical_keys(8);
    let build = BuildSpinHasher::default();
    let hashes: HashSet<u64> = keys.iter().map(|key| build.hash_one(key)).collect();
    assert_eq!(hashes.len(), keys.len());

    // home bucket = low bits of the hash, at a load factor below one half
    let buckets = (keys.len().next_power_of_two() * 2) as u64;
    let homes: HashSet<u64> = hashes.iter().map(|hash| hash & (buckets - 1)).collect();
    assert!(
        homes.len() * 10 > keys.len() * 7,
        "{} keys landed in {} home buckets",
        keys.len(),
        homes.len()
    );
}
