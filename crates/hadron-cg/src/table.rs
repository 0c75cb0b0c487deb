//! Known coefficients for doubled spins up to 3, used to warm a cache.

use crate::spins::ThreeSpins;

/// Tabulated `(key, coefficient)` pairs generated from [`crate::calculate_coefficient`].
pub const WARM_TABLE: &[(ThreeSpins, f64)] = &[
    (ThreeSpins::new(0, 0, 0, 0, 0, 0), 1.00000000000000000),
    (ThreeSpins::new(0, 1, 1, 0, -1, -1), 1.00000000000000022),
    (ThreeSpins::new(0, 1, 1, 0, 1, 1), 1.00000000000000022),
    (ThreeSpins::new(0, 2, 2, 0, -2, -2), 0.99999999999999989),
    (ThreeSpins::new(0, 2, 2, 0, 0, 0), 0.99999999999999989),
    (ThreeSpins::new(0, 2, 2, 0, 2, 2), 0.99999999999999989),
    (ThreeSpins::new(0, 3, 3, 0, -3, -3), 1.00000000000000000),
    (ThreeSpins::new(0, 3, 3, 0, -1, -1), 0.99999999999999989),
    (ThreeSpins::new(0, 3, 3, 0, 1, 1), 0.99999999999999989),
    (ThreeSpins::new(0, 3, 3, 0, 3, 3), 1.00000000000000000),
    (ThreeSpins::new(1, 0, 1, -1, 0, -1), 1.00000000000000022),
    (ThreeSpins::new(1, 0, 1, 1, 0, 1), 1.00000000000000022),
    (ThreeSpins::new(1, 1, 0, -1, 1, 0), -0.70710678118654757),
    (ThreeSpins::new(1, 1, 0, 1, -1, 0), 0.70710678118654757),
    (ThreeSpins::new(1, 1, 2, -1, -1, -2), 0.99999999999999989),
    (ThreeSpins::new(1, 1, 2, -1, 1, 0), 0.70710678118654746),
    (ThreeSpins::new(1, 1, 2, 1, -1, 0), 0.70710678118654746),
    (ThreeSpins::new(1, 1, 2, 1, 1, 2), 0.99999999999999989),
    (ThreeSpins::new(1, 2, 1, -1, 0, -1), -0.57735026918962584),
    (ThreeSpins::new(1, 2, 1, -1, 2, 1), -0.81649658092772615),
    (ThreeSpins::new(1, 2, 1, 1, -2, -1), 0.81649658092772615),
    (ThreeSpins::new(1, 2, 1, 1, 0, 1), 0.57735026918962584),
    (ThreeSpins::new(1, 2, 3, -1, -2, -3), 1.00000000000000000),
    (ThreeSpins::new(1, 2, 3, -1, 0, -1), 0.81649658092772615),
    (ThreeSpins::new(1, 2, 3, -1, 2, 1), 0.57735026918962584),
    (ThreeSpins::new(1, 2, 3, 1, -2, -1), 0.57735026918962584),
    (ThreeSpins::new(1, 2, 3, 1, 0, 1), 0.81649658092772615),
    (ThreeSpins::new(1, 2, 3, 1, 2, 3), 1.00000000000000000),
    (ThreeSpins::new(1, 3, 2, -1, -1, -2), -0.49999999999999983),
    (ThreeSpins::new(1, 3, 2, -1, 1, 0), -0.70710678118654724),
    (ThreeSpins::new(1, 3, 2, -1, 3, 2), -0.86602540378443837),
    (ThreeSpins::new(1, 3, 2, 1, -3, -2), 0.86602540378443837),
    (ThreeSpins::new(1, 3, 2, 1, -1, 0), 0.70710678118654724),
    (ThreeSpins::new(1, 3, 2, 1, 1, 2), 0.49999999999999983),
    (ThreeSpins::new(1, 3, 4, -1, -3, -4), 1.00000000000000022),
    (ThreeSpins::new(1, 3, 4, -1, -1, -2), 0.86602540378443871),
    (ThreeSpins::new(1, 3, 4, -1, 1, 0), 0.70710678118654746),
    (ThreeSpins::new(1, 3, 4, -1, 3, 2), 0.49999999999999994),
    (ThreeSpins::new(1, 3, 4, 1, -3, -2), 0.49999999999999994),
    (ThreeSpins::new(1, 3, 4, 1, -1, 0), 0.70710678118654746),
    (ThreeSpins::new(1, 3, 4, 1, 1, 2), 0.86602540378443871),
    (ThreeSpins::new(1, 3, 4, 1, 3, 4), 1.00000000000000022),
    (ThreeSpins::new(2, 0, 2, -2, 0, -2), 0.99999999999999989),
    (ThreeSpins::new(2, 0, 2, 0, 0, 0), 0.99999999999999989),
    (ThreeSpins::new(2, 0, 2, 2, 0, 2), 0.99999999999999989),
    (ThreeSpins::new(2, 1, 1, -2, 1, -1), -0.81649658092772615),
    (ThreeSpins::new(2, 1, 1, 0, -1, -1), 0.57735026918962584),
    (ThreeSpins::new(2, 1, 1, 0, 1, 1), -0.57735026918962584),
    (ThreeSpins::new(2, 1, 1, 2, -1, 1), 0.81649658092772615),
    (ThreeSpins::new(2, 1, 3, -2, -1, -3), 1.00000000000000000),
    (ThreeSpins::new(2, 1, 3, -2, 1, -1), 0.57735026918962584),
    (ThreeSpins::new(2, 1, 3, 0, -1, -1), 0.81649658092772615),
    (ThreeSpins::new(2, 1, 3, 0, 1, 1), 0.81649658092772615),
    (ThreeSpins::new(2, 1, 3, 2, -1, 1), 0.57735026918962584),
    (ThreeSpins::new(2, 1, 3, 2, 1, 3), 1.00000000000000000),
    (ThreeSpins::new(2, 2, 0, -2, 2, 0), 0.57735026918962584),
    (ThreeSpins::new(2, 2, 0, 0, 0, 0), -0.57735026918962573),
    (ThreeSpins::new(2, 2, 0, 2, -2, 0), 0.57735026918962584),
    (ThreeSpins::new(2, 2, 2, -2, 0, -2), -0.70710678118654735),
    (ThreeSpins::new(2, 2, 2, -2, 2, 0), -0.70710678118654735),
    (ThreeSpins::new(2, 2, 2, 0, -2, -2), 0.70710678118654735),
    (ThreeSpins::new(2, 2, 2, 0, 2, 2), -0.70710678118654735),
    (ThreeSpins::new(2, 2, 2, 2, -2, 0), 0.70710678118654735),
    (ThreeSpins::new(2, 2, 2, 2, 0, 2), 0.70710678118654735),
    (ThreeSpins::new(2, 2, 4, -2, -2, -4), 1.00000000000000022),
    (ThreeSpins::new(2, 2, 4, -2, 0, -2), 0.70710678118654746),
    (ThreeSpins::new(2, 2, 4, -2, 2, 0), 0.40824829046386313),
    (ThreeSpins::new(2, 2, 4, 0, -2, -2), 0.70710678118654746),
    (ThreeSpins::new(2, 2, 4, 0, 0, 0), 0.81649658092772615),
    (ThreeSpins::new(2, 2, 4, 0, 2, 2), 0.70710678118654746),
    (ThreeSpins::new(2, 2, 4, 2, -2, 0), 0.40824829046386313),
    (ThreeSpins::new(2, 2, 4, 2, 0, 2), 0.70710678118654746),
    (ThreeSpins::new(2, 2, 4, 2, 2, 4), 1.00000000000000022),
    (ThreeSpins::new(2, 3, 1, -2, 1, -1), 0.40824829046386302),
    (ThreeSpins::new(2, 3, 1, -2, 3, 1), 0.70710678118654746),
    (ThreeSpins::new(2, 3, 1, 0, -1, -1), -0.57735026918962573),
    (ThreeSpins::new(2, 3, 1, 0, 1, 1), -0.57735026918962573),
    (ThreeSpins::new(2, 3, 1, 2, -3, -1), 0.70710678118654746),
    (ThreeSpins::new(2, 3, 1, 2, -1, 1), 0.40824829046386302),
    (ThreeSpins::new(2, 3, 3, -2, -1, -3), -0.63245553203367610),
    (ThreeSpins::new(2, 3, 3, -2, 1, -1), -0.73029674334022165),
    (ThreeSpins::new(2, 3, 3, -2, 3, 1), -0.63245553203367610),
    (ThreeSpins::new(2, 3, 3, 0, -3, -3), 0.77459666924148352),
    (ThreeSpins::new(2, 3, 3, 0, -1, -1), 0.25819888974716126),
    (ThreeSpins::new(2, 3, 3, 0, 1, 1), -0.25819888974716126),
    (ThreeSpins::new(2, 3, 3, 0, 3, 3), -0.77459666924148352),
    (ThreeSpins::new(2, 3, 3, 2, -3, -1), 0.63245553203367610),
    (ThreeSpins::new(2, 3, 3, 2, -1, 1), 0.73029674334022165),
    (ThreeSpins::new(2, 3, 3, 2, 1, 3), 0.63245553203367610),
    (ThreeSpins::new(2, 3, 5, -2, -3, -5), 0.99999999999999989),
    (ThreeSpins::new(2, 3, 5, -2, -1, -3), 0.77459666924148318),
    (ThreeSpins::new(2, 3, 5, -2, 1, -1), 0.54772255750516596),
    (ThreeSpins::new(2, 3, 5, -2, 3, 1), 0.31622776601683794),
    (ThreeSpins::new(2, 3, 5, 0, -3, -3), 0.63245553203367599),
    (ThreeSpins::new(2, 3, 5, 0, -1, -1), 0.77459666924148318),
    (ThreeSpins::new(2, 3, 5, 0, 1, 1), 0.77459666924148318),
    (ThreeSpins::new(2, 3, 5, 0, 3, 3), 0.63245553203367599),
    (ThreeSpins::new(2, 3, 5, 2, -3, -1), 0.31622776601683794),
    (ThreeSpins::new(2, 3, 5, 2, -1, 1), 0.54772255750516596),
    (ThreeSpins::new(2, 3, 5, 2, 1, 3), 0.77459666924148318),
    (ThreeSpins::new(2, 3, 5, 2, 3, 5), 0.99999999999999989),
    (ThreeSpins::new(3, 0, 3, -3, 0, -3), 1.00000000000000000),
    (ThreeSpins::new(3, 0, 3, -1, 0, -1), 0.99999999999999989),
    (ThreeSpins::new(3, 0, 3, 1, 0, 1), 0.99999999999999989),
    (ThreeSpins::new(3, 0, 3, 3, 0, 3), 1.00000000000000000),
    (ThreeSpins::new(3, 1, 2, -3, 1, -2), -0.86602540378443837),
    (ThreeSpins::new(3, 1, 2, -1, -1, -2), 0.49999999999999983),
    (ThreeSpins::new(3, 1, 2, -1, 1, 0), -0.70710678118654724),
    (ThreeSpins::new(3, 1, 2, 1, -1, 0), 0.70710678118654724),
    (ThreeSpins::new(3, 1, 2, 1, 1, 2), -0.49999999999999983),
    (ThreeSpins::new(3, 1, 2, 3, -1, 2), 0.86602540378443837),
    (ThreeSpins::new(3, 1, 4, -3, -1, -4), 1.00000000000000022),
    (ThreeSpins::new(3, 1, 4, -3, 1, -2), 0.49999999999999994),
    (ThreeSpins::new(3, 1, 4, -1, -1, -2), 0.86602540378443871),
    (ThreeSpins::new(3, 1, 4, -1, 1, 0), 0.70710678118654746),
    (ThreeSpins::new(3, 1, 4, 1, -1, 0), 0.70710678118654746),
    (ThreeSpins::new(3, 1, 4, 1, 1, 2), 0.86602540378443871),
    (ThreeSpins::new(3, 1, 4, 3, -1, 2), 0.49999999999999994),
    (ThreeSpins::new(3, 1, 4, 3, 1, 4), 1.00000000000000022),
    (ThreeSpins::new(3, 2, 1, -3, 2, -1), 0.70710678118654746),
    (ThreeSpins::new(3, 2, 1, -1, 0, -1), -0.57735026918962573),
    (ThreeSpins::new(3, 2, 1, -1, 2, 1), 0.40824829046386302),
    (ThreeSpins::new(3, 2, 1, 1, -2, -1), 0.40824829046386302),
    (ThreeSpins::new(3, 2, 1, 1, 0, 1), -0.57735026918962573),
    (ThreeSpins::new(3, 2, 1, 3, -2, 1), 0.70710678118654746),
    (ThreeSpins::new(3, 2, 3, -3, 0, -3), -0.77459666924148352),
    (ThreeSpins::new(3, 2, 3, -3, 2, -1), -0.63245553203367610),
    (ThreeSpins::new(3, 2, 3, -1, -2, -3), 0.63245553203367610),
    (ThreeSpins::new(3, 2, 3, -1, 0, -1), -0.25819888974716126),
    (ThreeSpins::new(3, 2, 3, -1, 2, 1), -0.73029674334022165),
    (ThreeSpins::new(3, 2, 3, 1, -2, -1), 0.73029674334022165),
    (ThreeSpins::new(3, 2, 3, 1, 0, 1), 0.25819888974716126),
    (ThreeSpins::new(3, 2, 3, 1, 2, 3), -0.63245553203367610),
    (ThreeSpins::new(3, 2, 3, 3, -2, 1), 0.63245553203367610),
    (ThreeSpins::new(3, 2, 3, 3, 0, 3), 0.77459666924148352),
    (ThreeSpins::new(3, 2, 5, -3, -2, -5), 0.99999999999999989),
    (ThreeSpins::new(3, 2, 5, -3, 0, -3), 0.63245553203367599),
    (ThreeSpins::new(3, 2, 5, -3, 2, -1), 0.31622776601683794),
    (ThreeSpins::new(3, 2, 5, -1, -2, -3), 0.77459666924148318),
    (ThreeSpins::new(3, 2, 5, -1, 0, -1), 0.77459666924148318),
    (ThreeSpins::new(3, 2, 5, -1, 2, 1), 0.54772255750516596),
    (ThreeSpins::new(3, 2, 5, 1, -2, -1), 0.54772255750516596),
    (ThreeSpins::new(3, 2, 5, 1, 0, 1), 0.77459666924148318),
    (ThreeSpins::new(3, 2, 5, 1, 2, 3), 0.77459666924148318),
    (ThreeSpins::new(3, 2, 5, 3, -2, 1), 0.31622776601683794),
    (ThreeSpins::new(3, 2, 5, 3, 0, 3), 0.63245553203367599),
    (ThreeSpins::new(3, 2, 5, 3, 2, 5), 0.99999999999999989),
    (ThreeSpins::new(3, 3, 0, -3, 3, 0), -0.49999999999999994),
    (ThreeSpins::new(3, 3, 0, -1, 1, 0), 0.49999999999999994),
    (ThreeSpins::new(3, 3, 0, 1, -1, 0), -0.49999999999999994),
    (ThreeSpins::new(3, 3, 0, 3, -3, 0), 0.49999999999999994),
    (ThreeSpins::new(3, 3, 2, -3, 1, -2), 0.54772255750516596),
    (ThreeSpins::new(3, 3, 2, -3, 3, 0), 0.67082039324993692),
    (ThreeSpins::new(3, 3, 2, -1, -1, -2), -0.63245553203367599),
    (ThreeSpins::new(3, 3, 2, -1, 1, 0), -0.22360679774997907),
    (ThreeSpins::new(3, 3, 2, -1, 3, 2), 0.54772255750516596),
    (ThreeSpins::new(3, 3, 2, 1, -3, -2), 0.54772255750516596),
    (ThreeSpins::new(3, 3, 2, 1, -1, 0), -0.22360679774997907),
    (ThreeSpins::new(3, 3, 2, 1, 1, 2), -0.63245553203367599),
    (ThreeSpins::new(3, 3, 2, 3, -3, 0), 0.67082039324993692),
    (ThreeSpins::new(3, 3, 2, 3, -1, 2), 0.54772255750516596),
    (ThreeSpins::new(3, 3, 4, -3, -1, -4), -0.70710678118654746),
    (ThreeSpins::new(3, 3, 4, -3, 1, -2), -0.70710678118654746),
    (ThreeSpins::new(3, 3, 4, -3, 3, 0), -0.49999999999999994),
    (ThreeSpins::new(3, 3, 4, -1, -3, -4), 0.70710678118654746),
    (ThreeSpins::new(3, 3, 4, -1, 1, 0), -0.49999999999999994),
    (ThreeSpins::new(3, 3, 4, -1, 3, 2), -0.70710678118654746),
    (ThreeSpins::new(3, 3, 4, 1, -3, -2), 0.70710678118654746),
    (ThreeSpins::new(3, 3, 4, 1, -1, 0), 0.49999999999999994),
    (ThreeSpins::new(3, 3, 4, 1, 3, 4), -0.70710678118654746),
    (ThreeSpins::new(3, 3, 4, 3, -3, 0), 0.49999999999999994),
    (ThreeSpins::new(3, 3, 4, 3, -1, 2), 0.70710678118654746),
    (ThreeSpins::new(3, 3, 4, 3, 1, 4), 0.70710678118654746),
    (ThreeSpins::new(3, 3, 6, -3, -3, -6), 1.00000000000000022),
    (ThreeSpins::new(3, 3, 6, -3, -1, -4), 0.70710678118654746),
    (ThreeSpins::new(3, 3, 6, -3, 1, -2), 0.44721359549995793),
    (ThreeSpins::new(3, 3, 6, -3, 3, 0), 0.22360679774997894),
    (ThreeSpins::new(3, 3, 6, -1, -3, -4), 0.70710678118654746),
    (ThreeSpins::new(3, 3, 6, -1, -1, -2), 0.77459666924148352),
    (ThreeSpins::new(3, 3, 6, -1, 1, 0), 0.67082039324993670),
    (ThreeSpins::new(3, 3, 6, -1, 3, 2), 0.44721359549995793),
    (ThreeSpins::new(3, 3, 6, 1, -3, -2), 0.44721359549995793),
    (ThreeSpins::new(3, 3, 6, 1, -1, 0), 0.67082039324993670),
    (ThreeSpins::new(3, 3, 6, 1, 1, 2), 0.77459666924148352),
    (ThreeSpins::new(3, 3, 6, 1, 3, 4), 0.70710678118654746),
    (ThreeSpins::new(3, 3, 6, 3, -3, 0), 0.22360679774997894),
    (ThreeSpins::new(3, 3, 6, 3, -1, 2), 0.44721359549995793),
    (ThreeSpins::new(3, 3, 6, 3, 1, 4), 0.70710678118654746),
    (ThreeSpins::new(3, 3, 6, 3, 3, 6), 1.00000000000000022),
];
