//! Property-based tests for the distance engine.
//!
//! # Invariants tested
//!
//! - **Symmetry:** `distance(a, b) == distance(b, a)`.
//! - **Identity:** `distance(a, a) == 0` within 1e-6 km.
//! - **Non-negativity:** distances are finite and never negative.

use geo::Point;
use proptest::prelude::*;
use regionrank_core::geometry::distance_km;

const TOLERANCE_KM: f64 = 1e-6;

fn korean_point() -> impl Strategy<Value = Point<f64>> {
    (124.0_f64..132.0, 33.0_f64..39.0).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn distance_is_symmetric(a in korean_point(), b in korean_point()) {
        let forward = distance_km(a, b);
        let backward = distance_km(b, a);
        prop_assert!((forward - backward).abs() < TOLERANCE_KM);
    }

    #[test]
    fn distance_to_self_is_zero(a in korean_point()) {
        prop_assert!(distance_km(a, a).abs() < TOLERANCE_KM);
    }

    #[test]
    fn distance_is_finite_and_non_negative(a in korean_point(), b in korean_point()) {
        let km = distance_km(a, b);
        prop_assert!(km.is_finite());
        prop_assert!(km >= 0.0);
    }
}
