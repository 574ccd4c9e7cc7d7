//! Property-based tests for normalisation, scoring, and filtering.
//!
//! # Invariants tested
//!
//! - **Unit range:** normalised values always lie in `0.0..=1.0`.
//! - **Constant columns:** a column with no spread normalises to zero.
//! - **Toggle equivalence:** disabling an indicator matches a zero weight.
//! - **Score range:** scores lie in `0.0..=100.0` and the best region scores
//!   exactly 100 unless every region ties at zero.
//! - **Filter idempotence:** filtering a filtered set changes nothing.
#![expect(
    clippy::float_arithmetic,
    reason = "generated fixtures and score assertions use float maths"
)]

use geo::{MultiPolygon, Point, polygon};
use proptest::prelude::*;
use regionrank_core::{
    HousingType, Indicator, RegionRecord, Statuses, Weights, fields,
};
use regionrank_scorer::normalize::normalise_values;
use regionrank_scorer::{
    DEFAULT_COMMERCIAL_COLUMN, DEFAULT_POPULATION_COLUMN, DEFAULT_TRANSIT_COLUMN,
    RecommendationQuery, ScoringProfile, compute, filter_candidates,
};
use serde_json::{Map, json};

const TOLERANCE: f64 = 1e-9;

fn record((lon, population, transport, shops, rent): (f64, u32, u32, u32, f64)) -> RegionRecord {
    let housing = HousingType::Apartment;
    let mut properties = Map::new();
    properties.insert(DEFAULT_POPULATION_COLUMN.into(), json!(population));
    properties.insert(DEFAULT_TRANSIT_COLUMN.into(), json!(transport));
    properties.insert(DEFAULT_COMMERCIAL_COLUMN.into(), json!(shops));
    properties.insert(housing.monthly_rent_column(), json!(rent));
    properties.insert(housing.monthly_deposit_column(), json!(rent * 10.0));
    properties.insert(housing.lease_deposit_column(), json!(rent * 100.0));
    let geometry = MultiPolygon(vec![polygon![
        (x: lon, y: 37.5),
        (x: lon + 0.01, y: 37.5),
        (x: lon + 0.01, y: 37.51),
        (x: lon, y: 37.51),
        (x: lon, y: 37.5),
    ]]);
    RegionRecord::new(geometry, properties)
}

fn records() -> impl Strategy<Value = Vec<RegionRecord>> {
    prop::collection::vec(
        (126.9_f64..127.1, 0_u32..5000, 0_u32..50, 0_u32..500, 0.0_f64..200.0).prop_map(record),
        1..12,
    )
}

fn weights() -> impl Strategy<Value = Weights> {
    prop::array::uniform4(0.0_f64..=10.0).prop_map(Weights::from_array)
}

fn indicator() -> impl Strategy<Value = Indicator> {
    prop::sample::select(Indicator::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn normalised_values_stay_in_unit_range(raw in prop::collection::vec(-1e6_f64..1e6, 0..32)) {
        for value in normalise_values(&raw) {
            prop_assert!((0.0..=1.0).contains(&value), "{value} escaped the unit range");
        }
    }

    #[test]
    fn constant_columns_normalise_to_zero(value in -1e6_f64..1e6, len in 1_usize..16) {
        let normalised = normalise_values(&vec![value; len]);
        prop_assert!(normalised.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn disabling_matches_zero_weight(
        regions in records(),
        weights in weights(),
        disabled in indicator(),
    ) {
        let profile = ScoringProfile::full_dataset(HousingType::Apartment);
        let toggled = compute(
            &regions,
            &weights,
            &Statuses::default().with(disabled, false),
            &profile,
        );
        let zeroed = compute(
            &regions,
            &weights.with(disabled, 0.0),
            &Statuses::default(),
            &profile,
        );
        for (left, right) in toggled.iter().zip(&zeroed) {
            prop_assert!((left.computed_value - right.computed_value).abs() < TOLERANCE);
        }
    }

    #[test]
    fn scores_stay_within_output_scale(regions in records(), weights in weights()) {
        let profile = ScoringProfile::recommendation(HousingType::Apartment);
        let scores: Vec<f64> = compute(&regions, &weights, &Statuses::default(), &profile)
            .into_iter()
            .map(|breakdown| breakdown.computed_value)
            .collect();
        for score in &scores {
            prop_assert!((0.0..=100.0).contains(score), "{score} escaped 0..=100");
        }
        let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let all_zero = scores.iter().all(|score| *score == 0.0);
        prop_assert!(all_zero || (best - 100.0).abs() < TOLERANCE);
    }

    #[test]
    fn filtering_is_idempotent(
        regions in records(),
        max_distance in 0.0_f64..10.0,
        max_price in 0.0_f64..4000.0,
    ) {
        let query: RecommendationQuery = serde_json::from_value(json!({
            "sido": "서울특별시",
            "area": 20,
            "maxPrice": max_price,
            "maxDistance": max_distance
        }))
        .expect("query");
        let reference = Point::new(127.0, 37.505);
        let once = filter_candidates(&regions, reference, &query);
        let twice = filter_candidates(&once, reference, &query);
        prop_assert_eq!(once.len(), twice.len());
        for (first, second) in once.iter().zip(&twice) {
            prop_assert_eq!(first.value(fields::DISTANCE), second.value(fields::DISTANCE));
        }
    }
}
