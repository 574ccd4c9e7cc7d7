//! Behavioural coverage for recommending regions around a reference.

use std::cell::RefCell;

use geo::{MultiPolygon, polygon};
use regionrank_core::{HousingType, RegionCollection, RegionRecord, fields};
use regionrank_scorer::{
    DEFAULT_NAME_COLUMN, DEFAULT_POPULATION_COLUMN, DEFAULT_TRANSIT_COLUMN, PipelineError,
    RecommendOptions, RecommendationQuery, recommend,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Map, json};

/// World state shared by the recommendation scenarios.
#[derive(Debug, Default)]
struct RecommendationWorld {
    dataset: RefCell<RegionCollection>,
    outcome: RefCell<Option<Result<RegionCollection, PipelineError>>>,
}

#[fixture]
fn world() -> RecommendationWorld {
    RecommendationWorld::default()
}

fn neighbourhood(name: &str, lon: f64, lat: f64, rent: f64) -> RegionRecord {
    let housing = HousingType::Apartment;
    let mut properties = Map::new();
    properties.insert(DEFAULT_NAME_COLUMN.into(), json!(name));
    properties.insert(DEFAULT_POPULATION_COLUMN.into(), json!(1200));
    properties.insert(DEFAULT_TRANSIT_COLUMN.into(), json!(14));
    properties.insert(housing.monthly_rent_column(), json!(rent));
    properties.insert(housing.monthly_deposit_column(), json!(100.0));
    properties.insert(housing.lease_deposit_column(), json!(900.0));
    let geometry = MultiPolygon(vec![polygon![
        (x: lon - 0.005, y: lat - 0.005),
        (x: lon + 0.005, y: lat - 0.005),
        (x: lon + 0.005, y: lat + 0.005),
        (x: lon - 0.005, y: lat + 0.005),
        (x: lon - 0.005, y: lat - 0.005),
    ]]);
    RegionRecord::new(geometry, properties)
}

#[expect(
    clippy::expect_used,
    reason = "scenario inputs are literals and must always parse"
)]
fn ask(world: &RecommendationWorld, eupmyeondong: &str, max_price: f64) {
    let query: RecommendationQuery = serde_json::from_value(json!({
        "currentWorkplaceSido": "서울특별시",
        "currentWorkplaceSigungu": "종로구",
        "currentWorkplaceEupmyeondong": eupmyeondong,
        "singleHousehold": 7,
        "transportation": 9,
        "area": 20,
        "maxPrice": max_price
    }))
    .expect("recommendation query");
    let outcome = recommend(&world.dataset.borrow(), &query, &RecommendOptions::default());
    world.outcome.replace(Some(outcome));
}

fn with_recommended<T>(
    world: &RecommendationWorld,
    check: impl FnOnce(&RegionCollection) -> T,
) -> T {
    let binding = world.outcome.borrow();
    match binding.as_ref() {
        Some(Ok(collection)) => check(collection),
        Some(Err(err)) => panic!("recommendation should succeed, got {err}"),
        None => panic!("recommendation outcome must be recorded"),
    }
}

#[given("a dataset of Jongno neighbourhoods and one Busan neighbourhood")]
fn dataset(world: &RecommendationWorld) {
    world.dataset.replace(RegionCollection::from_records(vec![
        neighbourhood("서울특별시 종로구 청운효자동", 126.965, 37.585, 30.0),
        neighbourhood("서울특별시 종로구 사직동", 126.975, 37.575, 40.0),
        neighbourhood("서울특별시 종로구 삼청동", 126.985, 37.585, 80.0),
        neighbourhood("부산광역시 부산진구 가야1동", 129.03, 35.15, 10.0),
    ]));
}

#[when("I ask for affordable regions around Cheongun-hyoja-dong")]
fn ask_affordable(world: &RecommendationWorld) {
    ask(world, "청운효자동", 1000.0);
}

#[when("I ask for regions around a neighbourhood that does not exist")]
fn ask_unknown(world: &RecommendationWorld) {
    ask(world, "없는동", 1000.0);
}

#[when("I ask for regions around Cheongun-hyoja-dong with a tiny budget")]
fn ask_tiny_budget(world: &RecommendationWorld) {
    ask(world, "청운효자동", 1.0);
}

#[then("the recommendation contains Cheongun-hyoja-dong and Sajik-dong")]
fn contains_expected(world: &RecommendationWorld) {
    with_recommended(world, |collection| {
        let mut names: Vec<&str> = collection
            .records
            .iter()
            .filter_map(|record| record.text(DEFAULT_NAME_COLUMN))
            .collect();
        names.sort_unstable();
        assert_eq!(
            names,
            ["서울특별시 종로구 사직동", "서울특별시 종로구 청운효자동"]
        );
    });
}

#[then("every recommended region carries its distance")]
fn carries_distance(world: &RecommendationWorld) {
    with_recommended(world, |collection| {
        for record in &collection.records {
            let distance = record.present(fields::DISTANCE);
            assert!(
                distance.is_some_and(|km| (0.0..=3.0).contains(&km)),
                "distance should be within 3 km (got {distance:?})"
            );
            assert!(record.present(fields::COMPUTED_VALUE).is_some());
        }
    });
}

#[then("the recommendation fails because the reference was not found")]
fn reference_missing(world: &RecommendationWorld) {
    let binding = world.outcome.borrow();
    match binding.as_ref() {
        Some(Err(PipelineError::ReferenceNotFound { name, .. })) => {
            assert_eq!(name, "서울특별시 종로구 없는동");
        }
        Some(Err(other)) => panic!("unexpected error: {other}"),
        Some(Ok(_)) => panic!("expected the recommendation to fail"),
        None => panic!("recommendation outcome must be recorded"),
    }
}

#[then("the recommendation is empty")]
fn recommendation_empty(world: &RecommendationWorld) {
    with_recommended(world, |collection| assert!(collection.is_empty()));
}

#[scenario(path = "tests/features/recommendation.feature", index = 0)]
fn nearby_affordable_scenario(world: RecommendationWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/recommendation.feature", index = 1)]
fn unknown_reference_scenario(world: RecommendationWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/recommendation.feature", index = 2)]
fn empty_budget_scenario(world: RecommendationWorld) {
    let _ = world;
}
