//! Distance and budget filtering of candidate regions.

use geo::Point;
use log::{debug, warn};
use regionrank_core::geometry::distance_km;
use regionrank_core::{RegionRecord, RentType, fields};

use crate::query::RecommendationQuery;

/// Select the records within reach of `reference` that fit the budget.
///
/// Survivors are cloned in source order and carry a `distance` attribute in
/// kilometres. Records without a centroid are skipped. Missing rent figures
/// are read as zero.
///
/// - Monthly rent: `monthlyRent * area` must lie in the price window and
///   `monthlyDeposit * area` in the deposit window.
/// - Deposit only: `leaseDeposit * area` must lie in the price window.
#[must_use]
pub fn filter_candidates(
    records: &[RegionRecord],
    reference: Point<f64>,
    query: &RecommendationQuery,
) -> Vec<RegionRecord> {
    let survivors: Vec<RegionRecord> = records
        .iter()
        .filter_map(|record| {
            let Some(centroid) = record.centroid() else {
                warn!("skipping region {:?} without geometry", record.id);
                return None;
            };
            let distance = distance_km(reference, centroid);
            (distance <= query.max_distance && within_budget(record, query)).then(|| {
                let mut candidate = record.clone();
                candidate.set_number(fields::DISTANCE, distance);
                candidate
            })
        })
        .collect();
    debug!(
        "{} of {} regions within {} km and budget",
        survivors.len(),
        records.len(),
        query.max_distance
    );
    survivors
}

#[expect(
    clippy::float_arithmetic,
    reason = "unit prices are scaled by the requested floor area"
)]
fn within_budget(record: &RegionRecord, query: &RecommendationQuery) -> bool {
    let housing = query.housing_type;
    match query.rent_type {
        RentType::Monthly => {
            let rent = record.number(&housing.monthly_rent_column()) * query.area;
            let deposit = record.number(&housing.monthly_deposit_column()) * query.area;
            query.price_window().contains(rent) && query.deposit_window().contains(deposit)
        }
        RentType::DepositOnly => {
            let lease = record.number(&housing.lease_deposit_column()) * query.area;
            query.price_window().contains(lease)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{MultiPolygon, polygon};
    use regionrank_core::HousingType;
    use rstest::{fixture, rstest};
    use serde_json::{Map, Value, json};

    fn square(lon: f64, lat: f64) -> MultiPolygon<f64> {
        MultiPolygon(vec![polygon![
            (x: lon, y: lat),
            (x: lon + 0.01, y: lat),
            (x: lon + 0.01, y: lat + 0.01),
            (x: lon, y: lat + 0.01),
            (x: lon, y: lat),
        ]])
    }

    fn region(name: &str, lon: f64, rent: Value, deposit: f64, lease: f64) -> RegionRecord {
        let housing = HousingType::Apartment;
        let mut properties = Map::new();
        properties.insert("ADM_NM".into(), json!(name));
        properties.insert(housing.monthly_rent_column(), rent);
        properties.insert(housing.monthly_deposit_column(), json!(deposit));
        properties.insert(housing.lease_deposit_column(), json!(lease));
        RegionRecord::new(square(lon, 37.5), properties)
    }

    #[fixture]
    fn regions() -> Vec<RegionRecord> {
        vec![
            region("origin", 127.0, json!(1.0), 10.0, 100.0),
            region("near", 127.02, json!(2.0), 20.0, 200.0),
            region("far", 127.5, json!(1.0), 10.0, 100.0),
        ]
    }

    fn query(json: Value) -> RecommendationQuery {
        serde_json::from_value(json).expect("query")
    }

    fn origin() -> Point<f64> {
        square(127.0, 37.5).0[0].exterior().0[0].into()
    }

    fn names(records: &[RegionRecord]) -> Vec<&str> {
        records
            .iter()
            .filter_map(|record| record.text("ADM_NM"))
            .collect()
    }

    #[rstest]
    fn keeps_regions_within_distance(regions: Vec<RegionRecord>) {
        let reference = regions[0].centroid().expect("centroid");
        let found = filter_candidates(&regions, reference, &query(json!({"sido": "x", "area": 1})));
        assert_eq!(names(&found), ["origin", "near"]);
        assert!(found[0].number(fields::DISTANCE) < 1e-9);
        assert!(found[1].number(fields::DISTANCE) > 1.0);
        assert!(regions[0].value(fields::DISTANCE).is_none());
    }

    #[rstest]
    #[case(json!({"sido": "x", "area": 10, "maxPrice": 15}), vec!["origin"])]
    #[case(json!({"sido": "x", "area": 10, "minPrice": 15}), vec!["near"])]
    #[case(json!({"sido": "x", "area": 10, "maxDeposit": 100}), vec!["origin"])]
    #[case(
        json!({"sido": "x", "area": 10, "rentType": "deposit-only", "minPrice": 1500}),
        vec!["near"]
    )]
    #[case(
        json!({"sido": "x", "area": 10, "rentType": "deposit-only", "maxPrice": 1000}),
        vec!["origin"]
    )]
    fn applies_budget_windows(
        regions: Vec<RegionRecord>,
        #[case] raw: Value,
        #[case] expected: Vec<&str>,
    ) {
        let reference = regions[0].centroid().expect("centroid");
        let found = filter_candidates(&regions, reference, &query(raw));
        assert_eq!(names(&found), expected);
    }

    #[test]
    fn missing_rent_reads_as_zero() {
        let records = vec![region("blank", 127.0, Value::Null, 0.0, 0.0)];
        let reference = records[0].centroid().expect("centroid");
        let found = filter_candidates(
            &records,
            reference,
            &query(json!({"sido": "x", "area": 10, "maxPrice": 0})),
        );
        assert_eq!(names(&found), ["blank"]);
    }

    #[test]
    fn skips_regions_without_geometry() {
        let mut records = regions();
        records.push(RegionRecord::new(MultiPolygon(vec![]), Map::new()));
        let found = filter_candidates(&records, origin(), &query(json!({"sido": "x", "area": 1})));
        assert_eq!(found.len(), 2);
    }
}
