//! End-to-end ranking and recommendation.

use log::{debug, info};
use regionrank_core::{RegionCollection, Statuses, Weights};

use crate::composite::score;
use crate::error::PipelineError;
use crate::filter::filter_candidates;
use crate::profile::{DEFAULT_CAPITALISATION_RATE, DEFAULT_NAME_COLUMN, ScoringProfile};
use crate::query::RecommendationQuery;

/// Knobs for the recommendation pipeline that are not part of a request.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendOptions {
    /// Attribute holding each region's administrative name.
    pub name_column: String,
    /// Annual discount rate used to capitalise monthly rent.
    pub capitalisation_rate: f64,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            name_column: DEFAULT_NAME_COLUMN.to_owned(),
            capitalisation_rate: DEFAULT_CAPITALISATION_RATE,
        }
    }
}

/// Score every region and return them ranked by `computedValue`.
///
/// # Errors
/// Returns [`PipelineError::InvalidWeights`] or
/// [`PipelineError::InvalidCapitalisationRate`] when the inputs cannot
/// produce meaningful scores.
pub fn score_collection(
    mut collection: RegionCollection,
    weights: &Weights,
    statuses: &Statuses,
    profile: &ScoringProfile,
) -> Result<RegionCollection, PipelineError> {
    validate(weights, profile)?;
    score(&mut collection.records, weights, statuses, profile);
    collection.rank_by_score();
    info!("ranked {} regions", collection.len());
    Ok(collection)
}

/// Recommend regions near the query's reference location.
///
/// The reference region is found by its joined administrative name, the
/// candidates are filtered by distance and budget, and the survivors are
/// scored among themselves with the query's sliders as weights. An empty
/// result is not an error.
///
/// # Errors
/// Returns [`PipelineError::ReferenceNotFound`] when no region carries the
/// reference name, [`PipelineError::ReferenceWithoutGeometry`] when it has no
/// centroid, and a validation error for unusable weights, distance, area or
/// rate.
///
/// # Examples
/// ```
/// use geo::{MultiPolygon, polygon};
/// use regionrank_core::{RegionCollection, RegionRecord, fields};
/// use regionrank_scorer::{RecommendOptions, RecommendationQuery, recommend};
/// use serde_json::{Map, json};
///
/// let mut properties = Map::new();
/// properties.insert("ADM_NM".into(), json!("서울특별시 종로구 청운효자동"));
/// let geometry = MultiPolygon(vec![polygon![
///     (x: 126.97, y: 37.58),
///     (x: 126.98, y: 37.58),
///     (x: 126.98, y: 37.59),
///     (x: 126.97, y: 37.58),
/// ]]);
/// let regions = RegionCollection::from_records(vec![RegionRecord::new(geometry, properties)]);
///
/// let query: RecommendationQuery = serde_json::from_value(json!({
///     "sido": "서울특별시",
///     "sigungu": "종로구",
///     "eupmyeondong": "청운효자동",
///     "area": 20
/// }))
/// .expect("query");
///
/// let ranked = recommend(&regions, &query, &RecommendOptions::default()).expect("recommend");
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked.records[0].number(fields::DISTANCE), 0.0);
/// ```
pub fn recommend(
    collection: &RegionCollection,
    query: &RecommendationQuery,
    options: &RecommendOptions,
) -> Result<RegionCollection, PipelineError> {
    let weights = query.preferences.weights();
    let profile = ScoringProfile::recommendation(query.housing_type)
        .with_capitalisation_rate(options.capitalisation_rate);
    validate(&weights, &profile)?;
    if query.max_distance.is_nan() || query.max_distance < 0.0 {
        return Err(PipelineError::InvalidMaxDistance {
            max_distance: query.max_distance,
        });
    }
    if !query.area.is_finite() || query.area <= 0.0 {
        return Err(PipelineError::InvalidArea { area: query.area });
    }

    let name = query.reference_name();
    let reference = collection
        .find_by_name(&options.name_column, &name)
        .ok_or_else(|| PipelineError::ReferenceNotFound {
            name: name.clone(),
            column: options.name_column.clone(),
        })?;
    let origin = reference
        .centroid()
        .ok_or_else(|| PipelineError::ReferenceWithoutGeometry { name: name.clone() })?;
    debug!("reference region {name} centred at {origin:?}");

    let mut candidates = filter_candidates(&collection.records, origin, query);
    score(&mut candidates, &weights, &Statuses::default(), &profile);
    let mut ranked = RegionCollection {
        records: candidates,
        foreign_members: collection.foreign_members.clone(),
    };
    ranked.rank_by_score();
    info!("recommended {} regions around {name}", ranked.len());
    Ok(ranked)
}

fn validate(weights: &Weights, profile: &ScoringProfile) -> Result<(), PipelineError> {
    if !weights.is_valid() {
        return Err(PipelineError::InvalidWeights { weights: *weights });
    }
    if !profile.has_valid_rate() {
        return Err(PipelineError::InvalidCapitalisationRate {
            rate: profile.capitalisation_rate,
        });
    }
    Ok(())
}
