//! Region records and the collections that carry them through a request.
//!
//! A [`RegionRecord`] is one administrative area: a polygonal geometry plus
//! the flat attribute map read from the source feature. The pipeline only
//! ever adds the derived fields named in [`fields`]; source attributes are
//! left untouched.

use geo::{MultiPolygon, Point};
use serde_json::{Map, Number, Value};

use crate::geometry;
use crate::value::{parse_number, parse_present};

/// Names of the derived attributes attached by the pipeline.
pub mod fields {
    /// Final composite score in `0.0..=100.0`.
    pub const COMPUTED_VALUE: &str = "computedValue";
    /// Monetised rent aggregate before normalisation.
    pub const PRICE_SUM: &str = "priceSum";
    /// Normalised rent aggregate in `0.0..=1.0`.
    pub const PRICE_SUM_NORMALIZED: &str = "priceSumNormalized";
    /// `1 - priceSumNormalized`; cheaper regions score higher.
    pub const REVERSE_PRICE_SUM_NORMALIZED: &str = "reversePriceSumNormalized";
    /// Normalised population indicator.
    pub const POPULATION_NORMALIZED: &str = "populationNormalized";
    /// Normalised transit indicator.
    pub const TRANSIT_NORMALIZED: &str = "transitNormalized";
    /// Normalised commercial indicator.
    pub const COMMERCIAL_NORMALIZED: &str = "commercialNormalized";
    /// Great-circle distance to the reference region, in kilometres.
    pub const DISTANCE: &str = "distance";
}

/// A single administrative region.
///
/// # Examples
/// ```
/// use geo::{MultiPolygon, polygon};
/// use serde_json::{Map, json};
/// use regionrank_core::RegionRecord;
///
/// let square = polygon![
///     (x: 129.0, y: 35.0),
///     (x: 129.01, y: 35.0),
///     (x: 129.01, y: 35.01),
///     (x: 129.0, y: 35.01),
/// ];
/// let mut properties = Map::new();
/// properties.insert("ADM_NM".into(), json!("부산광역시 부산진구 가야1동"));
/// properties.insert("count_transport".into(), json!("1,204"));
/// let record = RegionRecord::new(MultiPolygon::new(vec![square]), properties);
///
/// assert_eq!(record.text("ADM_NM"), Some("부산광역시 부산진구 가야1동"));
/// assert_eq!(record.number("count_transport"), 1_204.0);
/// assert!(record.centroid().is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRecord {
    /// Optional feature identifier carried over from the source document.
    pub id: Option<Value>,
    /// Region outline in WGS84 (`x = longitude`, `y = latitude`).
    pub geometry: MultiPolygon<f64>,
    /// Flat attribute map, including any derived fields.
    pub properties: Map<String, Value>,
}

impl RegionRecord {
    /// Construct a record without a feature identifier.
    #[must_use]
    pub const fn new(geometry: MultiPolygon<f64>, properties: Map<String, Value>) -> Self {
        Self {
            id: None,
            geometry,
            properties,
        }
    }

    /// Return the raw attribute stored under `column`.
    #[must_use]
    pub fn value(&self, column: &str) -> Option<&Value> {
        self.properties.get(column)
    }

    /// Return a text attribute, if `column` holds a string.
    #[must_use]
    pub fn text(&self, column: &str) -> Option<&str> {
        self.value(column).and_then(Value::as_str)
    }

    /// Parse `column` as a number, treating missing values as `0.0`.
    #[must_use]
    pub fn number(&self, column: &str) -> f64 {
        parse_number(self.value(column))
    }

    /// Parse `column` as a number, returning `None` when it is missing.
    #[must_use]
    pub fn present(&self, column: &str) -> Option<f64> {
        parse_present(self.value(column))
    }

    /// Store a derived numeric attribute.
    ///
    /// Non-finite values cannot be represented in JSON and are stored as
    /// `null`.
    pub fn set_number(&mut self, field: &str, value: f64) {
        let encoded = Number::from_f64(value).map_or(Value::Null, Value::Number);
        self.properties.insert(field.to_owned(), encoded);
    }

    /// Representative point of the region's geometry.
    ///
    /// Returns `None` for an empty geometry.
    #[must_use]
    pub fn centroid(&self) -> Option<Point<f64>> {
        geometry::centroid(&self.geometry)
    }

    /// Geodesic area of the region in square kilometres.
    #[must_use]
    pub fn area_km2(&self) -> f64 {
        geometry::area_km2(&self.geometry)
    }
}

/// An ordered collection of regions loaded for a single request.
///
/// Serialises to and from a GeoJSON `FeatureCollection`. Foreign members of
/// the source document (for example `name` or `crs`) are preserved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegionCollection {
    /// Regions in source order, or ranked order after scoring.
    pub records: Vec<RegionRecord>,
    /// Top-level members other than `type` and `features`.
    pub foreign_members: Map<String, Value>,
}

impl RegionCollection {
    /// Wrap records in a collection with no foreign members.
    #[must_use]
    pub fn from_records(records: Vec<RegionRecord>) -> Self {
        Self {
            records,
            foreign_members: Map::new(),
        }
    }

    /// Return the number of regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Report whether the collection holds no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find the first region whose `name_column` equals `name`.
    #[must_use]
    pub fn find_by_name(&self, name_column: &str, name: &str) -> Option<&RegionRecord> {
        self.records
            .iter()
            .find(|record| record.text(name_column) == Some(name))
    }

    /// Sort regions by `computedValue`, highest first.
    ///
    /// The sort is stable: ties keep their current relative order. Missing
    /// scores sort last.
    pub fn rank_by_score(&mut self) {
        rank_by_score(&mut self.records);
    }
}

/// Sort records by `computedValue`, highest first, keeping ties stable.
pub fn rank_by_score(records: &mut [RegionRecord]) {
    records.sort_by(|left, right| {
        let left_score = left.present(fields::COMPUTED_VALUE).unwrap_or(f64::NEG_INFINITY);
        let right_score = right
            .present(fields::COMPUTED_VALUE)
            .unwrap_or(f64::NEG_INFINITY);
        right_score.total_cmp(&left_score)
    });
}
