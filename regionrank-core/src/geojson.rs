//! GeoJSON `FeatureCollection` codec for [`RegionCollection`].
//!
//! Only polygonal features are accepted. `Polygon` geometries are promoted
//! to single-member `MultiPolygon`s so the rest of the crate handles one
//! shape; output is always written as `MultiPolygon`. A feature with a
//! `null` geometry decodes to an empty geometry and therefore has no
//! centroid.

use geo::{Coord, LineString, MultiPolygon, Polygon};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{RegionCollection, RegionRecord};

const FEATURE_COLLECTION: &str = "FeatureCollection";
const FEATURE: &str = "Feature";

type Position = Vec<f64>;
type Ring = Vec<Position>;

/// Errors raised while decoding a feature collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The top-level `type` member was not `FeatureCollection`.
    #[error("expected a FeatureCollection, found {found:?}")]
    NotFeatureCollection {
        /// Value of the top-level `type` member.
        found: String,
    },
    /// A member of `features` was not a `Feature`.
    #[error("feature {index} has type {found:?}, expected Feature")]
    NotFeature {
        /// Zero-based position in `features`.
        index: usize,
        /// Value of the feature's `type` member.
        found: String,
    },
    /// A coordinate position had fewer than two finite ordinates.
    #[error("feature {index} contains a malformed position")]
    MalformedPosition {
        /// Zero-based position in `features`.
        index: usize,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FeatureCollectionDocument {
    #[serde(rename = "type")]
    kind: String,
    features: Vec<FeatureDocument>,
    #[serde(flatten)]
    foreign_members: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FeatureDocument {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<Value>,
    geometry: Option<GeometryDocument>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
enum GeometryDocument {
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
}

fn decode_collection(
    document: FeatureCollectionDocument,
) -> Result<RegionCollection, RecordError> {
    if document.kind != FEATURE_COLLECTION {
        return Err(RecordError::NotFeatureCollection {
            found: document.kind,
        });
    }
    let records = document
        .features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| decode_feature(index, feature))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RegionCollection {
        records,
        foreign_members: document.foreign_members,
    })
}

fn encode_collection(collection: &RegionCollection) -> FeatureCollectionDocument {
    FeatureCollectionDocument {
        kind: FEATURE_COLLECTION.to_owned(),
        features: collection.records.iter().map(encode_feature).collect(),
        foreign_members: collection.foreign_members.clone(),
    }
}

impl<'de> Deserialize<'de> for RegionCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let document = FeatureCollectionDocument::deserialize(deserializer)?;
        decode_collection(document).map_err(serde::de::Error::custom)
    }
}

impl Serialize for RegionCollection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        encode_collection(self).serialize(serializer)
    }
}

fn decode_feature(index: usize, feature: FeatureDocument) -> Result<RegionRecord, RecordError> {
    if feature.kind != FEATURE {
        return Err(RecordError::NotFeature {
            index,
            found: feature.kind,
        });
    }
    let geometry = match feature.geometry {
        None => {
            debug!("feature {index} has no geometry");
            MultiPolygon::new(Vec::new())
        }
        Some(GeometryDocument::Polygon { coordinates }) => {
            MultiPolygon::new(vec![decode_polygon(index, coordinates)?])
        }
        Some(GeometryDocument::MultiPolygon { coordinates }) => MultiPolygon::new(
            coordinates
                .into_iter()
                .map(|polygon| decode_polygon(index, polygon))
                .collect::<Result<Vec<_>, _>>()?,
        ),
    };
    Ok(RegionRecord {
        id: feature.id,
        geometry,
        properties: feature.properties.unwrap_or_default(),
    })
}

fn decode_polygon(index: usize, rings: Vec<Ring>) -> Result<Polygon<f64>, RecordError> {
    let mut decoded = rings
        .into_iter()
        .map(|ring| decode_ring(index, ring))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter();
    let exterior = decoded
        .next()
        .unwrap_or_else(|| LineString::new(Vec::new()));
    Ok(Polygon::new(exterior, decoded.collect()))
}

fn decode_ring(index: usize, ring: Ring) -> Result<LineString<f64>, RecordError> {
    ring.into_iter()
        .map(|position| match position.as_slice() {
            [x, y, ..] if x.is_finite() && y.is_finite() => Ok(Coord { x: *x, y: *y }),
            _ => Err(RecordError::MalformedPosition { index }),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(LineString::new)
}

fn encode_feature(record: &RegionRecord) -> FeatureDocument {
    let geometry = if record.geometry.0.is_empty() {
        None
    } else {
        Some(GeometryDocument::MultiPolygon {
            coordinates: record.geometry.0.iter().map(encode_polygon).collect(),
        })
    };
    FeatureDocument {
        kind: FEATURE.to_owned(),
        id: record.id.clone(),
        geometry,
        properties: Some(record.properties.clone()),
    }
}

fn encode_polygon(polygon: &Polygon<f64>) -> Vec<Ring> {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(|ring| ring.coords().map(|coord| vec![coord.x, coord.y]).collect())
        .collect()
}
