//! Loading region datasets and requests, and writing ranked output.

use std::io::{BufReader, Write};

use camino::Utf8Path;
use log::debug;
use regionrank_core::RegionCollection;
use regionrank_scorer::RecommendationQuery;

use crate::fs::open_utf8_file;
use crate::{ARG_DATASET, ARG_REQUEST, CliError};

/// Load a GeoJSON `FeatureCollection` of regions from disk.
pub(crate) fn load_dataset(path: &Utf8Path) -> Result<RegionCollection, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field: ARG_DATASET,
        path: path.to_path_buf(),
        source,
    })?;
    let collection: RegionCollection =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            CliError::ParseDataset {
                path: path.to_path_buf(),
                source,
            }
        })?;
    debug!("loaded {} regions from {path}", collection.len());
    Ok(collection)
}

/// Load a JSON-encoded [`RecommendationQuery`] from disk.
pub(crate) fn load_request(path: &Utf8Path) -> Result<RecommendationQuery, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field: ARG_REQUEST,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

/// Write ranked regions as pretty-printed GeoJSON followed by a newline.
pub(crate) fn write_collection(
    writer: &mut dyn Write,
    collection: &RegionCollection,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(collection).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
