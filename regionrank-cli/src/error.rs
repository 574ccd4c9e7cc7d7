//! Error types emitted by the regionrank CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use regionrank_scorer::PipelineError;
use thiserror::Error;

/// Errors emitted by the regionrank CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The `--weights` option was not four comma-separated numbers.
    #[error("weights {raw:?} must be four comma-separated numbers")]
    InvalidWeights { raw: String },
    /// The `--disable` option named an unknown indicator.
    #[error("cannot disable {raw:?}: {reason}")]
    InvalidIndicator { raw: String, reason: String },
    /// Opening an input file failed.
    #[error("failed to open {field} at {path:?}: {source}")]
    OpenInput {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The region dataset was not a valid GeoJSON feature collection.
    #[error("failed to parse dataset at {path:?}: {source}")]
    ParseDataset {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The recommendation request could not be decoded.
    #[error("failed to parse recommendation request at {path:?}: {source}")]
    ParseRequest {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Ranking or recommendation failed.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    /// Serialising the ranked regions failed.
    #[error("failed to serialise ranked regions: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the ranked regions failed.
    #[error("failed to write ranked regions: {0}")]
    WriteOutput(#[source] std::io::Error),
}
