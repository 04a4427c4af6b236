//! Errors raised while loading datasets.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use habitat_core::{Aspect, UnknownAspect};
use thiserror::Error;

/// A dataset file could not be made available to the scorer.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Opening the dataset file failed.
    #[error("failed to open dataset {path}")]
    Open {
        /// Path of the dataset file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Reading the dataset file failed.
    #[error("failed to read dataset {path}")]
    Read {
        /// Path of the dataset file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The dataset file was not valid JSON of the expected shape.
    #[error("failed to parse dataset {path}")]
    Parse {
        /// Path of the dataset file.
        path: Utf8PathBuf,
        /// Source error produced by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// Reasons a polygon record is skipped during loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolygonRecordError {
    /// The record names an aspect the scorer does not know.
    #[error(transparent)]
    UnknownAspect(#[from] UnknownAspect),
    /// Neither the aspect's attribute nor `transit_distance` held a number.
    #[error("zone {zone_type:?} has no numeric {aspect} attribute")]
    MissingAttribute {
        /// Aspect the record was tagged with.
        aspect: Aspect,
        /// Zone label from the record.
        zone_type: String,
    },
    /// The ring has fewer than three vertices.
    #[error("zone {zone_type:?} has {count} vertices; at least three are required")]
    TooFewVertices {
        /// Zone label from the record.
        zone_type: String,
        /// Number of vertices found.
        count: usize,
    },
}
