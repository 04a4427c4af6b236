//! Capability-based JSON file access.

use std::io::Read;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use serde::de::DeserializeOwned;

use crate::DatasetError;

/// Read and deserialise a JSON document from `path`.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, DatasetError> {
    let mut file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        DatasetError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&text).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
