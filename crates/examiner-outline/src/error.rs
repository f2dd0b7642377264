//! Errors raised while loading an outline.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read outline file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported outline format for {}: expected a .yaml, .yml or .json file", path.display())]
    UnknownFormat { path: PathBuf },

    #[error("Invalid YAML outline: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON outline: {0}")]
    Json(#[from] serde_json::Error),
}
