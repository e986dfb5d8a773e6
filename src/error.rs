use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or querying a scene file
///
/// Containment queries on a [`crate::domain::Polygon`] never fail; these
/// errors only come from reading scene descriptions.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse TOML scene file {path:?}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to parse JSON scene file {path:?}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported scene file format: {0:?} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),
    #[error("region {0:?} is defined more than once")]
    DuplicateRegion(String),
    #[error("no region named {0:?}")]
    UnknownRegion(String),
}

pub type Result<T> = std::result::Result<T, SceneError>;
