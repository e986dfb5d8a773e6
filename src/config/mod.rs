//! Scene files: named region polygons loaded from TOML or JSON
//!
//! ```toml
//! [[regions]]
//! name = "loading-dock"
//! vertices = [[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::Polygon;
use crate::error::{Result, SceneError};

/// A named region boundary within a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    #[serde(rename = "vertices")]
    pub polygon: Polygon,
}

impl Region {
    pub fn new(name: impl Into<String>, polygon: Polygon) -> Self {
        Self {
            name: name.into(),
            polygon,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub regions: Vec<Region>,
}

impl SceneFile {
    /// Load the first parsable scene file from the default search paths
    pub fn load() -> Option<Self> {
        for path in get_scene_paths() {
            if !path.exists() {
                continue;
            }
            match Self::from_path(&path) {
                Ok(scene) => return Some(scene),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping scene file");
                }
            }
        }
        None
    }

    /// Load a scene file, choosing the parser from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let scene: SceneFile = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&contents).map_err(|source| SceneError::Toml {
                path: path.to_path_buf(),
                source,
            })?,
            Some("json") => serde_json::from_str(&contents).map_err(|source| SceneError::Json {
                path: path.to_path_buf(),
                source,
            })?,
            _ => return Err(SceneError::UnsupportedFormat(path.to_path_buf())),
        };

        scene.check()?;
        tracing::debug!(
            path = %path.display(),
            regions = scene.regions.len(),
            "loaded scene file"
        );
        Ok(scene)
    }

    /// Reject duplicate region names and warn about degenerate regions
    fn check(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for region in &self.regions {
            if !seen.insert(region.name.as_str()) {
                return Err(SceneError::DuplicateRegion(region.name.clone()));
            }
            if !region.polygon.is_valid() {
                tracing::warn!(
                    region = %region.name,
                    vertices = region.polygon.len(),
                    "region has fewer than 3 vertices and will contain no points"
                );
            }
        }
        Ok(())
    }

    pub fn region(&self, name: &str) -> Result<&Region> {
        self.regions
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| SceneError::UnknownRegion(name.to_string()))
    }

    /// Names of every region containing `(px, py)`, in file order
    pub fn classify(&self, px: f64, py: f64) -> Vec<&str> {
        self.regions
            .iter()
            .filter(|r| r.polygon.is_point_inside(px, py))
            .map(|r| r.name.as_str())
            .collect()
    }
}

fn get_scene_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("scene-region.toml"),
        PathBuf::from(".scene-region.toml"),
    ];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("scene-region").join("scene.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".scene-region.toml"));
    }

    paths
}
