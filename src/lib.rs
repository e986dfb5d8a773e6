//! scene-region - 2D region polygons with even-odd point containment

pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;

pub use config::{Region, SceneFile};
pub use domain::{Polygon, Vertex};
pub use error::SceneError;
