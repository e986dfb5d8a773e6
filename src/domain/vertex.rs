use serde::{Deserialize, Serialize};

/// A polygon corner in the plane
///
/// Serialized as a two-element `[x, y]` array so scene files stay compact.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Vertex {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Vertex> for (f64, f64) {
    fn from(v: Vertex) -> Self {
        (v.x, v.y)
    }
}
