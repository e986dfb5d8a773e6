//! Conversions to and from `geo` types
//!
//! Only the exterior ring is carried across. Interior rings (holes) of a
//! `geo::Polygon` are dropped on import.

use geo::{Coord, LineString};

use crate::domain::{Polygon, Vertex};

impl From<Vertex> for Coord<f64> {
    fn from(v: Vertex) -> Self {
        geo::coord! { x: v.x, y: v.y }
    }
}

impl From<Coord<f64>> for Vertex {
    fn from(c: Coord<f64>) -> Self {
        Vertex::new(c.x, c.y)
    }
}

impl From<&Polygon> for geo::Polygon<f64> {
    fn from(polygon: &Polygon) -> Self {
        let ring: LineString<f64> = polygon.vertices().iter().map(|&v| Coord::from(v)).collect();
        geo::Polygon::new(ring, Vec::new())
    }
}

impl From<&LineString<f64>> for Polygon {
    /// Closed line strings repeat their first coordinate at the end; the
    /// repeat is dropped so the ring closes implicitly instead.
    fn from(line: &LineString<f64>) -> Self {
        let mut coords = line.0.as_slice();
        if coords.len() > 1 && coords.first() == coords.last() {
            coords = &coords[..coords.len() - 1];
        }
        coords.iter().map(|&c| Vertex::from(c)).collect()
    }
}

impl From<&geo::Polygon<f64>> for Polygon {
    fn from(polygon: &geo::Polygon<f64>) -> Self {
        Polygon::from(polygon.exterior())
    }
}
