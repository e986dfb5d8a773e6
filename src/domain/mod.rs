pub mod polygon;
pub mod vertex;

pub use polygon::{Edges, Polygon};
pub use vertex::Vertex;
