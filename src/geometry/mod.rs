pub mod bounds;
pub mod containment;
pub mod interop;

pub use bounds::Bounds;
pub use containment::{MIN_POLYGON_VERTICES, even_odd_contains};
