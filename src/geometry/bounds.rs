use crate::domain::Vertex;

/// Axis-aligned bounding box of a vertex set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Create bounds from a set of `(x, y)` points
    pub fn from_points(points: &[(f64, f64)]) -> Option<Self> {
        let mut iter = points.iter().copied();
        let (x0, y0) = iter.next()?;
        let mut bounds = Self {
            min_x: x0,
            max_x: x0,
            min_y: y0,
            max_y: y0,
        };
        for (x, y) in iter {
            bounds.include(x, y);
        }
        Some(bounds)
    }

    pub fn from_vertices(vertices: &[Vertex]) -> Option<Self> {
        let (first, rest) = vertices.split_first()?;
        let mut bounds = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for v in rest {
            bounds.include(v.x, v.y);
        }
        Some(bounds)
    }

    fn include(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Closed-box test: points on the border count as contained
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}
