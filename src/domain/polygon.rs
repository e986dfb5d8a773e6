use serde::{Deserialize, Serialize};

use super::Vertex;
use crate::geometry::Bounds;
use crate::geometry::containment::{MIN_POLYGON_VERTICES, even_odd_contains};

/// A closed 2D region boundary
///
/// Vertices trace the boundary in either winding direction, with an implicit
/// closing edge from the last vertex back to the first. The vertex list is
/// owned and never changes after construction.
///
/// No validation is done: fewer than three vertices, repeated vertices and
/// self-intersections are all accepted. Such polygons still answer queries,
/// the answers just carry no geometric meaning (see [`Polygon::is_valid`]).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    vertices: Vec<Vertex>,
}

impl Polygon {
    /// Create a polygon from `(x, y)` pairs, copying them in order
    pub fn new(points: &[(f64, f64)]) -> Self {
        Self {
            vertices: points.iter().copied().map(Vertex::from).collect(),
        }
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Owned copy of the vertices as `(x, y)` pairs
    pub fn to_pairs(&self) -> Vec<(f64, f64)> {
        self.vertices.iter().map(|&v| v.into()).collect()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether the polygon has enough vertices to enclose any area
    ///
    /// Advisory only; construction never rejects a short vertex list.
    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= MIN_POLYGON_VERTICES
    }

    /// Boundary edges as `(predecessor, vertex)` pairs, closing edge first
    pub fn edges(&self) -> Edges<'_> {
        Edges::over(&self.vertices)
    }

    /// Axis-aligned extent of the vertices, `None` when there are none
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_vertices(&self.vertices)
    }

    /// Even-odd containment test for the point `(px, py)`
    ///
    /// Casts a ray from the point toward +x and reports `true` iff it crosses
    /// the boundary an odd number of times, so winding direction and the
    /// starting vertex do not matter for points off the boundary. Polygons
    /// with fewer than three vertices contain nothing.
    ///
    /// A point exactly on an edge or vertex is classified by floating-point
    /// tie-breaking of the strict comparisons and should not be relied upon.
    pub fn is_point_inside(&self, px: f64, py: f64) -> bool {
        even_odd_contains(&self.vertices, px, py)
    }

    pub fn contains(&self, point: Vertex) -> bool {
        self.is_point_inside(point.x, point.y)
    }
}

impl From<Vec<Vertex>> for Polygon {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }
}

impl FromIterator<Vertex> for Polygon {
    fn from_iter<I: IntoIterator<Item = Vertex>>(iter: I) -> Self {
        Self {
            vertices: iter.into_iter().collect(),
        }
    }
}

/// Iterator over the edges of a closed vertex ring
///
/// Yields `(vertices[n-1], vertices[0]), (vertices[0], vertices[1]), ...`,
/// pairing each vertex with its predecessor.
#[derive(Debug, Clone)]
pub struct Edges<'a> {
    vertices: &'a [Vertex],
    next: usize,
}

impl<'a> Edges<'a> {
    pub fn over(vertices: &'a [Vertex]) -> Self {
        Self { vertices, next: 0 }
    }
}

impl Iterator for Edges<'_> {
    type Item = (Vertex, Vertex);

    fn next(&mut self) -> Option<Self::Item> {
        let cur = *self.vertices.get(self.next)?;
        let prev = match self.next {
            0 => self.vertices[self.vertices.len() - 1],
            i => self.vertices[i - 1],
        };
        self.next += 1;
        Some((prev, cur))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vertices.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Edges<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: [(f64, f64); 4] = [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
    const TRIANGLE: [(f64, f64); 3] = [(0.0, 0.0), (4.0, 0.0), (2.0, 4.0)];

    fn rotated(points: &[(f64, f64)], offset: usize) -> Vec<(f64, f64)> {
        let mut out = points.to_vec();
        out.rotate_left(offset);
        out
    }

    fn reversed(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
        points.iter().rev().copied().collect()
    }

    /// Points well away from any edge of the fixtures
    fn probes() -> Vec<(f64, f64)> {
        vec![
            (2.0, 2.0),
            (2.0, 1.0),
            (0.5, 3.5),
            (3.9, 0.1),
            (5.0, 5.0),
            (-1.0, 2.0),
            (2.0, 5.0),
            (2.0, -0.5),
            (0.3, 3.0),
            (100.0, -100.0),
        ]
    }

    #[test]
    fn test_square_containment() {
        let square = Polygon::new(&SQUARE);
        assert!(square.is_point_inside(2.0, 2.0));
        assert!(!square.is_point_inside(5.0, 5.0));
        assert!(!square.is_point_inside(-1.0, 2.0));
    }

    #[test]
    fn test_triangle_containment() {
        let triangle = Polygon::new(&TRIANGLE);
        assert!(triangle.is_point_inside(2.0, 1.0));
        assert!(!triangle.is_point_inside(2.0, 5.0));
        assert!(triangle.contains(Vertex::new(2.0, 1.0)));
    }

    #[test]
    fn test_rotation_invariance() {
        for fixture in [&SQUARE[..], &TRIANGLE[..]] {
            let base = Polygon::new(fixture);
            for offset in 1..fixture.len() {
                let shifted = Polygon::new(&rotated(fixture, offset));
                for (px, py) in probes() {
                    assert_eq!(
                        base.is_point_inside(px, py),
                        shifted.is_point_inside(px, py),
                        "offset {} point ({}, {})",
                        offset,
                        px,
                        py
                    );
                }
            }
        }
    }

    #[test]
    fn test_winding_invariance() {
        for fixture in [&SQUARE[..], &TRIANGLE[..]] {
            let ccw = Polygon::new(fixture);
            let cw = Polygon::new(&reversed(fixture));
            for (px, py) in probes() {
                assert_eq!(ccw.is_point_inside(px, py), cw.is_point_inside(px, py));
            }
        }
    }

    #[test]
    fn test_degenerate_polygons_contain_nothing() {
        let cases = [
            Polygon::new(&[]),
            Polygon::new(&[(1.0, 1.0)]),
            Polygon::new(&[(0.0, 0.0), (4.0, 4.0)]),
        ];
        for polygon in &cases {
            assert!(!polygon.is_valid());
            for (px, py) in probes() {
                assert!(!polygon.is_point_inside(px, py));
            }
            assert!(!polygon.is_point_inside(1.0, 1.0));
        }
    }

    #[test]
    fn test_vertices_preserve_order_and_are_copied() {
        let mut source = SQUARE.to_vec();
        let square = Polygon::new(&source);
        source[0] = (99.0, 99.0);

        assert_eq!(square.to_pairs(), SQUARE.to_vec());
        assert_eq!(square.vertices()[0], Vertex::new(0.0, 0.0));
        assert_eq!(square.len(), 4);
        assert!(square.is_valid());
    }

    #[test]
    fn test_edges_close_the_ring() {
        let triangle = Polygon::new(&TRIANGLE);
        let edges: Vec<_> = triangle.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0], (Vertex::new(2.0, 4.0), Vertex::new(0.0, 0.0)));
        assert_eq!(edges[1], (Vertex::new(0.0, 0.0), Vertex::new(4.0, 0.0)));
        assert_eq!(edges[2], (Vertex::new(4.0, 0.0), Vertex::new(2.0, 4.0)));
    }

    #[test]
    fn test_edges_empty_and_single() {
        assert_eq!(Polygon::default().edges().count(), 0);
        let point = Polygon::new(&[(1.0, 2.0)]);
        let edges: Vec<_> = point.edges().collect();
        assert_eq!(edges, vec![(Vertex::new(1.0, 2.0), Vertex::new(1.0, 2.0))]);
    }

    #[test]
    fn test_bounds() {
        let bounds = Polygon::new(&TRIANGLE).bounds().unwrap();
        assert_eq!(bounds.width(), 4.0);
        assert_eq!(bounds.height(), 4.0);
        assert!(Polygon::default().bounds().is_none());
    }

    #[test]
    fn test_serde_as_vertex_array() {
        let square: Polygon =
            serde_json::from_str("[[0.0,0.0],[4.0,0.0],[4.0,4.0],[0.0,4.0]]").unwrap();
        assert_eq!(square, Polygon::new(&SQUARE));
        let json = serde_json::to_string(&Polygon::new(&TRIANGLE)).unwrap();
        assert_eq!(json, "[[0.0,0.0],[4.0,0.0],[2.0,4.0]]");
    }

    #[test]
    fn test_shared_across_threads() {
        let square = std::sync::Arc::new(Polygon::new(&SQUARE));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let square = square.clone();
                std::thread::spawn(move || square.is_point_inside(0.5 + i as f64, 2.0))
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
