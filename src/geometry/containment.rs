//! Even-odd point containment
//!
//! A horizontal ray is cast from the query point toward +x and every polygon
//! edge it crosses flips the inside flag. Edges are taken in vertex order,
//! each vertex paired with its predecessor, so the closing edge
//! `vertices[n-1] -> vertices[0]` is visited first.
//!
//! An edge is a crossing candidate only when exactly one endpoint lies strictly
//! above the ray (`y > py`). A vertex sitting exactly on the ray therefore
//! counts as "below", which keeps a shared vertex from being counted twice and
//! guarantees `yi != yj` before the interpolation divides.
//!
//! Points lying exactly on an edge or vertex get whatever the strict
//! comparisons produce; that classification depends on exact float equality
//! and is not stable under vertex rotation or reversal.

use crate::domain::{Edges, Vertex};

/// Number of vertices below which a vertex list encloses no area
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Test whether `(px, py)` lies inside the closed ring `vertices`
///
/// Rings with fewer than [`MIN_POLYGON_VERTICES`] vertices enclose nothing and
/// always report `false`. Runs in O(n) without allocating.
pub fn even_odd_contains(vertices: &[Vertex], px: f64, py: f64) -> bool {
    if vertices.len() < MIN_POLYGON_VERTICES {
        return false;
    }

    let mut inside = false;
    for (prev, cur) in Edges::over(vertices) {
        if crosses_ray(cur, prev, px, py) {
            inside = !inside;
        }
    }
    inside
}

/// Whether edge `(vi, vj)` crosses the ray cast from `(px, py)` toward +x
#[inline]
fn crosses_ray(vi: Vertex, vj: Vertex, px: f64, py: f64) -> bool {
    if (vi.y > py) == (vj.y > py) {
        return false;
    }
    let x_cross = (vj.x - vi.x) * (py - vi.y) / (vj.y - vi.y) + vi.x;
    px < x_cross
}
