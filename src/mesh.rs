//! Triangle mesh geometry: signed areas, bounding-box rejection, and
//! barycentric point location.
//!
//! Triangles are independent records; no shared-vertex topology is modeled.
//! Point location is a linear scan in input order with a bounding-box
//! fast-rejection test, and the first containing triangle wins. For a point
//! exactly on an edge shared by two triangles the match is deterministic but
//! arbitrary (the lower triangle index).

use num_traits::Float;

use crate::error::{Error, Result};

/// Tolerance for the inside test. A point exactly on an edge accumulates
/// small negative error in its barycentric coordinates; without slack it
/// could be rejected by every adjacent triangle.
pub const INSIDE_TOLERANCE: f64 = 1e-13;

/// Barycentric coordinates of a point with respect to a triangle.
///
/// All three lie in `[0, 1]` and sum to 1 exactly when the point is inside
/// the triangle; `c` is derived as `1 - a - b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Barycentric<T> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T: Float> Barycentric<T> {
    /// Whether the point is inside the triangle or on its boundary.
    #[inline]
    pub fn is_inside(self) -> bool {
        let tol = -T::from(INSIDE_TOLERANCE).unwrap();
        self.a >= tol && self.b >= tol && self.c >= tol
    }
}

/// A single mesh triangle owning its three vertex coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle<T> {
    pub x: [T; 3],
    pub y: [T; 3],
}

impl<T: Float> Triangle<T> {
    pub fn new(x: [T; 3], y: [T; 3]) -> Self {
        Self { x, y }
    }

    /// Twice the signed area; zero exactly when the vertices are collinear.
    #[inline]
    pub fn double_signed_area(&self) -> T {
        let [x0, x1, x2] = self.x;
        let [y0, y1, y2] = self.y;
        (y1 - y2) * (x0 - x2) + (x2 - x1) * (y0 - y2)
    }

    /// Reciprocal of twice the signed area; non-finite for a degenerate
    /// triangle.
    #[inline]
    pub fn inv_double_area(&self) -> T {
        self.double_signed_area().recip()
    }

    /// Axis-aligned bounding-box test: necessary but not sufficient for
    /// containment, and much cheaper than the barycentric computation.
    #[inline]
    pub fn bbox_contains(&self, px: T, py: T) -> bool {
        let [x0, x1, x2] = self.x;
        let [y0, y1, y2] = self.y;
        px >= x0.min(x1).min(x2)
            && px <= x0.max(x1).max(x2)
            && py >= y0.min(y1).min(y2)
            && py <= y0.max(y1).max(y2)
    }

    /// Barycentric coordinates of `(px, py)`, given the precomputed
    /// reciprocal double area of this triangle.
    #[inline]
    pub fn barycentric(&self, px: T, py: T, inv_double_area: T) -> Barycentric<T> {
        let [x0, x1, x2] = self.x;
        let [y0, y1, y2] = self.y;
        let a = ((y1 - y2) * (px - x2) + (x2 - x1) * (py - y2)) * inv_double_area;
        let b = ((y2 - y0) * (px - x2) + (x0 - x2) * (py - y2)) * inv_double_area;
        let c = T::one() - a - b;
        Barycentric { a, b, c }
    }
}

/// An ordered set of independent triangles.
#[derive(Clone, Debug, PartialEq)]
pub struct TriMesh<T> {
    tris: Vec<Triangle<T>>,
}

impl<T: Float> TriMesh<T> {
    pub fn new(tris: Vec<Triangle<T>>) -> Self {
        Self { tris }
    }

    /// Build from flat 3×N column-major vertex coordinate arrays
    /// (vertex-within-triangle varies fastest), the layout used by mesh
    /// tooling that stores vertices as parallel arrays.
    ///
    /// # Errors
    /// * If the two arrays differ in length
    /// * If the length is not a multiple of 3
    pub fn from_columns(xs: &[T], ys: &[T]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(Error::VertexShapeMismatch {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        if xs.len() % 3 != 0 {
            return Err(Error::VertexCountNotTriples { len: xs.len() });
        }
        let tris = xs
            .chunks_exact(3)
            .zip(ys.chunks_exact(3))
            .map(|(cx, cy)| Triangle::new([cx[0], cx[1], cx[2]], [cy[0], cy[1], cy[2]]))
            .collect();
        Ok(Self { tris })
    }

    /// Number of triangles.
    pub fn len(&self) -> usize {
        self.tris.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tris.is_empty()
    }

    pub fn triangles(&self) -> &[Triangle<T>] {
        &self.tris
    }

    /// Per-triangle reciprocal double areas, the per-invocation cache used
    /// by point location. Degenerate triangles produce non-finite entries.
    pub fn inv_double_areas(&self) -> Vec<T> {
        self.tris.iter().map(|t| t.inv_double_area()).collect()
    }

    /// Indices of degenerate (zero-area) triangles, for callers that want to
    /// escalate bad mesh data instead of letting those triangles silently
    /// never match.
    pub fn degenerate_triangles(&self) -> Vec<usize> {
        self.tris
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.inv_double_area().is_finite())
            .map(|(i, _)| i)
            .collect()
    }

    /// Find the first triangle containing `(px, py)`, returning its index
    /// and the barycentric coordinates there. `None` means the point lies
    /// outside every triangle. Degenerate triangles never match.
    #[inline]
    pub fn locate(&self, inv_areas: &[T], px: T, py: T) -> Option<(usize, Barycentric<T>)> {
        self.tris
            .iter()
            .zip(inv_areas)
            .enumerate()
            .find_map(|(i, (tri, &inv))| {
                if !inv.is_finite() || !tri.bbox_contains(px, py) {
                    return None;
                }
                let bc = tri.barycentric(px, py, inv);
                bc.is_inside().then_some((i, bc))
            })
    }
}
