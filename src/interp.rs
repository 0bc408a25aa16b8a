//! Interpolation of finite-element fields from a triangular mesh onto a
//! query grid.
//!
//! ```rust
//! use triterp::{FieldComponent, TriGridInterpolator, TriMesh};
//!
//! // Two P1 triangles covering the unit square, as 3×N column-major arrays
//! let tx = [0.0_f64, 1.0, 0.0, 1.0, 1.0, 0.0];
//! let ty = [0.0_f64, 0.0, 1.0, 0.0, 1.0, 1.0];
//! let mesh = TriMesh::from_columns(&tx, &ty).unwrap();
//!
//! // Nodal values of f(x, y) = x + y at each triangle's vertices
//! let u: Vec<f64> = tx.iter().zip(&ty).map(|(&x, &y)| x + y).collect();
//! let fields = [FieldComponent::real(&u, mesh.len()).unwrap()];
//!
//! // Query points: one inside the mesh, one outside
//! let x = [0.25_f64, 2.0];
//! let y = [0.5_f64, 2.0];
//!
//! let interpolator = TriGridInterpolator::new(&mesh, &fields).unwrap();
//! let out = interpolator.interp_alloc(&x, &y).unwrap();
//!
//! let w = out[0].as_real().unwrap();
//! assert!((w[0] - 0.75).abs() < 1e-12);
//! assert!(w[1].is_nan());
//! ```

use num_traits::Float;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::element::{ElementOrder, MAX_NODES};
use crate::error::{Error, Result};
use crate::field::{FieldComponent, GridValues};
use crate::mesh::TriMesh;

/// Matched triangle index and shape weights for one query point, or `None`
/// for a point outside every triangle.
type Located<T> = Option<(usize, [T; MAX_NODES])>;

/// Evaluates a set of field components at query points by barycentric
/// point location and P1/P2 shape-function interpolation.
///
/// Construction validates the whole field set and precomputes the
/// per-triangle reciprocal-area cache; the cache lives exactly as long as
/// the interpolator and is read-only during evaluation.
///
/// Each query point is processed independently of every other point, so
/// point location runs as a parallel map over the grid when the `rayon`
/// feature is enabled.
#[derive(Debug)]
pub struct TriGridInterpolator<'a, T: Float> {
    mesh: &'a TriMesh<T>,
    fields: &'a [FieldComponent<'a, T>],
    order: ElementOrder,
    inv_areas: Vec<T>,
}

impl<'a, T: Float + Send + Sync> TriGridInterpolator<'a, T> {
    /// Build an interpolator over a mesh and one or more field components.
    ///
    /// # Errors
    /// * If no fields are provided
    /// * If the fields do not all share one element order
    /// * If any field's triangle count does not match the mesh
    pub fn new(mesh: &'a TriMesh<T>, fields: &'a [FieldComponent<'a, T>]) -> Result<Self> {
        let first = fields.first().ok_or(Error::NoFields)?;
        let order = first.order();
        for (index, field) in fields.iter().enumerate() {
            if field.order() != order {
                return Err(Error::MixedElementOrder {
                    index,
                    expected: order,
                    actual: field.order(),
                });
            }
            if field.triangle_count() != mesh.len() {
                return Err(Error::TriangleCountMismatch {
                    index,
                    expected: mesh.len(),
                    actual: field.triangle_count(),
                });
            }
        }
        let inv_areas = mesh.inv_double_areas();
        Ok(Self {
            mesh,
            fields,
            order,
            inv_areas,
        })
    }

    /// Element order shared by all field components.
    pub fn order(&self) -> ElementOrder {
        self.order
    }

    /// Interpolate every component at the query points `(x[i], y[i])`,
    /// writing into caller-allocated output buffers. Points outside the mesh
    /// get NaN in every component. `x` and `y` are the caller's flattened
    /// grid; any flattening works as long as `x`, `y`, and the outputs share
    /// it.
    ///
    /// # Errors
    /// * If `x` and `y` differ in length
    /// * If the buffer count does not match the field count
    /// * If any buffer's length or real/complex kind does not match
    ///
    /// Any error is returned before computation starts; no buffer is
    /// partially written.
    pub fn interp(&self, x: &[T], y: &[T], out: &mut [GridValues<T>]) -> Result<()> {
        if x.len() != y.len() {
            return Err(Error::GridShapeMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if out.len() != self.fields.len() {
            return Err(Error::FieldCountMismatch {
                expected: self.fields.len(),
                actual: out.len(),
            });
        }
        for (index, (field, buf)) in self.fields.iter().zip(out.iter()).enumerate() {
            if buf.len() != x.len() {
                return Err(Error::OutputShapeMismatch {
                    index,
                    expected: x.len(),
                    actual: buf.len(),
                });
            }
            if buf.is_complex() != field.is_complex() {
                return Err(Error::OutputKindMismatch { index });
            }
        }

        // Location and shape weights depend only on the geometry, so one
        // pass over the points serves every component
        let located = self.locate_all(x, y);

        for (field, buf) in self.fields.iter().zip(out.iter_mut()) {
            for (slot, loc) in located.iter().enumerate() {
                match loc {
                    Some((tri, weights)) => field.eval_into(*tri, weights, buf, slot),
                    None => buf.set_sentinel(slot),
                }
            }
        }
        Ok(())
    }

    /// Interpolate, allocating the output buffers for convenience.
    ///
    /// For repeated evaluation over grids of the same size, use [`interp`]
    /// with preallocated buffers instead.
    ///
    /// [`interp`]: Self::interp
    pub fn interp_alloc(&self, x: &[T], y: &[T]) -> Result<Vec<GridValues<T>>> {
        let mut out: Vec<GridValues<T>> = self
            .fields
            .iter()
            .map(|f| f.output_buffer(x.len()))
            .collect();
        self.interp(x, y, &mut out)?;
        Ok(out)
    }

    #[inline]
    fn locate_one(&self, px: T, py: T) -> Located<T> {
        self.mesh
            .locate(&self.inv_areas, px, py)
            .map(|(tri, bc)| (tri, self.order.shape_weights(bc)))
    }

    #[cfg(feature = "rayon")]
    fn locate_all(&self, x: &[T], y: &[T]) -> Vec<Located<T>> {
        x.par_iter()
            .zip(y.par_iter())
            .map(|(&px, &py)| self.locate_one(px, py))
            .collect()
    }

    #[cfg(not(feature = "rayon"))]
    fn locate_all(&self, x: &[T], y: &[T]) -> Vec<Located<T>> {
        x.iter()
            .zip(y.iter())
            .map(|(&px, &py)| self.locate_one(px, py))
            .collect()
    }
}

/// Interpolate field components given the flat boundary layout: 3×N
/// column-major vertex arrays and caller-allocated output buffers.
///
/// While this builds the mesh and interpolator on every call, the overhead
/// of doing so is minimal compared to the per-point triangle scan.
pub fn tri2grid<T: Float + Send + Sync>(
    x: &[T],
    y: &[T],
    tri_x: &[T],
    tri_y: &[T],
    fields: &[FieldComponent<T>],
    out: &mut [GridValues<T>],
) -> Result<()> {
    let mesh = TriMesh::from_columns(tri_x, tri_y)?;
    TriGridInterpolator::new(&mesh, fields)?.interp(x, y, out)
}

/// Evaluate like [`tri2grid`], allocating a new output buffer per field for
/// convenience.
pub fn tri2grid_alloc<T: Float + Send + Sync>(
    x: &[T],
    y: &[T],
    tri_x: &[T],
    tri_y: &[T],
    fields: &[FieldComponent<T>],
) -> Result<Vec<GridValues<T>>> {
    let mesh = TriMesh::from_columns(tri_x, tri_y)?;
    TriGridInterpolator::new(&mesh, fields)?.interp_alloc(x, y)
}
