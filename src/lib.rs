//! Interpolation of finite-element fields from 2D triangular meshes onto
//! arbitrary query grids.
//!
//! The field is known at the nodes of linear (P1) or quadratic (P2)
//! Lagrangian triangle elements. For each query point, the enclosing
//! triangle is found by a linear scan with a bounding-box fast-rejection
//! test, the barycentric coordinates there are fed through the element's
//! shape functions, and one value per field component is produced. Points
//! outside every triangle yield NaN. Components may be real or complex;
//! real and imaginary parts interpolate independently.
//!
//! ```rust
//! use triterp::{tri2grid_alloc, FieldComponent};
//!
//! // One P1 triangle, vertices as 3×N column-major arrays
//! let tx = [0.0_f64, 1.0, 0.0];
//! let ty = [0.0_f64, 0.0, 1.0];
//!
//! // One nodal value per vertex
//! let u = [10.0_f64, 20.0, 30.0];
//! let fields = [FieldComponent::real(&u, 1).unwrap()];
//!
//! // Query points: the centroid, and a point outside the mesh
//! let x = [1.0_f64 / 3.0, 2.0];
//! let y = [1.0_f64 / 3.0, 2.0];
//!
//! let out = tri2grid_alloc(&x, &y, &tx, &ty, &fields).unwrap();
//! let w = out[0].as_real().unwrap();
//! assert!((w[0] - 20.0).abs() < 1e-12);
//! assert!(w[1].is_nan());
//! ```

pub mod element;
pub mod error;
pub mod field;
pub mod interp;
pub mod mesh;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

pub use element::ElementOrder;
pub use error::Error;
pub use field::{FieldComponent, FieldValues, GridValues};
pub use interp::{TriGridInterpolator, tri2grid, tri2grid_alloc};
pub use mesh::{Barycentric, TriMesh, Triangle};
