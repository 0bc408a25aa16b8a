//! Lagrangian shape functions for linear (P1) and quadratic (P2) triangle
//! elements.
//!
//! The element order is a single engine-wide choice per invocation, inferred
//! once from the nodes-per-triangle count of the field data; it is not
//! selectable per triangle or per component.

use num_traits::Float;

use crate::error::{Error, Result};
use crate::mesh::Barycentric;

/// Maximum number of nodes any supported element carries.
pub const MAX_NODES: usize = 6;

/// Order of the Lagrangian element the nodal data is defined on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementOrder {
    /// Linear element: one degree of freedom per vertex.
    P1,
    /// Quadratic element: vertex values plus mid-edge values, ordered
    /// vertex0, vertex1, vertex2, edge(1,2), edge(2,0), edge(0,1).
    P2,
}

impl ElementOrder {
    /// Number of nodal values per triangle column.
    pub const fn nodes_per_triangle(self) -> usize {
        match self {
            Self::P1 => 3,
            Self::P2 => 6,
        }
    }

    /// Infer the element order from a nodes-per-triangle count.
    ///
    /// # Errors
    /// * If the count is neither 3 (P1) nor 6 (P2)
    pub fn from_nodes(nodes: usize) -> Result<Self> {
        match nodes {
            3 => Ok(Self::P1),
            6 => Ok(Self::P2),
            _ => Err(Error::UnknownElementOrder { nodes }),
        }
    }

    /// Shape-function weights at a barycentric point.
    ///
    /// Only the first [`nodes_per_triangle`](Self::nodes_per_triangle)
    /// entries are meaningful; the rest are zero. The interpolated value is
    /// the dot product of these weights with the triangle's nodal column,
    /// which keeps evaluation linear in the field values and lets one weight
    /// vector serve every component (and both parts of a complex component).
    #[inline]
    pub fn shape_weights<T: Float>(self, bc: Barycentric<T>) -> [T; MAX_NODES] {
        let Barycentric { a, b, c } = bc;
        match self {
            Self::P1 => [a, b, c, T::zero(), T::zero(), T::zero()],
            Self::P2 => {
                let one = T::one();
                let two = one + one;
                let four = two + two;
                [
                    a * (two * a - one),
                    b * (two * b - one),
                    c * (two * c - one),
                    four * b * c,
                    four * a * c,
                    four * a * b,
                ]
            }
        }
    }
}
