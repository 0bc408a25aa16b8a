//! Error types for mesh, field, and interpolation input validation.
//!
//! Every variant is detected before any interpolation work starts; a failed
//! precondition aborts the whole call with no partial results.

use thiserror::Error;

use crate::element::ElementOrder;

/// Result type used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Query coordinate arrays disagree on the number of points.
    #[error("query grid arrays must have the same length: x has {x_len}, y has {y_len}")]
    GridShapeMismatch { x_len: usize, y_len: usize },

    /// Triangle vertex coordinate arrays disagree in length.
    #[error("vertex arrays must have the same length: x has {x_len}, y has {y_len}")]
    VertexShapeMismatch { x_len: usize, y_len: usize },

    /// Vertex arrays do not hold exactly 3 values per triangle.
    #[error("vertex arrays must hold 3 values per triangle: {len} is not a multiple of 3")]
    VertexCountNotTriples { len: usize },

    /// Nodal-value data does not divide into per-triangle columns.
    #[error("field of {len} values does not divide into columns for {ntri} triangles")]
    FieldShapeMismatch { len: usize, ntri: usize },

    /// The nodes-per-triangle count matches no supported Lagrangian element.
    #[error("{nodes} nodes per triangle matches no supported element (3 for P1, 6 for P2)")]
    UnknownElementOrder { nodes: usize },

    /// Real and imaginary parts of a complex field disagree in length.
    #[error("real and imaginary parts must have the same length: {re_len} vs {im_len}")]
    ComplexShapeMismatch { re_len: usize, im_len: usize },

    /// Field components in one invocation must share a single element order.
    #[error("field {index} is {actual:?} but field 0 is {expected:?}; all fields must share one element order")]
    MixedElementOrder {
        index: usize,
        expected: ElementOrder,
        actual: ElementOrder,
    },

    /// A field's column count disagrees with the mesh's triangle count.
    #[error("field {index} holds data for {actual} triangles but the mesh has {expected}")]
    TriangleCountMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// An interpolation was requested with no field components.
    #[error("at least one field component is required")]
    NoFields,

    /// The number of output buffers disagrees with the number of fields.
    #[error("{expected} output buffers required for {expected} fields, got {actual}")]
    FieldCountMismatch { expected: usize, actual: usize },

    /// An output buffer is not sized to the query grid.
    #[error("output buffer {index} has {actual} slots but the query grid has {expected} points")]
    OutputShapeMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// An output buffer's real/complex kind disagrees with its field.
    #[error("output buffer {index} must be complex exactly when field {index} is complex")]
    OutputKindMismatch { index: usize },
}
