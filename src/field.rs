//! Per-triangle nodal field data and grid-shaped output buffers.
//!
//! A field component borrows its caller-owned nodal values in the same flat
//! column-major layout as the mesh vertices: one column of 3 (P1) or 6 (P2)
//! values per triangle. A component is complex exactly when it carries both
//! a real and an imaginary array; the choice is made once per component, not
//! per point.

use num_complex::Complex;
use num_traits::Float;

use crate::element::{ElementOrder, MAX_NODES};
use crate::error::{Error, Result};

/// Borrowed nodal values of one field component.
#[derive(Clone, Copy, Debug)]
pub enum FieldValues<'a, T> {
    Real(&'a [T]),
    Complex { re: &'a [T], im: &'a [T] },
}

/// One field component defined on the mesh: nodal values for every triangle,
/// with the element order inferred from the nodes-per-triangle count.
#[derive(Clone, Copy, Debug)]
pub struct FieldComponent<'a, T: Float> {
    order: ElementOrder,
    ntri: usize,
    values: FieldValues<'a, T>,
}

impl<'a, T: Float> FieldComponent<'a, T> {
    /// A real-valued component from a flat r'×N column-major array,
    /// where r' ∈ {3, 6} selects the element order.
    ///
    /// # Errors
    /// * If the data does not divide into `ntri` equal columns
    /// * If the column height is neither 3 nor 6
    pub fn real(values: &'a [T], ntri: usize) -> Result<Self> {
        let order = infer_order(values.len(), ntri)?;
        Ok(Self {
            order,
            ntri,
            values: FieldValues::Real(values),
        })
    }

    /// A complex-valued component from separate real and imaginary arrays of
    /// the same shape.
    ///
    /// # Errors
    /// * If the two arrays differ in length
    /// * If the data does not divide into `ntri` columns of height 3 or 6
    pub fn complex(re: &'a [T], im: &'a [T], ntri: usize) -> Result<Self> {
        if re.len() != im.len() {
            return Err(Error::ComplexShapeMismatch {
                re_len: re.len(),
                im_len: im.len(),
            });
        }
        let order = infer_order(re.len(), ntri)?;
        Ok(Self {
            order,
            ntri,
            values: FieldValues::Complex { re, im },
        })
    }

    pub fn order(&self) -> ElementOrder {
        self.order
    }

    pub fn triangle_count(&self) -> usize {
        self.ntri
    }

    pub fn is_complex(&self) -> bool {
        matches!(self.values, FieldValues::Complex { .. })
    }

    pub fn values(&self) -> FieldValues<'a, T> {
        self.values
    }

    /// A zeroed output buffer of the matching kind, sized to `npts` query
    /// points.
    pub fn output_buffer(&self, npts: usize) -> GridValues<T> {
        if self.is_complex() {
            GridValues::complex(npts)
        } else {
            GridValues::real(npts)
        }
    }

    /// Evaluate this component at the point whose shape weights are `weights`
    /// inside triangle `tri`, writing slot `slot` of `out`. Real and
    /// imaginary parts use the same weights; they never interact.
    pub(crate) fn eval_into(
        &self,
        tri: usize,
        weights: &[T; MAX_NODES],
        out: &mut GridValues<T>,
        slot: usize,
    ) {
        let n = self.order.nodes_per_triangle();
        let base = tri * n;
        match (&self.values, out) {
            (FieldValues::Real(v), GridValues::Real(o)) => {
                o[slot] = dot(&weights[..n], &v[base..base + n]);
            }
            (FieldValues::Complex { re, im }, GridValues::Complex(o)) => {
                o[slot] = Complex::new(
                    dot(&weights[..n], &re[base..base + n]),
                    dot(&weights[..n], &im[base..base + n]),
                );
            }
            // Buffer kinds are validated against the field set before any
            // evaluation starts
            _ => unreachable!("output buffer kind mismatch"),
        }
    }
}

fn infer_order(len: usize, ntri: usize) -> Result<ElementOrder> {
    if ntri == 0 || len % ntri != 0 {
        return Err(Error::FieldShapeMismatch { len, ntri });
    }
    ElementOrder::from_nodes(len / ntri)
}

#[inline]
fn dot<T: Float>(weights: &[T], nodal: &[T]) -> T {
    weights
        .iter()
        .zip(nodal)
        .fold(T::zero(), |acc, (&w, &u)| acc + w * u)
}

/// Interpolation results for one field component, shaped like the flattened
/// query grid. Slots for points outside every triangle hold NaN.
#[derive(Clone, Debug, PartialEq)]
pub enum GridValues<T> {
    Real(Vec<T>),
    Complex(Vec<Complex<T>>),
}

impl<T: Float> GridValues<T> {
    /// A zeroed real buffer for `npts` points.
    pub fn real(npts: usize) -> Self {
        Self::Real(vec![T::zero(); npts])
    }

    /// A zeroed complex buffer for `npts` points.
    pub fn complex(npts: usize) -> Self {
        Self::Complex(vec![Complex::new(T::zero(), T::zero()); npts])
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Real(o) => o.len(),
            Self::Complex(o) => o.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Self::Complex(_))
    }

    pub fn as_real(&self) -> Option<&[T]> {
        match self {
            Self::Real(o) => Some(o),
            Self::Complex(_) => None,
        }
    }

    pub fn as_complex(&self) -> Option<&[Complex<T>]> {
        match self {
            Self::Real(_) => None,
            Self::Complex(o) => Some(o),
        }
    }

    /// Mark slot `slot` as outside the mesh.
    pub(crate) fn set_sentinel(&mut self, slot: usize) {
        match self {
            Self::Real(o) => o[slot] = T::nan(),
            Self::Complex(o) => o[slot] = Complex::new(T::nan(), T::nan()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_order_inference_from_columns() {
        // 6 values over 2 triangles is 3 nodes per column: P1
        let u = [0.0; 6];
        assert_eq!(FieldComponent::real(&u, 2).unwrap().order(), ElementOrder::P1);
        // 6 values over 1 triangle is 6 nodes per column: P2
        assert_eq!(FieldComponent::real(&u, 1).unwrap().order(), ElementOrder::P2);

        let v = [0.0; 5];
        assert_eq!(
            FieldComponent::real(&v, 1).unwrap_err(),
            Error::UnknownElementOrder { nodes: 5 }
        );
        assert_eq!(
            FieldComponent::real(&v, 2).unwrap_err(),
            Error::FieldShapeMismatch { len: 5, ntri: 2 }
        );
        assert_eq!(
            FieldComponent::real(&u, 0).unwrap_err(),
            Error::FieldShapeMismatch { len: 6, ntri: 0 }
        );
    }

    #[test]
    fn test_complex_parts_must_match() {
        let re = [0.0; 6];
        let im = [0.0; 3];
        assert_eq!(
            FieldComponent::complex(&re, &im, 2).unwrap_err(),
            Error::ComplexShapeMismatch {
                re_len: 6,
                im_len: 3
            }
        );
        let c = FieldComponent::complex(&re, &re, 2).unwrap();
        assert!(c.is_complex());
        assert_eq!(c.order(), ElementOrder::P1);
    }

    #[test]
    fn test_output_buffer_kind_and_sentinel() {
        let u = [0.0; 3];
        let real = FieldComponent::real(&u, 1).unwrap();
        let cplx = FieldComponent::complex(&u, &u, 1).unwrap();

        let mut out = real.output_buffer(2);
        assert!(!out.is_complex());
        assert_eq!(out.len(), 2);
        out.set_sentinel(1);
        let o = out.as_real().unwrap();
        assert_eq!(o[0], 0.0);
        assert!(o[1].is_nan());

        let mut out = cplx.output_buffer(2);
        assert!(out.is_complex());
        out.set_sentinel(0);
        let o = out.as_complex().unwrap();
        assert!(o[0].re.is_nan() && o[0].im.is_nan());
    }

    /// Column-major indexing: triangle `i` owns values `[i * nodes, (i + 1) * nodes)`.
    #[test]
    fn test_eval_selects_triangle_column() {
        let u = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let field = FieldComponent::real(&u, 2).unwrap();
        let mut out = field.output_buffer(1);
        // Weights that pick out the first vertex of the column
        let w = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        field.eval_into(1, &w, &mut out, 0);
        assert_eq!(out.as_real().unwrap()[0], 4.0);
    }
}
