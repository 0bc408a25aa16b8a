//! Convenience methods for constructing query grids in a way that echoes,
//! but does not exactly match, methods common in scripting languages.
use itertools::Itertools;
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    let dx: T = (stop - start) / T::from(n - 1).unwrap();
    (0..n).map(|i| start + T::from(i).unwrap() * dx).collect()
}

/// Generates a flattened 2D meshgrid over the given axis samples, with x
/// varying slowest, returning the paired coordinate arrays. Any consistent
/// flattening works for interpolation; this one matches column-major storage
/// of an x-by-y grid.
pub fn meshgrid2<T>(xs: &[T], ys: &[T]) -> (Vec<T>, Vec<T>)
where
    T: Float,
{
    xs.iter()
        .cartesian_product(ys.iter())
        .map(|(&x, &y)| (x, y))
        .unzip()
}
