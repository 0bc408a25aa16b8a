use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use triterp::utils::{linspace, meshgrid2};
use triterp::{FieldComponent, TriGridInterpolator, TriMesh};

/// Structured mesh over the unit square: n x n cells, two triangles each,
/// as flat 3xN column-major vertex arrays.
fn unit_square_mesh(n: usize) -> (Vec<f64>, Vec<f64>) {
    let h = 1.0 / n as f64;
    let mut tx = Vec::with_capacity(6 * n * n);
    let mut ty = Vec::with_capacity(6 * n * n);
    for i in 0..n {
        for j in 0..n {
            let (x0, y0) = (i as f64 * h, j as f64 * h);
            let (x1, y1) = (x0 + h, y0 + h);
            tx.extend([x0, x1, x0, x1, x1, x0]);
            ty.extend([y0, y0, y1, y0, y1, y1]);
        }
    }
    (tx, ty)
}

fn bench_p1(c: &mut Criterion) {
    let (tx, ty) = unit_square_mesh(32);
    let mesh = TriMesh::from_columns(&tx, &ty).unwrap();
    let u: Vec<f64> = tx.iter().zip(&ty).map(|(&x, &y)| x + y).collect();
    let fields = [FieldComponent::real(&u, mesh.len()).unwrap()];
    let interpolator = TriGridInterpolator::new(&mesh, &fields).unwrap();

    let axis = linspace(-0.1, 1.1, 64);
    let (x, y) = meshgrid2(&axis, &axis);
    let mut out = vec![fields[0].output_buffer(x.len())];

    c.bench_function("p1 64x64 grid over 2048 triangles", |b| {
        b.iter(|| black_box(interpolator.interp(&x, &y, &mut out).unwrap()))
    });
}

fn bench_p2(c: &mut Criterion) {
    let (tx, ty) = unit_square_mesh(32);
    let mesh = TriMesh::from_columns(&tx, &ty).unwrap();
    // Six nodal values per triangle; the values themselves don't affect timing
    let u = vec![1.0; 6 * mesh.len()];
    let fields = [FieldComponent::real(&u, mesh.len()).unwrap()];
    let interpolator = TriGridInterpolator::new(&mesh, &fields).unwrap();

    let axis = linspace(-0.1, 1.1, 64);
    let (x, y) = meshgrid2(&axis, &axis);
    let mut out = vec![fields[0].output_buffer(x.len())];

    c.bench_function("p2 64x64 grid over 2048 triangles", |b| {
        b.iter(|| black_box(interpolator.interp(&x, &y, &mut out).unwrap()))
    });
}

criterion_group!(benches, bench_p1, bench_p2);
criterion_main!(benches);
