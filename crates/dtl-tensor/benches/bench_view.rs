use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use dtl_tensor::Tensor2;

fn sample_matrix(rows: usize, cols: usize) -> Tensor2<f32> {
    Tensor2::from_shape_fn([rows, cols], |[i, j]| (i * cols + j) as f32)
}

fn bench_transpose_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("View");

    for (rows, cols) in [(64, 64), (512, 256), (1080, 1920)] {
        group.bench_function(format!("transpose_{rows}x{cols}"), |b| {
            b.iter_batched(
                || sample_matrix(rows, cols),
                |t| black_box(t.permute_axes([1, 0]).as_contiguous()),
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transpose_view);
criterion_main!(benches);
