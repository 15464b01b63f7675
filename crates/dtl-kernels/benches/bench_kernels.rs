use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dtl_kernels::ops::{mul_accumulate_kernel, patch_correlation_kernel, strided_gather_kernel};
use rand::Rng;

fn bench_mul_accumulate_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul_accumulate_kernel");
    let mut rng = rand::rng();

    let test_sizes = vec![8, 128, 1024, 16384];

    for size in test_sizes.clone() {
        let a: Vec<f32> = (0..size).map(|_| rng.random::<f32>()).collect();
        let b: Vec<f32> = (0..size).map(|_| rng.random::<f32>()).collect();

        group.bench_function(format!("f32_size_{}", size), |bencher| {
            bencher.iter(|| black_box(mul_accumulate_kernel(0.0, &a, &b).unwrap()))
        });
    }

    for size in test_sizes {
        let a: Vec<i32> = (0..size).map(|_| rng.random_range(-100..100)).collect();
        let b: Vec<i32> = (0..size).map(|_| rng.random_range(-100..100)).collect();

        group.bench_function(format!("i32_size_{}", size), |bencher| {
            bencher.iter(|| black_box(mul_accumulate_kernel(0, &a, &b).unwrap()))
        });
    }

    group.finish();
}

fn bench_strided_gather_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("strided_gather_kernel");
    let mut rng = rand::rng();

    let src: Vec<f64> = (0..16384).map(|_| rng.random::<f64>()).collect();

    for step in [1, 2, 8] {
        group.bench_function(format!("len_4096_step_{}", step), |bencher| {
            bencher.iter(|| black_box(strided_gather_kernel(&src, 1024, 4096, step).unwrap()))
        });
    }

    group.finish();
}

fn bench_patch_correlation_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("patch_correlation_kernel");
    let mut rng = rand::rng();

    let (rows, cols) = (256, 256);
    let src: Vec<f32> = (0..rows * cols).map(|_| rng.random::<f32>()).collect();

    for k in [3, 7, 15] {
        let kernel: Vec<f32> = (0..k * k).map(|_| rng.random::<f32>()).collect();
        group.bench_function(format!("kernel_{}x{}", k, k), |bencher| {
            bencher.iter(|| {
                black_box(
                    patch_correlation_kernel(&src, [rows, cols], [100, 100], &kernel, [k, k])
                        .unwrap(),
                )
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_mul_accumulate_kernel,
    bench_strided_gather_kernel,
    bench_patch_correlation_kernel
);
criterion_main!(benches);
