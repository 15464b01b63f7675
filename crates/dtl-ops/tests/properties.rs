use dtl_ops::{
    correlate2d, correlate2d_with, transpose2d, window1d, window1d_tensor, windows_iter,
    ExecutionStrategy, OpsError, WindowSpec,
};
use dtl_tensor::{Tensor1, Tensor2};
use rand::Rng;

/// Direct four-loop cross-correlation used as the reference.
fn naive_correlate(m: &[Vec<i64>], k: &[Vec<i64>], stride: usize) -> Vec<Vec<i64>> {
    let (h, w) = (m.len(), m[0].len());
    let (kh, kw) = (k.len(), k[0].len());
    if h < kh || w < kw {
        return vec![];
    }
    let out_h = (h - kh) / stride + 1;
    let out_w = (w - kw) / stride + 1;

    let mut out = vec![vec![0; out_w]; out_h];
    for (i, out_row) in out.iter_mut().enumerate() {
        for (j, cell) in out_row.iter_mut().enumerate() {
            for a in 0..kh {
                for b in 0..kw {
                    *cell += m[i * stride + a][j * stride + b] * k[a][b];
                }
            }
        }
    }
    out
}

fn random_rows(rng: &mut impl Rng, rows: usize, cols: usize) -> Vec<Vec<i64>> {
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.random_range(-50..50)).collect())
        .collect()
}

#[test]
fn window_count_and_length_hold_for_random_specs() -> Result<(), OpsError> {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let len = rng.random_range(0..40);
        let spec = WindowSpec::new(rng.random_range(1..12))
            .with_shift(rng.random_range(1..6))
            .with_stride(rng.random_range(1..6));
        let data: Vec<u32> = (0..len).collect();

        let windows = window1d(&data, spec)?;
        let expected_count = if len as usize >= spec.size {
            (len as usize - spec.size) / spec.shift + 1
        } else {
            0
        };
        assert_eq!(windows.len(), expected_count, "{spec:?} over {len}");

        let expected_len = spec.size.div_ceil(spec.stride);
        for (i, w) in windows.iter().enumerate() {
            assert_eq!(w.len(), expected_len);
            for (k, &v) in w.iter().enumerate() {
                assert_eq!(v as usize, i * spec.shift + k * spec.stride);
            }
        }
    }
    Ok(())
}

#[test]
fn window_forms_agree() -> Result<(), OpsError> {
    let mut rng = rand::rng();
    let data: Vec<f32> = (0..64).map(|_| rng.random::<f32>()).collect();
    let spec = WindowSpec::new(7).with_shift(3).with_stride(2);

    let nested = window1d(&data, spec)?;
    let lazy: Vec<Vec<f32>> = windows_iter(&data, spec)?
        .map(|w| w.copied().collect())
        .collect();
    let tensor = window1d_tensor(&Tensor1::from_shape_vec([data.len()], data.clone())?, spec)?;

    assert_eq!(nested, lazy);
    assert_eq!(tensor.shape, [nested.len(), 4]);
    assert_eq!(tensor.to_rows(), nested);
    Ok(())
}

#[test]
fn transpose_is_an_involution() {
    let mut rng = rand::rng();

    for _ in 0..20 {
        let rows = rng.random_range(1..16);
        let cols = rng.random_range(1..16);
        let m = Tensor2::<i32>::from_shape_fn([rows, cols], |_| rand::random());

        let t = transpose2d(&m);
        assert_eq!(t.shape, [cols, rows]);
        for i in 0..rows {
            for j in 0..cols {
                assert_eq!(t.get([j, i]), m.get([i, j]));
            }
        }
        assert_eq!(transpose2d(&t), m);
    }
}

#[test]
fn correlation_matches_reference() -> Result<(), OpsError> {
    let mut rng = rand::rng();

    for _ in 0..50 {
        let (h, w) = (rng.random_range(1..20), rng.random_range(1..20));
        let (kh, kw) = (rng.random_range(1..6), rng.random_range(1..6));
        let stride = rng.random_range(1..4);

        let m = random_rows(&mut rng, h, w);
        let k = random_rows(&mut rng, kh, kw);

        let out = correlate2d(&Tensor2::from_rows(&m)?, &Tensor2::from_rows(&k)?, stride)?;
        let reference = naive_correlate(&m, &k, stride);

        if reference.is_empty() {
            assert!(out.is_empty());
        } else {
            assert_eq!(out.to_rows(), reference);
        }
    }
    Ok(())
}

#[test]
fn correlation_strategies_are_bit_identical() -> Result<(), OpsError> {
    let mut rng = rand::rng();
    let data: Vec<f64> = (0..64 * 48).map(|_| rng.random_range(-1.0..1.0)).collect();
    let m = Tensor2::from_shape_vec([64, 48], data)?;
    let k = Tensor2::<f64>::from_shape_fn([5, 3], |[i, j]| (i as f64 - j as f64) * 0.1);

    let serial = correlate2d_with(&m, &k, 3, ExecutionStrategy::default())?;
    for strategy in [ExecutionStrategy::ParallelElements, ExecutionStrategy::Fixed(4)] {
        let out = correlate2d_with(&m, &k, 3, strategy)?;
        assert_eq!(
            out.as_slice()
                .iter()
                .map(|v| v.to_bits())
                .collect::<Vec<_>>(),
            serial
                .as_slice()
                .iter()
                .map(|v| v.to_bits())
                .collect::<Vec<_>>()
        );
    }
    Ok(())
}
