//! Dense space compliance test helpers.
//!
//! Each helper checks one property every dense space must satisfy, for any
//! precision, length or kernel strategy. The element patterns are small
//! multiples of 0.5, so sums, squares and products are exact in both
//! precisions and the checks can use `==`.

use vspace_core::{ops, Real, SpaceDescriptor, VectorSpace};

use crate::kernel::Kernels;
use crate::space::DenseSpace;
use crate::vector::DenseVector;

/// Deterministic values in `[-2.5, 2.5]`, steps of 0.5.
pub fn pattern<T: Real>(len: usize, seed: usize) -> Vec<T> {
    (0..len)
        .map(|i| {
            let k = ((i * 7 + seed) % 11) as f64 - 5.0;
            T::narrow(k * 0.5)
        })
        .collect()
}

fn vector<T: Real, K: Kernels<T>>(space: &DenseSpace<T, K>, seed: usize) -> DenseVector<'static, T> {
    space
        .from_slice(&pattern(space.len(), seed))
        .expect("pattern has the space's length")
}

/// Assert that `fill(c)` stores exactly `c` (narrowed) at every index.
pub fn assert_fill_exact<T: Real, K: Kernels<T>>(space: &DenseSpace<T, K>) {
    let v = vector(space, 1);
    for c in [0.0, 1.0, -1.0, 0.1, -3.75e5] {
        ops::fill(space, &v, c).unwrap();
        let expected = T::narrow(c);
        for (i, got) in v.iter().enumerate() {
            assert_eq!(got, expected, "fill({c}) wrote {got:?} at index {i}");
        }
    }
}

/// Assert the three norms against sums computed outside the kernels.
pub fn assert_norms<T: Real, K: Kernels<T>>(space: &DenseSpace<T, K>) {
    let values = pattern::<T>(space.len(), 3);
    let v = space.from_slice(&values).unwrap();
    let sum_abs: f64 = values.iter().map(|x| x.widen().abs()).sum();
    let sum_sq: f64 = values.iter().map(|x| x.widen() * x.widen()).sum();
    let max_abs = values.iter().fold(0.0f64, |m, x| m.max(x.widen().abs()));

    assert_eq!(ops::norm1(space, &v).unwrap(), sum_abs);
    assert_eq!(
        ops::norm2(space, &v).unwrap(),
        T::narrow(sum_sq).sqrt().widen()
    );
    assert_eq!(ops::norm_inf(space, &v).unwrap(), max_abs);
}

/// Assert `dot(x, y) = Σ x_i·y_i` and `dot(x, x) ≈ norm2(x)²`.
pub fn assert_dot_consistent<T: Real, K: Kernels<T>>(space: &DenseSpace<T, K>) {
    let xs = pattern::<T>(space.len(), 2);
    let ys = pattern::<T>(space.len(), 5);
    let x = space.from_slice(&xs).unwrap();
    let y = space.from_slice(&ys).unwrap();
    let expected: f64 = xs.iter().zip(&ys).map(|(a, b)| a.widen() * b.widen()).sum();
    assert_eq!(ops::dot(space, &x, &y).unwrap(), expected);

    let xx = ops::dot(space, &x, &x).unwrap();
    let n2 = ops::norm2(space, &x).unwrap();
    let tol = 1e-5 * (1.0 + xx);
    assert!(
        (xx - n2 * n2).abs() <= tol,
        "dot(x, x) = {xx}, norm2(x)^2 = {}",
        n2 * n2
    );
}

/// Assert that `copy` duplicates and does not alias.
pub fn assert_copy_independent<T: Real, K: Kernels<T>>(space: &DenseSpace<T, K>) {
    let src = vector(space, 4);
    let dst = space.create().unwrap();
    ops::copy(space, &dst, &src).unwrap();
    assert_eq!(dst.to_vec(), src.to_vec());

    let snapshot = dst.to_vec();
    ops::fill(space, &src, 9.0).unwrap();
    assert_eq!(dst.to_vec(), snapshot, "copy left dst aliased to src");

    ops::copy(space, &dst, &dst).unwrap();
    assert_eq!(dst.to_vec(), snapshot);
}

/// Assert that swapping twice restores both vectors.
pub fn assert_swap_involution<T: Real, K: Kernels<T>>(space: &DenseSpace<T, K>) {
    let x = vector(space, 6);
    let y = vector(space, 8);
    let (x0, y0) = (x.to_vec(), y.to_vec());
    ops::swap(space, &x, &y).unwrap();
    assert_eq!(x.to_vec(), y0);
    assert_eq!(y.to_vec(), x0);
    ops::swap(space, &x, &y).unwrap();
    assert_eq!(x.to_vec(), x0);
    assert_eq!(y.to_vec(), y0);
}

/// Assert every two-term coefficient path against direct computation.
pub fn assert_axpby_paths<T: Real, K: Kernels<T>>(space: &DenseSpace<T, K>) {
    let xs = pattern::<T>(space.len(), 1);
    let ys = pattern::<T>(space.len(), 9);
    let x = space.from_slice(&xs).unwrap();
    let y = space.from_slice(&ys).unwrap();
    let dst = space.create().unwrap();
    let coefs = [1.0, -1.0, 2.0, -0.5];
    for &alpha in &coefs {
        for &beta in &coefs {
            space.axpby(&dst, alpha, &x, beta, &y);
            let (a, b) = (T::narrow(alpha), T::narrow(beta));
            for i in 0..xs.len() {
                assert_eq!(
                    dst.get(i),
                    Some(a * xs[i] + b * ys[i]),
                    "axpby({alpha}, x, {beta}, y) at index {i}"
                );
            }
        }
    }
}

/// Assert the three-term combination against direct computation.
pub fn assert_axpbypcz_formula<T: Real, K: Kernels<T>>(space: &DenseSpace<T, K>) {
    let xs = pattern::<T>(space.len(), 1);
    let ys = pattern::<T>(space.len(), 4);
    let zs = pattern::<T>(space.len(), 10);
    let x = space.from_slice(&xs).unwrap();
    let y = space.from_slice(&ys).unwrap();
    let z = space.from_slice(&zs).unwrap();
    let dst = space.create().unwrap();
    for (alpha, beta, gamma) in [(1.0, 1.0, 1.0), (2.0, -1.0, 0.5), (-1.5, 3.0, -1.0)] {
        space.axpbypcz(&dst, alpha, &x, beta, &y, gamma, &z);
        let (a, b, c) = (T::narrow(alpha), T::narrow(beta), T::narrow(gamma));
        for i in 0..xs.len() {
            assert_eq!(
                dst.get(i),
                Some(a * xs[i] + b * ys[i] + c * zs[i]),
                "axpbypcz({alpha}, {beta}, {gamma}) at index {i}"
            );
        }
    }
}

/// Assert that a destination may alias any source operand.
pub fn assert_in_place_aliasing<T: Real, K: Kernels<T>>(space: &DenseSpace<T, K>) {
    let xs = pattern::<T>(space.len(), 2);
    let ys = pattern::<T>(space.len(), 7);
    let x = space.from_slice(&xs).unwrap();
    let y = space.from_slice(&ys).unwrap();
    let two = T::narrow(2.0);

    // x ← 2x − y
    ops::axpby(space, &x, 2.0, &x, -1.0, &y).unwrap();
    let x1: Vec<T> = xs.iter().zip(&ys).map(|(&a, &b)| two * a - b).collect();
    assert_eq!(x.to_vec(), x1);

    // y ← x + y + y
    ops::axpbypcz(space, &y, 1.0, &x, 1.0, &y, 1.0, &y).unwrap();
    let y1: Vec<T> = x1.iter().zip(&ys).map(|(&a, &b)| a + b + b).collect();
    assert_eq!(y.to_vec(), y1);

    // x ← −x
    ops::scale(space, &x, -1.0, &x).unwrap();
    let x2: Vec<T> = x1.iter().map(|&a| -a).collect();
    assert_eq!(x.to_vec(), x2);
}

/// Run every compliance check on a space.
pub fn run_full_compliance<T: Real, K: Kernels<T>>(space: &DenseSpace<T, K>) {
    assert_fill_exact(space);
    assert_norms(space);
    assert_dot_consistent(space);
    assert_copy_independent(space);
    assert_swap_involution(space);
    assert_axpby_paths(space);
    assert_axpbypcz_formula(space);
    assert_in_place_aliasing(space);
}
