//! Fill, norms, dot product, copy and swap.

use std::cell::Cell;

use vspace_core::Real;

/// Set every element to `alpha`, narrowed once.
pub fn fill<T: Real>(x: &[Cell<T>], alpha: f64) {
    let value = if alpha == 0.0 {
        T::zero()
    } else {
        T::narrow(alpha)
    };
    for cell in x {
        cell.set(value);
    }
}

/// `Σ |x_i|`, accumulated in `T`.
pub fn norm1<T: Real>(x: &[Cell<T>]) -> f64 {
    let mut sum = T::zero();
    for cell in x {
        sum = sum + cell.get().abs();
    }
    sum.widen()
}

/// `sqrt(Σ x_i²)`, accumulated in `T`.
pub fn norm2<T: Real>(x: &[Cell<T>]) -> f64 {
    let mut sum = T::zero();
    for cell in x {
        let xi = cell.get();
        sum = sum + xi * xi;
    }
    sum.sqrt().widen()
}

/// `max |x_i|`, starting from zero. Only a strictly larger magnitude
/// replaces the running maximum.
pub fn norm_inf<T: Real>(x: &[Cell<T>]) -> f64 {
    let mut max = T::zero();
    for cell in x {
        let a = cell.get().abs();
        if a > max {
            max = a;
        }
    }
    max.widen()
}

/// `Σ x_i·y_i`, accumulated in `T`.
pub fn dot<T: Real>(x: &[Cell<T>], y: &[Cell<T>]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    let mut sum = T::zero();
    for (a, b) in x.iter().zip(y) {
        sum = sum + a.get() * b.get();
    }
    sum.widen()
}

/// `dst ← src`. No-op when both designate the same memory.
pub fn copy<T: Real>(dst: &[Cell<T>], src: &[Cell<T>]) {
    debug_assert_eq!(dst.len(), src.len());
    if std::ptr::eq(dst.as_ptr(), src.as_ptr()) {
        return;
    }
    for (d, s) in dst.iter().zip(src) {
        d.set(s.get());
    }
}

/// Exchange `x` and `y`. No-op when both designate the same memory.
pub fn swap<T: Real>(x: &[Cell<T>], y: &[Cell<T>]) {
    debug_assert_eq!(x.len(), y.len());
    if std::ptr::eq(x.as_ptr(), y.as_ptr()) {
        return;
    }
    for (a, b) in x.iter().zip(y) {
        a.swap(b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells<T: Copy>(values: &mut [T]) -> &[Cell<T>] {
        Cell::from_mut(values).as_slice_of_cells()
    }

    // ── Fill ────────────────────────────────────────────────────

    #[test]
    fn fill_zero_and_nonzero() {
        let mut buf = [1.0f64, -2.0, 3.0];
        fill(cells(&mut buf), 0.0);
        assert_eq!(buf, [0.0; 3]);
        fill(cells(&mut buf), -1.0);
        assert_eq!(buf, [-1.0; 3]);
    }

    #[test]
    fn fill_narrows_once_for_single() {
        let mut buf = [0.0f32; 4];
        fill(cells(&mut buf), 0.1);
        assert!(buf.iter().all(|&v| v == 0.1f32));
    }

    #[test]
    fn fill_zero_clears_negative_zero() {
        let mut buf = [-0.0f64; 2];
        fill(cells(&mut buf), 0.0);
        assert!(buf.iter().all(|v| v.is_sign_positive()));
    }

    // ── Norms ───────────────────────────────────────────────────

    #[test]
    fn norms_of_three_four() {
        let mut buf = [3.0f64, -4.0];
        let x = cells(&mut buf);
        assert_eq!(norm1(x), 7.0);
        assert_eq!(norm2(x), 5.0);
        assert_eq!(norm_inf(x), 4.0);
    }

    #[test]
    fn norms_of_three_four_single() {
        let mut buf = [3.0f32, -4.0];
        let x = cells(&mut buf);
        assert_eq!(norm1(x), 7.0);
        assert_eq!(norm2(x), 5.0);
        assert_eq!(norm_inf(x), 4.0);
    }

    #[test]
    fn norms_of_empty_are_zero() {
        let x: &[Cell<f64>] = &[];
        assert_eq!(norm1(x), 0.0);
        assert_eq!(norm2(x), 0.0);
        assert_eq!(norm_inf(x), 0.0);
    }

    #[test]
    fn norm_inf_ties_and_negatives() {
        let mut buf = [-5.0f64, 5.0, 1.0, -5.0];
        assert_eq!(norm_inf(cells(&mut buf)), 5.0);
    }

    #[test]
    fn single_precision_accumulates_in_single() {
        // 1 + 2^-24 rounds back to 1 in f32 on every step.
        let mut buf = [1.0f32, 5.960_464_5e-8, 5.960_464_5e-8];
        assert_eq!(norm1(cells(&mut buf)), 1.0);
    }

    // ── Dot ─────────────────────────────────────────────────────

    #[test]
    fn dot_small() {
        let mut a = [1.0f64, 2.0, 3.0];
        let mut b = [4.0f64, -5.0, 6.0];
        assert_eq!(dot(cells(&mut a), cells(&mut b)), 12.0);
    }

    #[test]
    fn dot_with_self_is_squared_norm() {
        let mut a = [1.0f64, 2.0, 2.0];
        let x = cells(&mut a);
        assert_eq!(dot(x, x), 9.0);
        assert_eq!(norm2(x) * norm2(x), 9.0);
    }

    // ── Copy & swap ─────────────────────────────────────────────

    #[test]
    fn copy_then_mutate_source() {
        let mut a = [1.0f64, 2.0];
        let mut b = [0.0f64; 2];
        {
            let src = cells(&mut a);
            let dst = cells(&mut b);
            copy(dst, src);
            src[0].set(10.0);
            assert_eq!(dst[0].get(), 1.0);
        }
        assert_eq!(b, [1.0, 2.0]);
    }

    #[test]
    fn copy_and_swap_same_memory_are_noops() {
        let mut a = [1.0f64, 2.0];
        let x = cells(&mut a);
        copy(x, x);
        swap(x, x);
        assert_eq!(x[0].get(), 1.0);
        assert_eq!(x[1].get(), 2.0);
    }

    #[test]
    fn swap_twice_restores() {
        let mut a = [1.0f32, 2.0, 3.0];
        let mut b = [-1.0f32, -2.0, -3.0];
        {
            let x = cells(&mut a);
            let y = cells(&mut b);
            swap(x, y);
            assert_eq!(x[2].get(), -3.0);
            assert_eq!(y[0].get(), 1.0);
            swap(x, y);
        }
        assert_eq!(a, [1.0, 2.0, 3.0]);
        assert_eq!(b, [-1.0, -2.0, -3.0]);
    }
}
