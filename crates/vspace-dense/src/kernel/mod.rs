//! Numeric kernels of the dense backend.
//!
//! [`Kernels`] is the operation table a [`DenseSpace`](crate::DenseSpace)
//! dispatches to. It works on raw element cells and knows nothing about
//! vector headers or ownership. [`Portable`] is the default implementation:
//! plain sequential loops that accumulate in the working precision.

pub mod combine;
pub mod elementwise;

use std::cell::Cell;

use vspace_core::Real;

/// Operation table of a dense space, injected at construction.
///
/// All slices passed in by a [`DenseSpace`](crate::DenseSpace) have the
/// space's length. A destination may be the same slice as any source.
///
/// Scalars arrive as `f64` and results leave as `f64`; implementations
/// narrow scalars to `T` once per call and accumulate in `T`.
pub trait Kernels<T: Real>: Send + Sync + 'static {
    /// Set every element to `alpha`.
    fn fill(&self, x: &[Cell<T>], alpha: f64);

    /// `Σ |x_i|`.
    fn norm1(&self, x: &[Cell<T>]) -> f64;

    /// `sqrt(Σ x_i²)`.
    fn norm2(&self, x: &[Cell<T>]) -> f64;

    /// `max |x_i|`, `0` when empty.
    fn norm_inf(&self, x: &[Cell<T>]) -> f64;

    /// `Σ x_i·y_i`.
    fn dot(&self, x: &[Cell<T>], y: &[Cell<T>]) -> f64;

    /// `dst ← src`.
    fn copy(&self, dst: &[Cell<T>], src: &[Cell<T>]);

    /// Exchange `x` and `y`.
    fn swap(&self, x: &[Cell<T>], y: &[Cell<T>]);

    /// `dst ← alpha·src`, `alpha ≠ 0`.
    fn scale(&self, dst: &[Cell<T>], alpha: f64, src: &[Cell<T>]);

    /// `dst ← alpha·x + beta·y`, both coefficients non-zero.
    fn axpby(&self, dst: &[Cell<T>], alpha: f64, x: &[Cell<T>], beta: f64, y: &[Cell<T>]);

    /// `dst ← alpha·x + beta·y + gamma·z`, all coefficients non-zero.
    #[allow(clippy::too_many_arguments)]
    fn axpbypcz(
        &self,
        dst: &[Cell<T>],
        alpha: f64,
        x: &[Cell<T>],
        beta: f64,
        y: &[Cell<T>],
        gamma: f64,
        z: &[Cell<T>],
    );
}

/// Sequential scalar loops, valid for any [`Real`] precision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Portable;

impl<T: Real> Kernels<T> for Portable {
    fn fill(&self, x: &[Cell<T>], alpha: f64) {
        elementwise::fill(x, alpha);
    }

    fn norm1(&self, x: &[Cell<T>]) -> f64 {
        elementwise::norm1(x)
    }

    fn norm2(&self, x: &[Cell<T>]) -> f64 {
        elementwise::norm2(x)
    }

    fn norm_inf(&self, x: &[Cell<T>]) -> f64 {
        elementwise::norm_inf(x)
    }

    fn dot(&self, x: &[Cell<T>], y: &[Cell<T>]) -> f64 {
        elementwise::dot(x, y)
    }

    fn copy(&self, dst: &[Cell<T>], src: &[Cell<T>]) {
        elementwise::copy(dst, src);
    }

    fn swap(&self, x: &[Cell<T>], y: &[Cell<T>]) {
        elementwise::swap(x, y);
    }

    fn scale(&self, dst: &[Cell<T>], alpha: f64, src: &[Cell<T>]) {
        combine::scale(dst, alpha, src);
    }

    fn axpby(&self, dst: &[Cell<T>], alpha: f64, x: &[Cell<T>], beta: f64, y: &[Cell<T>]) {
        combine::axpby(dst, alpha, x, beta, y);
    }

    fn axpbypcz(
        &self,
        dst: &[Cell<T>],
        alpha: f64,
        x: &[Cell<T>],
        beta: f64,
        y: &[Cell<T>],
        gamma: f64,
        z: &[Cell<T>],
    ) {
        combine::axpbypcz(dst, alpha, x, beta, y, gamma, z);
    }
}
