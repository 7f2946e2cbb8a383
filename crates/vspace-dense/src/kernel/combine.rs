//! Scaled sums: `scale`, `axpby` and `axpbypcz`.
//!
//! These kernels only see the non-trivial path. A zero coefficient means
//! the term should have been dropped by the caller (see
//! [`vspace_core::ops`]), and is rejected by a debug assertion.
//!
//! `axpby` picks one of nine loops from whether each coefficient is `1`,
//! `-1` or anything else, so a unit coefficient never costs a multiply or
//! the rounding that comes with it. `axpbypcz` applies its three
//! coefficients uniformly.

use std::cell::Cell;

use vspace_core::Real;

/// Classification of a two-term coefficient.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Coef {
    One,
    MinusOne,
    Other(f64),
}

impl Coef {
    fn classify(value: f64) -> Self {
        if value == 1.0 {
            Self::One
        } else if value == -1.0 {
            Self::MinusOne
        } else {
            Self::Other(value)
        }
    }
}

#[inline(always)]
fn map2<T: Real>(dst: &[Cell<T>], x: &[Cell<T>], y: &[Cell<T>], f: impl Fn(T, T) -> T) {
    debug_assert!(x.len() == dst.len() && y.len() == dst.len());
    for ((d, a), b) in dst.iter().zip(x).zip(y) {
        d.set(f(a.get(), b.get()));
    }
}

/// `dst ← alpha·src`, with `alpha` narrowed once.
pub fn scale<T: Real>(dst: &[Cell<T>], alpha: f64, src: &[Cell<T>]) {
    debug_assert!(alpha != 0.0, "scale requires a non-zero coefficient");
    debug_assert_eq!(dst.len(), src.len());
    let a = T::narrow(alpha);
    for (d, s) in dst.iter().zip(src) {
        d.set(a * s.get());
    }
}

/// `dst ← alpha·x + beta·y` with `alpha ≠ 0` and `beta ≠ 0`.
pub fn axpby<T: Real>(dst: &[Cell<T>], alpha: f64, x: &[Cell<T>], beta: f64, y: &[Cell<T>]) {
    debug_assert!(
        alpha != 0.0 && beta != 0.0,
        "axpby requires non-zero coefficients (alpha = {alpha}, beta = {beta})"
    );
    match (Coef::classify(alpha), Coef::classify(beta)) {
        (Coef::One, Coef::One) => map2(dst, x, y, |x, y| x + y),
        (Coef::One, Coef::MinusOne) => map2(dst, x, y, |x, y| x - y),
        (Coef::One, Coef::Other(beta)) => {
            let b = T::narrow(beta);
            map2(dst, x, y, |x, y| x + b * y)
        }
        (Coef::MinusOne, Coef::One) => map2(dst, x, y, |x, y| y - x),
        (Coef::MinusOne, Coef::MinusOne) => map2(dst, x, y, |x, y| -y - x),
        (Coef::MinusOne, Coef::Other(beta)) => {
            let b = T::narrow(beta);
            map2(dst, x, y, |x, y| b * y - x)
        }
        (Coef::Other(alpha), Coef::One) => {
            let a = T::narrow(alpha);
            map2(dst, x, y, |x, y| a * x + y)
        }
        (Coef::Other(alpha), Coef::MinusOne) => {
            let a = T::narrow(alpha);
            map2(dst, x, y, |x, y| a * x - y)
        }
        (Coef::Other(alpha), Coef::Other(beta)) => {
            let a = T::narrow(alpha);
            let b = T::narrow(beta);
            map2(dst, x, y, |x, y| a * x + b * y)
        }
    }
}

/// `dst ← alpha·x + beta·y + gamma·z` with all coefficients non-zero.
///
/// Unit coefficients are not special-cased here.
#[allow(clippy::too_many_arguments)]
pub fn axpbypcz<T: Real>(
    dst: &[Cell<T>],
    alpha: f64,
    x: &[Cell<T>],
    beta: f64,
    y: &[Cell<T>],
    gamma: f64,
    z: &[Cell<T>],
) {
    debug_assert!(
        alpha != 0.0 && beta != 0.0 && gamma != 0.0,
        "axpbypcz requires non-zero coefficients (alpha = {alpha}, beta = {beta}, gamma = {gamma})"
    );
    debug_assert!(x.len() == dst.len() && y.len() == dst.len() && z.len() == dst.len());
    let a = T::narrow(alpha);
    let b = T::narrow(beta);
    let c = T::narrow(gamma);
    for (((d, xi), yi), zi) in dst.iter().zip(x).zip(y).zip(z) {
        d.set(a * xi.get() + b * yi.get() + c * zi.get());
    }
}
