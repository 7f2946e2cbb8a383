//! Generic dispatch over any [`VectorSpace`].
//!
//! Algorithm code calls these functions rather than the backend methods.
//! Each one checks that every operand belongs to the space, then removes
//! the trivial coefficient cases so backend kernels only ever see the
//! non-trivial numeric path:
//!
//! | call | reduces to |
//! |------|------------|
//! | `scale(dst, 0, src)` | `fill(dst, 0)` |
//! | `scale(dst, 1, src)` | `copy(dst, src)` |
//! | `axpby(dst, 0, x, β, y)` | `scale(dst, β, y)` |
//! | `axpby(dst, α, x, 0, y)` | `scale(dst, α, x)` |
//! | `axpbypcz` with one zero term | `axpby` of the other two |
//!
//! A failed ownership check returns [`VSpaceError::ForeignVector`] before
//! any element is read or written.

use tracing::warn;

use crate::error::VSpaceError;
use crate::space::{SpaceVector, VectorSpace};

fn check<S: VectorSpace>(space: &S, v: &S::Vector<'_>) -> Result<(), VSpaceError> {
    let owner = v.owner();
    if owner != space.instance_id() {
        warn!(space = %space.instance_id(), %owner, "rejected vector from another space");
        return Err(VSpaceError::ForeignVector {
            space: space.instance_id(),
            owner,
        });
    }
    Ok(())
}

/// Allocate a new vector of `space`.
pub fn create<S: VectorSpace>(space: &S) -> Result<S::Vector<'static>, VSpaceError> {
    space.create()
}

/// Release a vector of `space`.
///
/// `v` is consumed either way. On `Err(VSpaceError::ForeignVector)` the
/// backend's `destruct` is not called and `v` is simply dropped, which
/// leaves any caller memory it borrowed untouched.
pub fn destruct<S: VectorSpace>(space: &S, v: S::Vector<'_>) -> Result<(), VSpaceError> {
    check(space, &v)?;
    space.destruct(v);
    Ok(())
}

/// Set every element of `v` to zero.
pub fn zero<S: VectorSpace>(space: &S, v: &S::Vector<'_>) -> Result<(), VSpaceError> {
    fill(space, v, 0.0)
}

/// Set every element of `v` to `alpha`.
pub fn fill<S: VectorSpace>(space: &S, v: &S::Vector<'_>, alpha: f64) -> Result<(), VSpaceError> {
    check(space, v)?;
    space.fill(v, alpha);
    Ok(())
}

/// Sum of absolute values of `v`.
pub fn norm1<S: VectorSpace>(space: &S, v: &S::Vector<'_>) -> Result<f64, VSpaceError> {
    check(space, v)?;
    Ok(space.norm1(v))
}

/// Euclidean norm of `v`.
pub fn norm2<S: VectorSpace>(space: &S, v: &S::Vector<'_>) -> Result<f64, VSpaceError> {
    check(space, v)?;
    Ok(space.norm2(v))
}

/// Largest absolute value in `v`.
pub fn norm_inf<S: VectorSpace>(space: &S, v: &S::Vector<'_>) -> Result<f64, VSpaceError> {
    check(space, v)?;
    Ok(space.norm_inf(v))
}

/// Inner product of `x` and `y`.
pub fn dot<S: VectorSpace>(
    space: &S,
    x: &S::Vector<'_>,
    y: &S::Vector<'_>,
) -> Result<f64, VSpaceError> {
    check(space, x)?;
    check(space, y)?;
    Ok(space.dot(x, y))
}

/// `dst ← src`.
pub fn copy<S: VectorSpace>(
    space: &S,
    dst: &S::Vector<'_>,
    src: &S::Vector<'_>,
) -> Result<(), VSpaceError> {
    check(space, dst)?;
    check(space, src)?;
    space.copy(dst, src);
    Ok(())
}

/// Exchange the contents of `x` and `y`.
pub fn swap<S: VectorSpace>(
    space: &S,
    x: &S::Vector<'_>,
    y: &S::Vector<'_>,
) -> Result<(), VSpaceError> {
    check(space, x)?;
    check(space, y)?;
    space.swap(x, y);
    Ok(())
}

/// `dst ← alpha·src` for any `alpha`.
pub fn scale<S: VectorSpace>(
    space: &S,
    dst: &S::Vector<'_>,
    alpha: f64,
    src: &S::Vector<'_>,
) -> Result<(), VSpaceError> {
    check(space, dst)?;
    check(space, src)?;
    scale_checked(space, dst, alpha, src);
    Ok(())
}

/// `dst ← alpha·x + beta·y` for any coefficients.
pub fn axpby<S: VectorSpace>(
    space: &S,
    dst: &S::Vector<'_>,
    alpha: f64,
    x: &S::Vector<'_>,
    beta: f64,
    y: &S::Vector<'_>,
) -> Result<(), VSpaceError> {
    check(space, dst)?;
    check(space, x)?;
    check(space, y)?;
    axpby_checked(space, dst, alpha, x, beta, y);
    Ok(())
}

/// `dst ← alpha·x + beta·y + gamma·z` for any coefficients.
#[allow(clippy::too_many_arguments)]
pub fn axpbypcz<S: VectorSpace>(
    space: &S,
    dst: &S::Vector<'_>,
    alpha: f64,
    x: &S::Vector<'_>,
    beta: f64,
    y: &S::Vector<'_>,
    gamma: f64,
    z: &S::Vector<'_>,
) -> Result<(), VSpaceError> {
    check(space, dst)?;
    check(space, x)?;
    check(space, y)?;
    check(space, z)?;
    if alpha == 0.0 {
        axpby_checked(space, dst, beta, y, gamma, z);
    } else if beta == 0.0 {
        axpby_checked(space, dst, alpha, x, gamma, z);
    } else if gamma == 0.0 {
        axpby_checked(space, dst, alpha, x, beta, y);
    } else {
        space.axpbypcz(dst, alpha, x, beta, y, gamma, z);
    }
    Ok(())
}

fn scale_checked<S: VectorSpace>(
    space: &S,
    dst: &S::Vector<'_>,
    alpha: f64,
    src: &S::Vector<'_>,
) {
    if alpha == 0.0 {
        space.fill(dst, 0.0);
    } else if alpha == 1.0 {
        space.copy(dst, src);
    } else {
        space.scale(dst, alpha, src);
    }
}

fn axpby_checked<S: VectorSpace>(
    space: &S,
    dst: &S::Vector<'_>,
    alpha: f64,
    x: &S::Vector<'_>,
    beta: f64,
    y: &S::Vector<'_>,
) {
    if alpha == 0.0 {
        scale_checked(space, dst, beta, y);
    } else if beta == 0.0 {
        scale_checked(space, dst, alpha, x);
    } else {
        space.axpby(dst, alpha, x, beta, y);
    }
}
