//! Wrapping caller-managed memory as dense vectors.

use tracing::{trace, warn};
use vspace_core::{Real, SpaceDescriptor, SpaceIdent, VSpaceError};

use crate::vector::DenseVector;

/// Wrap `data` as a vector of `space` without copying it.
///
/// `space` may be any descriptor; it must be a dense space of precision
/// `T`. Checks run in this order, and none of them allocates:
///
/// 1. `space.ident()` must equal the dense identity for `T`
///    (`Err(VSpaceError::IncompatibleSpace)`),
/// 2. `data` must be present (`Err(VSpaceError::NullData)`),
/// 3. `data.len()` must equal `space.len()`
///    (`Err(VSpaceError::LengthMismatch)`).
///
/// The returned vector borrows `data` mutably for its whole life. Every
/// write through the vector lands directly in `data`, and dropping the
/// vector leaves `data` allocated and readable by the caller.
pub fn wrap_dense_vector<'a, T: Real>(
    space: &dyn SpaceDescriptor,
    data: Option<&'a mut [T]>,
) -> Result<DenseVector<'a, T>, VSpaceError> {
    let expected = SpaceIdent::dense(T::PRECISION);
    let found = space.ident();
    if found != expected {
        warn!(space = %space.instance_id(), %expected, %found, "wrap rejected: incompatible space");
        return Err(VSpaceError::IncompatibleSpace { expected, found });
    }
    let Some(data) = data else {
        warn!(space = %space.instance_id(), "wrap rejected: no data buffer");
        return Err(VSpaceError::NullData);
    };
    if data.len() != space.len() {
        warn!(
            space = %space.instance_id(),
            expected = space.len(),
            found = data.len(),
            "wrap rejected: length mismatch"
        );
        return Err(VSpaceError::LengthMismatch {
            expected: space.len(),
            found: data.len(),
        });
    }
    trace!(space = %space.instance_id(), length = data.len(), "wrapped caller buffer");
    Ok(DenseVector::wrapped(space.instance_id(), data))
}

/// Wrap single-precision caller memory. See [`wrap_dense_vector`].
pub fn wrap_single_vector<'a>(
    space: &dyn SpaceDescriptor,
    data: Option<&'a mut [f32]>,
) -> Result<DenseVector<'a, f32>, VSpaceError> {
    wrap_dense_vector(space, data)
}

/// Wrap double-precision caller memory. See [`wrap_dense_vector`].
pub fn wrap_double_vector<'a>(
    space: &dyn SpaceDescriptor,
    data: Option<&'a mut [f64]>,
) -> Result<DenseVector<'a, f64>, VSpaceError> {
    wrap_dense_vector(space, data)
}
