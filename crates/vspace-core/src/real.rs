//! Working precision of a vector space.

use num_traits::Float;
use std::fmt;

/// Floating-point precision of a space's elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Precision {
    /// IEEE-754 binary32 (`f32`).
    Single,
    /// IEEE-754 binary64 (`f64`).
    Double,
}

impl Precision {
    /// Size of one element in bytes.
    pub const fn element_bytes(self) -> usize {
        match self {
            Self::Single => std::mem::size_of::<f32>(),
            Self::Double => std::mem::size_of::<f64>(),
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Double => write!(f, "double"),
        }
    }
}

/// Element type of a dense vector space.
///
/// Scalars cross the dispatch boundary as `f64`. Kernels narrow a scalar to
/// the working precision once, accumulate in the working precision, and
/// widen results back to `f64` on return.
pub trait Real: Float + Default + fmt::Debug + Send + Sync + 'static {
    /// The precision tag used in space identities.
    const PRECISION: Precision;

    /// Convert a dispatch-boundary scalar to the working precision.
    fn narrow(value: f64) -> Self;

    /// Convert a working-precision value to the reporting precision.
    fn widen(self) -> f64;
}

impl Real for f32 {
    const PRECISION: Precision = Precision::Single;

    #[inline]
    fn narrow(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn widen(self) -> f64 {
        f64::from(self)
    }
}

impl Real for f64 {
    const PRECISION: Precision = Precision::Double;

    #[inline]
    fn narrow(value: f64) -> Self {
        value
    }

    #[inline]
    fn widen(self) -> f64 {
        self
    }
}
