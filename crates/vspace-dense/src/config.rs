//! Dense space configuration.

use vspace_core::{Real, VSpaceError};

/// Configuration for a dense vector space.
///
/// Validated when the space is built; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseSpaceConfig {
    /// Number of elements in every vector of the space.
    pub length: usize,

    /// Ceiling on the element storage of a single vector, in bytes.
    ///
    /// Default: [`DEFAULT_MAX_BYTES`](Self::DEFAULT_MAX_BYTES), the largest
    /// allocation the global allocator can be asked for.
    pub max_bytes: usize,
}

impl DenseSpaceConfig {
    /// Default per-vector ceiling: `isize::MAX` bytes.
    pub const DEFAULT_MAX_BYTES: usize = isize::MAX as usize;

    /// Create a config for vectors of `length` elements.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            max_bytes: Self::DEFAULT_MAX_BYTES,
        }
    }

    /// Set the per-vector storage ceiling.
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Bytes of element storage one vector of precision `T` needs, or
    /// `None` on overflow.
    pub fn vector_bytes<T: Real>(&self) -> Option<usize> {
        self.length.checked_mul(T::PRECISION.element_bytes())
    }

    /// Check that vectors of precision `T` fit under the ceiling.
    ///
    /// Returns the per-vector byte size on success, or
    /// `Err(VSpaceError::CapacityExceeded)` otherwise.
    pub fn validate<T: Real>(&self) -> Result<usize, VSpaceError> {
        match self.vector_bytes::<T>() {
            Some(bytes) if bytes <= self.max_bytes => Ok(bytes),
            other => Err(VSpaceError::CapacityExceeded {
                requested_bytes: other.unwrap_or(usize::MAX),
                max_bytes: self.max_bytes,
            }),
        }
    }
}

impl Default for DenseSpaceConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
