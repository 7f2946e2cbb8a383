//! Error types for vector space construction and dispatch.

use std::error::Error;
use std::fmt;

use crate::id::{SpaceIdent, SpaceInstanceId};

/// Errors arising from space construction, vector construction, wrapping
/// and dispatch.
///
/// Every failure is local and recoverable: no operation leaves a partially
/// constructed object behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VSpaceError {
    /// The allocator could not provide storage for a vector.
    AllocationFailed {
        /// Number of bytes requested.
        requested_bytes: usize,
    },
    /// The element storage for one vector would exceed the configured
    /// ceiling, or its byte size overflows `usize`.
    CapacityExceeded {
        /// Number of bytes one vector would need (saturated on overflow).
        requested_bytes: usize,
        /// The configured per-vector ceiling.
        max_bytes: usize,
    },
    /// A wrap was requested against a space of another backend or precision.
    IncompatibleSpace {
        /// Identity the wrap entry point expects.
        expected: SpaceIdent,
        /// Identity of the space actually supplied.
        found: SpaceIdent,
    },
    /// A wrap was requested with no buffer.
    NullData,
    /// A buffer or vector has a different element count than the space.
    LengthMismatch {
        /// Length of the space.
        expected: usize,
        /// Length supplied.
        found: usize,
    },
    /// A vector was passed to a space that did not create it.
    ForeignVector {
        /// The space the operation was dispatched through.
        space: SpaceInstanceId,
        /// The space that owns the vector.
        owner: SpaceInstanceId,
    },
}

impl fmt::Display for VSpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested_bytes } => {
                write!(f, "allocation of {requested_bytes} bytes failed")
            }
            Self::CapacityExceeded {
                requested_bytes,
                max_bytes,
            } => {
                write!(
                    f,
                    "vector storage exceeds capacity: requested {requested_bytes} bytes, max {max_bytes} bytes"
                )
            }
            Self::IncompatibleSpace { expected, found } => {
                write!(f, "incompatible space: expected {expected}, found {found}")
            }
            Self::NullData => write!(f, "no data buffer supplied"),
            Self::LengthMismatch { expected, found } => {
                write!(f, "length mismatch: space has {expected} elements, got {found}")
            }
            Self::ForeignVector { space, owner } => {
                write!(f, "vector belongs to space {owner}, not space {space}")
            }
        }
    }
}

impl Error for VSpaceError {}
