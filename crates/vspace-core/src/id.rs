//! Space identity types.
//!
//! A [`SpaceIdent`] names the backend and precision of a space and is
//! compared by value, so two separately built descriptors of the same kind
//! agree on it. A [`SpaceInstanceId`] names one particular descriptor and is
//! recorded in every vector it creates.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::real::Precision;

/// Storage backend of a vector space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BackendId {
    /// Contiguous in-memory arrays.
    Dense,
    /// Any backend defined outside this workspace, named by a label.
    Other(&'static str),
}

impl fmt::Display for BackendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dense => write!(f, "dense"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

/// Identity of a space kind: backend plus precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpaceIdent {
    /// Storage backend.
    pub backend: BackendId,
    /// Element precision.
    pub precision: Precision,
}

impl SpaceIdent {
    /// Identity of a dense space of the given precision.
    pub const fn dense(precision: Precision) -> Self {
        Self {
            backend: BackendId::Dense,
            precision,
        }
    }

    /// Whether this identity names a dense backend.
    pub fn is_dense(&self) -> bool {
        self.backend == BackendId::Dense
    }
}

impl fmt::Display for SpaceIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vector space for {} precision floating point values",
            self.backend, self.precision
        )
    }
}

/// Counter for unique [`SpaceInstanceId`] allocation.
static SPACE_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a space descriptor.
///
/// Allocated from a monotonic atomic counter via [`SpaceInstanceId::next`].
/// Two descriptors never share an ID, even with identical length and
/// precision, so a vector can always be traced back to the descriptor that
/// created or wrapped it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpaceInstanceId(u64);

impl SpaceInstanceId {
    /// Allocate a fresh, unique instance ID. Thread-safe.
    pub fn next() -> Self {
        Self(SPACE_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SpaceInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
