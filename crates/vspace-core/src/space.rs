//! The abstract vector-space contract.

use crate::error::VSpaceError;
use crate::id::{SpaceIdent, SpaceInstanceId};

/// Identity and shape of a vector space, independent of its vector type.
///
/// This is the object-safe half of the contract. Entry points that must
/// accept "any space" (such as wrapping caller memory) take
/// `&dyn SpaceDescriptor` and verify the [`ident`](Self::ident) before doing
/// anything else.
///
/// `Sync` is required because a descriptor is read-only after construction
/// and may be shared between threads that operate on disjoint vectors.
pub trait SpaceDescriptor: Send + Sync + 'static {
    /// Backend and precision of this space.
    fn ident(&self) -> SpaceIdent;

    /// Number of elements in every vector of this space.
    fn len(&self) -> usize;

    /// Whether vectors of this space have no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Unique identifier of this descriptor instance.
    fn instance_id(&self) -> SpaceInstanceId;
}

/// The header every vector carries, whatever its backend.
pub trait SpaceVector {
    /// Instance ID of the space that created or wrapped this vector.
    fn owner(&self) -> SpaceInstanceId;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Whether the vector has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The operation table of a vector space.
///
/// Vectors have no behaviour of their own; every primitive is reached
/// through the space that owns them. Operands are passed by shared
/// reference and backends keep their elements in interior-mutable storage,
/// so a destination may be the very same vector as any of its sources.
///
/// # Preconditions
///
/// Implementations may assume every operand belongs to `self`, and that
/// the coefficients given to [`scale`](Self::scale), [`axpby`](Self::axpby)
/// and [`axpbypcz`](Self::axpbypcz) are non-zero. The [`ops`](crate::ops)
/// dispatcher establishes both before calling in; code that calls these
/// methods directly takes over that responsibility.
pub trait VectorSpace: SpaceDescriptor {
    /// The vector type of this backend. `'a` is the lifetime of any
    /// caller memory the vector borrows.
    type Vector<'a>: SpaceVector;

    /// Allocate a new vector. Element values are unspecified.
    fn create(&self) -> Result<Self::Vector<'static>, VSpaceError>;

    /// Release a vector. Borrowed caller memory is left untouched.
    fn destruct(&self, v: Self::Vector<'_>) {
        drop(v);
    }

    /// Set every element to `alpha`.
    fn fill(&self, v: &Self::Vector<'_>, alpha: f64);

    /// Sum of absolute values.
    fn norm1(&self, v: &Self::Vector<'_>) -> f64;

    /// Euclidean norm.
    fn norm2(&self, v: &Self::Vector<'_>) -> f64;

    /// Largest absolute value, `0` for an empty vector.
    fn norm_inf(&self, v: &Self::Vector<'_>) -> f64;

    /// Inner product of `x` and `y`.
    fn dot(&self, x: &Self::Vector<'_>, y: &Self::Vector<'_>) -> f64;

    /// `dst ← src`.
    fn copy(&self, dst: &Self::Vector<'_>, src: &Self::Vector<'_>);

    /// Exchange the contents of `x` and `y`.
    fn swap(&self, x: &Self::Vector<'_>, y: &Self::Vector<'_>);

    /// `dst ← alpha·src`, `alpha ≠ 0`.
    fn scale(&self, dst: &Self::Vector<'_>, alpha: f64, src: &Self::Vector<'_>);

    /// `dst ← alpha·x + beta·y`, `alpha ≠ 0`, `beta ≠ 0`.
    fn axpby(
        &self,
        dst: &Self::Vector<'_>,
        alpha: f64,
        x: &Self::Vector<'_>,
        beta: f64,
        y: &Self::Vector<'_>,
    );

    /// `dst ← alpha·x + beta·y + gamma·z`, all coefficients non-zero.
    #[allow(clippy::too_many_arguments)]
    fn axpbypcz(
        &self,
        dst: &Self::Vector<'_>,
        alpha: f64,
        x: &Self::Vector<'_>,
        beta: f64,
        y: &Self::Vector<'_>,
        gamma: f64,
        z: &Self::Vector<'_>,
    );
}
