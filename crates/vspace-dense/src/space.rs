//! The dense space descriptor.

use std::cell::Cell;
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, trace, warn};
use vspace_core::{
    Real, SpaceDescriptor, SpaceIdent, SpaceInstanceId, SpaceVector, VSpaceError, VectorSpace,
};

use crate::config::DenseSpaceConfig;
use crate::kernel::{Kernels, Portable};
use crate::vector::DenseVector;
use crate::wrap::wrap_dense_vector;

/// A vector space whose vectors are contiguous arrays of `T`.
///
/// Built once per (precision, length) pair and read-only afterwards. It
/// can be shared between threads, and dropping it has no effect on the
/// vectors it created: they record only the space's
/// [`SpaceInstanceId`], never a borrow of it.
///
/// # Examples
///
/// ```
/// use vspace_core::{ops, VectorSpace};
/// use vspace_dense::DenseSpace;
///
/// let space = DenseSpace::<f64>::new(2).unwrap();
/// let x = space.from_slice(&[3.0, -4.0]).unwrap();
/// let y = space.create().unwrap();
///
/// assert_eq!(ops::norm2(&space, &x).unwrap(), 5.0);
///
/// // y ← 2·x, then x ← x + y in place.
/// ops::scale(&space, &y, 2.0, &x).unwrap();
/// ops::axpby(&space, &x, 1.0, &x, 1.0, &y).unwrap();
/// assert_eq!(x.to_vec(), vec![9.0, -12.0]);
/// ```
#[derive(Debug)]
pub struct DenseSpace<T: Real, K: Kernels<T> = Portable> {
    config: DenseSpaceConfig,
    instance_id: SpaceInstanceId,
    kernels: K,
    _precision: PhantomData<T>,
}

/// Single-precision dense space.
pub type DenseSpaceF32 = DenseSpace<f32>;

/// Double-precision dense space.
pub type DenseSpaceF64 = DenseSpace<f64>;

/// Shared handle for a dense space used from several owners.
pub type SharedDenseSpace<T, K = Portable> = Arc<DenseSpace<T, K>>;

/// Create a single-precision dense space of `length` elements.
pub fn new_single_vector_space(length: usize) -> Result<DenseSpaceF32, VSpaceError> {
    DenseSpace::new(length)
}

/// Create a double-precision dense space of `length` elements.
pub fn new_double_vector_space(length: usize) -> Result<DenseSpaceF64, VSpaceError> {
    DenseSpace::new(length)
}

impl<T: Real> DenseSpace<T, Portable> {
    /// Create a space of `length` elements with the default configuration.
    ///
    /// Returns `Err(VSpaceError::CapacityExceeded)` if one vector's storage
    /// would not be addressable.
    pub fn new(length: usize) -> Result<Self, VSpaceError> {
        Self::with_config(DenseSpaceConfig::new(length))
    }

    /// Create a space from an explicit configuration.
    pub fn with_config(config: DenseSpaceConfig) -> Result<Self, VSpaceError> {
        Self::with_kernels(config, Portable)
    }
}

impl<T: Real, K: Kernels<T>> DenseSpace<T, K> {
    /// Create a space that dispatches to the given kernels.
    pub fn with_kernels(config: DenseSpaceConfig, kernels: K) -> Result<Self, VSpaceError> {
        let bytes = match config.validate::<T>() {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(length = config.length, max_bytes = config.max_bytes, "dense space rejected: {err}");
                return Err(err);
            }
        };
        let space = Self {
            config,
            instance_id: SpaceInstanceId::next(),
            kernels,
            _precision: PhantomData,
        };
        debug!(
            space = %space.instance_id,
            ident = %space.ident(),
            length = space.config.length,
            vector_bytes = bytes,
            "created dense vector space"
        );
        Ok(space)
    }

    /// The configuration the space was built from.
    pub fn config(&self) -> &DenseSpaceConfig {
        &self.config
    }

    /// The kernels this space dispatches to.
    pub fn kernels(&self) -> &K {
        &self.kernels
    }

    /// Bytes of element storage in one vector.
    pub fn vector_bytes(&self) -> usize {
        self.config.length * T::PRECISION.element_bytes()
    }

    /// Create a vector holding a copy of `values`.
    ///
    /// Returns `Err(VSpaceError::LengthMismatch)` if `values` does not have
    /// the space's length.
    pub fn from_slice(&self, values: &[T]) -> Result<DenseVector<'static, T>, VSpaceError> {
        if values.len() != self.config.length {
            return Err(VSpaceError::LengthMismatch {
                expected: self.config.length,
                found: values.len(),
            });
        }
        let v = self.create()?;
        v.write_slice(values)?;
        Ok(v)
    }

    /// Wrap caller memory as a vector of this space.
    ///
    /// The vector borrows `data` for its whole life and never frees it.
    /// Returns `Err(VSpaceError::LengthMismatch)` if `data` does not have
    /// the space's length.
    pub fn wrap<'a>(&self, data: &'a mut [T]) -> Result<DenseVector<'a, T>, VSpaceError> {
        wrap_dense_vector(self, Some(data))
    }

    /// Release the descriptor. Vectors created from it remain valid.
    pub fn finalize(self) {
        debug!(space = %self.instance_id, "finalized dense vector space");
    }

    /// Wrap this space in an `Arc` for sharing.
    pub fn into_shared(self) -> SharedDenseSpace<T, K> {
        Arc::new(self)
    }

    fn elements<'v>(&self, v: &'v DenseVector<'_, T>) -> &'v [Cell<T>] {
        debug_assert_eq!(
            v.owner(),
            self.instance_id,
            "vector dispatched through a space that does not own it"
        );
        v.cells()
    }
}

impl<T: Real, K: Kernels<T>> SpaceDescriptor for DenseSpace<T, K> {
    fn ident(&self) -> SpaceIdent {
        SpaceIdent::dense(T::PRECISION)
    }

    fn len(&self) -> usize {
        self.config.length
    }

    fn instance_id(&self) -> SpaceInstanceId {
        self.instance_id
    }
}

impl<T: Real, K: Kernels<T>> VectorSpace for DenseSpace<T, K> {
    type Vector<'a> = DenseVector<'a, T>;

    fn create(&self) -> Result<DenseVector<'static, T>, VSpaceError> {
        let v = DenseVector::allocate(self.instance_id, self.config.length)?;
        trace!(space = %self.instance_id, length = self.config.length, "created owned vector");
        Ok(v)
    }

    fn destruct(&self, v: DenseVector<'_, T>) {
        trace!(space = %self.instance_id, ownership = ?v.ownership(), "destructed vector");
        drop(v);
    }

    fn fill(&self, v: &DenseVector<'_, T>, alpha: f64) {
        self.kernels.fill(self.elements(v), alpha);
    }

    fn norm1(&self, v: &DenseVector<'_, T>) -> f64 {
        self.kernels.norm1(self.elements(v))
    }

    fn norm2(&self, v: &DenseVector<'_, T>) -> f64 {
        self.kernels.norm2(self.elements(v))
    }

    fn norm_inf(&self, v: &DenseVector<'_, T>) -> f64 {
        self.kernels.norm_inf(self.elements(v))
    }

    fn dot(&self, x: &DenseVector<'_, T>, y: &DenseVector<'_, T>) -> f64 {
        self.kernels.dot(self.elements(x), self.elements(y))
    }

    fn copy(&self, dst: &DenseVector<'_, T>, src: &DenseVector<'_, T>) {
        self.kernels.copy(self.elements(dst), self.elements(src));
    }

    fn swap(&self, x: &DenseVector<'_, T>, y: &DenseVector<'_, T>) {
        self.kernels.swap(self.elements(x), self.elements(y));
    }

    fn scale(&self, dst: &DenseVector<'_, T>, alpha: f64, src: &DenseVector<'_, T>) {
        self.kernels
            .scale(self.elements(dst), alpha, self.elements(src));
    }

    fn axpby(
        &self,
        dst: &DenseVector<'_, T>,
        alpha: f64,
        x: &DenseVector<'_, T>,
        beta: f64,
        y: &DenseVector<'_, T>,
    ) {
        self.kernels.axpby(
            self.elements(dst),
            alpha,
            self.elements(x),
            beta,
            self.elements(y),
        );
    }

    fn axpbypcz(
        &self,
        dst: &DenseVector<'_, T>,
        alpha: f64,
        x: &DenseVector<'_, T>,
        beta: f64,
        y: &DenseVector<'_, T>,
        gamma: f64,
        z: &DenseVector<'_, T>,
    ) {
        self.kernels.axpbypcz(
            self.elements(dst),
            alpha,
            self.elements(x),
            beta,
            self.elements(y),
            gamma,
            self.elements(z),
        );
    }
}
