//! Benchmark profiles for vspace dense kernels.
//!
//! [`Workload`] bundles a dense space with three seeded operand vectors and
//! one destination, so every benchmark measures only the kernel call.
//!
//! - [`reference_len`]: 10K elements, fits in L2 on common hardware
//! - [`stress_len`]: 1M elements, memory-bandwidth bound

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use vspace_core::{Real, VSpaceError, VectorSpace};
use vspace_dense::{DenseSpace, DenseVector};
use vspace_test_utils::fixtures::seeded_values;

/// Element count of the reference profile.
pub fn reference_len() -> usize {
    10_000
}

/// Element count of the stress profile.
pub fn stress_len() -> usize {
    1_000_000
}

/// A dense space plus seeded operands.
pub struct Workload<T: Real> {
    /// The space every vector belongs to.
    pub space: DenseSpace<T>,
    /// First operand.
    pub x: DenseVector<'static, T>,
    /// Second operand.
    pub y: DenseVector<'static, T>,
    /// Third operand.
    pub z: DenseVector<'static, T>,
    /// Destination.
    pub dst: DenseVector<'static, T>,
}

impl<T: Real> Workload<T> {
    /// Build a workload of `len` elements from `seed`.
    pub fn new(len: usize, seed: u64) -> Result<Self, VSpaceError> {
        let space = DenseSpace::<T>::new(len)?;
        let operand = |s: u64| -> Result<DenseVector<'static, T>, VSpaceError> {
            let values: Vec<T> = seeded_values(s, len, 1.0)
                .into_iter()
                .map(T::narrow)
                .collect();
            space.from_slice(&values)
        };
        let x = operand(seed)?;
        let y = operand(seed.wrapping_add(1))?;
        let z = operand(seed.wrapping_add(2))?;
        let dst = space.create()?;
        Ok(Self { space, x, y, z, dst })
    }
}
