//! Dense contiguous-array vector spaces.
//!
//! A [`DenseSpace`] binds a length, a precision (`f32` or `f64`) and a
//! [`Kernels`] strategy into one read-only descriptor. Every primitive of
//! [`VectorSpace`](vspace_core::VectorSpace) is reached through it; the
//! [`DenseVector`]s it hands out carry only a header and their elements.
//!
//! # Storage
//!
//! ```text
//! DenseSpace<T, K>   (shared, immutable)
//! ├── DenseSpaceConfig { length, max_bytes }
//! ├── SpaceInstanceId  (recorded as owner by every vector)
//! └── K: Kernels<T>    (operation table, default Portable)
//!
//! DenseVector<'a, T>
//! ├── owner: SpaceInstanceId
//! └── Owned(Box<[Cell<T>]>) | Wrapped(&'a [Cell<T>])
//! ```
//!
//! Owned vectors hold their own buffer. Wrapped vectors borrow caller
//! memory for `'a` and never free it; the caller gets the buffer back, with
//! every write made through the vector, once the vector is dropped.
//!
//! # Aliasing
//!
//! Elements live in [`Cell`](std::cell::Cell)s, so a destination operand may
//! be the same vector as any source: `axpby(&x, 2.0, &x, 3.0, &y)` is an
//! in-place update. Each kernel reads index `i` of every operand before it
//! writes index `i` of the destination.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod kernel;
pub mod space;
pub mod vector;
pub mod wrap;

#[cfg(test)]
pub(crate) mod compliance;

pub use config::DenseSpaceConfig;
pub use kernel::{Kernels, Portable};
pub use space::{
    new_double_vector_space, new_single_vector_space, DenseSpace, DenseSpaceF32, DenseSpaceF64,
    SharedDenseSpace,
};
pub use vector::{DenseVector, Ownership};
pub use wrap::{wrap_dense_vector, wrap_double_vector, wrap_single_vector};
