//! vspace: vector-space backends for optimization solvers.
//!
//! This is the facade crate that re-exports the public API of the vspace
//! sub-crates. Solvers program against [`VectorSpace`](prelude::VectorSpace)
//! and the checked entry points in [`ops`]; the dense backend supplies the
//! storage and the arithmetic.
//!
//! # Quick start
//!
//! ```rust
//! use vspace::prelude::*;
//!
//! let space = new_double_vector_space(3).unwrap();
//! let x = space.from_slice(&[1.0, 2.0, 3.0]).unwrap();
//! let g = space.create().unwrap();
//! ops::fill(&space, &g, 0.5).unwrap();
//!
//! // One gradient step, in place: x ← x - 2·g.
//! ops::axpby(&space, &x, 1.0, &x, -2.0, &g).unwrap();
//! assert_eq!(x.to_vec(), vec![0.0, 1.0, 2.0]);
//!
//! // Caller-owned memory joins the same space without a copy.
//! let mut buf = vec![0.0_f64; 3];
//! {
//!     let w = wrap_double_vector(&space, Some(&mut buf[..])).unwrap();
//!     ops::copy(&space, &w, &x).unwrap();
//! }
//! assert_eq!(buf, vec![0.0, 1.0, 2.0]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `vspace-core` | Traits, identities, precision, errors |
//! | [`ops`] | `vspace-core` | Ownership-checked operation entry points |
//! | [`dense`] | `vspace-dense` | Dense spaces, vectors, kernels, wrapping |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core traits, identities, and errors (`vspace-core`).
///
/// Contains [`types::VectorSpace`], [`types::SpaceDescriptor`],
/// [`types::SpaceIdent`], and [`types::VSpaceError`].
pub use vspace_core as types;

/// Checked operation entry points (`vspace-core::ops`).
///
/// Every function verifies that its operands belong to the given space
/// and routes zero and unit coefficients to cheaper primitives.
pub use vspace_core::ops;

/// Dense contiguous-array backend (`vspace-dense`).
///
/// Provides [`dense::DenseSpace`], [`dense::DenseVector`], the
/// [`dense::Kernels`] strategy, and the wrap entry points.
pub use vspace_dense as dense;

/// Common imports for typical usage.
///
/// ```rust
/// use vspace::prelude::*;
/// ```
pub mod prelude {
    pub use vspace_core::ops;
    pub use vspace_core::{
        BackendId, Precision, Real, SpaceDescriptor, SpaceIdent, SpaceInstanceId, SpaceVector,
        VSpaceError, VectorSpace,
    };
    pub use vspace_dense::{
        new_double_vector_space, new_single_vector_space, wrap_dense_vector, wrap_double_vector,
        wrap_single_vector, DenseSpace, DenseSpaceConfig, DenseSpaceF32, DenseSpaceF64,
        DenseVector, Kernels, Ownership, Portable, SharedDenseSpace,
    };
}
