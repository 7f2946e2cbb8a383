//! Core types and traits for vspace vector spaces.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! abstractions that optimization code is written against: the precision
//! abstraction, space identity types, the error type, the [`VectorSpace`]
//! operation table, and the [`ops`] dispatcher that strips trivial
//! coefficients before a backend kernel ever runs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod ops;
pub mod real;
pub mod space;

pub use error::VSpaceError;
pub use id::{BackendId, SpaceIdent, SpaceInstanceId};
pub use real::{Precision, Real};
pub use space::{SpaceDescriptor, SpaceVector, VectorSpace};
