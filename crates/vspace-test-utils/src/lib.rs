//! Test utilities and mock types for vspace development.
//!
//! Provides a mock [`ForeignSpace`] descriptor for identity-check tests,
//! seeded value generators in [`fixtures`], and tolerance assertions.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use vspace_core::{BackendId, Precision, SpaceDescriptor, SpaceIdent, SpaceInstanceId};

/// A descriptor for a backend that is not dense.
///
/// Wrapping caller memory against it must fail with
/// `VSpaceError::IncompatibleSpace` whatever the buffer.
pub struct ForeignSpace {
    ident: SpaceIdent,
    len: usize,
    instance_id: SpaceInstanceId,
}

impl ForeignSpace {
    /// A descriptor for a named non-dense backend.
    pub fn new(backend: &'static str, precision: Precision, len: usize) -> Self {
        Self {
            ident: SpaceIdent {
                backend: BackendId::Other(backend),
                precision,
            },
            len,
            instance_id: SpaceInstanceId::next(),
        }
    }

    /// A double-precision "sparse" descriptor.
    pub fn sparse(len: usize) -> Self {
        Self::new("sparse", Precision::Double, len)
    }
}

impl SpaceDescriptor for ForeignSpace {
    fn ident(&self) -> SpaceIdent {
        self.ident
    }

    fn len(&self) -> usize {
        self.len
    }

    fn instance_id(&self) -> SpaceInstanceId {
        self.instance_id
    }
}

/// Assert `|got - expected| <= rel_tol * max(1, |expected|)`.
#[track_caller]
pub fn assert_close(got: f64, expected: f64, rel_tol: f64) {
    let bound = rel_tol * expected.abs().max(1.0);
    assert!(
        (got - expected).abs() <= bound,
        "got {got}, expected {expected} (tolerance {bound})"
    );
}

/// Assert two sequences agree element-wise under [`assert_close`].
#[track_caller]
pub fn assert_all_close(got: &[f64], expected: &[f64], rel_tol: f64) {
    assert_eq!(got.len(), expected.len(), "length mismatch");
    for (i, (&g, &e)) in got.iter().zip(expected).enumerate() {
        let bound = rel_tol * e.abs().max(1.0);
        assert!(
            (g - e).abs() <= bound,
            "index {i}: got {g}, expected {e} (tolerance {bound})"
        );
    }
}
