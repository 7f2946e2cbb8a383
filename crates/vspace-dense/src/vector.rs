//! Dense vector instances and their element storage.

use std::cell::Cell;
use std::fmt;

use vspace_core::{Real, SpaceInstanceId, SpaceVector, VSpaceError};

/// Who is responsible for a vector's element storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// The vector allocated its elements and frees them on drop.
    Owned,
    /// The elements are caller memory; the vector only borrows them.
    Wrapped,
}

enum Storage<'a, T> {
    Owned(Box<[Cell<T>]>),
    Wrapped(&'a [Cell<T>]),
}

/// A vector of a [`DenseSpace`](crate::DenseSpace).
///
/// Holds the id of the space that created or wrapped it plus exactly
/// `length` elements. The element count never changes and a vector is never
/// moved to another space.
///
/// Elements are read and written by value through [`get`](Self::get),
/// [`set`](Self::set) and friends; all of these take `&self`, which is what
/// lets the space's kernels update a vector in place while reading it.
/// The vector is `!Sync`, so it cannot be mutated from two threads at once.
pub struct DenseVector<'a, T: Real> {
    owner: SpaceInstanceId,
    storage: Storage<'a, T>,
}

impl<T: Real> DenseVector<'static, T> {
    /// Allocate `len` zeroed elements in one fallible allocation.
    pub(crate) fn allocate(owner: SpaceInstanceId, len: usize) -> Result<Self, VSpaceError> {
        let mut cells: Vec<Cell<T>> = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| VSpaceError::AllocationFailed {
                requested_bytes: len.saturating_mul(T::PRECISION.element_bytes()),
            })?;
        cells.resize(len, Cell::new(T::zero()));
        Ok(Self {
            owner,
            storage: Storage::Owned(cells.into_boxed_slice()),
        })
    }
}

impl<'a, T: Real> DenseVector<'a, T> {
    /// View caller memory as the elements of a vector owned by `owner`.
    pub(crate) fn wrapped(owner: SpaceInstanceId, data: &'a mut [T]) -> Self {
        Self {
            owner,
            storage: Storage::Wrapped(Cell::from_mut(data).as_slice_of_cells()),
        }
    }

    /// Whether the elements are owned or borrowed.
    pub fn ownership(&self) -> Ownership {
        match self.storage {
            Storage::Owned(_) => Ownership::Owned,
            Storage::Wrapped(_) => Ownership::Wrapped,
        }
    }

    /// The elements as a slice of cells.
    pub fn cells(&self) -> &[Cell<T>] {
        match &self.storage {
            Storage::Owned(cells) => &cells[..],
            Storage::Wrapped(cells) => &cells[..],
        }
    }

    /// Address of the first element, used to detect operands that share storage.
    pub fn as_ptr(&self) -> *const T {
        self.cells().as_ptr().cast()
    }

    /// Element at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<T> {
        self.cells().get(index).map(Cell::get)
    }

    /// Overwrite the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn set(&self, index: usize, value: T) {
        self.cells()[index].set(value);
    }

    /// Iterate over element values.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.cells().iter().map(Cell::get)
    }

    /// Copy the elements into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Overwrite every element from `values`.
    ///
    /// Returns `Err(VSpaceError::LengthMismatch)` and leaves the vector
    /// untouched if `values.len() != self.len()`.
    pub fn write_slice(&self, values: &[T]) -> Result<(), VSpaceError> {
        let cells = self.cells();
        if values.len() != cells.len() {
            return Err(VSpaceError::LengthMismatch {
                expected: cells.len(),
                found: values.len(),
            });
        }
        for (cell, &value) in cells.iter().zip(values) {
            cell.set(value);
        }
        Ok(())
    }

    /// Copy every element into `out`.
    ///
    /// Returns `Err(VSpaceError::LengthMismatch)` if `out.len() != self.len()`.
    pub fn read_into(&self, out: &mut [T]) -> Result<(), VSpaceError> {
        let cells = self.cells();
        if out.len() != cells.len() {
            return Err(VSpaceError::LengthMismatch {
                expected: cells.len(),
                found: out.len(),
            });
        }
        for (slot, cell) in out.iter_mut().zip(cells) {
            *slot = cell.get();
        }
        Ok(())
    }
}

impl<T: Real> SpaceVector for DenseVector<'_, T> {
    fn owner(&self) -> SpaceInstanceId {
        self.owner
    }

    fn len(&self) -> usize {
        self.cells().len()
    }
}

impl<T: Real> fmt::Debug for DenseVector<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseVector")
            .field("owner", &self.owner)
            .field("ownership", &self.ownership())
            .field("elements", &self.to_vec())
            .finish()
    }
}
