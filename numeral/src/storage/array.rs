//! Immutable array-backed value forms
//!
//! An array-backed structure either snapshots the caller's cells
//! ([`ArrayMode::Copy`]) or aliases them ([`ArrayMode::Wrap`]). Both
//! present a read-only interface, but a wrapped structure observes every
//! later write the caller makes through its `Cell`s.
//!
//! ```rust
//! use std::cell::Cell;
//! use numeral::{ArrayVector, Vector};
//!
//! let mut raw = [1, 1, 1];
//! let cells = Cell::from_mut(&mut raw[..]).as_slice_of_cells();
//! let wrapped = ArrayVector::wrap(cells);
//! let copied = ArrayVector::copy_cells(cells);
//! cells[1].set(15);
//! assert_eq!(wrapped.get(1), Ok(15));
//! assert_eq!(copied.get(1), Ok(1));
//! ```

use std::cell::Cell;
use std::fmt;
use std::hash::{Hash, Hasher};

use numeral_core::{
    check_matrix_size, check_same_len, Matrix, MatrixIndices, MatrixSize, Numeral, Result, Vector,
};

use crate::base::{matrix_eq, matrix_hash, vector_eq, vector_hash};
use crate::format::{write_matrix, write_vector, FormatSpec};

/// Whether an array-backed structure owns a snapshot or aliases the source
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayMode {
    /// Independent copy taken at construction
    Copy,
    /// Direct reference to the caller's cells
    Wrap,
}

#[derive(Clone)]
enum Backing<'a, T> {
    Owned(Box<[T]>),
    Wrapped(&'a [Cell<T>]),
}

impl<'a, T: Numeral> Backing<'a, T> {
    fn new(cells: &'a [Cell<T>], mode: ArrayMode) -> Self {
        match mode {
            ArrayMode::Copy => Backing::Owned(cells.iter().map(Cell::get).collect()),
            ArrayMode::Wrap => Backing::Wrapped(cells),
        }
    }

    fn mode(&self) -> ArrayMode {
        match self {
            Backing::Owned(_) => ArrayMode::Copy,
            Backing::Wrapped(_) => ArrayMode::Wrap,
        }
    }

    fn len(&self) -> usize {
        match self {
            Backing::Owned(values) => values.len(),
            Backing::Wrapped(cells) => cells.len(),
        }
    }

    #[inline]
    fn get(&self, offset: usize) -> T {
        match self {
            Backing::Owned(values) => values[offset],
            Backing::Wrapped(cells) => cells[offset].get(),
        }
    }
}

/// Read-only vector over an owned snapshot or aliased caller cells
#[derive(Clone)]
pub struct ArrayVector<'a, T> {
    backing: Backing<'a, T>,
}

impl<'a, T: Numeral> ArrayVector<'a, T> {
    /// Build over `cells`, copying or aliasing as `mode` says
    pub fn new(cells: &'a [Cell<T>], mode: ArrayMode) -> Self {
        Self {
            backing: Backing::new(cells, mode),
        }
    }

    /// Alias the caller's cells
    pub fn wrap(cells: &'a [Cell<T>]) -> Self {
        Self::new(cells, ArrayMode::Wrap)
    }

    /// Snapshot the caller's cells
    pub fn copy_cells(cells: &[Cell<T>]) -> ArrayVector<'static, T> {
        ArrayVector::copy(&cells.iter().map(Cell::get).collect::<Vec<_>>())
    }

    pub fn mode(&self) -> ArrayMode {
        self.backing.mode()
    }
}

impl<T: Numeral> ArrayVector<'static, T> {
    /// Snapshot a plain slice
    pub fn copy(values: &[T]) -> Self {
        Self {
            backing: Backing::Owned(values.into()),
        }
    }
}

impl<T: Numeral> Vector for ArrayVector<'_, T> {
    type Element = T;

    fn len(&self) -> usize {
        self.backing.len()
    }

    fn direct_get(&self, index: usize) -> T {
        self.backing.get(index)
    }
}

impl<T: Numeral, V: Vector<Element = T>> PartialEq<V> for ArrayVector<'_, T> {
    fn eq(&self, other: &V) -> bool {
        vector_eq(self, other)
    }
}

impl<T: Numeral> Hash for ArrayVector<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(vector_hash(self));
    }
}

impl<T: Numeral> fmt::Debug for ArrayVector<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayVector")
            .field("mode", &self.mode())
            .field("values", &self.to_vec())
            .finish()
    }
}

impl<T: Numeral> fmt::Display for ArrayVector<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vector(f, self, &FormatSpec::default())
    }
}

/// Read-only row-major matrix over an owned snapshot or aliased caller cells
#[derive(Clone)]
pub struct ArrayMatrix<'a, T> {
    size: MatrixSize,
    backing: Backing<'a, T>,
}

impl<'a, T: Numeral> ArrayMatrix<'a, T> {
    /// Build over row-major `cells`, copying or aliasing as `mode` says
    pub fn new(rows: usize, cols: usize, cells: &'a [Cell<T>], mode: ArrayMode) -> Result<Self> {
        let size = check_matrix_size(rows, cols)?;
        check_same_len(size.area(), cells.len())?;
        Ok(Self {
            size,
            backing: Backing::new(cells, mode),
        })
    }

    /// Alias the caller's row-major cells
    pub fn wrap(rows: usize, cols: usize, cells: &'a [Cell<T>]) -> Result<Self> {
        Self::new(rows, cols, cells, ArrayMode::Wrap)
    }

    pub fn mode(&self) -> ArrayMode {
        self.backing.mode()
    }
}

impl<T: Numeral> ArrayMatrix<'static, T> {
    /// Snapshot a row-major slice
    pub fn copy(rows: usize, cols: usize, values: &[T]) -> Result<Self> {
        let size = check_matrix_size(rows, cols)?;
        check_same_len(size.area(), values.len())?;
        Ok(Self {
            size,
            backing: Backing::Owned(values.into()),
        })
    }
}

impl<T: Numeral> Matrix for ArrayMatrix<'_, T> {
    type Element = T;

    fn size(&self) -> MatrixSize {
        self.size
    }

    fn direct_get(&self, index: MatrixIndices) -> T {
        self.backing.get(self.size.offset_of(index))
    }
}

impl<T: Numeral, M: Matrix<Element = T>> PartialEq<M> for ArrayMatrix<'_, T> {
    fn eq(&self, other: &M) -> bool {
        matrix_eq(self, other)
    }
}

impl<T: Numeral> Hash for ArrayMatrix<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(matrix_hash(self));
    }
}

impl<T: Numeral> fmt::Debug for ArrayMatrix<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayMatrix")
            .field("size", &self.size)
            .field("mode", &self.mode())
            .finish()
    }
}

impl<T: Numeral> fmt::Display for ArrayMatrix<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_matrix(f, self, &FormatSpec::default())
    }
}
