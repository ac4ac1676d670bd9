//! Matrix contracts
//!
//! This module defines the read and write interfaces every matrix
//! satisfies, whatever its storage. Implementors supply the unchecked
//! `direct_*` accessors and their size.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::error::{NumeralError, Result};
use crate::indices::{MatrixIndices, MatrixSize};
use crate::traits::element::Numeral;
use crate::validation::{check_indices, check_same_size};

/// Two-dimensional, indexable grid of numerals
///
/// A matrix is either fully empty (0×0) or has both dimensions non-zero.
pub trait Matrix {
    /// The element type stored in this matrix
    type Element: Numeral;

    /// Size as `(rows, cols)`
    fn size(&self) -> MatrixSize;

    fn rows(&self) -> usize {
        self.size().row
    }

    fn cols(&self) -> usize {
        self.size().col
    }

    /// Element at `index` without bounds checking
    ///
    /// Callers guarantee `self.size().contains(index)`.
    fn direct_get(&self, index: MatrixIndices) -> Self::Element;

    /// Element at `index`
    fn get(&self, index: MatrixIndices) -> Result<Self::Element> {
        check_indices(index, self.size())?;
        Ok(self.direct_get(index))
    }

    /// Whether writes through this matrix are accepted
    fn is_mutable(&self) -> bool {
        false
    }

    /// Iterate `(indices, value)` pairs in row-major order
    fn cells(&self) -> Cells<'_, Self>
    where
        Self: Sized,
    {
        Cells::new(self)
    }

    /// Copy the elements out in row-major order
    #[cfg(feature = "alloc")]
    fn to_vec(&self) -> Vec<Self::Element> {
        let size = self.size();
        let mut out = Vec::with_capacity(size.area());
        for row in 0..size.row {
            for col in 0..size.col {
                out.push(self.direct_get(MatrixIndices::new(row, col)));
            }
        }
        out
    }
}

/// Matrix that accepts element writes
pub trait MatrixMut: Matrix {
    /// Store `value` at `index` without bounds or mutability checks
    fn direct_set(&mut self, index: MatrixIndices, value: Self::Element);

    /// Store `value` at `index`
    fn set(&mut self, index: MatrixIndices, value: Self::Element) -> Result<()> {
        check_indices(index, self.size())?;
        if !self.is_mutable() {
            return Err(NumeralError::NotMutable);
        }
        self.direct_set(index, value);
        Ok(())
    }

    /// Copy every element of a same-size matrix into this one
    fn assign(&mut self, other: &dyn Matrix<Element = Self::Element>) -> Result<()> {
        let size = self.size();
        check_same_size(size, other.size())?;
        if !self.is_mutable() {
            return Err(NumeralError::NotMutable);
        }
        for row in 0..size.row {
            for col in 0..size.col {
                let index = MatrixIndices::new(row, col);
                self.direct_set(index, other.direct_get(index));
            }
        }
        Ok(())
    }
}

/// Row-major iterator over the cells of any matrix
pub struct Cells<'a, M: Matrix + ?Sized> {
    matrix: &'a M,
    size: MatrixSize,
    next: usize,
}

impl<'a, M: Matrix + ?Sized> Cells<'a, M> {
    pub fn new(matrix: &'a M) -> Self {
        Self {
            matrix,
            size: matrix.size(),
            next: 0,
        }
    }
}

impl<M: Matrix + ?Sized> Iterator for Cells<'_, M> {
    type Item = (MatrixIndices, M::Element);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.size.area() {
            return None;
        }
        let index = MatrixIndices::new(self.next / self.size.col, self.next % self.size.col);
        self.next += 1;
        Some((index, self.matrix.direct_get(index)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.size.area() - self.next;
        (remaining, Some(remaining))
    }
}

impl<M: Matrix + ?Sized> ExactSizeIterator for Cells<'_, M> {}

impl<M: Matrix + ?Sized> Matrix for &M {
    type Element = M::Element;

    fn size(&self) -> MatrixSize {
        (**self).size()
    }

    fn direct_get(&self, index: MatrixIndices) -> Self::Element {
        (**self).direct_get(index)
    }

    fn is_mutable(&self) -> bool {
        false
    }
}

impl<M: Matrix + ?Sized> Matrix for &mut M {
    type Element = M::Element;

    fn size(&self) -> MatrixSize {
        (**self).size()
    }

    fn direct_get(&self, index: MatrixIndices) -> Self::Element {
        (**self).direct_get(index)
    }

    fn is_mutable(&self) -> bool {
        (**self).is_mutable()
    }
}

impl<M: MatrixMut + ?Sized> MatrixMut for &mut M {
    fn direct_set(&mut self, index: MatrixIndices, value: Self::Element) {
        (**self).direct_set(index, value)
    }
}
