//! Matrix coordinates and sizes

use crate::traits::vector::Vector;

/// Immutable `(row, col)` pair
///
/// Used both as a coordinate and as a matrix size. Ordering is row-major,
/// and the pair is itself a two-element vector of its components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MatrixIndices {
    pub row: usize,
    pub col: usize,
}

/// Matrix sizes are expressed as `(rows, cols)` indices
pub type MatrixSize = MatrixIndices;

impl MatrixIndices {
    /// Create a new coordinate pair
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Number of cells a matrix of this size holds
    pub const fn area(&self) -> usize {
        self.row * self.col
    }

    /// Whether a coordinate lies inside a matrix of this size
    pub const fn contains(&self, index: MatrixIndices) -> bool {
        index.row < self.row && index.col < self.col
    }

    /// Swap row and column
    pub const fn transposed(&self) -> Self {
        Self {
            row: self.col,
            col: self.row,
        }
    }

    /// Row-major offset of `index` in a matrix of this size
    pub const fn offset_of(&self, index: MatrixIndices) -> usize {
        index.row * self.col + index.col
    }
}

impl From<(usize, usize)> for MatrixIndices {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<MatrixIndices> for (usize, usize) {
    fn from(value: MatrixIndices) -> Self {
        (value.row, value.col)
    }
}

impl core::fmt::Display for MatrixIndices {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Vector for MatrixIndices {
    type Element = usize;

    fn len(&self) -> usize {
        2
    }

    fn direct_get(&self, index: usize) -> usize {
        if index == 0 {
            self.row
        } else {
            self.col
        }
    }
}
