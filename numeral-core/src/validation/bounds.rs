//! Index and shape validation
//!
//! Pure checks shared by every structure: they either pass or return the
//! error describing the violation.

use crate::error::{NumeralError, Result};
use crate::indices::{MatrixIndices, MatrixSize};

/// Validate a vector index against its length
pub const fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(NumeralError::IndexOutOfBounds { index, len });
    }
    Ok(())
}

/// Validate matrix coordinates against its size
pub const fn check_indices(index: MatrixIndices, size: MatrixSize) -> Result<()> {
    if !size.contains(index) {
        return Err(NumeralError::MatrixIndexOutOfBounds { index, size });
    }
    Ok(())
}

/// Validate a matrix size
///
/// A matrix is either 0×0 or non-empty in both dimensions.
pub const fn check_matrix_size(rows: usize, cols: usize) -> Result<MatrixSize> {
    if (rows == 0) != (cols == 0) {
        return Err(NumeralError::InvalidShape { rows, cols });
    }
    Ok(MatrixIndices::new(rows, cols))
}

/// Validate that two vector lengths agree
pub const fn check_same_len(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(NumeralError::SizeMismatch { expected, got });
    }
    Ok(())
}

/// Validate that two matrix sizes agree
pub const fn check_same_size(expected: MatrixSize, got: MatrixSize) -> Result<()> {
    if expected.row != got.row || expected.col != got.col {
        return Err(NumeralError::ShapeMismatch { expected, got });
    }
    Ok(())
}
