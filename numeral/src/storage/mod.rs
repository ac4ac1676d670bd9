//! Storage strategies for vectors and matrices
//!
//! - [`dense`]: owned contiguous buffers, writable
//! - [`array`]: read-only value forms that copy or alias caller cells
//! - [`sparse`]: ordered maps of non-default cells, writable

pub mod array;
pub mod comparer;
pub mod dense;
pub mod sparse;

pub use array::{ArrayMatrix, ArrayMode, ArrayVector};
pub use comparer::Comparer;
pub use dense::{DenseMatrix, DenseVector};
pub use sparse::{SparseMatrix, SparseVector};
