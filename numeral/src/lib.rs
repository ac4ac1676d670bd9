//! Numeral - Generic Numeric Capabilities, Vectors and Matrices
//!
//! This library maps every primitive numeral representation to a
//! capability object implementing the algebra that representation
//! supports, and builds dense, sparse and view-based vectors and matrices
//! whose algorithms are written once against those capabilities.
//!
//! ## Architecture
//!
//! Numeral follows a definitions/implementation separation:
//!
//! - **numeral-core**: representation tags, capability and structural
//!   contracts, validation (no global state)
//! - **numeral**: capability objects, the registry, storage, views and
//!   algorithms
//!
//! ## Quick Start
//!
//! ```rust
//! use numeral::{ops, DenseMatrix, DenseVector, MatrixIndices, Matrix};
//!
//! fn example() -> numeral::Result<()> {
//!     let a = DenseVector::pack([1, 2, 3]);
//!     let b = DenseVector::pack([4, 5, 6]);
//!     assert_eq!(ops::vector::dot(&a, &b)?, 32);
//!
//!     let m = DenseMatrix::from_rows([[1.0, 2.0], [3.0, 4.0]])?;
//!     let mut inverse = DenseMatrix::zero(2, 2)?;
//!     ops::matrix::invert(&m, &mut inverse)?;
//!     assert!((inverse.get(MatrixIndices::new(0, 0))? + 2.0f64).abs() < 1e-12);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Capability levels
//!
//! | Representation            | Level   |
//! |---------------------------|---------|
//! | `u8`..`u64`, `usize`      | Natural |
//! | `i8`..`i64`               | Integer |
//! | `f32`, `f64`, `Decimal`   | Real    |
//!
//! Operations needing a higher level than the element provides fail with
//! [`NumeralError::Unsupported`].

// Re-export core abstractions
pub use numeral_core::{
    // Representations
    CapabilityLevel, Decimal, NumberKind, Numeral, Representation, RoundingMode, Scalar,
    // Capability contracts
    Capability, Integer, Natural, Real,
    // Structural contracts
    BoxedMatrix, BoxedMatrixMut, BoxedVector, BoxedVectorMut, Cells, Elements, Matrix,
    MatrixIndices, MatrixMut, MatrixSize, Vector, VectorMut,
    // Error handling
    ErrorCategory, NumeralError, Result,
};

pub mod base;
pub mod capability;
pub mod dispatch;
pub mod format;
pub mod ops;
pub mod registry;
pub mod storage;
pub mod view;

// Public exports
pub use capability::{DecimalCapability, FloatCapability, SignedCapability, UnsignedCapability};
pub use format::FormatSpec;
pub use registry::{CapabilityEntry, Registry, RegistryBuilder};
pub use storage::{
    ArrayMatrix, ArrayMode, ArrayVector, Comparer, DenseMatrix, DenseVector, SparseMatrix,
    SparseVector,
};
pub use view::{
    Axis, CastMatrix, CastVector, MappedMatrix, MappedVector, MatrixLine, TransposedMatrix,
};
