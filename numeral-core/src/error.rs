//! Error types for numeral operations

use crate::kind::{CapabilityLevel, Representation};
use crate::indices::MatrixIndices;

/// Errors that can occur during numeral operations
///
/// Every variant is a contract violation detected at the call that
/// triggered it; nothing is retried or substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralError {
    /// Vector index outside `0..len`
    IndexOutOfBounds { index: usize, len: usize },
    /// Matrix coordinate outside the matrix size
    MatrixIndexOutOfBounds {
        index: MatrixIndices,
        size: MatrixIndices,
    },
    /// Matrix size that is empty in exactly one dimension
    InvalidShape { rows: usize, cols: usize },
    /// Vector lengths disagree
    SizeMismatch { expected: usize, got: usize },
    /// Matrix sizes disagree
    ShapeMismatch {
        expected: MatrixIndices,
        got: MatrixIndices,
    },
    /// A boxed value does not carry the structure's representation
    TypeMismatch {
        expected: Representation,
        got: Representation,
    },
    /// No capability is registered for the representation
    Unregistered { representation: Representation },
    /// A capability is registered but below the level the operation needs
    Unsupported {
        representation: Representation,
        required: CapabilityLevel,
        available: CapabilityLevel,
    },
    /// Write attempted through a structure that is not mutable
    NotMutable,
    /// Matrix has no inverse
    SingularMatrix,
    /// Integer or fixed-point division by zero
    DivisionByZero,
    /// Unknown rounding policy code
    InvalidRoundingMode(u8),
    /// Unknown representation tag code
    InvalidRepresentation(u8),
    /// Malformed format string
    InvalidFormat(&'static str),
    /// Malformed decimal literal
    InvalidDecimal,
}

/// Error categories for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad index or bad size
    OutOfRange,
    /// Operand sizes disagree
    ShapeMismatch,
    /// Boxed value of the wrong representation
    TypeMismatch,
    /// Missing or insufficient capability, or an operation the structure refuses
    Capability,
    /// Malformed input value
    Argument,
}

impl NumeralError {
    /// Get the category this error belongs to
    pub const fn category(&self) -> ErrorCategory {
        match self {
            NumeralError::IndexOutOfBounds { .. }
            | NumeralError::MatrixIndexOutOfBounds { .. }
            | NumeralError::InvalidShape { .. } => ErrorCategory::OutOfRange,
            NumeralError::SizeMismatch { .. } | NumeralError::ShapeMismatch { .. } => {
                ErrorCategory::ShapeMismatch
            }
            NumeralError::TypeMismatch { .. } | NumeralError::InvalidRepresentation(_) => {
                ErrorCategory::TypeMismatch
            }
            NumeralError::Unregistered { .. }
            | NumeralError::Unsupported { .. }
            | NumeralError::NotMutable
            | NumeralError::SingularMatrix
            | NumeralError::InvalidRoundingMode(_) => ErrorCategory::Capability,
            NumeralError::DivisionByZero
            | NumeralError::InvalidFormat(_)
            | NumeralError::InvalidDecimal => ErrorCategory::Argument,
        }
    }
}

impl core::fmt::Display for NumeralError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NumeralError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            NumeralError::MatrixIndexOutOfBounds { index, size } => {
                write!(f, "indices {index} out of bounds for size {size}")
            }
            NumeralError::InvalidShape { rows, cols } => {
                write!(f, "invalid matrix size {rows}x{cols}: empty in one dimension only")
            }
            NumeralError::SizeMismatch { expected, got } => {
                write!(f, "size mismatch: expected {expected}, got {got}")
            }
            NumeralError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected}, got {got}")
            }
            NumeralError::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            NumeralError::Unregistered { representation } => {
                write!(f, "no capability registered for {representation}")
            }
            NumeralError::Unsupported {
                representation,
                required,
                available,
            } => write!(
                f,
                "operation not supported for {representation}: requires {required}, capability is {available}"
            ),
            NumeralError::NotMutable => write!(f, "structure is not mutable"),
            NumeralError::SingularMatrix => write!(f, "matrix is singular"),
            NumeralError::DivisionByZero => write!(f, "division by zero"),
            NumeralError::InvalidRoundingMode(code) => {
                write!(f, "unrecognized rounding mode {code}")
            }
            NumeralError::InvalidRepresentation(code) => {
                write!(f, "unrecognized representation tag {code}")
            }
            NumeralError::InvalidFormat(reason) => write!(f, "invalid format string: {reason}"),
            NumeralError::InvalidDecimal => write!(f, "invalid decimal literal"),
        }
    }
}

impl core::error::Error for NumeralError {}

/// Result type for numeral operations
pub type Result<T> = core::result::Result<T, NumeralError>;
