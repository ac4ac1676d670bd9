//! Boxed (non-generic) structural interfaces
//!
//! These traits expose a vector or matrix without naming its element
//! type: values travel as [`Scalar`] and carry their representation tag.
//! Every typed structure gets them through blanket implementations.

use crate::error::{NumeralError, Result};
use crate::indices::{MatrixIndices, MatrixSize};
use crate::kind::Representation;
use crate::scalar::Scalar;
use crate::traits::element::Numeral;
use crate::traits::matrix::{Matrix, MatrixMut};
use crate::traits::vector::{Vector, VectorMut};

/// Vector viewed without its element type
pub trait BoxedVector {
    /// Number of elements
    fn dimension(&self) -> usize;

    /// Representation of every element
    fn representation(&self) -> Representation;

    /// Boxed element at `index` without bounds checking
    fn direct_get_boxed(&self, index: usize) -> Scalar;

    /// Boxed element at `index`
    fn get_boxed(&self, index: usize) -> Result<Scalar>;

    /// Whether the underlying vector accepts writes
    fn writable(&self) -> bool;
}

/// Boxed vector that accepts writes of its own representation
pub trait BoxedVectorMut: BoxedVector {
    /// Store a boxed value; its representation must match the vector's
    fn set_boxed(&mut self, index: usize, value: Scalar) -> Result<()>;
}

/// Matrix viewed without its element type
pub trait BoxedMatrix {
    /// Size as `(rows, cols)`
    fn dimensions(&self) -> MatrixSize;

    /// Representation of every element
    fn representation(&self) -> Representation;

    /// Boxed element at `index` without bounds checking
    fn direct_get_boxed(&self, index: MatrixIndices) -> Scalar;

    /// Boxed element at `index`
    fn get_boxed(&self, index: MatrixIndices) -> Result<Scalar>;

    /// Whether the underlying matrix accepts writes
    fn writable(&self) -> bool;
}

/// Boxed matrix that accepts writes of its own representation
pub trait BoxedMatrixMut: BoxedMatrix {
    /// Store a boxed value; its representation must match the matrix's
    fn set_boxed(&mut self, index: MatrixIndices, value: Scalar) -> Result<()>;
}

fn unbox<T: Numeral>(value: Scalar) -> Result<T> {
    T::exact_from_scalar(value).ok_or(NumeralError::TypeMismatch {
        expected: T::REPRESENTATION,
        got: value.representation(),
    })
}

impl<V: Vector + ?Sized> BoxedVector for V {
    fn dimension(&self) -> usize {
        self.len()
    }

    fn representation(&self) -> Representation {
        V::Element::REPRESENTATION
    }

    fn direct_get_boxed(&self, index: usize) -> Scalar {
        self.direct_get(index).into_scalar()
    }

    fn get_boxed(&self, index: usize) -> Result<Scalar> {
        self.get(index).map(Numeral::into_scalar)
    }

    fn writable(&self) -> bool {
        self.is_mutable()
    }
}

impl<V: VectorMut + ?Sized> BoxedVectorMut for V {
    fn set_boxed(&mut self, index: usize, value: Scalar) -> Result<()> {
        let value = unbox::<V::Element>(value)?;
        self.set(index, value)
    }
}

impl<M: Matrix + ?Sized> BoxedMatrix for M {
    fn dimensions(&self) -> MatrixSize {
        self.size()
    }

    fn representation(&self) -> Representation {
        M::Element::REPRESENTATION
    }

    fn direct_get_boxed(&self, index: MatrixIndices) -> Scalar {
        self.direct_get(index).into_scalar()
    }

    fn get_boxed(&self, index: MatrixIndices) -> Result<Scalar> {
        self.get(index).map(Numeral::into_scalar)
    }

    fn writable(&self) -> bool {
        self.is_mutable()
    }
}

impl<M: MatrixMut + ?Sized> BoxedMatrixMut for M {
    fn set_boxed(&mut self, index: MatrixIndices, value: Scalar) -> Result<()> {
        let value = unbox::<M::Element>(value)?;
        self.set(index, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_boxed() {
        let idx = MatrixIndices::new(4, 9);
        let boxed: &dyn BoxedVector = &idx;
        assert_eq!(boxed.dimension(), 2);
        assert_eq!(boxed.representation(), Representation::Usize);
        assert_eq!(boxed.get_boxed(1), Ok(Scalar::Usize(9)));
        assert!(!boxed.writable());
    }

    #[test]
    fn test_unbox_mismatch() {
        assert_eq!(unbox::<i32>(Scalar::I32(5)), Ok(5));
        assert_eq!(
            unbox::<i32>(Scalar::F64(5.0)),
            Err(NumeralError::TypeMismatch {
                expected: Representation::I32,
                got: Representation::F64,
            })
        );
    }
}
