//! Typed views over boxed structures

use core::marker::PhantomData;

use numeral_core::{
    BoxedMatrix, BoxedVector, Matrix, MatrixIndices, MatrixSize, Numeral, Representation, Vector,
};

/// Reads a boxed vector as elements of `T`
///
/// Every element is converted numerically on access. The view is always
/// read-only: the conversion has no known inverse.
pub struct CastVector<'a, T> {
    base: &'a dyn BoxedVector,
    _element: PhantomData<fn() -> T>,
}

impl<'a, T: Numeral> CastVector<'a, T> {
    pub fn new(base: &'a dyn BoxedVector) -> Self {
        Self {
            base,
            _element: PhantomData,
        }
    }

    /// Representation stored by the base
    pub fn source_representation(&self) -> Representation {
        self.base.representation()
    }
}

impl<T> Clone for CastVector<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CastVector<'_, T> {}

impl<T: Numeral> Vector for CastVector<'_, T> {
    type Element = T;

    fn len(&self) -> usize {
        self.base.dimension()
    }

    fn direct_get(&self, index: usize) -> T {
        T::from_scalar(self.base.direct_get_boxed(index))
    }
}

/// Reads a boxed matrix as elements of `T`
pub struct CastMatrix<'a, T> {
    base: &'a dyn BoxedMatrix,
    _element: PhantomData<fn() -> T>,
}

impl<'a, T: Numeral> CastMatrix<'a, T> {
    pub fn new(base: &'a dyn BoxedMatrix) -> Self {
        Self {
            base,
            _element: PhantomData,
        }
    }

    pub fn source_representation(&self) -> Representation {
        self.base.representation()
    }
}

impl<T> Clone for CastMatrix<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CastMatrix<'_, T> {}

impl<T: Numeral> Matrix for CastMatrix<'_, T> {
    type Element = T;

    fn size(&self) -> MatrixSize {
        self.base.dimensions()
    }

    fn direct_get(&self, index: MatrixIndices) -> T {
        T::from_scalar(self.base.direct_get_boxed(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DenseMatrix, DenseVector};
    use numeral_core::VectorMut;

    #[test]
    fn test_cast_vector_converts_on_read() {
        let mut source = DenseVector::pack([1.9f64, -2.5, 300.0]);
        {
            let as_i32 = CastVector::<i32>::new(&source);
            assert_eq!(as_i32.to_vec(), vec![1, -2, 300]);
            assert_eq!(as_i32.source_representation(), Representation::F64);
            assert!(!as_i32.is_mutable());
            let as_u8 = CastVector::<u8>::new(&source);
            assert_eq!(as_u8.get(2), Ok(255));
        }
        source.set(0, 7.2).unwrap();
        let as_i32 = CastVector::<i32>::new(&source);
        assert_eq!(as_i32.get(0), Ok(7));
    }

    #[test]
    fn test_cast_matrix() {
        let source = DenseMatrix::from_rows([[1i8, -2], [3, 4]]).unwrap();
        let view = CastMatrix::<f32>::new(&source);
        let copy = view;
        assert_eq!(copy.size(), MatrixIndices::new(2, 2));
        assert_eq!(view.get(MatrixIndices::new(0, 1)), Ok(-2.0));
        assert!(view.get(MatrixIndices::new(2, 1)).is_err());
        assert!(!view.is_mutable());
    }
}
