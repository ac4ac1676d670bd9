//! Transposed matrix view

use numeral_core::{Matrix, MatrixIndices, MatrixMut, MatrixSize};

use crate::base::matrix_eq;

/// Matrix view swapping rows and columns of its base
#[derive(Debug, Clone)]
pub struct TransposedMatrix<B> {
    base: B,
}

impl<B: Matrix> TransposedMatrix<B> {
    pub fn new(base: B) -> Self {
        Self { base }
    }

    pub fn into_base(self) -> B {
        self.base
    }
}

impl<B: Matrix> Matrix for TransposedMatrix<B> {
    type Element = B::Element;

    fn size(&self) -> MatrixSize {
        self.base.size().transposed()
    }

    fn direct_get(&self, index: MatrixIndices) -> B::Element {
        self.base.direct_get(index.transposed())
    }

    fn is_mutable(&self) -> bool {
        self.base.is_mutable()
    }
}

impl<B: MatrixMut> MatrixMut for TransposedMatrix<B> {
    fn direct_set(&mut self, index: MatrixIndices, value: B::Element) {
        self.base.direct_set(index.transposed(), value);
    }
}

impl<B: Matrix, M: Matrix<Element = B::Element>> PartialEq<M> for TransposedMatrix<B> {
    fn eq(&self, other: &M) -> bool {
        matrix_eq(self, other)
    }
}
