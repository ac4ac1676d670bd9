//! Row and column projections of a matrix

use numeral_core::{check_index, Matrix, MatrixIndices, MatrixMut, Result, Vector, VectorMut};

use crate::base::vector_eq;

/// Which matrix line a projection fixes
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

/// One fixed row or column of a matrix, seen as a vector
///
/// Reads and writes pass straight through to the base cell. Holding the
/// base as `&M` gives a read-only, cloneable view; `&mut M` gives a
/// writable one when the matrix itself is mutable.
#[derive(Debug, Clone)]
pub struct MatrixLine<B> {
    base: B,
    axis: Axis,
    fixed: usize,
}

impl<B: Matrix> MatrixLine<B> {
    /// Project line `fixed` along `axis`; fails if the line does not exist
    pub fn new(base: B, axis: Axis, fixed: usize) -> Result<Self> {
        let size = base.size();
        let bound = match axis {
            Axis::Row => size.row,
            Axis::Column => size.col,
        };
        check_index(fixed, bound)?;
        Ok(Self { base, axis, fixed })
    }

    pub fn row(base: B, row: usize) -> Result<Self> {
        Self::new(base, Axis::Row, row)
    }

    pub fn column(base: B, col: usize) -> Result<Self> {
        Self::new(base, Axis::Column, col)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn fixed(&self) -> usize {
        self.fixed
    }

    pub fn into_base(self) -> B {
        self.base
    }

    #[inline]
    fn cell(&self, index: usize) -> MatrixIndices {
        match self.axis {
            Axis::Row => MatrixIndices::new(self.fixed, index),
            Axis::Column => MatrixIndices::new(index, self.fixed),
        }
    }
}

impl<B: Matrix> Vector for MatrixLine<B> {
    type Element = B::Element;

    fn len(&self) -> usize {
        match self.axis {
            Axis::Row => self.base.cols(),
            Axis::Column => self.base.rows(),
        }
    }

    fn direct_get(&self, index: usize) -> B::Element {
        self.base.direct_get(self.cell(index))
    }

    fn is_mutable(&self) -> bool {
        self.base.is_mutable()
    }
}

impl<B: MatrixMut> VectorMut for MatrixLine<B> {
    fn direct_set(&mut self, index: usize, value: B::Element) {
        let cell = self.cell(index);
        self.base.direct_set(cell, value);
    }
}

impl<B: Matrix, V: Vector<Element = B::Element>> PartialEq<V> for MatrixLine<B> {
    fn eq(&self, other: &V) -> bool {
        vector_eq(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{ArrayMatrix, DenseMatrix, DenseVector};
    use numeral_core::NumeralError;

    fn sample() -> DenseMatrix<i32> {
        DenseMatrix::from_rows([[1, 2, 3], [4, 5, 6]]).unwrap()
    }

    #[test]
    fn test_projection_sizes() {
        let m = sample();
        let row = MatrixLine::row(&m, 1).unwrap();
        let col = MatrixLine::column(&m, 2).unwrap();
        assert_eq!(row, DenseVector::pack([4, 5, 6]));
        assert_eq!(col, DenseVector::pack([3, 6]));
        assert_eq!(row.len(), 3);
        assert_eq!(col.len(), 2);
    }

    #[test]
    fn test_out_of_range_line_fails_at_construction() {
        let m = sample();
        assert_eq!(
            MatrixLine::row(&m, 2).err().map(|e| e.category()),
            Some(numeral_core::ErrorCategory::OutOfRange)
        );
        assert_eq!(
            MatrixLine::column(&m, 3).err(),
            Some(NumeralError::IndexOutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_writes_pass_through() {
        let mut m = sample();
        {
            let mut col = MatrixLine::column(&mut m, 0).unwrap();
            assert!(col.is_mutable());
            col.set(1, 40).unwrap();
        }
        assert_eq!(m.get(MatrixIndices::new(1, 0)), Ok(40));

        let shared = MatrixLine::row(&m, 0).unwrap();
        assert!(!shared.is_mutable());
        let again = shared.clone();
        assert_eq!(again.get(0), Ok(1));
    }

    #[test]
    fn test_read_only_base_stays_read_only() {
        let frozen = ArrayMatrix::copy(2, 2, &[1u8, 2, 3, 4]).unwrap();
        let line = MatrixLine::row(&frozen, 1).unwrap();
        assert!(!line.is_mutable());
        assert_eq!(line.to_vec(), vec![3, 4]);
    }

    #[test]
    fn test_live_view_of_base() {
        let mut m = sample();
        m.set(MatrixIndices::new(0, 1), 20).unwrap();
        let row = MatrixLine::row(&m, 0).unwrap();
        assert_eq!(row.get(1), Ok(20));
    }

    #[test]
    fn test_assign_through_line() {
        let mut m = sample();
        {
            let mut row = MatrixLine::row(&mut m, 1).unwrap();
            row.assign(&DenseVector::pack([7, 8, 9])).unwrap();
            assert_eq!(
                row.assign(&DenseVector::pack([1, 2])),
                Err(NumeralError::SizeMismatch {
                    expected: 3,
                    got: 2
                })
            );
        }
        assert_eq!(m, DenseMatrix::from_rows([[1, 2, 3], [7, 8, 9]]).unwrap());
    }

    #[test]
    fn test_line_over_read_only_mapping_refuses_writes() {
        use crate::view::MappedMatrix;

        let mut m = sample();
        {
            let mut negated = MappedMatrix::new(&mut m, |x: i32| -x);
            assert_eq!(
                negated.assign(&DenseMatrix::<i32>::zero(2, 3).unwrap()),
                Err(NumeralError::NotMutable)
            );

            let mut line = MatrixLine::column(&mut negated, 1).unwrap();
            assert!(!line.is_mutable());
            assert_eq!(line.get(1), Ok(-5));
            assert_eq!(line.set(0, 99), Err(NumeralError::NotMutable));
            assert_eq!(
                line.assign(&DenseVector::pack([0, 0])),
                Err(NumeralError::NotMutable)
            );
        }
        assert_eq!(m, sample());
    }
}
