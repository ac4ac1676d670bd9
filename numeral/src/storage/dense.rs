//! Dense storage: one contiguous, owned buffer sized to the structure

use std::fmt;
use std::hash::{Hash, Hasher};

use numeral_core::{
    check_matrix_size, check_same_len, Matrix, MatrixIndices, MatrixMut, MatrixSize, Numeral,
    NumeralError, Result, Vector, VectorMut,
};

use crate::base::{matrix_eq, matrix_hash, vector_eq, vector_hash};
use crate::format::{write_matrix, write_vector, FormatSpec};
use crate::registry::registry;

/// Owned, fixed-length vector of numerals
#[derive(Debug, Clone)]
pub struct DenseVector<T> {
    data: Vec<T>,
}

impl<T: Numeral> DenseVector<T> {
    /// Vector of `len` all-zero-bits elements
    pub fn zero(len: usize) -> Self {
        Self {
            data: vec![T::zeroed(); len],
        }
    }

    /// Vector of `len` copies of `value`
    pub fn filled(len: usize, value: T) -> Self {
        Self {
            data: vec![value; len],
        }
    }

    /// Vector holding exactly the given values
    pub fn pack<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self {
            data: values.into_iter().collect(),
        }
    }

    /// Take ownership of a buffer without copying
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Copy a slice into a new vector
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            data: values.to_vec(),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Numeral> Vector for DenseVector<T> {
    type Element = T;

    fn len(&self) -> usize {
        self.data.len()
    }

    fn direct_get(&self, index: usize) -> T {
        self.data[index]
    }

    fn is_mutable(&self) -> bool {
        true
    }

    fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl<T: Numeral> VectorMut for DenseVector<T> {
    fn direct_set(&mut self, index: usize, value: T) {
        self.data[index] = value;
    }
}

impl<T: Numeral> FromIterator<T> for DenseVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::pack(iter)
    }
}

impl<T: Numeral, V: Vector<Element = T>> PartialEq<V> for DenseVector<T> {
    fn eq(&self, other: &V) -> bool {
        vector_eq(self, other)
    }
}

impl<T: Numeral> Hash for DenseVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(vector_hash(self));
    }
}

impl<T: Numeral> fmt::Display for DenseVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vector(f, self, &FormatSpec::default())
    }
}

/// Owned matrix stored row-major
#[derive(Debug, Clone)]
pub struct DenseMatrix<T> {
    size: MatrixSize,
    data: Vec<T>,
}

impl<T: Numeral> DenseMatrix<T> {
    /// Matrix of all-zero-bits elements
    pub fn zero(rows: usize, cols: usize) -> Result<Self> {
        let size = check_matrix_size(rows, cols)?;
        Ok(Self {
            size,
            data: vec![T::zeroed(); size.area()],
        })
    }

    /// Matrix with every cell set to `value`
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self> {
        let size = check_matrix_size(rows, cols)?;
        Ok(Self {
            size,
            data: vec![value; size.area()],
        })
    }

    /// Matrix from row-major values; the count must equal `rows * cols`
    pub fn pack<I: IntoIterator<Item = T>>(rows: usize, cols: usize, values: I) -> Result<Self> {
        Self::from_vec(rows, cols, values.into_iter().collect())
    }

    /// Take ownership of a row-major buffer without copying
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let size = check_matrix_size(rows, cols)?;
        check_same_len(size.area(), data.len())?;
        Ok(Self { size, data })
    }

    /// Copy a row-major slice into a new matrix
    pub fn from_slice(rows: usize, cols: usize, values: &[T]) -> Result<Self> {
        Self::from_vec(rows, cols, values.to_vec())
    }

    /// Matrix from a sequence of equally long rows
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
    {
        let mut data = Vec::new();
        let mut count = 0;
        let mut cols = None;
        for row in rows {
            let row = row.as_ref();
            match cols {
                None => cols = Some(row.len()),
                Some(expected) => check_same_len(expected, row.len())?,
            }
            data.extend_from_slice(row);
            count += 1;
        }
        Self::from_vec(count, cols.unwrap_or(0), data)
    }

    /// Square identity matrix built from the capability's zero and one
    pub fn identity(n: usize) -> Result<Self> {
        let natural = registry().natural::<T>()?;
        let mut matrix = Self::filled(n, n, natural.zero())?;
        for i in 0..n {
            matrix.direct_set(MatrixIndices::new(i, i), natural.one());
        }
        Ok(matrix)
    }

    /// Row-major view of the cells
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> Result<&[T]> {
        if row >= self.size.row {
            return Err(NumeralError::IndexOutOfBounds {
                index: row,
                len: self.size.row,
            });
        }
        let start = row * self.size.col;
        Ok(&self.data[start..start + self.size.col])
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Numeral> Matrix for DenseMatrix<T> {
    type Element = T;

    fn size(&self) -> MatrixSize {
        self.size
    }

    fn direct_get(&self, index: MatrixIndices) -> T {
        self.data[self.size.offset_of(index)]
    }

    fn is_mutable(&self) -> bool {
        true
    }

    fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl<T: Numeral> MatrixMut for DenseMatrix<T> {
    fn direct_set(&mut self, index: MatrixIndices, value: T) {
        let offset = self.size.offset_of(index);
        self.data[offset] = value;
    }
}

impl<T: Numeral, M: Matrix<Element = T>> PartialEq<M> for DenseMatrix<T> {
    fn eq(&self, other: &M) -> bool {
        matrix_eq(self, other)
    }
}

impl<T: Numeral> Hash for DenseMatrix<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(matrix_hash(self));
    }
}

impl<T: Numeral> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_matrix(f, self, &FormatSpec::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numeral_core::Decimal;

    #[test]
    fn test_vector_factories() {
        assert_eq!(DenseVector::<i32>::zero(3).as_slice(), &[0, 0, 0]);
        assert_eq!(DenseVector::filled(2, 1.5f32).as_slice(), &[1.5, 1.5]);
        assert_eq!(DenseVector::pack([1u8, 2, 3]).len(), 3);
        assert_eq!(DenseVector::<Decimal>::zero(1).get(0), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_vector_bounds_checks() {
        let mut v = DenseVector::pack([1i64, 2, 3]);
        assert_eq!(v.get(2), Ok(3));
        assert_eq!(
            v.get(3),
            Err(NumeralError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(v.set(1, 9), Ok(()));
        assert_eq!(v.as_slice(), &[1, 9, 3]);
        assert!(v.set(5, 0).is_err());
    }

    #[test]
    fn test_vector_equality() {
        let a = DenseVector::pack([1, 2, 3]);
        let b = DenseVector::from_slice(&[1, 2, 3]);
        let c = DenseVector::pack([1, 2, 3, 0]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(DenseVector::<i32>::zero(2), DenseVector::<i32>::zero(3));
        assert_eq!(vector_hash(&a), vector_hash(&b));
        // Float elements keep their own equality
        assert_ne!(DenseVector::pack([f64::NAN]), DenseVector::pack([f64::NAN]));
    }

    #[test]
    fn test_assign() {
        let mut target = DenseVector::<u16>::zero(3);
        let source = DenseVector::pack([4u16, 5, 6]);
        target.assign(&source).unwrap();
        assert_eq!(target, source);
        assert_eq!(
            target.assign(&DenseVector::pack([1u16])),
            Err(NumeralError::SizeMismatch {
                expected: 3,
                got: 1
            })
        );
    }

    #[test]
    fn test_matrix_shapes() {
        assert!(DenseMatrix::<f64>::zero(0, 0).is_ok());
        assert_eq!(
            DenseMatrix::<f64>::zero(0, 3).err(),
            Some(NumeralError::InvalidShape { rows: 0, cols: 3 })
        );
        assert!(DenseMatrix::pack(2, 2, [1, 2, 3]).is_err());
        assert!(DenseMatrix::from_rows([vec![1, 2], vec![3]]).is_err());

        let m = DenseMatrix::from_rows([[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(m.size(), MatrixIndices::new(2, 3));
        assert_eq!(m.get(MatrixIndices::new(1, 0)), Ok(4));
        assert_eq!(m.row(1), Ok(&[4, 5, 6][..]));
        assert_eq!(
            m.get(MatrixIndices::new(2, 0)),
            Err(NumeralError::MatrixIndexOutOfBounds {
                index: MatrixIndices::new(2, 0),
                size: MatrixIndices::new(2, 3),
            })
        );
    }

    #[test]
    fn test_identity_and_equality() {
        let identity = DenseMatrix::<f64>::identity(2).unwrap();
        let expected = DenseMatrix::from_rows([[1.0, 0.0], [0.0, 1.0]]).unwrap();
        assert_eq!(identity, expected);
        assert_eq!(matrix_hash(&identity), matrix_hash(&expected));
        assert_ne!(identity, DenseMatrix::<f64>::identity(3).unwrap());
        assert_eq!(identity.to_string(), "[1, 0; 0, 1]");
    }

    #[test]
    fn test_matrix_assign() {
        let mut target = DenseMatrix::<i8>::zero(2, 2).unwrap();
        let source = DenseMatrix::from_rows([[1i8, -2], [3, -4]]).unwrap();
        target.assign(&source).unwrap();
        assert_eq!(target, source);

        let transposed_shape = DenseMatrix::<i8>::zero(1, 4).unwrap();
        assert_eq!(
            target.assign(&transposed_shape),
            Err(NumeralError::ShapeMismatch {
                expected: MatrixIndices::new(2, 2),
                got: MatrixIndices::new(1, 4),
            })
        );
        assert_eq!(target, source);
    }

    #[test]
    fn test_boxed_writes_check_representation() {
        use numeral_core::{
            BoxedMatrix, BoxedMatrixMut, BoxedVectorMut, Representation, Scalar,
        };

        let mut v = DenseVector::<u32>::zero(2);
        let boxed: &mut dyn BoxedVectorMut = &mut v;
        assert_eq!(boxed.set_boxed(1, Scalar::U32(7)), Ok(()));
        assert_eq!(
            boxed.set_boxed(0, Scalar::I32(7)),
            Err(NumeralError::TypeMismatch {
                expected: Representation::U32,
                got: Representation::I32,
            })
        );
        assert_eq!(v.as_slice(), &[0, 7]);

        let mut m = DenseMatrix::<f64>::zero(2, 2).unwrap();
        let boxed: &mut dyn BoxedMatrixMut = &mut m;
        assert_eq!(boxed.dimensions(), MatrixIndices::new(2, 2));
        assert_eq!(boxed.representation(), Representation::F64);
        assert!(boxed.writable());
        assert_eq!(boxed.set_boxed(MatrixIndices::new(1, 0), Scalar::F64(2.5)), Ok(()));
        assert_eq!(
            boxed.set_boxed(MatrixIndices::new(0, 0), Scalar::F32(1.0)),
            Err(NumeralError::TypeMismatch {
                expected: Representation::F64,
                got: Representation::F32,
            })
        );
        assert!(boxed.set_boxed(MatrixIndices::new(2, 0), Scalar::F64(1.0)).is_err());
        assert_eq!(boxed.get_boxed(MatrixIndices::new(1, 0)), Ok(Scalar::F64(2.5)));
        assert_eq!(m.as_slice(), &[0.0, 0.0, 2.5, 0.0]);
    }
}
