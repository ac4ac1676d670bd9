//! Sparse storage: ordered maps of non-default cells
//!
//! A sparse structure never stores an entry equal (per its [`Comparer`])
//! to its default value. Reads of absent keys return the default; writes
//! of the default remove the key. Memory is proportional to the number of
//! non-default cells.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use numeral_core::{
    check_index, check_indices, check_matrix_size, Matrix, MatrixIndices, MatrixMut, MatrixSize,
    Numeral, Result, Vector, VectorMut,
};

use crate::base::{matrix_eq, matrix_hash, vector_eq, vector_hash};
use crate::format::{write_matrix, write_vector, FormatSpec};
use crate::storage::Comparer;

/// Vector storing only its non-default elements
#[derive(Debug, Clone)]
pub struct SparseVector<T> {
    len: usize,
    default: T,
    comparer: Comparer<T>,
    entries: BTreeMap<usize, T>,
}

impl<T: Numeral> SparseVector<T> {
    /// Empty vector of `len` elements, all `default`
    pub fn new(len: usize, default: T) -> Self {
        Self {
            len,
            default,
            comparer: Comparer::natural(),
            entries: BTreeMap::new(),
        }
    }

    /// Empty vector whose default is all-zero bits
    pub fn zero(len: usize) -> Self {
        Self::new(len, T::zeroed())
    }

    /// Replace the comparer, dropping entries that now equal the default
    pub fn with_comparer(mut self, comparer: Comparer<T>) -> Self {
        let default = self.default;
        self.entries.retain(|_, value| !comparer.equals(*value, default));
        self.comparer = comparer;
        self
    }

    /// Seed entries; values equal to the default are skipped
    pub fn with_entries<I>(mut self, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        for (index, value) in entries {
            check_index(index, self.len)?;
            self.direct_set(index, value);
        }
        Ok(self)
    }

    pub fn default_value(&self) -> T {
        self.default
    }

    pub fn comparer(&self) -> &Comparer<T> {
        &self.comparer
    }

    /// Number of stored (non-default) entries
    pub fn non_default_count(&self) -> usize {
        self.entries.len()
    }

    /// Stored entries in index order
    pub fn entries(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.entries.iter().map(|(&index, &value)| (index, value))
    }
}

impl<T: Numeral> Vector for SparseVector<T> {
    type Element = T;

    fn len(&self) -> usize {
        self.len
    }

    fn direct_get(&self, index: usize) -> T {
        self.entries.get(&index).copied().unwrap_or(self.default)
    }

    fn is_mutable(&self) -> bool {
        true
    }
}

impl<T: Numeral> VectorMut for SparseVector<T> {
    fn direct_set(&mut self, index: usize, value: T) {
        if self.comparer.equals(value, self.default) {
            self.entries.remove(&index);
        } else {
            self.entries.insert(index, value);
        }
    }
}

impl<T: Numeral, V: Vector<Element = T>> PartialEq<V> for SparseVector<T> {
    fn eq(&self, other: &V) -> bool {
        vector_eq(self, other)
    }
}

impl<T: Numeral> Hash for SparseVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(vector_hash(self));
    }
}

impl<T: Numeral> fmt::Display for SparseVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vector(f, self, &FormatSpec::default())
    }
}

/// Matrix storing only its non-default cells
#[derive(Debug, Clone)]
pub struct SparseMatrix<T> {
    size: MatrixSize,
    default: T,
    comparer: Comparer<T>,
    entries: BTreeMap<MatrixIndices, T>,
}

impl<T: Numeral> SparseMatrix<T> {
    /// Empty matrix with every cell `default`
    pub fn new(rows: usize, cols: usize, default: T) -> Result<Self> {
        Ok(Self {
            size: check_matrix_size(rows, cols)?,
            default,
            comparer: Comparer::natural(),
            entries: BTreeMap::new(),
        })
    }

    /// Empty matrix whose default is all-zero bits
    pub fn zero(rows: usize, cols: usize) -> Result<Self> {
        Self::new(rows, cols, T::zeroed())
    }

    /// Replace the comparer, dropping entries that now equal the default
    pub fn with_comparer(mut self, comparer: Comparer<T>) -> Self {
        let default = self.default;
        self.entries.retain(|_, value| !comparer.equals(*value, default));
        self.comparer = comparer;
        self
    }

    /// Seed entries; values equal to the default are skipped
    pub fn with_entries<I>(mut self, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (MatrixIndices, T)>,
    {
        for (index, value) in entries {
            check_indices(index, self.size)?;
            self.direct_set(index, value);
        }
        Ok(self)
    }

    pub fn default_value(&self) -> T {
        self.default
    }

    pub fn comparer(&self) -> &Comparer<T> {
        &self.comparer
    }

    /// Number of stored (non-default) entries
    pub fn non_default_count(&self) -> usize {
        self.entries.len()
    }

    /// Stored entries in row-major order
    pub fn entries(&self) -> impl Iterator<Item = (MatrixIndices, T)> + '_ {
        self.entries.iter().map(|(&index, &value)| (index, value))
    }
}

impl<T: Numeral> Matrix for SparseMatrix<T> {
    type Element = T;

    fn size(&self) -> MatrixSize {
        self.size
    }

    fn direct_get(&self, index: MatrixIndices) -> T {
        self.entries.get(&index).copied().unwrap_or(self.default)
    }

    fn is_mutable(&self) -> bool {
        true
    }
}

impl<T: Numeral> MatrixMut for SparseMatrix<T> {
    fn direct_set(&mut self, index: MatrixIndices, value: T) {
        if self.comparer.equals(value, self.default) {
            self.entries.remove(&index);
        } else {
            self.entries.insert(index, value);
        }
    }
}

impl<T: Numeral, M: Matrix<Element = T>> PartialEq<M> for SparseMatrix<T> {
    fn eq(&self, other: &M) -> bool {
        matrix_eq(self, other)
    }
}

impl<T: Numeral> Hash for SparseMatrix<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(matrix_hash(self));
    }
}

impl<T: Numeral> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_matrix(f, self, &FormatSpec::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DenseVector;
    use numeral_core::NumeralError;

    #[test]
    fn test_default_elision() {
        let mut v = SparseVector::new(5, 0i32);
        v.set(1, 7).unwrap();
        v.set(3, 9).unwrap();
        assert_eq!(v.non_default_count(), 2);

        v.set(1, 0).unwrap();
        assert_eq!(v.non_default_count(), 1);
        assert_eq!(v.get(1), Ok(0));
        assert_eq!(v.entries().collect::<Vec<_>>(), vec![(3, 9)]);
        assert_eq!(v, DenseVector::pack([0, 0, 0, 9, 0]));
    }

    #[test]
    fn test_entries_filtered_at_construction() {
        let v = SparseVector::new(4, 1.0f64)
            .with_entries([(0, 1.0), (1, 2.0), (2, 1.0)])
            .unwrap();
        assert_eq!(v.non_default_count(), 1);
        assert_eq!(v.to_vec(), vec![1.0, 2.0, 1.0, 1.0]);

        assert_eq!(
            SparseVector::new(2, 0u8).with_entries([(2, 1)]).err(),
            Some(NumeralError::IndexOutOfBounds { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_nan_default_uses_capability_equality() {
        let mut v = SparseVector::new(3, f64::NAN);
        v.set(0, f64::NAN).unwrap();
        assert_eq!(v.non_default_count(), 0);

        let mut exact = SparseVector::new(3, f64::NAN).with_comparer(Comparer::exact());
        exact.set(0, f64::NAN).unwrap();
        assert_eq!(exact.non_default_count(), 1);
    }

    #[test]
    fn test_custom_comparer_refilters() {
        let v = SparseVector::new(3, 0.0f32)
            .with_entries([(0, 0.0001), (1, 5.0)])
            .unwrap()
            .with_comparer(Comparer::custom(|a: f32, b: f32| (a - b).abs() < 1e-3));
        assert_eq!(v.non_default_count(), 1);
    }

    #[test]
    fn test_clone_snapshots_entries() {
        let mut original = SparseMatrix::zero(2, 2).unwrap();
        original.set(MatrixIndices::new(0, 1), 3i64).unwrap();
        let snapshot = original.clone();
        original.set(MatrixIndices::new(1, 1), 4).unwrap();

        assert_eq!(snapshot.non_default_count(), 1);
        assert_eq!(original.non_default_count(), 2);
        assert_eq!(snapshot.get(MatrixIndices::new(1, 1)), Ok(0));
        assert_eq!(format!("{:?}", snapshot.comparer()), "Comparer(natural)");
    }

    #[test]
    fn test_matrix_shape_and_equality() {
        assert!(SparseMatrix::<u32>::zero(3, 0).is_err());
        let m = SparseMatrix::zero(2, 2)
            .unwrap()
            .with_entries([(MatrixIndices::new(1, 0), 2u32)])
            .unwrap();
        let dense = crate::storage::DenseMatrix::from_rows([[0u32, 0], [2, 0]]).unwrap();
        assert_eq!(m, dense);
        assert_eq!(matrix_hash(&m), matrix_hash(&dense));
        assert_eq!(m.to_string(), "[0, 0; 2, 0]");
    }
}
