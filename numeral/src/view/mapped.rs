//! Element-mapping views
//!
//! A mapped view applies `forward` to every base element it reads. When a
//! `reverse` function is also supplied and the base is mutable, writes are
//! mapped back through `reverse` into the base. Without `reverse` the view
//! is read-only whatever its base.

use core::fmt;
use core::marker::PhantomData;

use numeral_core::{Matrix, MatrixIndices, MatrixMut, MatrixSize, Numeral, Vector, VectorMut};

use crate::base::{matrix_eq, vector_eq};

/// Vector view applying `forward` to every element of `B`
#[derive(Clone)]
pub struct MappedVector<B, O, F, R> {
    base: B,
    forward: F,
    reverse: Option<R>,
    _output: PhantomData<fn() -> O>,
}

impl<B, O, F> MappedVector<B, O, F, fn(O) -> <B as Vector>::Element>
where
    B: Vector,
    O: Numeral,
    F: Fn(B::Element) -> O,
{
    /// Read-only mapping
    pub fn new(base: B, forward: F) -> Self {
        Self {
            base,
            forward,
            reverse: None,
            _output: PhantomData,
        }
    }
}

impl<B, O, F, R> MappedVector<B, O, F, R>
where
    B: Vector,
    O: Numeral,
    F: Fn(B::Element) -> O,
    R: Fn(O) -> B::Element,
{
    /// Mapping that writes back through `reverse`
    pub fn with_reverse(base: B, forward: F, reverse: R) -> Self {
        Self {
            base,
            forward,
            reverse: Some(reverse),
            _output: PhantomData,
        }
    }

    pub fn has_reverse(&self) -> bool {
        self.reverse.is_some()
    }

    pub fn into_base(self) -> B {
        self.base
    }
}

impl<B, O, F, R> Vector for MappedVector<B, O, F, R>
where
    B: Vector,
    O: Numeral,
    F: Fn(B::Element) -> O,
    R: Fn(O) -> B::Element,
{
    type Element = O;

    fn len(&self) -> usize {
        self.base.len()
    }

    fn direct_get(&self, index: usize) -> O {
        (self.forward)(self.base.direct_get(index))
    }

    fn is_mutable(&self) -> bool {
        self.reverse.is_some() && self.base.is_mutable()
    }
}

impl<B, O, F, R> VectorMut for MappedVector<B, O, F, R>
where
    B: VectorMut,
    O: Numeral,
    F: Fn(B::Element) -> O,
    R: Fn(O) -> B::Element,
{
    /// Ignored when the view has no reverse function
    fn direct_set(&mut self, index: usize, value: O) {
        if let Some(reverse) = &self.reverse {
            self.base.direct_set(index, reverse(value));
        }
    }
}

impl<B, O, F, R, V> PartialEq<V> for MappedVector<B, O, F, R>
where
    B: Vector,
    O: Numeral,
    F: Fn(B::Element) -> O,
    R: Fn(O) -> B::Element,
    V: Vector<Element = O>,
{
    fn eq(&self, other: &V) -> bool {
        vector_eq(self, other)
    }
}

/// Matrix view applying `forward` to every cell of `B`
#[derive(Clone)]
pub struct MappedMatrix<B, O, F, R> {
    base: B,
    forward: F,
    reverse: Option<R>,
    _output: PhantomData<fn() -> O>,
}

impl<B, O, F> MappedMatrix<B, O, F, fn(O) -> <B as Matrix>::Element>
where
    B: Matrix,
    O: Numeral,
    F: Fn(B::Element) -> O,
{
    /// Read-only mapping
    pub fn new(base: B, forward: F) -> Self {
        Self {
            base,
            forward,
            reverse: None,
            _output: PhantomData,
        }
    }
}

impl<B, O, F, R> MappedMatrix<B, O, F, R>
where
    B: Matrix,
    O: Numeral,
    F: Fn(B::Element) -> O,
    R: Fn(O) -> B::Element,
{
    /// Mapping that writes back through `reverse`
    pub fn with_reverse(base: B, forward: F, reverse: R) -> Self {
        Self {
            base,
            forward,
            reverse: Some(reverse),
            _output: PhantomData,
        }
    }

    pub fn has_reverse(&self) -> bool {
        self.reverse.is_some()
    }

    pub fn into_base(self) -> B {
        self.base
    }
}

impl<B, O, F, R> Matrix for MappedMatrix<B, O, F, R>
where
    B: Matrix,
    O: Numeral,
    F: Fn(B::Element) -> O,
    R: Fn(O) -> B::Element,
{
    type Element = O;

    fn size(&self) -> MatrixSize {
        self.base.size()
    }

    fn direct_get(&self, index: MatrixIndices) -> O {
        (self.forward)(self.base.direct_get(index))
    }

    fn is_mutable(&self) -> bool {
        self.reverse.is_some() && self.base.is_mutable()
    }
}

impl<B, O, F, R> MatrixMut for MappedMatrix<B, O, F, R>
where
    B: MatrixMut,
    O: Numeral,
    F: Fn(B::Element) -> O,
    R: Fn(O) -> B::Element,
{
    /// Ignored when the view has no reverse function
    fn direct_set(&mut self, index: MatrixIndices, value: O) {
        if let Some(reverse) = &self.reverse {
            self.base.direct_set(index, reverse(value));
        }
    }
}

impl<B, O, F, R, M> PartialEq<M> for MappedMatrix<B, O, F, R>
where
    B: Matrix,
    O: Numeral,
    F: Fn(B::Element) -> O,
    R: Fn(O) -> B::Element,
    M: Matrix<Element = O>,
{
    fn eq(&self, other: &M) -> bool {
        matrix_eq(self, other)
    }
}

impl<B: fmt::Debug, O, F, R> fmt::Debug for MappedVector<B, O, F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappedVector")
            .field("base", &self.base)
            .field("has_reverse", &self.reverse.is_some())
            .finish()
    }
}

impl<B: fmt::Debug, O, F, R> fmt::Debug for MappedMatrix<B, O, F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappedMatrix")
            .field("base", &self.base)
            .field("has_reverse", &self.reverse.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DenseMatrix, DenseVector};
    use numeral_core::NumeralError;

    #[test]
    fn test_forward_only_is_read_only() {
        let mut base = DenseVector::pack([1i32, 2, 3]);
        assert!(base.is_mutable());

        let mut doubled = MappedVector::new(&mut base, |x: i32| (x * 2) as f64);
        assert!(!doubled.is_mutable());
        assert_eq!(doubled.get(2), Ok(6.0));
        assert_eq!(doubled.set(0, 10.0), Err(NumeralError::NotMutable));
    }

    #[test]
    fn test_reverse_writes_back() {
        let mut base = DenseVector::pack([1i32, 2, 3]);
        {
            let mut halves = MappedVector::with_reverse(
                &mut base,
                |x: i32| x as f64 / 2.0,
                |y: f64| (y * 2.0) as i32,
            );
            assert!(halves.is_mutable());
            halves.set(1, 4.0).unwrap();
            assert_eq!(halves.get(1), Ok(4.0));
        }
        assert_eq!(base.as_slice(), &[1, 8, 3]);
    }

    #[test]
    fn test_round_trip_through_lossy_reverse() {
        let mut base = DenseVector::pack([0u8; 2]);
        let mut view = MappedVector::with_reverse(&mut base, |x: u8| x as f32, |y: f32| y as u8);
        view.set(0, 2.7).unwrap();
        // forward(reverse(y)), not y
        assert_eq!(view.get(0), Ok(2.0));
    }

    #[test]
    fn test_shared_base_views_are_read_only_clones() {
        let base = DenseVector::pack([1i64, 2]);
        let negated = MappedVector::with_reverse(&base, |x: i64| -x, |y: i64| -y);
        assert!(!negated.is_mutable());
        let clone = negated.clone();
        assert_eq!(clone, DenseVector::pack([-1, -2]));
        assert!(format!("{clone:?}").contains("has_reverse: true"));
    }

    #[test]
    fn test_mapped_matrix() {
        let mut base = DenseMatrix::from_rows([[1u16, 2], [3, 4]]).unwrap();
        {
            let mut squared = MappedMatrix::with_reverse(
                &mut base,
                |x: u16| (x as u32) * (x as u32),
                |y: u32| (y as f64).sqrt() as u16,
            );
            assert_eq!(squared.get(MatrixIndices::new(1, 1)), Ok(16));
            squared.set(MatrixIndices::new(0, 0), 81).unwrap();
        }
        assert_eq!(base.get(MatrixIndices::new(0, 0)), Ok(9));

        let read_only = MappedMatrix::new(&mut base, |x: u16| x as i32);
        assert!(!read_only.is_mutable());
        assert_eq!(read_only.size(), MatrixIndices::new(2, 2));
    }
}
