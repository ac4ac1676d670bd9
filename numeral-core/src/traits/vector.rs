//! Vector contracts
//!
//! [`Vector`] is the read side, [`VectorMut`] adds writes. Implementors
//! supply only the unchecked `direct_*` accessors; bounds checks,
//! mutability checks and bulk assignment are provided once here.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::error::{NumeralError, Result};
use crate::traits::element::Numeral;
use crate::validation::{check_index, check_same_len};

/// Fixed-length, indexable sequence of numerals
pub trait Vector {
    /// The element type stored in this vector
    type Element: Numeral;

    /// Number of elements
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index` without bounds checking
    ///
    /// Callers guarantee `index < self.len()`.
    fn direct_get(&self, index: usize) -> Self::Element;

    /// Element at `index`
    fn get(&self, index: usize) -> Result<Self::Element> {
        check_index(index, self.len())?;
        Ok(self.direct_get(index))
    }

    /// Whether writes through this vector are accepted
    fn is_mutable(&self) -> bool {
        false
    }

    /// Iterate elements in index order
    fn iter(&self) -> Elements<'_, Self>
    where
        Self: Sized,
    {
        Elements::new(self)
    }

    /// Copy the elements out
    #[cfg(feature = "alloc")]
    fn to_vec(&self) -> Vec<Self::Element> {
        (0..self.len()).map(|i| self.direct_get(i)).collect()
    }
}

/// Vector that accepts element writes
pub trait VectorMut: Vector {
    /// Store `value` at `index` without bounds or mutability checks
    fn direct_set(&mut self, index: usize, value: Self::Element);

    /// Store `value` at `index`
    fn set(&mut self, index: usize, value: Self::Element) -> Result<()> {
        check_index(index, self.len())?;
        if !self.is_mutable() {
            return Err(NumeralError::NotMutable);
        }
        self.direct_set(index, value);
        Ok(())
    }

    /// Copy every element of a same-length vector into this one
    fn assign(&mut self, other: &dyn Vector<Element = Self::Element>) -> Result<()> {
        check_same_len(self.len(), other.len())?;
        if !self.is_mutable() {
            return Err(NumeralError::NotMutable);
        }
        for i in 0..other.len() {
            self.direct_set(i, other.direct_get(i));
        }
        Ok(())
    }
}

/// Iterator over the elements of any vector
pub struct Elements<'a, V: Vector + ?Sized> {
    vector: &'a V,
    front: usize,
    back: usize,
}

impl<'a, V: Vector + ?Sized> Elements<'a, V> {
    pub fn new(vector: &'a V) -> Self {
        Self {
            vector,
            front: 0,
            back: vector.len(),
        }
    }
}

impl<V: Vector + ?Sized> Iterator for Elements<'_, V> {
    type Item = V::Element;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let value = self.vector.direct_get(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<V: Vector + ?Sized> DoubleEndedIterator for Elements<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.vector.direct_get(self.back))
    }
}

impl<V: Vector + ?Sized> ExactSizeIterator for Elements<'_, V> {}

impl<V: Vector + ?Sized> Vector for &V {
    type Element = V::Element;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn direct_get(&self, index: usize) -> Self::Element {
        (**self).direct_get(index)
    }

    fn is_mutable(&self) -> bool {
        false
    }
}

impl<V: Vector + ?Sized> Vector for &mut V {
    type Element = V::Element;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn direct_get(&self, index: usize) -> Self::Element {
        (**self).direct_get(index)
    }

    fn is_mutable(&self) -> bool {
        (**self).is_mutable()
    }
}

impl<V: VectorMut + ?Sized> VectorMut for &mut V {
    fn direct_set(&mut self, index: usize, value: Self::Element) {
        (**self).direct_set(index, value)
    }
}
