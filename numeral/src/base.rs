//! Structural equality and hashing shared by every storage type
//!
//! Equality requires the same size, then pointwise `==` of elements.
//! Hashing mixes the size and every element's `hash_bits` through a fixed
//! salt, so structurally equal values hash equally whatever their storage.

use numeral_core::{Matrix, MatrixIndices, Numeral as _, Vector};

/// Salt mixed into every structural hash
pub const HASH_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

#[inline]
fn mix(state: u64, bits: u64) -> u64 {
    (state.rotate_left(5) ^ bits).wrapping_mul(HASH_SALT)
}

/// Same length and pointwise equal elements
pub fn vector_eq<A, B>(left: &A, right: &B) -> bool
where
    A: Vector + ?Sized,
    B: Vector<Element = A::Element> + ?Sized,
{
    left.len() == right.len()
        && (0..left.len()).all(|i| left.direct_get(i) == right.direct_get(i))
}

/// Same size and pointwise equal elements
pub fn matrix_eq<A, B>(left: &A, right: &B) -> bool
where
    A: Matrix + ?Sized,
    B: Matrix<Element = A::Element> + ?Sized,
{
    let size = left.size();
    if size != right.size() {
        return false;
    }
    (0..size.row).all(|row| {
        (0..size.col).all(|col| {
            let index = MatrixIndices::new(row, col);
            left.direct_get(index) == right.direct_get(index)
        })
    })
}

/// Structural hash of a vector
pub fn vector_hash<V: Vector + ?Sized>(vector: &V) -> u64 {
    let mut state = mix(HASH_SALT, vector.len() as u64);
    for i in 0..vector.len() {
        state = mix(state, vector.direct_get(i).hash_bits());
    }
    state
}

/// Structural hash of a matrix
pub fn matrix_hash<M: Matrix + ?Sized>(matrix: &M) -> u64 {
    let size = matrix.size();
    let mut state = mix(mix(HASH_SALT, size.row as u64), size.col as u64);
    for row in 0..size.row {
        for col in 0..size.col {
            state = mix(state, matrix.direct_get(MatrixIndices::new(row, col)).hash_bits());
        }
    }
    state
}
