//! Element-wise and inner-product operations on vectors
//!
//! The closure forms work for any element types. The arithmetic forms
//! resolve the element's capability in the global registry and fail with
//! `Unregistered` or `Unsupported` when it is missing or too weak.

use numeral_core::{check_same_len, Numeral, NumeralError, Result, Vector, VectorMut};

use crate::registry::registry;

fn check_writable<D: Vector + ?Sized>(dest: &D) -> Result<()> {
    if !dest.is_mutable() {
        return Err(NumeralError::NotMutable);
    }
    Ok(())
}

/// `dest[i] = f(source[i])`
pub fn map<S, D, F>(source: &S, dest: &mut D, mut f: F) -> Result<()>
where
    S: Vector + ?Sized,
    D: VectorMut + ?Sized,
    F: FnMut(S::Element) -> D::Element,
{
    check_same_len(source.len(), dest.len())?;
    check_writable(dest)?;
    for i in 0..source.len() {
        dest.direct_set(i, f(source.direct_get(i)));
    }
    Ok(())
}

/// `dest[i] = f(left[i], right[i])`
pub fn combine<L, R, D, F>(left: &L, right: &R, dest: &mut D, mut f: F) -> Result<()>
where
    L: Vector + ?Sized,
    R: Vector + ?Sized,
    D: VectorMut + ?Sized,
    F: FnMut(L::Element, R::Element) -> D::Element,
{
    check_same_len(left.len(), right.len())?;
    check_same_len(left.len(), dest.len())?;
    check_writable(dest)?;
    for i in 0..left.len() {
        dest.direct_set(i, f(left.direct_get(i), right.direct_get(i)));
    }
    Ok(())
}

/// Sum of `mul(left[i], right[i])`, accumulated left to right from `zero`
pub fn dot_product_with<L, R, T, M, A>(
    left: &L,
    right: &R,
    mut mul: M,
    mut add: A,
    zero: T,
) -> Result<T>
where
    L: Vector + ?Sized,
    R: Vector + ?Sized,
    M: FnMut(L::Element, R::Element) -> T,
    A: FnMut(T, T) -> T,
{
    check_same_len(left.len(), right.len())?;
    let mut sum = zero;
    for i in 0..left.len() {
        sum = add(sum, mul(left.direct_get(i), right.direct_get(i)));
    }
    Ok(sum)
}

/// Dot product using the element capability
pub fn dot<T, L, R>(left: &L, right: &R) -> Result<T>
where
    T: Numeral,
    L: Vector<Element = T> + ?Sized,
    R: Vector<Element = T> + ?Sized,
{
    let natural = registry().natural::<T>()?;
    dot_product_with(
        left,
        right,
        |a, b| natural.multiply(a, b),
        |a, b| natural.add(a, b),
        natural.zero(),
    )
}

/// `dest = -source` (Integer level)
pub fn negate<T, S, D>(source: &S, dest: &mut D) -> Result<()>
where
    T: Numeral,
    S: Vector<Element = T> + ?Sized,
    D: VectorMut<Element = T> + ?Sized,
{
    let integer = registry().integer::<T>()?;
    map(source, dest, |a| integer.negate(a))
}

/// `dest = left + right`
pub fn add<T, L, R, D>(left: &L, right: &R, dest: &mut D) -> Result<()>
where
    T: Numeral,
    L: Vector<Element = T> + ?Sized,
    R: Vector<Element = T> + ?Sized,
    D: VectorMut<Element = T> + ?Sized,
{
    let natural = registry().natural::<T>()?;
    combine(left, right, dest, |a, b| natural.add(a, b))
}

/// `dest = left - right` (Integer level)
pub fn subtract<T, L, R, D>(left: &L, right: &R, dest: &mut D) -> Result<()>
where
    T: Numeral,
    L: Vector<Element = T> + ?Sized,
    R: Vector<Element = T> + ?Sized,
    D: VectorMut<Element = T> + ?Sized,
{
    let integer = registry().integer::<T>()?;
    combine(left, right, dest, |a, b| integer.subtract(a, b))
}

/// `dest = source * factor`
pub fn scale<T, S, D>(source: &S, factor: T, dest: &mut D) -> Result<()>
where
    T: Numeral,
    S: Vector<Element = T> + ?Sized,
    D: VectorMut<Element = T> + ?Sized,
{
    let natural = registry().natural::<T>()?;
    map(source, dest, |a| natural.multiply(a, factor))
}

/// `dest = source / divisor` (Real level)
pub fn divide<T, S, D>(source: &S, divisor: T, dest: &mut D) -> Result<()>
where
    T: Numeral,
    S: Vector<Element = T> + ?Sized,
    D: VectorMut<Element = T> + ?Sized,
{
    let real = registry().real::<T>()?;
    check_same_len(source.len(), dest.len())?;
    check_writable(dest)?;
    for i in 0..source.len() {
        let quotient = real.divide(source.direct_get(i), divisor)?;
        dest.direct_set(i, quotient);
    }
    Ok(())
}
