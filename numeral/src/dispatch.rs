//! Generic operation entry points
//!
//! Each function resolves the capability for `T` in the global registry,
//! requires the level the operation needs and applies it. A missing
//! capability reports `Unregistered`; one below the required level
//! reports `Unsupported` naming both levels.

use numeral_core::{Numeral, Result, RoundingMode};

use crate::registry::registry;

/// Natural level
pub fn add<T: Numeral>(a: T, b: T) -> Result<T> {
    Ok(registry().natural::<T>()?.add(a, b))
}

/// Natural level
pub fn multiply<T: Numeral>(a: T, b: T) -> Result<T> {
    Ok(registry().natural::<T>()?.multiply(a, b))
}

/// Natural level
pub fn integer_divide_with_remainder<T: Numeral>(a: T, b: T) -> Result<(T, T)> {
    registry().natural::<T>()?.integer_divide_with_remainder(a, b)
}

/// Additive identity of `T`
pub fn zero<T: Numeral>() -> Result<T> {
    Ok(registry().natural::<T>()?.zero())
}

/// Multiplicative identity of `T`
pub fn one<T: Numeral>() -> Result<T> {
    Ok(registry().natural::<T>()?.one())
}

/// Capability equality, falling back to `==` for unregistered types
pub fn equals<T: Numeral>(a: T, b: T) -> bool {
    match registry().resolve_typed::<T>() {
        Some(natural) => natural.equals(a, b),
        None => a == b,
    }
}

/// Integer level
pub fn negate<T: Numeral>(a: T) -> Result<T> {
    Ok(registry().integer::<T>()?.negate(a))
}

/// Integer level
pub fn subtract<T: Numeral>(a: T, b: T) -> Result<T> {
    Ok(registry().integer::<T>()?.subtract(a, b))
}

/// Integer level
pub fn sign<T: Numeral>(a: T) -> Result<T> {
    Ok(registry().integer::<T>()?.sign(a))
}

/// Integer level
pub fn absolute<T: Numeral>(a: T) -> Result<T> {
    Ok(registry().integer::<T>()?.absolute(a))
}

/// Real level
pub fn invert<T: Numeral>(a: T) -> Result<T> {
    registry().real::<T>()?.invert(a)
}

/// Real level
pub fn divide<T: Numeral>(a: T, b: T) -> Result<T> {
    registry().real::<T>()?.divide(a, b)
}

/// Real level
pub fn round<T: Numeral>(value: T, mode: RoundingMode) -> Result<T> {
    Ok(registry().real::<T>()?.round(value, mode))
}
