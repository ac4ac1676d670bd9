//! Capabilities for fixed-width integer representations
//!
//! Addition and multiplication are computed in a wider type and reduced
//! with `% MAX` of the representation (remainder with the sign of the
//! dividend) before narrowing back. This is not two's complement
//! overflow: `MAX + 0` yields `0`. Negation is exact for every value
//! except `MIN`, which has no positive counterpart and negates to itself.

use core::marker::PhantomData;

use numeral_core::{Capability, CapabilityLevel, Integer, Natural, NumeralError, Result};

/// Capability for an unsigned representation (Natural level)
pub struct UnsignedCapability<T>(PhantomData<T>);

/// Capability for a signed representation (Integer level)
pub struct SignedCapability<T>(PhantomData<T>);

impl<T> UnsignedCapability<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for UnsignedCapability<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SignedCapability<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for SignedCapability<T> {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! impl_natural_ops {
    ($ty:ty, $wide:ty) => {
        fn add(&self, a: $ty, b: $ty) -> $ty {
            ((a as $wide + b as $wide) % <$ty>::MAX as $wide) as $ty
        }

        fn multiply(&self, a: $ty, b: $ty) -> $ty {
            ((a as $wide * b as $wide) % <$ty>::MAX as $wide) as $ty
        }

        fn integer_divide_with_remainder(&self, a: $ty, b: $ty) -> Result<($ty, $ty)> {
            if b == 0 {
                return Err(NumeralError::DivisionByZero);
            }
            Ok((a.wrapping_div(b), a.wrapping_rem(b)))
        }

        fn zero(&self) -> $ty {
            0
        }

        fn one(&self) -> $ty {
            1
        }
    };
}

macro_rules! impl_unsigned {
    ($ty:ty, $wide:ty) => {
        impl Natural<$ty> for UnsignedCapability<$ty> {
            fn level(&self) -> CapabilityLevel {
                CapabilityLevel::Natural
            }

            impl_natural_ops!($ty, $wide);

            fn as_natural(&self) -> &dyn Natural<$ty> {
                self
            }
        }

        impl Capability for UnsignedCapability<$ty> {
            type Value = $ty;
        }
    };
}

macro_rules! impl_signed {
    ($ty:ty, $wide:ty) => {
        impl Natural<$ty> for SignedCapability<$ty> {
            fn level(&self) -> CapabilityLevel {
                CapabilityLevel::Integer
            }

            impl_natural_ops!($ty, $wide);

            fn as_natural(&self) -> &dyn Natural<$ty> {
                self
            }

            fn as_integer(&self) -> Option<&dyn Integer<$ty>> {
                Some(self)
            }
        }

        impl Integer<$ty> for SignedCapability<$ty> {
            fn negate(&self, a: $ty) -> $ty {
                a.wrapping_neg()
            }

            fn sign(&self, a: $ty) -> $ty {
                a.signum()
            }
        }

        impl Capability for SignedCapability<$ty> {
            type Value = $ty;
        }
    };
}

impl_unsigned!(u8, u16);
impl_unsigned!(u16, u32);
impl_unsigned!(u32, u64);
impl_unsigned!(u64, u128);
impl_unsigned!(usize, u128);

impl_signed!(i8, i16);
impl_signed!(i16, i32);
impl_signed!(i32, i64);
impl_signed!(i64, i128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraparound_rule() {
        let cap = SignedCapability::<i32>::new();
        assert_eq!(cap.add(2, 3), 5);
        assert_eq!(cap.add(i32::MAX, 0), 0);
        assert_eq!(cap.add(i32::MAX, 5), 5);
        assert_eq!(cap.add(i32::MIN, 0), -1);
        assert_eq!(cap.multiply(-4, 6), -24);
        assert_eq!(cap.multiply(65_536, 65_536), 2);

        let byte = UnsignedCapability::<u8>::new();
        assert_eq!(byte.add(200, 100), 45);
        assert_eq!(byte.add(255, 0), 0);
        assert_eq!(byte.multiply(16, 16), 1);
    }

    #[test]
    fn test_integer_division() {
        let cap = SignedCapability::<i64>::new();
        assert_eq!(cap.integer_divide_with_remainder(17, 5), Ok((3, 2)));
        assert_eq!(cap.integer_divide_with_remainder(-17, 5), Ok((-3, -2)));
        assert_eq!(
            cap.integer_divide_with_remainder(1, 0),
            Err(NumeralError::DivisionByZero)
        );
    }

    #[test]
    fn test_derived_operations() {
        let cap = SignedCapability::<i16>::new();
        assert_eq!(cap.subtract(10, 4), 6);
        assert_eq!(cap.subtract(4, 10), -6);
        assert_eq!(cap.absolute(-9), 9);
        assert_eq!(cap.absolute(9), 9);
        assert_eq!(cap.sign(-9), -1);
        assert_eq!(cap.sign(0), 0);
        assert_eq!(cap.negate(cap.negate(123)), 123);
    }

    #[test]
    fn test_negate_is_exact_at_the_extremes() {
        let cap = SignedCapability::<i32>::new();
        assert_eq!(cap.negate(i32::MAX), -i32::MAX);
        assert_eq!(cap.negate(cap.negate(i32::MAX)), i32::MAX);
        assert_eq!(cap.negate(-i32::MAX), i32::MAX);
        assert_eq!(cap.subtract(i32::MAX, i32::MAX), 0);
        assert_eq!(cap.absolute(-i32::MAX), i32::MAX);
        assert_eq!(cap.negate(i32::MIN), i32::MIN);

        let byte = SignedCapability::<i8>::new();
        assert_eq!(byte.negate(127), -127);
        assert_eq!(byte.negate(-128), -128);
    }

    #[test]
    fn test_levels_and_casts() {
        let unsigned = UnsignedCapability::<u32>::new();
        assert_eq!(unsigned.level(), CapabilityLevel::Natural);
        assert!(unsigned.as_integer().is_none());
        assert!(unsigned.as_real().is_none());

        let signed = SignedCapability::<i8>::new();
        assert_eq!(signed.level(), CapabilityLevel::Integer);
        assert!(signed.as_integer().is_some());
        assert!(signed.as_real().is_none());
    }
}
