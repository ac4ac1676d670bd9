//! Capabilities for IEEE floating-point representations
//!
//! Arithmetic is native IEEE; equality treats NaN as equal to itself so
//! that default-value comparisons behave for sparse storage.

use core::marker::PhantomData;

use numeral_core::{Capability, CapabilityLevel, Integer, Natural, Real, Result, RoundingMode};

/// Capability for a floating-point representation (Real level)
pub struct FloatCapability<T>(PhantomData<T>);

impl<T> FloatCapability<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for FloatCapability<T> {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! impl_float {
    ($ty:ty) => {
        impl Natural<$ty> for FloatCapability<$ty> {
            fn level(&self) -> CapabilityLevel {
                CapabilityLevel::Real
            }

            fn add(&self, a: $ty, b: $ty) -> $ty {
                a + b
            }

            fn multiply(&self, a: $ty, b: $ty) -> $ty {
                a * b
            }

            fn integer_divide_with_remainder(&self, a: $ty, b: $ty) -> Result<($ty, $ty)> {
                // Division by zero follows IEEE and yields infinities or NaN
                Ok(((a / b).trunc(), a % b))
            }

            fn zero(&self) -> $ty {
                0.0
            }

            fn one(&self) -> $ty {
                1.0
            }

            fn equals(&self, a: $ty, b: $ty) -> bool {
                a == b || (a.is_nan() && b.is_nan())
            }

            fn as_natural(&self) -> &dyn Natural<$ty> {
                self
            }

            fn as_integer(&self) -> Option<&dyn Integer<$ty>> {
                Some(self)
            }

            fn as_real(&self) -> Option<&dyn Real<$ty>> {
                Some(self)
            }
        }

        impl Integer<$ty> for FloatCapability<$ty> {
            fn negate(&self, a: $ty) -> $ty {
                -a
            }

            fn sign(&self, a: $ty) -> $ty {
                if a > 0.0 {
                    1.0
                } else if a < 0.0 {
                    -1.0
                } else {
                    // Zero stays zero and NaN stays NaN
                    a
                }
            }

            fn absolute(&self, a: $ty) -> $ty {
                a.abs()
            }
        }

        impl Real<$ty> for FloatCapability<$ty> {
            fn invert(&self, a: $ty) -> Result<$ty> {
                Ok(1.0 / a)
            }

            fn divide(&self, a: $ty, b: $ty) -> Result<$ty> {
                Ok(a / b)
            }

            fn round(&self, value: $ty, mode: RoundingMode) -> $ty {
                let floor = value.floor();
                match mode {
                    RoundingMode::Down => floor,
                    RoundingMode::Up => value.ceil(),
                    RoundingMode::ClosestDown | RoundingMode::ClosestUp => {
                        // value - floor is exact for IEEE floats
                        let offset = value - floor;
                        if offset > 0.5 || (offset == 0.5 && mode == RoundingMode::ClosestUp) {
                            floor + 1.0
                        } else {
                            floor
                        }
                    }
                }
            }
        }

        impl Capability for FloatCapability<$ty> {
            type Value = $ty;
        }
    };
}

impl_float!(f32);
impl_float!(f64);
