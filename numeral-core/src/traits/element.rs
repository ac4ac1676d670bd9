//! Numeral element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as vector and matrix elements, and implements it for every
//! built-in representation.

use bytemuck::Pod;
use core::fmt;

use crate::decimal::Decimal;
use crate::kind::Representation;
use crate::scalar::Scalar;

/// Trait for types that can be stored as vector and matrix elements
///
/// All element types must be:
/// - Pod: plain bytes, `Copy`, zero is a valid bit pattern
/// - PartialEq: pointwise structural equality
/// - Debug + Display: diagnostics and formatting
/// - Send + Sync + 'static: capability objects are process-wide
pub trait Numeral: Pod + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Tag of this representation
    const REPRESENTATION: Representation;

    /// Box the value
    fn into_scalar(self) -> Scalar;

    /// Numeric conversion from any boxed value
    ///
    /// Follows `as` semantics: floats truncate toward zero and saturate
    /// when narrowed to integers, integers wrap when narrowed.
    fn from_scalar(value: Scalar) -> Self;

    /// Unbox a value of exactly this representation
    fn exact_from_scalar(value: Scalar) -> Option<Self>;

    /// Bits used for hashing; equal values give equal bits
    fn hash_bits(self) -> u64;
}

macro_rules! impl_numeral_int {
    ($ty:ty, $variant:ident) => {
        impl Numeral for $ty {
            const REPRESENTATION: Representation = Representation::$variant;

            fn into_scalar(self) -> Scalar {
                Scalar::$variant(self)
            }

            fn from_scalar(value: Scalar) -> Self {
                match value {
                    Scalar::F32(v) => v as $ty,
                    Scalar::F64(v) => v as $ty,
                    other => other.to_i128() as $ty,
                }
            }

            fn exact_from_scalar(value: Scalar) -> Option<Self> {
                match value {
                    Scalar::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn hash_bits(self) -> u64 {
                self as u64
            }
        }
    };
}

impl_numeral_int!(i8, I8);
impl_numeral_int!(i16, I16);
impl_numeral_int!(i32, I32);
impl_numeral_int!(i64, I64);
impl_numeral_int!(u8, U8);
impl_numeral_int!(u16, U16);
impl_numeral_int!(u32, U32);
impl_numeral_int!(u64, U64);
impl_numeral_int!(usize, Usize);

macro_rules! impl_numeral_float {
    ($ty:ty, $variant:ident) => {
        impl Numeral for $ty {
            const REPRESENTATION: Representation = Representation::$variant;

            fn into_scalar(self) -> Scalar {
                Scalar::$variant(self)
            }

            fn from_scalar(value: Scalar) -> Self {
                value.to_f64() as $ty
            }

            fn exact_from_scalar(value: Scalar) -> Option<Self> {
                match value {
                    Scalar::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn hash_bits(self) -> u64 {
                // +0 and -0 compare equal, so they must hash equal
                if self == 0.0 {
                    0
                } else if self.is_nan() {
                    <$ty>::NAN.to_bits() as u64
                } else {
                    self.to_bits() as u64
                }
            }
        }
    };
}

impl_numeral_float!(f32, F32);
impl_numeral_float!(f64, F64);

impl Numeral for Decimal {
    const REPRESENTATION: Representation = Representation::Decimal;

    fn into_scalar(self) -> Scalar {
        Scalar::Decimal(self)
    }

    fn from_scalar(value: Scalar) -> Self {
        match value {
            Scalar::Decimal(v) => v,
            Scalar::F32(v) => Decimal::from_f64(v as f64),
            Scalar::F64(v) => Decimal::from_f64(v),
            other => Decimal::from_raw(other.to_i128().saturating_mul(Decimal::SCALE)),
        }
    }

    fn exact_from_scalar(value: Scalar) -> Option<Self> {
        match value {
            Scalar::Decimal(v) => Some(v),
            _ => None,
        }
    }

    fn hash_bits(self) -> u64 {
        let raw = self.raw();
        (raw as u64) ^ ((raw >> 64) as u64)
    }
}
