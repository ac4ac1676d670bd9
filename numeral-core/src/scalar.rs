//! Boxed numeral values
//!
//! [`Scalar`] carries one value of any built-in representation together
//! with its tag. The boxed structural interfaces read and write through it.

use crate::decimal::Decimal;
use crate::kind::Representation;

/// A value of any built-in representation
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
}

impl Scalar {
    /// Tag of the carried value
    pub const fn representation(&self) -> Representation {
        match self {
            Scalar::I8(_) => Representation::I8,
            Scalar::I16(_) => Representation::I16,
            Scalar::I32(_) => Representation::I32,
            Scalar::I64(_) => Representation::I64,
            Scalar::U8(_) => Representation::U8,
            Scalar::U16(_) => Representation::U16,
            Scalar::U32(_) => Representation::U32,
            Scalar::U64(_) => Representation::U64,
            Scalar::Usize(_) => Representation::Usize,
            Scalar::F32(_) => Representation::F32,
            Scalar::F64(_) => Representation::F64,
            Scalar::Decimal(_) => Representation::Decimal,
        }
    }

    /// Whole part as `i128`; floats truncate toward zero and saturate
    pub fn to_i128(self) -> i128 {
        match self {
            Scalar::I8(v) => v as i128,
            Scalar::I16(v) => v as i128,
            Scalar::I32(v) => v as i128,
            Scalar::I64(v) => v as i128,
            Scalar::U8(v) => v as i128,
            Scalar::U16(v) => v as i128,
            Scalar::U32(v) => v as i128,
            Scalar::U64(v) => v as i128,
            Scalar::Usize(v) => v as i128,
            Scalar::F32(v) => v as i128,
            Scalar::F64(v) => v as i128,
            Scalar::Decimal(v) => v.trunc_int(),
        }
    }

    /// Approximate value as `f64`
    pub fn to_f64(self) -> f64 {
        match self {
            Scalar::I8(v) => v as f64,
            Scalar::I16(v) => v as f64,
            Scalar::I32(v) => v as f64,
            Scalar::I64(v) => v as f64,
            Scalar::U8(v) => v as f64,
            Scalar::U16(v) => v as f64,
            Scalar::U32(v) => v as f64,
            Scalar::U64(v) => v as f64,
            Scalar::Usize(v) => v as f64,
            Scalar::F32(v) => v as f64,
            Scalar::F64(v) => v,
            Scalar::Decimal(v) => v.to_f64(),
        }
    }
}

impl core::fmt::Display for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Scalar::I8(v) => core::fmt::Display::fmt(v, f),
            Scalar::I16(v) => core::fmt::Display::fmt(v, f),
            Scalar::I32(v) => core::fmt::Display::fmt(v, f),
            Scalar::I64(v) => core::fmt::Display::fmt(v, f),
            Scalar::U8(v) => core::fmt::Display::fmt(v, f),
            Scalar::U16(v) => core::fmt::Display::fmt(v, f),
            Scalar::U32(v) => core::fmt::Display::fmt(v, f),
            Scalar::U64(v) => core::fmt::Display::fmt(v, f),
            Scalar::Usize(v) => core::fmt::Display::fmt(v, f),
            Scalar::F32(v) => core::fmt::Display::fmt(v, f),
            Scalar::F64(v) => core::fmt::Display::fmt(v, f),
            Scalar::Decimal(v) => core::fmt::Display::fmt(v, f),
        }
    }
}
