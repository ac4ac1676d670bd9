//! Classification tags for numeral representations
//!
//! This module defines the algebraic category of a representation, the
//! capability level it supports, the rounding policies and the
//! representation tags themselves.

use crate::error::{NumeralError, Result};

/// Algebraic category of a numeral representation
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NumberKind {
    /// Non-negative whole numbers
    Natural = 0,
    /// Signed whole numbers
    Integer = 1,
    /// Exact fractions with a fixed number of decimal digits
    Fraction = 2,
    /// Approximations of the reals
    Real = 3,
    /// Complex numbers (no representation yet)
    Complex = 4,
    /// Quaternions (no representation yet)
    Quaternion = 5,
}

impl NumberKind {
    /// Whether any representation of this kind exists
    pub const fn is_implemented(self) -> bool {
        !matches!(self, NumberKind::Complex | NumberKind::Quaternion)
    }
}

impl core::fmt::Display for NumberKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            NumberKind::Natural => "natural",
            NumberKind::Integer => "integer",
            NumberKind::Fraction => "fraction",
            NumberKind::Real => "real",
            NumberKind::Complex => "complex",
            NumberKind::Quaternion => "quaternion",
        };
        write!(f, "{name}")
    }
}

/// Level in the linear capability chain `Natural ⊆ Integer ⊆ Real`
///
/// Ordering follows refinement: a higher level satisfies every lower one.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum CapabilityLevel {
    /// add, multiply, integer division, identities
    Natural = 0,
    /// adds negate and sign
    Integer = 1,
    /// adds invert and rounding
    Real = 2,
}

impl CapabilityLevel {
    /// Whether this level provides everything `required` needs
    pub fn satisfies(self, required: CapabilityLevel) -> bool {
        self >= required
    }
}

impl core::fmt::Display for CapabilityLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CapabilityLevel::Natural => write!(f, "Natural"),
            CapabilityLevel::Integer => write!(f, "Integer"),
            CapabilityLevel::Real => write!(f, "Real"),
        }
    }
}

/// Rounding policy for `Real::round`
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RoundingMode {
    /// Toward negative infinity
    Down = 0,
    /// Toward positive infinity
    Up = 1,
    /// Nearest whole value, ties toward negative infinity
    ClosestDown = 2,
    /// Nearest whole value, ties toward positive infinity
    ClosestUp = 3,
}

impl TryFrom<u8> for RoundingMode {
    type Error = NumeralError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(RoundingMode::Down),
            1 => Ok(RoundingMode::Up),
            2 => Ok(RoundingMode::ClosestDown),
            3 => Ok(RoundingMode::ClosestUp),
            other => Err(NumeralError::InvalidRoundingMode(other)),
        }
    }
}

/// Concrete numeral representations known to the crate
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Representation {
    I8 = 0,
    I16 = 1,
    I32 = 2,
    I64 = 3,
    U8 = 4,
    U16 = 5,
    U32 = 6,
    U64 = 7,
    Usize = 8,
    F32 = 9,
    F64 = 10,
    Decimal = 11,
}

impl Representation {
    /// Every representation, in tag order
    pub const ALL: [Representation; 12] = [
        Representation::I8,
        Representation::I16,
        Representation::I32,
        Representation::I64,
        Representation::U8,
        Representation::U16,
        Representation::U32,
        Representation::U64,
        Representation::Usize,
        Representation::F32,
        Representation::F64,
        Representation::Decimal,
    ];

    /// Rust spelling of the representation
    pub const fn name(self) -> &'static str {
        match self {
            Representation::I8 => "i8",
            Representation::I16 => "i16",
            Representation::I32 => "i32",
            Representation::I64 => "i64",
            Representation::U8 => "u8",
            Representation::U16 => "u16",
            Representation::U32 => "u32",
            Representation::U64 => "u64",
            Representation::Usize => "usize",
            Representation::F32 => "f32",
            Representation::F64 => "f64",
            Representation::Decimal => "Decimal",
        }
    }

    /// Size in bytes of one value
    pub const fn size_bytes(self) -> usize {
        match self {
            Representation::I8 | Representation::U8 => 1,
            Representation::I16 | Representation::U16 => 2,
            Representation::I32 | Representation::U32 | Representation::F32 => 4,
            Representation::I64 | Representation::U64 | Representation::F64 => 8,
            Representation::Usize => core::mem::size_of::<usize>(),
            Representation::Decimal => 16,
        }
    }

    /// Algebraic category
    pub const fn kind(self) -> NumberKind {
        match self {
            Representation::U8
            | Representation::U16
            | Representation::U32
            | Representation::U64
            | Representation::Usize => NumberKind::Natural,
            Representation::I8 | Representation::I16 | Representation::I32 | Representation::I64 => {
                NumberKind::Integer
            }
            Representation::Decimal => NumberKind::Fraction,
            Representation::F32 | Representation::F64 => NumberKind::Real,
        }
    }
}

impl TryFrom<u8> for Representation {
    type Error = NumeralError;

    fn try_from(value: u8) -> Result<Self> {
        Representation::ALL
            .get(value as usize)
            .copied()
            .ok_or(NumeralError::InvalidRepresentation(value))
    }
}

impl core::fmt::Display for Representation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}
