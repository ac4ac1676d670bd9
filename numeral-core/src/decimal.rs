//! Fixed-point decimal representation
//!
//! A [`Decimal`] stores a signed value scaled by `10^9` in an `i128`.
//! Addition and multiplication saturate at the representable range;
//! division is checked and reports a zero divisor.

use bytemuck::{Pod, Zeroable};
use core::fmt::{self, Write};
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;

use crate::error::{NumeralError, Result};

/// Signed fixed-point number with nine fractional digits
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Pod, Zeroable)]
pub struct Decimal {
    raw: i128,
}

impl Decimal {
    /// Number of fractional decimal digits
    pub const DIGITS: u32 = 9;

    /// Raw units per whole number
    pub const SCALE: i128 = 1_000_000_000;

    pub const ZERO: Decimal = Decimal { raw: 0 };
    pub const ONE: Decimal = Decimal { raw: Self::SCALE };
    pub const MAX: Decimal = Decimal { raw: i128::MAX };
    pub const MIN: Decimal = Decimal { raw: i128::MIN };

    /// Build from raw scaled units
    pub const fn from_raw(raw: i128) -> Self {
        Self { raw }
    }

    /// Raw scaled units
    pub const fn raw(self) -> i128 {
        self.raw
    }

    /// Build from a whole number
    pub const fn from_int(value: i64) -> Self {
        Self {
            raw: value as i128 * Self::SCALE,
        }
    }

    /// Nearest decimal to an `f64`; NaN maps to zero and infinities saturate
    pub fn from_f64(value: f64) -> Self {
        let scaled = value * Self::SCALE as f64;
        let nudged = if scaled < 0.0 { scaled - 0.5 } else { scaled + 0.5 };
        Self { raw: nudged as i128 }
    }

    /// Approximate value as `f64`
    pub fn to_f64(self) -> f64 {
        let whole = (self.raw / Self::SCALE) as f64;
        let frac = (self.raw % Self::SCALE) as f64 / Self::SCALE as f64;
        whole + frac
    }

    /// Whole part, truncated toward zero
    pub const fn trunc_int(self) -> i128 {
        self.raw / Self::SCALE
    }

    pub const fn is_zero(self) -> bool {
        self.raw == 0
    }

    pub const fn is_negative(self) -> bool {
        self.raw < 0
    }

    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self {
            raw: self.raw.saturating_add(rhs.raw),
        }
    }

    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self {
            raw: self.raw.saturating_sub(rhs.raw),
        }
    }

    pub const fn saturating_neg(self) -> Self {
        Self {
            raw: self.raw.saturating_neg(),
        }
    }

    /// Product rounded toward zero, saturating on overflow
    pub fn saturating_mul(self, rhs: Self) -> Self {
        match self.raw.checked_mul(rhs.raw) {
            Some(product) => Self {
                raw: product / Self::SCALE,
            },
            None => {
                // Split one operand into whole and fractional units before giving up
                let whole = self.raw / Self::SCALE;
                let frac = self.raw % Self::SCALE;
                let high = whole.checked_mul(rhs.raw);
                let low = frac.checked_mul(rhs.raw).map(|v| v / Self::SCALE);
                match (high, low) {
                    (Some(h), Some(l)) => Self {
                        raw: h.saturating_add(l),
                    },
                    _ if (self.raw < 0) == (rhs.raw < 0) => Self::MAX,
                    _ => Self::MIN,
                }
            }
        }
    }

    /// Quotient rounded toward zero
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        if rhs.raw == 0 {
            return Err(NumeralError::DivisionByZero);
        }
        let raw = match self.raw.checked_mul(Self::SCALE) {
            Some(scaled) => scaled / rhs.raw,
            None => match (self.raw.checked_div(rhs.raw), self.raw.checked_rem(rhs.raw)) {
                (Some(whole), Some(rest)) => whole
                    .saturating_mul(Self::SCALE)
                    .saturating_add(rest.saturating_mul(Self::SCALE) / rhs.raw),
                // Only MIN / -1 overflows, and its quotient is positive
                _ => i128::MAX,
            },
        };
        Ok(Self { raw })
    }

    /// Whole-number quotient truncated toward zero, and the remainder
    pub fn div_rem(self, rhs: Self) -> Result<(Self, Self)> {
        if rhs.raw == 0 {
            return Err(NumeralError::DivisionByZero);
        }
        let quotient = self.raw.wrapping_div(rhs.raw);
        let remainder = self.raw.wrapping_rem(rhs.raw);
        Ok((
            Self {
                raw: quotient.saturating_mul(Self::SCALE),
            },
            Self { raw: remainder },
        ))
    }

    /// Largest whole value not above `self`
    pub const fn floor(self) -> Self {
        Self {
            raw: self.raw.div_euclid(Self::SCALE).saturating_mul(Self::SCALE),
        }
    }

    /// Smallest whole value not below `self`
    pub const fn ceil(self) -> Self {
        let floor = self.floor();
        if floor.raw == self.raw {
            floor
        } else {
            Self {
                raw: floor.raw.saturating_add(Self::SCALE),
            }
        }
    }

    /// Distance above the floor, in `[0, 1)`
    pub const fn fract(self) -> Self {
        Self {
            raw: self.raw.rem_euclid(Self::SCALE),
        }
    }

    /// `-1`, `0` or `1`
    pub const fn signum(self) -> Self {
        Self {
            raw: self.raw.signum() * Self::SCALE,
        }
    }

    pub const fn abs(self) -> Self {
        Self {
            raw: self.raw.saturating_abs(),
        }
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Self::from_int(value as i64)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::from_int(value)
    }
}

impl From<u32> for Decimal {
    fn from(value: u32) -> Self {
        Self::from_int(value as i64)
    }
}

impl Add for Decimal {
    type Output = Decimal;

    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl Sub for Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }
}

impl Mul for Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Self) -> Self {
        self.saturating_mul(rhs)
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Self {
        self.saturating_neg()
    }
}

/// Stack buffer for rendering digits without allocation
///
/// Holds the whole part of any `i128` value plus nine fractional digits;
/// padding zeros beyond that are written straight to the formatter.
struct DigitBuffer {
    bytes: [u8; 64],
    len: usize,
}

impl DigitBuffer {
    const fn new() -> Self {
        Self {
            bytes: [0; 64],
            len: 0,
        }
    }

    fn as_str(&self) -> &str {
        // Only ASCII digits and '.' are ever written
        core::str::from_utf8(&self.bytes[..self.len]).unwrap_or("")
    }
}

impl Write for DigitBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > self.bytes.len() {
            return Err(fmt::Error);
        }
        self.bytes[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

fn write_repeated(f: &mut fmt::Formatter<'_>, ch: char, count: usize) -> fmt::Result {
    for _ in 0..count {
        f.write_char(ch)?;
    }
    Ok(())
}

/// Pad `sign`, `digits` and `zeros` trailing zeros to the formatter width
fn pad_number(
    f: &mut fmt::Formatter<'_>,
    sign: &str,
    digits: &str,
    zeros: usize,
) -> fmt::Result {
    let len = sign.len() + digits.len() + zeros;
    let padding = f.width().map_or(0, |width| width.saturating_sub(len));

    if f.sign_aware_zero_pad() {
        f.write_str(sign)?;
        write_repeated(f, '0', padding)?;
        f.write_str(digits)?;
        return write_repeated(f, '0', zeros);
    }

    let (before, after) = match f.align() {
        Some(fmt::Alignment::Left) => (0, padding),
        Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
        _ => (padding, 0),
    };
    let fill = f.fill();
    write_repeated(f, fill, before)?;
    f.write_str(sign)?;
    f.write_str(digits)?;
    write_repeated(f, '0', zeros)?;
    write_repeated(f, fill, after)
}

impl fmt::Display for Decimal {
    /// Honors precision (rounded half away from zero); without one, trailing
    /// fractional zeros are dropped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.raw.unsigned_abs();
        let scale = Self::SCALE as u128;
        let mut buf = DigitBuffer::new();
        let mut zeros = 0;

        match f.precision() {
            Some(precision) if precision < Self::DIGITS as usize => {
                let divisor = 10u128.pow(Self::DIGITS - precision as u32);
                let rounded = magnitude / divisor + u128::from(magnitude % divisor >= divisor / 2);
                let unit = 10u128.pow(precision as u32);
                write!(buf, "{}", rounded / unit)?;
                if precision > 0 {
                    write!(buf, ".{:0width$}", rounded % unit, width = precision)?;
                }
            }
            Some(precision) => {
                write!(buf, "{}.{:09}", magnitude / scale, magnitude % scale)?;
                zeros = precision - Self::DIGITS as usize;
            }
            None => {
                write!(buf, "{}", magnitude / scale)?;
                let mut frac = magnitude % scale;
                if frac != 0 {
                    let mut width = Self::DIGITS as usize;
                    while frac % 10 == 0 {
                        frac /= 10;
                        width -= 1;
                    }
                    write!(buf, ".{frac:0width$}")?;
                }
            }
        }

        let sign = if self.raw < 0 {
            "-"
        } else if f.sign_plus() {
            "+"
        } else {
            ""
        };
        pad_number(f, sign, buf.as_str(), zeros)
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({self})")
    }
}

impl FromStr for Decimal {
    type Err = NumeralError;

    /// Parse `[+-]digits[.digits]`; fractional digits past the ninth are truncated
    fn from_str(s: &str) -> Result<Self> {
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let (whole, frac) = match body.find('.') {
            Some(dot) => (&body[..dot], &body[dot + 1..]),
            None => (body, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(NumeralError::InvalidDecimal);
        }

        let mut raw: i128 = 0;
        for byte in whole.bytes() {
            if !byte.is_ascii_digit() {
                return Err(NumeralError::InvalidDecimal);
            }
            raw = raw
                .checked_mul(10)
                .and_then(|v| v.checked_add((byte - b'0') as i128))
                .ok_or(NumeralError::InvalidDecimal)?;
        }
        raw = raw
            .checked_mul(Self::SCALE)
            .ok_or(NumeralError::InvalidDecimal)?;

        let mut unit = Self::SCALE;
        for byte in frac.bytes() {
            if !byte.is_ascii_digit() {
                return Err(NumeralError::InvalidDecimal);
            }
            unit /= 10;
            raw = raw
                .checked_add((byte - b'0') as i128 * unit)
                .ok_or(NumeralError::InvalidDecimal)?;
        }

        Ok(Self {
            raw: if negative { -raw } else { raw },
        })
    }
}
