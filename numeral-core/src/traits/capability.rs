//! Algebraic capability contracts
//!
//! Three nested contracts form a single refinement chain:
//!
//! ```text
//! Natural   add, multiply, integer division, zero, one
//!   └── Integer   negate, sign (subtract, absolute derived)
//!         └── Real   invert, round (divide derived)
//! ```
//!
//! A capability object implements the highest level its representation
//! supports. The `as_*` casts walk the chain and return `None` when the
//! object does not reach the requested level.

use crate::error::Result;
use crate::kind::{CapabilityLevel, Representation, RoundingMode};
use crate::traits::element::Numeral;

/// Additive and multiplicative structure with whole-number division
pub trait Natural<T: Numeral>: Send + Sync {
    /// Highest level this object implements
    fn level(&self) -> CapabilityLevel;

    fn add(&self, a: T, b: T) -> T;

    fn multiply(&self, a: T, b: T) -> T;

    /// Quotient truncated toward zero and the remainder
    fn integer_divide_with_remainder(&self, a: T, b: T) -> Result<(T, T)>;

    /// Additive identity
    fn zero(&self) -> T;

    /// Multiplicative identity
    fn one(&self) -> T;

    /// Equality as the representation defines it
    fn equals(&self, a: T, b: T) -> bool {
        a == b
    }

    /// Representation this object serves
    fn representation(&self) -> Representation {
        T::REPRESENTATION
    }

    fn as_natural(&self) -> &dyn Natural<T>;

    fn as_integer(&self) -> Option<&dyn Integer<T>> {
        None
    }

    fn as_real(&self) -> Option<&dyn Real<T>> {
        None
    }
}

/// Natural plus additive inverses
pub trait Integer<T: Numeral>: Natural<T> {
    fn negate(&self, a: T) -> T;

    /// `-1`, `0` or `1` in the representation itself
    fn sign(&self, a: T) -> T;

    fn subtract(&self, a: T, b: T) -> T {
        self.add(a, self.negate(b))
    }

    fn absolute(&self, a: T) -> T {
        let minus_one = self.negate(self.one());
        if self.equals(self.sign(a), minus_one) {
            self.negate(a)
        } else {
            a
        }
    }
}

/// Integer plus multiplicative inverses and rounding
pub trait Real<T: Numeral>: Integer<T> {
    fn invert(&self, a: T) -> Result<T>;

    fn divide(&self, a: T, b: T) -> Result<T> {
        Ok(self.multiply(a, self.invert(b)?))
    }

    /// Round to a whole value under the given policy
    fn round(&self, value: T, mode: RoundingMode) -> T;
}

/// A capability type that can be placed in a registry
///
/// The type is parameterized by exactly the representation it serves and
/// is instantiated through `Default`.
pub trait Capability: Natural<Self::Value> + Default + 'static {
    type Value: Numeral;
}
