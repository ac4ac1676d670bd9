//! Capability for the fixed-point [`Decimal`] representation

use numeral_core::{
    Capability, CapabilityLevel, Decimal, Integer, Natural, Real, Result, RoundingMode,
};

/// Capability for `Decimal` (Real level)
///
/// Addition and multiplication saturate; inversion and division report a
/// zero divisor.
#[derive(Debug, Default, Clone, Copy)]
pub struct DecimalCapability;

/// Raw units of one half
const HALF: i128 = Decimal::SCALE / 2;

impl Natural<Decimal> for DecimalCapability {
    fn level(&self) -> CapabilityLevel {
        CapabilityLevel::Real
    }

    fn add(&self, a: Decimal, b: Decimal) -> Decimal {
        a.saturating_add(b)
    }

    fn multiply(&self, a: Decimal, b: Decimal) -> Decimal {
        a.saturating_mul(b)
    }

    fn integer_divide_with_remainder(&self, a: Decimal, b: Decimal) -> Result<(Decimal, Decimal)> {
        a.div_rem(b)
    }

    fn zero(&self) -> Decimal {
        Decimal::ZERO
    }

    fn one(&self) -> Decimal {
        Decimal::ONE
    }

    fn as_natural(&self) -> &dyn Natural<Decimal> {
        self
    }

    fn as_integer(&self) -> Option<&dyn Integer<Decimal>> {
        Some(self)
    }

    fn as_real(&self) -> Option<&dyn Real<Decimal>> {
        Some(self)
    }
}

impl Integer<Decimal> for DecimalCapability {
    fn negate(&self, a: Decimal) -> Decimal {
        a.saturating_neg()
    }

    fn sign(&self, a: Decimal) -> Decimal {
        a.signum()
    }

    fn absolute(&self, a: Decimal) -> Decimal {
        a.abs()
    }
}

impl Real<Decimal> for DecimalCapability {
    fn invert(&self, a: Decimal) -> Result<Decimal> {
        Decimal::ONE.checked_div(a)
    }

    fn divide(&self, a: Decimal, b: Decimal) -> Result<Decimal> {
        a.checked_div(b)
    }

    fn round(&self, value: Decimal, mode: RoundingMode) -> Decimal {
        let floor = value.floor();
        match mode {
            RoundingMode::Down => floor,
            RoundingMode::Up => value.ceil(),
            RoundingMode::ClosestDown | RoundingMode::ClosestUp => {
                let offset = value.fract().raw();
                if offset > HALF || (offset == HALF && mode == RoundingMode::ClosestUp) {
                    floor.saturating_add(Decimal::ONE)
                } else {
                    floor
                }
            }
        }
    }
}

impl Capability for DecimalCapability {
    type Value = Decimal;
}
