//! Unitless numeric values and the shared CSS number formatter.

use std::fmt::Write;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use crate::ToCss;

/// Write `value` as a canonical CSS number token.
///
/// Integral values drop the fractional part (`45.0` serializes as `"45"`);
/// everything else uses the shortest decimal that round-trips, which is
/// what `f64`'s `Display` produces. Negative zero collapses to `"0"`.
pub(crate) fn write_number(buf: &mut String, value: f64) {
    if value == 0.0 {
        buf.push('0');
    } else {
        write!(buf, "{}", value).unwrap();
    }
}

/// A unitless CSS `<number>`.
///
/// Never carries a unit suffix when serialized. Equality and hashing are
/// structural over the stored bits.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Number(pub f64);

impl Number {
    pub const fn new(value: f64) -> Self {
        Number(value)
    }

    /// The raw floating point value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl ToCss for Number {
    fn to_css(&self, buf: &mut String) {
        write_number(buf, self.0);
    }
}

impl Add for Number {
    type Output = Number;
    fn add(self, rhs: Number) -> Number {
        Number(self.0 + rhs.0)
    }
}

impl Sub for Number {
    type Output = Number;
    fn sub(self, rhs: Number) -> Number {
        Number(self.0 - rhs.0)
    }
}

impl Neg for Number {
    type Output = Number;
    fn neg(self) -> Number {
        Number(-self.0)
    }
}

impl Mul<f64> for Number {
    type Output = Number;
    fn mul(self, rhs: f64) -> Number {
        Number(self.0 * rhs)
    }
}

/// A CSS `<integer>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Integer(pub i32);

impl Integer {
    pub const fn new(value: i32) -> Self {
        Integer(value)
    }

    /// The magnitude of this integer (`Integer(-15)` becomes `Integer(15)`).
    #[inline]
    pub const fn absolute(self) -> Self {
        Integer(self.0.abs())
    }
}

impl ToCss for Integer {
    fn to_css(&self, buf: &mut String) {
        write!(buf, "{}", self.0).unwrap();
    }
}

impl Add for Integer {
    type Output = Integer;
    fn add(self, rhs: Integer) -> Integer {
        Integer(self.0 + rhs.0)
    }
}

impl Sub for Integer {
    type Output = Integer;
    fn sub(self, rhs: Integer) -> Integer {
        Integer(self.0 - rhs.0)
    }
}

impl Neg for Integer {
    type Output = Integer;
    fn neg(self) -> Integer {
        Integer(-self.0)
    }
}
