//! CSS `<frequency>` values.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use super::keyword_enum;
use super::number::write_number;
use crate::ToCss;

keyword_enum! {
    /// Unit tag for a [`Frequency`]. `as_str` is the serialization suffix.
    pub enum FrequencyUnit {
        Hz => "hz",
        Khz => "khz",
    }
}

/// A CSS `<frequency>`: magnitude plus unit, canonical unit hertz.
///
/// Same conventions as [`Time`]: comparison by canonical value, addition
/// and subtraction re-expressed in the left operand's unit.
///
/// [`Time`]: super::Time
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frequency {
    pub value: f64,
    pub unit: FrequencyUnit,
}

impl Frequency {
    pub const fn new(value: f64, unit: FrequencyUnit) -> Self {
        Frequency { value, unit }
    }

    pub const fn hz(value: f64) -> Self {
        Frequency::new(value, FrequencyUnit::Hz)
    }

    pub const fn khz(value: f64) -> Self {
        Frequency::new(value, FrequencyUnit::Khz)
    }

    /// This frequency expressed in hertz.
    pub fn in_hertz(self) -> f64 {
        match self.unit {
            FrequencyUnit::Hz => self.value,
            FrequencyUnit::Khz => self.value * 1000.0,
        }
    }

    /// This frequency expressed in kilohertz.
    pub fn in_kilohertz(self) -> f64 {
        match self.unit {
            FrequencyUnit::Hz => self.value / 1000.0,
            FrequencyUnit::Khz => self.value,
        }
    }

    /// Re-express this frequency in `unit`.
    pub fn converted(self, unit: FrequencyUnit) -> Frequency {
        let value = match unit {
            FrequencyUnit::Hz => self.in_hertz(),
            FrequencyUnit::Khz => self.in_kilohertz(),
        };
        Frequency::new(value, unit)
    }
}

impl PartialEq for Frequency {
    fn eq(&self, other: &Frequency) -> bool {
        self.in_hertz() == other.in_hertz()
    }
}

impl Eq for Frequency {}

impl PartialOrd for Frequency {
    fn partial_cmp(&self, other: &Frequency) -> Option<Ordering> {
        self.in_hertz().partial_cmp(&other.in_hertz())
    }
}

impl Hash for Frequency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the canonical value so 1khz and 1000hz collide, matching Eq.
        self.in_hertz().to_bits().hash(state);
    }
}

impl ToCss for Frequency {
    fn to_css(&self, buf: &mut String) {
        write_number(buf, self.value);
        buf.push_str(self.unit.as_str());
    }
}

impl Add for Frequency {
    type Output = Frequency;
    fn add(self, rhs: Frequency) -> Frequency {
        Frequency::hz(self.in_hertz() + rhs.in_hertz()).converted(self.unit)
    }
}

impl Sub for Frequency {
    type Output = Frequency;
    fn sub(self, rhs: Frequency) -> Frequency {
        Frequency::hz(self.in_hertz() - rhs.in_hertz()).converted(self.unit)
    }
}

impl Neg for Frequency {
    type Output = Frequency;
    fn neg(self) -> Frequency {
        Frequency::new(-self.value, self.unit)
    }
}

impl Mul<f64> for Frequency {
    type Output = Frequency;
    fn mul(self, rhs: f64) -> Frequency {
        Frequency::new(self.value * rhs, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_to_css() {
        assert_eq!(Frequency::hz(440.0).to_css_string(), "440hz");
        assert_eq!(Frequency::khz(4.4).to_css_string(), "4.4khz");
        assert_eq!(Frequency::khz(1.0).to_css_string(), "1khz");
    }

    #[test]
    fn test_unit_conversion() {
        assert_eq!(Frequency::khz(1.5).in_hertz(), 1500.0);
        assert_eq!(Frequency::hz(500.0).in_kilohertz(), 0.5);
        assert_eq!(
            Frequency::hz(2000.0).converted(FrequencyUnit::Khz),
            Frequency::khz(2.0)
        );
    }

    #[test]
    fn test_equality_is_canonical() {
        assert_eq!(Frequency::khz(1.0), Frequency::hz(1000.0));
        assert!(Frequency::hz(900.0) < Frequency::khz(1.0));
    }

    #[test]
    fn test_arithmetic_keeps_left_operand_unit() {
        let sum = Frequency::khz(1.0) + Frequency::hz(500.0);
        assert_eq!(sum.to_css_string(), "1.5khz");

        let difference = Frequency::hz(1000.0) - Frequency::khz(0.25);
        assert_eq!(difference.to_css_string(), "750hz");
    }
}
