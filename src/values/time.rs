//! CSS `<time>` values.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use super::keyword_enum;
use super::number::write_number;
use crate::ToCss;

keyword_enum! {
    /// Unit tag for a [`Time`]. `as_str` is the serialization suffix.
    pub enum TimeUnit {
        Seconds => "s",
        Milliseconds => "ms",
    }
}

/// A CSS `<time>`: magnitude plus unit, canonical unit seconds.
///
/// Comparison is by canonical value: `Time::s(1.0) == Time::ms(1000.0)`
/// even though the two serialize differently (`"1s"` vs `"1000ms"`).
/// [`Angle`] uses the opposite, representation-preserving convention.
///
/// Addition and subtraction combine in seconds and re-express the result
/// in the left operand's unit; scaling and negation act on the stored
/// magnitude directly.
///
/// [`Angle`]: super::Angle
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Time {
    pub value: f64,
    pub unit: TimeUnit,
}

impl Time {
    pub const fn new(value: f64, unit: TimeUnit) -> Self {
        Time { value, unit }
    }

    pub const fn s(value: f64) -> Self {
        Time::new(value, TimeUnit::Seconds)
    }

    pub const fn ms(value: f64) -> Self {
        Time::new(value, TimeUnit::Milliseconds)
    }

    /// This time expressed in seconds.
    pub fn in_seconds(self) -> f64 {
        match self.unit {
            TimeUnit::Seconds => self.value,
            TimeUnit::Milliseconds => self.value / 1000.0,
        }
    }

    /// This time expressed in milliseconds.
    pub fn in_milliseconds(self) -> f64 {
        match self.unit {
            TimeUnit::Seconds => self.value * 1000.0,
            TimeUnit::Milliseconds => self.value,
        }
    }

    /// Re-express this time in `unit`.
    pub fn converted(self, unit: TimeUnit) -> Time {
        let value = match unit {
            TimeUnit::Seconds => self.in_seconds(),
            TimeUnit::Milliseconds => self.in_milliseconds(),
        };
        Time::new(value, unit)
    }
}

impl PartialEq for Time {
    fn eq(&self, other: &Time) -> bool {
        self.in_seconds() == other.in_seconds()
    }
}

impl Eq for Time {}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Time) -> Option<Ordering> {
        self.in_seconds().partial_cmp(&other.in_seconds())
    }
}

impl Hash for Time {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the canonical value so 1s and 1000ms collide, matching Eq.
        self.in_seconds().to_bits().hash(state);
    }
}

impl ToCss for Time {
    fn to_css(&self, buf: &mut String) {
        write_number(buf, self.value);
        buf.push_str(self.unit.as_str());
    }
}

impl Add for Time {
    type Output = Time;
    fn add(self, rhs: Time) -> Time {
        Time::s(self.in_seconds() + rhs.in_seconds()).converted(self.unit)
    }
}

impl Sub for Time {
    type Output = Time;
    fn sub(self, rhs: Time) -> Time {
        Time::s(self.in_seconds() - rhs.in_seconds()).converted(self.unit)
    }
}

impl Neg for Time {
    type Output = Time;
    fn neg(self) -> Time {
        Time::new(-self.value, self.unit)
    }
}

impl Mul<f64> for Time {
    type Output = Time;
    fn mul(self, rhs: f64) -> Time {
        Time::new(self.value * rhs, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_to_css() {
        assert_eq!(Time::s(1.0).to_css_string(), "1s");
        assert_eq!(Time::ms(1000.0).to_css_string(), "1000ms");
        assert_eq!(Time::s(0.5).to_css_string(), "0.5s");
        assert_eq!(Time::ms(0.0).to_css_string(), "0ms");
    }

    #[test]
    fn test_unit_conversion() {
        assert_eq!(Time::ms(500.0).in_seconds(), 0.5);
        assert_eq!(Time::s(0.5).in_milliseconds(), 500.0);
        assert_eq!(Time::ms(1500.0).converted(TimeUnit::Seconds), Time::s(1.5));
        assert_eq!(
            Time::s(2.0).converted(TimeUnit::Milliseconds).to_css_string(),
            "2000ms"
        );
    }

    #[test]
    fn test_round_trip_conversion_is_lossless() {
        for time in [Time::ms(500.0), Time::ms(1.0), Time::ms(1024.0), Time::s(0.5)] {
            assert_eq!(
                time.converted(TimeUnit::Seconds)
                    .converted(TimeUnit::Milliseconds),
                time.converted(TimeUnit::Milliseconds)
            );
        }
    }

    #[test]
    fn test_equality_is_canonical() {
        assert_eq!(Time::s(1.0), Time::ms(1000.0));
        assert_ne!(
            Time::s(1.0).to_css_string(),
            Time::ms(1000.0).to_css_string()
        );
        assert!(Time::ms(400.0) < Time::s(0.5));
    }

    #[test]
    fn test_arithmetic_keeps_left_operand_unit() {
        let total = Time::ms(250.0) + Time::s(1.0);
        assert_eq!(total.to_css_string(), "1250ms");

        let difference = Time::s(1.0) - Time::ms(250.0);
        assert_eq!(difference.to_css_string(), "0.75s");

        assert_eq!((-Time::ms(100.0)).to_css_string(), "-100ms");
        assert_eq!((Time::s(0.25) * 2.0).to_css_string(), "0.5s");
    }
}
