//! CSS `<angle>` and `<hue>` values with degree normalization.

use std::f64::consts::PI;
use std::hash::{Hash, Hasher};
use std::ops::{Mul, Neg};

use super::keyword_enum;
use super::number::write_number;
use crate::ToCss;

keyword_enum! {
    /// Unit tag for an [`Angle`]. `as_str` is the serialization suffix.
    pub enum AngleUnit {
        Deg => "deg",
        Grad => "grad",
        Rad => "rad",
        Turn => "turn",
    }
}

impl AngleUnit {
    /// Degrees per one unit: deg ×1, grad ×0.9, rad ×180/π, turn ×360.
    fn degree_factor(self) -> f64 {
        match self {
            AngleUnit::Deg => 1.0,
            AngleUnit::Grad => 0.9,
            AngleUnit::Rad => 180.0 / PI,
            AngleUnit::Turn => 360.0,
        }
    }
}

/// Reduce a degree value modulo 360 into `[0, 360)`.
///
/// Negative remainders are mapped up by adding 360, never by truncating
/// toward zero. A tiny negative remainder can round up to exactly 360.0;
/// that collapses to 0.0 so the half-open interval holds.
fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// A CSS `<angle>`: magnitude plus unit.
///
/// Equality and hashing are representation-preserving: `Angle::deg(360.0)`
/// and `Angle::turn(1.0)` normalize to the same degree value but compare
/// unequal. This is the opposite convention from [`Time`], which compares
/// by canonical value; use [`Angle::normalized_degrees`] when canonical
/// comparison is wanted.
///
/// [`Time`]: super::Time
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle {
    pub value: f64,
    pub unit: AngleUnit,
}

impl Angle {
    pub const fn new(value: f64, unit: AngleUnit) -> Self {
        Angle { value, unit }
    }

    pub const fn deg(value: f64) -> Self {
        Angle::new(value, AngleUnit::Deg)
    }

    pub const fn grad(value: f64) -> Self {
        Angle::new(value, AngleUnit::Grad)
    }

    pub const fn rad(value: f64) -> Self {
        Angle::new(value, AngleUnit::Rad)
    }

    pub const fn turn(value: f64) -> Self {
        Angle::new(value, AngleUnit::Turn)
    }

    /// This angle expressed in degrees, sign and magnitude preserved.
    pub fn degrees(self) -> f64 {
        self.value * self.unit.degree_factor()
    }

    /// The canonical hue angle in `[0, 360)`.
    pub fn normalized_degrees(self) -> f64 {
        normalize_degrees(self.degrees())
    }
}

impl Eq for Angle {}

impl Hash for Angle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unit.hash(state);
        self.value.to_bits().hash(state);
    }
}

impl ToCss for Angle {
    fn to_css(&self, buf: &mut String) {
        write_number(buf, self.value);
        buf.push_str(self.unit.as_str());
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle::new(-self.value, self.unit)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    fn mul(self, rhs: f64) -> Angle {
        Angle::new(self.value * rhs, self.unit)
    }
}

/// A CSS `<hue>`: an explicit angle or a bare number of degrees.
///
/// Equality and hashing are structural, same as [`Angle`]: `Hue::deg(360.0)`
/// and `Hue::number(0.0)` normalize identically but compare unequal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hue {
    Angle(Angle),
    Number(f64),
}

impl Hue {
    pub const fn deg(value: f64) -> Self {
        Hue::Angle(Angle::deg(value))
    }

    pub const fn number(value: f64) -> Self {
        Hue::Number(value)
    }

    /// The canonical hue angle in `[0, 360)`. A bare number is
    /// already-degrees.
    pub fn normalized_degrees(self) -> f64 {
        match self {
            Hue::Angle(angle) => angle.normalized_degrees(),
            Hue::Number(degrees) => normalize_degrees(degrees),
        }
    }
}

impl Eq for Hue {}

impl Hash for Hue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Hue::Angle(angle) => {
                0u8.hash(state);
                angle.hash(state);
            }
            Hue::Number(value) => {
                1u8.hash(state);
                value.to_bits().hash(state);
            }
        }
    }
}

impl From<Angle> for Hue {
    fn from(angle: Angle) -> Self {
        Hue::Angle(angle)
    }
}

impl ToCss for Hue {
    fn to_css(&self, buf: &mut String) {
        match self {
            Hue::Angle(angle) => angle.to_css(buf),
            Hue::Number(value) => write_number(buf, *value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_angle_to_css() {
        assert_eq!(Angle::deg(45.0).to_css_string(), "45deg");
        assert_eq!(Angle::turn(0.25).to_css_string(), "0.25turn");
        assert_eq!(Angle::grad(100.0).to_css_string(), "100grad");
        assert_eq!(Angle::rad(1.5).to_css_string(), "1.5rad");
    }

    #[test]
    fn test_normalized_degrees() {
        assert_eq!(Angle::deg(45.0).normalized_degrees(), 45.0);
        assert_eq!(Angle::deg(360.0).normalized_degrees(), 0.0);
        assert_eq!(Angle::deg(-90.0).normalized_degrees(), 270.0);
        assert_eq!(Angle::deg(-450.0).normalized_degrees(), 270.0);
        assert_eq!(Angle::deg(725.0).normalized_degrees(), 5.0);
    }

    #[test]
    fn test_normalized_degrees_across_units() {
        assert_eq!(Angle::turn(0.5).normalized_degrees(), 180.0);
        assert_eq!(Angle::turn(-1.25).normalized_degrees(), 270.0);
        assert_eq!(Angle::grad(400.0).normalized_degrees(), 0.0);
        assert_eq!(Angle::grad(100.0).normalized_degrees(), 90.0);
        let half_turn = Angle::rad(PI).normalized_degrees();
        assert!((half_turn - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_tiny_negative_angles_stay_in_range() {
        let normalized = Angle::deg(-1.0e-13).normalized_degrees();
        assert!((0.0..360.0).contains(&normalized));
    }

    #[test]
    fn test_hue_number_is_degrees() {
        assert_eq!(Hue::number(-90.0).normalized_degrees(), 270.0);
        assert_eq!(Hue::number(540.0).normalized_degrees(), 180.0);
        assert_eq!(Hue::number(120.0).to_css_string(), "120");
        assert_eq!(Hue::deg(120.0).to_css_string(), "120deg");
    }

    #[test]
    fn test_equality_is_structural() {
        assert_ne!(Angle::deg(360.0), Angle::turn(1.0));
        assert_ne!(Hue::deg(0.0), Hue::number(0.0));
        assert_eq!(Angle::deg(360.0), Angle::deg(360.0));
    }

    proptest! {
        #[test]
        fn prop_normalized_degrees_in_range(v in -1.0e6f64..1.0e6) {
            for angle in [Angle::deg(v), Angle::grad(v), Angle::rad(v), Angle::turn(v)] {
                let normalized = angle.normalized_degrees();
                prop_assert!((0.0..360.0).contains(&normalized));
            }
        }

        #[test]
        fn prop_normalization_is_360_periodic(v in -1000.0f64..1000.0, k in -5i32..5) {
            let base = Angle::deg(v).normalized_degrees();
            let shifted = Angle::deg(v + 360.0 * f64::from(k)).normalized_degrees();
            let distance = (base - shifted).abs();
            // Compare on the circle: 0 and 360-epsilon are adjacent.
            prop_assert!(distance < 1e-6 || (360.0 - distance) < 1e-6);
        }
    }
}
