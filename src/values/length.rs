//! CSS `<length>` values.

use std::hash::{Hash, Hasher};
use std::ops::{Mul, Neg};

use super::keyword_enum;
use super::number::write_number;
use crate::ToCss;

keyword_enum! {
    /// Unit tag for a [`Length`]. `as_str` is the serialization suffix.
    pub enum LengthUnit {
        Px => "px",
        Cm => "cm",
        Mm => "mm",
        Q => "q",
        In => "in",
        Pc => "pc",
        Pt => "pt",
        Em => "em",
        Rem => "rem",
        Ex => "ex",
        Ch => "ch",
        Vw => "vw",
        Vh => "vh",
        Vmin => "vmin",
        Vmax => "vmax",
    }
}

/// A CSS `<length>`: magnitude plus unit.
///
/// Length units are not commensurable without layout context (`em` and `vw`
/// have no fixed ratio to `px`), so there is no cross-unit arithmetic or
/// conversion here; scaling and negation keep the unit. The suffix is
/// always serialized, even for zero (`"0px"`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Length { value, unit }
    }

    pub const fn px(value: f64) -> Self {
        Length::new(value, LengthUnit::Px)
    }

    pub const fn cm(value: f64) -> Self {
        Length::new(value, LengthUnit::Cm)
    }

    pub const fn mm(value: f64) -> Self {
        Length::new(value, LengthUnit::Mm)
    }

    pub const fn q(value: f64) -> Self {
        Length::new(value, LengthUnit::Q)
    }

    pub const fn inches(value: f64) -> Self {
        Length::new(value, LengthUnit::In)
    }

    pub const fn pc(value: f64) -> Self {
        Length::new(value, LengthUnit::Pc)
    }

    pub const fn pt(value: f64) -> Self {
        Length::new(value, LengthUnit::Pt)
    }

    pub const fn em(value: f64) -> Self {
        Length::new(value, LengthUnit::Em)
    }

    pub const fn rem(value: f64) -> Self {
        Length::new(value, LengthUnit::Rem)
    }

    pub const fn ex(value: f64) -> Self {
        Length::new(value, LengthUnit::Ex)
    }

    pub const fn ch(value: f64) -> Self {
        Length::new(value, LengthUnit::Ch)
    }

    pub const fn vw(value: f64) -> Self {
        Length::new(value, LengthUnit::Vw)
    }

    pub const fn vh(value: f64) -> Self {
        Length::new(value, LengthUnit::Vh)
    }

    pub const fn vmin(value: f64) -> Self {
        Length::new(value, LengthUnit::Vmin)
    }

    pub const fn vmax(value: f64) -> Self {
        Length::new(value, LengthUnit::Vmax)
    }

    /// Zero pixels.
    pub const fn zero() -> Self {
        Length::px(0.0)
    }
}

impl Eq for Length {}

impl Hash for Length {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unit.hash(state);
        self.value.to_bits().hash(state);
    }
}

impl ToCss for Length {
    fn to_css(&self, buf: &mut String) {
        write_number(buf, self.value);
        buf.push_str(self.unit.as_str());
    }
}

impl Neg for Length {
    type Output = Length;
    fn neg(self) -> Length {
        Length::new(-self.value, self.unit)
    }
}

impl Mul<f64> for Length {
    type Output = Length;
    fn mul(self, rhs: f64) -> Length {
        Length::new(self.value * rhs, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_to_css() {
        assert_eq!(Length::px(45.0).to_css_string(), "45px");
        assert_eq!(Length::em(1.5).to_css_string(), "1.5em");
        assert_eq!(Length::rem(2.0).to_css_string(), "2rem");
        assert_eq!(Length::vmin(10.0).to_css_string(), "10vmin");
    }

    #[test]
    fn test_zero_keeps_unit() {
        assert_eq!(Length::zero().to_css_string(), "0px");
        assert_eq!(Length::em(0.0).to_css_string(), "0em");
        assert_eq!(Length::px(-0.0).to_css_string(), "0px");
    }

    #[test]
    fn test_scaling_and_negation_preserve_unit() {
        assert_eq!(Length::px(4.0) * 2.5, Length::px(10.0));
        assert_eq!(-Length::em(1.5), Length::em(-1.5));
    }

    #[test]
    fn test_equality_is_per_unit() {
        // No implicit unit conversion: 1in is never equal to 96px here.
        assert_ne!(Length::inches(1.0), Length::px(96.0));
        assert_eq!(Length::pt(12.0), Length::pt(12.0));
    }
}
