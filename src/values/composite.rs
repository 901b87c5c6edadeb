//! Either-or unions over the primitive value kinds.
//!
//! Each union pins exactly one variant at construction and dispatches
//! serialization to it. There is deliberately no arithmetic across tags:
//! adding a length to a percentage does not compile.

use super::length::Length;
use super::percentage::Percentage;
use crate::ToCss;

/// `<length-percentage>`: a pure length or a pure percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthPercentage {
    Length(Length),
    Percentage(Percentage),
}

impl LengthPercentage {
    pub const fn px(value: f64) -> Self {
        LengthPercentage::Length(Length::px(value))
    }

    pub const fn percent(value: f64) -> Self {
        LengthPercentage::Percentage(Percentage::new(value))
    }
}

impl From<Length> for LengthPercentage {
    fn from(length: Length) -> Self {
        LengthPercentage::Length(length)
    }
}

impl From<Percentage> for LengthPercentage {
    fn from(percentage: Percentage) -> Self {
        LengthPercentage::Percentage(percentage)
    }
}

impl ToCss for LengthPercentage {
    fn to_css(&self, buf: &mut String) {
        match self {
            LengthPercentage::Length(length) => length.to_css(buf),
            LengthPercentage::Percentage(percentage) => percentage.to_css(buf),
        }
    }
}

/// `<length-percentage> | auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthPercentageOrAuto {
    Length(Length),
    Percentage(Percentage),
    Auto,
}

impl LengthPercentageOrAuto {
    pub const fn px(value: f64) -> Self {
        LengthPercentageOrAuto::Length(Length::px(value))
    }

    pub const fn percent(value: f64) -> Self {
        LengthPercentageOrAuto::Percentage(Percentage::new(value))
    }
}

impl From<Length> for LengthPercentageOrAuto {
    fn from(length: Length) -> Self {
        LengthPercentageOrAuto::Length(length)
    }
}

impl From<Percentage> for LengthPercentageOrAuto {
    fn from(percentage: Percentage) -> Self {
        LengthPercentageOrAuto::Percentage(percentage)
    }
}

impl From<LengthPercentage> for LengthPercentageOrAuto {
    fn from(value: LengthPercentage) -> Self {
        match value {
            LengthPercentage::Length(length) => LengthPercentageOrAuto::Length(length),
            LengthPercentage::Percentage(percentage) => {
                LengthPercentageOrAuto::Percentage(percentage)
            }
        }
    }
}

impl ToCss for LengthPercentageOrAuto {
    fn to_css(&self, buf: &mut String) {
        match self {
            LengthPercentageOrAuto::Length(length) => length.to_css(buf),
            LengthPercentageOrAuto::Percentage(percentage) => percentage.to_css(buf),
            LengthPercentageOrAuto::Auto => buf.push_str("auto"),
        }
    }
}

/// `<length-percentage> | none`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthPercentageOrNone {
    Length(Length),
    Percentage(Percentage),
    None,
}

impl LengthPercentageOrNone {
    pub const fn px(value: f64) -> Self {
        LengthPercentageOrNone::Length(Length::px(value))
    }

    pub const fn percent(value: f64) -> Self {
        LengthPercentageOrNone::Percentage(Percentage::new(value))
    }
}

impl From<Length> for LengthPercentageOrNone {
    fn from(length: Length) -> Self {
        LengthPercentageOrNone::Length(length)
    }
}

impl From<Percentage> for LengthPercentageOrNone {
    fn from(percentage: Percentage) -> Self {
        LengthPercentageOrNone::Percentage(percentage)
    }
}

impl ToCss for LengthPercentageOrNone {
    fn to_css(&self, buf: &mut String) {
        match self {
            LengthPercentageOrNone::Length(length) => length.to_css(buf),
            LengthPercentageOrNone::Percentage(percentage) => percentage.to_css(buf),
            LengthPercentageOrNone::None => buf.push_str("none"),
        }
    }
}
