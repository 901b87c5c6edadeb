//! The `line-height` property.

use super::property;
use crate::ToCss;
use crate::values::{LengthPercentage, Number};

/// Value space for `line-height`: `normal | <number> | <length-percentage>`.
///
/// A bare number scales the font size and serializes without a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineHeightValue {
    Normal,
    Number(Number),
    LengthPercentage(LengthPercentage),
}

impl ToCss for LineHeightValue {
    fn to_css(&self, buf: &mut String) {
        match self {
            LineHeightValue::Normal => buf.push_str("normal"),
            LineHeightValue::Number(number) => number.to_css(buf),
            LineHeightValue::LengthPercentage(value) => value.to_css(buf),
        }
    }
}

property! {
    /// `line-height`.
    pub enum LineHeight: "line-height" {
        Value(LineHeightValue),
    }
}

impl LineHeight {
    pub const fn normal() -> Self {
        LineHeight::Value(LineHeightValue::Normal)
    }

    /// Unitless multiplier of the element's font size.
    pub const fn number(value: f64) -> Self {
        LineHeight::Value(LineHeightValue::Number(Number::new(value)))
    }

    pub const fn px(value: f64) -> Self {
        LineHeight::Value(LineHeightValue::LengthPercentage(LengthPercentage::px(
            value,
        )))
    }

    pub const fn percent(value: f64) -> Self {
        LineHeight::Value(LineHeightValue::LengthPercentage(LengthPercentage::percent(
            value,
        )))
    }
}
