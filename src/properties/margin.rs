//! The `margin` shorthand and its physical longhands.

use super::property;
use crate::values::{LengthPercentageOrAuto, Sides};

property! {
    /// `margin` shorthand. The [`Sides`] case picks the CSS arity.
    pub enum Margin: "margin" {
        Edges(Sides<LengthPercentageOrAuto>),
    }
}

impl Margin {
    /// Uniform margin on all four edges.
    pub const fn all(value: LengthPercentageOrAuto) -> Self {
        Margin::Edges(Sides::All(value))
    }
}

property! {
    /// `margin-top` longhand.
    pub enum MarginTop: "margin-top" {
        Value(LengthPercentageOrAuto),
    }
}

property! {
    /// `margin-right` longhand.
    pub enum MarginRight: "margin-right" {
        Value(LengthPercentageOrAuto),
    }
}

property! {
    /// `margin-bottom` longhand.
    pub enum MarginBottom: "margin-bottom" {
        Value(LengthPercentageOrAuto),
    }
}

property! {
    /// `margin-left` longhand.
    pub enum MarginLeft: "margin-left" {
        Value(LengthPercentageOrAuto),
    }
}

macro_rules! margin_longhand_ctors {
    ($($name:ident),+) => {
        $(
            impl $name {
                pub const fn px(value: f64) -> Self {
                    $name::Value(LengthPercentageOrAuto::px(value))
                }

                pub const fn percent(value: f64) -> Self {
                    $name::Value(LengthPercentageOrAuto::percent(value))
                }

                pub const fn auto() -> Self {
                    $name::Value(LengthPercentageOrAuto::Auto)
                }
            }
        )+
    };
}

margin_longhand_ctors!(MarginTop, MarginRight, MarginBottom, MarginLeft);
