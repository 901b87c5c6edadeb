//! The `padding` shorthand and its physical longhands.
//!
//! Padding does not accept `auto`, so these build on [`LengthPercentage`]
//! rather than the `auto`-carrying union margin uses.

use super::property;
use crate::values::{LengthPercentage, Sides};

property! {
    /// `padding` shorthand. The [`Sides`] case picks the CSS arity.
    pub enum Padding: "padding" {
        Edges(Sides<LengthPercentage>),
    }
}

impl Padding {
    /// Uniform padding on all four edges.
    pub const fn all(value: LengthPercentage) -> Self {
        Padding::Edges(Sides::All(value))
    }
}

property! {
    /// `padding-top` longhand.
    pub enum PaddingTop: "padding-top" {
        Value(LengthPercentage),
    }
}

property! {
    /// `padding-right` longhand.
    pub enum PaddingRight: "padding-right" {
        Value(LengthPercentage),
    }
}

property! {
    /// `padding-bottom` longhand.
    pub enum PaddingBottom: "padding-bottom" {
        Value(LengthPercentage),
    }
}

property! {
    /// `padding-left` longhand.
    pub enum PaddingLeft: "padding-left" {
        Value(LengthPercentage),
    }
}

macro_rules! padding_longhand_ctors {
    ($($name:ident),+) => {
        $(
            impl $name {
                pub const fn px(value: f64) -> Self {
                    $name::Value(LengthPercentage::px(value))
                }

                pub const fn percent(value: f64) -> Self {
                    $name::Value(LengthPercentage::percent(value))
                }
            }
        )+
    };
}

padding_longhand_ctors!(PaddingTop, PaddingRight, PaddingBottom, PaddingLeft);
