//! Box sizing properties: `width`, `height` and their min/max variants.

use super::property;
use crate::values::{LengthPercentage, LengthPercentageOrAuto, LengthPercentageOrNone};

property! {
    /// `width`.
    pub enum Width: "width" {
        Value(LengthPercentageOrAuto),
    }
}

property! {
    /// `height`.
    pub enum Height: "height" {
        Value(LengthPercentageOrAuto),
    }
}

macro_rules! auto_sizing_ctors {
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

auto_sizing_ctors!(Width, Height);

property! {
    /// `min-width`.
    pub enum MinWidth: "min-width" {
        Value(LengthPercentage),
    }
}

property! {
    /// `min-height`.
    pub enum MinHeight: "min-height" {
        Value(LengthPercentage),
    }
}

property! {
    /// `max-width`. `none` lifts the constraint.
    pub enum MaxWidth: "max-width" {
        Value(LengthPercentageOrNone),
    }
}

property! {
    /// `max-height`. `none` lifts the constraint.
    pub enum MaxHeight: "max-height" {
        Value(LengthPercentageOrNone),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Property;

    #[test]
    fn test_sizing_declarations() {
        assert_eq!(Width::percent(100.0).to_declaration_string(), "width:100%");
        assert_eq!(Height::auto().to_declaration_string(), "height:auto");
        assert_eq!(
            MinWidth::Value(LengthPercentage::px(320.0)).to_declaration_string(),
            "min-width:320px"
        );
        assert_eq!(
            MaxWidth::Value(LengthPercentageOrNone::None).to_declaration_string(),
            "max-width:none"
        );
        assert_eq!(
            MaxHeight::Value(LengthPercentageOrNone::px(480.0)).to_declaration_string(),
            "max-height:480px"
        );
    }
}
