//! The `rotate` property.

use super::property;
use crate::ToCss;
use crate::values::Angle;

/// Value space for `rotate`: `none | <angle>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotateValue {
    None,
    Angle(Angle),
}

impl ToCss for RotateValue {
    fn to_css(&self, buf: &mut String) {
        match self {
            RotateValue::None => buf.push_str("none"),
            RotateValue::Angle(angle) => angle.to_css(buf),
        }
    }
}

property! {
    /// `rotate`.
    pub enum Rotate: "rotate" {
        Value(RotateValue),
    }
}

impl Rotate {
    pub const fn none() -> Self {
        Rotate::Value(RotateValue::None)
    }

    pub const fn deg(value: f64) -> Self {
        Rotate::Value(RotateValue::Angle(Angle::deg(value)))
    }

    pub const fn turn(value: f64) -> Self {
        Rotate::Value(RotateValue::Angle(Angle::turn(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Property;

    #[test]
    fn test_rotate_declarations() {
        assert_eq!(Rotate::none().to_declaration_string(), "rotate:none");
        assert_eq!(Rotate::deg(45.0).to_declaration_string(), "rotate:45deg");
        assert_eq!(Rotate::turn(0.25).to_declaration_string(), "rotate:0.25turn");
        assert_eq!(Rotate::deg(-90.5).to_declaration_string(), "rotate:-90.5deg");
    }
}
