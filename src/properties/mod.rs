//! The property/declaration contract and a representative property set.
//!
//! Every property type is a closed enum over its value space plus the
//! shared [`Global`] keyword variant, declared with the `property!` macro.
//! A declaration is the `name:value` pairing with no space and no trailing
//! semicolon; joining declarations into rules is the caller's business.
//!
//! [`Global`]: crate::values::Global

mod line_height;
mod margin;
mod padding;
mod rotate;
mod scroll_margin;
mod sizing;
mod transition;

use crate::ToCss;

/// A concrete CSS property: a constant name plus a serializable value.
pub trait Property: ToCss {
    /// The CSS property name, e.g. `"margin-left"`.
    const NAME: &'static str;

    /// Write the full `name:value` declaration to the buffer.
    fn to_declaration(&self, buf: &mut String) {
        buf.push_str(Self::NAME);
        buf.push(':');
        self.to_css(buf);
    }

    /// The `name:value` declaration as a string (no trailing semicolon).
    fn to_declaration_string(&self) -> String {
        let mut buf = String::new();
        self.to_declaration(&mut buf);
        buf
    }
}

/// Macro for defining property enums with automatic trait implementations.
///
/// Appends the shared `Global` variant to the listed value variants and
/// derives `ToCss`, [`Property`], and `From<Global>`.
///
/// # Example
///
/// ```ignore
/// property! {
///     /// `margin-left` longhand.
///     pub enum MarginLeft: "margin-left" {
///         Value(LengthPercentageOrAuto),
///     }
/// }
/// ```
macro_rules! property {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $css:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident($ty:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant($ty),
            )+
            /// One of the five CSS-wide keywords.
            Global($crate::values::Global),
        }

        impl $crate::ToCss for $name {
            fn to_css(&self, buf: &mut String) {
                match self {
                    $($name::$variant(value) => $crate::ToCss::to_css(value, buf),)+
                    $name::Global(keyword) => $crate::ToCss::to_css(keyword, buf),
                }
            }
        }

        impl $crate::properties::Property for $name {
            const NAME: &'static str = $css;
        }

        impl From<$crate::values::Global> for $name {
            fn from(keyword: $crate::values::Global) -> Self {
                $name::Global(keyword)
            }
        }
    };
}

// Export the macro for use within the crate
pub(crate) use property;

pub use line_height::{LineHeight, LineHeightValue};
pub use margin::{Margin, MarginBottom, MarginLeft, MarginRight, MarginTop};
pub use padding::{Padding, PaddingBottom, PaddingLeft, PaddingRight, PaddingTop};
pub use rotate::{Rotate, RotateValue};
pub use scroll_margin::{ScrollMargin, ScrollMarginBlock, ScrollMarginInline};
pub use sizing::{Height, MaxHeight, MaxWidth, MinHeight, MinWidth, Width};
pub use transition::{TransitionDelay, TransitionDuration};
