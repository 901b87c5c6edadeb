//! CSS value primitives.
//!
//! This module contains:
//! - The shared numeric formatter plus `Number`/`Integer`
//! - Unit-carrying families: `Length`, `Percentage`, `Angle`, `Time`,
//!   `Frequency`
//! - Composite unions (`LengthPercentage` and friends)
//! - Fixed-arity shorthand groups (`Sides`, `SidePair`)
//! - The shared `Global` keyword set

mod angle;
mod composite;
mod frequency;
mod global;
mod length;
mod number;
mod percentage;
mod shorthand;
mod time;

/// Macro for defining CSS keyword enums with automatic ToCss implementation.
///
/// Reduces boilerplate for closed keyword sets and unit tags that map
/// directly to a serialization token.
///
/// # Example
///
/// ```ignore
/// keyword_enum! {
///     /// The five CSS-wide keywords.
///     pub enum Global {
///         Inherit => "inherit",
///         Initial => "initial",
///     }
/// }
/// ```
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $css:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Returns the serialization token for this value.
            #[inline]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $css,)*
                }
            }
        }

        impl $crate::ToCss for $name {
            fn to_css(&self, buf: &mut String) {
                buf.push_str(self.as_str());
            }
        }
    };
}

// Export the macro for use within the crate
pub(crate) use keyword_enum;

pub use angle::{Angle, AngleUnit, Hue};
pub use composite::{LengthPercentage, LengthPercentageOrAuto, LengthPercentageOrNone};
pub use frequency::{Frequency, FrequencyUnit};
pub use global::Global;
pub use length::{Length, LengthUnit};
pub use number::{Integer, Number};
pub use percentage::Percentage;
pub use shorthand::{SidePair, Sides};
pub use time::{Time, TimeUnit};
