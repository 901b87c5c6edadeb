//! # cssbits
//!
//! A typed domain model for CSS values: small immutable value types that
//! know how to render themselves as conformant CSS text.
//!
//! There is no parser and no runtime validation. Invalid combinations
//! (adding a length to a percentage, picking a shorthand arity that does
//! not exist) are unrepresentable; every operation is a pure, synchronous
//! computation that always produces a string.
//!
//! ## Quick Start
//!
//! ```
//! use cssbits::{Length, LengthPercentageOrAuto, Margin, Property, Sides, ToCss};
//!
//! // Longhand declaration
//! let left = cssbits::MarginLeft::px(10.0);
//! assert_eq!(left.to_declaration_string(), "margin-left:10px");
//!
//! // Shorthand with CSS positional semantics: vertical then horizontal
//! let margin = Margin::Edges(Sides::VerticalHorizontal(
//!     LengthPercentageOrAuto::px(8.0),
//!     LengthPercentageOrAuto::Auto,
//! ));
//! assert_eq!(margin.to_declaration_string(), "margin:8px auto");
//!
//! // Values serialize on their own too
//! assert_eq!(Length::px(45.0).to_css_string(), "45px");
//! ```
//!
//! ## Units
//!
//! Unit-carrying families ([`Time`], [`Frequency`]) convert and compare by
//! canonical value (`Time::s(1.0) == Time::ms(1000.0)`), while [`Angle`]
//! and [`Hue`] keep representation-preserving equality and expose
//! normalization separately via `normalized_degrees()`. See the type docs
//! for the rationale.

pub mod properties;
pub mod values;

/// Serialize a value as CSS text.
pub trait ToCss {
    /// Write this value as CSS to the buffer.
    fn to_css(&self, buf: &mut String);

    /// Convert to a CSS string (convenience method).
    fn to_css_string(&self) -> String {
        let mut buf = String::new();
        self.to_css(&mut buf);
        buf
    }
}

// Re-export value types
pub use values::{
    Angle, AngleUnit, Frequency, FrequencyUnit, Global, Hue, Integer, Length, LengthPercentage,
    LengthPercentageOrAuto, LengthPercentageOrNone, LengthUnit, Number, Percentage, SidePair,
    Sides, Time, TimeUnit,
};

// Re-export the property contract and the representative property set
pub use properties::{
    Height, LineHeight, LineHeightValue, Margin, MarginBottom, MarginLeft, MarginRight, MarginTop,
    MaxHeight, MaxWidth, MinHeight, MinWidth, Padding, PaddingBottom, PaddingLeft, PaddingRight,
    PaddingTop, Property, Rotate, RotateValue, ScrollMargin, ScrollMarginBlock, ScrollMarginInline,
    TransitionDelay, TransitionDuration, Width,
};
