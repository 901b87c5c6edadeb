//! The `scroll-margin` shorthands (physical and logical).
//!
//! Scroll margins take plain lengths, no percentages.

use super::property;
use crate::values::{Length, SidePair, Sides};

property! {
    /// `scroll-margin` shorthand over the four physical edges.
    pub enum ScrollMargin: "scroll-margin" {
        Edges(Sides<Length>),
    }
}

impl ScrollMargin {
    /// Uniform scroll margin on all four edges.
    pub const fn all(value: Length) -> Self {
        ScrollMargin::Edges(Sides::All(value))
    }
}

property! {
    /// `scroll-margin-block` logical shorthand (block-start, block-end).
    pub enum ScrollMarginBlock: "scroll-margin-block" {
        Pair(SidePair<Length>),
    }
}

property! {
    /// `scroll-margin-inline` logical shorthand (inline-start, inline-end).
    pub enum ScrollMarginInline: "scroll-margin-inline" {
        Pair(SidePair<Length>),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Property;

    #[test]
    fn test_physical_shorthand() {
        assert_eq!(
            ScrollMargin::all(Length::px(4.0)).to_declaration_string(),
            "scroll-margin:4px"
        );
        assert_eq!(
            ScrollMargin::Edges(Sides::TopRightBottomLeft(
                Length::px(1.0),
                Length::px(2.0),
                Length::px(3.0),
                Length::px(4.0),
            ))
            .to_declaration_string(),
            "scroll-margin:1px 2px 3px 4px"
        );
    }

    #[test]
    fn test_logical_pairs() {
        assert_eq!(
            ScrollMarginBlock::Pair(SidePair::StartEnd(Length::em(1.0), Length::em(2.0)))
                .to_declaration_string(),
            "scroll-margin-block:1em 2em"
        );
        assert_eq!(
            ScrollMarginInline::Pair(SidePair::All(Length::px(0.0))).to_declaration_string(),
            "scroll-margin-inline:0px"
        );
    }
}
