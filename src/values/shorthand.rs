//! Fixed-arity shorthand value groups.
//!
//! CSS assigns different positional semantics at every arity, so each arity
//! is its own named case rather than a generic N-ary joiner. Picking the
//! case that matches the intended CSS meaning is the caller's job; the
//! serializer only joins the held values with single spaces, in input
//! order, with no leading or trailing whitespace.

use crate::ToCss;

/// Box-model shorthand (margin, padding, inset, scroll-margin, ...).
///
/// - one value: all four edges
/// - two values: vertical then horizontal
/// - three values: top, horizontal, bottom
/// - four values: clockwise from top (top, right, bottom, left)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sides<T> {
    All(T),
    VerticalHorizontal(T, T),
    TopHorizontalBottom(T, T, T),
    TopRightBottomLeft(T, T, T, T),
}

impl<T: ToCss> ToCss for Sides<T> {
    fn to_css(&self, buf: &mut String) {
        match self {
            Sides::All(all) => all.to_css(buf),
            Sides::VerticalHorizontal(vertical, horizontal) => {
                vertical.to_css(buf);
                buf.push(' ');
                horizontal.to_css(buf);
            }
            Sides::TopHorizontalBottom(top, horizontal, bottom) => {
                top.to_css(buf);
                buf.push(' ');
                horizontal.to_css(buf);
                buf.push(' ');
                bottom.to_css(buf);
            }
            Sides::TopRightBottomLeft(top, right, bottom, left) => {
                top.to_css(buf);
                buf.push(' ');
                right.to_css(buf);
                buf.push(' ');
                bottom.to_css(buf);
                buf.push(' ');
                left.to_css(buf);
            }
        }
    }
}

/// Logical-pair shorthand (scroll-margin-block, inset-inline, ...).
///
/// - one value: both start and end
/// - two values: start then end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SidePair<T> {
    All(T),
    StartEnd(T, T),
}

impl<T: ToCss> ToCss for SidePair<T> {
    fn to_css(&self, buf: &mut String) {
        match self {
            SidePair::All(all) => all.to_css(buf),
            SidePair::StartEnd(start, end) => {
                start.to_css(buf);
                buf.push(' ');
                end.to_css(buf);
            }
        }
    }
}
