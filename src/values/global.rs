//! The CSS-wide keyword set.

use super::keyword_enum;

keyword_enum! {
    /// The five CSS-wide keywords, valid as the value of any property.
    ///
    /// Defined once and embedded by every property type as its `Global`
    /// variant rather than re-declared per property.
    pub enum Global {
        Inherit => "inherit",
        Initial => "initial",
        Revert => "revert",
        RevertLayer => "revert-layer",
        Unset => "unset",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToCss;

    #[test]
    fn test_global_keywords() {
        assert_eq!(Global::Inherit.to_css_string(), "inherit");
        assert_eq!(Global::Initial.to_css_string(), "initial");
        assert_eq!(Global::Revert.to_css_string(), "revert");
        assert_eq!(Global::RevertLayer.to_css_string(), "revert-layer");
        assert_eq!(Global::Unset.to_css_string(), "unset");
    }
}
