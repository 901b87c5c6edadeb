//! CSS `<percentage>` values.

use std::hash::{Hash, Hasher};
use std::ops::{Mul, Neg};

use super::number::write_number;
use crate::ToCss;

/// A CSS `<percentage>`. `Percentage(50.0)` serializes as `"50%"`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Percentage(pub f64);

impl Percentage {
    pub const fn new(value: f64) -> Self {
        Percentage(value)
    }

    /// The raw percentage magnitude (`50.0` for `50%`).
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Eq for Percentage {}

impl Hash for Percentage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl ToCss for Percentage {
    fn to_css(&self, buf: &mut String) {
        write_number(buf, self.0);
        buf.push('%');
    }
}

impl Neg for Percentage {
    type Output = Percentage;
    fn neg(self) -> Percentage {
        Percentage(-self.0)
    }
}

impl Mul<f64> for Percentage {
    type Output = Percentage;
    fn mul(self, rhs: f64) -> Percentage {
        Percentage(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_to_css() {
        assert_eq!(Percentage(50.0).to_css_string(), "50%");
        assert_eq!(Percentage(12.5).to_css_string(), "12.5%");
        assert_eq!(Percentage(0.0).to_css_string(), "0%");
        assert_eq!(Percentage(-10.0).to_css_string(), "-10%");
    }
}
