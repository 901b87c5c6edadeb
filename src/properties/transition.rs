//! Transition timing properties.

use super::property;
use crate::values::Time;

property! {
    /// `transition-duration`.
    pub enum TransitionDuration: "transition-duration" {
        Time(Time),
    }
}

property! {
    /// `transition-delay`.
    pub enum TransitionDelay: "transition-delay" {
        Time(Time),
    }
}

macro_rules! time_property_ctors {
    ($($name:ident),+) => {
        $(
            impl $name {
                pub const fn s(value: f64) -> Self {
                    $name::Time(Time::s(value))
                }

                pub const fn ms(value: f64) -> Self {
                    $name::Time(Time::ms(value))
                }
            }
        )+
    };
}

time_property_ctors!(TransitionDuration, TransitionDelay);
