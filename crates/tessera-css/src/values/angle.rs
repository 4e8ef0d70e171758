//! CSS Angle values
//!
//! [CSS Values and Units Level 4 § 7.1](https://www.w3.org/TR/css-values-4/#angles)

use std::fmt;

use serde::Serialize;

use crate::render::{Num, impl_render};

/// [§ 7.1 Angle Units](https://www.w3.org/TR/css-values-4/#angles)
///
/// "Angle values are <dimension>s denoted by <angle>."
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Angle {
    /// "Degrees. There are 360 degrees in a full circle."
    Deg(f64),
    /// "Radians. There are 2π radians in a full circle."
    Rad(f64),
    /// "Gradians, also known as 'gons' or 'grades'. There are 400 gradians in a full circle."
    Grad(f64),
    /// "Turns. There is 1 turn in a full circle."
    Turn(f64),
}

impl Angle {
    /// Degrees.
    #[must_use]
    pub const fn deg(value: f64) -> Self {
        Self::Deg(value)
    }

    /// Radians.
    #[must_use]
    pub const fn rad(value: f64) -> Self {
        Self::Rad(value)
    }

    /// Gradians.
    #[must_use]
    pub const fn grad(value: f64) -> Self {
        Self::Grad(value)
    }

    /// Turns.
    #[must_use]
    pub const fn turn(value: f64) -> Self {
        Self::Turn(value)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deg(value) => write!(f, "{}deg", Num(*value)),
            Self::Rad(value) => write!(f, "{}rad", Num(*value)),
            Self::Grad(value) => write!(f, "{}grad", Num(*value)),
            Self::Turn(value) => write!(f, "{}turn", Num(*value)),
        }
    }
}

impl_render!(Angle);
