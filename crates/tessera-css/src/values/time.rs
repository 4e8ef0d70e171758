//! CSS Time values
//!
//! [CSS Values and Units Level 4 § 7.2](https://www.w3.org/TR/css-values-4/#time)

use std::fmt;
use std::ops::Add;

use serde::Serialize;

use crate::render::{Num, impl_render};

/// [§ 7.2 Duration Units](https://www.w3.org/TR/css-values-4/#time)
///
/// "Time values are dimensions denoted by <time>."
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Time {
    /// "Seconds."
    Seconds(f64),
    /// "Milliseconds. There are 1000 milliseconds in a second."
    Milliseconds(f64),
}

impl Time {
    /// `0s`
    pub const ZERO: Self = Self::Seconds(0.0);

    /// Seconds.
    #[must_use]
    pub const fn s(value: f64) -> Self {
        Self::Seconds(value)
    }

    /// Milliseconds.
    #[must_use]
    pub const fn ms(value: f64) -> Self {
        Self::Milliseconds(value)
    }

    /// The duration in seconds.
    #[must_use]
    pub fn as_seconds(self) -> f64 {
        match self {
            Self::Seconds(value) => value,
            Self::Milliseconds(value) => value / 1000.0,
        }
    }
}

impl Add for Time {
    type Output = Self;

    /// Same units add directly; mixed units add in seconds.
    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Seconds(a), Self::Seconds(b)) => Self::Seconds(a + b),
            (Self::Milliseconds(a), Self::Milliseconds(b)) => Self::Milliseconds(a + b),
            (Self::Seconds(_), Self::Milliseconds(_)) | (Self::Milliseconds(_), Self::Seconds(_)) => {
                Self::Seconds(self.as_seconds() + rhs.as_seconds())
            }
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(value) => write!(f, "{}s", Num(*value)),
            Self::Milliseconds(value) => write!(f, "{}ms", Num(*value)),
        }
    }
}

impl_render!(Time);
