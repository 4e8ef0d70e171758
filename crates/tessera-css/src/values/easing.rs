//! [CSS Easing Functions Level 1](https://www.w3.org/TR/css-easing-1/)

use std::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::render::{Num, impl_render};

/// [§ 2.3 Step Easing Functions](https://www.w3.org/TR/css-easing-1/#step-easing-functions)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum StepPosition {
    /// "The first rise occurs at input progress value of 0."
    #[strum(serialize = "start")]
    Start,
    /// "The last rise occurs at input progress value of 1."
    #[strum(serialize = "end")]
    End,
}

/// [§ 2 Easing Functions](https://www.w3.org/TR/css-easing-1/#easing-functions)
///
/// Shared by `animation-timing-function` and `transition-timing-function`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub enum TimingFunction {
    /// "Equivalent to cubic-bezier(0.25, 0.1, 0.25, 1)." The initial value.
    #[default]
    Ease,
    /// "Equivalent to linear(0, 1)"
    Linear,
    /// "Equivalent to cubic-bezier(0.42, 0, 1, 1)."
    EaseIn,
    /// "Equivalent to cubic-bezier(0, 0, 0.58, 1)."
    EaseOut,
    /// "Equivalent to cubic-bezier(0.42, 0, 0.58, 1)."
    EaseInOut,
    /// "Computes to steps(1, start)"
    StepStart,
    /// "Computes to steps(1, end)"
    StepEnd,
    /// [§ 2.2 Cubic Bézier Easing Functions](https://www.w3.org/TR/css-easing-1/#cubic-bezier-easing-functions)
    CubicBezier {
        /// P1 x
        x1: f64,
        /// P1 y
        y1: f64,
        /// P2 x
        x2: f64,
        /// P2 y
        y2: f64,
    },
    /// `steps(<integer>, <step-position>)`
    Steps(u32, StepPosition),
}

impl TimingFunction {
    /// [easings.net](https://easings.net/#easeInSine) `easeInSine`
    pub const EASE_IN_SINE: Self = Self::cubic_bezier(0.12, 0.0, 0.39, 0.0);
    /// `easeOutSine`
    pub const EASE_OUT_SINE: Self = Self::cubic_bezier(0.61, 1.0, 0.88, 1.0);
    /// `easeInOutSine`
    pub const EASE_IN_OUT_SINE: Self = Self::cubic_bezier(0.37, 0.0, 0.63, 1.0);

    /// `cubic-bezier(x1, y1, x2, y2)`
    #[must_use]
    pub const fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::CubicBezier { x1, y1, x2, y2 }
    }
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ease => f.write_str("ease"),
            Self::Linear => f.write_str("linear"),
            Self::EaseIn => f.write_str("ease-in"),
            Self::EaseOut => f.write_str("ease-out"),
            Self::EaseInOut => f.write_str("ease-in-out"),
            Self::StepStart => f.write_str("step-start"),
            Self::StepEnd => f.write_str("step-end"),
            Self::CubicBezier { x1, y1, x2, y2 } => write!(
                f,
                "cubic-bezier({}, {}, {}, {})",
                Num(*x1),
                Num(*y1),
                Num(*x2),
                Num(*y2)
            ),
            Self::Steps(count, position) => write!(f, "steps({count}, {position})"),
        }
    }
}

impl_render!(TimingFunction, StepPosition);
