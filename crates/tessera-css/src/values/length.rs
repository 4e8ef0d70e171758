//! CSS Length values and arithmetic
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//!
//! A [`Length`] is any one-dimensional sizing value: a number with a unit, a
//! percentage, an intrinsic sizing keyword, a `calc()` expression, or a
//! CSS-wide keyword.
//!
//! # Arithmetic
//!
//! `+` and `-` combine like-shaped operands numerically. Every other pairing
//! degrades to a [`Length::Calc`] holding the infix expression of the two
//! operand renderings, so the result is still valid CSS:
//!
//! ```
//! use tessera_css::{Length, Render};
//!
//! assert_eq!((Length::px(10.0) + Length::px(5.0)).render(), "15.0px");
//! assert_eq!((Length::px(10.0) + Length::em(2.0)).render(), "calc(10.0px + 2.0em)");
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use tessera_common::warning::warn_once;

use super::global::Global;
use crate::error::ValueError;
use crate::render::{Num, impl_render};

/// [§ 6 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// Unit tag of a [`Length::Dimension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Unit {
    /// "1px = 1/96th of 1in"
    #[strum(serialize = "px")]
    Px,
    /// "Equal to the computed value of the font-size property of the element on which it is used."
    #[strum(serialize = "em")]
    Em,
    /// "Equal to the computed value of font-size on the root element."
    #[strum(serialize = "rem")]
    Rem,
    /// "Equal to 1% of the width of the initial containing block."
    #[strum(serialize = "vw")]
    Vw,
    /// "Equal to 1% of the height of the initial containing block."
    #[strum(serialize = "vh")]
    Vh,
    /// "Equal to the smaller of vw or vh."
    #[strum(serialize = "vmin")]
    Vmin,
    /// "Equal to the larger of vw or vh."
    #[strum(serialize = "vmax")]
    Vmax,
    /// "1cm = 96px/2.54"
    #[strum(serialize = "cm")]
    Cm,
    /// "1mm = 1/10th of 1cm"
    #[strum(serialize = "mm")]
    Mm,
    /// "1in = 2.54cm = 96px"
    #[strum(serialize = "in")]
    In,
    /// "1pt = 1/72th of 1in"
    #[strum(serialize = "pt")]
    Pt,
    /// "1pc = 1/6th of 1in"
    #[strum(serialize = "pc")]
    Pc,
    /// "Equal to the used x-height of the first available font."
    #[strum(serialize = "ex")]
    Ex,
    /// "Represents the typical advance measure of European alphanumeric characters."
    #[strum(serialize = "ch")]
    Ch,
    /// "Equal to the computed value of the line-height property of the element."
    #[strum(serialize = "lh")]
    Lh,
    /// [CSS Grid § 7.2.4 Flexible Lengths](https://www.w3.org/TR/css-grid-2/#fr-unit)
    ///
    /// "A flexible length or <flex> is a dimension with the fr unit."
    #[strum(serialize = "fr")]
    Fr,
    /// "1Q = 1/40th of 1cm"
    #[strum(serialize = "q")]
    Q,
    /// "Equal to the used cap-height of the first available font."
    #[strum(serialize = "cap")]
    Cap,
    /// "Equal to the used advance measure of the 水 glyph."
    #[strum(serialize = "ic")]
    Ic,
    /// "Equal to the computed value of line-height on the root element."
    #[strum(serialize = "rlh")]
    Rlh,
}

/// [CSS Box Sizing Level 3 § 3.2 Intrinsic Size Keywords](https://www.w3.org/TR/css-sizing-3/#sizing-values)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum SizeKeyword {
    /// "For width/height, specifies an automatic size."
    #[strum(serialize = "auto")]
    Auto,
    /// "Use the max-content inline size or max-content block size."
    #[strum(serialize = "max-content")]
    MaxContent,
    /// "Use the min-content inline size or min-content block size."
    #[strum(serialize = "min-content")]
    MinContent,
    /// "Use the fit-content inline size or fit-content block size."
    #[strum(serialize = "fit-content")]
    FitContent,
}

/// [§ 5.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
/// "Lengths refer to distance measurements and are denoted by `<length>` in the
/// property definitions."
///
/// A number-with-unit and a percentage are separate shapes: arithmetic never
/// converts one into the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Length {
    /// [§ 4.4 Numbers with Units](https://www.w3.org/TR/css-values-4/#dimensions)
    /// "A dimension is a number immediately followed by a unit identifier."
    Dimension(f64, Unit),
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    /// "A <percentage> value ... consists of a <number> immediately followed by
    /// a percent sign '%'."
    Percentage(f64),
    /// An intrinsic sizing keyword such as `auto`.
    Keyword(SizeKeyword),
    /// [§ 10.1 calc()](https://www.w3.org/TR/css-values-4/#calc-func)
    ///
    /// An unresolved expression. Holds the text inside the parentheses.
    Calc(String),
    /// A CSS-wide keyword.
    Global(Global),
}

impl Length {
    /// `0px`
    pub const ZERO: Self = Self::Dimension(0.0, Unit::Px);
    /// `auto`
    pub const AUTO: Self = Self::Keyword(SizeKeyword::Auto);
    /// `max-content`
    pub const MAX_CONTENT: Self = Self::Keyword(SizeKeyword::MaxContent);
    /// `min-content`
    pub const MIN_CONTENT: Self = Self::Keyword(SizeKeyword::MinContent);
    /// `fit-content`
    pub const FIT_CONTENT: Self = Self::Keyword(SizeKeyword::FitContent);
    /// `inherit`
    pub const INHERIT: Self = Self::Global(Global::Inherit);
    /// `initial`
    pub const INITIAL: Self = Self::Global(Global::Initial);
    /// `revert`
    pub const REVERT: Self = Self::Global(Global::Revert);
    /// `revert-layer`
    pub const REVERT_LAYER: Self = Self::Global(Global::RevertLayer);
    /// `unset`
    pub const UNSET: Self = Self::Global(Global::Unset);

    /// A length of `value` in `unit`.
    #[must_use]
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self::Dimension(value, unit)
    }

    /// Pixels.
    #[must_use]
    pub const fn px(value: f64) -> Self {
        Self::Dimension(value, Unit::Px)
    }

    /// Font-relative `em`.
    #[must_use]
    pub const fn em(value: f64) -> Self {
        Self::Dimension(value, Unit::Em)
    }

    /// Root font-relative `rem`.
    #[must_use]
    pub const fn rem(value: f64) -> Self {
        Self::Dimension(value, Unit::Rem)
    }

    /// Viewport width percent.
    #[must_use]
    pub const fn vw(value: f64) -> Self {
        Self::Dimension(value, Unit::Vw)
    }

    /// Viewport height percent.
    #[must_use]
    pub const fn vh(value: f64) -> Self {
        Self::Dimension(value, Unit::Vh)
    }

    /// Smaller viewport axis percent.
    #[must_use]
    pub const fn vmin(value: f64) -> Self {
        Self::Dimension(value, Unit::Vmin)
    }

    /// Larger viewport axis percent.
    #[must_use]
    pub const fn vmax(value: f64) -> Self {
        Self::Dimension(value, Unit::Vmax)
    }

    /// Centimeters.
    #[must_use]
    pub const fn cm(value: f64) -> Self {
        Self::Dimension(value, Unit::Cm)
    }

    /// Millimeters.
    #[must_use]
    pub const fn mm(value: f64) -> Self {
        Self::Dimension(value, Unit::Mm)
    }

    /// Inches (`in`).
    #[must_use]
    pub const fn inches(value: f64) -> Self {
        Self::Dimension(value, Unit::In)
    }

    /// Points.
    #[must_use]
    pub const fn pt(value: f64) -> Self {
        Self::Dimension(value, Unit::Pt)
    }

    /// Picas.
    #[must_use]
    pub const fn pc(value: f64) -> Self {
        Self::Dimension(value, Unit::Pc)
    }

    /// x-height.
    #[must_use]
    pub const fn ex(value: f64) -> Self {
        Self::Dimension(value, Unit::Ex)
    }

    /// Advance of the `0` glyph.
    #[must_use]
    pub const fn ch(value: f64) -> Self {
        Self::Dimension(value, Unit::Ch)
    }

    /// Line height.
    #[must_use]
    pub const fn lh(value: f64) -> Self {
        Self::Dimension(value, Unit::Lh)
    }

    /// Grid flex fraction.
    #[must_use]
    pub const fn fr(value: f64) -> Self {
        Self::Dimension(value, Unit::Fr)
    }

    /// Quarter-millimeters.
    #[must_use]
    pub const fn q(value: f64) -> Self {
        Self::Dimension(value, Unit::Q)
    }

    /// Cap height.
    #[must_use]
    pub const fn cap(value: f64) -> Self {
        Self::Dimension(value, Unit::Cap)
    }

    /// Ideographic advance.
    #[must_use]
    pub const fn ic(value: f64) -> Self {
        Self::Dimension(value, Unit::Ic)
    }

    /// Root line height.
    #[must_use]
    pub const fn rlh(value: f64) -> Self {
        Self::Dimension(value, Unit::Rlh)
    }

    /// A percentage; `percent(50.0)` renders `50.0%`.
    #[must_use]
    pub const fn percent(value: f64) -> Self {
        Self::Percentage(value)
    }

    /// A `calc()` expression from the text that goes between the parentheses.
    #[must_use]
    pub fn calc(expression: impl Into<String>) -> Self {
        Self::Calc(expression.into())
    }

    /// Absolute numeric value of a dimension or percentage; `0.0` for every
    /// other shape.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        match self {
            Self::Dimension(value, _) | Self::Percentage(value) => value.abs(),
            Self::Keyword(_) | Self::Calc(_) | Self::Global(_) => 0.0,
        }
    }

    /// Returns true if this length carries a numeric magnitude.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Dimension(..) | Self::Percentage(_))
    }

    /// [§ 10.9 Type Checking](https://www.w3.org/TR/css-values-4/#calc-type-checking)
    ///
    /// Divide the magnitude by `divisor`. Keywords and `calc()` expressions
    /// have nothing to divide and come back unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DivisionByZero`] when `divisor` is zero and
    /// [`ValueError::NotANumber`] when it is NaN, whatever the shape of `self`.
    pub fn checked_div(self, divisor: f64) -> Result<Self, ValueError> {
        if divisor.is_nan() {
            return Err(ValueError::NotANumber);
        }
        if divisor == 0.0 {
            return Err(ValueError::DivisionByZero);
        }
        Ok(match self {
            Self::Dimension(value, unit) => Self::Dimension(value / divisor, unit),
            Self::Percentage(value) => Self::Percentage(value / divisor),
            Self::Keyword(_) | Self::Calc(_) | Self::Global(_) => {
                warn_once(
                    "CSS",
                    "cannot divide a keyword or calc() length; value left unchanged",
                );
                self
            }
        })
    }

    /// Build `calc(<lhs> <op> <rhs>)` from the two operand renderings.
    fn symbolic(lhs: &Self, op: char, rhs: &impl fmt::Display) -> Self {
        Self::Calc(format!("{lhs} {op} {rhs}"))
    }
}

impl Add for Length {
    type Output = Self;

    /// [§ 10.9 Type Checking](https://www.w3.org/TR/css-values-4/#calc-type-checking)
    ///
    /// Same unit or both percentages: numeric sum. Anything else: `calc()`.
    fn add(self, rhs: Self) -> Self {
        match (&self, &rhs) {
            (Self::Dimension(a, lhs_unit), Self::Dimension(b, rhs_unit)) if lhs_unit == rhs_unit => {
                Self::Dimension(a + b, *lhs_unit)
            }
            (Self::Percentage(a), Self::Percentage(b)) => Self::Percentage(a + b),
            _ => Self::symbolic(&self, '+', &rhs),
        }
    }
}

impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Self) {
        *self = std::mem::replace(self, Self::ZERO) + rhs;
    }
}

impl Sub for Length {
    type Output = Self;

    /// Same unit or both percentages: numeric difference. Anything else: `calc()`.
    fn sub(self, rhs: Self) -> Self {
        match (&self, &rhs) {
            (Self::Dimension(a, lhs_unit), Self::Dimension(b, rhs_unit)) if lhs_unit == rhs_unit => {
                Self::Dimension(a - b, *lhs_unit)
            }
            (Self::Percentage(a), Self::Percentage(b)) => Self::Percentage(a - b),
            _ => Self::symbolic(&self, '-', &rhs),
        }
    }
}

impl SubAssign for Length {
    fn sub_assign(&mut self, rhs: Self) {
        *self = std::mem::replace(self, Self::ZERO) - rhs;
    }
}

impl Mul<f64> for Length {
    type Output = Self;

    /// Scale a dimension or percentage. Other shapes become `calc(<lhs> * <n>)`.
    fn mul(self, rhs: f64) -> Self {
        match self {
            Self::Dimension(value, unit) => Self::Dimension(value * rhs, unit),
            Self::Percentage(value) => Self::Percentage(value * rhs),
            Self::Keyword(_) | Self::Calc(_) | Self::Global(_) => Self::symbolic(&self, '*', &Num(rhs)),
        }
    }
}

impl MulAssign<f64> for Length {
    fn mul_assign(&mut self, rhs: f64) {
        *self = std::mem::replace(self, Self::ZERO) * rhs;
    }
}

impl Mul for Length {
    type Output = Self;

    /// Two percentages multiply numerically (`10%` × `50%` = `500%`). CSS has no
    /// product of two lengths, so every other pairing stays symbolic.
    fn mul(self, rhs: Self) -> Self {
        match (&self, &rhs) {
            (Self::Percentage(a), Self::Percentage(b)) => Self::Percentage(a * b),
            _ => Self::symbolic(&self, '*', &rhs),
        }
    }
}

impl Div<f64> for Length {
    type Output = Self;

    /// See [`Length::checked_div`].
    ///
    /// # Panics
    ///
    /// Panics when `rhs` is zero or NaN. Rendering `inf` or `NaN` into a
    /// stylesheet is never wanted; use `checked_div` to handle it instead.
    fn div(self, rhs: f64) -> Self {
        match self.checked_div(rhs) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl DivAssign<f64> for Length {
    fn div_assign(&mut self, rhs: f64) {
        *self = std::mem::replace(self, Self::ZERO) / rhs;
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimension(value, unit) => write!(f, "{}{unit}", Num(*value)),
            Self::Percentage(value) => write!(f, "{}%", Num(*value)),
            Self::Keyword(keyword) => write!(f, "{keyword}"),
            Self::Calc(expression) => write!(f, "calc({expression})"),
            Self::Global(global) => write!(f, "{global}"),
        }
    }
}

impl From<SizeKeyword> for Length {
    fn from(keyword: SizeKeyword) -> Self {
        Self::Keyword(keyword)
    }
}

impl From<Global> for Length {
    fn from(global: Global) -> Self {
        Self::Global(global)
    }
}

impl_render!(Length, Unit, SizeKeyword);
