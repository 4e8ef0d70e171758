//! CSS borders and outlines
//!
//! - [CSS Backgrounds and Borders Level 3 § 4 Borders](https://www.w3.org/TR/css-backgrounds-3/#borders)
//! - [CSS Basic User Interface Level 4 § 5 Outline Properties](https://www.w3.org/TR/css-ui-4/#outline-props)

use std::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use super::color::Color;
use super::global::Global;
use super::length::Length;
use crate::render::{impl_render, write_four};

/// [§ 4.3 'border-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
///
/// "<line-width> = <length [0,∞]> | thin | medium | thick"
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub enum BorderWidth {
    /// An explicit width.
    Length(Length),
    /// `thin`
    Thin,
    /// `medium`, the initial value.
    #[default]
    Medium,
    /// `thick`
    Thick,
}

impl fmt::Display for BorderWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(length) => write!(f, "{length}"),
            Self::Thin => f.write_str("thin"),
            Self::Medium => f.write_str("medium"),
            Self::Thick => f.write_str("thick"),
        }
    }
}

impl From<Length> for BorderWidth {
    fn from(length: Length) -> Self {
        Self::Length(length)
    }
}

/// [§ 4.2 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
///
/// `<line-style>`, also used by `outline-style`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum BorderStyle {
    /// "No border. Color and width are ignored"
    #[default]
    #[strum(serialize = "none")]
    None,
    /// "Same as none, but has different behavior in the border conflict
    /// resolution rules for border-collapsed tables"
    #[strum(serialize = "hidden")]
    Hidden,
    /// "A series of round dots."
    #[strum(serialize = "dotted")]
    Dotted,
    /// "A series of square-ended dashes."
    #[strum(serialize = "dashed")]
    Dashed,
    /// "A single line segment."
    #[strum(serialize = "solid")]
    Solid,
    /// "Two parallel solid lines with some space between them."
    #[strum(serialize = "double")]
    Double,
    /// "Looks as if it were carved in the canvas."
    #[strum(serialize = "groove")]
    Groove,
    /// "Looks as if it were coming out of the canvas."
    #[strum(serialize = "ridge")]
    Ridge,
    /// "Looks as if the content on the inside of the border is sunken into
    /// the canvas."
    #[strum(serialize = "inset")]
    Inset,
    /// "Looks as if the content on the inside of the border is coming out of
    /// the canvas."
    #[strum(serialize = "outset")]
    Outset,
}

/// [§ 5.1 'border-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BorderRadius {
    /// One radius for every corner.
    All(Length),
    /// Per-corner radii in top-left, top-right, bottom-right, bottom-left
    /// order. Always written as four values; unset corners are `0`.
    Corners {
        /// `border-top-left-radius`
        top_left: Option<Length>,
        /// `border-top-right-radius`
        top_right: Option<Length>,
        /// `border-bottom-right-radius`
        bottom_right: Option<Length>,
        /// `border-bottom-left-radius`
        bottom_left: Option<Length>,
    },
}

impl BorderRadius {
    /// All four corners given.
    #[must_use]
    pub const fn corners(top_left: Length, top_right: Length, bottom_right: Length, bottom_left: Length) -> Self {
        Self::Corners {
            top_left: Some(top_left),
            top_right: Some(top_right),
            bottom_right: Some(bottom_right),
            bottom_left: Some(bottom_left),
        }
    }

    /// Round only the top-left corner.
    #[must_use]
    pub const fn top_left(radius: Length) -> Self {
        Self::Corners {
            top_left: Some(radius),
            top_right: None,
            bottom_right: None,
            bottom_left: None,
        }
    }

    /// Round only the top-right corner.
    #[must_use]
    pub const fn top_right(radius: Length) -> Self {
        Self::Corners {
            top_left: None,
            top_right: Some(radius),
            bottom_right: None,
            bottom_left: None,
        }
    }

    /// Round only the bottom-right corner.
    #[must_use]
    pub const fn bottom_right(radius: Length) -> Self {
        Self::Corners {
            top_left: None,
            top_right: None,
            bottom_right: Some(radius),
            bottom_left: None,
        }
    }

    /// Round only the bottom-left corner.
    #[must_use]
    pub const fn bottom_left(radius: Length) -> Self {
        Self::Corners {
            top_left: None,
            top_right: None,
            bottom_right: None,
            bottom_left: Some(radius),
        }
    }
}

impl fmt::Display for BorderRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All(radius) => write!(f, "{radius}"),
            Self::Corners {
                top_left,
                top_right,
                bottom_right,
                bottom_left,
            } => write_four(
                f,
                [
                    top_left.as_ref(),
                    top_right.as_ref(),
                    bottom_right.as_ref(),
                    bottom_left.as_ref(),
                ],
            ),
        }
    }
}

/// [§ 4.4 Border Shorthand Properties](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
///
/// A value for `border` or one of its longhands. Side-specific properties
/// take the same values; which side is the formatter's concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Border {
    /// `<line-width> <line-style> <color>?`
    Shorthand {
        /// Line width.
        width: BorderWidth,
        /// Line style.
        style: BorderStyle,
        /// Line color, omitted when absent.
        color: Option<Color>,
    },
    /// `border-width`
    Width(BorderWidth),
    /// `border-style`
    Style(BorderStyle),
    /// `border-color`
    Color(Color),
    /// `border-radius`
    Radius(BorderRadius),
    /// A CSS-wide keyword.
    Global(Global),
}

impl Border {
    /// `none`
    pub const NONE: Self = Self::Style(BorderStyle::None);
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

    /// `<width> <style> [<color>]` with an explicit length width.
    #[must_use]
    pub const fn new(width: Length, style: BorderStyle, color: Option<Color>) -> Self {
        Self::Shorthand {
            width: BorderWidth::Length(width),
            style,
            color,
        }
    }

    /// `border-radius` with one radius for every corner.
    #[must_use]
    pub const fn radius(radius: Length) -> Self {
        Self::Radius(BorderRadius::All(radius))
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shorthand { width, style, color } => {
                write!(f, "{width} {style}")?;
                if let Some(color) = color {
                    write!(f, " {color}")?;
                }
                Ok(())
            }
            Self::Width(width) => write!(f, "{width}"),
            Self::Style(style) => write!(f, "{style}"),
            Self::Color(color) => write!(f, "{color}"),
            Self::Radius(radius) => write!(f, "{radius}"),
            Self::Global(global) => write!(f, "{global}"),
        }
    }
}

/// [CSS UI 4 § 5.1 'outline'](https://www.w3.org/TR/css-ui-4/#outline)
///
/// Written as style, width, then color when set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Outline {
    /// `outline-style`
    pub style: BorderStyle,
    /// `outline-width`
    pub width: BorderWidth,
    /// `outline-color`, omitted when absent.
    pub color: Option<Color>,
}

impl Outline {
    /// `none medium`
    pub const NONE: Self = Self::new(BorderStyle::None, BorderWidth::Medium, None);

    /// An outline from its three parts.
    #[must_use]
    pub const fn new(style: BorderStyle, width: BorderWidth, color: Option<Color>) -> Self {
        Self { style, width, color }
    }

    /// A solid outline.
    #[must_use]
    pub const fn solid(width: BorderWidth, color: Option<Color>) -> Self {
        Self::new(BorderStyle::Solid, width, color)
    }

    /// A dashed outline.
    #[must_use]
    pub const fn dashed(width: BorderWidth, color: Option<Color>) -> Self {
        Self::new(BorderStyle::Dashed, width, color)
    }

    /// A dotted outline.
    #[must_use]
    pub const fn dotted(width: BorderWidth, color: Option<Color>) -> Self {
        Self::new(BorderStyle::Dotted, width, color)
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.style, self.width)?;
        if let Some(color) = &self.color {
            write!(f, " {color}")?;
        }
        Ok(())
    }
}

impl_render!(Border, BorderWidth, BorderStyle, BorderRadius, Outline);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_corner_fills_others_with_zero() {
        assert_eq!(BorderRadius::top_right(Length::px(4.0)).to_string(), "0 4.0px 0 0");
        assert_eq!(BorderRadius::bottom_left(Length::px(4.0)).to_string(), "0 0 0 4.0px");
    }

    #[test]
    fn test_shorthand_omits_missing_color() {
        assert_eq!(Border::new(Length::px(1.0), BorderStyle::Solid, None).to_string(), "1.0px solid");
        assert_eq!(
            Border::new(Length::px(1.0), BorderStyle::Solid, Some(Color::rgb(0, 0, 0))).to_string(),
            "1.0px solid rgb(0, 0, 0)"
        );
    }
}
