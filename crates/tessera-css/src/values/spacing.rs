//! Margin and padding
//!
//! [CSS Box Model Level 3 § 5 Margins, § 6 Padding](https://www.w3.org/TR/css-box-3/#margins)
//!
//! Both shorthands share the `<top> <right> <bottom> <left>` edge grammar, so
//! one [`BoxEdges`] type serves each.

use std::fmt;

use serde::Serialize;

use super::length::Length;
use crate::render::{impl_render, write_four};

/// [§ 5.2 'margin' shorthand](https://www.w3.org/TR/css-box-3/#margin-shorthand)
///
/// "If there are two values, the top and bottom margins are set to the first
/// value and the right and left margins are set to the second."
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BoxEdges {
    /// One value for every edge. Keywords (`auto`) and CSS-wide keywords are
    /// written through the [`Length`] they wrap.
    All(Length),
    /// Left and right only: `0 <x>`.
    Horizontal(Length),
    /// Top and bottom only: `<y> 0`.
    Vertical(Length),
    /// Four edges in clockwise order from the top; unset edges are `0`.
    Edges {
        /// Top edge.
        top: Option<Length>,
        /// Right edge.
        right: Option<Length>,
        /// Bottom edge.
        bottom: Option<Length>,
        /// Left edge.
        left: Option<Length>,
    },
}

/// The `margin` shorthand.
pub type Margin = BoxEdges;

/// The `padding` shorthand.
pub type Padding = BoxEdges;

impl BoxEdges {
    /// `auto` (margins only).
    pub const AUTO: Self = Self::All(Length::AUTO);
    /// `inherit`
    pub const INHERIT: Self = Self::All(Length::INHERIT);
    /// `initial`
    pub const INITIAL: Self = Self::All(Length::INITIAL);
    /// `revert`
    pub const REVERT: Self = Self::All(Length::REVERT);
    /// `revert-layer`
    pub const REVERT_LAYER: Self = Self::All(Length::REVERT_LAYER);
    /// `unset`
    pub const UNSET: Self = Self::All(Length::UNSET);

    /// Four explicit edges; `None` renders `0`.
    #[must_use]
    pub const fn trbl(
        top: Option<Length>,
        right: Option<Length>,
        bottom: Option<Length>,
        left: Option<Length>,
    ) -> Self {
        Self::Edges {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Only the top edge.
    #[must_use]
    pub const fn top(length: Length) -> Self {
        Self::trbl(Some(length), None, None, None)
    }

    /// Only the right edge.
    #[must_use]
    pub const fn right(length: Length) -> Self {
        Self::trbl(None, Some(length), None, None)
    }

    /// Only the bottom edge.
    #[must_use]
    pub const fn bottom(length: Length) -> Self {
        Self::trbl(None, None, Some(length), None)
    }

    /// Only the left edge.
    #[must_use]
    pub const fn left(length: Length) -> Self {
        Self::trbl(None, None, None, Some(length))
    }
}

impl fmt::Display for BoxEdges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All(length) => write!(f, "{length}"),
            Self::Horizontal(length) => write!(f, "0 {length}"),
            Self::Vertical(length) => write!(f, "{length} 0"),
            Self::Edges {
                top,
                right,
                bottom,
                left,
            } => write_four(f, [top.as_ref(), right.as_ref(), bottom.as_ref(), left.as_ref()]),
        }
    }
}

impl From<Length> for BoxEdges {
    fn from(length: Length) -> Self {
        Self::All(length)
    }
}

impl_render!(BoxEdges);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_value_forms_follow_vertical_then_horizontal() {
        assert_eq!(BoxEdges::Horizontal(Length::px(8.0)).to_string(), "0 8.0px");
        assert_eq!(BoxEdges::Vertical(Length::px(8.0)).to_string(), "8.0px 0");
    }

    #[test]
    fn test_single_edge_fills_others_with_zero() {
        assert_eq!(Margin::left(Length::em(1.0)).to_string(), "0 0 0 1.0em");
        assert_eq!(Padding::top(Length::px(2.0)).to_string(), "2.0px 0 0 0");
        assert_eq!(Margin::AUTO.to_string(), "auto");
    }
}
