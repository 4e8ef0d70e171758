//! Clipping paths
//!
//! [CSS Masking Level 1 § 5 Clipping Paths](https://www.w3.org/TR/css-masking-1/#clipping-paths)
//!
//! Shapes come from [CSS Shapes Level 1 § 3.1 Basic Shapes](https://www.w3.org/TR/css-shapes-1/#basic-shape-functions).
//! Optional `at <position>` and `round <radius>` parts are left out entirely
//! when unset.

use std::fmt;

use serde::Serialize;

use super::global::Global;
use super::length::Length;
use crate::render::{impl_render, write_joined};

/// One `x y` vertex of a [`ClipPath::Polygon`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipPoint {
    /// Horizontal offset.
    pub x: Length,
    /// Vertical offset.
    pub y: Length,
}

impl ClipPoint {
    /// A vertex at `x y`.
    #[must_use]
    pub const fn new(x: Length, y: Length) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for ClipPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// [§ 5.1 'clip-path'](https://www.w3.org/TR/css-masking-1/#the-clip-path)
///
/// "The clip-path property creates a clipping region that sets what part of
/// an element should be shown."
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ClipPath {
    /// No clipping.
    None,
    /// `circle(<radius> [at <x> <y>])`
    Circle {
        /// Circle radius.
        radius: Length,
        /// Center; the shape is centered in its box when unset.
        center: Option<ClipPoint>,
    },
    /// `ellipse(<rx> <ry> [at <x> <y>])`
    Ellipse {
        /// Horizontal radius.
        radius_x: Length,
        /// Vertical radius.
        radius_y: Length,
        /// Center; the shape is centered in its box when unset.
        center: Option<ClipPoint>,
    },
    /// [§ 3.1.1 inset()](https://www.w3.org/TR/css-shapes-1/#funcdef-basic-shape-inset)
    ///
    /// "The optional <border-radius> argument(s) define rounded corners for
    /// the inset rectangle using the border-radius shorthand syntax."
    Inset {
        /// Offset from the top edge.
        top: Length,
        /// Offset from the right edge.
        right: Length,
        /// Offset from the bottom edge.
        bottom: Length,
        /// Offset from the left edge.
        left: Length,
        /// Corner rounding, written as `round <radius>`.
        round: Option<Length>,
    },
    /// `polygon(<x> <y>, ...)`; no vertices renders `none`.
    Polygon(Vec<ClipPoint>),
    /// Verbatim clip-path text; blank text renders `none`.
    Custom(String),
    /// A CSS-wide keyword.
    Global(Global),
}

impl ClipPath {
    /// A circle centered in the reference box.
    #[must_use]
    pub const fn circle(radius: Length) -> Self {
        Self::Circle {
            radius,
            center: None,
        }
    }

    /// A circle around `center`.
    #[must_use]
    pub const fn circle_at(radius: Length, center: ClipPoint) -> Self {
        Self::Circle {
            radius,
            center: Some(center),
        }
    }

    /// An ellipse centered in the reference box.
    #[must_use]
    pub const fn ellipse(radius_x: Length, radius_y: Length) -> Self {
        Self::Ellipse {
            radius_x,
            radius_y,
            center: None,
        }
    }

    /// An inset rectangle with square corners.
    #[must_use]
    pub const fn inset(top: Length, right: Length, bottom: Length, left: Length) -> Self {
        Self::Inset {
            top,
            right,
            bottom,
            left,
            round: None,
        }
    }

    /// A polygon through `points`, in order.
    #[must_use]
    pub fn polygon(points: impl IntoIterator<Item = ClipPoint>) -> Self {
        Self::Polygon(points.into_iter().collect())
    }

    /// Give a circle or ellipse an explicit center. Other shapes are returned
    /// unchanged.
    #[must_use]
    pub fn at(self, point: ClipPoint) -> Self {
        match self {
            Self::Circle { radius, .. } => Self::Circle {
                radius,
                center: Some(point),
            },
            Self::Ellipse {
                radius_x, radius_y, ..
            } => Self::Ellipse {
                radius_x,
                radius_y,
                center: Some(point),
            },
            other => other,
        }
    }

    /// Round the corners of an inset. Other shapes are returned unchanged.
    #[must_use]
    pub fn round(self, radius: Length) -> Self {
        match self {
            Self::Inset {
                top,
                right,
                bottom,
                left,
                ..
            } => Self::Inset {
                top,
                right,
                bottom,
                left,
                round: Some(radius),
            },
            other => other,
        }
    }
}

impl fmt::Display for ClipPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Circle { radius, center } => {
                write!(f, "circle({radius}")?;
                if let Some(center) = center {
                    write!(f, " at {center}")?;
                }
                f.write_str(")")
            }
            Self::Ellipse {
                radius_x,
                radius_y,
                center,
            } => {
                write!(f, "ellipse({radius_x} {radius_y}")?;
                if let Some(center) = center {
                    write!(f, " at {center}")?;
                }
                f.write_str(")")
            }
            Self::Inset {
                top,
                right,
                bottom,
                left,
                round,
            } => {
                write!(f, "inset({top} {right} {bottom} {left}")?;
                if let Some(round) = round {
                    write!(f, " round {round}")?;
                }
                f.write_str(")")
            }
            Self::Polygon(points) if points.is_empty() => f.write_str("none"),
            Self::Polygon(points) => {
                f.write_str("polygon(")?;
                write_joined(f, points, ", ")?;
                f.write_str(")")
            }
            Self::Custom(text) if text.trim().is_empty() => f.write_str("none"),
            Self::Custom(text) => f.write_str(text),
            Self::Global(global) => write!(f, "{global}"),
        }
    }
}

impl From<Global> for ClipPath {
    fn from(global: Global) -> Self {
        Self::Global(global)
    }
}

impl_render!(ClipPath, ClipPoint);
