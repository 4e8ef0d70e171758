//! CSS images and gradients
//!
//! [CSS Images Level 3](https://www.w3.org/TR/css-images-3/)

use std::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use super::angle::Angle;
use super::color::Color;
use super::length::Length;
use super::position::Position;
use crate::render::{impl_render, write_joined};

/// [§ 3.4 Gradient Color-Stops](https://www.w3.org/TR/css-images-3/#color-stop-syntax)
///
/// `<linear-color-stop> = <color> <length-percentage>{0,2}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    /// Stop color.
    pub color: Color,
    /// Zero, one or two stop positions.
    pub positions: Vec<Length>,
}

impl GradientStop {
    /// A stop with no explicit position.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            positions: Vec::new(),
        }
    }

    /// Append a stop position.
    #[must_use]
    pub fn at(mut self, position: Length) -> Self {
        self.positions.push(position);
        self
    }
}

impl fmt::Display for GradientStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)?;
        for position in &self.positions {
            write!(f, " {position}")?;
        }
        Ok(())
    }
}

impl From<Color> for GradientStop {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

/// [§ 3.2.2 Radial gradient syntax](https://www.w3.org/TR/css-images-3/#radial-gradient-syntax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum RadialShape {
    /// "The gradient's shape is a circle with constant radius."
    #[strum(serialize = "circle")]
    Circle,
    /// "The gradient's shape is an axis-aligned ellipse."
    #[strum(serialize = "ellipse")]
    Ellipse,
}

/// [§ 3.2.2](https://www.w3.org/TR/css-images-3/#radial-size)
///
/// `<radial-size>` – an extent keyword or an explicit size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RadialSize {
    /// "The ending shape is sized so that it exactly meets the side of the
    /// gradient box closest to the gradient's center."
    ClosestSide,
    /// "Same as closest-side, except the ending shape is sized based on the
    /// farthest side(s)."
    FarthestSide,
    /// "The ending shape is sized so that it passes through the corner of the
    /// gradient box closest to the gradient's center."
    ClosestCorner,
    /// "Same as closest-corner, except the ending shape is sized based on the
    /// farthest corner."
    FarthestCorner,
    /// Explicit horizontal and vertical radii.
    Explicit(Length, Length),
}

impl fmt::Display for RadialSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClosestSide => f.write_str("closest-side"),
            Self::FarthestSide => f.write_str("farthest-side"),
            Self::ClosestCorner => f.write_str("closest-corner"),
            Self::FarthestCorner => f.write_str("farthest-corner"),
            Self::Explicit(width, height) => write!(f, "{width} {height}"),
        }
    }
}

/// [§ 3.1 Linear Gradients](https://www.w3.org/TR/css-images-3/#linear-gradients)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearGradient {
    /// Direction of the gradient line.
    pub angle: Angle,
    /// Color stops, in order.
    pub stops: Vec<GradientStop>,
}

/// [§ 3.2 Radial Gradients](https://www.w3.org/TR/css-images-3/#radial-gradients)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialGradient {
    /// Ending shape.
    pub shape: RadialShape,
    /// Ending shape size.
    pub size: RadialSize,
    /// Gradient center.
    pub position: Position,
    /// Color stops, in order.
    pub stops: Vec<GradientStop>,
}

/// [CSS Images Level 4 § 3.3 Conic Gradients](https://www.w3.org/TR/css-images-4/#conic-gradients)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConicGradient {
    /// Starting angle.
    pub angle: Angle,
    /// Gradient center.
    pub position: Position,
    /// Color stops, in order.
    pub stops: Vec<GradientStop>,
}

/// [§ 3 Gradients](https://www.w3.org/TR/css-images-3/#gradients)
///
/// "A color stop list has at least two color stops." Gradients are rendered
/// with whatever stops they hold; callers supply at least two for the text
/// to be valid CSS.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Gradient {
    /// `linear-gradient()`
    Linear(LinearGradient),
    /// `radial-gradient()`
    Radial(RadialGradient),
    /// `conic-gradient()`
    Conic(ConicGradient),
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stops = match self {
            Self::Linear(gradient) => {
                write!(f, "linear-gradient({}", gradient.angle)?;
                &gradient.stops
            }
            Self::Radial(gradient) => {
                write!(
                    f,
                    "radial-gradient({} {} at {}",
                    gradient.shape, gradient.size, gradient.position
                )?;
                &gradient.stops
            }
            Self::Conic(gradient) => {
                write!(f, "conic-gradient(from {} at {}", gradient.angle, gradient.position)?;
                &gradient.stops
            }
        };
        if !stops.is_empty() {
            f.write_str(", ")?;
            write_joined(f, stops, ", ")?;
        }
        f.write_str(")")
    }
}

/// [§ 2 Image Values](https://www.w3.org/TR/css-images-3/#image-values)
///
/// `<image> = <url> | <gradient>`, plus `none` for image-accepting properties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Image {
    /// `url('...')`
    Url(String),
    /// `none`
    None,
    /// A gradient function.
    Gradient(Gradient),
}

impl Image {
    /// `url('<url>')`
    #[must_use]
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    /// `linear-gradient(<angle>, <stops>)`
    #[must_use]
    pub const fn linear_gradient(angle: Angle, stops: Vec<GradientStop>) -> Self {
        Self::Gradient(Gradient::Linear(LinearGradient { angle, stops }))
    }

    /// `radial-gradient(<shape> <size> at <position>, <stops>)`
    #[must_use]
    pub const fn radial_gradient(
        shape: RadialShape,
        size: RadialSize,
        position: Position,
        stops: Vec<GradientStop>,
    ) -> Self {
        Self::Gradient(Gradient::Radial(RadialGradient {
            shape,
            size,
            position,
            stops,
        }))
    }

    /// `conic-gradient(from <angle> at <position>, <stops>)`
    #[must_use]
    pub const fn conic_gradient(angle: Angle, position: Position, stops: Vec<GradientStop>) -> Self {
        Self::Gradient(Gradient::Conic(ConicGradient {
            angle,
            position,
            stops,
        }))
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "url('{url}')"),
            Self::None => f.write_str("none"),
            Self::Gradient(gradient) => write!(f, "{gradient}"),
        }
    }
}

impl From<Gradient> for Image {
    fn from(gradient: Gradient) -> Self {
        Self::Gradient(gradient)
    }
}

impl_render!(Image, Gradient, GradientStop, RadialShape, RadialSize);
