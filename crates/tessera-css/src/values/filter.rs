//! CSS filter chains
//!
//! [Filter Effects Level 1](https://www.w3.org/TR/filter-effects-1/)

use std::fmt;
use std::ops::Add;

use serde::Serialize;

use super::angle::Angle;
use super::color::Color;
use super::length::Length;
use crate::render::{FractionPercent, impl_render, write_list_or_none};

/// [§ 13 Filter Functions](https://www.w3.org/TR/filter-effects-1/#filter-functions)
///
/// Amount arguments are fractions (`0.5` is half strength) and render as
/// percentages with two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FilterFunction {
    /// "Applies a Gaussian blur to the input image."
    Blur(Length),
    /// "Applies a linear multiplier to input image, making it appear more or
    /// less bright."
    Brightness(f64),
    /// "Adjusts the contrast of the input."
    Contrast(f64),
    /// "Applies a drop shadow effect to the input image."
    DropShadow {
        /// Horizontal offset.
        offset_x: Length,
        /// Vertical offset.
        offset_y: Length,
        /// Blur radius.
        blur_radius: Length,
        /// Shadow color.
        color: Color,
    },
    /// "Converts the input image to grayscale."
    Grayscale(f64),
    /// "Applies a hue rotation on the input image."
    HueRotate(Angle),
    /// "Inverts the samples in the input image."
    Invert(f64),
    /// "Applies transparency to the samples in the input image."
    Opacity(f64),
    /// "Saturates the input image."
    Saturate(f64),
    /// "Converts the input image to sepia."
    Sepia(f64),
    /// A reference to an SVG `<filter>` element.
    Url(String),
}

impl fmt::Display for FilterFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blur(radius) => write!(f, "blur({radius})"),
            Self::Brightness(amount) => write!(f, "brightness({})", FractionPercent(*amount)),
            Self::Contrast(amount) => write!(f, "contrast({})", FractionPercent(*amount)),
            Self::DropShadow {
                offset_x,
                offset_y,
                blur_radius,
                color,
            } => write!(f, "drop-shadow({offset_x} {offset_y} {blur_radius} {color})"),
            Self::Grayscale(amount) => write!(f, "grayscale({})", FractionPercent(*amount)),
            Self::HueRotate(angle) => write!(f, "hue-rotate({angle})"),
            Self::Invert(amount) => write!(f, "invert({})", FractionPercent(*amount)),
            Self::Opacity(amount) => write!(f, "opacity({})", FractionPercent(*amount)),
            Self::Saturate(amount) => write!(f, "saturate({})", FractionPercent(*amount)),
            Self::Sepia(amount) => write!(f, "sepia({})", FractionPercent(*amount)),
            Self::Url(url) => write!(f, "url({url})"),
        }
    }
}

/// [§ 5 The `filter` property](https://www.w3.org/TR/filter-effects-1/#FilterProperty)
///
/// "<filter-value-list> = [ <filter-function> | <url> ]+", applied in order.
/// An empty chain renders `none`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Filter(pub Vec<FilterFunction>);

impl Filter {
    /// A chain of the given functions.
    #[must_use]
    pub const fn new(functions: Vec<FilterFunction>) -> Self {
        Self(functions)
    }

    /// `blur(<radius>)`
    #[must_use]
    pub fn blur(radius: Length) -> Self {
        FilterFunction::Blur(radius).into()
    }

    /// `brightness(<amount>)`
    #[must_use]
    pub fn brightness(amount: f64) -> Self {
        FilterFunction::Brightness(amount).into()
    }

    /// `contrast(<amount>)`
    #[must_use]
    pub fn contrast(amount: f64) -> Self {
        FilterFunction::Contrast(amount).into()
    }

    /// `drop-shadow(<x> <y> <blur> <color>)`
    #[must_use]
    pub fn drop_shadow(offset_x: Length, offset_y: Length, blur_radius: Length, color: Color) -> Self {
        FilterFunction::DropShadow {
            offset_x,
            offset_y,
            blur_radius,
            color,
        }
        .into()
    }

    /// `grayscale(<amount>)`
    #[must_use]
    pub fn grayscale(amount: f64) -> Self {
        FilterFunction::Grayscale(amount).into()
    }

    /// `hue-rotate(<angle>)`
    #[must_use]
    pub fn hue_rotate(angle: Angle) -> Self {
        FilterFunction::HueRotate(angle).into()
    }

    /// `invert(<amount>)`
    #[must_use]
    pub fn invert(amount: f64) -> Self {
        FilterFunction::Invert(amount).into()
    }

    /// `opacity(<amount>)`
    #[must_use]
    pub fn opacity(amount: f64) -> Self {
        FilterFunction::Opacity(amount).into()
    }

    /// `saturate(<amount>)`
    #[must_use]
    pub fn saturate(amount: f64) -> Self {
        FilterFunction::Saturate(amount).into()
    }

    /// `sepia(<amount>)`
    #[must_use]
    pub fn sepia(amount: f64) -> Self {
        FilterFunction::Sepia(amount).into()
    }

    /// `url(<reference>)`
    #[must_use]
    pub fn url(reference: impl Into<String>) -> Self {
        FilterFunction::Url(reference.into()).into()
    }
}

impl From<FilterFunction> for Filter {
    fn from(function: FilterFunction) -> Self {
        Self(vec![function])
    }
}

impl Add for Filter {
    type Output = Self;

    /// Chain `rhs` after `self`.
    fn add(mut self, rhs: Self) -> Self {
        self.0.extend(rhs.0);
        self
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list_or_none(f, &self.0, " ")
    }
}

impl_render!(Filter, FilterFunction);
