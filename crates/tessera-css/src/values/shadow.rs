//! Box and text shadows
//!
//! - [CSS Backgrounds and Borders Level 3 § 6.1 'box-shadow'](https://www.w3.org/TR/css-backgrounds-3/#box-shadow)
//! - [CSS Text Decoration Level 3 § 4 'text-shadow'](https://www.w3.org/TR/css-text-decor-3/#text-shadow-property)

use std::fmt;

use serde::Serialize;

use super::color::Color;
use super::length::Length;
use crate::render::{impl_render, write_list_or_none};

/// One layer of a `box-shadow`.
///
/// [§ 6.1](https://www.w3.org/TR/css-backgrounds-3/#shadow-inset)
/// `<shadow> = <color>? && [<length>{2} <length [0,∞]>? <length>?] && inset?`
///
/// Always renders all four lengths, so unset offsets and radii appear as
/// `0.0px`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shadow {
    /// "Specifies the horizontal offset of the shadow."
    pub offset_x: Length,
    /// "Specifies the vertical offset of the shadow."
    pub offset_y: Length,
    /// "Specifies the blur radius."
    pub blur_radius: Length,
    /// "Specifies the spread distance."
    pub spread_radius: Length,
    /// Shadow color.
    pub color: Color,
    /// "If present, the inset keyword changes the drop shadow from an outer
    /// box-shadow ... to an inner box-shadow"
    pub inset: bool,
}

impl Shadow {
    /// A zero-offset, unblurred outer shadow of `color`.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self {
            offset_x: Length::ZERO,
            offset_y: Length::ZERO,
            blur_radius: Length::ZERO,
            spread_radius: Length::ZERO,
            color,
            inset: false,
        }
    }

    /// Set both offsets.
    #[must_use]
    pub fn offset(mut self, x: Length, y: Length) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    /// Set the blur radius.
    #[must_use]
    pub fn blur(mut self, radius: Length) -> Self {
        self.blur_radius = radius;
        self
    }

    /// Set the spread distance.
    #[must_use]
    pub fn spread(mut self, radius: Length) -> Self {
        self.spread_radius = radius;
        self
    }

    /// Make this an inner shadow.
    #[must_use]
    pub fn inset(mut self) -> Self {
        self.inset = true;
        self
    }
}

impl fmt::Display for Shadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inset {
            f.write_str("inset ")?;
        }
        write!(
            f,
            "{} {} {} {} {}",
            self.offset_x, self.offset_y, self.blur_radius, self.spread_radius, self.color
        )
    }
}

/// [§ 6.1 'box-shadow'](https://www.w3.org/TR/css-backgrounds-3/#box-shadow)
///
/// "Value: none | <shadow>#". Layers join with `, `; the first is on top.
/// A one-layer list renders the same text as its [`Shadow`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoxShadow(pub Vec<Shadow>);

impl BoxShadow {
    /// A list of shadow layers.
    #[must_use]
    pub const fn new(shadows: Vec<Shadow>) -> Self {
        Self(shadows)
    }

    /// A single soft drop shadow: `0 4px 6px 0 <color>`.
    #[must_use]
    pub fn simple(color: Color) -> Self {
        Shadow::new(color)
            .offset(Length::ZERO, Length::px(4.0))
            .blur(Length::px(6.0))
            .into()
    }

    /// Three stacked shadows of increasing depth.
    #[must_use]
    pub fn layered(light: Color, medium: Color, dark: Color) -> Self {
        Self(vec![
            Shadow::new(light)
                .offset(Length::ZERO, Length::px(2.0))
                .blur(Length::px(4.0)),
            Shadow::new(medium)
                .offset(Length::ZERO, Length::px(4.0))
                .blur(Length::px(8.0)),
            Shadow::new(dark)
                .offset(Length::ZERO, Length::px(8.0))
                .blur(Length::px(16.0)),
        ])
    }

    /// A single inner shadow: `inset 0 2px 4px -1px <color>`.
    #[must_use]
    pub fn inset(color: Color) -> Self {
        Shadow::new(color)
            .offset(Length::ZERO, Length::px(2.0))
            .blur(Length::px(4.0))
            .spread(Length::px(-1.0))
            .inset()
            .into()
    }
}

impl From<Shadow> for BoxShadow {
    fn from(shadow: Shadow) -> Self {
        Self(vec![shadow])
    }
}

impl fmt::Display for BoxShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list_or_none(f, &self.0, ", ")
    }
}

/// One layer of a `text-shadow`.
///
/// "Value: none | [ <color>? && <length>{2,3} ]#". Text shadows have no
/// spread and no `inset`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextShadow {
    /// Horizontal offset.
    pub offset_x: Length,
    /// Vertical offset.
    pub offset_y: Length,
    /// Blur radius.
    pub blur_radius: Length,
    /// Shadow color.
    pub color: Color,
}

impl TextShadow {
    /// A text shadow with all three lengths given.
    #[must_use]
    pub const fn new(offset_x: Length, offset_y: Length, blur_radius: Length, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur_radius,
            color,
        }
    }
}

impl fmt::Display for TextShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.offset_x, self.offset_y, self.blur_radius, self.color
        )
    }
}

/// A comma-separated `text-shadow` list; empty renders `none`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextShadows(pub Vec<TextShadow>);

impl From<TextShadow> for TextShadows {
    fn from(shadow: TextShadow) -> Self {
        Self(vec![shadow])
    }
}

impl fmt::Display for TextShadows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list_or_none(f, &self.0, ", ")
    }
}

impl_render!(Shadow, BoxShadow, TextShadow, TextShadows);
