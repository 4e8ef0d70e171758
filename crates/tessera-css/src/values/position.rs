//! CSS position values and object-position configuration
//!
//! - [CSS Values and Units Level 4 § 8.3 `<position>`](https://www.w3.org/TR/css-values-4/#position)
//! - [CSS Images Level 3 § 5.5 `object-position`](https://www.w3.org/TR/css-images-3/#the-object-position)

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use super::global::Global;
use super::length::Length;
use crate::render::impl_render;

/// Horizontal `<position>` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum HorizontalKeyword {
    /// `left`
    #[strum(serialize = "left")]
    Left,
    /// `center`
    #[strum(serialize = "center")]
    Center,
    /// `right`
    #[strum(serialize = "right")]
    Right,
}

/// Vertical `<position>` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum VerticalKeyword {
    /// `top`
    #[strum(serialize = "top")]
    Top,
    /// `center`
    #[strum(serialize = "center")]
    Center,
    /// `bottom`
    #[strum(serialize = "bottom")]
    Bottom,
}

/// [§ 8.3 Positioning](https://www.w3.org/TR/css-values-4/#position)
///
/// "The <position> value specifies the position of an object area (e.g.
/// background image) inside a positioning area."
///
/// Percentages are expressed as [`Length::Percentage`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Position {
    /// Two keywords, horizontal first.
    Keywords(HorizontalKeyword, VerticalKeyword),
    /// Two length-percentages, x first.
    Lengths(Length, Length),
    /// A keyword on one axis and a length-percentage on the other.
    Mixed(MixedPosition),
}

/// Keyword/length combinations of a two-value [`Position`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MixedPosition {
    /// `left 20px`
    KeywordLength(HorizontalKeyword, Length),
    /// `20px top`
    LengthKeyword(Length, VerticalKeyword),
}

impl Position {
    /// `center center`
    pub const CENTER: Self = Self::Keywords(HorizontalKeyword::Center, VerticalKeyword::Center);

    /// Two keywords.
    #[must_use]
    pub const fn keywords(x: HorizontalKeyword, y: VerticalKeyword) -> Self {
        Self::Keywords(x, y)
    }

    /// Two length-percentages.
    #[must_use]
    pub const fn lengths(x: Length, y: Length) -> Self {
        Self::Lengths(x, y)
    }

    /// Horizontal keyword, vertical length.
    #[must_use]
    pub const fn keyword_x(x: HorizontalKeyword, y: Length) -> Self {
        Self::Mixed(MixedPosition::KeywordLength(x, y))
    }

    /// Horizontal length, vertical keyword.
    #[must_use]
    pub const fn keyword_y(x: Length, y: VerticalKeyword) -> Self {
        Self::Mixed(MixedPosition::LengthKeyword(x, y))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keywords(x, y) => write!(f, "{x} {y}"),
            Self::Lengths(x, y) => write!(f, "{x} {y}"),
            Self::Mixed(MixedPosition::KeywordLength(x, y)) => write!(f, "{x} {y}"),
            Self::Mixed(MixedPosition::LengthKeyword(x, y)) => write!(f, "{x} {y}"),
        }
    }
}

/// Keyword accepted by `object-position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum PositionKeyword {
    /// `left`
    #[strum(serialize = "left")]
    Left,
    /// `center`
    #[strum(serialize = "center")]
    Center,
    /// `right`
    #[strum(serialize = "right")]
    Right,
    /// `top`
    #[strum(serialize = "top")]
    Top,
    /// `bottom`
    #[strum(serialize = "bottom")]
    Bottom,
}

/// One component of an [`ObjectPosition`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PositionValue {
    /// A length-percentage.
    Length(Length),
    /// A keyword.
    Keyword(PositionKeyword),
}

impl fmt::Display for PositionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(length) => write!(f, "{length}"),
            Self::Keyword(keyword) => write!(f, "{keyword}"),
        }
    }
}

/// [CSS Images Level 3 § 5.5](https://www.w3.org/TR/css-images-3/#the-object-position)
///
/// "The object-position property determines the alignment of the replaced
/// element inside its box."
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectPosition {
    /// A single component; the other axis is centered.
    One(PositionValue),
    /// x then y.
    Two(PositionValue, PositionValue),
    /// A CSS-wide keyword.
    Global(Global),
}

const fn keyword(keyword: PositionKeyword) -> PositionValue {
    PositionValue::Keyword(keyword)
}

impl ObjectPosition {
    /// `left`
    pub const LEFT: Self = Self::One(keyword(PositionKeyword::Left));
    /// `center`
    pub const CENTER: Self = Self::One(keyword(PositionKeyword::Center));
    /// `right`
    pub const RIGHT: Self = Self::One(keyword(PositionKeyword::Right));
    /// `top`
    pub const TOP: Self = Self::One(keyword(PositionKeyword::Top));
    /// `bottom`
    pub const BOTTOM: Self = Self::One(keyword(PositionKeyword::Bottom));
    /// `left top`
    pub const TOP_LEFT: Self = Self::Two(keyword(PositionKeyword::Left), keyword(PositionKeyword::Top));
    /// `center top`
    pub const TOP_CENTER: Self = Self::Two(keyword(PositionKeyword::Center), keyword(PositionKeyword::Top));
    /// `right top`
    pub const TOP_RIGHT: Self = Self::Two(keyword(PositionKeyword::Right), keyword(PositionKeyword::Top));
    /// `left center`
    pub const CENTER_LEFT: Self = Self::Two(keyword(PositionKeyword::Left), keyword(PositionKeyword::Center));
    /// `right center`
    pub const CENTER_RIGHT: Self = Self::Two(keyword(PositionKeyword::Right), keyword(PositionKeyword::Center));
    /// `left bottom`
    pub const BOTTOM_LEFT: Self = Self::Two(keyword(PositionKeyword::Left), keyword(PositionKeyword::Bottom));
    /// `center bottom`
    pub const BOTTOM_CENTER: Self =
        Self::Two(keyword(PositionKeyword::Center), keyword(PositionKeyword::Bottom));
    /// `right bottom`
    pub const BOTTOM_RIGHT: Self =
        Self::Two(keyword(PositionKeyword::Right), keyword(PositionKeyword::Bottom));
    /// `inherit`
    pub const INHERIT: Self = Self::Global(Global::Inherit);
    /// `initial`
    pub const INITIAL: Self = Self::Global(Global::Initial);
    /// `unset`
    pub const UNSET: Self = Self::Global(Global::Unset);

    /// A single length-percentage.
    #[must_use]
    pub const fn length(length: Length) -> Self {
        Self::One(PositionValue::Length(length))
    }

    /// Two length-percentages.
    #[must_use]
    pub const fn lengths(x: Length, y: Length) -> Self {
        Self::Two(PositionValue::Length(x), PositionValue::Length(y))
    }

    /// Two percentages.
    #[must_use]
    pub const fn percentages(x: f64, y: f64) -> Self {
        Self::lengths(Length::Percentage(x), Length::Percentage(y))
    }

    /// `x` horizontally, centered vertically.
    #[must_use]
    pub const fn x(x: Length) -> Self {
        Self::Two(PositionValue::Length(x), keyword(PositionKeyword::Center))
    }

    /// Centered horizontally, `y` vertically.
    #[must_use]
    pub const fn y(y: Length) -> Self {
        Self::Two(keyword(PositionKeyword::Center), PositionValue::Length(y))
    }

    /// The same length on both axes.
    #[must_use]
    pub fn symmetric(value: Length) -> Self {
        Self::lengths(value.clone(), value)
    }
}

impl fmt::Display for ObjectPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(value) => write!(f, "{value}"),
            Self::Two(x, y) => write!(f, "{x} {y}"),
            Self::Global(global) => write!(f, "{global}"),
        }
    }
}

/// Defaults for replaced-element styling, passed explicitly to whichever
/// formatter needs a fallback `object-position`.
///
/// ```
/// use tessera_css::{ObjectPosition, ObjectStyle, Render};
///
/// let style = ObjectStyle::default().with_position(ObjectPosition::TOP_LEFT);
/// assert_eq!(style.position.render(), "left top");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectStyle {
    /// Position used when a rule sets no `object-position` of its own.
    pub position: ObjectPosition,
}

impl ObjectStyle {
    /// A style with the given default position.
    #[must_use]
    pub const fn new(position: ObjectPosition) -> Self {
        Self { position }
    }

    /// Replace the default position.
    #[must_use]
    pub fn with_position(mut self, position: ObjectPosition) -> Self {
        self.position = position;
        self
    }
}

impl Default for ObjectStyle {
    fn default() -> Self {
        Self::new(ObjectPosition::INHERIT)
    }
}

impl_render!(
    Position,
    HorizontalKeyword,
    VerticalKeyword,
    PositionKeyword,
    PositionValue,
    ObjectPosition,
);
