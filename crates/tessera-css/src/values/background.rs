//! CSS background values
//!
//! [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/)

use std::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use super::color::Color;
use super::global::Global;
use super::image::Image;
use super::length::Length;
use super::position::Position;
use crate::render::impl_render;

/// [§ 3.9 'background-size'](https://www.w3.org/TR/css-backgrounds-3/#background-size)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BackgroundSize {
    /// `cover` or `contain`.
    Keyword(SizeFit),
    /// Width then height; either may be `auto`.
    Explicit(Length, Length),
}

/// Keyword forms of `background-size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum SizeFit {
    /// "Scale the image, while preserving its intrinsic aspect ratio, to the
    /// smallest size such that both its width and its height can completely
    /// cover the background positioning area."
    #[strum(serialize = "cover")]
    Cover,
    /// "Scale the image to the largest size such that both its width and its
    /// height can fit inside the background positioning area."
    #[strum(serialize = "contain")]
    Contain,
}

impl fmt::Display for BackgroundSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(keyword) => write!(f, "{keyword}"),
            Self::Explicit(width, height) => write!(f, "{width} {height}"),
        }
    }
}

/// [§ 3.4 'background-repeat'](https://www.w3.org/TR/css-backgrounds-3/#background-repeat)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum BackgroundRepeat {
    /// "Computes to repeat no-repeat."
    #[strum(serialize = "repeat-x")]
    RepeatX,
    /// "Computes to no-repeat repeat."
    #[strum(serialize = "repeat-y")]
    RepeatY,
    /// "The image is repeated in this direction as often as needed to cover
    /// the background painting area."
    #[strum(serialize = "repeat")]
    Repeat,
    /// "The image is repeated as often as will fit within the background
    /// positioning area without being clipped."
    #[strum(serialize = "space")]
    Space,
    /// "The image is repeated as often as will fit ... If it doesn't fit a
    /// whole number of times, it is rescaled so that it does."
    #[strum(serialize = "round")]
    Round,
    /// "The image is placed once and not repeated in this direction."
    #[strum(serialize = "no-repeat")]
    NoRepeat,
}

/// [§ 3.5 'background-attachment'](https://www.w3.org/TR/css-backgrounds-3/#background-attachment)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum BackgroundAttachment {
    /// "The background is fixed relative to the element itself and does not
    /// scroll with its contents."
    #[strum(serialize = "scroll")]
    Scroll,
    /// "The background is fixed relative to the viewport."
    #[strum(serialize = "fixed")]
    Fixed,
    /// "The background is fixed relative to the element's contents."
    #[strum(serialize = "local")]
    Local,
}

/// [§ 3.8 'background-origin'](https://www.w3.org/TR/css-backgrounds-3/#background-origin)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum BackgroundOrigin {
    /// `border-box`
    #[strum(serialize = "border-box")]
    BorderBox,
    /// `padding-box`
    #[strum(serialize = "padding-box")]
    PaddingBox,
    /// `content-box`
    #[strum(serialize = "content-box")]
    ContentBox,
}

/// [§ 3.7 'background-clip'](https://www.w3.org/TR/css-backgrounds-3/#background-clip)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum BackgroundClip {
    /// `border-box`
    #[strum(serialize = "border-box")]
    BorderBox,
    /// `padding-box`
    #[strum(serialize = "padding-box")]
    PaddingBox,
    /// `content-box`
    #[strum(serialize = "content-box")]
    ContentBox,
    /// [CSS Backgrounds Level 4](https://drafts.csswg.org/css-backgrounds-4/#valdef-background-clip-text)
    #[strum(serialize = "text")]
    Text,
}

/// [Compositing and Blending § 9.1.1](https://www.w3.org/TR/compositing-1/#porterduffcompositingoperators)
///
/// Porter-Duff compositing operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum CompositeOperator {
    /// `clear`
    #[strum(serialize = "clear")]
    Clear,
    /// `copy`
    #[strum(serialize = "copy")]
    Copy,
    /// `source-over`
    #[strum(serialize = "source-over")]
    SourceOver,
    /// `source-in`
    #[strum(serialize = "source-in")]
    SourceIn,
    /// `source-out`
    #[strum(serialize = "source-out")]
    SourceOut,
    /// `source-atop`
    #[strum(serialize = "source-atop")]
    SourceAtop,
    /// `destination-over`
    #[strum(serialize = "destination-over")]
    DestinationOver,
    /// `destination-in`
    #[strum(serialize = "destination-in")]
    DestinationIn,
    /// `destination-out`
    #[strum(serialize = "destination-out")]
    DestinationOut,
    /// `destination-atop`
    #[strum(serialize = "destination-atop")]
    DestinationAtop,
    /// `xor`
    #[strum(serialize = "xor")]
    Xor,
}

/// [§ 3.6 'background-position'](https://www.w3.org/TR/css-backgrounds-3/#background-position)
///
/// "Initial: 0% 0%"
const INITIAL_POSITION: Position = Position::Lengths(Length::Percentage(0.0), Length::Percentage(0.0));

/// [§ 3.10 'background' shorthand](https://www.w3.org/TR/css-backgrounds-3/#background)
///
/// Every part is optional; absent parts are left out of the rendering. The
/// size follows the position after a `/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BackgroundShorthand {
    /// `<'background-color'>`
    pub color: Option<Color>,
    /// `<bg-image>`
    pub image: Option<Image>,
    /// `<bg-position>`
    pub position: Option<Position>,
    /// `<bg-size>`, written as `/ <size>`
    pub size: Option<BackgroundSize>,
    /// `<repeat-style>`
    pub repeat: Option<BackgroundRepeat>,
    /// `<attachment>`
    pub attachment: Option<BackgroundAttachment>,
    /// `<visual-box>` for the origin
    pub origin: Option<BackgroundOrigin>,
    /// `<visual-box>` for the clip
    pub clip: Option<BackgroundClip>,
}

impl fmt::Display for BackgroundShorthand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `/ <size>` is only valid after a position; fall back to the initial one.
        let position = match (&self.position, &self.size) {
            (Some(position), _) => Some(position.to_string()),
            (None, Some(_)) => Some(INITIAL_POSITION.to_string()),
            (None, None) => None,
        };
        let parts: Vec<String> = [
            self.color.as_ref().map(ToString::to_string),
            self.image.as_ref().map(ToString::to_string),
            position,
            self.size.as_ref().map(|size| format!("/ {size}")),
            self.repeat.as_ref().map(ToString::to_string),
            self.attachment.as_ref().map(ToString::to_string),
            self.origin.as_ref().map(ToString::to_string),
            self.clip.as_ref().map(ToString::to_string),
        ]
        .into_iter()
        .flatten()
        .collect();

        // Nothing set resets every longhand.
        if parts.is_empty() {
            return f.write_str("none");
        }
        f.write_str(&parts.join(" "))
    }
}

/// A value for one of the `background-*` properties or the shorthand.
///
/// Which property the value belongs to is the formatter's concern; each
/// variant renders the value text only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Background {
    /// `background-color`
    Color(Color),
    /// `background-image`
    Image(Image),
    /// `background-position`
    Position(Position),
    /// `background-size`
    Size(BackgroundSize),
    /// `background-repeat`
    Repeat(BackgroundRepeat),
    /// `background-attachment`
    Attachment(BackgroundAttachment),
    /// `background-origin`
    Origin(BackgroundOrigin),
    /// `background-clip`
    Clip(BackgroundClip),
    /// `background-composite`
    Composite(CompositeOperator),
    /// `background`
    Shorthand(Box<BackgroundShorthand>),
    /// A CSS-wide keyword.
    Global(Global),
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(color) => write!(f, "{color}"),
            Self::Image(image) => write!(f, "{image}"),
            Self::Position(position) => write!(f, "{position}"),
            Self::Size(size) => write!(f, "{size}"),
            Self::Repeat(repeat) => write!(f, "{repeat}"),
            Self::Attachment(attachment) => write!(f, "{attachment}"),
            Self::Origin(origin) => write!(f, "{origin}"),
            Self::Clip(clip) => write!(f, "{clip}"),
            Self::Composite(composite) => write!(f, "{composite}"),
            Self::Shorthand(shorthand) => write!(f, "{shorthand}"),
            Self::Global(global) => write!(f, "{global}"),
        }
    }
}

impl From<BackgroundShorthand> for Background {
    fn from(shorthand: BackgroundShorthand) -> Self {
        Self::Shorthand(Box::new(shorthand))
    }
}

impl_render!(
    Background,
    BackgroundShorthand,
    BackgroundSize,
    SizeFit,
    BackgroundRepeat,
    BackgroundAttachment,
    BackgroundOrigin,
    BackgroundClip,
    CompositeOperator,
);
