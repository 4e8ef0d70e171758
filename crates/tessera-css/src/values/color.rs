//! CSS Color values and derived colors
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//!
//! A [`Color`] keeps the notation it was written in. Channels are stored as
//! given: out-of-range numbers are neither rejected nor clamped, and render
//! verbatim. Only [`Color::adjust_brightness`] clamps, and only the channels
//! it computes.

use std::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumIter};
use tessera_common::warning::warn_once;

use super::global::Global;
use crate::error::ValueError;
use crate::render::{Num, impl_render};

/// Default fraction used by [`Color::lighten`] and [`Color::darken`].
pub const DEFAULT_BRIGHTNESS_STEP: f64 = 0.2;

/// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
///
/// The sixteen basic color keywords from HTML 4.01.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum NamedColor {
    /// `#000000`
    #[strum(serialize = "black")]
    Black,
    /// `#c0c0c0`
    #[strum(serialize = "silver")]
    Silver,
    /// `#808080`
    #[strum(serialize = "gray")]
    Gray,
    /// `#ffffff`
    #[strum(serialize = "white")]
    White,
    /// `#800000`
    #[strum(serialize = "maroon")]
    Maroon,
    /// `#ff0000`
    #[strum(serialize = "red")]
    Red,
    /// `#800080`
    #[strum(serialize = "purple")]
    Purple,
    /// `#ff00ff`
    #[strum(serialize = "fuchsia")]
    Fuchsia,
    /// `#008000`
    #[strum(serialize = "green")]
    Green,
    /// `#00ff00`
    #[strum(serialize = "lime")]
    Lime,
    /// `#808000`
    #[strum(serialize = "olive")]
    Olive,
    /// `#ffff00`
    #[strum(serialize = "yellow")]
    Yellow,
    /// `#000080`
    #[strum(serialize = "navy")]
    Navy,
    /// `#0000ff`
    #[strum(serialize = "blue")]
    Blue,
    /// `#008080`
    #[strum(serialize = "teal")]
    Teal,
    /// `#00ffff`
    #[strum(serialize = "aqua")]
    Aqua,
}

/// [§ 6.2 System Colors](https://www.w3.org/TR/css-color-4/#css-system-colors)
///
/// "In forced colors mode, most colors on the page are forced into a
/// restricted, user-chosen palette."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum SystemColor {
    /// "Text in application content or documents."
    #[strum(serialize = "CanvasText")]
    CanvasText,
    /// "Background of application content or documents."
    #[strum(serialize = "Canvas")]
    Canvas,
    /// "Text in non-active, non-visited links."
    #[strum(serialize = "LinkText")]
    LinkText,
    /// "Text in visited links."
    #[strum(serialize = "VisitedText")]
    VisitedText,
    /// "Text in active links."
    #[strum(serialize = "ActiveText")]
    ActiveText,
    /// "The face background color for push buttons."
    #[strum(serialize = "ButtonFace")]
    ButtonFace,
    /// "Text on push buttons."
    #[strum(serialize = "ButtonText")]
    ButtonText,
    /// "The base border color for push buttons."
    #[strum(serialize = "ButtonBorder")]
    ButtonBorder,
    /// "Background of input fields."
    #[strum(serialize = "Field")]
    Field,
    /// "Text in input fields."
    #[strum(serialize = "FieldText")]
    FieldText,
    /// "Background of selected text."
    #[strum(serialize = "Highlight")]
    Highlight,
    /// "Text of selected text."
    #[strum(serialize = "HighlightText")]
    HighlightText,
    /// "Background of selected items."
    #[strum(serialize = "SelectedItem")]
    SelectedItem,
    /// "Text of selected items."
    #[strum(serialize = "SelectedItemText")]
    SelectedItemText,
    /// "Background of text that has been specially marked."
    #[strum(serialize = "Mark")]
    Mark,
    /// "Text that has been specially marked."
    #[strum(serialize = "MarkText")]
    MarkText,
}

/// [§ 4 Representing Colors](https://www.w3.org/TR/css-color-4/#color-type)
///
/// A color in one of the CSS notations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Color {
    /// A basic named color keyword.
    Named(NamedColor),
    /// [§ 5.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    ///
    /// Hex digits, with or without a leading `#`.
    Hex(String),
    /// [§ 5.1 The RGB functions](https://www.w3.org/TR/css-color-4/#rgb-functions)
    Rgb {
        /// Red channel, nominally 0-255.
        red: i32,
        /// Green channel, nominally 0-255.
        green: i32,
        /// Blue channel, nominally 0-255.
        blue: i32,
    },
    /// Legacy `rgba()` with an alpha channel.
    Rgba {
        /// Red channel, nominally 0-255.
        red: i32,
        /// Green channel, nominally 0-255.
        green: i32,
        /// Blue channel, nominally 0-255.
        blue: i32,
        /// Alpha, nominally 0-1.
        alpha: f64,
    },
    /// [§ 7.1 The HSL notation](https://www.w3.org/TR/css-color-4/#the-hsl-notation)
    Hsl {
        /// Hue in degrees.
        hue: i32,
        /// Saturation percentage, nominally 0-100.
        saturation: f64,
        /// Lightness percentage, nominally 0-100.
        lightness: f64,
    },
    /// Legacy `hsla()` with an alpha channel.
    Hsla {
        /// Hue in degrees.
        hue: i32,
        /// Saturation percentage, nominally 0-100.
        saturation: f64,
        /// Lightness percentage, nominally 0-100.
        lightness: f64,
        /// Alpha, nominally 0-1.
        alpha: f64,
    },
    /// [§ 8 HWB Colors](https://www.w3.org/TR/css-color-4/#the-hwb-notation)
    Hwb {
        /// Hue in degrees.
        hue: i32,
        /// Whiteness percentage.
        whiteness: f64,
        /// Blackness percentage.
        blackness: f64,
    },
    /// [§ 9.2 CIE Lab](https://www.w3.org/TR/css-color-4/#specifying-lab-lch)
    Lab {
        /// Perceptual lightness percentage.
        lightness: f64,
        /// Green-red axis.
        a: f64,
        /// Blue-yellow axis.
        b: f64,
    },
    /// [§ 9.2 CIE LCH](https://www.w3.org/TR/css-color-4/#specifying-lab-lch)
    Lch {
        /// Perceptual lightness percentage.
        lightness: f64,
        /// Chroma.
        chroma: f64,
        /// Hue angle in degrees.
        hue: f64,
    },
    /// A system color keyword.
    System(SystemColor),
    /// [§ 6.4 The currentcolor keyword](https://www.w3.org/TR/css-color-4/#currentcolor-color)
    CurrentColor,
    /// [§ 6.3 The transparent keyword](https://www.w3.org/TR/css-color-4/#transparent-color)
    Transparent,
    /// A CSS-wide keyword.
    Global(Global),
}

/// Decoded channels of a hex color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexChannels {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Alpha pair of the eight digit form.
    pub alpha: Option<u8>,
}

impl HexChannels {
    /// [§ 5.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    ///
    /// Decode `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    ///
    /// "The three-digit RGB notation (#RGB) is converted into six-digit form
    /// (#RRGGBB) by replicating digits, not by adding zeros."
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidHex`] if `value` has another digit count or
    /// contains a non-hex character.
    pub fn decode(value: &str) -> Result<Self, ValueError> {
        let digits = value.trim_start_matches('#');
        let invalid = || ValueError::InvalidHex {
            value: value.to_string(),
        };
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => digits.to_string(),
            _ => return Err(invalid()),
        };
        let pair = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());

        Ok(Self {
            red: pair(0)?,
            green: pair(2)?,
            blue: pair(4)?,
            alpha: if expanded.len() == 8 { Some(pair(6)?) } else { None },
        })
    }

    /// Encode as uppercase `#RRGGBB`, or `#RRGGBBAA` when alpha is present.
    #[must_use]
    pub fn encode(&self) -> String {
        match self.alpha {
            Some(alpha) => format!(
                "#{:02X}{:02X}{:02X}{alpha:02X}",
                self.red, self.green, self.blue
            ),
            None => format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue),
        }
    }
}

impl Color {
    /// `currentColor`
    pub const CURRENT_COLOR: Self = Self::CurrentColor;
    /// `transparent`
    pub const TRANSPARENT: Self = Self::Transparent;
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

    /// A hex color from its digits, with or without `#`.
    #[must_use]
    pub fn hex(value: impl Into<String>) -> Self {
        Self::Hex(value.into())
    }

    /// `rgb(red, green, blue)`
    #[must_use]
    pub const fn rgb(red: i32, green: i32, blue: i32) -> Self {
        Self::Rgb { red, green, blue }
    }

    /// `rgba(red, green, blue, alpha)`
    #[must_use]
    pub const fn rgba(red: i32, green: i32, blue: i32, alpha: f64) -> Self {
        Self::Rgba {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// `hsl(hue, saturation%, lightness%)`
    #[must_use]
    pub const fn hsl(hue: i32, saturation: f64, lightness: f64) -> Self {
        Self::Hsl {
            hue,
            saturation,
            lightness,
        }
    }

    /// `hsla(hue, saturation%, lightness%, alpha)`
    #[must_use]
    pub const fn hsla(hue: i32, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self::Hsla {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    /// `hwb(hue whiteness% blackness%)`
    #[must_use]
    pub const fn hwb(hue: i32, whiteness: f64, blackness: f64) -> Self {
        Self::Hwb {
            hue,
            whiteness,
            blackness,
        }
    }

    /// `lab(lightness% a b)`
    #[must_use]
    pub const fn lab(lightness: f64, a: f64, b: f64) -> Self {
        Self::Lab { lightness, a, b }
    }

    /// `lch(lightness% chroma hue)`
    #[must_use]
    pub const fn lch(lightness: f64, chroma: f64, hue: f64) -> Self {
        Self::Lch {
            lightness,
            chroma,
            hue,
        }
    }

    /// Move the color toward white (`fraction > 0`) or black (`fraction < 0`).
    ///
    /// - rgb/rgba: each channel becomes `c + (255 - c) * f` when lightening or
    ///   `c * (1 + f)` when darkening, clamped to 0-255 and truncated.
    /// - hsl/hsla: only the lightness moves, by the same rule against 0-100.
    /// - hex: decoded (3-digit shorthand expanded), adjusted like rgb, and
    ///   re-encoded as uppercase `#RRGGBB`. An eight digit color keeps its alpha.
    /// - every other notation has no channel to move and is returned as is.
    ///
    /// A `fraction` outside `[-1, 1]` (or NaN) also returns the color unchanged.
    #[must_use]
    pub fn adjust_brightness(&self, fraction: f64) -> Self {
        if !(-1.0..=1.0).contains(&fraction) {
            warn_once("CSS", "brightness fraction outside [-1, 1]; color left unchanged");
            return self.clone();
        }

        match self {
            Self::Rgb { red, green, blue } => Self::Rgb {
                red: adjust_channel(*red, fraction),
                green: adjust_channel(*green, fraction),
                blue: adjust_channel(*blue, fraction),
            },
            Self::Rgba {
                red,
                green,
                blue,
                alpha,
            } => Self::Rgba {
                red: adjust_channel(*red, fraction),
                green: adjust_channel(*green, fraction),
                blue: adjust_channel(*blue, fraction),
                alpha: *alpha,
            },
            Self::Hsl {
                hue,
                saturation,
                lightness,
            } => Self::Hsl {
                hue: *hue,
                saturation: *saturation,
                lightness: adjust_lightness(*lightness, fraction),
            },
            Self::Hsla {
                hue,
                saturation,
                lightness,
                alpha,
            } => Self::Hsla {
                hue: *hue,
                saturation: *saturation,
                lightness: adjust_lightness(*lightness, fraction),
                alpha: *alpha,
            },
            Self::Hex(value) => match HexChannels::decode(value) {
                Ok(channels) => {
                    let adjust = |c: u8| {
                        // adjust_channel clamps to 0-255
                        u8::try_from(adjust_channel(i32::from(c), fraction)).unwrap_or(u8::MAX)
                    };
                    Self::Hex(
                        HexChannels {
                            red: adjust(channels.red),
                            green: adjust(channels.green),
                            blue: adjust(channels.blue),
                            alpha: channels.alpha,
                        }
                        .encode(),
                    )
                }
                Err(_) => {
                    warn_once("CSS", "invalid hex color; color left unchanged");
                    self.clone()
                }
            },
            Self::Named(_)
            | Self::Hwb { .. }
            | Self::Lab { .. }
            | Self::Lch { .. }
            | Self::System(_)
            | Self::CurrentColor
            | Self::Transparent
            | Self::Global(_) => self.clone(),
        }
    }

    /// Lighten by `fraction` (0-1).
    #[must_use]
    pub fn lighter(&self, fraction: f64) -> Self {
        self.adjust_brightness(fraction)
    }

    /// Darken by `fraction` (0-1).
    #[must_use]
    pub fn darker(&self, fraction: f64) -> Self {
        self.adjust_brightness(-fraction)
    }

    /// Lighten by [`DEFAULT_BRIGHTNESS_STEP`].
    #[must_use]
    pub fn lighten(&self) -> Self {
        self.lighter(DEFAULT_BRIGHTNESS_STEP)
    }

    /// Darken by [`DEFAULT_BRIGHTNESS_STEP`].
    #[must_use]
    pub fn darken(&self) -> Self {
        self.darker(DEFAULT_BRIGHTNESS_STEP)
    }
}

/// Apply the brightness rule to one 0-255 channel.
#[allow(clippy::cast_possible_truncation)]
fn adjust_channel(value: i32, fraction: f64) -> i32 {
    let value = f64::from(value);
    let adjusted = if fraction > 0.0 {
        value + (255.0 - value) * fraction
    } else {
        value * (1.0 + fraction)
    };
    // Truncates toward zero after clamping, so 252.5 becomes 252.
    adjusted.clamp(0.0, 255.0) as i32
}

/// Apply the brightness rule to a 0-100 lightness percentage.
fn adjust_lightness(lightness: f64, fraction: f64) -> f64 {
    let adjusted = if fraction > 0.0 {
        lightness + (100.0 - lightness) * fraction
    } else {
        lightness * (1.0 + fraction)
    };
    adjusted.clamp(0.0, 100.0)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(keyword) => write!(f, "{keyword}"),
            Self::Hex(value) => write!(f, "#{}", value.trim_start_matches('#')),
            Self::Rgb { red, green, blue } => write!(f, "rgb({red}, {green}, {blue})"),
            Self::Rgba {
                red,
                green,
                blue,
                alpha,
            } => write!(f, "rgba({red}, {green}, {blue}, {})", Num(*alpha)),
            Self::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(f, "hsl({hue}, {}%, {}%)", Num(*saturation), Num(*lightness)),
            Self::Hsla {
                hue,
                saturation,
                lightness,
                alpha,
            } => write!(
                f,
                "hsla({hue}, {}%, {}%, {})",
                Num(*saturation),
                Num(*lightness),
                Num(*alpha)
            ),
            Self::Hwb {
                hue,
                whiteness,
                blackness,
            } => write!(f, "hwb({hue} {}% {}%)", Num(*whiteness), Num(*blackness)),
            Self::Lab { lightness, a, b } => {
                write!(f, "lab({}% {} {})", Num(*lightness), Num(*a), Num(*b))
            }
            Self::Lch {
                lightness,
                chroma,
                hue,
            } => write!(f, "lch({}% {} {})", Num(*lightness), Num(*chroma), Num(*hue)),
            Self::System(color) => write!(f, "{color}"),
            Self::CurrentColor => f.write_str("currentColor"),
            Self::Transparent => f.write_str("transparent"),
            Self::Global(global) => write!(f, "{global}"),
        }
    }
}

impl From<NamedColor> for Color {
    fn from(keyword: NamedColor) -> Self {
        Self::Named(keyword)
    }
}

impl From<SystemColor> for Color {
    fn from(color: SystemColor) -> Self {
        Self::System(color)
    }
}

impl From<Global> for Color {
    fn from(global: Global) -> Self {
        Self::Global(global)
    }
}

impl_render!(Color, NamedColor, SystemColor);
