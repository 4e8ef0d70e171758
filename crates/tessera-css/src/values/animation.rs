//! CSS animations and keyframes
//!
//! [CSS Animations Level 1](https://www.w3.org/TR/css-animations-1/)
//!
//! ```
//! use tessera_css::{Animation, IterationCount, Render, Time};
//!
//! let spin = Animation::new("spin", Time::s(2.0)).with_iteration_count(IterationCount::Infinite);
//! assert_eq!(spin.render(), "spin 2.0s ease 0.0s infinite normal none running");
//! ```

use std::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use super::easing::TimingFunction;
use super::time::Time;
use crate::render::{Num, impl_render};

/// [§ 3.6 'animation-iteration-count'](https://www.w3.org/TR/css-animations-1/#animation-iteration-count)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum IterationCount {
    /// "The animation will repeat the specified number of times."
    Finite(f64),
    /// "The animation will repeat forever."
    Infinite,
}

impl IterationCount {
    /// "Initial: 1"
    pub const ONCE: Self = Self::Finite(1.0);
}

impl Default for IterationCount {
    fn default() -> Self {
        Self::ONCE
    }
}

impl fmt::Display for IterationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(count) => write!(f, "{}", Num(*count)),
            Self::Infinite => f.write_str("infinite"),
        }
    }
}

/// [§ 3.7 'animation-direction'](https://www.w3.org/TR/css-animations-1/#animation-direction)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum Direction {
    /// "All iterations of the animation are played as specified."
    #[default]
    #[strum(serialize = "normal")]
    Normal,
    /// "All iterations of the animation are played in the reverse direction
    /// from the way they were specified."
    #[strum(serialize = "reverse")]
    Reverse,
    /// "The animation cycle iterations that are odd counts are played in the
    /// normal direction, and the animation cycle iterations that are even
    /// counts are played in a reverse direction."
    #[strum(serialize = "alternate")]
    Alternate,
    /// "The animation cycle iterations that are odd counts are played in the
    /// reverse direction, and the animation cycle iterations that are even
    /// counts are played in a normal direction."
    #[strum(serialize = "alternate-reverse")]
    AlternateReverse,
}

/// [§ 3.10 'animation-fill-mode'](https://www.w3.org/TR/css-animations-1/#animation-fill-mode)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum FillMode {
    /// "The animation has no effect when it is applied but not executing."
    #[default]
    #[strum(serialize = "none")]
    None,
    /// "After the animation ends ... the animation will apply the property
    /// values for the time the animation ended."
    #[strum(serialize = "forwards")]
    Forwards,
    /// "During the period defined by animation-delay, the animation will
    /// apply the property values defined in the keyframe that will start the
    /// first iteration of the animation."
    #[strum(serialize = "backwards")]
    Backwards,
    /// "The effects of both forwards and backwards fill apply."
    #[strum(serialize = "both")]
    Both,
}

/// [§ 3.8 'animation-play-state'](https://www.w3.org/TR/css-animations-1/#animation-play-state)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum PlayState {
    /// "While this property is set to running, the animation proceeds as
    /// normal."
    #[default]
    #[strum(serialize = "running")]
    Running,
    /// "While this property is set to paused, the animation is paused."
    #[strum(serialize = "paused")]
    Paused,
}

/// [§ 3.11 'animation' shorthand](https://www.w3.org/TR/css-animations-1/#animation)
///
/// A single animation. Every field is written, in the order name, duration,
/// timing function, delay, iteration count, direction, fill mode, play state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    /// `animation-name`, referring to a [`Keyframes`] block.
    pub name: String,
    /// `animation-duration`
    pub duration: Time,
    /// `animation-timing-function`
    pub timing_function: TimingFunction,
    /// `animation-delay`
    pub delay: Time,
    /// `animation-iteration-count`
    pub iteration_count: IterationCount,
    /// `animation-direction`
    pub direction: Direction,
    /// `animation-fill-mode`
    pub fill_mode: FillMode,
    /// `animation-play-state`
    pub play_state: PlayState,
}

impl Animation {
    /// An animation with initial values for everything but name and duration.
    #[must_use]
    pub fn new(name: impl Into<String>, duration: Time) -> Self {
        Self {
            name: name.into(),
            duration,
            timing_function: TimingFunction::default(),
            delay: Time::ZERO,
            iteration_count: IterationCount::default(),
            direction: Direction::default(),
            fill_mode: FillMode::default(),
            play_state: PlayState::default(),
        }
    }

    /// Set the timing function.
    #[must_use]
    pub fn with_timing_function(mut self, timing_function: TimingFunction) -> Self {
        self.timing_function = timing_function;
        self
    }

    /// Set the delay.
    #[must_use]
    pub fn with_delay(mut self, delay: Time) -> Self {
        self.delay = delay;
        self
    }

    /// Set the iteration count.
    #[must_use]
    pub fn with_iteration_count(mut self, count: IterationCount) -> Self {
        self.iteration_count = count;
        self
    }

    /// Set the direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the fill mode.
    #[must_use]
    pub fn with_fill_mode(mut self, fill_mode: FillMode) -> Self {
        self.fill_mode = fill_mode;
        self
    }

    /// Set the play state.
    #[must_use]
    pub fn with_play_state(mut self, play_state: PlayState) -> Self {
        self.play_state = play_state;
        self
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {}",
            self.name,
            self.duration,
            self.timing_function,
            self.delay,
            self.iteration_count,
            self.direction,
            self.fill_mode,
            self.play_state
        )
    }
}

/// [§ 3 Keyframes](https://www.w3.org/TR/css-animations-1/#keyframes)
///
/// `<keyframe-selector> = from | to | <percentage>`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum KeyframeSelector {
    /// "The keyword from is equivalent to the value 0%."
    From,
    /// "The keyword to is equivalent to the value 100%."
    To,
    /// A point along the animation duration.
    Percentage(f64),
}

impl fmt::Display for KeyframeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::From => f.write_str("from"),
            Self::To => f.write_str("to"),
            Self::Percentage(value) => write!(f, "{}%", Num(*value)),
        }
    }
}

/// One `name: value;` declaration inside a keyframe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct KeyframeProperty {
    /// Property name.
    pub name: String,
    /// Already-rendered property value.
    pub value: String,
}

impl KeyframeProperty {
    /// A declaration of `name` with an already-rendered `value`.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for KeyframeProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.name, self.value)
    }
}

/// [§ 3 Keyframes](https://www.w3.org/TR/css-animations-1/#keyframes)
///
/// An `@keyframes` block. Frames render in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyframes {
    /// The animation name.
    pub name: String,
    /// Selectors with their declarations.
    pub frames: Vec<(KeyframeSelector, Vec<KeyframeProperty>)>,
}

impl Keyframes {
    /// An empty block.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: Vec::new(),
        }
    }

    /// Append a frame.
    #[must_use]
    pub fn frame(mut self, selector: KeyframeSelector, properties: Vec<KeyframeProperty>) -> Self {
        self.frames.push((selector, properties));
        self
    }
}

impl fmt::Display for Keyframes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@keyframes {} {{", self.name)?;
        for (selector, properties) in &self.frames {
            writeln!(f, "  {selector} {{")?;
            for property in properties {
                writeln!(f, "    {property}")?;
            }
            writeln!(f, "  }}")?;
        }
        f.write_str("}")
    }
}

impl_render!(
    Animation,
    IterationCount,
    Direction,
    FillMode,
    PlayState,
    Keyframes,
    KeyframeSelector,
    KeyframeProperty,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyframes_keep_insertion_order() {
        let fade = Keyframes::new("fade")
            .frame(KeyframeSelector::To, vec![KeyframeProperty::new("opacity", "1")])
            .frame(KeyframeSelector::From, vec![KeyframeProperty::new("opacity", "0")]);
        assert_eq!(
            fade.to_string(),
            "@keyframes fade {\n  to {\n    opacity: 1;\n  }\n  from {\n    opacity: 0;\n  }\n}"
        );
    }

    #[test]
    fn test_direction_tokens_are_hyphenated() {
        assert_eq!(Direction::AlternateReverse.to_string(), "alternate-reverse");
    }
}
