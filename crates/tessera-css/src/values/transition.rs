//! CSS transitions
//!
//! [CSS Transitions Level 1](https://www.w3.org/TR/css-transitions-1/)

use std::fmt;

use serde::Serialize;

use super::easing::TimingFunction;
use super::time::Time;
use crate::render::{impl_render, write_list_or_none};

/// [§ 2.1 'transition-property'](https://www.w3.org/TR/css-transitions-1/#transition-property-property)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum TransitionProperty {
    /// "The value all means that all properties are to be transitioned."
    All,
    /// "A value of none means that no property will transition."
    None,
    /// A single named property; a blank name renders `none`.
    Custom(String),
}

impl fmt::Display for TransitionProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::None => f.write_str("none"),
            Self::Custom(property) if property.trim().is_empty() => f.write_str("none"),
            Self::Custom(property) => f.write_str(property),
        }
    }
}

/// [§ 2.5 'transition' shorthand](https://www.w3.org/TR/css-transitions-1/#transition-shorthand-property)
///
/// `<single-transition>`: property, duration, timing function, then the delay
/// when one is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    /// What transitions.
    pub property: TransitionProperty,
    /// `transition-duration`
    pub duration: Time,
    /// `transition-timing-function`
    pub timing_function: TimingFunction,
    /// `transition-delay`, omitted when `None`.
    pub delay: Option<Time>,
}

impl Transition {
    /// A transition with the initial timing function and no delay.
    #[must_use]
    pub const fn new(property: TransitionProperty, duration: Time) -> Self {
        Self {
            property,
            duration,
            timing_function: TimingFunction::Ease,
            delay: None,
        }
    }

    /// Transition every property.
    #[must_use]
    pub const fn all(duration: Time) -> Self {
        Self::new(TransitionProperty::All, duration)
    }

    /// `none 0.0s ease`
    #[must_use]
    pub const fn none() -> Self {
        Self::new(TransitionProperty::None, Time::ZERO)
    }

    /// Transition one named property.
    #[must_use]
    pub fn custom(property: impl Into<String>, duration: Time) -> Self {
        Self::new(TransitionProperty::Custom(property.into()), duration)
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
        self.delay = Some(delay);
        self
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.property, self.duration, self.timing_function)?;
        if let Some(delay) = self.delay {
            write!(f, " {delay}")?;
        }
        Ok(())
    }
}

/// A comma-separated `transition` list; empty renders `none`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Transitions(pub Vec<Transition>);

impl From<Transition> for Transitions {
    fn from(transition: Transition) -> Self {
        Self(vec![transition])
    }
}

impl fmt::Display for Transitions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list_or_none(f, &self.0, ", ")
    }
}

impl_render!(Transition, TransitionProperty, Transitions);
