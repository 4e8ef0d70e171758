//! CSS value types
//!
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//! - [CSS Images Level 3](https://www.w3.org/TR/css-images-3/)
//! - [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/)
//! - [CSS Transforms Level 1](https://www.w3.org/TR/css-transforms-1/)
//! - [CSS Masking Level 1](https://www.w3.org/TR/css-masking-1/)
//! - [CSS Grid Layout Level 2](https://www.w3.org/TR/css-grid-2/)
//! - [CSS Animations Level 1](https://www.w3.org/TR/css-animations-1/)

mod angle;
mod animation;
mod background;
mod border;
mod clip_path;
mod color;
mod easing;
mod filter;
mod global;
mod grid;
mod image;
mod length;
mod position;
mod shadow;
mod spacing;
mod time;
mod transform;
mod transition;

pub use angle::Angle;
pub use animation::{
    Animation, Direction, FillMode, IterationCount, KeyframeProperty, KeyframeSelector, Keyframes,
    PlayState,
};
pub use background::{
    Background, BackgroundAttachment, BackgroundClip, BackgroundOrigin, BackgroundRepeat,
    BackgroundShorthand, BackgroundSize, CompositeOperator, SizeFit,
};
pub use border::{Border, BorderRadius, BorderStyle, BorderWidth, Outline};
pub use clip_path::{ClipPath, ClipPoint};
pub use color::{Color, DEFAULT_BRIGHTNESS_STEP, HexChannels, NamedColor, SystemColor};
pub use easing::{StepPosition, TimingFunction};
pub use filter::{Filter, FilterFunction};
pub use global::Global;
pub use grid::{
    GridArea, GridAuto, GridAutoFlow, GridGap, GridLine, GridPlacement, GridTemplate,
    GridTemplateAreas, GridTrack, RepeatCount,
};
pub use image::{
    ConicGradient, Gradient, GradientStop, Image, LinearGradient, RadialGradient, RadialShape,
    RadialSize,
};
pub use length::{Length, SizeKeyword, Unit};
pub use position::{
    HorizontalKeyword, MixedPosition, ObjectPosition, ObjectStyle, Position, PositionKeyword,
    PositionValue, VerticalKeyword,
};
pub use shadow::{BoxShadow, Shadow, TextShadow, TextShadows};
pub use spacing::{BoxEdges, Margin, Padding};
pub use time::Time;
pub use transform::Transform;
pub use transition::{Transition, TransitionProperty, Transitions};
