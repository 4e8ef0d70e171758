//! Typed CSS values and their canonical text for the Tessera style formatter.
//!
//! # Scope
//!
//! This crate implements:
//! - **Dimension Algebra** ([CSS Values Level 4 § 6](https://www.w3.org/TR/css-values-4/#lengths))
//!   - Absolute, font-relative and viewport units, percentages, sizing keywords
//!   - `+ - * /` that combine like units and fall back to `calc()` otherwise
//!
//! - **Color Model** ([CSS Color Level 4](https://www.w3.org/TR/css-color-4/))
//!   - Named, hex, `rgb()`, `hsl()`, `hwb()`, `lab()`, `lch()` and system colors
//!   - Lighter/darker derivation for colors with numeric channels
//!
//! - **Composite Values**
//!   - Gradients and images ([CSS Images Level 3](https://www.w3.org/TR/css-images-3/))
//!   - Backgrounds, borders and shadows ([CSS Backgrounds Level 3](https://www.w3.org/TR/css-backgrounds-3/))
//!   - Transforms ([CSS Transforms Level 1](https://www.w3.org/TR/css-transforms-1/))
//!   - Filters ([Filter Effects Level 1](https://www.w3.org/TR/filter-effects-1/))
//!   - Clipping shapes ([CSS Masking Level 1](https://www.w3.org/TR/css-masking-1/))
//!   - Grid tracks and placement ([CSS Grid Level 2](https://www.w3.org/TR/css-grid-2/))
//!   - Animations, keyframes and transitions ([CSS Animations Level 1](https://www.w3.org/TR/css-animations-1/))
//!   - Margin and padding edges ([CSS Box Model Level 3](https://www.w3.org/TR/css-box-3/))
//!
//! - **Rendering** ([CSSOM § 6.7](https://drafts.csswg.org/cssom/#serializing-css-values))
//!   - Every value has exactly one canonical text form via [`Render`]
//!
//! # Not Implemented
//!
//! - Parsing CSS text back into values
//! - Cross-property validation and cascade resolution
//!
//! ```
//! use tessera_css::{Color, Length, Render};
//!
//! assert_eq!((Length::px(10.0) + Length::px(5.0)).render(), "15.0px");
//! assert_eq!(Color::hex("abc").lighter(0.0).render(), "#AABBCC");
//! ```

mod error;
mod render;
mod values;

pub use error::ValueError;
pub use render::Render;
pub use values::*;
