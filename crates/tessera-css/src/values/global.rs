//! CSS-wide keywords
//!
//! [CSS Values and Units Level 4 § 3.1](https://www.w3.org/TR/css-values-4/#common-keywords)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::render::impl_render;

/// [§ 3.1.1 CSS-wide keywords](https://www.w3.org/TR/css-values-4/#common-keywords)
///
/// "All CSS properties accept the CSS-wide keyword values as the entire value
/// of their property."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Global {
    /// [§ 7.3 inherit](https://www.w3.org/TR/css-cascade-5/#inherit)
    #[strum(serialize = "inherit")]
    Inherit,
    /// [§ 7.1 initial](https://www.w3.org/TR/css-cascade-5/#initial)
    #[strum(serialize = "initial")]
    Initial,
    /// [§ 7.5 revert](https://www.w3.org/TR/css-cascade-5/#default)
    #[strum(serialize = "revert")]
    Revert,
    /// [§ 7.6 revert-layer](https://www.w3.org/TR/css-cascade-5/#revert-layer)
    #[strum(serialize = "revert-layer")]
    RevertLayer,
    /// [§ 7.4 unset](https://www.w3.org/TR/css-cascade-5/#inherit-initial)
    #[strum(serialize = "unset")]
    Unset,
}

impl_render!(Global);
