//! Canonical text rendering shared by every value type.
//!
//! [CSSOM § 6.7 Serializing CSS Values](https://drafts.csswg.org/cssom/#serializing-css-values)
//!
//! Every value in this crate implements [`fmt::Display`] with its single
//! canonical form, and [`Render`] on top of it. Rendering is total: there is
//! no variant without a text form, and no variant renders as an empty string.

use std::fmt;

/// A value with one canonical CSS text form.
///
/// The formatter that assembles rule blocks calls [`Render::render`] and pairs
/// the result with a property name; values never render their own property.
pub trait Render: fmt::Display {
    /// Render the value to its canonical text.
    fn render(&self) -> String {
        self.to_string()
    }
}

/// Implements [`Render`] for a list of `Display` types.
macro_rules! impl_render {
    ($($ty:ty),+ $(,)?) => {
        $(impl $crate::render::Render for $ty {})+
    };
}
pub(crate) use impl_render;

/// [§ 4.3 Real Numbers](https://www.w3.org/TR/css-values-4/#numbers)
///
/// A floating point number in its shortest round-trip form. Whole numbers keep
/// their fractional part (`15.0`, not `15`) and the output never depends on
/// locale.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Num(pub(crate) f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// A 0-1 fraction shown as a percentage with two decimals (`0.5` → `50.00%`).
///
/// [§ 13 Filter Functions](https://drafts.fxtf.org/filter-effects/#filter-functions)
/// "Values of amount over 100% are allowed" so the fraction is not clamped.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FractionPercent(pub(crate) f64);

impl fmt::Display for FractionPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0 * 100.0)
    }
}

/// Write `items` separated by `separator`.
pub(crate) fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    separator: &str,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Write `items` separated by `separator`, or `none` when the list is empty.
///
/// Used by list-valued properties (`filter`, `box-shadow`, `transition`)
/// whose empty value is spelled `none`.
pub(crate) fn write_list_or_none<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    separator: &str,
) -> fmt::Result {
    if items.is_empty() {
        f.write_str("none")
    } else {
        write_joined(f, items, separator)
    }
}

/// Write four box-edge or corner values in clockwise order, `0` standing in
/// for unset ones.
///
/// [CSS Box Model § 4 Margins](https://www.w3.org/TR/css-box-4/#margins)
/// "If there is only one component value, it applies to all sides." The
/// four-value form is always written in full.
pub(crate) fn write_four<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    values: [Option<&T>; 4],
) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        match value {
            Some(value) => write!(f, "{value}")?,
            None => f.write_str("0")?,
        }
    }
    Ok(())
}
