//! CSS transform functions
//!
//! - [CSS Transforms Level 1](https://www.w3.org/TR/css-transforms-1/)
//! - [CSS Transforms Level 2](https://www.w3.org/TR/css-transforms-2/)
//!
//! Transforms compose with `+`. The result is always one flat
//! [`Transform::Compound`] list in left-to-right order:
//!
//! ```
//! use tessera_css::{Angle, Length, Render, Transform};
//!
//! let t = Transform::translate_x(Length::px(10.0))
//!     + Transform::rotate(Angle::deg(45.0))
//!     + Transform::scale(2.0, None);
//! assert_eq!(t.render(), "translateX(10.0px) rotate(45.0deg) scale(2.0)");
//! ```

use std::fmt;
use std::ops::Add;

use serde::Serialize;

use super::angle::Angle;
use super::length::Length;
use crate::render::{Num, impl_render, write_joined, write_list_or_none};

/// [§ 7 The Transform Functions](https://www.w3.org/TR/css-transforms-1/#transform-functions)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Transform {
    /// `none`
    None,
    /// "specifies a 2D transformation in the form of a transformation matrix
    /// of the six values a, b, c, d, e, f."
    Matrix {
        /// a
        a: f64,
        /// b
        b: f64,
        /// c
        c: f64,
        /// d
        d: f64,
        /// e
        tx: f64,
        /// f
        ty: f64,
    },
    /// "specifies a 3D transformation as a 4x4 homogeneous matrix of 16
    /// values in column-major order."
    Matrix3d(Box<[f64; 16]>),
    /// "specifies a 2D translation by the vector [tx, ty] ... If <ty> is not
    /// provided, ty has zero as a value."
    Translate {
        /// tx
        x: Length,
        /// ty, omitted when absent
        y: Option<Length>,
    },
    /// "specifies a 3D translation by the vector [tx,ty,tz]"
    Translate3d {
        /// tx
        x: Length,
        /// ty
        y: Length,
        /// tz
        z: Length,
    },
    /// "specifies a translation by the given amount in the X direction."
    TranslateX(Length),
    /// "specifies a translation by the given amount in the Y direction."
    TranslateY(Length),
    /// "specifies a 3D translation by the vector [0,0,tz] with the given
    /// amount in the Z direction."
    TranslateZ(Length),
    /// "specifies a 2D scale operation by the [sx,sy] scaling vector ... If
    /// the second parameter is not provided, it takes a value equal to the
    /// first."
    Scale {
        /// sx
        x: f64,
        /// sy, omitted when absent
        y: Option<f64>,
    },
    /// "specifies a 3D scale operation by the [sx,sy,sz] scaling vector"
    Scale3d {
        /// sx
        x: f64,
        /// sy
        y: f64,
        /// sz
        z: f64,
    },
    /// `scaleX()`
    ScaleX(f64),
    /// `scaleY()`
    ScaleY(f64),
    /// `scaleZ()`
    ScaleZ(f64),
    /// "specifies a 2D rotation by the angle specified in the parameter about
    /// the origin of the element"
    Rotate(Angle),
    /// "specifies a 3D rotation by the angle specified in last parameter
    /// about the [x,y,z] direction vector"
    Rotate3d {
        /// Direction vector x.
        x: f64,
        /// Direction vector y.
        y: f64,
        /// Direction vector z.
        z: f64,
        /// Rotation angle.
        angle: Angle,
    },
    /// `rotateX()`
    RotateX(Angle),
    /// `rotateY()`
    RotateY(Angle),
    /// `rotateZ()`
    RotateZ(Angle),
    /// "specifies a 2D skew by [ax,ay] for X and Y. If the second parameter is
    /// not provided, it has a zero value."
    Skew {
        /// ax
        x: Angle,
        /// ay, omitted when absent
        y: Option<Angle>,
    },
    /// `skewX()`
    SkewX(Angle),
    /// `skewY()`
    SkewY(Angle),
    /// "specifies a perspective projection matrix"
    Perspective(Length),
    /// [§ 6 The transform property](https://www.w3.org/TR/css-transforms-1/#transform-property)
    ///
    /// `<transform-list> = <transform-function>+`, applied left to right. An
    /// empty list renders `none`.
    Compound(Vec<Transform>),
}

impl Transform {
    /// `translate(x[, y])`
    #[must_use]
    pub const fn translate(x: Length, y: Option<Length>) -> Self {
        Self::Translate { x, y }
    }

    /// `translate3d(x, y, z)`
    #[must_use]
    pub const fn translate3d(x: Length, y: Length, z: Length) -> Self {
        Self::Translate3d { x, y, z }
    }

    /// `translateX(x)`
    #[must_use]
    pub const fn translate_x(x: Length) -> Self {
        Self::TranslateX(x)
    }

    /// `translateY(y)`
    #[must_use]
    pub const fn translate_y(y: Length) -> Self {
        Self::TranslateY(y)
    }

    /// `scale(x[, y])`
    #[must_use]
    pub const fn scale(x: f64, y: Option<f64>) -> Self {
        Self::Scale { x, y }
    }

    /// `rotate(angle)`
    #[must_use]
    pub const fn rotate(angle: Angle) -> Self {
        Self::Rotate(angle)
    }

    /// `skew(x[, y])`
    #[must_use]
    pub const fn skew(x: Angle, y: Option<Angle>) -> Self {
        Self::Skew { x, y }
    }

    /// `matrix(a, b, c, d, tx, ty)`
    #[must_use]
    pub const fn matrix(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self::Matrix { a, b, c, d, tx, ty }
    }

    /// `matrix3d(...)` from 16 column-major values.
    #[must_use]
    pub fn matrix3d(values: [f64; 16]) -> Self {
        Self::Matrix3d(Box::new(values))
    }

    /// The individual functions of this transform, in application order.
    ///
    /// Nested compounds are flattened and `none` contributes nothing.
    #[must_use]
    pub fn into_functions(self) -> Vec<Self> {
        let mut functions = Vec::new();
        self.flatten_into(&mut functions);
        functions
    }

    fn flatten_into(self, out: &mut Vec<Self>) {
        match self {
            Self::None => {}
            Self::Compound(members) => {
                for member in members {
                    member.flatten_into(out);
                }
            }
            function => out.push(function),
        }
    }

    fn collect_functions<'a>(&'a self, out: &mut Vec<&'a Self>) {
        match self {
            Self::None => {}
            Self::Compound(members) => {
                for member in members {
                    member.collect_functions(out);
                }
            }
            function => out.push(function),
        }
    }
}

impl Add for Transform {
    type Output = Self;

    /// Append `rhs` after `self` in one flat chain.
    fn add(self, rhs: Self) -> Self {
        let mut functions = self.into_functions();
        rhs.flatten_into(&mut functions);
        Self::Compound(functions)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Matrix { a, b, c, d, tx, ty } => write!(
                f,
                "matrix({}, {}, {}, {}, {}, {})",
                Num(*a),
                Num(*b),
                Num(*c),
                Num(*d),
                Num(*tx),
                Num(*ty)
            ),
            Self::Matrix3d(values) => {
                let values: Vec<Num> = values.iter().copied().map(Num).collect();
                f.write_str("matrix3d(")?;
                write_joined(f, &values, ", ")?;
                f.write_str(")")
            }
            Self::Translate { x, y: Some(y) } => write!(f, "translate({x}, {y})"),
            Self::Translate { x, y: None } => write!(f, "translate({x})"),
            Self::Translate3d { x, y, z } => write!(f, "translate3d({x}, {y}, {z})"),
            Self::TranslateX(x) => write!(f, "translateX({x})"),
            Self::TranslateY(y) => write!(f, "translateY({y})"),
            Self::TranslateZ(z) => write!(f, "translateZ({z})"),
            Self::Scale { x, y: Some(y) } => write!(f, "scale({}, {})", Num(*x), Num(*y)),
            Self::Scale { x, y: None } => write!(f, "scale({})", Num(*x)),
            Self::Scale3d { x, y, z } => {
                write!(f, "scale3d({}, {}, {})", Num(*x), Num(*y), Num(*z))
            }
            Self::ScaleX(x) => write!(f, "scaleX({})", Num(*x)),
            Self::ScaleY(y) => write!(f, "scaleY({})", Num(*y)),
            Self::ScaleZ(z) => write!(f, "scaleZ({})", Num(*z)),
            Self::Rotate(angle) => write!(f, "rotate({angle})"),
            Self::Rotate3d { x, y, z, angle } => {
                write!(f, "rotate3d({}, {}, {}, {angle})", Num(*x), Num(*y), Num(*z))
            }
            Self::RotateX(angle) => write!(f, "rotateX({angle})"),
            Self::RotateY(angle) => write!(f, "rotateY({angle})"),
            Self::RotateZ(angle) => write!(f, "rotateZ({angle})"),
            Self::Skew { x, y: Some(y) } => write!(f, "skew({x}, {y})"),
            Self::Skew { x, y: None } => write!(f, "skew({x})"),
            Self::SkewX(angle) => write!(f, "skewX({angle})"),
            Self::SkewY(angle) => write!(f, "skewY({angle})"),
            Self::Perspective(length) => write!(f, "perspective({length})"),
            Self::Compound(_) => {
                let mut functions = Vec::new();
                self.collect_functions(&mut functions);
                write_list_or_none(f, &functions, " ")
            }
        }
    }
}

impl_render!(Transform);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_skips_none_and_nested_compounds() {
        let nested = Transform::Compound(vec![
            Transform::None,
            Transform::Compound(vec![Transform::ScaleX(2.0)]),
            Transform::ScaleY(3.0),
        ]);
        assert_eq!(
            nested.into_functions(),
            vec![Transform::ScaleX(2.0), Transform::ScaleY(3.0)]
        );
    }
}
