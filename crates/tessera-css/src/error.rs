//! Errors raised by checked value operations.
//!
//! Most of the value algebra never fails: mismatched arithmetic degrades to
//! `calc()` and unsupported color adjustments return the receiver. The
//! variants here back the checked counterparts of the operations that do
//! have a hard precondition.

use thiserror::Error;

/// Failure of a checked value operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    /// [§ 10.9 Type Checking](https://www.w3.org/TR/css-values-4/#calc-type-checking)
    ///
    /// "If the divisor is zero, the expression is invalid."
    #[error("division of a length by zero")]
    DivisionByZero,

    /// A divisor that is not a number at all.
    #[error("division of a length by NaN")]
    NotANumber,

    /// [§ 5.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    ///
    /// "The syntax of a <hex-color> is a <hash-token> token whose value consists
    /// of 3, 4, 6, or 8 hexadecimal digits."
    #[error("'{value}' is not a 3, 6 or 8 digit hex color")]
    InvalidHex {
        /// The rejected digits, as stored in the color.
        value: String,
    },
}
