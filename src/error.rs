//! The single error type returned by every fallible operation in this crate. Nothing is clamped or
//! coerced silently: any value that doesn't fit its representation is handed back to the caller as
//! one of these variants, and it's up to the caller what to do with it.

use std::error::Error;
use std::fmt;

use attribute::Component;

/// An error in converting, validating, or assigning a color.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    /// A numeric component of HSL or RGB lies outside its legal interval (beyond the
    /// [`FLOAT_ERROR`](../constant.FLOAT_ERROR.html) tolerance), or isn't finite.
    OutOfRange {
        /// The component that was rejected.
        component: Component,
        /// The offending value.
        value: f64,
    },
    /// A string doesn't have the shape its representation requires, such as a hex string with four
    /// digits. Holds the rejected input.
    InvalidFormat(String),
    /// A name-form string is syntactically fine but isn't in the name table in use.
    UnknownColorName(String),
    /// An attribute name resolves to no known representation or component.
    AttributeNotFound(String),
    /// An unqualified attribute name matches components of more than one representation.
    AmbiguousAttribute {
        /// The name that was looked up.
        name: String,
        /// The qualified names it could refer to, such as `hsl.luminance`.
        candidates: Vec<String>,
    },
    /// A scale was requested with zero steps.
    InvalidSteps(usize),
    /// A dynamic write supplied the wrong kind of value for its attribute, like text for `hue`.
    WrongValueKind {
        /// The attribute being written.
        attribute: String,
        /// What that attribute accepts.
        expected: &'static str,
    },
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ColorError::OutOfRange { component, value } => write!(
                f,
                "{} must be between 0 and 1. You provided {:?}.",
                component, value
            ),
            ColorError::InvalidFormat(ref input) => write!(
                f,
                "{:?} is not in hex format. Need 3 or 6 hex digits.",
                input
            ),
            ColorError::UnknownColorName(ref name) => {
                write!(f, "{:?} is not a recognized color.", name)
            }
            ColorError::AttributeNotFound(ref name) => write!(f, "{:?} not found", name),
            ColorError::AmbiguousAttribute {
                ref name,
                ref candidates,
            } => write!(
                f,
                "{:?} is ambiguous, use one of: {}",
                name,
                candidates.join(", ")
            ),
            ColorError::InvalidSteps(steps) => {
                write!(f, "Unsupported number of colors in a range (steps={}).", steps)
            }
            ColorError::WrongValueKind {
                ref attribute,
                expected,
            } => write!(f, "{:?} expects {}", attribute, expected),
        }
    }
}

impl Error for ColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ColorError::OutOfRange {
            component: Component::Saturation,
            value: 2.0,
        };
        assert_eq!(
            err.to_string(),
            "Saturation must be between 0 and 1. You provided 2.0."
        );
        let err = ColorError::UnknownColorName("pinky".to_string());
        assert_eq!(err.to_string(), "\"pinky\" is not a recognized color.");
        let err = ColorError::AmbiguousAttribute {
            name: "v".to_string(),
            candidates: vec!["hsl.luminance".to_string(), "rgb.blue".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "\"v\" is ambiguous, use one of: hsl.luminance, rgb.blue"
        );
    }
}
