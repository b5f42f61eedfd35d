//! This file provides the constants shared by conversion and validation: the floating-point
//! tolerance used to soften range checks and rounding, and the compiled patterns describing the two
//! hex shapes. The patterns are compiled once and reused, because validation runs on every write to
//! a color.

use regex::Regex;

/// Tolerance used to soften inequalities and rounding issues caused by floating-point error. A
/// component is accepted as long as it lies within this distance of its legal interval.
pub const FLOAT_ERROR: f64 = 0.0000005;

lazy_static! {
    /// Exactly six hex digits after a `#`.
    pub static ref LONG_HEX_COLOR: Regex = Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap();
    /// Exactly three hex digits after a `#`.
    pub static ref SHORT_HEX_COLOR: Regex = Regex::new(r"^#[0-9a-fA-F]{3}$").unwrap();
    /// Either of the above.
    pub static ref HEX_COLOR: Regex = Regex::new(r"^#[0-9a-fA-F]{3}([0-9a-fA-F]{3})?$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_patterns() {
        assert!(LONG_HEX_COLOR.is_match("#aBc123"));
        assert!(!LONG_HEX_COLOR.is_match("#abc"));
        assert!(SHORT_HEX_COLOR.is_match("#F0a"));
        assert!(!SHORT_HEX_COLOR.is_match("#f0a0"));
        assert!(HEX_COLOR.is_match("#abc"));
        assert!(HEX_COLOR.is_match("#abcdef"));
        // four and five digits are neither shape
        assert!(!HEX_COLOR.is_match("#abcd"));
        assert!(!HEX_COLOR.is_match("#abcde"));
        assert!(!HEX_COLOR.is_match("abcdef"));
        assert!(!HEX_COLOR.is_match("#ggg"));
    }
}
