//! This module contains the two numeric color representations, [`Hsl`] and [`Rgb`]. The string
//! representations (hex and web) are plain `String`s and need no type of their own. For
//! convenience, each type is imported into this module's namespace directly.
//!
//! [`Hsl`]: hslcolor/struct.Hsl.html
//! [`Rgb`]: rgbcolor/struct.Rgb.html
pub mod hslcolor;
pub mod rgbcolor;

// for convenience, use this namespace for the color values
pub use self::hslcolor::Hsl;
pub use self::rgbcolor::Rgb;
