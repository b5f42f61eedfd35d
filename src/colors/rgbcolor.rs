//! RGB as floating-point channels between 0 and 1. Hex strings are this space quantized to one byte
//! per channel, which is the only thing lost when going back and forth between the two.

use colors::Hsl;
use convert;
use error::ColorError;

/// A color in the RGB color space, each channel between 0 and 1 (within
/// [`FLOAT_ERROR`](../../constant.FLOAT_ERROR.html)).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// The red channel.
    pub r: f64,
    /// The green channel.
    pub g: f64,
    /// The blue channel.
    pub b: f64,
}

impl Rgb {
    /// Builds an `Rgb` without checking it.
    pub fn new(r: f64, g: f64, b: f64) -> Rgb {
        Rgb { r, g, b }
    }
    /// Builds an `Rgb` from one byte per channel, as found in hex codes and name tables.
    pub fn from_bytes(bytes: [u8; 3]) -> Rgb {
        Rgb {
            r: f64::from(bytes[0]) / 255.0,
            g: f64::from(bytes[1]) / 255.0,
            b: f64::from(bytes[2]) / 255.0,
        }
    }
    /// Quantizes each channel to a byte. Rounding is biased down by
    /// [`FLOAT_ERROR`](../../constant.FLOAT_ERROR.html) so that values sitting on a .5 boundary
    /// don't flicker between neighbors depending on float representation.
    pub fn to_bytes(&self) -> [u8; 3] {
        convert::rgb_to_bytes(*self)
    }
    /// Converts to HSL, failing if any channel is out of range.
    /// # Example
    /// ```
    /// # use colorist::colors::{Hsl, Rgb};
    /// let red = Rgb::new(1.0, 0.0, 0.0).to_hsl().unwrap();
    /// assert_eq!(red, Hsl::new(0.0, 1.0, 0.5));
    /// ```
    pub fn to_hsl(self) -> Result<Hsl, ColorError> {
        convert::rgb_to_hsl(self)
    }
}

impl From<(f64, f64, f64)> for Rgb {
    fn from(rgb: (f64, f64, f64)) -> Rgb {
        Rgb {
            r: rgb.0,
            g: rgb.1,
            b: rgb.2,
        }
    }
}

impl From<Rgb> for (f64, f64, f64) {
    fn from(rgb: Rgb) -> (f64, f64, f64) {
        (rgb.r, rgb.g, rgb.b)
    }
}
