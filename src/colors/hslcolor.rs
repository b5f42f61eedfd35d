//! This file implements HSL as a simple transformation of RGB that creates a cylindrical space. HSL
//! has the same problems with perceptual uniformity as RGB does, but it does have the advantage of
//! being easy to display and having some conception of common color attributes: *lightness* runs
//! from black to fully saturated in the middle to white at the end.
//!
//! Unlike most implementations, hue is not measured in degrees: every component lies between 0 and
//! 1, hue included. Hue is an angle on a circle, so a hue of 1 is the same as a hue of 0 and any
//! other real number wraps into range. Converting gray into HSL gives a hue of 0, although any hue
//! could be used in its place.

use colors::Rgb;
use convert;
use coord::Coord;
use error::ColorError;

/// A color in the HSL color space. Saturation and lightness must lie between 0 and 1 (within
/// [`FLOAT_ERROR`](../../constant.FLOAT_ERROR.html)); hue may be any finite number and is wrapped
/// into `[0, 1)` whenever it's used.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// The hue component, a rotation around the chromatic circle: `h = 1` is the same as `h = 0`.
    pub h: f64,
    /// The saturation component. 0 is full gray, 1 is full color.
    pub s: f64,
    /// The lightness component, called luminance on [`Color`](../../color/struct.Color.html).
    /// 0 is black, 1 is white.
    pub l: f64,
}

impl Hsl {
    /// Builds an `Hsl` without checking it: ranges are only enforced when the value is used.
    pub fn new(h: f64, s: f64, l: f64) -> Hsl {
        Hsl { h, s, l }
    }
    /// Converts to RGB, failing if saturation or lightness is out of range.
    /// # Example
    /// ```
    /// # use colorist::colors::{Hsl, Rgb};
    /// let green = Hsl::new(1.0 / 3.0, 1.0, 0.5).to_rgb().unwrap();
    /// assert_eq!(green, Rgb::new(0.0, 1.0, 0.0));
    /// ```
    pub fn to_rgb(self) -> Result<Rgb, ColorError> {
        convert::hsl_to_rgb(self)
    }
    /// The hue wrapped into the range `[0, 1)`.
    pub fn wrapped_hue(&self) -> f64 {
        convert::wrap_hue(self.h)
    }
}

impl From<(f64, f64, f64)> for Hsl {
    fn from(hsl: (f64, f64, f64)) -> Hsl {
        Hsl {
            h: hsl.0,
            s: hsl.1,
            l: hsl.2,
        }
    }
}

impl From<Hsl> for (f64, f64, f64) {
    fn from(hsl: Hsl) -> (f64, f64, f64) {
        (hsl.h, hsl.s, hsl.l)
    }
}

impl From<Coord> for Hsl {
    fn from(c: Coord) -> Hsl {
        Hsl {
            h: c.x,
            s: c.y,
            l: c.z,
        }
    }
}

impl From<Hsl> for Coord {
    fn from(hsl: Hsl) -> Coord {
        Coord {
            x: hsl.h,
            y: hsl.s,
            z: hsl.l,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hsl_rgb_conversion() {
        let red = Hsl::new(0.0, 1.0, 0.5).to_rgb().unwrap();
        assert_eq!(red, Rgb::new(1.0, 0.0, 0.0));
        // h = 1 is the same rotation as h = 0
        let also_red = Hsl::new(1.0, 1.0, 0.5).to_rgb().unwrap();
        assert_eq!(also_red, red);
        let lavender = Hsl::new(245.0 / 360.0, 0.5, 0.6).to_rgb().unwrap();
        assert_eq!(convert::rgb_to_hex(lavender, true), "#6e66cc");
    }

    #[test]
    fn test_wrapped_hue() {
        assert!(approx_eq!(f64, Hsl::new(1.25, 0.0, 0.0).wrapped_hue(), 0.25, epsilon = 1e-12));
        assert!(approx_eq!(f64, Hsl::new(-0.25, 0.0, 0.0).wrapped_hue(), 0.75, epsilon = 1e-12));
        assert!(approx_eq!(f64, Hsl::new(3.5, 0.0, 0.0).wrapped_hue(), 0.5, epsilon = 1e-12));
    }

    #[test]
    fn test_tuple_conversion() {
        let hsl = Hsl::from((0.1, 0.2, 0.3));
        assert_eq!(hsl, Hsl::new(0.1, 0.2, 0.3));
        let tuple: (f64, f64, f64) = hsl.into();
        assert_eq!(tuple, (0.1, 0.2, 0.3));
    }
}
