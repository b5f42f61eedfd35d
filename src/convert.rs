//! The conversion kernel: pure functions between HSL, RGB, and hex strings, plus the compositions
//! that go through the name table to reach the web form. Everything here is a plain function of its
//! input: there's no state and nothing is cached.
//!
//! The HSL/RGB arithmetic is the usual piecewise "hexcone" formula, with every component, hue
//! included, between 0 and 1. Gray has no defined hue, so converting any gray to HSL gives a hue
//! and saturation of 0 and the original hue is lost: that's the one lossy step in an HSL round
//! trip.

use colors::{Hsl, Rgb};
use consts::{FLOAT_ERROR, SHORT_HEX_COLOR};
use coord::Coord;
use error::ColorError;
use names::NameTable;
use validate;

/// Wraps any real hue into `[0, 1)`: hue is an angle, so 1.25 and -0.75 are both 0.25.
pub fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1 for tiny negative inputs
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

// One channel of the HSL cylinder, at hue position `vh` (wrapped first).
fn hue_to_channel(v1: f64, v2: f64, vh: f64) -> f64 {
    let vh = wrap_hue(vh);
    if 6.0 * vh < 1.0 {
        v1 + (v2 - v1) * 6.0 * vh
    } else if 2.0 * vh < 1.0 {
        v2
    } else if 3.0 * vh < 2.0 {
        v1 + (v2 - v1) * ((2.0 / 3.0) - vh) * 6.0
    } else {
        v1
    }
}

pub(crate) fn hsl_to_rgb_unchecked(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl;
    if s == 0.0 {
        return Rgb::new(l, l, l);
    }
    let v2 = if l < 0.5 {
        l * (1.0 + s)
    } else {
        (l + s) - (s * l)
    };
    let v1 = 2.0 * l - v2;
    Rgb {
        r: hue_to_channel(v1, v2, h + (1.0 / 3.0)),
        g: hue_to_channel(v1, v2, h),
        b: hue_to_channel(v1, v2, h - (1.0 / 3.0)),
    }
}

/// Converts HSL to RGB. Hue can be any finite number; saturation and lightness have to be between 0
/// and 1.
///
/// # Errors
/// Returns `ColorError::OutOfRange` naming the saturation or lightness (or a non-finite hue).
///
/// # Example
/// ```
/// # use colorist::colors::{Hsl, Rgb};
/// # use colorist::convert::hsl_to_rgb;
/// // with lightness at 0, RGB is always black
/// assert_eq!(hsl_to_rgb(Hsl::new(0.5, 0.5, 0.0)).unwrap(), Rgb::new(0.0, 0.0, 0.0));
/// // with saturation at 0, every channel equals the lightness
/// assert_eq!(hsl_to_rgb(Hsl::new(0.5, 0.0, 0.75)).unwrap(), Rgb::new(0.75, 0.75, 0.75));
/// assert_eq!(hsl_to_rgb(Hsl::new(2.0 / 3.0, 1.0, 0.5)).unwrap(), Rgb::new(0.0, 0.0, 1.0));
/// assert!(hsl_to_rgb(Hsl::new(0.0, 0.0, 1.5)).is_err());
/// ```
pub fn hsl_to_rgb(hsl: Hsl) -> Result<Rgb, ColorError> {
    validate::check_hsl(hsl).map(hsl_to_rgb_unchecked)
}

pub(crate) fn rgb_to_hsl_unchecked(rgb: Rgb) -> Hsl {
    let Rgb { r, g, b } = rgb;
    let vmin = r.min(g).min(b);
    let vmax = r.max(g).max(b);
    let diff = vmax - vmin;
    let vsum = vmin + vmax;
    let l = vsum / 2.0;

    if diff < FLOAT_ERROR {
        // a gray: no chroma, so no hue either
        return Hsl::new(0.0, 0.0, l);
    }

    let s = if l < 0.5 {
        diff / vsum
    } else {
        diff / (2.0 - vsum)
    };

    let dr = (((vmax - r) / 6.0) + (diff / 2.0)) / diff;
    let dg = (((vmax - g) / 6.0) + (diff / 2.0)) / diff;
    let db = (((vmax - b) / 6.0) + (diff / 2.0)) / diff;

    let mut h = if r == vmax {
        db - dg
    } else if g == vmax {
        (1.0 / 3.0) + dr - db
    } else {
        (2.0 / 3.0) + dg - dr
    };
    if h < 0.0 {
        h += 1.0;
    }
    if h > 1.0 {
        h -= 1.0;
    }
    Hsl::new(h, s, l)
}

/// Converts RGB to HSL. Grays come back with hue and saturation both 0.
///
/// # Errors
/// Returns `ColorError::OutOfRange` naming the first channel that isn't between 0 and 1.
///
/// # Example
/// ```
/// # use colorist::colors::{Hsl, Rgb};
/// # use colorist::convert::rgb_to_hsl;
/// assert_eq!(rgb_to_hsl(Rgb::new(1.0, 0.0, 0.0)).unwrap(), Hsl::new(0.0, 1.0, 0.5));
/// assert_eq!(rgb_to_hsl(Rgb::new(0.5, 0.5, 0.5)).unwrap(), Hsl::new(0.0, 0.0, 0.5));
/// let err = rgb_to_hsl(Rgb::new(0.0, 2.0, 0.5)).unwrap_err();
/// assert_eq!(err.to_string(), "Green must be between 0 and 1. You provided 2.0.");
/// ```
pub fn rgb_to_hsl(rgb: Rgb) -> Result<Hsl, ColorError> {
    validate::check_rgb(rgb).map(rgb_to_hsl_unchecked)
}

pub(crate) fn rgb_to_bytes(rgb: Rgb) -> [u8; 3] {
    // float-to-int casts saturate, so the worst an unchecked value can do is land on 0 or 255
    let byte = |c: f64| (c * 255.0 + 0.5 - FLOAT_ERROR) as u8;
    [byte(rgb.r), byte(rgb.g), byte(rgb.b)]
}

pub(crate) fn bytes_to_hex(bytes: [u8; 3], force_long: bool) -> String {
    // a byte has a one-digit shorthand exactly when both of its hex digits match, i.e. 0x11 * n
    let shortenable = bytes.iter().all(|b| b % 17 == 0);
    if !force_long && shortenable {
        format!("#{:x}{:x}{:x}", bytes[0] / 17, bytes[1] / 17, bytes[2] / 17)
    } else {
        format!("#{:02x}{:02x}{:02x}", bytes[0], bytes[1], bytes[2])
    }
}

/// Converts RGB to a lowercase hex string. Unless `force_long` is set, the 3-digit form is used
/// whenever it loses nothing.
///
/// # Example
/// ```
/// # use colorist::colors::Rgb;
/// # use colorist::convert::rgb_to_hex;
/// assert_eq!(rgb_to_hex(Rgb::new(0.0, 1.0, 0.0), false), "#0f0");
/// assert_eq!(rgb_to_hex(Rgb::new(0.0, 1.0, 0.0), true), "#00ff00");
/// // rounding tries to be as natural as possible
/// assert_eq!(rgb_to_hex(Rgb::new(0.0, 0.999999, 1.0), false), "#0ff");
/// assert_eq!(rgb_to_hex(Rgb::new(0.23, 1.0, 1.0), false), "#3bffff");
/// ```
pub fn rgb_to_hex(rgb: Rgb, force_long: bool) -> String {
    bytes_to_hex(rgb_to_bytes(rgb), force_long)
}

pub(crate) fn hex_to_bytes(hex: &str) -> Result<[u8; 3], ColorError> {
    let hex = validate::check_hex(hex)?;
    let digits = &hex[1..];
    let parse = |pair: &str| {
        u8::from_str_radix(pair, 16).map_err(|_| ColorError::InvalidFormat(hex.clone()))
    };
    if SHORT_HEX_COLOR.is_match(&hex) {
        // each short digit stands for the same digit twice
        Ok([
            parse(&digits[0..1])? * 17,
            parse(&digits[1..2])? * 17,
            parse(&digits[2..3])? * 17,
        ])
    } else {
        Ok([
            parse(&digits[0..2])?,
            parse(&digits[2..4])?,
            parse(&digits[4..6])?,
        ])
    }
}

/// Parses a `#XXX` or `#XXXXXX` hex string (any case) into RGB.
///
/// # Errors
/// Returns `ColorError::InvalidFormat` for any other length or for non-hex digits.
///
/// # Example
/// ```
/// # use colorist::colors::Rgb;
/// # use colorist::convert::hex_to_rgb;
/// assert_eq!(hex_to_rgb("#00ff00").unwrap(), Rgb::new(0.0, 1.0, 0.0));
/// assert_eq!(hex_to_rgb("#0f0").unwrap(), Rgb::new(0.0, 1.0, 0.0));
/// assert!(hex_to_rgb("#aa").is_err());
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    hex_to_bytes(hex).map(Rgb::from_bytes)
}

/// HSL straight to hex, shortest form.
pub fn hsl_to_hex(hsl: Hsl) -> Result<String, ColorError> {
    hsl_to_rgb(hsl).map(|rgb| rgb_to_hex(rgb, false))
}

/// Hex straight to HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    hex_to_rgb(hex).map(rgb_to_hsl_unchecked)
}

/// RGB to the web form, using the standard name table.
pub fn rgb_to_web(rgb: Rgb) -> Result<String, ColorError> {
    let rgb = validate::check_rgb(rgb)?;
    Ok(NameTable::Standard.bytes_to_web(rgb_to_bytes(rgb)))
}

/// The web form (a standard name or hex) to RGB.
pub fn web_to_rgb(web: &str) -> Result<Rgb, ColorError> {
    NameTable::Standard.web_to_bytes(web).map(Rgb::from_bytes)
}

/// The web form (a standard name or hex) to HSL.
pub fn web_to_hsl(web: &str) -> Result<Hsl, ColorError> {
    web_to_rgb(web).map(rgb_to_hsl_unchecked)
}

/// HSL to the web form, using the standard name table.
pub fn hsl_to_web(hsl: Hsl) -> Result<String, ColorError> {
    hsl_to_rgb(hsl).and_then(rgb_to_web)
}

/// Returns `nb + 1` HSL values evenly spaced from `begin` to `end`, both included: `nb` counts the
/// gaps between colors, not the colors. With `nb = 0` only `begin` comes back. Interpolation is
/// plain linear interpolation of each component, so going from hue 0 to hue 1 travels all the way
/// around the circle.
///
/// # Example
/// ```
/// # use colorist::colors::Hsl;
/// # use colorist::convert::{color_scale, hsl_to_hex};
/// let scale = color_scale(Hsl::new(0.0, 1.0, 0.5), Hsl::new(1.0, 1.0, 0.5), 3);
/// let hexes: Vec<String> = scale.into_iter().map(|hsl| hsl_to_hex(hsl).unwrap()).collect();
/// assert_eq!(hexes, vec!["#f00", "#0f0", "#00f", "#f00"]);
/// ```
pub fn color_scale(begin: Hsl, end: Hsl, nb: usize) -> Vec<Hsl> {
    let start = Coord::from(begin);
    let stop = Coord::from(end);
    (0..=nb)
        .map(|i| Hsl::from(start.step_towards(&stop, i, nb)))
        .collect()
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use attribute::Component;

    fn assert_hsl_close(actual: Hsl, expected: Hsl) {
        assert!(approx_eq!(f64, actual.h, expected.h, epsilon = FLOAT_ERROR), "{:?}", actual);
        assert!(approx_eq!(f64, actual.s, expected.s, epsilon = FLOAT_ERROR), "{:?}", actual);
        assert!(approx_eq!(f64, actual.l, expected.l, epsilon = FLOAT_ERROR), "{:?}", actual);
    }

    #[test]
    fn test_hsl_to_rgb_extremes() {
        for &h in &[0.0, 0.5] {
            for &s in &[0.0, 0.5] {
                assert_eq!(hsl_to_rgb(Hsl::new(h, s, 0.0)).unwrap(), Rgb::new(0., 0., 0.));
                assert_eq!(hsl_to_rgb(Hsl::new(h, s, 1.0)).unwrap(), Rgb::new(1., 1., 1.));
            }
        }
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 0.25)).unwrap(), Rgb::new(0.25, 0.25, 0.25));
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 1.0, 0.5)).unwrap(), Rgb::new(1., 0., 0.));
        assert_eq!(hsl_to_rgb(Hsl::new(1.0, 1.0, 0.5)).unwrap(), Rgb::new(1., 0., 0.));
        assert_eq!(hsl_to_rgb(Hsl::new(1.0 / 3.0, 1.0, 0.5)).unwrap(), Rgb::new(0., 1., 0.));
        assert_eq!(hsl_to_rgb(Hsl::new(2.0 / 3.0, 1.0, 0.5)).unwrap(), Rgb::new(0., 0., 1.));
    }

    #[test]
    fn test_hsl_to_rgb_errors() {
        assert_eq!(
            hsl_to_rgb(Hsl::new(0.0, 2.0, 0.5)),
            Err(ColorError::OutOfRange {
                component: Component::Saturation,
                value: 2.0
            })
        );
        assert_eq!(
            hsl_to_rgb(Hsl::new(0.0, 0.5, -0.5)),
            Err(ColorError::OutOfRange {
                component: Component::Luminance,
                value: -0.5
            })
        );
        assert!(hsl_to_rgb(Hsl::new(::std::f64::NAN, 0.5, 0.5)).is_err());
    }

    #[test]
    fn test_rgb_to_hsl() {
        assert_hsl_close(
            rgb_to_hsl(Rgb::new(0.5, 0.5, 1.0)).unwrap(),
            Hsl::new(2.0 / 3.0, 1.0, 0.75),
        );
        assert_hsl_close(
            rgb_to_hsl(Rgb::new(0.2, 0.1, 0.1)).unwrap(),
            Hsl::new(0.0, 1.0 / 3.0, 0.15),
        );
        assert_hsl_close(
            rgb_to_hsl(Rgb::new(0.0, 1.0, 0.0)).unwrap(),
            Hsl::new(1.0 / 3.0, 1.0, 0.5),
        );
        // very close channels are still a gray
        let hsl = rgb_to_hsl(Rgb::new(0.9999999999999999, 1.0, 0.9999999999999994)).unwrap();
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert!(approx_eq!(f64, hsl.l, 1.0, epsilon = FLOAT_ERROR));
        assert_eq!(
            rgb_to_hsl(Rgb::new(0.0, 0.0, 1.5)),
            Err(ColorError::OutOfRange {
                component: Component::Blue,
                value: 1.5
            })
        );
    }

    #[test]
    fn test_hsl_round_trip() {
        // sweep the cylinder, skipping s = 0 where hue is discarded by convention
        for hi in 0..12 {
            for si in 1..5 {
                for li in 1..8 {
                    let hsl = Hsl::new(hi as f64 / 12.0, si as f64 / 4.0, li as f64 / 8.0);
                    let back = rgb_to_hsl(hsl_to_rgb(hsl).unwrap()).unwrap();
                    assert_hsl_close(back, hsl);
                }
            }
        }
        // gray keeps lightness but loses its hue
        let back = rgb_to_hsl(hsl_to_rgb(Hsl::new(0.4, 0.0, 0.3)).unwrap()).unwrap();
        assert_eq!(back, Hsl::new(0.0, 0.0, 0.3));
    }

    #[test]
    fn test_hex_round_trip_is_byte_exact() {
        for ri in 0..11 {
            for gi in 0..11 {
                let rgb = Rgb::new(ri as f64 / 10.0, gi as f64 / 10.0, 0.37);
                let back = hex_to_rgb(&rgb_to_hex(rgb, true)).unwrap();
                assert!((back.r - rgb.r).abs() <= 1.0 / 255.0);
                assert!((back.g - rgb.g).abs() <= 1.0 / 255.0);
                assert!((back.b - rgb.b).abs() <= 1.0 / 255.0);
            }
        }
    }

    #[test]
    fn test_hex_parsing() {
        let gray = hex_to_rgb("#aaa").unwrap();
        assert!(approx_eq!(f64, gray.r, 2.0 / 3.0, epsilon = 1e-12));
        assert_eq!(hex_to_rgb("#FFF").unwrap(), Rgb::new(1., 1., 1.));
        assert_eq!(hex_to_rgb("#aa"), Err(ColorError::InvalidFormat("#aa".to_string())));
        assert!(hex_to_rgb("#aaaa").is_err());
        assert!(hex_to_rgb("aaaaaa").is_err());
        assert!(hex_to_rgb("#gggggg").is_err());
    }

    #[test]
    fn test_shortening() {
        assert_eq!(bytes_to_hex([0xaa, 0xbb, 0xcc], false), "#abc");
        assert_eq!(bytes_to_hex([0xaa, 0xbb, 0xcc], true), "#aabbcc");
        assert_eq!(bytes_to_hex([0xac, 0xac, 0xac], false), "#acacac");
        assert_eq!(bytes_to_hex([0x00, 0x00, 0x01], false), "#000001");
    }

    #[test]
    fn test_compositions() {
        assert_eq!(hsl_to_hex(Hsl::new(0.0, 1.0, 0.5)).unwrap(), "#f00");
        assert_hsl_close(hex_to_hsl("#00f").unwrap(), Hsl::new(2.0 / 3.0, 1.0, 0.5));
        assert_eq!(rgb_to_web(Rgb::new(1.0, 0.0, 0.0)).unwrap(), "red");
        assert_eq!(web_to_rgb("Lime").unwrap(), Rgb::new(0.0, 1.0, 0.0));
        assert_hsl_close(web_to_hsl("blue").unwrap(), Hsl::new(2.0 / 3.0, 1.0, 0.5));
        assert_eq!(hsl_to_web(Hsl::new(0.0, 0.0, 1.0)).unwrap(), "white");
        assert_eq!(hsl_to_web(Hsl::new(0.0, 0.0, 2.0 / 3.0)).unwrap(), "#aaa");
    }

    #[test]
    fn test_color_scale() {
        let scale = color_scale(Hsl::new(0.0, 0.0, 0.0), Hsl::new(0.0, 0.0, 1.0), 15);
        let hexes: Vec<String> = scale.into_iter().map(|hsl| hsl_to_hex(hsl).unwrap()).collect();
        assert_eq!(hexes.len(), 16);
        assert_eq!(hexes[0], "#000");
        assert_eq!(hexes[1], "#111");
        assert_eq!(hexes[14], "#eee");
        assert_eq!(hexes[15], "#fff");
        // zero gaps: just the start
        let single = color_scale(Hsl::new(0.2, 0.5, 0.5), Hsl::new(0.8, 0.5, 0.5), 0);
        assert_eq!(single, vec![Hsl::new(0.2, 0.5, 0.5)]);
    }
}
