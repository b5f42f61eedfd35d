//! Validators for each representation. These run whenever a value is built or assigned, and either
//! hand back the value (normalized where that makes sense, e.g. lowercased hex) or the error that
//! explains why it was rejected. They never modify their input and never clamp.

use attribute::Component;
use colors::{Hsl, Rgb};
use consts::{FLOAT_ERROR, HEX_COLOR, LONG_HEX_COLOR};
use error::ColorError;
use names::NameTable;

/// Checks that a saturation, lightness, or RGB channel lies in `[0, 1]`, give or take
/// [`FLOAT_ERROR`](../constant.FLOAT_ERROR.html). NaN is always rejected.
pub fn check_unit(component: Component, value: f64) -> Result<f64, ColorError> {
    if -FLOAT_ERROR <= value && value <= 1.0 + FLOAT_ERROR {
        Ok(value)
    } else {
        Err(ColorError::OutOfRange { component, value })
    }
}

/// Hue has no range, since it wraps around, but it still has to be a real number.
pub fn check_hue(value: f64) -> Result<f64, ColorError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ColorError::OutOfRange {
            component: Component::Hue,
            value,
        })
    }
}

/// Validates an HSL triple: finite hue, saturation then lightness in range.
/// # Example
/// ```
/// # use colorist::colors::Hsl;
/// # use colorist::validate::check_hsl;
/// assert!(check_hsl(Hsl::new(7.5, 1.0, 0.5)).is_ok());
/// let err = check_hsl(Hsl::new(0.0, 2.0, 0.5)).unwrap_err();
/// assert_eq!(err.to_string(), "Saturation must be between 0 and 1. You provided 2.0.");
/// ```
pub fn check_hsl(hsl: Hsl) -> Result<Hsl, ColorError> {
    check_hue(hsl.h)?;
    check_unit(Component::Saturation, hsl.s)?;
    check_unit(Component::Luminance, hsl.l)?;
    Ok(hsl)
}

/// Validates an RGB triple, naming the first channel (red, green, blue in that order) that's out of
/// range.
pub fn check_rgb(rgb: Rgb) -> Result<Rgb, ColorError> {
    check_unit(Component::Red, rgb.r)?;
    check_unit(Component::Green, rgb.g)?;
    check_unit(Component::Blue, rgb.b)?;
    Ok(rgb)
}

/// Validates a 3- or 6-digit hex string, returning it lowercased.
pub fn check_hex(hex: &str) -> Result<String, ColorError> {
    if HEX_COLOR.is_match(hex) {
        Ok(hex.to_lowercase())
    } else {
        Err(ColorError::InvalidFormat(hex.to_string()))
    }
}

/// Validates a 6-digit hex string, returning it lowercased.
pub fn check_long_hex(hex: &str) -> Result<String, ColorError> {
    if LONG_HEX_COLOR.is_match(hex) {
        Ok(hex.to_lowercase())
    } else {
        Err(ColorError::InvalidFormat(hex.to_string()))
    }
}

/// Validates a web string against the given name table: anything starting with `#` has to be hex,
/// anything else has to be a known name (ignoring case). Returns it lowercased.
pub fn check_web(web: &str, names: NameTable) -> Result<String, ColorError> {
    if web.starts_with('#') {
        check_hex(web)
    } else {
        names.lookup_rgb(web)?;
        Ok(web.to_lowercase())
    }
}
