//! The closed set of representations and a tagged value that can hold any one of them. There are
//! only four formats, so conversion is a fixed table written out by hand: every value knows how to
//! project itself to HSL, to RGB, and to exact bytes, and the string forms are built from the
//! bytes.

use std::fmt;

use colors::{Hsl, Rgb};
use convert;
use error::ColorError;
use names::NameTable;
use validate;

/// One of the supported representations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Format {
    /// Hue, saturation, lightness, each between 0 and 1.
    Hsl,
    /// Red, green, blue, each between 0 and 1.
    Rgb,
    /// `#` followed by 3 or 6 hex digits.
    Hex,
    /// A color name if one exists, hex otherwise.
    Web,
}

/// Every format, in declaration order.
pub static FORMATS: [Format; 4] = [Format::Hsl, Format::Rgb, Format::Hex, Format::Web];

impl Format {
    /// The lowercase name of the format, as used in attribute names.
    pub fn name(self) -> &'static str {
        match self {
            Format::Hsl => "hsl",
            Format::Rgb => "rgb",
            Format::Hex => "hex",
            Format::Web => "web",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A color value in any one representation.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    /// An HSL triple.
    Hsl(Hsl),
    /// An RGB triple.
    Rgb(Rgb),
    /// A hex string.
    Hex(String),
    /// A web string: a name or hex.
    Web(String),
}

impl ColorValue {
    /// Which representation this value is in.
    pub fn format(&self) -> Format {
        match *self {
            ColorValue::Hsl(_) => Format::Hsl,
            ColorValue::Rgb(_) => Format::Rgb,
            ColorValue::Hex(_) => Format::Hex,
            ColorValue::Web(_) => Format::Web,
        }
    }

    /// Checks the value against its representation's rules, returning it normalized (strings are
    /// lowercased). Web names are checked against `names`.
    pub fn validate(self, names: NameTable) -> Result<ColorValue, ColorError> {
        Ok(match self {
            ColorValue::Hsl(hsl) => ColorValue::Hsl(validate::check_hsl(hsl)?),
            ColorValue::Rgb(rgb) => ColorValue::Rgb(validate::check_rgb(rgb)?),
            ColorValue::Hex(hex) => ColorValue::Hex(validate::check_hex(&hex)?),
            ColorValue::Web(web) => ColorValue::Web(validate::check_web(&web, names)?),
        })
    }

    /// Converts to the given representation. Hex output is in its shortest form and web names come
    /// from `names`.
    ///
    /// # Errors
    /// Whatever the validator of the source representation reports.
    ///
    /// # Example
    /// ```
    /// # use colorist::format::{ColorValue, Format};
    /// # use colorist::names::NameTable;
    /// # use colorist::colors::Rgb;
    /// let red = ColorValue::Web("RED".to_string());
    /// assert_eq!(
    ///     red.convert(Format::Rgb, NameTable::Standard).unwrap(),
    ///     ColorValue::Rgb(Rgb::new(1.0, 0.0, 0.0))
    /// );
    /// assert_eq!(
    ///     red.convert(Format::Hex, NameTable::Standard).unwrap(),
    ///     ColorValue::Hex("#f00".to_string())
    /// );
    /// ```
    pub fn convert(&self, to: Format, names: NameTable) -> Result<ColorValue, ColorError> {
        Ok(match to {
            Format::Hsl => ColorValue::Hsl(self.to_hsl(names)?),
            Format::Rgb => ColorValue::Rgb(self.to_rgb(names)?),
            Format::Hex => ColorValue::Hex(convert::bytes_to_hex(self.to_bytes(names)?, false)),
            Format::Web => ColorValue::Web(names.bytes_to_web(self.to_bytes(names)?)),
        })
    }

    /// Converts to HSL.
    pub fn to_hsl(&self, names: NameTable) -> Result<Hsl, ColorError> {
        match *self {
            ColorValue::Hsl(hsl) => validate::check_hsl(hsl),
            ColorValue::Rgb(rgb) => convert::rgb_to_hsl(rgb),
            ColorValue::Hex(ref hex) => convert::hex_to_hsl(hex),
            ColorValue::Web(ref web) => names
                .web_to_bytes(web)
                .map(|rgb| convert::rgb_to_hsl_unchecked(Rgb::from_bytes(rgb))),
        }
    }

    /// Converts to RGB.
    pub fn to_rgb(&self, names: NameTable) -> Result<Rgb, ColorError> {
        match *self {
            ColorValue::Hsl(hsl) => convert::hsl_to_rgb(hsl),
            ColorValue::Rgb(rgb) => validate::check_rgb(rgb),
            ColorValue::Hex(ref hex) => convert::hex_to_rgb(hex),
            ColorValue::Web(ref web) => names.web_to_bytes(web).map(Rgb::from_bytes),
        }
    }

    // One byte per channel. String forms are parsed exactly instead of going through floats.
    fn to_bytes(&self, names: NameTable) -> Result<[u8; 3], ColorError> {
        match *self {
            ColorValue::Hsl(_) | ColorValue::Rgb(_) => {
                self.to_rgb(names).map(convert::rgb_to_bytes)
            }
            ColorValue::Hex(ref hex) => convert::hex_to_bytes(hex),
            ColorValue::Web(ref web) => names.web_to_bytes(web),
        }
    }
}

impl From<Hsl> for ColorValue {
    fn from(hsl: Hsl) -> ColorValue {
        ColorValue::Hsl(hsl)
    }
}

impl From<Rgb> for ColorValue {
    fn from(rgb: Rgb) -> ColorValue {
        ColorValue::Rgb(rgb)
    }
}

// strings are read as web strings, which accept hex as well
impl<'a> From<&'a str> for ColorValue {
    fn from(web: &'a str) -> ColorValue {
        ColorValue::Web(web.to_string())
    }
}

impl From<String> for ColorValue {
    fn from(web: String) -> ColorValue {
        ColorValue::Web(web)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn samples() -> Vec<ColorValue> {
        vec![
            ColorValue::Hsl(Hsl::new(0.0, 1.0, 0.5)),
            ColorValue::Rgb(Rgb::new(1.0, 0.0, 0.0)),
            ColorValue::Hex("#FF0000".to_string()),
            ColorValue::Web("Red".to_string()),
        ]
    }

    #[test]
    fn test_every_pair() {
        // the same red in every representation must agree in every representation
        for value in samples() {
            for &to in FORMATS.iter() {
                let converted = value.convert(to, NameTable::Standard).unwrap();
                assert_eq!(converted.format(), to);
                let expected = match to {
                    Format::Hsl => ColorValue::Hsl(Hsl::new(0.0, 1.0, 0.5)),
                    Format::Rgb => ColorValue::Rgb(Rgb::new(1.0, 0.0, 0.0)),
                    Format::Hex => ColorValue::Hex("#f00".to_string()),
                    Format::Web => ColorValue::Web("red".to_string()),
                };
                assert_eq!(converted, expected, "{:?} -> {}", value, to);
            }
        }
    }

    #[test]
    fn test_errors_propagate() {
        let bad_hsl = ColorValue::Hsl(Hsl::new(0.0, 1.5, 0.5));
        assert!(bad_hsl.convert(Format::Hex, NameTable::Standard).is_err());
        // even the identity conversion validates
        assert!(bad_hsl.convert(Format::Hsl, NameTable::Standard).is_err());
        let unknown = ColorValue::from("pinky");
        assert_eq!(
            unknown.convert(Format::Rgb, NameTable::Standard),
            Err(ColorError::UnknownColorName("pinky".to_string()))
        );
        let bad_hex = ColorValue::Hex("#12".to_string());
        assert!(bad_hex.convert(Format::Web, NameTable::Standard).is_err());
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            ColorValue::Hex("#ABC".to_string()).validate(NameTable::Standard),
            Ok(ColorValue::Hex("#abc".to_string()))
        );
        assert_eq!(
            ColorValue::from("cloudy_blue").validate(NameTable::Xkcd),
            Ok(ColorValue::Web("cloudy_blue".to_string()))
        );
        assert!(ColorValue::from("cloudy_blue").validate(NameTable::Standard).is_err());
    }

    #[test]
    fn test_web_in_other_table() {
        let web = ColorValue::from("#acc2d9");
        assert_eq!(
            web.convert(Format::Web, NameTable::Xkcd).unwrap(),
            ColorValue::Web("cloudy_blue".to_string())
        );
        assert_eq!(
            web.convert(Format::Web, NameTable::Standard).unwrap(),
            ColorValue::Web("#acc2d9".to_string())
        );
    }
}
