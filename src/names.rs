//! The name-table adapter: lookups between exact byte triples and English color names, and the
//! hex/web conversions built on top of them.
//!
//! Two tables are available and a host picks one; they are never mixed. The standard table holds
//! the X11/CSS names, in a fixed order so that the first name declared for a triple is always the
//! one shown (`Cyan` wins over `Aqua`). The XKCD table holds the crowd-sourced names from the XKCD
//! color survey.

use std::collections::HashMap;

use colors::Rgb;
use convert;
use error::ColorError;
use format::{ColorValue, Format};
use xkcd::XKCD_TABLE;

/// A named color in the standard table. The first name is canonical.
struct NamedColor {
    rgb: [u8; 3],
    names: &'static [&'static str],
}

macro_rules! named_colors {
    ($(([$r:expr, $g:expr, $b:expr], &[$($name:expr),+]),)*) => {
        &[$(NamedColor { rgb: [$r, $g, $b], names: &[$($name),+] }),*]
    };
}

// X11 rgb.txt names, as understood by CSS. Order matters: see `canonical_name`.
static STANDARD_NAMES: &[NamedColor] = named_colors![
    ([0, 0, 0], &["Black"]),
    ([0, 0, 128], &["Navy", "NavyBlue"]),
    ([0, 0, 139], &["DarkBlue"]),
    ([0, 0, 205], &["MediumBlue"]),
    ([0, 0, 255], &["Blue"]),
    ([0, 100, 0], &["DarkGreen"]),
    ([0, 128, 0], &["Green"]),
    ([0, 139, 139], &["DarkCyan"]),
    ([0, 191, 255], &["DeepSkyBlue"]),
    ([0, 206, 209], &["DarkTurquoise"]),
    ([0, 250, 154], &["MediumSpringGreen"]),
    ([0, 255, 0], &["Lime"]),
    ([0, 255, 127], &["SpringGreen"]),
    ([0, 255, 255], &["Cyan", "Aqua"]),
    ([25, 25, 112], &["MidnightBlue"]),
    ([30, 144, 255], &["DodgerBlue"]),
    ([32, 178, 170], &["LightSeaGreen"]),
    ([34, 139, 34], &["ForestGreen"]),
    ([46, 139, 87], &["SeaGreen"]),
    ([47, 79, 79], &["DarkSlateGray", "DarkSlateGrey"]),
    ([50, 205, 50], &["LimeGreen"]),
    ([60, 179, 113], &["MediumSeaGreen"]),
    ([64, 224, 208], &["Turquoise"]),
    ([65, 105, 225], &["RoyalBlue"]),
    ([70, 130, 180], &["SteelBlue"]),
    ([72, 61, 139], &["DarkSlateBlue"]),
    ([72, 209, 204], &["MediumTurquoise"]),
    ([75, 0, 130], &["Indigo"]),
    ([85, 107, 47], &["DarkOliveGreen"]),
    ([95, 158, 160], &["CadetBlue"]),
    ([100, 149, 237], &["CornflowerBlue"]),
    ([102, 205, 170], &["MediumAquamarine"]),
    ([105, 105, 105], &["DimGray", "DimGrey"]),
    ([106, 90, 205], &["SlateBlue"]),
    ([107, 142, 35], &["OliveDrab"]),
    ([112, 128, 144], &["SlateGray", "SlateGrey"]),
    ([119, 136, 153], &["LightSlateGray", "LightSlateGrey"]),
    ([123, 104, 238], &["MediumSlateBlue"]),
    ([124, 252, 0], &["LawnGreen"]),
    ([127, 255, 0], &["Chartreuse"]),
    ([127, 255, 212], &["Aquamarine"]),
    ([128, 0, 0], &["Maroon"]),
    ([128, 0, 128], &["Purple"]),
    ([128, 128, 0], &["Olive"]),
    ([128, 128, 128], &["Gray", "Grey"]),
    ([132, 112, 255], &["LightSlateBlue"]),
    ([135, 206, 235], &["SkyBlue"]),
    ([135, 206, 250], &["LightSkyBlue"]),
    ([138, 43, 226], &["BlueViolet"]),
    ([139, 0, 0], &["DarkRed"]),
    ([139, 0, 139], &["DarkMagenta"]),
    ([139, 69, 19], &["SaddleBrown"]),
    ([143, 188, 143], &["DarkSeaGreen"]),
    ([144, 238, 144], &["LightGreen"]),
    ([147, 112, 219], &["MediumPurple"]),
    ([148, 0, 211], &["DarkViolet"]),
    ([152, 251, 152], &["PaleGreen"]),
    ([153, 50, 204], &["DarkOrchid"]),
    ([154, 205, 50], &["YellowGreen"]),
    ([160, 82, 45], &["Sienna"]),
    ([165, 42, 42], &["Brown"]),
    ([169, 169, 169], &["DarkGray", "DarkGrey"]),
    ([173, 216, 230], &["LightBlue"]),
    ([173, 255, 47], &["GreenYellow"]),
    ([175, 238, 238], &["PaleTurquoise"]),
    ([176, 196, 222], &["LightSteelBlue"]),
    ([176, 224, 230], &["PowderBlue"]),
    ([178, 34, 34], &["Firebrick"]),
    ([184, 134, 11], &["DarkGoldenrod"]),
    ([186, 85, 211], &["MediumOrchid"]),
    ([188, 143, 143], &["RosyBrown"]),
    ([189, 183, 107], &["DarkKhaki"]),
    ([192, 192, 192], &["Silver"]),
    ([199, 21, 133], &["MediumVioletRed"]),
    ([205, 92, 92], &["IndianRed"]),
    ([205, 133, 63], &["Peru"]),
    ([208, 32, 144], &["VioletRed"]),
    ([210, 105, 30], &["Chocolate"]),
    ([210, 180, 140], &["Tan"]),
    ([211, 211, 211], &["LightGray", "LightGrey"]),
    ([216, 191, 216], &["Thistle"]),
    ([218, 112, 214], &["Orchid"]),
    ([218, 165, 32], &["Goldenrod"]),
    ([219, 112, 147], &["PaleVioletRed"]),
    ([220, 20, 60], &["Crimson"]),
    ([220, 220, 220], &["Gainsboro"]),
    ([221, 160, 221], &["Plum"]),
    ([222, 184, 135], &["Burlywood"]),
    ([224, 255, 255], &["LightCyan"]),
    ([230, 230, 250], &["Lavender"]),
    ([233, 150, 122], &["DarkSalmon"]),
    ([238, 130, 238], &["Violet"]),
    ([238, 221, 130], &["LightGoldenrod"]),
    ([238, 232, 170], &["PaleGoldenrod"]),
    ([240, 128, 128], &["LightCoral"]),
    ([240, 230, 140], &["Khaki"]),
    ([240, 248, 255], &["AliceBlue"]),
    ([240, 255, 240], &["Honeydew"]),
    ([240, 255, 255], &["Azure"]),
    ([244, 164, 96], &["SandyBrown"]),
    ([245, 222, 179], &["Wheat"]),
    ([245, 245, 220], &["Beige"]),
    ([245, 245, 245], &["WhiteSmoke"]),
    ([245, 255, 250], &["MintCream"]),
    ([248, 248, 255], &["GhostWhite"]),
    ([250, 128, 114], &["Salmon"]),
    ([250, 235, 215], &["AntiqueWhite"]),
    ([250, 240, 230], &["Linen"]),
    ([250, 250, 210], &["LightGoldenrodYellow"]),
    ([253, 245, 230], &["OldLace"]),
    ([255, 0, 0], &["Red"]),
    ([255, 0, 255], &["Magenta", "Fuchsia"]),
    ([255, 20, 147], &["DeepPink"]),
    ([255, 69, 0], &["OrangeRed"]),
    ([255, 99, 71], &["Tomato"]),
    ([255, 105, 180], &["HotPink"]),
    ([255, 127, 80], &["Coral"]),
    ([255, 140, 0], &["DarkOrange"]),
    ([255, 160, 122], &["LightSalmon"]),
    ([255, 165, 0], &["Orange"]),
    ([255, 182, 193], &["LightPink"]),
    ([255, 192, 203], &["Pink"]),
    ([255, 215, 0], &["Gold"]),
    ([255, 218, 185], &["PeachPuff"]),
    ([255, 222, 173], &["NavajoWhite"]),
    ([255, 228, 181], &["Moccasin"]),
    ([255, 228, 196], &["Bisque"]),
    ([255, 228, 225], &["MistyRose"]),
    ([255, 235, 205], &["BlanchedAlmond"]),
    ([255, 239, 213], &["PapayaWhip"]),
    ([255, 240, 245], &["LavenderBlush"]),
    ([255, 245, 238], &["Seashell"]),
    ([255, 248, 220], &["Cornsilk"]),
    ([255, 250, 205], &["LemonChiffon"]),
    ([255, 250, 240], &["FloralWhite"]),
    ([255, 250, 250], &["Snow"]),
    ([255, 255, 0], &["Yellow"]),
    ([255, 255, 224], &["LightYellow"]),
    ([255, 255, 240], &["Ivory"]),
    ([255, 255, 255], &["White"]),
];

lazy_static! {
    static ref STANDARD_BY_RGB: HashMap<[u8; 3], &'static [&'static str]> =
        STANDARD_NAMES.iter().map(|c| (c.rgb, c.names)).collect();
    static ref STANDARD_BY_NAME: HashMap<String, [u8; 3]> = {
        let mut by_name = HashMap::new();
        for color in STANDARD_NAMES.iter() {
            for name in color.names {
                by_name.entry(name.to_lowercase()).or_insert(color.rgb);
            }
        }
        by_name
    };
}

/// Which name table to use for the web representation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NameTable {
    /// The ~140 X11/CSS names: `red`, `DarkSlateGray`, and so on.
    Standard,
    /// The ~950 XKCD color survey names: `cloudy_blue`, `macaroni_and_cheese`, and so on.
    Xkcd,
}

impl Default for NameTable {
    fn default() -> NameTable {
        NameTable::Standard
    }
}

/// Picks the display form of a name: names with more than one capital letter (`DarkBlue`) keep
/// their casing so the words stay readable, anything else (`Red`) is lowercased.
fn display_name(name: &str) -> String {
    if name.chars().filter(|c| c.is_ascii_uppercase()).count() > 1 {
        name.to_string()
    } else {
        name.to_lowercase()
    }
}

impl NameTable {
    /// All known names for an exact byte triple, in declared order. Empty if there are none.
    pub fn lookup_name(self, rgb: [u8; 3]) -> Vec<&'static str> {
        match self {
            NameTable::Standard => STANDARD_BY_RGB
                .get(&rgb)
                .map(|names| names.to_vec())
                .unwrap_or_default(),
            NameTable::Xkcd => XKCD_TABLE.names_for(rgb),
        }
    }

    /// The byte triple for a name, ignoring case.
    ///
    /// # Errors
    /// Returns `ColorError::UnknownColorName` if this table doesn't have it.
    pub fn lookup_rgb(self, name: &str) -> Result<[u8; 3], ColorError> {
        let found = match self {
            NameTable::Standard => STANDARD_BY_NAME.get(&name.to_lowercase()).cloned(),
            NameTable::Xkcd => XKCD_TABLE.rgb_for(name),
        };
        found.ok_or_else(|| ColorError::UnknownColorName(name.to_string()))
    }

    /// The name shown for a byte triple: the first declared name, in its display form.
    pub fn canonical_name(self, rgb: [u8; 3]) -> Option<String> {
        self.lookup_name(rgb).first().map(|name| display_name(name))
    }

    pub(crate) fn bytes_to_web(self, rgb: [u8; 3]) -> String {
        match self.canonical_name(rgb) {
            Some(name) => name,
            None => convert::bytes_to_hex(rgb, false),
        }
    }

    pub(crate) fn web_to_bytes(self, web: &str) -> Result<[u8; 3], ColorError> {
        if web.starts_with('#') {
            convert::hex_to_bytes(web)
        } else {
            self.lookup_rgb(web)
        }
    }

    /// Converts hex to the web form: the canonical name if the exact color has one, otherwise the
    /// shortest hex that represents it.
    ///
    /// # Errors
    /// Only fails on malformed hex, with `ColorError::InvalidFormat`.
    pub fn hex_to_web(self, hex: &str) -> Result<String, ColorError> {
        convert::hex_to_bytes(hex).map(|rgb| self.bytes_to_web(rgb))
    }

    /// Converts the web form to hex. Hex input is validated and lowercased, and expanded to six
    /// digits if `force_long` is set; names are looked up and formatted in the shortest form unless
    /// `force_long` is set.
    ///
    /// # Errors
    /// `ColorError::InvalidFormat` for malformed hex, `ColorError::UnknownColorName` for names this
    /// table doesn't know.
    pub fn web_to_hex(self, web: &str, force_long: bool) -> Result<String, ColorError> {
        if web.starts_with('#') {
            let rgb = convert::hex_to_bytes(web)?;
            if force_long {
                Ok(convert::bytes_to_hex(rgb, true))
            } else {
                // keep whichever length was given
                Ok(web.to_lowercase())
            }
        } else {
            self.lookup_rgb(web)
                .map(|rgb| convert::bytes_to_hex(rgb, force_long))
        }
    }
}

/// All standard names for an exact byte triple, in declared order.
pub fn lookup_name(rgb: [u8; 3]) -> Vec<&'static str> {
    NameTable::Standard.lookup_name(rgb)
}

/// The byte triple for a standard name, ignoring case.
pub fn lookup_rgb(name: &str) -> Result<[u8; 3], ColorError> {
    NameTable::Standard.lookup_rgb(name)
}

/// Hex to the web form using the standard table.
/// # Example
/// ```
/// # use colorist::names::hex_to_web;
/// assert_eq!(hex_to_web("#ff0000").unwrap(), "red");
/// assert_eq!(hex_to_web("#000080").unwrap(), "navy");
/// assert_eq!(hex_to_web("#00008b").unwrap(), "DarkBlue");
/// assert_eq!(hex_to_web("#aaaaaa").unwrap(), "#aaa");
/// assert_eq!(hex_to_web("#acacac").unwrap(), "#acacac");
/// ```
pub fn hex_to_web(hex: &str) -> Result<String, ColorError> {
    NameTable::Standard.hex_to_web(hex)
}

/// The web form to hex using the standard table. Names follow the same shortest-form rule as any
/// other hex output, so `"red"` gives `"#f00"` unless `force_long` is set.
/// # Example
/// ```
/// # use colorist::names::web_to_hex;
/// assert_eq!(web_to_hex("red", false).unwrap(), "#f00");
/// assert_eq!(web_to_hex("red", true).unwrap(), "#ff0000");
/// assert_eq!(web_to_hex("#aaa", false).unwrap(), "#aaa");
/// assert_eq!(web_to_hex("#aaa", true).unwrap(), "#aaaaaa");
/// assert!(web_to_hex("#aaaa", false).is_err());
/// assert!(web_to_hex("pinky", false).is_err());
/// ```
pub fn web_to_hex(web: &str, force_long: bool) -> Result<String, ColorError> {
    NameTable::Standard.web_to_hex(web, force_long)
}

/// Looks up a standard color name and returns it in the requested representation. Web values come
/// back in canonical form, hex in its shortest form.
/// # Example
/// ```
/// # use colorist::format::{ColorValue, Format};
/// # use colorist::names::named;
/// # use colorist::colors::Rgb;
/// assert_eq!(named(Format::Hex, "WHITE").unwrap(), ColorValue::Hex("#fff".to_string()));
/// assert_eq!(named(Format::Rgb, "blue").unwrap(), ColorValue::Rgb(Rgb::new(0.0, 0.0, 1.0)));
/// assert_eq!(named(Format::Web, "aqua").unwrap(), ColorValue::Web("cyan".to_string()));
/// assert!(named(Format::Hsl, "DONOTEXISTS").is_err());
/// ```
pub fn named(format: Format, name: &str) -> Result<ColorValue, ColorError> {
    let rgb = lookup_rgb(name)?;
    Ok(match format {
        Format::Hsl => ColorValue::Hsl(convert::rgb_to_hsl_unchecked(Rgb::from_bytes(rgb))),
        Format::Rgb => ColorValue::Rgb(Rgb::from_bytes(rgb)),
        Format::Hex => ColorValue::Hex(convert::bytes_to_hex(rgb, false)),
        Format::Web => ColorValue::Web(NameTable::Standard.bytes_to_web(rgb)),
    })
}
