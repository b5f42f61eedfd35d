//! Attribute names, for reading and writing a [`Color`] by name instead of through its typed
//! methods. A name can be a whole representation (`hsl`, `hex_l`, `web`, ...), a qualified
//! component (`hsl.hue`, `rgb.r`), or an unqualified shorthand (`hue`, `g`). Unqualified names are
//! looked up across every representation at once, so if two representations both answer to a name
//! the lookup fails and lists the qualified names to choose from.
//!
//! The standard names never collide. Hosts can register extra aliases on an [`AttributeTable`],
//! which is where collisions can appear.
//!
//! [`Color`]: ../color/struct.Color.html
//! [`AttributeTable`]: struct.AttributeTable.html

use std::collections::HashMap;
use std::fmt;

use colors::{Hsl, Rgb};
use error::ColorError;
use format::Format;

/// A single numeric component of HSL or RGB.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    /// HSL hue.
    Hue,
    /// HSL saturation.
    Saturation,
    /// HSL lightness. Displays as "Lightness" in error messages.
    Luminance,
    /// RGB red.
    Red,
    /// RGB green.
    Green,
    /// RGB blue.
    Blue,
}

/// Every component, HSL first.
pub static COMPONENTS: [Component; 6] = [
    Component::Hue,
    Component::Saturation,
    Component::Luminance,
    Component::Red,
    Component::Green,
    Component::Blue,
];

impl Component {
    /// The representation this component belongs to.
    pub fn format(self) -> Format {
        match self {
            Component::Hue | Component::Saturation | Component::Luminance => Format::Hsl,
            Component::Red | Component::Green | Component::Blue => Format::Rgb,
        }
    }
    /// The attribute name: `hue`, `saturation`, `luminance`, `red`, `green`, `blue`.
    pub fn name(self) -> &'static str {
        match self {
            Component::Hue => "hue",
            Component::Saturation => "saturation",
            Component::Luminance => "luminance",
            Component::Red => "red",
            Component::Green => "green",
            Component::Blue => "blue",
        }
    }
    /// The single-letter axis name.
    pub fn axis(self) -> &'static str {
        match self {
            Component::Hue => "h",
            Component::Saturation => "s",
            Component::Luminance => "l",
            Component::Red => "r",
            Component::Green => "g",
            Component::Blue => "b",
        }
    }
    /// The fully qualified name, like `hsl.hue`.
    pub fn qualified_name(self) -> String {
        format!("{}.{}", self.format(), self.name())
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Component::Hue => "Hue",
            Component::Saturation => "Saturation",
            Component::Luminance => "Lightness",
            Component::Red => "Red",
            Component::Green => "Green",
            Component::Blue => "Blue",
        })
    }
}

/// Something a color can be read or written as.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// The whole HSL triple.
    Hsl,
    /// The whole RGB triple.
    Rgb,
    /// Hex in its shortest form.
    Hex,
    /// Hex, always 6 digits.
    HexLong,
    /// A standard (or configured) name, or hex.
    Web,
    /// An XKCD survey name, or hex.
    Xkcd,
    /// One numeric component.
    Component(Component),
}

lazy_static! {
    static ref REPRESENTATIONS: HashMap<&'static str, Attribute> = hashmap! {
        "hsl" => Attribute::Hsl,
        "rgb" => Attribute::Rgb,
        "hex" => Attribute::Hex,
        "hex_l" => Attribute::HexLong,
        "web" => Attribute::Web,
        "xkcd" => Attribute::Xkcd,
    };
}

/// The value read from, or written to, an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// A single component.
    Number(f64),
    /// An HSL triple.
    Hsl(Hsl),
    /// An RGB triple.
    Rgb(Rgb),
    /// Hex or a color name.
    Text(String),
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> AttributeValue {
        AttributeValue::Number(value)
    }
}

impl From<Hsl> for AttributeValue {
    fn from(hsl: Hsl) -> AttributeValue {
        AttributeValue::Hsl(hsl)
    }
}

impl From<Rgb> for AttributeValue {
    fn from(rgb: Rgb) -> AttributeValue {
        AttributeValue::Rgb(rgb)
    }
}

impl<'a> From<&'a str> for AttributeValue {
    fn from(text: &'a str) -> AttributeValue {
        AttributeValue::Text(text.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(text: String) -> AttributeValue {
        AttributeValue::Text(text)
    }
}

/// Resolves attribute names. Knows every standard name plus any aliases the host registers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeTable {
    aliases: Vec<(String, Component)>,
}

impl AttributeTable {
    /// The standard names and nothing else.
    pub fn standard() -> AttributeTable {
        AttributeTable::default()
    }

    /// Adds an extra name for a component, usable both unqualified and after its format's prefix.
    pub fn alias(mut self, name: &str, component: Component) -> AttributeTable {
        self.aliases.push((name.to_string(), component));
        self
    }

    fn answers_to(&self, component: Component, name: &str) -> bool {
        component.name() == name
            || component.axis() == name
            || self
                .aliases
                .iter()
                .any(|&(ref alias, c)| c == component && alias == name)
    }

    /// Finds the attribute a name refers to.
    ///
    /// # Errors
    /// `ColorError::AttributeNotFound` if nothing answers to the name, and
    /// `ColorError::AmbiguousAttribute` if an unqualified name matches components of more than one
    /// representation.
    ///
    /// # Example
    /// ```
    /// # use colorist::attribute::{Attribute, AttributeTable, Component};
    /// let table = AttributeTable::standard();
    /// assert_eq!(table.resolve("hex_l").unwrap(), Attribute::HexLong);
    /// assert_eq!(table.resolve("rgb.g").unwrap(), Attribute::Component(Component::Green));
    /// assert_eq!(table.resolve("luminance").unwrap(), Attribute::Component(Component::Luminance));
    /// assert!(table.resolve("lightness").is_err());
    /// ```
    pub fn resolve(&self, name: &str) -> Result<Attribute, ColorError> {
        if let Some(&attribute) = REPRESENTATIONS.get(name) {
            return Ok(attribute);
        }
        let not_found = || ColorError::AttributeNotFound(name.to_string());

        let mut parts = name.splitn(2, '.');
        let (prefix, field) = match (parts.next(), parts.next()) {
            (Some(prefix), Some(field)) => (Some(prefix), field),
            _ => (None, name),
        };

        let candidates: Vec<Component> = COMPONENTS
            .iter()
            .cloned()
            .filter(|&c| prefix.map_or(true, |p| c.format().name() == p))
            .filter(|&c| self.answers_to(c, field))
            .collect();

        match candidates.len() {
            0 => Err(not_found()),
            1 => Ok(Attribute::Component(candidates[0])),
            _ => {
                let mut qualified: Vec<String> =
                    candidates.iter().map(|c| c.qualified_name()).collect();
                qualified.sort();
                Err(ColorError::AmbiguousAttribute {
                    name: name.to_string(),
                    candidates: qualified,
                })
            }
        }
    }
}
