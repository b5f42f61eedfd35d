//! This file defines [`Color`], a single color that can be read and written in every
//! representation this crate knows. A `Color` stores exactly one canonical value, HSL by default,
//! and computes every other view from it on demand, so the views can never disagree or go stale.
//!
//! Everything that can vary between applications lives in a [`ColorConfig`]: which numeric form is
//! stored, how equality is decided, which name table the web form uses, extra attribute names, and
//! the picker. Colors hold their configuration behind an `Arc`, so a [`ColorFactory`] can hand out
//! any number of colors sharing one configuration. Plain [`Color::new`] uses the default one.
//!
//! [`Color`]: struct.Color.html
//! [`ColorConfig`]: struct.ColorConfig.html
//! [`ColorFactory`]: struct.ColorFactory.html
//! [`Color::new`]: struct.Color.html#method.new

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use attribute::{Attribute, AttributeTable, AttributeValue, Component};
use colors::{Hsl, Rgb};
use consts::FLOAT_ERROR;
use convert;
use coord::Coord;
use error::ColorError;
use format::ColorValue;
use names::NameTable;
use picker::{pick_key, rgb_color_picker, PickKey, Picker};
use validate;

/// The numeric form a [`Color`](struct.Color.html) keeps internally. String forms are always
/// computed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Storage {
    /// Store HSL. Hue survives a trip through gray, e.g. setting saturation to 0 and back.
    Hsl,
    /// Store RGB.
    Rgb,
}

impl Default for Storage {
    fn default() -> Storage {
        Storage::Hsl
    }
}

/// Decides whether two colors are equal.
pub type Equality = fn(&Color, &Color) -> bool;

/// Equal if they render to the same 6-digit hex code. This is the default.
pub fn rgb_equivalence(a: &Color, b: &Color) -> bool {
    a.hex_l() == b.hex_l()
}

/// Equal if their HSL values agree within [`FLOAT_ERROR`](../constant.FLOAT_ERROR.html), treating
/// hue as an angle.
pub fn hsl_equivalence(a: &Color, b: &Color) -> bool {
    let (x, y) = (a.hsl(), b.hsl());
    let dh = (x.wrapped_hue() - y.wrapped_hue()).abs();
    dh.min(1.0 - dh) <= FLOAT_ERROR
        && (x.s - y.s).abs() <= FLOAT_ERROR
        && (x.l - y.l).abs() <= FLOAT_ERROR
}

/// Settings shared by every color built from them.
#[derive(Clone)]
pub struct ColorConfig {
    /// What gets stored.
    pub storage: Storage,
    /// How `==` decides.
    pub equality: Equality,
    /// The name table behind the web form.
    pub names: NameTable,
    /// Attribute names, including any extra aliases.
    pub attributes: AttributeTable,
    /// Turns keys into colors for `pick_for`.
    pub picker: Picker,
}

impl Default for ColorConfig {
    fn default() -> ColorConfig {
        ColorConfig {
            storage: Storage::default(),
            equality: rgb_equivalence,
            names: NameTable::default(),
            attributes: AttributeTable::standard(),
            picker: rgb_color_picker,
        }
    }
}

impl fmt::Debug for ColorConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ColorConfig")
            .field("storage", &self.storage)
            .field("names", &self.names)
            .field("attributes", &self.attributes)
            .finish()
    }
}

lazy_static! {
    static ref DEFAULT_CONFIG: Arc<ColorConfig> = Arc::new(ColorConfig::default());
}

/// Builds colors that share one configuration.
///
/// # Example
/// ```
/// # use colorist::color::{ColorFactory, Storage};
/// # use colorist::names::NameTable;
/// # use colorist::attribute::AttributeValue;
/// let xkcd = ColorFactory::new().storage(Storage::Rgb).names(NameTable::Xkcd);
/// assert_eq!(xkcd.color("#acc2d9").unwrap().web(), "cloudy_blue");
/// let blue = ColorFactory::new()
///     .color_with("blue", &[("luminance", AttributeValue::from(0.75))])
///     .unwrap();
/// assert_eq!(blue.hex(), "#7f7fff");
/// ```
#[derive(Debug, Clone)]
pub struct ColorFactory {
    config: Arc<ColorConfig>,
}

impl Default for ColorFactory {
    fn default() -> ColorFactory {
        ColorFactory::new()
    }
}

impl ColorFactory {
    /// A factory with the default configuration.
    pub fn new() -> ColorFactory {
        ColorFactory {
            config: DEFAULT_CONFIG.clone(),
        }
    }
    /// Sets the stored form.
    pub fn storage(mut self, storage: Storage) -> ColorFactory {
        Arc::make_mut(&mut self.config).storage = storage;
        self
    }
    /// Sets the equality predicate.
    pub fn equality(mut self, equality: Equality) -> ColorFactory {
        Arc::make_mut(&mut self.config).equality = equality;
        self
    }
    /// Sets the name table used by the web form.
    pub fn names(mut self, names: NameTable) -> ColorFactory {
        Arc::make_mut(&mut self.config).names = names;
        self
    }
    /// Sets the picker.
    pub fn picker(mut self, picker: Picker) -> ColorFactory {
        Arc::make_mut(&mut self.config).picker = picker;
        self
    }
    /// Registers an extra attribute name for a component.
    pub fn alias(mut self, name: &str, component: Component) -> ColorFactory {
        let config = Arc::make_mut(&mut self.config);
        config.attributes = config.attributes.clone().alias(name, component);
        self
    }
    /// The configuration colors from this factory will share.
    pub fn config(&self) -> &ColorConfig {
        &self.config
    }

    /// Builds a color from a value in any representation. Strings are read as web strings.
    pub fn color<T: Into<ColorValue>>(&self, value: T) -> Result<Color, ColorError> {
        Color::build(&value.into(), self.config.clone())
    }

    /// Builds a color, then applies each `(attribute, value)` write in order.
    pub fn color_with<T: Into<ColorValue>>(
        &self,
        value: T,
        overrides: &[(&str, AttributeValue)],
    ) -> Result<Color, ColorError> {
        let mut color = self.color(value)?;
        for &(name, ref v) in overrides {
            color.set(name, v.clone())?;
        }
        Ok(color)
    }

    /// Picks a color for a key with this factory's picker. Keys of different types that print the
    /// same still get different colors, but borrowing a key doesn't change its color.
    pub fn pick_for<T: PickKey + ?Sized>(&self, key: &T) -> Result<Color, ColorError> {
        let rgb = (self.config.picker)(pick_key(key).as_bytes());
        self.color(rgb)
    }

    /// Black, with this factory's configuration.
    pub fn default_color(&self) -> Color {
        Color::from_rgb_unchecked(Rgb::new(0.0, 0.0, 0.0), self.config.clone())
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum Canonical {
    Hsl(Hsl),
    Rgb(Rgb),
}

fn canonicalize(value: &ColorValue, config: &ColorConfig) -> Result<Canonical, ColorError> {
    Ok(match config.storage {
        Storage::Hsl => Canonical::Hsl(value.to_hsl(config.names)?),
        Storage::Rgb => Canonical::Rgb(value.to_rgb(config.names)?),
    })
}

fn expected_kind(attribute: Attribute) -> &'static str {
    match attribute {
        Attribute::Hsl => "an HSL triple",
        Attribute::Rgb => "an RGB triple",
        Attribute::Hex | Attribute::HexLong | Attribute::Web | Attribute::Xkcd => "text",
        Attribute::Component(_) => "a number",
    }
}

/// A color, readable and writable as HSL, RGB, hex, or a web name.
///
/// Reads are infallible: the stored value was validated when it was written, so every view can be
/// computed. Writes validate first and leave the color untouched if they fail.
///
/// # Example
/// ```
/// # use colorist::color::Color;
/// let mut c = Color::new("blue").unwrap();
/// assert_eq!(c.hex_l(), "#0000ff");
/// c.set_green(1.0).unwrap();
/// assert_eq!(c.web(), "cyan");
/// c.set_luminance(0.0).unwrap();
/// assert_eq!(c.web(), "black");
/// assert!(c.set_saturation(1.5).is_err());
/// assert_eq!(format!("{:?}", c), "<Color black>");
/// ```
#[derive(Clone)]
pub struct Color {
    value: Canonical,
    config: Arc<ColorConfig>,
}

impl Color {
    /// Builds a color with the default configuration from a value in any representation.
    ///
    /// # Errors
    /// Whatever the validator of the given representation reports.
    pub fn new<T: Into<ColorValue>>(value: T) -> Result<Color, ColorError> {
        Color::build(&value.into(), DEFAULT_CONFIG.clone())
    }

    /// Picks a color for a key with the default picker.
    /// # Example
    /// ```
    /// # use colorist::color::Color;
    /// let a = Color::pick_for("Albert").unwrap();
    /// assert_eq!(a, Color::pick_for("Albert").unwrap());
    /// assert!(a != Color::pick_for("Bertrand").unwrap());
    /// ```
    pub fn pick_for<T: PickKey + ?Sized>(key: &T) -> Result<Color, ColorError> {
        ColorFactory::new().pick_for(key)
    }

    fn build(value: &ColorValue, config: Arc<ColorConfig>) -> Result<Color, ColorError> {
        let value = canonicalize(value, &config)?;
        Ok(Color { value, config })
    }

    fn from_hsl_unchecked(hsl: Hsl, config: Arc<ColorConfig>) -> Color {
        let value = match config.storage {
            Storage::Hsl => Canonical::Hsl(hsl),
            Storage::Rgb => Canonical::Rgb(convert::hsl_to_rgb_unchecked(hsl)),
        };
        Color { value, config }
    }

    fn from_rgb_unchecked(rgb: Rgb, config: Arc<ColorConfig>) -> Color {
        let value = match config.storage {
            Storage::Hsl => Canonical::Hsl(convert::rgb_to_hsl_unchecked(rgb)),
            Storage::Rgb => Canonical::Rgb(rgb),
        };
        Color { value, config }
    }

    /// The configuration this color was built with.
    pub fn config(&self) -> &ColorConfig {
        &self.config
    }

    /// HSL.
    pub fn hsl(&self) -> Hsl {
        match self.value {
            Canonical::Hsl(hsl) => hsl,
            Canonical::Rgb(rgb) => convert::rgb_to_hsl_unchecked(rgb),
        }
    }
    /// RGB.
    pub fn rgb(&self) -> Rgb {
        match self.value {
            Canonical::Hsl(hsl) => convert::hsl_to_rgb_unchecked(hsl),
            Canonical::Rgb(rgb) => rgb,
        }
    }
    fn bytes(&self) -> [u8; 3] {
        convert::rgb_to_bytes(self.rgb())
    }
    /// Hex, 3 digits when that loses nothing.
    pub fn hex(&self) -> String {
        convert::bytes_to_hex(self.bytes(), false)
    }
    /// Hex, always 6 digits.
    pub fn hex_l(&self) -> String {
        convert::bytes_to_hex(self.bytes(), true)
    }
    /// The name of this exact color in the configured name table, or hex if it has none.
    pub fn web(&self) -> String {
        self.config.names.bytes_to_web(self.bytes())
    }
    /// Like [`web`](#method.web), but always from the XKCD table.
    pub fn xkcd(&self) -> String {
        NameTable::Xkcd.bytes_to_web(self.bytes())
    }
    /// A single component.
    pub fn component(&self, component: Component) -> f64 {
        match component {
            Component::Hue => self.hsl().h,
            Component::Saturation => self.hsl().s,
            Component::Luminance => self.hsl().l,
            Component::Red => self.rgb().r,
            Component::Green => self.rgb().g,
            Component::Blue => self.rgb().b,
        }
    }
    /// HSL hue.
    pub fn hue(&self) -> f64 {
        self.component(Component::Hue)
    }
    /// HSL saturation.
    pub fn saturation(&self) -> f64 {
        self.component(Component::Saturation)
    }
    /// HSL lightness.
    pub fn luminance(&self) -> f64 {
        self.component(Component::Luminance)
    }
    /// RGB red.
    pub fn red(&self) -> f64 {
        self.component(Component::Red)
    }
    /// RGB green.
    pub fn green(&self) -> f64 {
        self.component(Component::Green)
    }
    /// RGB blue.
    pub fn blue(&self) -> f64 {
        self.component(Component::Blue)
    }

    // Every write ends up here. The color only changes if the new value is valid.
    fn assign(
        &mut self,
        attribute: &str,
        value: Result<ColorValue, ColorError>,
    ) -> Result<(), ColorError> {
        match value.and_then(|v| canonicalize(&v, &self.config)) {
            Ok(canonical) => {
                trace!("{} := {:?}", attribute, canonical);
                self.value = canonical;
                Ok(())
            }
            Err(err) => {
                debug!("rejected write to {}: {}", attribute, err);
                Err(err)
            }
        }
    }

    /// Replaces the value with one in any representation.
    pub fn set_value<T: Into<ColorValue>>(&mut self, value: T) -> Result<(), ColorError> {
        self.assign("value", Ok(value.into()))
    }
    /// Replaces the value with an HSL triple.
    pub fn set_hsl(&mut self, hsl: Hsl) -> Result<(), ColorError> {
        self.assign("hsl", Ok(ColorValue::Hsl(hsl)))
    }
    /// Replaces the value with an RGB triple.
    pub fn set_rgb(&mut self, rgb: Rgb) -> Result<(), ColorError> {
        self.assign("rgb", Ok(ColorValue::Rgb(rgb)))
    }
    /// Replaces the value with a 3- or 6-digit hex string.
    pub fn set_hex(&mut self, hex: &str) -> Result<(), ColorError> {
        self.assign("hex", validate::check_hex(hex).map(ColorValue::Hex))
    }
    /// Replaces the value with a 6-digit hex string. 3 digits are rejected.
    pub fn set_hex_l(&mut self, hex: &str) -> Result<(), ColorError> {
        self.assign("hex_l", validate::check_long_hex(hex).map(ColorValue::Hex))
    }
    /// Replaces the value with a name from the configured table, or hex.
    pub fn set_web(&mut self, web: &str) -> Result<(), ColorError> {
        self.assign("web", Ok(ColorValue::Web(web.to_string())))
    }
    /// Replaces the value with an XKCD name, or hex.
    pub fn set_xkcd(&mut self, xkcd: &str) -> Result<(), ColorError> {
        let rgb = NameTable::Xkcd.web_to_bytes(xkcd).map(Rgb::from_bytes);
        self.assign("xkcd", rgb.map(ColorValue::Rgb))
    }

    /// Changes one component, keeping the rest of its triple as it currently reads.
    pub fn set_component(&mut self, component: Component, value: f64) -> Result<(), ColorError> {
        let name = component.qualified_name();
        let rebuilt = match component {
            Component::Hue | Component::Saturation | Component::Luminance => {
                let mut hsl = self.hsl();
                match component {
                    Component::Hue => hsl.h = value,
                    Component::Saturation => hsl.s = value,
                    _ => hsl.l = value,
                }
                ColorValue::Hsl(hsl)
            }
            Component::Red | Component::Green | Component::Blue => {
                let mut rgb = self.rgb();
                match component {
                    Component::Red => rgb.r = value,
                    Component::Green => rgb.g = value,
                    _ => rgb.b = value,
                }
                ColorValue::Rgb(rgb)
            }
        };
        self.assign(&name, Ok(rebuilt))
    }
    /// Sets the HSL hue. Any finite value is accepted.
    pub fn set_hue(&mut self, hue: f64) -> Result<(), ColorError> {
        self.set_component(Component::Hue, hue)
    }
    /// Sets the HSL saturation.
    pub fn set_saturation(&mut self, saturation: f64) -> Result<(), ColorError> {
        self.set_component(Component::Saturation, saturation)
    }
    /// Sets the HSL lightness.
    pub fn set_luminance(&mut self, luminance: f64) -> Result<(), ColorError> {
        self.set_component(Component::Luminance, luminance)
    }
    /// Sets the RGB red channel.
    pub fn set_red(&mut self, red: f64) -> Result<(), ColorError> {
        self.set_component(Component::Red, red)
    }
    /// Sets the RGB green channel.
    pub fn set_green(&mut self, green: f64) -> Result<(), ColorError> {
        self.set_component(Component::Green, green)
    }
    /// Sets the RGB blue channel.
    pub fn set_blue(&mut self, blue: f64) -> Result<(), ColorError> {
        self.set_component(Component::Blue, blue)
    }

    /// Reads an attribute by name. See the [`attribute`](../attribute/index.html) module for the
    /// names that resolve.
    ///
    /// # Example
    /// ```
    /// # use colorist::color::Color;
    /// # use colorist::attribute::AttributeValue;
    /// let c = Color::new("red").unwrap();
    /// assert_eq!(c.get("hex_l").unwrap(), AttributeValue::Text("#ff0000".to_string()));
    /// assert_eq!(c.get("rgb.r").unwrap(), AttributeValue::Number(1.0));
    /// assert!(c.get("lightness").is_err());
    /// ```
    pub fn get(&self, name: &str) -> Result<AttributeValue, ColorError> {
        Ok(match self.config.attributes.resolve(name)? {
            Attribute::Hsl => AttributeValue::Hsl(self.hsl()),
            Attribute::Rgb => AttributeValue::Rgb(self.rgb()),
            Attribute::Hex => AttributeValue::Text(self.hex()),
            Attribute::HexLong => AttributeValue::Text(self.hex_l()),
            Attribute::Web => AttributeValue::Text(self.web()),
            Attribute::Xkcd => AttributeValue::Text(self.xkcd()),
            Attribute::Component(c) => AttributeValue::Number(self.component(c)),
        })
    }

    /// Writes an attribute by name.
    ///
    /// # Errors
    /// `ColorError::AttributeNotFound` or `ColorError::AmbiguousAttribute` if the name doesn't
    /// resolve to one attribute, `ColorError::WrongValueKind` if the value doesn't fit it, and
    /// otherwise whatever validation reports.
    pub fn set<T: Into<AttributeValue>>(&mut self, name: &str, value: T) -> Result<(), ColorError> {
        let attribute = self.config.attributes.resolve(name)?;
        match (attribute, value.into()) {
            (Attribute::Hsl, AttributeValue::Hsl(hsl)) => self.set_hsl(hsl),
            (Attribute::Rgb, AttributeValue::Rgb(rgb)) => self.set_rgb(rgb),
            (Attribute::Hex, AttributeValue::Text(ref hex)) => self.set_hex(hex),
            (Attribute::HexLong, AttributeValue::Text(ref hex)) => self.set_hex_l(hex),
            (Attribute::Web, AttributeValue::Text(ref web)) => self.set_web(web),
            (Attribute::Xkcd, AttributeValue::Text(ref xkcd)) => self.set_xkcd(xkcd),
            (Attribute::Component(c), AttributeValue::Number(v)) => self.set_component(c, v),
            (attribute, _) => Err(ColorError::WrongValueKind {
                attribute: name.to_string(),
                expected: expected_kind(attribute),
            }),
        }
    }

    /// Writes an attribute by name and hands the color back, for chaining after construction.
    /// # Example
    /// ```
    /// # use colorist::color::Color;
    /// let c = Color::new("blue").unwrap().with("luminance", 0.75).unwrap();
    /// assert_eq!(c.hex(), "#7f7fff");
    /// ```
    pub fn with<T: Into<AttributeValue>>(
        mut self,
        name: &str,
        value: T,
    ) -> Result<Color, ColorError> {
        self.set(name, value)?;
        Ok(self)
    }

    /// A lazy sequence of `steps` colors, going in a straight line through HSL from this color to
    /// `value`, both ends included. One step gives just this color.
    ///
    /// # Errors
    /// `ColorError::InvalidSteps` for zero steps, or whatever validating `value` reports.
    ///
    /// # Example
    /// ```
    /// # use colorist::color::Color;
    /// let red = Color::new("red").unwrap();
    /// let webs: Vec<String> = red.range_to("blue", 3).unwrap().map(|c| c.web()).collect();
    /// assert_eq!(webs, vec!["red", "lime", "blue"]);
    /// ```
    pub fn range_to<T: Into<ColorValue>>(
        &self,
        value: T,
        steps: usize,
    ) -> Result<ColorRange, ColorError> {
        if steps == 0 {
            return Err(ColorError::InvalidSteps(steps));
        }
        let end = value.into().to_hsl(self.config.names)?;
        Ok(ColorRange {
            begin: Coord::from(self.hsl()),
            end: Coord::from(end),
            segments: steps - 1,
            next: 0,
            config: self.config.clone(),
        })
    }
}

/// The colors of [`Color::range_to`](struct.Color.html#method.range_to), computed one at a time.
#[derive(Debug, Clone)]
pub struct ColorRange {
    begin: Coord,
    end: Coord,
    segments: usize,
    next: usize,
    config: Arc<ColorConfig>,
}

impl Iterator for ColorRange {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        if self.next > self.segments {
            return None;
        }
        let point = self.begin.step_towards(&self.end, self.next, self.segments);
        self.next += 1;
        Some(Color::from_hsl_unchecked(Hsl::from(point), self.config.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.segments + 1 - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for ColorRange {}

impl Default for Color {
    fn default() -> Color {
        ColorFactory::new().default_color()
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Color, ColorError> {
        Color::new(s)
    }
}

impl<'a> From<&'a Color> for ColorValue {
    fn from(color: &'a Color) -> ColorValue {
        match color.value {
            Canonical::Hsl(hsl) => ColorValue::Hsl(hsl),
            Canonical::Rgb(rgb) => ColorValue::Rgb(rgb),
        }
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Color) -> bool {
        (self.config.equality)(self, other)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.web())
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<Color {}>", self.web())
    }
}

impl fmt::LowerHex for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.hex_l())
    }
}
