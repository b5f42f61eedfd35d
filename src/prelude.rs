//! This module simply brings the most common Colorist functionality under a single namespace, to
//! prevent excessive imports. It includes [`Color`] and its factory, the two numeric color types,
//! the closed set of formats, the name tables, and the error type. The conversion kernel in
//! [`convert`] is not included: its function names are generic enough to collide with other crates.
//!
//! [`Color`]: ../color/struct.Color.html
//! [`convert`]: ../convert/index.html

pub use attribute::{AttributeValue, Component};
pub use color::{Color, ColorFactory, Storage};
pub use colors::{Hsl, Rgb};
pub use error::ColorError;
pub use format::{ColorValue, Format};
pub use names::NameTable;
