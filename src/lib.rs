//! Colorist keeps the everyday web-facing color representations in agreement with each other. A
//! single [`Color`] stores one canonical value and lets you read and write it as HSL, RGB, a hex
//! string, or a "web" string (a CSS name when one exists, hex otherwise), re-deriving every other
//! view on demand. Underneath sits a small kernel of pure conversion functions that can be used on
//! their own.
//!
//! ```
//! # use colorist::prelude::*;
//! let mut c: Color = "blue".parse().unwrap();
//! c.set_hue(0.0).unwrap();
//! assert_eq!(c.web(), "red");
//! c.set_saturation(0.0).unwrap();
//! assert_eq!(c.hex(), "#7f7f7f");
//! ```
//!
//! [`Color`]: color/struct.Color.html

#![doc(html_root_url = "https://docs.rs/colorist/0.1.0")]
#![deny(missing_docs)]
#![allow(clippy::unreadable_literal)]

extern crate csv;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate maplit;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate sha2;

#[cfg(test)]
#[macro_use]
extern crate float_cmp;

pub mod attribute;
pub mod color;
pub mod colors;
mod consts;
pub mod convert;
mod coord;
pub mod error;
pub mod format;
pub mod names;
pub mod picker;
pub mod prelude;
pub mod validate;
mod xkcd;

pub use consts::FLOAT_ERROR;
