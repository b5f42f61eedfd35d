//! Deterministic colors for arbitrary keys: the same key always picks the same color, and different
//! keys spread roughly evenly over the RGB cube. Handy for coloring users, tags, or series without
//! keeping a table.

use std::fmt::Display;

use sha2::{Digest, Sha384};

use colors::Rgb;

/// A function from key bytes to a color. Any such function can replace the default.
pub type Picker = fn(&[u8]) -> Rgb;

/// The default picker. Hashes the key with SHA-384 and splits the 48-byte digest into three
/// 16-byte chunks, one per channel, each read as a big-endian integer and scaled by the largest
/// value a chunk can hold.
///
/// # Example
/// ```
/// # use colorist::picker::rgb_color_picker;
/// let a = rgb_color_picker(b"Labrador");
/// assert_eq!(a, rgb_color_picker(b"Labrador"));
/// assert!(a != rgb_color_picker(b"Retriever"));
/// ```
pub fn rgb_color_picker(key: &[u8]) -> Rgb {
    let digest = Sha384::digest(key);
    let mut channels = [0.0; 3];
    for (channel, chunk) in channels.iter_mut().zip(digest.as_slice().chunks(16)) {
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(chunk);
        *channel = u128::from_be_bytes(bytes) as f64 / u128::max_value() as f64;
    }
    Rgb::new(channels[0], channels[1], channels[2])
}

/// A key that can be picked for. Each key carries a tag naming its logical type, which goes into
/// the hash along with the key's text, so keys that print the same but mean different things get
/// different colors. Tags are fixed strings: they don't depend on how the key is borrowed or on
/// the compiler version.
pub trait PickKey: Display {
    /// The tag for this kind of key.
    fn tag(&self) -> &'static str;
}

impl PickKey for str {
    fn tag(&self) -> &'static str {
        "str"
    }
}

impl PickKey for String {
    fn tag(&self) -> &'static str {
        "str"
    }
}

impl<'a, T: PickKey + ?Sized> PickKey for &'a T {
    fn tag(&self) -> &'static str {
        (**self).tag()
    }
}

macro_rules! pick_key_tags {
    ($($t:ty => $tag:expr),* $(,)*) => {
        $(
            impl PickKey for $t {
                fn tag(&self) -> &'static str {
                    $tag
                }
            }
        )*
    };
}

pick_key_tags! {
    char => "char",
    bool => "bool",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    f32 => "f32",
    f64 => "f64",
}

/// Builds the text a picker sees for a key: its tag, a colon, and then its text form.
///
/// # Example
/// ```
/// # use colorist::picker::pick_key;
/// assert_eq!(pick_key("Albert"), "str:Albert");
/// assert_eq!(pick_key(&"Albert".to_string()), "str:Albert");
/// assert_eq!(pick_key(&1u8), "u8:1");
/// ```
pub fn pick_key<T: PickKey + ?Sized>(key: &T) -> String {
    format!("{}:{}", key.tag(), key)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use validate::check_rgb;

    #[test]
    fn test_deterministic_and_valid() {
        for key in &["", "a", "Labrador", "a much longer key with spaces in it"] {
            let rgb = rgb_color_picker(key.as_bytes());
            assert_eq!(rgb, rgb_color_picker(key.as_bytes()));
            assert!(check_rgb(rgb).is_ok());
        }
    }

    #[test]
    fn test_spreads_keys() {
        let a = rgb_color_picker(b"key-1");
        let b = rgb_color_picker(b"key-2");
        assert!(a != b);
        assert!((a.r - b.r).abs() > 1e-6 || (a.g - b.g).abs() > 1e-6);
    }

    #[test]
    fn test_type_tagged_keys() {
        assert!(pick_key(&1u8) != pick_key("1"));
        assert!(pick_key(&1u8) != pick_key(&1i32));
        assert!(
            rgb_color_picker(pick_key(&1u8).as_bytes())
                != rgb_color_picker(pick_key("1").as_bytes())
        );
    }

    #[test]
    fn test_key_tags_ignore_borrowing() {
        let name = "Albert";
        let owned = name.to_string();
        assert_eq!(pick_key(name), "str:Albert");
        assert_eq!(pick_key(&name), "str:Albert");
        assert_eq!(pick_key(&owned), "str:Albert");
        assert_eq!(pick_key(&&owned), "str:Albert");
        assert_eq!(pick_key(&&7i32), "i32:7");
        assert_eq!(pick_key(&'x'), "char:x");
    }
}
