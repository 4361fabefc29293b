//! Color handling for floor plan rendering
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Colors are parsed from CSS strings (as they appear in
//! configuration files) and written to SVG as plain hex values so that every
//! SVG consumer, including the PNG rasterizer, understands them.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, Srgb};
use serde::Deserialize;

/// A parsed CSS color.
///
/// Deserializes from any CSS color string, so configuration structs can hold
/// `Color` fields directly.
#[derive(Clone, Copy, PartialEq, Debug, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_hex().hash(state);
        self.alpha().to_bits().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a CSS color string such as `"#ff0000"`,
    /// `"rgb(255, 0, 0)"` or `"lightblue"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use floorplan_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("lightblue").unwrap();
    /// assert_eq!(red.to_hex(), "#ff0000");
    /// assert_ne!(red, blue);
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the color as a `#rrggbb` string, ignoring alpha.
    pub fn to_hex(self) -> String {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    }

    /// Returns the alpha component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<Color> for svg::node::Value {
    fn from(color: Color) -> Self {
        Self::from(color.to_hex())
    }
}
