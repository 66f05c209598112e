//! Color resolution for generated clips.
//!
//! A clip color is given either as one of a fixed set of names or as three
//! integers separated by commas and/or whitespace (`"255,0,0"`, `"255 0 0"`).
//! The inverted color is used for the frame-number overlay so the text stays
//! readable on any background.

use crate::error::{CoreError, CoreResult};
use std::fmt;
use std::str::FromStr;

/// Named colors accepted by [`resolve_color`], matched case-insensitively.
pub const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("red", Rgb::new(255, 0, 0)),
    ("green", Rgb::new(0, 255, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("white", Rgb::new(255, 255, 255)),
    ("black", Rgb::new(0, 0, 0)),
    ("orange", Rgb::new(255, 165, 0)),
    ("purple", Rgb::new(128, 0, 128)),
    ("pink", Rgb::new(255, 192, 203)),
    ("brown", Rgb::new(165, 42, 42)),
    ("gray", Rgb::new(128, 128, 128)),
    ("grey", Rgb::new(128, 128, 128)),
];

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise complement, used for overlay text contrast.
    #[must_use]
    pub const fn inverted(self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b)
    }

    /// Lowercase `#rrggbb` form understood by ffmpeg filters.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        resolve_color(s)
    }
}

/// Looks up a named color, ignoring case and surrounding whitespace.
#[must_use]
pub fn named_color(name: &str) -> Option<Rgb> {
    let name = name.trim();
    NAMED_COLORS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|&(_, rgb)| rgb)
}

/// Resolves a color name or an `r,g,b` / `r g b` string.
///
/// # Errors
///
/// Returns `CoreError::InvalidColorFormat` when the input is not a known name,
/// does not contain exactly three integers, or has a channel outside 0..=255.
pub fn resolve_color(input: &str) -> CoreResult<Rgb> {
    if let Some(rgb) = named_color(input) {
        return Ok(rgb);
    }

    let invalid = || CoreError::InvalidColorFormat(input.to_string());

    let values = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<i64>().map_err(|_| invalid()))
        .collect::<CoreResult<Vec<i64>>>()?;

    let [r, g, b] = values.as_slice() else {
        return Err(invalid());
    };

    let channel = |value: i64| u8::try_from(value).map_err(|_| invalid());
    Ok(Rgb::new(channel(*r)?, channel(*g)?, channel(*b)?))
}
