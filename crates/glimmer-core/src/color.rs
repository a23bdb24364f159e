use std::fmt;

use crate::{Error, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    /// Parses `#rrggbb` or `#rrggbbaa` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let s = hex.trim_start_matches('#');
        if !matches!(s.len(), 6 | 8) || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(hex.to_string()));
        }
        let byte = |i: usize| {
            u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| Error::InvalidColor(hex.to_string()))
        };
        let a = if s.len() == 8 { byte(6)? } else { 255 };
        Ok(Color(byte(0)?, byte(2)?, byte(4)?, a))
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)?;
        if self.3 != 255 {
            write!(f, "{:02x}", self.3)?;
        }
        Ok(())
    }
}

/// Ordered, non-empty, fixed set of selectable colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette(Vec<Color>);

pub const DEFAULT_PALETTE_HEX: [&str; 6] = [
    "#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#feca57", "#ff9ff3",
];

impl Palette {
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(Self(colors))
    }

    pub fn from_hex_list<S: AsRef<str>>(list: &[S]) -> Result<Self> {
        let colors = list
            .iter()
            .map(|s| Color::from_hex(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(colors)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    // never empty; kept for clippy's len_without_is_empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    pub fn contains(&self, c: Color) -> bool {
        self.0.contains(&c)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(
            DEFAULT_PALETTE_HEX
                .iter()
                .filter_map(|h| Color::from_hex(h).ok())
                .collect(),
        )
    }
}
