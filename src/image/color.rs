//! Canvas background color parsing.

use std::fmt;
use std::str::FromStr;

use image::Rgba;
use serde::{Deserialize, Deserializer};

/// RGBA fill used for the padded canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background(pub Rgba<u8>);

impl Background {
    /// Fully transparent black, `(0, 0, 0, 0)`.
    pub const TRANSPARENT: Self = Self(Rgba([0, 0, 0, 0]));

    /// Parse `#RRGGBB` (opaque) or `#RRGGBBAA`. The leading `#` is optional.
    pub fn parse(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let r = channel(0)?;
        let g = channel(2)?;
        let b = channel(4)?;
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Some(Self(Rgba([r, g, b, a])))
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}")
    }
}

impl FromStr for Background {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
            .ok_or_else(|| format!("invalid color `{s}`, expected #RRGGBB or #RRGGBBAA"))
    }
}

impl<'de> Deserialize<'de> for Background {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb_is_opaque() {
        let bg = Background::parse("#88c0d0").unwrap();
        assert_eq!(bg.0, Rgba([0x88, 0xc0, 0xd0, 255]));
    }

    #[test]
    fn test_parse_rgba() {
        let bg = Background::parse("FFFFFF80").unwrap();
        assert_eq!(bg.0, Rgba([255, 255, 255, 0x80]));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Background::parse("#fff").is_none());
        assert!(Background::parse("zzzzzz").is_none());
        assert!(Background::parse("#1234567").is_none());
        assert!(Background::parse("#ééé").is_none());
    }

    #[test]
    fn test_default_is_transparent() {
        assert_eq!(Background::default().0[3], 0);
        assert_eq!(Background::default().to_string(), "#00000000");
    }

    #[test]
    fn test_from_str_error_message() {
        let err = "nope".parse::<Background>().unwrap_err();
        assert!(err.contains("nope"));
    }
}
