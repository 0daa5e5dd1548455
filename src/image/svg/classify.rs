//! Fill color classification.
//!
//! Classification looks only at the leading hex digits of `fill="#RRGGBB"`.
//! There is no color-space conversion, and the patterns are case-sensitive:
//! lowercase digits never match.

use std::sync::LazyLock;

use regex::Regex;

static RE_GREEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##"fill="#0[67][A-F0-9]{4}""##).unwrap());

static RE_BLUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##"fill="#0[8-9A-F][A-F0-9]{4}""##).unwrap());

// C-F leading digit: near-white
static RE_LIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##"fill="#[C-F][A-F0-9]{5}""##).unwrap());

/// Coarse hue bucket of a fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorClass {
    /// `#06xxxx` / `#07xxxx`
    Green,
    /// `#08xxxx` through `#0Fxxxx`
    Blue,
}

/// Classify the first candidate fill found anywhere in `line`.
///
/// Green wins when a line carries both kinds.
pub fn classify_fill(line: &str) -> Option<ColorClass> {
    if RE_GREEN.is_match(line) {
        Some(ColorClass::Green)
    } else if RE_BLUE.is_match(line) {
        Some(ColorClass::Blue)
    } else {
        None
    }
}

/// Whether `line` carries a light fill anywhere.
pub fn is_light(line: &str) -> bool {
    RE_LIGHT.is_match(line)
}
