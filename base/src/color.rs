//! Colors, as used by text styles and guide frames.
//!
//! Colors parse from the usual plotting notations:
//! HTML hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), single-letter and CSS names,
//! grayscale levels in a string (`"0.5"`) and `none` for a fully transparent color.
use std::str::FromStr;
use std::{error, fmt};

/// An 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorU8 {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

/// Opaque black
pub const BLACK: ColorU8 = ColorU8::from_rgb(0, 0, 0);
/// Opaque white
pub const WHITE: ColorU8 = ColorU8::from_rgb(255, 255, 255);
/// Fully transparent black
pub const TRANSPARENT: ColorU8 = ColorU8::from_rgba(0, 0, 0, 0);

impl ColorU8 {
    /// Build an opaque color from its components
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        ColorU8 { r, g, b, a: 255 }
    }

    /// Build a color from its components
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        ColorU8 { r, g, b, a }
    }

    /// The RGBA components
    pub const fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The alpha component
    pub const fn alpha(&self) -> u8 {
        self.a
    }

    /// The opacity, or None if the color is opaque
    pub const fn opacity(&self) -> Option<f32> {
        if self.a == 255 {
            None
        } else {
            Some(self.a as f32 / 255.0)
        }
    }

    /// Multiply the alpha component by `opacity`, clamped to 0..=1
    pub fn with_opacity(self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        ColorU8 {
            a: (self.a as f32 * opacity).round() as u8,
            ..self
        }
    }

    /// HTML hex representation, without alpha
    pub fn html(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for ColorU8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            f.write_str(&self.html())
        } else {
            write!(f, "{}{:02x}", self.html(), self.a)
        }
    }
}

/// Color parsing error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Empty input
    Empty,
    /// A `#` color with a wrong length or a non hex digit
    InvalidHex(String),
    /// A grayscale level outside of 0..=1
    InvalidGray(String),
    /// Not a known color name
    UnknownName(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty color"),
            ParseError::InvalidHex(s) => write!(f, "invalid hex color: {}", s),
            ParseError::InvalidGray(s) => write!(f, "invalid grayscale level: {}", s),
            ParseError::UnknownName(s) => write!(f, "unknown color name: {}", s),
        }
    }
}

impl error::Error for ParseError {}

fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn parse_hex(raw: &str) -> Result<ColorU8, ParseError> {
    let err = || ParseError::InvalidHex(raw.to_string());
    let digits = raw[1..]
        .bytes()
        .map(hex_digit)
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(err)?;
    let comps: Vec<u8> = match digits.len() {
        3 | 4 => digits.iter().map(|d| d << 4 | d).collect(),
        6 | 8 => digits.chunks(2).map(|c| c[0] << 4 | c[1]).collect(),
        _ => return Err(err()),
    };
    let a = comps.get(3).copied().unwrap_or(255);
    Ok(ColorU8::from_rgba(comps[0], comps[1], comps[2], a))
}

// Single letter shorthands and the basic CSS names
const NAMED: &[(&str, ColorU8)] = &[
    ("b", ColorU8::from_rgb(0, 0, 255)),
    ("g", ColorU8::from_rgb(0, 128, 0)),
    ("r", ColorU8::from_rgb(255, 0, 0)),
    ("c", ColorU8::from_rgb(0, 191, 191)),
    ("m", ColorU8::from_rgb(191, 0, 191)),
    ("y", ColorU8::from_rgb(191, 191, 0)),
    ("k", BLACK),
    ("w", WHITE),
    ("black", BLACK),
    ("white", WHITE),
    ("red", ColorU8::from_rgb(255, 0, 0)),
    ("green", ColorU8::from_rgb(0, 128, 0)),
    ("blue", ColorU8::from_rgb(0, 0, 255)),
    ("yellow", ColorU8::from_rgb(255, 255, 0)),
    ("cyan", ColorU8::from_rgb(0, 255, 255)),
    ("magenta", ColorU8::from_rgb(255, 0, 255)),
    ("gray", ColorU8::from_rgb(128, 128, 128)),
    ("grey", ColorU8::from_rgb(128, 128, 128)),
    ("silver", ColorU8::from_rgb(192, 192, 192)),
    ("maroon", ColorU8::from_rgb(128, 0, 0)),
    ("olive", ColorU8::from_rgb(128, 128, 0)),
    ("lime", ColorU8::from_rgb(0, 255, 0)),
    ("teal", ColorU8::from_rgb(0, 128, 128)),
    ("navy", ColorU8::from_rgb(0, 0, 128)),
    ("purple", ColorU8::from_rgb(128, 0, 128)),
    ("orange", ColorU8::from_rgb(255, 165, 0)),
];

impl FromStr for ColorU8 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(ParseError::Empty);
        }
        if raw.starts_with('#') {
            return parse_hex(raw);
        }
        if let Ok(level) = raw.parse::<f32>() {
            if !(0.0..=1.0).contains(&level) {
                return Err(ParseError::InvalidGray(raw.to_string()));
            }
            let v = (level * 255.0).round() as u8;
            return Ok(ColorU8::from_rgb(v, v, v));
        }
        let lower = raw.to_ascii_lowercase();
        if lower == "none" {
            return Ok(TRANSPARENT);
        }
        NAMED
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, c)| *c)
            .ok_or(ParseError::UnknownName(raw.to_string()))
    }
}
