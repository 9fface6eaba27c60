use crate::pokemon::Type;

use std::fmt;
use std::ops::Range;

/// The color of every type, as shown in the games' Pokédex.
const TYPES: [(&str, &str); 18] = [
    ("normal", "#A8A878"),
    ("fire", "#F08030"),
    ("water", "#6890F0"),
    ("electric", "#F8D030"),
    ("grass", "#78C850"),
    ("ice", "#98D8D8"),
    ("fighting", "#C03028"),
    ("poison", "#A040A0"),
    ("ground", "#E0C068"),
    ("flying", "#A890F0"),
    ("psychic", "#F85888"),
    ("bug", "#A8B820"),
    ("rock", "#B8A038"),
    ("ghost", "#705898"),
    ("dragon", "#7038F8"),
    ("dark", "#705848"),
    ("steel", "#B8B8B0"),
    ("fairy", "#EE99AC"),
];

/// The opacity of the backdrop behind stat bars.
pub const BACKDROP_ALPHA: f32 = 0.5;

/// Returns the color of the given type, if known.
pub fn of(type_: &str) -> Option<Color> {
    TYPES
        .iter()
        .find(|(name, _)| *name == type_)
        .and_then(|(_, hex)| Color::parse(hex))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#RRGGBB` hex triplet.
    pub fn parse(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;

        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let channel = |range: Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

        Some(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn with_alpha(self, alpha: f32) -> Translucent {
        Translucent { color: self, alpha }
    }

    pub fn backdrop(self) -> Translucent {
        self.with_alpha(BACKDROP_ALPHA)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translucent {
    pub color: Color,
    pub alpha: f32,
}

/// The theme color of the entry currently on display.
///
/// It follows the primary type of each entry applied to it. Entries whose
/// primary type has no known color leave it as it was.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accent(Option<Color>);

impl Accent {
    pub fn apply(&mut self, primary: Option<&Type>) -> Option<Color> {
        let Some(primary) = primary else {
            log::warn!("Entry has no types; keeping current color");
            return self.0;
        };

        match primary.color() {
            Some(color) => {
                self.0 = Some(color);
            }
            None => {
                log::warn!("Color not defined for type: {primary}");
            }
        }

        self.0
    }

    pub fn color(self) -> Option<Color> {
        self.0
    }

    pub fn backdrop(self) -> Option<Translucent> {
        self.0.map(Color::backdrop)
    }
}
