use crate::color::{self, Color};
use crate::stat::Stat;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    pub id: Id,
    pub name: String,
    pub types: Vec<Type>,
    /// In hectograms.
    pub weight: u32,
    /// In decimetres.
    pub height: u32,
    pub abilities: Vec<String>,
    pub stats: Vec<Stat>,
}

impl Pokemon {
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }

    pub fn primary_type(&self) -> Option<&Type> {
        self.types.first()
    }

    pub fn weight_label(&self) -> String {
        format!("{} kg", tenths(self.weight))
    }

    pub fn height_label(&self) -> String {
        format!("{} m", tenths(self.height))
    }
}

/// The canonical list of every Pokémon in the catalog, in API order.
pub type Pokedex = crate::Map<Id, Summary>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub id: Id,
    pub name: String,
}

impl Summary {
    /// Builds a [`Summary`] out of a named API resource, taking the id from
    /// the last segment of its URL (e.g. `.../pokemon/25/`).
    pub fn from_resource(name: impl Into<String>, url: &str) -> Option<Self> {
        let id = url.trim_end_matches('/').rsplit('/').next()?.parse().ok()?;

        Some(Self {
            id,
            name: name.into(),
        })
    }

    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(pub(crate) u32);

impl Id {
    pub const FIRST: Self = Self(1);

    pub fn new(id: u32) -> Option<Self> {
        if id == 0 {
            return None;
        }

        Some(Self(id))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// The Pokédex number, e.g. `#025`.
    pub fn number(self) -> String {
        format!("#{:03}", self.0)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Id {
    type Err = InvalidId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| InvalidId(s.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidId(String);

impl fmt::Display for InvalidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pokémon id: {:?}", self.0)
    }
}

impl std::error::Error for InvalidId {}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Type(String);

impl Type {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn color(&self) -> Option<Color> {
        color::of(self.as_str())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Upper-cases the first letter and lower-cases the rest.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn tenths(value: u32) -> String {
    match value % 10 {
        0 => format!("{}", value / 10),
        decimal => format!("{}.{decimal}", value / 10),
    }
}
