use std::borrow::Cow;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub name: Name,
    pub base: u8,
}

impl Stat {
    /// The scale of the bar shown next to each stat.
    pub const SCALE: RangeInclusive<f32> = 0.0..=100.0;

    pub fn new(key: &str, base: u8) -> Self {
        Self {
            name: Name::parse(key),
            base,
        }
    }

    pub fn label(&self) -> Cow<'_, str> {
        self.name.label()
    }

    /// The base value, zero-padded to three digits.
    pub fn value(&self) -> String {
        format!("{:03}", self.base)
    }

    /// The base value on [`Stat::SCALE`]. Values above the scale are
    /// passed through.
    pub fn progress(&self) -> f32 {
        f32::from(self.base)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Name {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
    Other(String),
}

impl Name {
    pub fn parse(key: &str) -> Self {
        match key {
            "hp" => Self::Hp,
            "attack" => Self::Attack,
            "defense" => Self::Defense,
            "special-attack" => Self::SpecialAttack,
            "special-defense" => Self::SpecialDefense,
            "speed" => Self::Speed,
            _ => {
                log::warn!("Unknown stat: {key}");

                Self::Other(key.to_owned())
            }
        }
    }

    pub fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(match self {
            Self::Hp => "HP",
            Self::Attack => "ATTACK",
            Self::Defense => "DEFENCE",
            Self::SpecialAttack => "SATK",
            Self::SpecialDefense => "SDEF",
            Self::Speed => "SPEED",
            Self::Other(key) => return Cow::Owned(key.to_uppercase()),
        })
    }
}
