use crate::Locale;

/// The flavor texts of a Pokémon species, in every language the API has.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Species {
    pub flavor_texts: Vec<FlavorText>,
}

impl Species {
    pub fn description(&self) -> String {
        description(&self.flavor_texts)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlavorText {
    pub text: String,
    pub language: Locale,
}

/// Returns the first English flavor text, with its embedded form feeds and
/// line breaks turned into spaces.
///
/// Returns an empty string if there is no English text.
pub fn description(flavor_texts: &[FlavorText]) -> String {
    flavor_texts
        .iter()
        .find(|flavor_text| flavor_text.language.is_english())
        .map(|flavor_text| {
            flavor_text
                .text
                .replace(['\u{000C}', '\n', '\r'], " ")
        })
        .unwrap_or_default()
}
