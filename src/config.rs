use crate::pokeapi::{Catalog, Session};

use std::env;

/// Settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub sprites_url: String,
    pub catalog: Catalog,
    pub location: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let url = |key: &str, default: &str| {
            var(key)
                .map(|url| url.trim().trim_end_matches('/').to_owned())
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        let catalog = var("POKEDEX_CATALOG_SIZE")
            .map(|size| {
                size.trim()
                    .parse()
                    .ok()
                    .and_then(Catalog::new)
                    .unwrap_or_else(|| {
                        log::warn!("Invalid POKEDEX_CATALOG_SIZE: {size:?}");
                        Catalog::default()
                    })
            })
            .unwrap_or_default();

        Self {
            api_url: url("POKEDEX_API_URL", Session::API_URL),
            sprites_url: url("POKEDEX_SPRITES_URL", Session::SPRITES_URL),
            catalog,
            location: var("POKEDEX_LOCATION").unwrap_or_else(|| "index".to_owned()),
        }
    }

    pub fn session(&self) -> Session {
        Session::new(&self.api_url, &self.sprites_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<_, _> = vars.iter().copied().collect();

        Config::from_vars(|key| vars.get(key).map(|value| (*value).to_owned()))
    }

    #[test]
    fn defaults() {
        let config = config(&[]);

        assert_eq!(config.api_url, "https://pokeapi.co/api/v2");
        assert_eq!(
            config.sprites_url,
            "https://raw.githubusercontent.com/PokeAPI/sprites/master"
        );
        assert_eq!(config.catalog.size(), 649);
        assert_eq!(config.location, "index");
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("POKEDEX_API_URL", "http://localhost:8000/api/v2/"),
            ("POKEDEX_CATALOG_SIZE", "151"),
            ("POKEDEX_LOCATION", "detail?id=25"),
        ]);

        assert_eq!(config.api_url, "http://localhost:8000/api/v2");
        assert_eq!(config.catalog.size(), 151);
        assert_eq!(config.location, "detail?id=25");
    }

    #[test]
    fn invalid_catalog_size_falls_back_to_default() {
        assert_eq!(config(&[("POKEDEX_CATALOG_SIZE", "0")]).catalog.size(), 649);
        assert_eq!(config(&[("POKEDEX_CATALOG_SIZE", "many")]).catalog.size(), 649);
    }

    #[test]
    fn blank_url_falls_back_to_default() {
        assert_eq!(
            config(&[("POKEDEX_API_URL", "  ")]).api_url,
            "https://pokeapi.co/api/v2"
        );
    }
}
