use crate::Error;
use crate::core::Species;
use crate::core::pokemon::{self, Pokemon, Summary};

use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::ClientBuilder::new()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("Build reqwest client")
});

/// A connection to PokeAPI and its sprite repository.
#[derive(Debug, Clone)]
pub struct Session {
    client: reqwest::Client,
    api: Arc<str>,
    sprites: Arc<str>,
}

impl Session {
    pub const API_URL: &str = "https://pokeapi.co/api/v2";
    pub const SPRITES_URL: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master";

    pub fn new(api: impl AsRef<str>, sprites: impl AsRef<str>) -> Self {
        let api = api.as_ref().trim_end_matches('/');
        let sprites = sprites.as_ref().trim_end_matches('/');

        log::info!("PokeAPI session started ({api})");

        Self {
            client: CLIENT.clone(),
            api: Arc::from(api),
            sprites: Arc::from(sprites),
        }
    }

    /// Lists the first `limit` Pokémon.
    ///
    /// Resources whose URL carries no id are skipped.
    pub async fn list(&self, limit: u32) -> Result<Vec<Summary>, Error> {
        let response: response::Page = self
            .get(format!("{api}/pokemon?limit={limit}", api = self.api))
            .await?;

        Ok(response
            .results
            .into_iter()
            .filter_map(|resource| {
                let summary = Summary::from_resource(resource.name, &resource.url);

                if summary.is_none() {
                    log::warn!("Skipping resource without id: {url}", url = resource.url);
                }

                summary
            })
            .collect())
    }

    pub async fn pokemon(&self, id: pokemon::Id) -> Result<Pokemon, Error> {
        let response: response::Pokemon = self
            .get(format!("{api}/pokemon/{id}", api = self.api))
            .await?;

        Ok(response.into())
    }

    pub async fn species(&self, id: pokemon::Id) -> Result<Species, Error> {
        let response: response::Species = self
            .get(format!("{api}/pokemon-species/{id}", api = self.api))
            .await?;

        Ok(response.into())
    }

    /// Downloads the dream world artwork of a Pokémon, as SVG.
    pub async fn download_sprite(&self, id: pokemon::Id) -> Result<Bytes, Error> {
        let url = format!(
            "{sprites}/sprites/pokemon/other/dream-world/{id}.svg",
            sprites = self.sprites
        );

        log::info!("Downloading sprite: {url}");
        let response = self.send(&url).await?;

        Ok(response.bytes().await?)
    }

    async fn get<T: DeserializeOwned>(&self, url: String) -> Result<T, Error> {
        log::info!("Fetching: {url}");
        let response = self.send(&url).await?;

        Ok(response.json().await?)
    }

    async fn send(&self, url: &str) -> Result<reqwest::Response, Error> {
        let response = self.client.get(url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound(url.to_owned()));
        }

        Ok(response.error_for_status()?)
    }
}

mod response {
    use crate::core::pokemon;
    use crate::core::species;
    use crate::core::{Locale, Stat};

    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Page {
        pub results: Vec<Resource>,
    }

    #[derive(Deserialize)]
    pub struct Resource {
        pub name: String,
        #[serde(default)]
        pub url: String,
    }

    #[derive(Deserialize)]
    pub struct Pokemon {
        id: pokemon::Id,
        name: String,
        types: Vec<Type>,
        weight: u32,
        height: u32,
        abilities: Vec<Ability>,
        stats: Vec<BaseStat>,
    }

    #[derive(Deserialize)]
    struct Type {
        r#type: Resource,
    }

    #[derive(Deserialize)]
    struct Ability {
        ability: Resource,
    }

    #[derive(Deserialize)]
    struct BaseStat {
        base_stat: u8,
        stat: Resource,
    }

    #[derive(Deserialize)]
    pub struct Species {
        flavor_text_entries: Vec<FlavorText>,
    }

    #[derive(Deserialize)]
    struct FlavorText {
        flavor_text: String,
        language: Resource,
    }

    impl From<Pokemon> for pokemon::Pokemon {
        fn from(pokemon: Pokemon) -> Self {
            Self {
                id: pokemon.id,
                name: pokemon.name,
                types: pokemon
                    .types
                    .into_iter()
                    .map(|type_| pokemon::Type::new(type_.r#type.name))
                    .collect(),
                weight: pokemon.weight,
                height: pokemon.height,
                abilities: pokemon
                    .abilities
                    .into_iter()
                    .map(|ability| ability.ability.name)
                    .collect(),
                stats: pokemon
                    .stats
                    .into_iter()
                    .map(|stat| Stat::new(&stat.stat.name, stat.base_stat))
                    .collect(),
            }
        }
    }

    impl From<Species> for species::Species {
        fn from(species: Species) -> Self {
            Self {
                flavor_texts: species
                    .flavor_text_entries
                    .into_iter()
                    .map(|entry| species::FlavorText {
                        text: entry.flavor_text,
                        language: Locale::new(entry.language.name),
                    })
                    .collect(),
            }
        }
    }
}
