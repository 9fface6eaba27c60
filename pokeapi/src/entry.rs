use crate::core::pokemon::{self, Pokemon};
use crate::{Error, Session};

/// Everything shown about a Pokémon: its data and its description.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub pokemon: Pokemon,
    pub description: String,
}

impl Entry {
    pub fn id(&self) -> pokemon::Id {
        self.pokemon.id
    }

    /// Fetches the Pokémon and its species concurrently.
    ///
    /// Fails as soon as either of them fails.
    pub fn fetch<'a>(
        id: pokemon::Id,
        session: &Session,
    ) -> impl Future<Output = Result<Self, Error>> + 'a {
        use futures_util::future;

        let session = session.clone();

        async move {
            let (pokemon, species) =
                future::try_join(session.pokemon(id), session.species(id)).await?;

            Ok(Self {
                pokemon,
                description: species.description(),
            })
        }
    }
}
