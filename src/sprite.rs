use crate::pokeapi::Session;
use crate::pokeapi::pokemon;

use bytes::Bytes;
use futures_util::TryFutureExt;
use std::fmt;
use std::path::PathBuf;
use tokio::fs;

/// The artwork of a Pokémon, as SVG.
#[derive(Clone)]
pub struct Sprite {
    pub id: pokemon::Id,
    pub bytes: Bytes,
}

impl Sprite {
    /// Reads the sprite from the disk cache, downloading and caching it if
    /// missing.
    pub fn fetch<'a>(
        id: pokemon::Id,
        session: &Session,
    ) -> impl Future<Output = Result<Self, anywho::Error>> + 'a {
        let session = session.clone();

        async move {
            let cache = cache_dir().join(format!("{id}.svg"));

            let fetch_from_cache = async {
                let bytes = fs::read(&cache).await?;

                Ok(Bytes::from(bytes))
            };

            let download = async {
                let bytes = session.download_sprite(id).await?;

                Ok::<_, anywho::Error>(bytes)
            };

            let bytes = fetch_from_cache
                .or_else(|_: anywho::Error| download)
                .await?;

            if !fs::try_exists(&cache).await.unwrap_or_default() {
                let _ = fs::create_dir_all(cache.parent().unwrap_or(&cache)).await;
                let _ = fs::write(&cache, &bytes).await;
            }

            Ok(Self { id, bytes })
        }
    }
}

impl fmt::Debug for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("id", &self.id)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

fn cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_default()
        .join(env!("CARGO_PKG_NAME"))
        .join("sprites")
}
