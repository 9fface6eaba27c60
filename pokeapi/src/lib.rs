pub use pokeapi_core as core;

pub mod entry;
pub mod error;
pub mod session;

pub use crate::core::{
    Catalog, Color, Locale, Map, Navigator, Pokemon, Route, Search, Species, Stat, catalog, color,
    locale, navigation, pokemon, route, search, species, stat,
};

pub use entry::Entry;
pub use error::Error;
pub use session::Session;

pub type Result<T, E = Error> = std::result::Result<T, E>;
