use crate::Catalog;
use crate::pokemon::Id;

use std::fmt;

/// A location in the application: either the list of every Pokémon or the
/// details of one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    List,
    Detail(Id),
}

impl Route {
    /// Resolves a location like `detail?id=25`.
    ///
    /// A leading URL or `./`, and an `.html` suffix, are ignored. Detail
    /// locations whose id is missing, not a number, or out of the catalog
    /// redirect to the list.
    pub fn resolve(location: &str, catalog: Catalog) -> Self {
        let location = location.trim();
        let (path, query) = location.split_once('?').unwrap_or((location, ""));

        let page = path.rsplit('/').next().unwrap_or(path);
        let page = page.strip_suffix(".html").unwrap_or(page);

        if page != "detail" {
            return Self::List;
        }

        let id = query
            .split('&')
            .find_map(|parameter| parameter.strip_prefix("id="))
            .and_then(|id| id.parse::<Id>().ok());

        match id {
            Some(id) if catalog.contains(id) => Self::Detail(id),
            _ => {
                log::warn!("Invalid location \"{location}\"; redirecting to the list");

                Self::List
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => f.write_str("index"),
            Self::Detail(id) => write!(f, "detail?id={id}"),
        }
    }
}
