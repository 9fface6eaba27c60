mod map;

pub mod catalog;
pub mod color;
pub mod locale;
pub mod navigation;
pub mod pokemon;
pub mod route;
pub mod search;
pub mod species;
pub mod stat;

pub use catalog::Catalog;
pub use color::Color;
pub use locale::Locale;
pub use map::Map;
pub use navigation::Navigator;
pub use pokemon::Pokemon;
pub use route::Route;
pub use search::Search;
pub use species::Species;
pub use stat::Stat;
