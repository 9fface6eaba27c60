use crate::pokemon::{Pokedex, Summary};

use std::fmt;
use std::sync::Arc;

/// What the query of a [`Search`] is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Number,
    Name,
}

impl Mode {
    pub const ALL: [Self; 2] = [Self::Number, Self::Name];

    /// Whether the summary starts with the given lowercase query.
    pub fn matches(self, summary: &Summary, query: &str) -> bool {
        match self {
            Self::Number => summary.id.to_string().starts_with(query),
            Self::Name => summary.name.to_lowercase().starts_with(query),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Number => "Number",
            Self::Name => "Name",
        })
    }
}

/// The entries of a [`Pokedex`] whose number or name starts with a query.
pub struct Search {
    pub matches: Arc<[Summary]>,
}

impl Search {
    pub fn new(pokedex: &Pokedex, query: &str, mode: Mode) -> Self {
        let query = query.to_lowercase();

        if query.is_empty() {
            return Self {
                matches: pokedex.shared(),
            };
        }

        Self {
            matches: pokedex
                .values()
                .iter()
                .filter(|summary| mode.matches(summary, &query))
                .cloned()
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl Clone for Search {
    fn clone(&self) -> Self {
        Self {
            matches: self.matches.clone(),
        }
    }
}

impl fmt::Debug for Search {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Search")
            .field("matches", &self.matches.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::Id;

    use proptest::prelude::*;

    fn pokedex(names: &[&str]) -> Pokedex {
        let summaries: Vec<_> = names
            .iter()
            .enumerate()
            .map(|(i, name)| Summary {
                id: Id::new(i as u32 + 1).expect("valid id"),
                name: (*name).to_owned(),
            })
            .collect();

        Pokedex::new(summaries, |summary| summary.id)
    }

    fn ids(search: &Search) -> Vec<u32> {
        search.matches.iter().map(|summary| summary.id.get()).collect()
    }

    #[test]
    fn number_mode_matches_prefix_of_id() {
        let pokedex = pokedex(&["bulbasaur", "ivysaur", "venusaur"]);

        let search = Search::new(&pokedex, "2", Mode::Number);

        assert_eq!(ids(&search), [2]);
        assert!(!search.is_empty());
    }

    #[test]
    fn number_mode_is_not_substring() {
        let names: Vec<_> = (1..=25).map(|_| "pokemon").collect();
        let pokedex = pokedex(&names);

        assert_eq!(ids(&Search::new(&pokedex, "5", Mode::Number)), [5]);
        assert_eq!(
            ids(&Search::new(&pokedex, "2", Mode::Number)),
            [2, 20, 21, 22, 23, 24, 25]
        );
    }

    #[test]
    fn name_mode_is_case_insensitive_prefix() {
        let pokedex = pokedex(&["bulbasaur", "ivysaur", "venusaur", "Charmander"]);

        assert_eq!(ids(&Search::new(&pokedex, "BUL", Mode::Name)), [1]);
        assert_eq!(ids(&Search::new(&pokedex, "char", Mode::Name)), [4]);
        assert!(Search::new(&pokedex, "saur", Mode::Name).is_empty());
    }

    #[test]
    fn no_matches() {
        let pokedex = pokedex(&["bulbasaur", "ivysaur", "venusaur"]);

        let search = Search::new(&pokedex, "z", Mode::Name);

        assert!(search.is_empty());
    }

    #[test]
    fn empty_query_shares_the_pokedex() {
        let pokedex = pokedex(&["bulbasaur", "ivysaur", "venusaur"]);

        let search = Search::new(&pokedex, "", Mode::Name);

        assert!(Arc::ptr_eq(&search.matches, &pokedex.shared()));
    }

    proptest! {
        #[test]
        fn empty_query_returns_everything(
            names in prop::collection::vec("[a-z]{1,10}", 0..50),
            by_name in any::<bool>(),
        ) {
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            let pokedex = pokedex(&names);
            let mode = if by_name { Mode::Name } else { Mode::Number };

            let search = Search::new(&pokedex, "", mode);

            prop_assert_eq!(&*search.matches, pokedex.values());
        }

        #[test]
        fn matches_are_an_ordered_subsequence(
            names in prop::collection::vec("[a-z]{1,6}", 0..50),
            query in "[a-z0-9]{0,2}",
            by_name in any::<bool>(),
        ) {
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            let pokedex = pokedex(&names);
            let mode = if by_name { Mode::Name } else { Mode::Number };

            let search = Search::new(&pokedex, &query, mode);

            let expected: Vec<_> = pokedex
                .values()
                .iter()
                .filter(|summary| mode.matches(summary, &query))
                .cloned()
                .collect();

            prop_assert_eq!(&*search.matches, expected.as_slice());
        }
    }
}
