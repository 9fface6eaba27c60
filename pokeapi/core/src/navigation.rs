//! Matching asynchronous loads to the entry the user asked for last.
//!
//! Every load starts by asking the [`Navigator`] for a [`Request`]. The
//! request travels along with the load and, once the load finishes, the
//! navigator tells whether it is still the most recent one. Results of any
//! other request are stale and must be dropped.
use crate::Catalog;
use crate::pokemon::Id;

/// A ticket for one load of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Request {
    id: Id,
    generation: u64,
}

impl Request {
    pub fn id(self) -> Id {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    catalog: Catalog,
    generation: u64,
    current: Option<Request>,
}

impl Navigator {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            generation: 0,
            current: None,
        }
    }

    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    /// Issues a new request for the given id, superseding every previous one.
    ///
    /// Returns `None`, leaving the current request in place, if the id is out
    /// of the catalog.
    pub fn request(&mut self, id: Id) -> Option<Request> {
        if !self.catalog.contains(id) {
            log::warn!("Pokémon {id} is out of the catalog");
            return None;
        }

        self.generation += 1;

        let request = Request {
            id,
            generation: self.generation,
        };

        self.current = Some(request);

        Some(request)
    }

    /// Forgets the current request, turning every pending load stale.
    pub fn reset(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<Request> {
        self.current
    }

    pub fn is_current(&self, request: Request) -> bool {
        self.current == Some(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn id(n: u32) -> Id {
        Id::new(n).expect("valid id")
    }

    #[test]
    fn starts_without_request() {
        let navigator = Navigator::new(Catalog::default());

        assert_eq!(navigator.current(), None);
    }

    #[test]
    fn later_request_supersedes_earlier() {
        let mut navigator = Navigator::new(Catalog::default());

        let a = navigator.request(id(1)).expect("in range");
        let b = navigator.request(id(2)).expect("in range");

        assert!(!navigator.is_current(a));
        assert!(navigator.is_current(b));
        assert_eq!(navigator.current().map(Request::id), Some(id(2)));
    }

    #[test]
    fn repeated_id_is_a_new_request() {
        let mut navigator = Navigator::new(Catalog::default());

        let first = navigator.request(id(4)).expect("in range");
        let second = navigator.request(id(4)).expect("in range");

        assert_ne!(first, second);
        assert!(!navigator.is_current(first));
        assert!(navigator.is_current(second));
    }

    #[test]
    fn out_of_range_is_refused() {
        let mut navigator = Navigator::new(Catalog::new(151).expect("valid catalog"));

        let current = navigator.request(id(151)).expect("in range");

        assert_eq!(navigator.request(id(152)), None);
        assert!(navigator.is_current(current));
    }

    #[test]
    fn reset_turns_pending_request_stale() {
        let mut navigator = Navigator::new(Catalog::default());

        let pending = navigator.request(id(7)).expect("in range");
        navigator.reset();

        assert!(!navigator.is_current(pending));
        assert_eq!(navigator.current(), None);

        let next = navigator.request(id(7)).expect("in range");

        assert_ne!(pending, next);
        assert!(navigator.is_current(next));
    }

    proptest! {
        /// Whatever order loads finish in, only the last one issued is
        /// current.
        #[test]
        fn only_the_last_request_is_current(
            ids in prop::collection::vec(1u32..=649, 1..20),
            seed in any::<u64>(),
        ) {
            let mut navigator = Navigator::new(Catalog::default());

            let mut requests: Vec<_> = ids
                .iter()
                .map(|n| navigator.request(id(*n)).expect("in range"))
                .collect();

            let last = *requests.last().expect("non-empty");

            // Finish in a scrambled order
            let len = requests.len();
            for i in 0..len {
                let j = (seed as usize).wrapping_add(i * 7) % len;
                requests.swap(i, j);
            }

            let applied: Vec<_> = requests
                .into_iter()
                .filter(|request| navigator.is_current(*request))
                .collect();

            prop_assert_eq!(applied, vec![last]);
        }
    }
}
