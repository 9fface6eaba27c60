use crate::pokemon::Id;

/// The range of valid ids: `1..=size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    size: u32,
}

impl Catalog {
    /// Every Pokémon up to the fifth generation.
    pub const DEFAULT_SIZE: u32 = 649;

    pub fn new(size: u32) -> Option<Self> {
        if size == 0 {
            return None;
        }

        Some(Self { size })
    }

    pub fn size(self) -> u32 {
        self.size
    }

    pub fn contains(self, id: Id) -> bool {
        id.get() <= self.size
    }

    pub fn first(self) -> Id {
        Id::FIRST
    }

    pub fn last(self) -> Id {
        Id(self.size)
    }

    pub fn previous(self, id: Id) -> Option<Id> {
        if id == self.first() || !self.contains(id) {
            return None;
        }

        Some(Id(id.get() - 1))
    }

    pub fn next(self, id: Id) -> Option<Id> {
        if id >= self.last() {
            return None;
        }

        Some(Id(id.get() + 1))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> Id {
        Id::new(n).expect("valid id")
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_eq!(Catalog::new(0), None);
    }

    #[test]
    fn bounds_are_inclusive() {
        let catalog = Catalog::new(151).expect("valid catalog");

        assert!(catalog.contains(id(1)));
        assert!(catalog.contains(id(151)));
        assert!(!catalog.contains(id(152)));
    }

    #[test]
    fn first_has_no_previous() {
        let catalog = Catalog::default();

        assert_eq!(catalog.previous(id(1)), None);
        assert_eq!(catalog.next(id(1)), Some(id(2)));
    }

    #[test]
    fn last_has_no_next() {
        let catalog = Catalog::default();

        assert_eq!(catalog.next(id(649)), None);
        assert_eq!(catalog.previous(id(649)), Some(id(648)));
    }

    #[test]
    fn out_of_range_has_no_neighbors() {
        let catalog = Catalog::new(3).expect("valid catalog");

        assert_eq!(catalog.previous(id(10)), None);
        assert_eq!(catalog.next(id(10)), None);
    }
}
