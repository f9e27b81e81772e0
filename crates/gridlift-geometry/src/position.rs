//! Section/item addressing for grid lists.

use std::fmt;

/// Identifies one item within a sectioned grid list.
///
/// Positions are totally ordered section-major, matching visual document
/// order. Within a section, item indices are consecutive with no gaps; a
/// position is unique per item at any instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPosition {
    pub section: usize,
    pub item: usize,
}

impl GridPosition {
    pub fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.item)
    }
}
