use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

use fixedbitset::FixedBitSet;

/// A set of visited nodes.
pub trait VisitSet<I> {
    /// Marks the element as visited.
    ///
    /// Returns `true` when this is the first time the element is visited.
    fn visit(&mut self, id: I) -> bool;

    /// Returns `true` if the element is marked as visited.
    fn is_visited(&self, id: &I) -> bool;

    /// Returns the number of visited elements.
    fn visited_count(&self) -> usize;

    /// Resets the set of visited elements to be empty.
    fn reset_visited(&mut self);
}

impl<I: Ord> VisitSet<I> for BTreeSet<I> {
    fn visit(&mut self, id: I) -> bool {
        self.insert(id)
    }

    fn is_visited(&self, id: &I) -> bool {
        self.contains(id)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear();
    }
}

impl<I: Eq + Hash, S: BuildHasher> VisitSet<I> for HashSet<I, S> {
    fn visit(&mut self, id: I) -> bool {
        self.insert(id)
    }

    fn is_visited(&self, id: &I) -> bool {
        self.contains(id)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}

// Positions of nodes in the storage.
impl VisitSet<usize> for FixedBitSet {
    fn visit(&mut self, id: usize) -> bool {
        if self.len() <= id {
            self.grow(id + 1);
        }
        !self.put(id)
    }

    fn is_visited(&self, id: &usize) -> bool {
        self.contains(*id)
    }

    fn visited_count(&self) -> usize {
        self.count_ones(..)
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;

    fn exercise<S: VisitSet<usize>>(mut set: S) {
        assert!(set.visit(3));
        assert!(!set.visit(3));
        assert!(set.visit(0));
        assert!(set.is_visited(&3));
        assert!(!set.is_visited(&1));
        assert!(!set.is_visited(&100));
        assert_eq!(set.visited_count(), 2);

        set.reset_visited();
        assert_eq!(set.visited_count(), 0);
        assert!(!set.is_visited(&3));
    }

    #[test]
    fn bit_set() {
        exercise(FixedBitSet::new());
    }

    #[test]
    fn hash_set() {
        exercise(FxHashSet::default());
    }

    #[test]
    fn btree_set() {
        exercise(BTreeSet::new());
    }
}
