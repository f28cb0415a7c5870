use std::{iter::FusedIterator, slice};

use rustc_hash::FxHashMap;

use crate::core::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry<K> {
    id: K,
    neighbors: Vec<usize>,
}

/// Adjacency list keeping nodes in insertion order and neighbors in the order
/// their edges were added.
#[derive(Debug, Clone)]
pub(crate) struct AdjList<K> {
    entries: Vec<Entry<K>>,
    positions: FxHashMap<K, usize>,
}

impl<K> AdjList<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn id(&self, pos: usize) -> &K {
        &self.entries[pos].id
    }

    pub fn ids(&self) -> Ids<'_, K> {
        Ids {
            inner: self.entries.iter(),
        }
    }

    pub fn neighbors(&self, pos: usize) -> &[usize] {
        &self.entries[pos].neighbors
    }

    /// Sum of the lengths of all neighbor lists.
    pub fn degree_sum(&self) -> usize {
        self.entries.iter().map(|entry| entry.neighbors.len()).sum()
    }

    /// Number of nodes that are their own neighbor.
    pub fn loop_count(&self) -> usize {
        self.entries
            .iter()
            .enumerate()
            .filter(|(pos, entry)| entry.neighbors.contains(pos))
            .count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }
}

impl<K: NodeId> AdjList<K> {
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            entries: Vec::with_capacity(node_count),
            positions: FxHashMap::with_capacity_and_hasher(node_count, Default::default()),
        }
    }

    pub fn position(&self, id: &K) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Inserts a node at the end of the key order. Returns `None` if the node
    /// is already present.
    pub fn insert(&mut self, id: K) -> Option<usize> {
        if self.positions.contains_key(&id) {
            return None;
        }

        let pos = self.entries.len();
        self.positions.insert(id.clone(), pos);
        self.entries.push(Entry {
            id,
            neighbors: Vec::new(),
        });

        Some(pos)
    }

    /// Removes the node together with all edges pointing to it.
    pub fn remove(&mut self, pos: usize) -> K {
        let removed = self.entries.remove(pos);
        self.positions.remove(&removed.id);

        for entry in self.entries.iter_mut() {
            entry.neighbors.retain(|&next| next != pos);
            for next in entry.neighbors.iter_mut() {
                if *next > pos {
                    *next -= 1;
                }
            }
        }

        for (shifted, entry) in self.entries.iter().enumerate().skip(pos) {
            if let Some(slot) = self.positions.get_mut(&entry.id) {
                *slot = shifted;
            }
        }

        removed.id
    }

    /// Appends `dst` to the neighbors of `src` unless it is already there.
    pub fn connect(&mut self, src: usize, dst: usize) -> bool {
        let neighbors = &mut self.entries[src].neighbors;
        if neighbors.contains(&dst) {
            false
        } else {
            neighbors.push(dst);
            true
        }
    }

    /// Removes `dst` from the neighbors of `src`, preserving the order of the
    /// rest.
    pub fn disconnect(&mut self, src: usize, dst: usize) -> bool {
        let neighbors = &mut self.entries[src].neighbors;
        match neighbors.iter().position(|&next| next == dst) {
            Some(i) => {
                neighbors.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn is_connected(&self, src: usize, dst: usize) -> bool {
        self.entries[src].neighbors.contains(&dst)
    }
}

pub(crate) struct Ids<'a, K> {
    inner: slice::Iter<'a, Entry<K>>,
}

impl<'a, K> Iterator for Ids<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| &entry.id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> DoubleEndedIterator for Ids<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|entry| &entry.id)
    }
}

impl<K> ExactSizeIterator for Ids<'_, K> {}

impl<K> FusedIterator for Ids<'_, K> {}

impl<K> Default for AdjList<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_abc() -> (AdjList<&'static str>, [usize; 3]) {
        let mut storage = AdjList::new();
        let a = storage.insert("a").unwrap();
        let b = storage.insert("b").unwrap();
        let c = storage.insert("c").unwrap();
        (storage, [a, b, c])
    }

    #[test]
    fn insert_keeps_order() {
        let (mut storage, [a, b, c]) = create_abc();

        assert_eq!((a, b, c), (0, 1, 2));
        assert_eq!(storage.insert("b"), None);
        assert_eq!(storage.ids().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(storage.position(&"c"), Some(2));
    }

    #[test]
    fn connect_suppresses_duplicates() {
        let (mut storage, [a, b, c]) = create_abc();

        assert!(storage.connect(a, c));
        assert!(storage.connect(a, b));
        assert!(!storage.connect(a, c));

        assert_eq!(storage.neighbors(a), &[c, b]);
        assert_eq!(storage.degree_sum(), 2);
    }

    #[test]
    fn disconnect_preserves_order() {
        let (mut storage, [a, b, c]) = create_abc();

        storage.connect(a, b);
        storage.connect(a, c);
        storage.connect(a, a);

        assert!(storage.disconnect(a, c));
        assert!(!storage.disconnect(a, c));
        assert_eq!(storage.neighbors(a), &[b, a]);
    }

    #[test]
    fn remove_shifts_positions() {
        let (mut storage, [a, b, c]) = create_abc();

        storage.connect(a, b);
        storage.connect(a, c);
        storage.connect(c, b);
        storage.connect(c, a);

        assert_eq!(storage.remove(b), "b");

        assert_eq!(storage.len(), 2);
        assert_eq!(storage.position(&"b"), None);
        assert_eq!(storage.position(&"c"), Some(1));
        assert_eq!(storage.neighbors(0), &[1]);
        assert_eq!(storage.neighbors(1), &[0]);
    }

    #[test]
    fn clear() {
        let (mut storage, [a, b, _]) = create_abc();
        storage.connect(a, b);
        storage.clear();

        assert!(storage.is_empty());
        assert_eq!(storage.position(&"a"), None);
        assert_eq!(storage.insert("a"), Some(0));
    }
}
