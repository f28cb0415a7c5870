use std::{collections::VecDeque, hash::BuildHasherDefault};

use fixedbitset::FixedBitSet;
use rustc_hash::FxHashSet;

use crate::{core::NodeId, graph::Graph, storage::AdjList};

use super::{Strategy, VisitSet};

pub trait TraversalCollection<T>: Default {
    /// Whether neighbors must be pushed in reverse to be popped in the order
    /// they were added.
    const REVERSED: bool;

    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
    fn clear(&mut self);
}

pub struct Queue<T>(pub VecDeque<T>);

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> TraversalCollection<T> for Queue<T> {
    const REVERSED: bool = false;

    fn push(&mut self, value: T) {
        self.0.push_back(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Debug)]
pub struct Stack<T>(pub Vec<T>);

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> TraversalCollection<T> for Stack<T> {
    const REVERSED: bool = true;

    fn push(&mut self, value: T) {
        self.0.push(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

pub(crate) struct RawVisit<K, C> {
    pub collection: C,
    // Identifiers rather than positions, because positions shift when nodes
    // are deleted between the steps of a detached visitor.
    pub visited: FxHashSet<K>,
}

impl<K: NodeId, C: TraversalCollection<K>> RawVisit<K, C> {
    pub fn new(count_hint: usize) -> Self {
        Self {
            collection: C::default(),
            visited: FxHashSet::with_capacity_and_hasher(count_hint, BuildHasherDefault::default()),
        }
    }

    pub fn start(&mut self, root: K) {
        self.collection.clear();
        self.collection.push(root);
    }

    pub fn reset(&mut self) {
        self.collection.clear();
        self.visited.reset_visited();
    }

    /// Nodes are marked as visited when they leave the collection, not when
    /// they enter it. A node can therefore be in the collection multiple times
    /// and the duplicates are dropped here.
    pub fn next(&mut self, graph: &Graph<K>) -> Option<K> {
        let storage = graph.storage();

        while let Some(node) = self.collection.pop() {
            if self.visited.is_visited(&node) {
                continue;
            }

            // Never added, or deleted since it was discovered.
            let Some(pos) = storage.position(&node) else {
                continue;
            };

            self.visited.visit(node.clone());

            let neighbors = storage.neighbors(pos);
            if C::REVERSED {
                self.discover(storage, neighbors.iter().rev());
            } else {
                self.discover(storage, neighbors.iter());
            }

            return Some(node);
        }

        None
    }

    fn discover<'a>(&mut self, storage: &AdjList<K>, neighbors: impl Iterator<Item = &'a usize>) {
        for &next in neighbors {
            let next = storage.id(next);
            if !self.visited.is_visited(next) {
                self.collection.push(next.clone());
            }
        }
    }
}

// Passes below work on storage positions and run to completion, so the
// visited sets can be bit sets indexed by position.

/// Depth-first pre-order from `root`, which must not be visited yet.
pub(crate) fn preorder<K>(
    storage: &AdjList<K>,
    root: usize,
    visited: &mut FixedBitSet,
    strategy: Strategy,
    order: &mut Vec<usize>,
) {
    match strategy {
        Strategy::Iterative => preorder_iterative(storage, root, visited, order),
        Strategy::Recursive => preorder_recursive(storage, root, visited, order),
    }
}

fn preorder_recursive<K>(
    storage: &AdjList<K>,
    node: usize,
    visited: &mut FixedBitSet,
    order: &mut Vec<usize>,
) {
    visited.visit(node);
    order.push(node);

    for &next in storage.neighbors(node) {
        if !visited.is_visited(&next) {
            preorder_recursive(storage, next, visited, order);
        }
    }
}

fn preorder_iterative<K>(
    storage: &AdjList<K>,
    root: usize,
    visited: &mut FixedBitSet,
    order: &mut Vec<usize>,
) {
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if !visited.visit(node) {
            continue;
        }

        order.push(node);

        stack.extend(
            storage
                .neighbors(node)
                .iter()
                .rev()
                .copied()
                .filter(|next| !visited.is_visited(next)),
        );
    }
}

/// Depth-first post-order (finishing order) from `root`, which must not be
/// visited yet.
pub(crate) fn postorder<K>(
    storage: &AdjList<K>,
    root: usize,
    visited: &mut FixedBitSet,
    strategy: Strategy,
    finished: &mut Vec<usize>,
) {
    match strategy {
        Strategy::Iterative => postorder_iterative(storage, root, visited, finished),
        Strategy::Recursive => postorder_recursive(storage, root, visited, finished),
    }
}

fn postorder_recursive<K>(
    storage: &AdjList<K>,
    node: usize,
    visited: &mut FixedBitSet,
    finished: &mut Vec<usize>,
) {
    visited.visit(node);

    for &next in storage.neighbors(node) {
        if !visited.is_visited(&next) {
            postorder_recursive(storage, next, visited, finished);
        }
    }

    finished.push(node);
}

fn postorder_iterative<K>(
    storage: &AdjList<K>,
    root: usize,
    visited: &mut FixedBitSet,
    finished: &mut Vec<usize>,
) {
    visited.visit(root);

    // Node and the index of its next neighbor to examine.
    let mut stack = vec![(root, 0)];

    while let Some(frame) = stack.last_mut() {
        let (node, cursor) = *frame;

        match storage.neighbors(node).get(cursor) {
            Some(&next) => {
                frame.1 += 1;
                if visited.visit(next) {
                    stack.push((next, 0));
                }
            }
            None => {
                stack.pop();
                finished.push(node);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_storage() -> AdjList<usize> {
        // 0 -> 1 -> 3, 0 -> 2 -> 3, 3 -> 0, 2 -> 4
        let mut storage = AdjList::new();
        for id in 0..5 {
            storage.insert(id);
        }
        for (src, dst) in [(0, 1), (0, 2), (1, 3), (2, 3), (3, 0), (2, 4)] {
            storage.connect(src, dst);
        }
        storage
    }

    fn run_preorder(strategy: Strategy) -> Vec<usize> {
        let storage = create_storage();
        let mut visited = FixedBitSet::with_capacity(storage.len());
        let mut order = Vec::new();
        preorder(&storage, 0, &mut visited, strategy, &mut order);
        order
    }

    fn run_postorder(strategy: Strategy) -> Vec<usize> {
        let storage = create_storage();
        let mut visited = FixedBitSet::with_capacity(storage.len());
        let mut finished = Vec::new();
        postorder(&storage, 0, &mut visited, strategy, &mut finished);
        finished
    }

    #[test]
    fn preorder_strategies_agree() {
        assert_eq!(run_preorder(Strategy::Recursive), vec![0, 1, 3, 2, 4]);
        assert_eq!(run_preorder(Strategy::Iterative), vec![0, 1, 3, 2, 4]);
    }

    #[test]
    fn postorder_strategies_agree() {
        assert_eq!(run_postorder(Strategy::Recursive), vec![3, 1, 4, 2, 0]);
        assert_eq!(run_postorder(Strategy::Iterative), vec![3, 1, 4, 2, 0]);
    }

    #[test]
    fn iterative_handles_long_paths() {
        let mut storage = AdjList::new();
        let n = 200_000;
        for id in 0..n {
            storage.insert(id);
        }
        for id in 1..n {
            storage.connect(id - 1, id);
        }

        let mut visited = FixedBitSet::with_capacity(n);
        let mut finished = Vec::new();
        postorder(&storage, 0, &mut visited, Strategy::Iterative, &mut finished);

        assert_eq!(finished.len(), n);
        assert_eq!(finished.first(), Some(&(n - 1)));
    }
}
