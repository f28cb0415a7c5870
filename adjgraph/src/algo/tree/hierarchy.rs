use std::{collections::VecDeque, slice};

use fixedbitset::FixedBitSet;
use rustc_hash::FxHashMap;

use crate::{core::NodeId, graph::Graph, visit::VisitSet};

#[derive(Debug, Clone)]
struct Entry<K> {
    parent: Option<K>,
    children: Vec<K>,
    depth: usize,
}

/// A tree hanging from a chosen root, typically the [center](super::tree_center).
///
/// Children of a node are its neighbors, in the order their edges were added,
/// without the node's parent. This is the structure a front end lays out when
/// drawing the tree level by level.
///
/// If the graph is not a tree, every node reachable from the root still
/// appears exactly once, attached to the node from which it was reached
/// first in breadth-first order.
#[derive(Debug, Clone)]
pub struct TreeHierarchy<K> {
    root: K,
    entries: FxHashMap<K, Entry<K>>,
    preorder: Vec<K>,
    height: usize,
}

impl<K: NodeId> TreeHierarchy<K> {
    /// Builds the hierarchy of nodes reachable from `root`. Returns `None` if
    /// the root does not exist.
    pub fn rooted_at(graph: &Graph<K>, root: &K) -> Option<Self> {
        let storage = graph.storage();
        let root = storage.position(root)?;
        let count = storage.len();

        let mut parents = vec![None; count];
        let mut depths = vec![0; count];
        let mut children = vec![Vec::new(); count];
        let mut placed = FixedBitSet::with_capacity(count);

        placed.visit(root);
        let mut queue = VecDeque::from([root]);

        while let Some(node) = queue.pop_front() {
            for &next in storage.neighbors(node) {
                if placed.visit(next) {
                    parents[next] = Some(node);
                    depths[next] = depths[node] + 1;
                    children[node].push(next);
                    queue.push_back(next);
                }
            }
        }

        let mut preorder = Vec::with_capacity(placed.visited_count());
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            preorder.push(node);
            stack.extend(children[node].iter().rev().copied());
        }

        let id = |pos: usize| storage.id(pos).clone();

        let entries = preorder
            .iter()
            .map(|&node| {
                let entry = Entry {
                    parent: parents[node].map(id),
                    children: children[node].iter().map(|&child| id(child)).collect(),
                    depth: depths[node],
                };
                (id(node), entry)
            })
            .collect::<FxHashMap<_, _>>();

        let height = preorder.iter().map(|&node| depths[node]).max().unwrap_or(0);

        Some(Self {
            root: id(root),
            entries,
            preorder: preorder.into_iter().map(id).collect(),
            height,
        })
    }

    pub fn root(&self) -> &K {
        &self.root
    }

    /// Returns the number of nodes in the hierarchy.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.preorder.len()
    }

    pub fn contains(&self, id: &K) -> bool {
        self.entries.contains_key(id)
    }

    /// Returns the children of the node, empty if the node is a leaf or not
    /// in the hierarchy.
    pub fn children(&self, id: &K) -> &[K] {
        self.entries
            .get(id)
            .map(|entry| entry.children.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the parent of the node, `None` for the root or a node not in
    /// the hierarchy.
    pub fn parent(&self, id: &K) -> Option<&K> {
        self.entries.get(id).and_then(|entry| entry.parent.as_ref())
    }

    /// Returns the distance of the node from the root.
    pub fn depth(&self, id: &K) -> Option<usize> {
        self.entries.get(id).map(|entry| entry.depth)
    }

    /// Returns the largest depth of a node.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the nodes in pre-order, each node followed by the subtrees of
    /// its children.
    pub fn iter(&self) -> slice::Iter<'_, K> {
        self.preorder.iter()
    }
}
