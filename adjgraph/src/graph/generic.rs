use std::{iter::FusedIterator, slice};

use tracing::debug;

use crate::{
    algo::{is_cyclic, tree, ConnectedComponents, StronglyConnectedComponents, TopoSort},
    core::{Endpoint, GraphError, NodeId},
    storage::{AdjList, Ids},
    visit::{self, Traversal},
};

/// Mutable graph backed by an ordered adjacency list.
///
/// Whether the graph is directed is a runtime flag. It only affects how
/// [`add_edge`](Graph::add_edge) and [`delete_edge`](Graph::delete_edge)
/// treat the reciprocal entry; edges themselves are always stored as directed
/// neighbor entries.
///
/// Nodes are kept in insertion order and neighbors in the order their edges
/// were added. All traversals and algorithms follow these orders, so their
/// results are deterministic.
///
/// # Examples
///
/// ```
/// use adjgraph::Graph;
///
/// let mut graph = Graph::new_undirected();
/// graph.extend_with_nodes(["A", "B", "C", "D"]);
/// graph.extend_with_edges([("A", "B"), ("B", "C"), ("C", "D")]);
///
/// assert_eq!(graph.bfs(&"A"), vec!["A", "B", "C", "D"]);
/// assert!(graph.is_tree());
/// assert_eq!(graph.find_tree_center().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<K> {
    storage: AdjList<K>,
    directed: bool,
}

impl<K> Graph<K> {
    pub fn new(directed: bool) -> Self {
        Self {
            storage: AdjList::new(),
            directed,
        }
    }

    pub fn new_directed() -> Self {
        Self::new(true)
    }

    pub fn new_undirected() -> Self {
        Self::new(false)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Changes the semantics of subsequent edge additions and removals.
    /// Existing edges are left untouched.
    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }

    pub fn node_count(&self) -> usize {
        self.storage.len()
    }

    /// Returns the number of edges, counting a reciprocal pair of entries as
    /// one edge in undirected graphs.
    pub fn edge_count(&self) -> usize {
        let sum = self.storage.degree_sum();
        if self.directed {
            sum
        } else {
            // A self-loop is a single entry.
            (sum + self.storage.loop_count()) / 2
        }
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the nodes in insertion order.
    pub fn nodes(&self) -> Nodes<'_, K> {
        Nodes {
            inner: self.storage.ids(),
        }
    }

    /// Removes all nodes and edges.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    pub(crate) fn storage(&self) -> &AdjList<K> {
        &self.storage
    }
}

impl<K: NodeId> Graph<K> {
    pub fn with_capacity(directed: bool, node_count: usize) -> Self {
        Self {
            storage: AdjList::with_capacity(node_count),
            directed,
        }
    }

    pub fn contains_node(&self, id: &K) -> bool {
        self.storage.position(id).is_some()
    }

    /// Returns `true` if `dst` is in the neighbors of `src`.
    pub fn contains_edge(&self, src: &K, dst: &K) -> bool {
        match (self.storage.position(src), self.storage.position(dst)) {
            (Some(src), Some(dst)) => self.storage.is_connected(src, dst),
            _ => false,
        }
    }

    /// Returns the neighbors of the node in the order their edges were added.
    /// The iterator is empty if the node does not exist.
    pub fn neighbors(&self, id: &K) -> Neighbors<'_, K> {
        let positions = match self.storage.position(id) {
            Some(pos) => self.storage.neighbors(pos),
            None => &[],
        };

        Neighbors {
            storage: &self.storage,
            positions: positions.iter(),
        }
    }

    /// Returns the length of the neighbor list of the node, `None` if the
    /// node does not exist.
    pub fn degree(&self, id: &K) -> Option<usize> {
        self.storage
            .position(id)
            .map(|pos| self.storage.neighbors(pos).len())
    }

    /// Adds a node without any edges. Returns `false` and does nothing if the
    /// node already exists.
    pub fn add_node(&mut self, id: K) -> bool {
        self.storage.insert(id).is_some()
    }

    pub fn extend_with_nodes<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = K>,
    {
        for id in iter {
            self.add_node(id);
        }
    }

    /// Adds an edge from `src` to `dst`, and from `dst` to `src` if the graph
    /// is undirected.
    ///
    /// Nothing happens if any of the nodes does not exist or the edge is
    /// already present. Returns `true` if any neighbor entry was added.
    pub fn add_edge(&mut self, src: &K, dst: &K) -> bool {
        self.try_add_edge(src, dst).unwrap_or_else(|error| {
            debug!(%error, "ignoring edge addition");
            false
        })
    }

    /// Like [`add_edge`](Graph::add_edge), but reports a missing endpoint.
    pub fn try_add_edge(&mut self, src: &K, dst: &K) -> Result<bool, GraphError<K>> {
        let (src, dst) = self.endpoints(src, dst)?;

        let mut added = self.storage.connect(src, dst);
        if !self.directed {
            added |= self.storage.connect(dst, src);
        }

        Ok(added)
    }

    pub fn extend_with_edges<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, K)>,
    {
        for (src, dst) in iter {
            self.add_edge(&src, &dst);
        }
    }

    /// Deletes the node and every edge incident to it, including the edges
    /// pointing to it. Returns `false` if the node does not exist.
    pub fn delete_node(&mut self, id: &K) -> bool {
        match self.try_delete_node(id) {
            Ok(_) => true,
            Err(error) => {
                debug!(%error, "ignoring node deletion");
                false
            }
        }
    }

    /// Like [`delete_node`](Graph::delete_node), but reports a missing node.
    /// Returns the removed identifier.
    pub fn try_delete_node(&mut self, id: &K) -> Result<K, GraphError<K>> {
        let pos = self
            .storage
            .position(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.clone()))?;

        Ok(self.storage.remove(pos))
    }

    /// Deletes the edge from `src` to `dst`, and from `dst` to `src` if the
    /// graph is undirected.
    ///
    /// Returns `true` if any neighbor entry was removed.
    pub fn delete_edge(&mut self, src: &K, dst: &K) -> bool {
        self.try_delete_edge(src, dst).unwrap_or_else(|error| {
            debug!(%error, "ignoring edge deletion");
            false
        })
    }

    /// Like [`delete_edge`](Graph::delete_edge), but reports a missing
    /// endpoint.
    pub fn try_delete_edge(&mut self, src: &K, dst: &K) -> Result<bool, GraphError<K>> {
        let (src, dst) = self.endpoints(src, dst)?;

        let mut removed = self.storage.disconnect(src, dst);
        if !self.directed {
            removed |= self.storage.disconnect(dst, src);
        }

        Ok(removed)
    }

    /// Returns a new graph with the same nodes in the same order and every
    /// edge reversed.
    ///
    /// The reversed edges are inserted node by node in the key order, each
    /// following the neighbor order of its source, so the neighbor order of
    /// the transposed graph is deterministic too.
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::with_capacity(self.directed, self.node_count());

        for id in self.storage.ids() {
            transposed.storage.insert(id.clone());
        }

        // Positions are shared since the key order is the same.
        for node in 0..self.storage.len() {
            for &next in self.storage.neighbors(node) {
                transposed.storage.connect(next, node);
                if !self.directed {
                    transposed.storage.connect(node, next);
                }
            }
        }

        transposed
    }

    /// Breadth-first traversal order from `start`. Empty if `start` does not
    /// exist.
    pub fn bfs(&self, start: &K) -> Vec<K> {
        self.traverse(Traversal::Bfs, start)
    }

    /// Depth-first traversal order from `start` produced with an explicit
    /// stack. Empty if `start` does not exist.
    pub fn dfs(&self, start: &K) -> Vec<K> {
        self.traverse(Traversal::Dfs, start)
    }

    /// Depth-first pre-order from `start` in the recursive formulation. Empty
    /// if `start` does not exist.
    ///
    /// The order is the one of a recursive descent, but it is computed
    /// without recursion. See [`visit::recursive_dfs`] for choosing the
    /// strategy.
    pub fn recursive_dfs(&self, start: &K) -> Vec<K> {
        self.traverse(Traversal::RecursiveDfs, start)
    }

    /// Runs the given traversal from `start`.
    pub fn traverse(&self, traversal: Traversal, start: &K) -> Vec<K> {
        visit::traverse(self, traversal, start)
    }

    /// Groups nodes by depth-first reachability, exploring from every not yet
    /// grouped node in the key order.
    pub fn find_connected_components(&self) -> Vec<Vec<K>> {
        ConnectedComponents::on(self).run().into_vec()
    }

    /// Strongly connected components found by Kosaraju's algorithm.
    pub fn kosaraju(&self) -> Vec<Vec<K>> {
        StronglyConnectedComponents::on(self).run().into_vec()
    }

    /// Reversed depth-first finishing order. The result is a valid
    /// topological order only if the graph is acyclic, which is not checked.
    pub fn topological_sort(&self) -> Vec<K> {
        TopoSort::on(self).run()
    }

    pub fn is_cycle(&self) -> bool {
        is_cyclic(self)
    }

    /// See [`tree::is_tree`].
    pub fn is_tree(&self) -> bool {
        tree::is_tree(self)
    }

    /// See [`tree::tree_center`].
    pub fn find_tree_center(&self) -> Vec<K> {
        tree::tree_center(self)
    }

    fn endpoints(&self, src: &K, dst: &K) -> Result<(usize, usize), GraphError<K>> {
        let src = self
            .storage
            .position(src)
            .ok_or_else(|| GraphError::EdgeEndpointMissing {
                endpoint: Endpoint::Source,
                id: src.clone(),
            })?;
        let dst = self
            .storage
            .position(dst)
            .ok_or_else(|| GraphError::EdgeEndpointMissing {
                endpoint: Endpoint::Destination,
                id: dst.clone(),
            })?;

        Ok((src, dst))
    }
}

impl<K> Default for Graph<K> {
    fn default() -> Self {
        Self::new_undirected()
    }
}

/// Iterator over the nodes of a graph, see [`Graph::nodes`].
pub struct Nodes<'a, K> {
    inner: Ids<'a, K>,
}

impl<'a, K> Iterator for Nodes<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> DoubleEndedIterator for Nodes<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K> ExactSizeIterator for Nodes<'_, K> {}

impl<K> FusedIterator for Nodes<'_, K> {}

/// Iterator over the neighbors of a node, see [`Graph::neighbors`].
pub struct Neighbors<'a, K> {
    storage: &'a AdjList<K>,
    positions: slice::Iter<'a, usize>,
}

impl<'a, K> Iterator for Neighbors<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.positions.next().map(|&pos| self.storage.id(pos))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl<K> ExactSizeIterator for Neighbors<'_, K> {}

impl<K> FusedIterator for Neighbors<'_, K> {}
