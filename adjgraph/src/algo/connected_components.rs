//! Find (strongly) [connected] components in a graph.
//!
//! See available parameters [here](ConnectedComponentsBuilder#implementations)
//! or [here](StronglyConnectedComponentsBuilder#implementations).
//!
//! Components are reported in the order they are discovered, and nodes
//! within a component in depth-first pre-order. Both follow the insertion
//! order of nodes and edges.
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::{ConnectedComponents, StronglyConnectedComponents}, Graph};
//!
//! let mut graph = Graph::new_directed();
//! graph.extend_with_nodes(["a", "b", "c", "d"]);
//! graph.extend_with_edges([("a", "b"), ("b", "c"), ("c", "a")]);
//!
//! let components = ConnectedComponents::on(&graph).run();
//! assert_eq!(components.len(), 2);
//!
//! let scc = StronglyConnectedComponents::on(&graph).run();
//! assert_eq!(scc.into_vec(), vec![vec!["d"], vec!["a", "c", "b"]]);
//! ```
//!
//! [connected]: https://en.wikipedia.org/wiki/Connectivity_(graph_theory)

mod builder;
mod dfs;
mod kosaraju;

pub use builder::{ConnectedComponentsBuilder, StronglyConnectedComponentsBuilder};

/// Connected components of a graph.
///
/// On a directed graph, these are groups of nodes reachable from the first
/// node of the group that were not reached from an earlier group, not the
/// weakly connected components.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponents<K> {
    components: Vec<Vec<K>>,
}

/// Strongly connected components of a graph.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StronglyConnectedComponents<K> {
    inner: ConnectedComponents<K>,
}

impl<K> ConnectedComponents<K> {
    /// Returns the number of components.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns an iterator of the components.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            inner: self.components.iter(),
        }
    }

    pub fn into_vec(self) -> Vec<Vec<K>> {
        self.components
    }
}

impl<K> StronglyConnectedComponents<K> {
    /// Returns the number of components.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns an iterator of the components.
    pub fn iter(&self) -> Iter<'_, K> {
        self.inner.iter()
    }

    pub fn into_vec(self) -> Vec<Vec<K>> {
        self.inner.into_vec()
    }
}

pub struct Iter<'a, K> {
    inner: std::slice::Iter<'a, Vec<K>>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a [K];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|component| component.as_slice())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
