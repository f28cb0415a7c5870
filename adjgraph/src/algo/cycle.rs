//! Find a [cycle] in a graph.
//!
//! See available parameters [here](CycleBuilder#implementations).
//!
//! The search is a depth-first search over all nodes that looks for an edge
//! to a node on the current search path. An edge going straight back to the
//! node the search came from is ignored, which is what makes the search work
//! on undirected graphs, where every edge is stored in both directions. The
//! same rule applies to directed graphs, so a cycle of two nodes (`a -> b ->
//! a`) is not reported there.
//!
//! [cycle]: https://en.wikipedia.org/wiki/Cycle_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::is_cyclic, Graph};
//!
//! let mut graph = Graph::new_undirected();
//! graph.extend_with_nodes(["a", "b", "c", "d"]);
//! graph.extend_with_edges([("a", "b"), ("b", "c"), ("c", "d")]);
//!
//! assert!(!is_cyclic(&graph));
//!
//! graph.add_edge(&"d", &"a");
//!
//! assert!(is_cyclic(&graph));
//! ```

use crate::{core::NodeId, graph::Graph};

mod builder;
mod dfs;

pub use builder::CycleBuilder;

/// Cycle in a graph.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle<K> {
    /// Node on the search path from which the closing edge leads.
    pub from: K,
    /// Node on the search path to which the closing edge leads.
    pub to: K,
}

impl<K> Cycle<K> {
    /// Returns the edge that closes the cycle.
    pub fn edge(&self) -> (&K, &K) {
        (&self.from, &self.to)
    }
}

/// Returns `true` if the graph is cyclic.
pub fn is_cyclic<K: NodeId>(graph: &Graph<K>) -> bool {
    Cycle::on(graph).run().is_some()
}
