//! Find a [topologically sorted] collection of nodes on a [directed acyclic
//! graph] (DAG).
//!
//! See available parameters [here](TopoSortBuilder#implementations).
//!
//! The order is the reversed depth-first finishing order over all nodes,
//! exploring from every not yet visited node in the insertion order.
//! Acyclicity is **not** checked. On a graph with a cycle the result still
//! contains every node exactly once, but some edges point backwards; use
//! [`is_cyclic`](crate::algo::is_cyclic) first if that matters.
//!
//! [topologically sorted]: https://en.wikipedia.org/wiki/Topological_sorting
//! [directed acyclic graph]:
//!     https://en.wikipedia.org/wiki/Directed_acyclic_graph
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::TopoSort, Graph};
//!
//! let mut dependency_tree = Graph::new_directed();
//!
//! dependency_tree.extend_with_nodes([
//!     "cargo",
//!     "cargo_credential",
//!     "serde",
//!     "serde_json",
//!     "time",
//!     "cargo_util",
//!     "libc",
//! ]);
//!
//! // Edge direction in "must be compiled before" relation.
//! dependency_tree.extend_with_edges([
//!     ("cargo_credential", "cargo"),
//!     ("serde", "cargo_credential"),
//!     ("serde_json", "cargo_credential"),
//!     ("serde", "serde_json"),
//!     ("time", "cargo_credential"),
//!     ("libc", "time"),
//!     ("serde", "time"),
//!     ("cargo_util", "cargo"),
//!     ("libc", "cargo_util"),
//! ]);
//!
//! let order = TopoSort::on(&dependency_tree).run();
//! assert_eq!(order.first(), Some(&"libc"));
//! assert_eq!(order.last(), Some(&"cargo"));
//! ```

mod builder;
mod dfs;

pub use builder::TopoSortBuilder;

/// Marker type for the topological sort algorithm.
///
/// See [module](self) documentation for more details and example.
pub struct TopoSort;

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        algo::{is_cyclic, Strategy},
        core::NodeId,
        graph::Graph,
        infra::proptest::graph_acyclic,
    };

    use super::*;

    fn assert_valid<K: NodeId>(order: &[K], graph: &Graph<K>) {
        assert_eq!(order.len(), graph.node_count(), "not all nodes are sorted");

        let position = |id: &K| order.iter().position(|other| other == id);

        for src in graph.nodes() {
            for dst in graph.neighbors(src) {
                assert!(
                    position(src) < position(dst),
                    "edge {src:?} -> {dst:?} points backwards"
                );
            }
        }
    }

    fn create_dag() -> Graph<&'static str> {
        let mut graph = Graph::new_directed();
        graph.extend_with_nodes(["a", "b", "c", "d", "e", "f"]);
        graph.extend_with_edges([
            ("d", "b"),
            ("a", "b"),
            ("b", "c"),
            ("e", "f"),
            ("a", "e"),
            ("f", "c"),
        ]);
        graph
    }

    #[test]
    fn dag() {
        let graph = create_dag();
        let order = TopoSort::on(&graph).run();

        assert_eq!(order, vec!["d", "a", "e", "f", "b", "c"]);
        assert_valid(&order, &graph);
    }

    #[test]
    fn empty() {
        let graph = Graph::<u32>::new_directed();
        assert!(TopoSort::on(&graph).run().is_empty());
    }

    #[test]
    fn cyclic_still_contains_all_nodes() {
        let mut graph = Graph::new_directed();
        graph.extend_with_nodes([0, 1, 2, 3]);
        graph.extend_with_edges([(0, 1), (1, 2), (2, 0), (2, 3)]);

        let mut order = graph.topological_sort();
        assert_eq!(order, vec![0, 1, 2, 3]);

        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn strategies_agree() {
        let graph = create_dag();

        assert_eq!(
            TopoSort::on(&graph).recursive().run(),
            TopoSort::on(&graph).iterative().run()
        );
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_toposort_acyclic(graph in graph_acyclic(24)) {
            prop_assert!(!is_cyclic(&graph));

            let order = TopoSort::on(&graph).using(Strategy::Iterative).run();
            prop_assert_eq!(&order, &TopoSort::on(&graph).using(Strategy::Recursive).run());
            assert_valid(&order, &graph);
        }
    }
}
