//! Recognize [trees] and find their [centers].
//!
//! Everything in this module is meant for undirected graphs. Edges are
//! counted as reciprocal pairs of neighbor entries, so on a directed graph
//! the results have no meaning.
//!
//! [trees]: https://en.wikipedia.org/wiki/Tree_(graph_theory)
//! [centers]: https://en.wikipedia.org/wiki/Graph_center
//!
//! # Examples
//!
//! ```
//! use adjgraph::{algo::{is_tree, tree_center, TreeHierarchy}, Graph};
//!
//! let mut graph = Graph::new_undirected();
//! graph.extend_with_nodes(["a", "b", "c", "d", "e"]);
//! graph.extend_with_edges([("a", "b"), ("b", "c"), ("c", "d"), ("d", "e")]);
//!
//! assert!(is_tree(&graph));
//!
//! let center = tree_center(&graph);
//! assert_eq!(center, vec!["c"]);
//!
//! let hierarchy = TreeHierarchy::rooted_at(&graph, &center[0]).unwrap();
//! assert_eq!(hierarchy.children(&"c"), &["b", "d"]);
//! assert_eq!(hierarchy.height(), 2);
//! ```

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use tracing::debug;

use crate::{algo::is_cyclic, core::NodeId, graph::Graph, visit::VisitSet};

mod hierarchy;

pub use hierarchy::TreeHierarchy;

/// Returns `true` if the graph is a tree.
///
/// The graph must be non-empty, have one edge less than nodes and no cycle.
/// Connectivity follows from these two conditions and is not checked
/// separately.
pub fn is_tree<K: NodeId>(graph: &Graph<K>) -> bool {
    let storage = graph.storage();
    if storage.is_empty() {
        return false;
    }

    let edge_count = storage.degree_sum() / 2;
    edge_count == storage.len() - 1 && !is_cyclic(graph)
}

/// Returns the center of a tree: one node, or two adjacent nodes.
///
/// The center is found by repeatedly removing all current leaves until at
/// most two nodes remain. The result is empty for an empty graph. If the
/// graph is not a tree, the result is unspecified, but the function
/// terminates; call [`is_tree`] first when unsure.
pub fn tree_center<K: NodeId>(graph: &Graph<K>) -> Vec<K> {
    let storage = graph.storage();
    let count = storage.len();

    match count {
        0 => return Vec::new(),
        1 => return vec![storage.id(0).clone()],
        _ => {}
    }

    let mut degrees = (0..count)
        .map(|node| storage.neighbors(node).len())
        .collect::<Vec<_>>();
    let mut leaves = (0..count)
        .filter(|&node| degrees[node] == 1)
        .collect::<VecDeque<_>>();
    let mut processed = FixedBitSet::with_capacity(count);
    let mut remaining = count;

    while remaining > 2 {
        let layer = leaves.len();
        if layer == 0 {
            // Only cycles left, there is no center to peel towards.
            debug!(remaining, "no leaves left before reaching the center");
            return Vec::new();
        }

        remaining = remaining.saturating_sub(layer);

        for leaf in leaves.drain(..layer).collect::<Vec<_>>() {
            processed.visit(leaf);

            for &next in storage.neighbors(leaf) {
                if processed.is_visited(&next) || degrees[next] == 0 {
                    continue;
                }

                degrees[next] -= 1;
                if degrees[next] == 1 {
                    leaves.push_back(next);
                }
            }
        }
    }

    let center = leaves
        .into_iter()
        .map(|node| storage.id(node).clone())
        .collect::<Vec<_>>();

    debug!(?center, "tree center found");
    center
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use crate::infra::{proptest::tree, testing::create_path};

    use super::*;

    #[test]
    fn is_tree_path_then_triangle() {
        let mut graph = Graph::new_undirected();
        graph.extend_with_nodes(["A", "B", "C"]);
        graph.extend_with_edges([("A", "B"), ("B", "C")]);

        assert!(graph.is_tree());

        graph.add_edge(&"A", &"C");
        assert!(!graph.is_tree());
    }

    #[test]
    fn is_tree_edge_cases() {
        let mut graph = Graph::new_undirected();
        assert!(!is_tree(&graph));

        graph.add_node(0);
        assert!(is_tree(&graph));

        graph.add_node(1);
        assert!(!is_tree(&graph), "forest of two nodes");

        graph.add_edge(&0, &1);
        assert!(is_tree(&graph));
    }

    #[test]
    fn is_tree_disconnected_with_cycle() {
        // Right number of edges, but one component is a triangle.
        let mut graph = Graph::new_undirected();
        graph.extend_with_nodes(0..4);
        graph.extend_with_edges([(0, 1), (1, 2), (2, 0)]);

        assert!(!is_tree(&graph));
    }

    #[test]
    fn center_odd_path() {
        let graph = create_path(["A", "B", "C", "D", "E"], false);
        assert_eq!(graph.find_tree_center(), vec!["C"]);
    }

    #[test]
    fn center_even_path() {
        let graph = create_path(["A", "B", "C", "D"], false);
        let center = graph.find_tree_center().into_iter().collect::<BTreeSet<_>>();

        assert_eq!(center, BTreeSet::from(["B", "C"]));
    }

    #[test]
    fn center_star() {
        let mut graph = Graph::new_undirected();
        graph.extend_with_nodes(["l1", "hub", "l2", "l3"]);
        graph.extend_with_edges([("hub", "l1"), ("hub", "l2"), ("l3", "hub")]);

        assert_eq!(tree_center(&graph), vec!["hub"]);
    }

    #[test]
    fn center_small() {
        let mut graph = Graph::new_undirected();
        assert!(tree_center(&graph).is_empty());

        graph.add_node("a");
        assert_eq!(tree_center(&graph), vec!["a"]);

        graph.add_node("b");
        graph.add_edge(&"a", &"b");
        assert_eq!(tree_center(&graph), vec!["a", "b"]);
    }

    #[test]
    fn center_of_cycle_terminates() {
        let mut graph = Graph::new_undirected();
        graph.extend_with_nodes(0..4);
        graph.extend_with_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);

        assert!(tree_center(&graph).is_empty());
    }

    fn eccentricity(graph: &Graph<u32>, node: u32) -> usize {
        let mut distance = std::collections::HashMap::from([(node, 0usize)]);
        for current in graph.bfs(&node) {
            let d = distance[&current];
            for next in graph.neighbors(&current) {
                distance.entry(*next).or_insert(d + 1);
            }
        }
        distance.into_values().max().unwrap_or(0)
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_tree_center(graph in tree(32)) {
            prop_assert!(is_tree(&graph));

            let center = tree_center(&graph);
            prop_assert!(!center.is_empty() && center.len() <= 2);

            let best = graph.nodes().map(|&node| eccentricity(&graph, node)).min().unwrap_or(0);
            for node in center {
                prop_assert_eq!(eccentricity(&graph, node), best);
            }
        }
    }
}
