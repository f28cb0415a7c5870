use proptest::{collection::vec, prelude::*, sample::Index};

use crate::graph::Graph;

/// Nodes `0..n` in this order, so that generated graphs and their shrunk
/// forms are easy to reproduce by hand.
fn build(node_count: usize, directed: bool, edges: Vec<(u32, u32)>) -> Graph<u32> {
    let mut graph = Graph::with_capacity(directed, node_count);
    graph.extend_with_nodes(0..node_count as u32);

    for (src, dst) in edges {
        if src != dst {
            graph.add_edge(&src, &dst);
        }
    }

    graph
}

fn graph(max_size: usize, directed: bool) -> impl Strategy<Value = Graph<u32>> {
    (0..=max_size)
        .prop_flat_map(|n| {
            // The range must not be empty even if there are no nodes.
            let node = 0..n.max(1) as u32;
            (Just(n), vec((node.clone(), node), 0..=2 * n))
        })
        .prop_map(move |(n, edges)| build(n, directed, edges))
}

/// Undirected graphs without self-loops of up to `max_size` nodes.
pub fn graph_undirected(max_size: usize) -> impl Strategy<Value = Graph<u32>> {
    graph(max_size, false)
}

/// Directed graphs without self-loops of up to `max_size` nodes.
pub fn graph_directed(max_size: usize) -> impl Strategy<Value = Graph<u32>> {
    graph(max_size, true)
}

/// Directed graphs where every edge goes from a smaller node to a larger one.
pub fn graph_acyclic(max_size: usize) -> impl Strategy<Value = Graph<u32>> {
    graph_directed(max_size).prop_map(|graph| {
        let mut acyclic = Graph::with_capacity(true, graph.node_count());
        acyclic.extend_with_nodes(graph.nodes().copied());

        for &src in graph.nodes() {
            for &dst in graph.neighbors(&src) {
                acyclic.add_edge(&src.min(dst), &src.max(dst));
            }
        }

        acyclic
    })
}

/// Undirected trees of 1 to `max_size` nodes, every node `i > 0` attached to
/// a random node smaller than `i`.
pub fn tree(max_size: usize) -> impl Strategy<Value = Graph<u32>> {
    (1..=max_size.max(1))
        .prop_flat_map(|n| (Just(n), vec(any::<Index>(), n - 1)))
        .prop_map(|(n, parents)| {
            let edges = parents
                .iter()
                .enumerate()
                .map(|(i, parent)| {
                    let node = i + 1;
                    (parent.index(node) as u32, node as u32)
                })
                .collect();

            build(n, false, edges)
        })
}
