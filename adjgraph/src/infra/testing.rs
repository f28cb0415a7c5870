use thiserror::Error;

use crate::{core::NodeId, graph::Graph};

/// Creates a path visiting the nodes in the given order.
pub fn create_path<K, I>(ids: I, directed: bool) -> Graph<K>
where
    K: NodeId,
    I: IntoIterator<Item = K>,
{
    let ids = ids.into_iter().collect::<Vec<_>>();
    let mut graph = Graph::with_capacity(directed, ids.len());
    graph.extend_with_nodes(ids.iter().cloned());

    for pair in ids.windows(2) {
        graph.add_edge(&pair[0], &pair[1]);
    }

    graph
}

/// Creates a path that is closed by an edge from the last node to the first
/// one.
pub fn create_cycle<K, I>(ids: I, directed: bool) -> Graph<K>
where
    K: NodeId,
    I: IntoIterator<Item = K>,
{
    let ids = ids.into_iter().collect::<Vec<_>>();
    let mut graph = create_path(ids.iter().cloned(), directed);

    if let (Some(first), Some(last)) = (ids.first(), ids.last()) {
        graph.add_edge(last, first);
    }

    graph
}

/// Creates a graph with an edge between every pair of distinct nodes, in both
/// directions if the graph is directed.
pub fn create_complete(node_count: usize, directed: bool) -> Graph<usize> {
    let mut graph = Graph::with_capacity(directed, node_count);
    graph.extend_with_nodes(0..node_count);

    for u in 0..node_count {
        for v in 0..node_count {
            if u == v {
                continue;
            }

            if !directed && v > u {
                break;
            }

            graph.add_edge(&u, &v);
        }
    }

    graph
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("nodes iterator count ({0}) is not equal to node count ({1})")]
    NodesNodeCountMismatch(usize, usize),
    #[error("node at position {0} is looked up at position {1:?}")]
    PositionMismatch(usize, Option<usize>),
    #[error("node at position {0} has neighbor position {1} out of bounds")]
    NeighborOutOfBounds(usize, usize),
    #[error("node at position {0} has neighbor at position {1} more than once")]
    DuplicateNeighbor(usize, usize),
    #[error("edge from position {0} to position {1} has no reverse in undirected graph")]
    MissingReverseEdge(usize, usize),
    #[error("counted edges ({0}) are not equal to edge count ({1})")]
    EdgeCountMismatch(usize, usize),
}

/// Checks that the lookup table and the neighbor lists of the graph agree.
pub fn check_consistency<K: NodeId>(graph: &Graph<K>) -> Result<(), ConsistencyCheckError> {
    use ConsistencyCheckError::*;

    let storage = graph.storage();
    let node_count = graph.node_count();

    if graph.nodes().count() != node_count {
        return Err(NodesNodeCountMismatch(graph.nodes().count(), node_count));
    }

    for node in 0..storage.len() {
        let found = storage.position(storage.id(node));
        if found != Some(node) {
            return Err(PositionMismatch(node, found));
        }

        let neighbors = storage.neighbors(node);
        for (i, &next) in neighbors.iter().enumerate() {
            if next >= node_count {
                return Err(NeighborOutOfBounds(node, next));
            }

            if neighbors[..i].contains(&next) {
                return Err(DuplicateNeighbor(node, next));
            }

            if !graph.is_directed() && !storage.is_connected(next, node) {
                return Err(MissingReverseEdge(node, next));
            }
        }
    }

    // An undirected edge is counted from its endpoint that comes first in the
    // key order. The reverse entry is known to exist from the check above.
    let counted = (0..storage.len())
        .map(|node| {
            storage
                .neighbors(node)
                .iter()
                .filter(|&&next| graph.is_directed() || node <= next)
                .count()
        })
        .sum::<usize>();

    if counted != graph.edge_count() {
        return Err(EdgeCountMismatch(counted, graph.edge_count()));
    }

    Ok(())
}
