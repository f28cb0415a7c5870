use fixedbitset::FixedBitSet;
use tracing::{debug, trace};

use crate::{
    core::NodeId,
    graph::Graph,
    visit::{
        raw::{postorder, preorder},
        Strategy, VisitSet,
    },
};

pub fn kosaraju<K: NodeId>(graph: &Graph<K>, strategy: Strategy) -> Vec<Vec<K>> {
    let storage = graph.storage();
    let mut visited = FixedBitSet::with_capacity(storage.len());
    let mut finished = Vec::with_capacity(storage.len());

    for root in 0..storage.len() {
        if !visited.is_visited(&root) {
            postorder(storage, root, &mut visited, strategy, &mut finished);
        }
    }

    // The transposed graph keeps the key order, so positions of the finished
    // nodes are valid in it as well.
    let transposed = graph.transpose();
    let storage = transposed.storage();

    visited.reset_visited();
    let mut components = Vec::new();
    let mut order = Vec::new();

    for &root in finished.iter().rev() {
        if visited.is_visited(&root) {
            continue;
        }

        order.clear();
        preorder(storage, root, &mut visited, strategy, &mut order);

        let component = order
            .iter()
            .map(|&pos| storage.id(pos).clone())
            .collect::<Vec<_>>();

        trace!(?component, "found strongly connected component");
        components.push(component);
    }

    debug!(count = components.len(), "strongly connected components found");
    components
}
