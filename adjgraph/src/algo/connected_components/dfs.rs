use fixedbitset::FixedBitSet;
use tracing::{debug, trace};

use crate::{
    core::NodeId,
    graph::Graph,
    visit::{raw::preorder, Strategy, VisitSet},
};

pub fn dfs<K: NodeId>(graph: &Graph<K>, strategy: Strategy) -> Vec<Vec<K>> {
    let storage = graph.storage();
    let mut visited = FixedBitSet::with_capacity(storage.len());
    let mut components = Vec::new();
    let mut order = Vec::new();

    for root in 0..storage.len() {
        if visited.is_visited(&root) {
            continue;
        }

        order.clear();
        preorder(storage, root, &mut visited, strategy, &mut order);

        let component = order
            .iter()
            .map(|&pos| storage.id(pos).clone())
            .collect::<Vec<_>>();

        trace!(?component, "found component");
        components.push(component);
    }

    debug!(count = components.len(), "connected components found");
    components
}
