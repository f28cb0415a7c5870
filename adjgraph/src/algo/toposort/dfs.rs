use fixedbitset::FixedBitSet;

use crate::{
    core::NodeId,
    graph::Graph,
    visit::{raw::postorder, Strategy, VisitSet},
};

pub fn dfs<K: NodeId>(graph: &Graph<K>, strategy: Strategy) -> Vec<K> {
    let storage = graph.storage();
    let mut visited = FixedBitSet::with_capacity(storage.len());
    let mut finished = Vec::with_capacity(storage.len());

    for root in 0..storage.len() {
        if !visited.is_visited(&root) {
            postorder(storage, root, &mut visited, strategy, &mut finished);
        }
    }

    finished
        .into_iter()
        .rev()
        .map(|pos| storage.id(pos).clone())
        .collect()
}
