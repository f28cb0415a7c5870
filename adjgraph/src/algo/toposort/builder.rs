use crate::{core::NodeId, graph::Graph, visit::Strategy};

use super::{dfs::dfs, TopoSort};

/// Builder for [`TopoSort`].
pub struct TopoSortBuilder<'a, K> {
    graph: &'a Graph<K>,
    strategy: Strategy,
}

impl TopoSort {
    /// Starts configuring the algorithm on given graph.
    pub fn on<K>(graph: &Graph<K>) -> TopoSortBuilder<'_, K> {
        TopoSortBuilder {
            graph,
            strategy: Strategy::default(),
        }
    }
}

impl<'a, K> TopoSortBuilder<'a, K> {
    /// Computes the finishing order with an explicit stack.
    pub fn iterative(self) -> Self {
        self.using(Strategy::Iterative)
    }

    /// Computes the finishing order with recursion.
    pub fn recursive(self) -> Self {
        self.using(Strategy::Recursive)
    }

    pub fn using(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }

    /// Runs the algorithm and returns the sorted nodes.
    pub fn run(self) -> Vec<K>
    where
        K: NodeId,
    {
        dfs(self.graph, self.strategy)
    }
}
