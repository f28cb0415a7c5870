use crate::{core::NodeId, graph::Graph, visit::Strategy};

use super::{dfs::dfs_find, Cycle};

/// Builder for [`Cycle`].
pub struct CycleBuilder<'a, K> {
    graph: &'a Graph<K>,
    strategy: Strategy,
}

impl<K> Cycle<K> {
    /// Starts configuring the algorithm on given graph.
    pub fn on(graph: &Graph<K>) -> CycleBuilder<'_, K> {
        CycleBuilder {
            graph,
            strategy: Strategy::default(),
        }
    }
}

impl<'a, K> CycleBuilder<'a, K> {
    /// Searches with an explicit stack.
    pub fn iterative(self) -> Self {
        self.using(Strategy::Iterative)
    }

    /// Searches with recursion.
    pub fn recursive(self) -> Self {
        self.using(Strategy::Recursive)
    }

    pub fn using(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }

    /// Runs the algorithm and returns the first cycle found.
    pub fn run(self) -> Option<Cycle<K>>
    where
        K: NodeId,
    {
        dfs_find(self.graph, self.strategy)
    }
}
