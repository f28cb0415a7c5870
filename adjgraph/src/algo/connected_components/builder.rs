use crate::{core::NodeId, graph::Graph, visit::Strategy};

use super::{dfs::dfs, kosaraju::kosaraju, ConnectedComponents, StronglyConnectedComponents};

/// Builder for [`ConnectedComponents`].
pub struct ConnectedComponentsBuilder<'a, K> {
    graph: &'a Graph<K>,
    strategy: Strategy,
}

/// Builder for [`StronglyConnectedComponents`].
pub struct StronglyConnectedComponentsBuilder<'a, K> {
    graph: &'a Graph<K>,
    strategy: Strategy,
}

impl<K> ConnectedComponents<K> {
    /// Starts configuring the algorithm on given graph.
    pub fn on(graph: &Graph<K>) -> ConnectedComponentsBuilder<'_, K> {
        ConnectedComponentsBuilder {
            graph,
            strategy: Strategy::default(),
        }
    }
}

impl<K> StronglyConnectedComponents<K> {
    /// Starts configuring the algorithm on given graph.
    pub fn on(graph: &Graph<K>) -> StronglyConnectedComponentsBuilder<'_, K> {
        StronglyConnectedComponentsBuilder {
            graph,
            strategy: Strategy::default(),
        }
    }
}

impl<'a, K> ConnectedComponentsBuilder<'a, K> {
    /// Explores the components with an explicit stack.
    pub fn iterative(self) -> Self {
        self.using(Strategy::Iterative)
    }

    /// Explores the components with recursion.
    pub fn recursive(self) -> Self {
        self.using(Strategy::Recursive)
    }

    pub fn using(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }

    /// Runs the algorithm.
    pub fn run(self) -> ConnectedComponents<K>
    where
        K: NodeId,
    {
        ConnectedComponents {
            components: dfs(self.graph, self.strategy),
        }
    }
}

impl<'a, K> StronglyConnectedComponentsBuilder<'a, K> {
    /// Runs both passes with an explicit stack.
    pub fn iterative(self) -> Self {
        self.using(Strategy::Iterative)
    }

    /// Runs both passes with recursion.
    pub fn recursive(self) -> Self {
        self.using(Strategy::Recursive)
    }

    pub fn using(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }

    /// Runs the algorithm.
    pub fn run(self) -> StronglyConnectedComponents<K>
    where
        K: NodeId,
    {
        StronglyConnectedComponents {
            inner: ConnectedComponents {
                components: kosaraju(self.graph, self.strategy),
            },
        }
    }
}
