use std::hash::BuildHasherDefault;

use fixedbitset::FixedBitSet;
use rustc_hash::FxHashSet;

use crate::{core::NodeId, graph::Graph};

use super::{
    raw::{self, RawVisit, Stack},
    Strategy, VisitSet, Visitor,
};

/// Depth-first traversal in pre-order.
///
/// The order is the same as the one of a recursive descent that explores the
/// neighbors in the order their edges were added.
pub struct Dfs<K> {
    raw: RawVisit<K, Stack<K>>,
}

pub struct DfsRooted<'a, K> {
    raw: &'a mut RawVisit<K, Stack<K>>,
}

impl<K: NodeId> Dfs<K> {
    pub fn new(graph: &Graph<K>) -> Self {
        Self {
            raw: RawVisit::new(graph.node_count()),
        }
    }

    /// Starts the traversal from `root`. Nodes visited by previous starts are
    /// not visited again.
    pub fn start(&mut self, root: K) -> DfsRooted<'_, K> {
        self.raw.start(root);
        DfsRooted { raw: &mut self.raw }
    }

    pub fn reset(&mut self) {
        self.raw.reset();
    }

    pub fn visited(&self) -> &impl VisitSet<K> {
        &self.raw.visited
    }
}

impl<'a, K: NodeId> Visitor<K> for DfsRooted<'a, K> {
    type Item = K;

    fn visit_next(&mut self, graph: &Graph<K>) -> Option<Self::Item> {
        self.raw.next(graph)
    }
}

/// Depth-first traversal reporting nodes when their exploration is finished.
pub struct DfsPostOrder<K> {
    stack: Vec<K>,
    visited: FxHashSet<K>,
}

pub struct DfsPostOrderRooted<'a, K> {
    stack: &'a mut Vec<K>,
    visited: &'a mut FxHashSet<K>,
}

impl<K: NodeId> DfsPostOrder<K> {
    pub fn new(graph: &Graph<K>) -> Self {
        Self {
            stack: Vec::new(),
            visited: FxHashSet::with_capacity_and_hasher(
                graph.node_count(),
                BuildHasherDefault::default(),
            ),
        }
    }

    /// Starts the traversal from `root`. Nodes visited by previous starts are
    /// not visited again.
    pub fn start(&mut self, root: K) -> DfsPostOrderRooted<'_, K> {
        self.stack.clear();
        if self.visited.visit(root.clone()) {
            self.stack.push(root);
        }

        DfsPostOrderRooted {
            stack: &mut self.stack,
            visited: &mut self.visited,
        }
    }

    pub fn reset(&mut self) {
        self.stack.clear();
        self.visited.reset_visited();
    }

    pub fn visited(&self) -> &impl VisitSet<K> {
        &self.visited
    }
}

impl<'a, K: NodeId> Visitor<K> for DfsPostOrderRooted<'a, K> {
    type Item = K;

    fn visit_next(&mut self, graph: &Graph<K>) -> Option<Self::Item> {
        let storage = graph.storage();

        loop {
            let node = self.stack.last()?;

            let Some(pos) = storage.position(node) else {
                // Deleted before being finished.
                self.stack.pop();
                continue;
            };

            // Every examined neighbor is visited. The list is read afresh on
            // each step because deletions shift it.
            let next = storage
                .neighbors(pos)
                .iter()
                .map(|&next| storage.id(next))
                .find(|next| !self.visited.is_visited(*next));

            match next {
                Some(next) => {
                    self.visited.visit(next.clone());
                    self.stack.push(next.clone());
                }
                None => return self.stack.pop(),
            }
        }
    }
}

/// Depth-first pre-order from `start` in the recursive formulation, executed
/// with the given strategy. Empty if `start` does not exist.
///
/// # Examples
///
/// ```
/// use adjgraph::{visit::{recursive_dfs, Strategy}, Graph};
///
/// let mut graph = Graph::new_directed();
/// graph.extend_with_nodes([1, 2, 3, 4]);
/// graph.extend_with_edges([(1, 2), (1, 3), (2, 4), (3, 4)]);
///
/// let order = recursive_dfs(&graph, &1, Strategy::Recursive);
/// assert_eq!(order, vec![1, 2, 4, 3]);
/// assert_eq!(order, recursive_dfs(&graph, &1, Strategy::Iterative));
/// ```
pub fn recursive_dfs<K: NodeId>(graph: &Graph<K>, start: &K, strategy: Strategy) -> Vec<K> {
    let storage = graph.storage();

    let Some(root) = storage.position(start) else {
        return Vec::new();
    };

    let mut visited = FixedBitSet::with_capacity(storage.len());
    let mut order = Vec::new();
    raw::preorder(storage, root, &mut visited, strategy, &mut order);

    order
        .into_iter()
        .map(|pos| storage.id(pos).clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_graph() -> Graph<&'static str> {
        // a -> b -> d, a -> c -> d, d -> a, c -> e
        let mut graph = Graph::new_directed();
        graph.extend_with_nodes(["a", "b", "c", "d", "e"]);
        graph.extend_with_edges([
            ("a", "b"),
            ("a", "c"),
            ("b", "d"),
            ("c", "d"),
            ("d", "a"),
            ("c", "e"),
        ]);
        graph
    }

    #[test]
    fn preorder_matches_recursive() {
        let graph = create_graph();
        let iterative = Dfs::new(&graph).start("a").into_iter(&graph).collect::<Vec<_>>();

        assert_eq!(iterative, vec!["a", "b", "d", "c", "e"]);
        assert_eq!(iterative, recursive_dfs(&graph, &"a", Strategy::Recursive));
        assert_eq!(iterative, recursive_dfs(&graph, &"a", Strategy::Iterative));
    }

    #[test]
    fn absent_root() {
        let graph = create_graph();

        assert_eq!(Dfs::new(&graph).start("z").into_iter(&graph).count(), 0);
        assert_eq!(DfsPostOrder::new(&graph).start("z").into_iter(&graph).count(), 0);
        assert!(recursive_dfs(&graph, &"z", Strategy::Recursive).is_empty());
    }

    #[test]
    fn postorder() {
        let graph = create_graph();
        let finished = DfsPostOrder::new(&graph)
            .start("a")
            .into_iter(&graph)
            .collect::<Vec<_>>();

        assert_eq!(finished, vec!["d", "b", "e", "c", "a"]);
    }

    #[test]
    fn postorder_multiple_starts() {
        let mut graph = create_graph();
        graph.add_node("f");
        graph.add_edge(&"f", &"a");

        let mut dfs = DfsPostOrder::new(&graph);
        let first = dfs.start("c").into_iter(&graph).collect::<Vec<_>>();
        let second = dfs.start("f").into_iter(&graph).collect::<Vec<_>>();

        assert_eq!(first, vec!["b", "a", "d", "e", "c"]);
        assert_eq!(second, vec!["f"]);
    }

    #[test]
    fn postorder_deleted_while_open() {
        let mut graph = create_graph();

        let mut dfs = DfsPostOrder::new(&graph);
        let mut visitor = dfs.start("a");

        assert_eq!(visitor.visit_next(&graph), Some("d"));
        graph.delete_node(&"c");

        let rest = visitor.iter(&graph).collect::<Vec<_>>();
        assert_eq!(rest, vec!["b", "a"]);
    }

    #[test]
    fn postorder_finished_sibling_deleted() {
        let mut graph = Graph::new_directed();
        graph.extend_with_nodes(["a", "b", "c"]);
        graph.extend_with_edges([("a", "b"), ("a", "c")]);

        let mut dfs = DfsPostOrder::new(&graph);
        let mut visitor = dfs.start("a");

        assert_eq!(visitor.visit_next(&graph), Some("b"));
        graph.delete_node(&"b");

        let rest = visitor.iter(&graph).collect::<Vec<_>>();
        assert_eq!(rest, vec!["c", "a"]);
    }

    #[test]
    fn postorder_edge_added_while_open() {
        let mut graph = Graph::new_directed();
        graph.extend_with_nodes(["a", "b", "c"]);
        graph.add_edge(&"a", &"b");

        let mut dfs = DfsPostOrder::new(&graph);
        let mut visitor = dfs.start("a");

        assert_eq!(visitor.visit_next(&graph), Some("b"));
        graph.add_edge(&"a", &"c");

        let rest = visitor.iter(&graph).collect::<Vec<_>>();
        assert_eq!(rest, vec!["c", "a"]);
    }
}
