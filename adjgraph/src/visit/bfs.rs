use crate::{core::NodeId, graph::Graph};

use super::{
    raw::{Queue, RawVisit},
    VisitSet, Visitor,
};

/// Breadth-first traversal.
pub struct Bfs<K> {
    raw: RawVisit<K, Queue<K>>,
}

pub struct BfsRooted<'a, K> {
    raw: &'a mut RawVisit<K, Queue<K>>,
}

impl<K: NodeId> Bfs<K> {
    pub fn new(graph: &Graph<K>) -> Self {
        Self {
            raw: RawVisit::new(graph.node_count()),
        }
    }

    /// Starts the traversal from `root`. Nodes visited by previous starts are
    /// not visited again.
    pub fn start(&mut self, root: K) -> BfsRooted<'_, K> {
        self.raw.start(root);
        BfsRooted { raw: &mut self.raw }
    }

    pub fn reset(&mut self) {
        self.raw.reset();
    }

    pub fn visited(&self) -> &impl VisitSet<K> {
        &self.raw.visited
    }
}

impl<'a, K: NodeId> Visitor<K> for BfsRooted<'a, K> {
    type Item = K;

    fn visit_next(&mut self, graph: &Graph<K>) -> Option<Self::Item> {
        self.raw.next(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_graph() -> Graph<&'static str> {
        let mut graph = Graph::new_undirected();
        graph.extend_with_nodes(["a", "b", "c", "d", "e"]);
        graph.extend_with_edges([("a", "c"), ("a", "b"), ("b", "d"), ("c", "d"), ("d", "e")]);
        graph
    }

    #[test]
    fn neighbor_order() {
        let graph = create_graph();
        let order = Bfs::new(&graph).start("a").into_iter(&graph).collect::<Vec<_>>();

        assert_eq!(order, vec!["a", "c", "b", "d", "e"]);
    }

    #[test]
    fn absent_root() {
        let graph = create_graph();
        let order = Bfs::new(&graph).start("z").into_iter(&graph).collect::<Vec<_>>();

        assert!(order.is_empty());
    }

    #[test]
    fn multiple_starts_share_visited() {
        let mut graph = create_graph();
        graph.add_node("f");
        graph.add_node("g");
        graph.add_edge(&"f", &"g");

        let mut bfs = Bfs::new(&graph);
        let first = bfs.start("a").into_iter(&graph).collect::<Vec<_>>();
        let again = bfs.start("e").into_iter(&graph).collect::<Vec<_>>();
        let other = bfs.start("g").into_iter(&graph).collect::<Vec<_>>();

        assert_eq!(first.len(), 5);
        assert!(again.is_empty());
        assert_eq!(other, vec!["g", "f"]);
        assert_eq!(bfs.visited().visited_count(), 7);

        bfs.reset();
        assert_eq!(bfs.visited().visited_count(), 0);
    }

    #[test]
    fn deleted_while_queued() {
        let mut graph = create_graph();

        let mut bfs = Bfs::new(&graph);
        let mut visitor = bfs.start("a");

        assert_eq!(visitor.visit_next(&graph), Some("a"));
        graph.delete_node(&"c");

        let rest = visitor.iter(&graph).collect::<Vec<_>>();
        assert_eq!(rest, vec!["b", "d", "e"]);
    }
}
