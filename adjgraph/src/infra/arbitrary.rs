use std::fmt;

use arbitrary::Arbitrary;

use crate::{core::GraphError, graph::Graph};

/// Mutation of a graph keyed by small integers, so that random sequences hit
/// existing nodes often.
#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq)]
pub enum MutOp {
    AddNode(u8),
    DeleteNode(u8),
    AddEdge(u8, u8),
    DeleteEdge(u8, u8),
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutOpResult {
    AddNode(bool),
    DeleteNode(Result<u8, GraphError<u8>>),
    AddEdge(Result<bool, GraphError<u8>>),
    DeleteEdge(Result<bool, GraphError<u8>>),
    Clear,
}

impl MutOp {
    pub fn apply(self, graph: &mut Graph<u8>) -> MutOpResult {
        match self {
            MutOp::AddNode(id) => MutOpResult::AddNode(graph.add_node(id)),
            MutOp::DeleteNode(id) => MutOpResult::DeleteNode(graph.try_delete_node(&id)),
            MutOp::AddEdge(src, dst) => MutOpResult::AddEdge(graph.try_add_edge(&src, &dst)),
            MutOp::DeleteEdge(src, dst) => {
                MutOpResult::DeleteEdge(graph.try_delete_edge(&src, &dst))
            }
            MutOp::Clear => {
                graph.clear();
                MutOpResult::Clear
            }
        }
    }
}

#[derive(Arbitrary)]
pub struct MutOpsSeq(pub Vec<MutOp>);

impl IntoIterator for MutOpsSeq {
    type Item = MutOp;
    type IntoIter = std::vec::IntoIter<MutOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl MutOpsSeq {
    /// Applies the operations while printing them as code that can be pasted
    /// into a test.
    pub fn replay(self, graph: &mut Graph<u8>) {
        println!("let mut graph = Graph::new({});", graph.is_directed());
        println!();

        for op in self {
            match op {
                MutOp::AddNode(id) => println!("graph.add_node({id});"),
                MutOp::DeleteNode(id) => println!("graph.delete_node(&{id});"),
                MutOp::AddEdge(src, dst) => println!("graph.add_edge(&{src}, &{dst});"),
                MutOp::DeleteEdge(src, dst) => println!("graph.delete_edge(&{src}, &{dst});"),
                MutOp::Clear => println!("graph.clear();"),
            }

            op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl fmt::Debug for MutOpsSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut graph);")?;
        writeln!(f)?;
        writeln!(f, "// use `cargo test fuzz_replay_mut_ops_seq`")
    }
}

#[cfg(test)]
mod tests {
    use arbitrary::Unstructured;
    use assert_matches::assert_matches;

    use crate::{core::Endpoint, infra::testing::check_consistency};

    use super::*;

    #[test]
    fn apply_reports_missing_nodes() {
        let mut graph = Graph::new_undirected();

        assert_eq!(MutOp::AddNode(1).apply(&mut graph), MutOpResult::AddNode(true));
        assert_eq!(MutOp::AddNode(1).apply(&mut graph), MutOpResult::AddNode(false));
        assert_matches!(
            MutOp::AddEdge(1, 2).apply(&mut graph),
            MutOpResult::AddEdge(Err(GraphError::EdgeEndpointMissing {
                endpoint: Endpoint::Destination,
                id: 2
            }))
        );
        assert_eq!(
            MutOp::DeleteNode(3).apply(&mut graph),
            MutOpResult::DeleteNode(Err(GraphError::NodeNotFound(3)))
        );
        assert_eq!(
            MutOp::DeleteNode(1).apply(&mut graph),
            MutOpResult::DeleteNode(Ok(1))
        );
    }

    #[test]
    fn fuzz_replay_mut_ops_seq() {
        let mut graph = Graph::new_undirected();

        MutOpsSeq(vec![
            MutOp::AddNode(0),
            MutOp::AddNode(1),
            MutOp::AddNode(2),
            MutOp::AddEdge(0, 1),
            MutOp::AddEdge(2, 1),
            MutOp::AddEdge(2, 2),
            MutOp::DeleteEdge(1, 0),
            MutOp::DeleteNode(1),
            MutOp::AddEdge(0, 2),
        ])
        .replay(&mut graph);

        check_consistency(&graph).unwrap();
        assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn random_sequences_keep_graph_consistent() {
        let mut rng = fastrand::Rng::with_seed(0x2545_f491);
        let data = (0..4096).map(|_| rng.u8(..)).collect::<Vec<_>>();

        let mut unstructured = Unstructured::new(&data);
        let ops = MutOpsSeq::arbitrary(&mut unstructured).unwrap();

        let mut graph = Graph::new_undirected();
        for op in ops {
            op.apply(&mut graph);
            check_consistency(&graph).unwrap();
        }
    }
}
