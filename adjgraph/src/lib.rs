//! Mutable graph with node identifiers chosen by the caller, backed by an
//! ordered adjacency list.
//!
//! Nodes keep their insertion order and neighbors the order in which their
//! edges were added, so every traversal and algorithm in this crate produces
//! deterministic results. That makes the results suitable for step-by-step
//! animation in a front end.
//!
//! ```
//! use adjgraph::{visit::Traversal, Graph};
//!
//! let mut graph = Graph::new_directed();
//! graph.extend_with_nodes(["shirt", "tie", "jacket", "belt", "trousers"]);
//! graph.extend_with_edges([
//!     ("shirt", "tie"),
//!     ("tie", "jacket"),
//!     ("shirt", "belt"),
//!     ("belt", "jacket"),
//!     ("trousers", "belt"),
//! ]);
//!
//! let traversal = "dfs".parse::<Traversal>().unwrap();
//! assert_eq!(
//!     graph.traverse(traversal, &"shirt"),
//!     vec!["shirt", "tie", "jacket", "belt"]
//! );
//! assert_eq!(
//!     graph.topological_sort(),
//!     vec!["trousers", "shirt", "belt", "tie", "jacket"]
//! );
//! ```

pub mod algo;
pub mod core;
pub mod graph;
pub mod infra;
pub(crate) mod storage;
pub mod visit;

pub use crate::{core::GraphError, graph::Graph};

pub mod prelude {
    #[doc(hidden)]
    pub use crate::visit::Visitor;
}
