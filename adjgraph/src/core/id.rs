//! Identification of nodes in a graph.
//!
//! Nodes are identified by opaque values chosen by the caller, for example
//! strings minted by a user interface. The graph requires nothing from them
//! beyond what [`NodeId`] lists.

use std::{fmt::Debug, hash::Hash};

/// A value that identifies a node in a [`Graph`](crate::graph::Graph).
///
/// The trait is implemented for every type satisfying its super traits, so
/// `&str`, `String`, integers and custom key types can be used directly.
/// [`Debug`] is required so that ignored operations can be reported through
/// [`tracing`] and carried in [`GraphError`](crate::core::GraphError).
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Debug {}

#[cfg(test)]
mod tests {
    use super::*;

    fn require_node_id<K: NodeId>(_: K) {}

    #[test]
    fn common_types_are_node_ids() {
        require_node_id("node_0");
        require_node_id(String::from("node_1"));
        require_node_id(42u32);
        require_node_id((1usize, 'a'));
    }
}
