pub mod connected_components;
pub mod cycle;
pub mod toposort;
pub mod tree;

pub use crate::visit::Strategy;
pub use connected_components::{ConnectedComponents, StronglyConnectedComponents};
pub use cycle::{is_cyclic, Cycle};
pub use toposort::TopoSort;
pub use tree::{is_tree, tree_center, TreeHierarchy};
