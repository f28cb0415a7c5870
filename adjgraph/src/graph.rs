mod generic;

pub use generic::{Graph, Neighbors, Nodes};
