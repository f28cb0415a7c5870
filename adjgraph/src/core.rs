//! Node identifiers and error types shared by the graph and its algorithms.

pub mod error;
pub mod id;

pub use error::{Endpoint, GraphError};
pub use id::NodeId;
