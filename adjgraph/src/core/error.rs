use std::fmt;

use thiserror::Error;

/// Reason why a mutation of the graph could not be performed.
///
/// Plain mutation methods of [`Graph`](crate::graph::Graph) treat these as
/// no-ops. The `try_*` variants report them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError<K> {
    #[error("node {0:?} does not exist")]
    NodeNotFound(K),
    #[error("edge {endpoint} {id:?} does not exist")]
    EdgeEndpointMissing { endpoint: Endpoint, id: K },
}

impl<K> GraphError<K> {
    /// Returns the identifier that was not found in the graph.
    pub fn id(&self) -> &K {
        match self {
            GraphError::NodeNotFound(id) => id,
            GraphError::EdgeEndpointMissing { id, .. } => id,
        }
    }
}

/// Endpoint of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Source,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Endpoint::Source => "source",
            Endpoint::Destination => "destination",
        };
        f.write_str(name)
    }
}
