use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{core::NodeId, graph::Graph};

use super::{recursive_dfs, Bfs, Dfs, Strategy, Visitor};

/// Traversal selectable by name, as offered to the user by a front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    Bfs,
    Dfs,
    RecursiveDfs,
}

impl Traversal {
    pub const ALL: [Traversal; 3] = [Traversal::Bfs, Traversal::Dfs, Traversal::RecursiveDfs];

    /// Human readable label, which is also accepted by [`FromStr`].
    pub fn label(&self) -> &'static str {
        match self {
            Traversal::Bfs => "BFS",
            Traversal::Dfs => "DFS",
            Traversal::RecursiveDfs => "Recursive DFS",
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown traversal `{0}`, expected one of BFS, DFS, Recursive DFS")]
pub struct ParseTraversalError(pub String);

impl FromStr for Traversal {
    type Err = ParseTraversalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .chars()
            .map(|c| match c {
                '_' | '-' => ' ',
                c => c.to_ascii_lowercase(),
            })
            .collect::<String>();

        match normalized.as_str() {
            "bfs" => Ok(Traversal::Bfs),
            "dfs" => Ok(Traversal::Dfs),
            "recursive dfs" => Ok(Traversal::RecursiveDfs),
            _ => Err(ParseTraversalError(s.to_owned())),
        }
    }
}

/// Runs the traversal from `start` and collects the visited nodes in order.
///
/// All traversals return an empty sequence if `start` does not exist.
pub fn traverse<K: NodeId>(graph: &Graph<K>, traversal: Traversal, start: &K) -> Vec<K> {
    let order = match traversal {
        Traversal::Bfs => Bfs::new(graph)
            .start(start.clone())
            .into_iter(graph)
            .collect::<Vec<_>>(),
        Traversal::Dfs => Dfs::new(graph)
            .start(start.clone())
            .into_iter(graph)
            .collect(),
        Traversal::RecursiveDfs => recursive_dfs(graph, start, Strategy::default()),
    };

    tracing::debug!(%traversal, ?start, visited = order.len(), "traversal finished");
    order
}
