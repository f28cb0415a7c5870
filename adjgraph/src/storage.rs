//! Backing storage of the [`Graph`](crate::graph::Graph).
//!
//! Nodes are addressed by their position in the key order. Positions are
//! stable only until the next node removal, which shifts every later node one
//! position down.

mod adj_list;

pub(crate) use adj_list::{AdjList, Ids};
