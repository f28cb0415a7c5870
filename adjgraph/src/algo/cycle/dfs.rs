use fixedbitset::FixedBitSet;
use tracing::debug;

use crate::{
    core::NodeId,
    graph::Graph,
    storage::AdjList,
    visit::{Strategy, VisitSet},
};

use super::Cycle;

pub fn dfs_find<K: NodeId>(graph: &Graph<K>, strategy: Strategy) -> Option<Cycle<K>> {
    let storage = graph.storage();
    let mut search = Search {
        storage,
        visited: FixedBitSet::with_capacity(storage.len()),
        on_path: FixedBitSet::with_capacity(storage.len()),
    };

    let mut found = None;
    for root in 0..storage.len() {
        if search.visited.is_visited(&root) {
            continue;
        }

        found = match strategy {
            Strategy::Iterative => search.iterative(root),
            Strategy::Recursive => search.recursive(root, None),
        };

        if found.is_some() {
            break;
        }
    }

    let (from, to) = found?;

    let cycle = Cycle {
        from: storage.id(from).clone(),
        to: storage.id(to).clone(),
    };

    debug!(from = ?cycle.from, to = ?cycle.to, "cycle found");
    Some(cycle)
}

struct Search<'a, K> {
    storage: &'a AdjList<K>,
    visited: FixedBitSet,
    // Nodes on the path from the root of the search to the current node.
    on_path: FixedBitSet,
}

#[derive(Clone, Copy)]
struct Frame {
    node: usize,
    parent: Option<usize>,
    cursor: usize,
}

impl<K> Search<'_, K> {
    fn recursive(&mut self, node: usize, parent: Option<usize>) -> Option<(usize, usize)> {
        self.visited.visit(node);
        self.on_path.visit(node);

        for &next in self.storage.neighbors(node) {
            if Some(next) == parent {
                continue;
            }

            if !self.visited.is_visited(&next) {
                if let Some(edge) = self.recursive(next, Some(node)) {
                    return Some(edge);
                }
            } else if self.on_path.is_visited(&next) {
                return Some((node, next));
            }
        }

        self.on_path.set(node, false);
        None
    }

    fn iterative(&mut self, root: usize) -> Option<(usize, usize)> {
        self.visited.visit(root);
        self.on_path.visit(root);

        let mut stack = vec![Frame {
            node: root,
            parent: None,
            cursor: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Frame {
                node,
                parent,
                cursor,
            } = *frame;

            match self.storage.neighbors(node).get(cursor) {
                Some(&next) => {
                    frame.cursor += 1;

                    if Some(next) == parent {
                        continue;
                    }

                    if self.visited.visit(next) {
                        self.on_path.visit(next);
                        stack.push(Frame {
                            node: next,
                            parent: Some(node),
                            cursor: 0,
                        });
                    } else if self.on_path.is_visited(&next) {
                        return Some((node, next));
                    }
                }
                None => {
                    self.on_path.set(node, false);
                    stack.pop();
                }
            }
        }

        None
    }
}
