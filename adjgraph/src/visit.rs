//! Implementations of graph traversal methods.
//!
//! The visitors in this module ([`Bfs`], [`Dfs`], [`DfsPostOrder`]) are lazy
//! and **iterative**. They do not borrow the graph between steps, so the graph
//! can be mutated while a traversal is in progress; a node that is deleted
//! before it is reached is skipped.
//!
//! Neighbors are discovered in the order their edges were added. The
//! depth-first visitors push neighbors in reverse so that the first added
//! neighbor is explored first, which makes their order identical to the one
//! of a recursive descent.
//!
//! # Examples
//!
//! ```
//! use adjgraph::{visit::{Bfs, Visitor}, Graph};
//!
//! let mut graph = Graph::new_undirected();
//! graph.extend_with_nodes(["a", "b", "c", "d"]);
//! graph.extend_with_edges([("a", "b"), ("a", "c"), ("b", "d")]);
//!
//! let order = Bfs::new(&graph).start("a").into_iter(&graph).collect::<Vec<_>>();
//! assert_eq!(order, vec!["a", "b", "c", "d"]);
//! ```

pub mod bfs;
pub mod dfs;

pub(crate) mod raw;
mod traversal;
mod visit_set;

#[doc(inline)]
pub use self::{
    bfs::Bfs,
    dfs::{recursive_dfs, Dfs, DfsPostOrder},
    traversal::{traverse, ParseTraversalError, Traversal},
    visit_set::VisitSet,
};

use crate::graph::Graph;

/// Trait for a specific graph traversal approach.
#[doc(alias = "Walker")]
pub trait Visitor<K> {
    /// The type of the elements being visited.
    type Item;

    /// Advances the visitor and returns the next visited element in given
    /// graph.
    ///
    /// The difference from the [`Iterator::next`] is that the visitor doesn't
    /// hold a reference to the graph and thus allows modifications to the graph
    /// between individual visitor steps.
    ///
    /// # Examples
    ///
    /// ```
    /// use adjgraph::{visit::{Dfs, Visitor}, Graph};
    ///
    /// let mut graph = Graph::new_directed();
    /// graph.extend_with_nodes(["a", "b", "c"]);
    /// graph.extend_with_edges([("a", "b"), ("b", "c")]);
    ///
    /// let mut dfs = Dfs::new(&graph);
    /// let mut visitor = dfs.start("a");
    ///
    /// assert_eq!(visitor.visit_next(&graph), Some("a"));
    /// graph.delete_node(&"c");
    /// assert_eq!(visitor.visit_next(&graph), Some("b"));
    /// assert_eq!(visitor.visit_next(&graph), None);
    /// ```
    fn visit_next(&mut self, graph: &Graph<K>) -> Option<Self::Item>;

    /// Returns an [iterator](Iterator) that uses the visitor to iterate over
    /// the elements in given graph.
    fn iter<'a>(&'a mut self, graph: &'a Graph<K>) -> Iter<'a, Self, K>
    where
        Self: Sized,
    {
        Iter {
            visitor: self,
            graph,
        }
    }

    /// Converts the visitor into an [iterator](Iterator) to visit the elements
    /// in given graph.
    fn into_iter(self, graph: &Graph<K>) -> IntoIter<'_, Self, K>
    where
        Self: Sized,
    {
        IntoIter {
            visitor: self,
            graph,
        }
    }
}

/// Visitor iterator returned from [`Visitor::iter`].
pub struct Iter<'a, V, K> {
    visitor: &'a mut V,
    graph: &'a Graph<K>,
}

impl<'a, V, K> Iterator for Iter<'a, V, K>
where
    V: Visitor<K>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// Visitor iterator returned from [`Visitor::into_iter`].
pub struct IntoIter<'a, V, K> {
    visitor: V,
    graph: &'a Graph<K>,
}

impl<'a, V, K> Iterator for IntoIter<'a, V, K>
where
    V: Visitor<K>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// How a depth-first pass is executed.
///
/// Both strategies produce exactly the same order. The recursive one uses the
/// program stack and may overflow it on long paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Explicit stack on the heap.
    #[default]
    Iterative,
    /// Natural recursion.
    Recursive,
}
