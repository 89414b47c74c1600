/*!
Breadth-first traversal over the symmetric adjacency of a [`Graph`].

The traversal is an iterator: nodes enter the frontier at most once (they are
marked visited when pushed, not when popped) and are yielded in breadth-first
order. An exhausted traversal can be re-seeded at the lowest-numbered
unvisited node, which is the building block of the connected-components
iterator in [`super::connectivity`].
*/

use std::collections::VecDeque;

use crate::{
    graph::Graph,
    node::{Node, NodeBitSet},
};

/// A breadth-first search iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub struct Bfs<'a> {
    graph: &'a Graph,
    visited: NodeBitSet,
    queue: VecDeque<Node>,
}

impl<'a> Bfs<'a> {
    /// Creates a new traversal starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a Graph, start: Node) -> Self {
        assert!(start < graph.number_of_nodes());

        let mut bfs = Self::unseeded(graph);
        bfs.visited.set_bit(start);
        bfs.queue.push_back(start);
        bfs
    }

    /// Creates an exhausted traversal with an empty frontier; combined with
    /// [`Bfs::try_restart_at_unvisited`] it sweeps the whole graph.
    pub(crate) fn unseeded(graph: &'a Graph) -> Self {
        Self {
            graph,
            visited: NodeBitSet::new(graph.number_of_nodes()),
            queue: VecDeque::new(),
        }
    }

    /// Tries to restart the search at the lowest-numbered yet unvisited node
    /// and returns *true* iff successful. Requires that the search came to a
    /// hold earlier, i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert!(self.queue.is_empty());
        match self.graph.vertices().find(|&u| !self.visited.get_bit(u)) {
            Some(u) => {
                self.visited.set_bit(u);
                self.queue.push_back(u);
                true
            }
            None => false,
        }
    }
}

impl Iterator for Bfs<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for &v in self.graph.adjacency(u) {
            // set_bit reports the previous value, so this pushes v only once
            if !self.visited.set_bit(v) {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let unvisited = self.graph.len() - self.visited.cardinality() as usize;
        (self.queue.len(), Some(self.queue.len() + unvisited))
    }
}
