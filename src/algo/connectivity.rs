/*!
Connected-component discovery for undirected graphs.

Components are found by running a BFS to exhaustion and restarting it at the
lowest-numbered unvisited node, so the components of a graph are emitted in
ascending order of their smallest member.
*/

use std::iter::FusedIterator;

use crate::{algo::Bfs, error::Result, graph::Graph, node::Node};

/// Iterator over the connected components of a graph, one `Vec<Node>` at a
/// time. Node order within an emitted component follows the traversal;
/// [`Graph::all_connected_components`] sorts each component.
pub struct ConnectedComponents<'a> {
    bfs: Bfs<'a>,
}

impl<'a> ConnectedComponents<'a> {
    /// Creates the iterator for some graph. A graph without nodes has no
    /// components.
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            bfs: Bfs::unseeded(graph),
        }
    }
}

impl Iterator for ConnectedComponents<'_> {
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.bfs.try_restart_at_unvisited() {
            return None;
        }

        Some(self.bfs.by_ref().collect())
    }
}

impl FusedIterator for ConnectedComponents<'_> {}

impl Graph {
    /// Returns the connected component containing `start` as a sorted
    /// ascending list of nodes (always including `start` itself).
    ///
    /// # Errors
    /// Fails with `NodeOutOfRange` if `start >= n`.
    pub fn connected_component_of(&self, start: Node) -> Result<Vec<Node>> {
        self.check_node(start)?;

        let mut component: Vec<Node> = Bfs::new(self, start).collect();
        component.sort_unstable();
        Ok(component)
    }

    /// Returns an iterator over the connected components of the graph in
    /// ascending order of their smallest member.
    pub fn connected_components(&self) -> ConnectedComponents<'_> {
        ConnectedComponents::new(self)
    }

    /// Returns all connected components, each sorted ascending, ordered by
    /// their smallest member. Together they partition the node set.
    pub fn all_connected_components(&self) -> Vec<Vec<Node>> {
        self.connected_components()
            .map(|mut component| {
                component.sort_unstable();
                component
            })
            .collect()
    }

    /// Returns *true* if the graph has at most one connected component.
    /// Graphs with no or one node are trivially connected.
    pub fn is_connected(&self) -> bool {
        self.number_of_nodes() <= 1 || Bfs::new(self, 0).count() == self.len()
    }
}
