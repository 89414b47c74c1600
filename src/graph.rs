/*!
# Graph Representation

An undirected simple graph over nodes `0..n` backed by one insertion-ordered
neighbor list per node. Every edge `{u, v}` is stored as a symmetric pair of
entries, so `number_of_edges` is always half the total neighbor-list length.
*/

use std::ops::Range;

use itertools::Itertools;
use smallvec::SmallVec;

use crate::{
    edge::{Edge, NumEdges},
    error::{GraphError, Result},
    node::{Node, NumNodes},
};

/// The neighbors of a single node, in insertion order.
///
/// Uses `SmallVec<[Node; 8]>` so the small neighborhoods of sparse graphs
/// stay inline without a heap allocation.
#[derive(Default, Clone)]
struct Neighbors(SmallVec<[Node; 8]>);

impl Neighbors {
    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn has_neighbor(&self, v: Node) -> bool {
        self.0.contains(&v)
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    /// Removes `u` while keeping the insertion order of the remaining neighbors.
    /// Returns *true* if `u` was present.
    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        if let Some((pos, _)) = self.0.iter().find_position(|&&x| x == u) {
            self.0.remove(pos);
            true
        } else {
            false
        }
    }

    fn reserve_total(&mut self, capacity: usize) {
        self.0.reserve(capacity.saturating_sub(self.0.len()));
    }

    fn as_slice(&self) -> &[Node] {
        &self.0
    }
}

/// An undirected simple graph with adjacency-list storage.
///
/// Nodes are `0..n`; the node set only ever grows (via [`Graph::add_node`])
/// until [`Graph::clear`] resets the graph. All node-indexed operations
/// validate their arguments and fail with a [`GraphError`] before touching
/// any state.
#[derive(Default, Clone)]
pub struct Graph {
    nbs: Vec<Neighbors>,
    num_edges: NumEdges,
}

impl Graph {
    /// Creates a graph with `n` nodes and no edges.
    pub fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Neighbors::default(); n as usize],
            num_edges: 0,
        }
    }

    /// Creates a graph with `n` nodes and all edges in the given collection.
    ///
    /// # Errors
    /// Fails like [`Graph::add_edge`]; duplicate edges are ignored.
    pub fn from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = Self::new(n);
        graph.add_edges(edges)?;
        Ok(graph)
    }

    /// Returns the number of nodes of the graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }

    /// Returns the number of nodes as usize
    pub fn len(&self) -> usize {
        self.nbs.len()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    pub fn is_empty(&self) -> bool {
        self.nbs.is_empty()
    }

    /// Returns the number of edges of the graph
    pub fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    /// Returns an iterator over V
    pub fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Fails with `NodeOutOfRange` unless `u < n`.
    pub(crate) fn check_node(&self, u: Node) -> Result<()> {
        if u < self.number_of_nodes() {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node: u,
                num_nodes: self.number_of_nodes(),
            })
        }
    }

    /// Adds the edge `{u, v}` to the graph.
    /// Returns *true* exactly if the edge was not present previously;
    /// adding an existing edge is a no-op.
    ///
    /// # Errors
    /// Fails with `NodeOutOfRange` if `u >= n || v >= n` and with `SelfLoop`
    /// if `u == v`. The graph is unmodified on failure.
    pub fn add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }

        if self.nbs[u as usize].has_neighbor(v) {
            return Ok(false);
        }

        self.nbs[u as usize].add_neighbor(v);
        self.nbs[v as usize].add_neighbor(u);
        self.num_edges += 1;
        Ok(true)
    }

    /// Adds all edges in the collection
    ///
    /// # Errors
    /// Fails like [`Graph::add_edge`]; duplicate edges are ignored.
    pub fn add_edges<I, E>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    /// Removes the edge `{u, v}` from the graph.
    /// Returns *true* exactly if the edge was present;
    /// removing a missing edge is a no-op.
    ///
    /// # Errors
    /// Fails with `NodeOutOfRange` if `u >= n || v >= n`.
    pub fn remove_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;

        if !self.nbs[u as usize].try_remove_neighbor(v) {
            return Ok(false);
        }

        let symmetric = self.nbs[v as usize].try_remove_neighbor(u);
        debug_assert!(symmetric);
        self.num_edges -= 1;
        Ok(true)
    }

    /// Appends a new isolated node and returns its id (the previous node count).
    pub fn add_node(&mut self) -> Node {
        self.nbs.push(Neighbors::default());
        self.number_of_nodes() - 1
    }

    /// Resets the graph to the empty state: no nodes, no edges, no storage.
    pub fn clear(&mut self) {
        self.nbs = Vec::new();
        self.num_edges = 0;
    }

    /// Hints the expected total neighbor count of `v`. Has no observable effect.
    ///
    /// # Errors
    /// Fails with `NodeOutOfRange` if `v >= n`.
    pub fn reserve_neighbors(&mut self, v: Node, capacity: usize) -> Result<()> {
        self.check_node(v)?;
        self.nbs[v as usize].reserve_total(capacity);
        Ok(())
    }

    /// Returns *true* if the edge `{u, v}` exists in the graph.
    /// Out-of-range arguments simply yield *false*, never an error.
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs
            .get(u as usize)
            .is_some_and(|nbs| nbs.has_neighbor(v))
    }

    /// Returns the number of neighbors of `u`.
    ///
    /// # Errors
    /// Fails with `NodeOutOfRange` if `u >= n`.
    pub fn degree_of(&self, u: Node) -> Result<NumNodes> {
        self.check_node(u)?;
        Ok(self.nbs[u as usize].num_of_neighbors())
    }

    /// Returns an iterator over the neighbors of `u` in insertion order.
    ///
    /// # Errors
    /// Fails with `NodeOutOfRange` if `u >= n`.
    pub fn neighbors_of(&self, u: Node) -> Result<impl Iterator<Item = Node> + '_> {
        Ok(self.as_neighbors_slice(u)?.iter().copied())
    }

    /// Returns a slice-reference of the neighbors of `u` in insertion order.
    /// The borrow is tied to the graph; any mutation invalidates it.
    ///
    /// # Errors
    /// Fails with `NodeOutOfRange` if `u >= n`.
    pub fn as_neighbors_slice(&self, u: Node) -> Result<&[Node]> {
        self.check_node(u)?;
        Ok(self.nbs[u as usize].as_slice())
    }

    /// Neighbor slice of a node that is already known to be valid.
    pub(crate) fn adjacency(&self, u: Node) -> &[Node] {
        self.nbs[u as usize].as_slice()
    }

    /// Returns an iterator over the degrees of all nodes
    pub fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.nbs.iter().map(Neighbors::num_of_neighbors)
    }

    /// Returns the maximum degree in the graph, or `0` if there are no nodes
    pub fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns the minimum degree in the graph, or `0` if there are no nodes
    pub fn min_degree(&self) -> NumNodes {
        self.degrees().min().unwrap_or(0)
    }

    /// Returns the average degree `2m / n`, or `0.0` if there are no nodes
    pub fn average_degree(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        2.0 * f64::from(self.num_edges) / self.len() as f64
    }

    /// Returns the ratio of present edges to the `n * (n - 1) / 2` possible
    /// ones, or `0.0` for graphs with fewer than two nodes
    pub fn density(&self) -> f64 {
        if self.len() < 2 {
            return 0.0;
        }
        let n = self.len() as f64;
        f64::from(self.num_edges) / (n * (n - 1.0) / 2.0)
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    pub fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| {
            self.adjacency(u)
                .iter()
                .map(move |&v| Edge(u, v))
                .filter(move |e| !only_normalized || e.is_normalized())
        })
    }
}
