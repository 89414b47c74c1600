/*!
`sgraphs` is a data structure library for **s**imple undirected **graphs**:
- Nodes are numbered `0` to `n - 1`; neither nodes nor edges carry labels or weights.
- Edges are unordered pairs of *distinct* nodes; self-loops and multi-edges are not representable.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
As most common graphs do not exceed `2^32` nodes, this should normally suffice and save space as compared to `u64/usize`.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

[`Graph`](crate::graph::Graph) stores one insertion-ordered neighbor list per node.
Every edge `{u, v}` is kept as a symmetric pair of entries: `v` in the list of `u` and `u` in the list of `v`.
Mutations and node-indexed queries validate their arguments and return a [`Result`](crate::error::Result);
a failed operation never modifies the graph.

# Usage

There are *4* core submodules you probably want to interact with:
- [`graph`] defines the graph representation together with all mutation and degree/density queries,
- [`algo`] provides BFS traversal and connected-component discovery,
- [`io`] reads graphs from the edge-list format (compacting sparse node ids into `0..n`) and writes them back,
- [`rng`] provides a seeded random-number pool with independent per-slot generators for reproducible experiments.

In most use-cases, `use sgraphs::prelude::*;` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod graph;
pub mod io;
pub mod node;
pub mod rng;

/// `sgraphs::prelude` includes definitions for nodes and edges, the graph type,
/// its error type as well as the traversal and connectivity iterators.
pub mod prelude {
    pub use super::{algo::*, edge::*, error::*, graph::*, node::*};
}
