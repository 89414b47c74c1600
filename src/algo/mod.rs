/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the graph representation in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use sgraphs::algo::*;
```
and gain access to BFS traversal and connected-component discovery.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod connectivity;
mod traversal;

pub use connectivity::*;
pub use traversal::*;
