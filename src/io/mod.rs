/*!
# IO

Utilities for reading and writing graphs in the edge-list format.

## Format

A graph file is plain text with one edge per line: two whitespace-separated
non-negative integers `u v`. Lines are trimmed before interpretation; lines
that are empty after trimming or start with the comment identifier (`#` by
default) are skipped. There is no header line.

Node ids in a file need not be contiguous or zero-based: reading compacts the
distinct ids into `0..n` such that the i-th smallest id in the input becomes
node `i` (see [`EdgeListReader`]). Writing emits each edge once with its
smaller endpoint first (see [`EdgeListWriter`]).
*/

mod edge_list;

pub use edge_list::*;
