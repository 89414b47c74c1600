//! # EdgeList
//!
//! The edge-list format consists of non-comment-lines `u v`, each
//! representing one undirected edge between the (possibly sparse) input node
//! ids `u` and `v`. Reading compacts the ids into `0..n`.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use fxhash::FxHashMap;

use crate::{
    edge::Edge,
    error::{GraphError, Result},
    graph::Graph,
    node::{Node, NumNodes},
};

/// A reader for the edge-list format.
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = c.into();
        self
    }

    /// Reads a graph from the given reader.
    ///
    /// The distinct node ids of the input are sorted and deduplicated; the
    /// i-th smallest id becomes node `i`. A file without any edge lines
    /// yields the empty graph. Lines of the form `x x` describe self-loops
    /// and are dropped; repeated edges are ignored.
    ///
    /// # Errors
    /// Fails with `Parse` (carrying the 1-based line number) if a kept line
    /// does not start with two parsable non-negative integers, and with `Io`
    /// if the underlying reader fails. No partial graph is ever returned.
    pub fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<Graph> {
        let mut raw_edges: Vec<(u64, u64)> = Vec::new();
        let mut ids: Vec<u64> = Vec::new();

        for (line_number, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() || line.starts_with(&self.comment_identifier) {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let u = parse_id(tokens.next(), line_number + 1)?;
            let v = parse_id(tokens.next(), line_number + 1)?;

            raw_edges.push((u, v));
            ids.push(u);
            ids.push(v);
        }

        if raw_edges.is_empty() {
            return Ok(Graph::default());
        }

        ids.sort_unstable();
        ids.dedup();

        let compact: FxHashMap<u64, Node> = ids
            .iter()
            .enumerate()
            .map(|(new_id, &id)| (id, new_id as Node))
            .collect();

        let mut graph = Graph::new(ids.len() as NumNodes);
        for (u_orig, v_orig) in raw_edges {
            let edge = Edge(compact[&u_orig], compact[&v_orig]);

            // drop self-loops; add_edge handles duplicates
            if !edge.is_loop() {
                graph.add_edge(edge.0, edge.1)?;
            }
        }

        Ok(graph)
    }

    /// Reads a graph from a file.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Fails with `Io` if the file cannot be opened and like
    /// [`EdgeListReader::try_read_graph`] otherwise.
    pub fn try_read_graph_file<P: AsRef<Path>>(&self, path: P) -> Result<Graph> {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Tries to parse one node-id token of the given 1-based input line
fn parse_id(token: Option<&str>, line: usize) -> Result<u64> {
    token
        .and_then(|t| t.parse().ok())
        .ok_or(GraphError::Parse { line })
}

/// A writer for the edge-list format.
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }

    /// Writes the graph to the provided writer, one `u v` line per edge with
    /// the smaller endpoint first.
    ///
    /// # Errors
    /// Fails with `Io` if writing fails.
    pub fn try_write_graph<W: Write>(&self, graph: &Graph, mut writer: W) -> Result<()> {
        for Edge(u, v) in graph.edges(true) {
            writeln!(writer, "{u} {v}")?;
        }

        Ok(())
    }

    /// Writes the graph to a file.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Fails with `Io` if the file cannot be created or if writing or the
    /// final flush fails.
    pub fn try_write_graph_file<P: AsRef<Path>>(&self, graph: &Graph, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_graph(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl Graph {
    /// Reads a graph from an edge-list file with default reader settings.
    ///
    /// # Errors
    /// Fails like [`EdgeListReader::try_read_graph_file`].
    pub fn from_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        EdgeListReader::default().try_read_graph_file(path)
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use itertools::Itertools;

    use super::*;

    fn read(input: &str) -> Result<Graph> {
        EdgeListReader::default().try_read_graph(Cursor::new(input))
    }

    #[test]
    fn reads_dense_input_with_comments_and_loops() {
        let graph = read("0 1\n1 2\n# comment\n3 3\n").unwrap();

        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(graph.number_of_edges(), 2);
        assert!(graph.has_edge(0, 1) && graph.has_edge(1, 2));
        assert!(!graph.has_edge(3, 3));
        assert_eq!(graph.all_connected_components(), [vec![0, 1, 2], vec![3]]);
    }

    #[test]
    fn compacts_sparse_node_ids() {
        // distinct ids 7 < 10 < 30 map to 0, 1, 2
        let graph = read("10 30\n30 7\n").unwrap();

        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 2);
        assert!(graph.has_edge(1, 2));
        assert!(graph.has_edge(2, 0));
        assert!(!graph.has_edge(0, 1));
    }

    #[test]
    fn skips_blanks_and_tolerates_trailing_tokens() {
        let graph = read("\n   \n\t0 1 weight=3\n1 2\n").unwrap();

        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn duplicate_edges_are_ignored() {
        let graph = read("0 1\n1 0\n0 1\n").unwrap();

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.as_neighbors_slice(0).unwrap(), [1]);
    }

    #[test]
    fn empty_input_yields_the_empty_graph() {
        let graph = read("").unwrap();
        assert!(graph.is_empty());

        let graph = read("# only comments\n\n").unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn malformed_lines_report_their_line_number() {
        assert!(matches!(read("abc\n"), Err(GraphError::Parse { line: 1 })));
        assert!(matches!(
            read("0 1\n# ok\n2\n"),
            Err(GraphError::Parse { line: 3 })
        ));
        assert!(matches!(
            read("0 1\n1 -2\n"),
            Err(GraphError::Parse { line: 2 })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = Graph::from_edge_list_file("/nonexistent/sgraphs-missing.txt");
        assert!(matches!(result, Err(GraphError::Io(_))));
    }

    #[test]
    fn custom_comment_identifier() {
        let reader = EdgeListReader::new().comment_identifier("c");
        let graph = reader.try_read_graph(Cursor::new("c header\n0 1\n")).unwrap();

        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn write_then_read_round_trips_the_edge_set() {
        let graph = Graph::from_edges(5, [(0, 3), (3, 1), (2, 4), (0, 4)]).unwrap();

        let mut buffer = Vec::new();
        EdgeListWriter::new().try_write_graph(&graph, &mut buffer).unwrap();

        let reread = read(std::str::from_utf8(&buffer).unwrap()).unwrap();

        assert_eq!(reread.number_of_nodes(), graph.number_of_nodes());
        assert_eq!(reread.number_of_edges(), graph.number_of_edges());
        assert_eq!(
            graph.edges(true).sorted().collect_vec(),
            reread.edges(true).sorted().collect_vec()
        );
    }
}
