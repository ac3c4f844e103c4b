//! Dual-graph text parser.
//!
//! Turns one text blob into the ordered pair (query, target) consumed by the
//! matching backends. Parsing is a pure function of the text: no partial
//! graph is ever returned, and every failure names the graph, row and column
//! at fault.
//!
//! ## Usage
//!
//! ```
//! # use gemx_parser::parse_data;
//! # fn main() -> Result<(), gemx_parser::ParseError> {
//! let pair = parse_data("2\n0 1\n0 0\n2\n1 0\n0 1\n")?;
//! assert_eq!(pair.query.edge_count(), 1);
//! assert_eq!(pair.target.edge_count(), 2);
//! # Ok(())
//! # }
//! ```

mod adjacency;
mod error;

use std::fmt;
use std::path::Path;

use gemx_graph::Graph;
use tracing::info;

pub use crate::error::ParseError;

/// Result alias for parser operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// The two graphs described by one input text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphPair {
    /// First graph of the input, the pattern to look for.
    pub query: Graph,
    /// Second graph of the input, the graph searched in.
    pub target: Graph,
}

impl GraphPair {
    /// Splits the pair into `(query, target)`.
    #[must_use]
    pub fn into_tuple(self) -> (Graph, Graph) {
        (self.query, self.target)
    }
}

/// Supported dual-graph text grammars.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputFormat {
    /// Vertex count header followed by a square 0/1 adjacency matrix, twice.
    #[default]
    AdjacencyMatrix,
}

impl InputFormat {
    /// Every supported format.
    pub const ALL: [Self; 1] = [Self::AdjacencyMatrix];

    /// Stable, user-facing name of the format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AdjacencyMatrix => "adjacency-matrix",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses in-memory text with the given grammar.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered.
pub fn parse_with_format(format: InputFormat, data: &str) -> Result<GraphPair> {
    match format {
        InputFormat::AdjacencyMatrix => adjacency::parse(data),
    }
}

/// Parses in-memory adjacency-matrix text.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered.
pub fn parse_data(data: &str) -> Result<GraphPair> {
    parse_with_format(InputFormat::AdjacencyMatrix, data)
}

/// Reads a file once and parses it with the given grammar.
///
/// # Errors
///
/// Returns [`ParseError::Io`] if the file cannot be read, otherwise the first
/// grammar error encountered.
pub fn parse_file_with_format<P: AsRef<Path>>(format: InputFormat, path: P) -> Result<GraphPair> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Parsing {} as {}", path.display(), format);
    parse_with_format(format, &data)
}

/// Reads a file once and parses it as adjacency-matrix text.
///
/// # Errors
///
/// Same as [`parse_file_with_format`].
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<GraphPair> {
    parse_file_with_format(InputFormat::AdjacencyMatrix, path)
}
