use std::path::PathBuf;

use gemx_graph::GraphError;
use thiserror::Error;

/// Errors raised while parsing a dual-graph text.
///
/// Graph, row and column fields are 0-based. The rendered messages count from
/// one, the way a person reading the file would.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Fewer than two non-blank lines: not even both header lines are present.
    #[error("Input must contain at least two graphs (vertex count lines), found {lines} non-blank line(s)")]
    MalformedInput {
        /// Number of non-blank lines found.
        lines: usize,
    },

    /// Input ended before the header line of a graph.
    #[error("Unexpected end of input while parsing graph {}", .graph + 1)]
    MissingHeader {
        /// Graph index.
        graph: usize,
    },

    /// The vertex count header is not a positive integer.
    #[error("Invalid vertex count '{value}' for graph {}", .graph + 1)]
    InvalidHeader {
        /// Graph index.
        graph: usize,
        /// Raw header text.
        value: String,
    },

    /// Fewer matrix rows remain than the header declares.
    #[error(
        "Not enough lines for adjacency matrix of graph {}: {available} available, {required} required",
        .graph + 1
    )]
    TruncatedMatrix {
        /// Graph index.
        graph: usize,
        /// Lines left after the header.
        available: usize,
        /// Rows the header declares.
        required: usize,
    },

    /// A matrix row does not hold exactly one value per vertex.
    #[error(
        "Adjacency matrix row {} of graph {} has {got} values, expected {expected}",
        .row + 1,
        .graph + 1
    )]
    RowLengthMismatch {
        /// Graph index.
        graph: usize,
        /// Row index within the matrix.
        row: usize,
        /// Number of values found.
        got: usize,
        /// Number of values required.
        expected: usize,
    },

    /// A matrix cell is not an integer.
    #[error(
        "Invalid adjacency matrix value '{value}' at position ({},{}) in graph {}",
        .row + 1,
        .col + 1,
        .graph + 1
    )]
    InvalidCell {
        /// Graph index.
        graph: usize,
        /// Row index within the matrix.
        row: usize,
        /// Column index within the matrix.
        col: usize,
        /// Raw cell text.
        value: String,
    },

    /// A matrix cell is an integer other than 0 or 1.
    #[error(
        "Adjacency matrix value {value} at position ({},{}) in graph {} is not 0 or 1",
        .row + 1,
        .col + 1,
        .graph + 1
    )]
    CellOutOfRange {
        /// Graph index.
        graph: usize,
        /// Row index within the matrix.
        row: usize,
        /// Column index within the matrix.
        col: usize,
        /// Parsed cell value.
        value: i64,
    },

    /// Building the graph violated a model invariant.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// The input file could not be read.
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// Index of the graph at fault, if the error concerns a single graph.
    #[must_use]
    pub const fn graph(&self) -> Option<usize> {
        match self {
            Self::MissingHeader { graph }
            | Self::InvalidHeader { graph, .. }
            | Self::TruncatedMatrix { graph, .. }
            | Self::RowLengthMismatch { graph, .. }
            | Self::InvalidCell { graph, .. }
            | Self::CellOutOfRange { graph, .. } => Some(*graph),
            Self::MalformedInput { .. } | Self::Graph(_) | Self::Io { .. } => None,
        }
    }
}
