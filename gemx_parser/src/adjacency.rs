//! Adjacency-matrix dual-graph grammar.
//!
//! ```text
//! <N1>
//! <N1 rows of N1 space-separated 0/1 integers>
//! <N2>
//! <N2 rows of N2 space-separated 0/1 integers>
//! [ignored trailing content]
//! ```
//!
//! Blank lines anywhere are ignored. Row `i`, column `j` set to 1 means an
//! edge `i -> j`; self-loops are allowed.

use gemx_graph::{Graph, Orientation, VertexId};
use itertools::Itertools;
use tracing::{debug, trace};

use crate::{GraphPair, ParseError};

/// Parses both graphs of an adjacency-matrix document.
pub(crate) fn parse(data: &str) -> Result<GraphPair, ParseError> {
    let lines = normalize(data);
    if lines.len() < 2 {
        return Err(ParseError::MalformedInput { lines: lines.len() });
    }

    let (query, next) = parse_single_graph(&lines, 0, 0)?;
    let (target, rest) = parse_single_graph(&lines, next, 1)?;

    if rest < lines.len() {
        trace!("Ignoring {} trailing line(s) after graph 2", lines.len() - rest);
    }

    Ok(GraphPair { query, target })
}

/// Trims every line and drops blank ones, keeping order.
fn normalize(data: &str) -> Vec<&str> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Parses the graph whose header sits at `cursor`.
///
/// Returns the graph and the index of the first line after its matrix.
fn parse_single_graph(
    lines: &[&str],
    cursor: usize,
    graph_index: usize,
) -> Result<(Graph, usize), ParseError> {
    let header = *lines
        .get(cursor)
        .ok_or(ParseError::MissingHeader { graph: graph_index })?;
    let vertex_count = parse_header(header, graph_index)?;

    let available = lines.len() - cursor - 1;
    if available < vertex_count {
        return Err(ParseError::TruncatedMatrix {
            graph: graph_index,
            available,
            required: vertex_count,
        });
    }

    let mut graph = Graph::with_capacity(
        format!("graph_{graph_index}"),
        Orientation::Directed,
        vertex_count,
    );
    for _ in 0..vertex_count {
        graph.add_indexed_vertex();
    }

    for row in 0..vertex_count {
        let cells = parse_row(lines[cursor + 1 + row], graph_index, row, vertex_count)?;
        for col in cells.iter().positions(|&cell| cell == 1) {
            graph.add_edge(VertexId::from(row), VertexId::from(col))?;
        }
    }

    debug!(
        "Parsed {} with {} vertices and {} edges",
        graph.id(),
        graph.vertex_count(),
        graph.edge_count()
    );

    Ok((graph, cursor + 1 + vertex_count))
}

fn parse_header(header: &str, graph_index: usize) -> Result<usize, ParseError> {
    header
        .parse::<i64>()
        .ok()
        .filter(|&n| n > 0)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| ParseError::InvalidHeader {
            graph: graph_index,
            value: header.to_string(),
        })
}

fn parse_row(
    line: &str,
    graph_index: usize,
    row: usize,
    expected: usize,
) -> Result<Vec<u8>, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(ParseError::RowLengthMismatch {
            graph: graph_index,
            row,
            got: tokens.len(),
            expected,
        });
    }

    tokens
        .iter()
        .enumerate()
        .map(|(col, token)| parse_cell(token, graph_index, row, col))
        .collect()
}

fn parse_cell(token: &str, graph_index: usize, row: usize, col: usize) -> Result<u8, ParseError> {
    let value = token.parse::<i64>().map_err(|_| ParseError::InvalidCell {
        graph: graph_index,
        row,
        col,
        value: token.to_string(),
    })?;

    match value {
        0 => Ok(0),
        1 => Ok(1),
        _ => Err(ParseError::CellOutOfRange {
            graph: graph_index,
            row,
            col,
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_blank_and_trims() {
        let lines = normalize("  2 \n\n0 1\r\n   \n0 0\n\n\n");
        assert_eq!(lines, vec!["2", "0 1", "0 0"]);
    }

    #[test]
    fn test_parse_header() {
        assert_eq!(parse_header("3", 0).unwrap(), 3);
        assert_eq!(parse_header("+4", 0).unwrap(), 4);
        for bad in ["0", "-2", "two", "1.5", ""] {
            assert!(
                matches!(parse_header(bad, 1), Err(ParseError::InvalidHeader { graph: 1, ref value }) if value == bad),
                "header {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_row_tabs_and_runs_of_spaces() {
        assert_eq!(parse_row("1\t0    1", 0, 0, 3).unwrap(), vec![1, 0, 1]);
    }

    #[test]
    fn test_parse_cell_classifies_failures() {
        assert!(matches!(
            parse_cell("x", 0, 1, 2),
            Err(ParseError::InvalidCell { graph: 0, row: 1, col: 2, .. })
        ));
        assert!(matches!(
            parse_cell("2", 0, 1, 2),
            Err(ParseError::CellOutOfRange { value: 2, .. })
        ));
        assert!(matches!(
            parse_cell("-1", 0, 1, 2),
            Err(ParseError::CellOutOfRange { value: -1, .. })
        ));
    }

    #[test]
    fn test_cursor_advances_past_matrix() {
        let lines = normalize("2\n0 1\n0 0\n1\n1\n");
        let (graph, next) = parse_single_graph(&lines, 0, 0).unwrap();
        assert_eq!(next, 3);
        assert_eq!(graph.id(), "graph_0");

        let (graph, next) = parse_single_graph(&lines, next, 1).unwrap();
        assert_eq!(next, 5);
        assert_eq!(graph.id(), "graph_1");
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_missing_header_when_first_graph_consumes_input() {
        let err = parse("1\n0\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingHeader { graph: 1 }));
    }
}
