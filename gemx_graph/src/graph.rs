use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{Direction, Edge, EdgeId, Vertex, VertexId};

/// Errors raised while building a [`Graph`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge endpoint does not name a vertex of the graph.
    #[error("Unknown endpoint {vertex} in graph '{graph}'")]
    UnknownEndpoint {
        /// Identifier of the graph the edge was added to.
        graph: String,
        /// The missing vertex.
        vertex: VertexId,
    },
}

/// Orientation tag of a graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Edges have a distinct origin and target.
    #[default]
    Directed,
    /// Edges are symmetric; stored with an arbitrary origin.
    Undirected,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directed => f.write_str("directed"),
            Self::Undirected => f.write_str("undirected"),
        }
    }
}

/// An attributed graph that exclusively owns its vertices and edges.
///
/// Graphs are append-only: vertices and edges can be added but never removed.
/// Every edge is registered in three places (the edge list, its origin's
/// outgoing list and its target's incoming list) and [`Graph::add_edge`] keeps
/// those views in agreement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    id: String,
    orientation: Orientation,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new<S: Into<String>>(id: S, orientation: Orientation) -> Self {
        Self {
            id: id.into(),
            orientation,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `vertices` vertices.
    pub fn with_capacity<S: Into<String>>(id: S, orientation: Orientation, vertices: usize) -> Self {
        Self {
            id: id.into(),
            orientation,
            vertices: Vec::with_capacity(vertices),
            edges: Vec::new(),
        }
    }

    /// Graph identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Orientation tag.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Appends a vertex and returns its id, the next sequential index.
    pub fn add_vertex<S: Into<String>>(&mut self, name: S) -> VertexId {
        let id = VertexId::from(self.vertices.len());
        self.vertices.push(Vertex::new(name.into()));
        id
    }

    /// Appends a vertex named after its own position.
    pub fn add_indexed_vertex(&mut self) -> VertexId {
        let name = self.vertices.len().to_string();
        self.add_vertex(name)
    }

    /// Adds an edge between two existing vertices.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownEndpoint`] if either endpoint is not a vertex
    /// of this graph; the graph is left untouched in that case.
    pub fn add_edge(&mut self, origin: VertexId, target: VertexId) -> Result<EdgeId, GraphError> {
        for endpoint in [origin, target] {
            if endpoint.as_usize() >= self.vertices.len() {
                debug!("Rejected edge {} -> {} in {}: no vertex {}", origin, target, self.id, endpoint);
                return Err(GraphError::UnknownEndpoint {
                    graph: self.id.clone(),
                    vertex: endpoint,
                });
            }
        }

        let id = EdgeId::from(self.edges.len());
        self.edges.push(Edge::new(origin, target));
        self.vertices[origin.as_usize()].register(id, Direction::Outgoing);
        self.vertices[target.as_usize()].register(id, Direction::Incoming);
        Ok(id)
    }

    /// Looks up a vertex by id.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.as_usize())
    }

    /// Mutable access to a vertex, for attaching attributes.
    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.vertices.get_mut(id.as_usize())
    }

    /// Looks up a vertex id by name.
    #[must_use]
    pub fn vertex_by_name(&self, name: &str) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|v| v.name() == name)
            .map(VertexId::from)
    }

    /// Looks up an edge by id.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.as_usize())
    }

    /// Mutable access to an edge, for attaching attributes.
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(id.as_usize())
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices in creation order, paired with their ids.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = (VertexId, &Vertex)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId::from(i), v))
    }

    /// Vertex ids in creation order.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> + use<> {
        (0..self.vertices.len()).map(VertexId::from)
    }

    /// Edges in creation order, paired with their ids.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, e)| (EdgeId::from(i), e))
    }

    /// Outgoing edge ids of a vertex; empty for an unknown vertex.
    #[must_use]
    pub fn outgoing(&self, vertex: VertexId) -> &[EdgeId] {
        match self.vertex(vertex) {
            Some(v) => v.outgoing(),
            None => &[],
        }
    }

    /// Incoming edge ids of a vertex; empty for an unknown vertex.
    #[must_use]
    pub fn incoming(&self, vertex: VertexId) -> &[EdgeId] {
        match self.vertex(vertex) {
            Some(v) => v.incoming(),
            None => &[],
        }
    }

    /// Targets of the outgoing edges of a vertex.
    pub fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.outgoing(vertex)
            .iter()
            .map(|e| self.edges[e.as_usize()].target())
    }

    /// Origins of the incoming edges of a vertex.
    pub fn predecessors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.incoming(vertex)
            .iter()
            .map(|e| self.edges[e.as_usize()].origin())
    }

    /// Whether an edge `origin -> target` exists.
    ///
    /// Scans only the origin's outgoing list.
    #[must_use]
    pub fn has_edge(&self, origin: VertexId, target: VertexId) -> bool {
        self.successors(origin).any(|t| t == target)
    }

    /// Dense 0/1 adjacency view where `m[i][j] == 1` iff an edge `i -> j` exists.
    #[must_use]
    pub fn adjacency_matrix(&self) -> Vec<Vec<u8>> {
        let n = self.vertices.len();
        let mut matrix = vec![vec![0u8; n]; n];
        for edge in &self.edges {
            matrix[edge.origin().as_usize()][edge.target().as_usize()] = 1;
        }
        matrix
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} vertices, {} edges)",
            self.id,
            self.orientation,
            self.vertices.len(),
            self.edges.len()
        )
    }
}
