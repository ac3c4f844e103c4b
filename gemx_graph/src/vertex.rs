use indexmap::IndexMap;

use crate::EdgeId;

/// Opaque attribute payload carried by vertices and edges.
///
/// The core never interprets attributes; they are handed to solver backends as-is.
pub type Attributes = IndexMap<String, String>;

/// Direction of an edge relative to a vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Edges whose target is the vertex.
    Incoming,
    /// Edges whose origin is the vertex.
    Outgoing,
}

/// A vertex of a [`crate::Graph`].
///
/// Adjacency lists hold edge ids into the owning graph; the vertex owns none of
/// the edges it lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vertex {
    name: String,
    attributes: Attributes,
    incoming: Vec<EdgeId>,
    outgoing: Vec<EdgeId>,
}

impl Vertex {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// The vertex name, by convention its stringified 0-based position.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute payload.
    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Mutable attribute payload.
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Edges ending at this vertex, in insertion order.
    #[must_use]
    pub fn incoming(&self) -> &[EdgeId] {
        &self.incoming
    }

    /// Edges starting at this vertex, in insertion order.
    #[must_use]
    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    /// Edges in the requested direction.
    #[must_use]
    pub fn edges(&self, direction: Direction) -> &[EdgeId] {
        match direction {
            Direction::Incoming => &self.incoming,
            Direction::Outgoing => &self.outgoing,
        }
    }

    /// Number of incoming edges.
    #[must_use]
    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }

    /// Number of outgoing edges.
    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    pub(crate) fn register(&mut self, edge: EdgeId, direction: Direction) {
        match direction {
            Direction::Incoming => self.incoming.push(edge),
            Direction::Outgoing => self.outgoing.push(edge),
        }
    }
}
