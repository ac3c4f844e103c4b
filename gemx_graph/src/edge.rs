use crate::{Attributes, VertexId};

/// A directed edge of a [`crate::Graph`].
///
/// Endpoints are ids into the owning graph's vertex list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    origin: VertexId,
    target: VertexId,
    attributes: Attributes,
}

impl Edge {
    pub(crate) fn new(origin: VertexId, target: VertexId) -> Self {
        Self {
            origin,
            target,
            attributes: Attributes::new(),
        }
    }

    /// Vertex the edge starts at.
    #[must_use]
    pub const fn origin(&self) -> VertexId {
        self.origin
    }

    /// Vertex the edge ends at.
    #[must_use]
    pub const fn target(&self) -> VertexId {
        self.target
    }

    /// Whether origin and target coincide.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.origin == self.target
    }

    /// Weight/attribute payload.
    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Mutable weight/attribute payload.
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}
