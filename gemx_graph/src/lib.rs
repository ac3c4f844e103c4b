//! In-memory attributed graph model.
//!
//! A [`Graph`] exclusively owns its vertices and edges. Edges and adjacency
//! lists refer to vertices by [`VertexId`] rather than by reference, so the
//! graph is the only owner and every view stays valid for as long as it lives.

mod edge;
mod graph;
mod id;
mod vertex;

pub use crate::edge::Edge;
pub use crate::graph::{Graph, GraphError, Orientation};
pub use crate::id::{EdgeId, VertexId};
pub use crate::vertex::{Attributes, Direction, Vertex};
