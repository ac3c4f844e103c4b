use contracts::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Position of a vertex inside its owning [`crate::Graph`].
///
/// Indices are assigned sequentially at creation and never change, so they
/// double as the vertex's external name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId {
    /// The underlying raw integer index.
    inner: u32,
}

impl VertexId {
    /// Creates a vertex id from a raw integer.
    #[ensures(ret.inner == id)]
    pub fn new(id: u32) -> Self {
        Self { inner: id }
    }

    /// Returns the index as a usize for array access.
    #[must_use]
    #[ensures(ret == self.inner as usize)]
    pub fn as_usize(self) -> usize {
        self.inner as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.inner)
    }
}

impl From<usize> for VertexId {
    #[inline]
    #[requires(u32::try_from(id).is_ok(), "index exceeds the u32 id space")]
    fn from(id: usize) -> Self {
        Self { inner: id as u32 }
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(id: VertexId) -> Self {
        id.inner as Self
    }
}

/// Position of an edge inside its owning [`crate::Graph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId {
    inner: u32,
}

impl EdgeId {
    /// Creates an edge id from a raw integer.
    #[ensures(ret.inner == id)]
    pub fn new(id: u32) -> Self {
        Self { inner: id }
    }

    /// Returns the index as a usize for array access.
    #[must_use]
    #[ensures(ret == self.inner as usize)]
    pub fn as_usize(self) -> usize {
        self.inner as usize
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.inner)
    }
}

impl From<usize> for EdgeId {
    #[inline]
    #[requires(u32::try_from(id).is_ok(), "index exceeds the u32 id space")]
    fn from(id: usize) -> Self {
        Self { inner: id as u32 }
    }
}

impl From<EdgeId> for usize {
    #[inline]
    fn from(id: EdgeId) -> Self {
        id.inner as Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(u32::MAX)]
    fn test_round_trip_through_usize(#[case] raw: u32) {
        let v = VertexId::new(raw);
        assert_eq!(VertexId::from(v.as_usize()), v);
        let e = EdgeId::new(raw);
        assert_eq!(EdgeId::from(usize::from(e)), e);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    #[should_panic(expected = "index exceeds the u32 id space")]
    fn test_oversized_index_is_rejected() {
        let _ = VertexId::from(u32::MAX as usize + 1);
    }
}
