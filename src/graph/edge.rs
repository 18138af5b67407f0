//! `EdgeId`: the value identity of an edge occurrence.
//!
//! An edge descriptor is an ordered `(source, target)` pair of vertex ids.
//! Descriptors are produced by iteration; in an undirected model, `(u, v)`
//! and `(v, u)` are distinct descriptor values that denote the same edge
//! when it is discovered from opposite endpoints. No canonicalization is
//! performed anywhere in the crate.

use std::fmt;

use super::vertex::VertexId;

/// Ordered endpoint pair identifying one occurrence of an edge.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct EdgeId {
    source: VertexId,
    target: VertexId,
}

impl EdgeId {
    /// Creates an edge descriptor from its endpoints.
    #[inline]
    pub const fn new(source: VertexId, target: VertexId) -> Self {
        EdgeId { source, target }
    }

    /// The endpoint the edge was discovered from.
    #[inline]
    pub const fn source(self) -> VertexId {
        self.source
    }

    /// The endpoint the edge leads to.
    #[inline]
    pub const fn target(self) -> VertexId {
        self.target
    }
}

/// Projects an edge descriptor to its target vertex.
///
/// Used as a `fn` pointer to build adjacency sequences on top of incidence
/// sequences without extra iterator state.
#[inline]
pub(crate) fn edge_target(e: EdgeId) -> VertexId {
    e.target()
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EdgeId")
            .field(&self.source.index())
            .field(&self.target.index())
            .finish()
    }
}

/// Prints edges as `(source, target)`.
impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: usize) -> VertexId {
        VertexId::new(i)
    }

    #[test]
    fn endpoints() {
        let e = EdgeId::new(v(0), v(4));
        assert_eq!(e.source(), v(0));
        assert_eq!(e.target(), v(4));
    }

    #[test]
    fn opposite_discoveries_are_distinct_values() {
        let forward = EdgeId::new(v(1), v(2));
        let backward = EdgeId::new(v(2), v(1));
        assert_ne!(forward, backward);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", EdgeId::new(v(0), v(1))), "(0, 1)");
        assert_eq!(format!("{:?}", EdgeId::new(v(3), v(4))), "EdgeId(3, 4)");
    }

    #[test]
    fn json_roundtrip() {
        let e = EdgeId::new(v(2), v(3));
        let s = serde_json::to_string(&e).unwrap();
        let e2: EdgeId = serde_json::from_str(&s).unwrap();
        assert_eq!(e2, e);
    }
}
