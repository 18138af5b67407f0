//! The implicit ring model: the reference computed topology.
//!
//! A ring graph arranges its vertices in a circle so that each vertex has
//! exactly two neighbors. For example, a ring with five vertices:
//!
//! ```text
//!         0
//!       /   \
//!     4      1
//!     |      |
//!     3 ---- 2
//! ```
//!
//! Vertices are indexed by consecutive integers: vertex `i` is adjacent to
//! `i-1` and `i+1`, and vertex 0 is adjacent to vertex `n-1` across the
//! seam. Edges are undirected, and each weighs the average of its endpoint
//! indices.
//!
//! The model holds only the vertex count. Every sequence and every weight
//! is computed lazily at the moment of iterator dereference or map lookup;
//! nothing is precomputed or cached, and the model is permanently
//! read-only. Any number of iterators and algorithm runs may reference one
//! model at the same time.

pub mod edges;
pub mod incidence;
pub mod weight;

use crate::graph::edge::edge_target;
use crate::graph::vertex::vertex_range;
use crate::graph::{
    Adjacency, AdjacencyTest, Bidirectional, EdgeId, EdgeList, EdgeWeights, GraphBase, Incidence,
    VertexId, VertexIndex, VertexList, VertexRange,
};

pub use edges::RingEdgeIter;
pub use incidence::IncidentEdgeIter;
pub use weight::RingWeightMap;

/// Iterator over the neighbors of a ring vertex.
///
/// Wraps the incidence cursor and projects each edge to its target; it
/// carries no state of its own.
pub type AdjacentVertexIter = std::iter::Map<IncidentEdgeIter, fn(EdgeId) -> VertexId>;

/// Undirected ring of `n` vertices with computed topology and weights.
///
/// Construction fixes the vertex count forever; there is no way to add or
/// remove vertices or edges. `n = 0`, `1` and `2` are first-class sizes:
/// the empty ring yields empty sequences everywhere, the one-vertex ring is
/// a single self-loop, and the two-vertex ring has one edge shared by both
/// endpoints.
///
/// # Examples
/// ```
/// use implicit_graph::graph::{Incidence, VertexId, VertexList};
/// use implicit_graph::ring::RingGraph;
///
/// let g = RingGraph::new(5);
/// assert_eq!(g.vertex_count(), 5);
/// let from_zero: Vec<_> = g
///     .out_edges(VertexId::new(0))
///     .map(|e| (e.source().index(), e.target().index()))
///     .collect();
/// assert_eq!(from_zero, [(0, 1), (0, 4)]);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RingGraph {
    n: usize,
}

impl RingGraph {
    /// Creates a ring with `n` vertices. Any `n >= 0` is valid.
    pub const fn new(n: usize) -> Self {
        RingGraph { n }
    }

    /// The fixed vertex count.
    #[inline]
    pub const fn n(&self) -> usize {
        self.n
    }
}

impl GraphBase for RingGraph {
    type Vertex = VertexId;
    type Edge = EdgeId;

    #[inline]
    fn source(&self, e: EdgeId) -> VertexId {
        e.source()
    }

    #[inline]
    fn target(&self, e: EdgeId) -> VertexId {
        e.target()
    }
}

impl VertexList for RingGraph {
    type VertexIter<'a>
        = VertexRange
    where
        Self: 'a;

    fn vertices(&self) -> VertexRange {
        vertex_range(self.n)
    }

    #[inline]
    fn vertex_count(&self) -> usize {
        self.n
    }
}

impl Incidence for RingGraph {
    type OutEdgeIter<'a>
        = IncidentEdgeIter
    where
        Self: 'a;

    fn out_edges(&self, u: VertexId) -> IncidentEdgeIter {
        IncidentEdgeIter::new(u, self.n)
    }

    fn out_degree(&self, _u: VertexId) -> usize {
        match self.n {
            0 => 0,
            1 | 2 => 1,
            _ => 2,
        }
    }
}

impl Bidirectional for RingGraph {
    type InEdgeIter<'a>
        = IncidentEdgeIter
    where
        Self: 'a;

    /// The in-edges and out-edges are the same in an undirected model.
    fn in_edges(&self, u: VertexId) -> IncidentEdgeIter {
        self.out_edges(u)
    }

    fn in_degree(&self, u: VertexId) -> usize {
        self.out_degree(u)
    }

    /// Each incident edge appears as both an in- and an out-edge, so the
    /// degree is the incident count, not the sum of both directions.
    fn degree(&self, u: VertexId) -> usize {
        self.out_degree(u)
    }
}

impl Adjacency for RingGraph {
    type AdjacencyIter<'a>
        = AdjacentVertexIter
    where
        Self: 'a;

    fn adjacent_vertices(&self, u: VertexId) -> AdjacentVertexIter {
        self.out_edges(u).map(edge_target as fn(EdgeId) -> VertexId)
    }
}

impl EdgeList for RingGraph {
    type EdgeIter<'a>
        = RingEdgeIter
    where
        Self: 'a;

    fn edges(&self) -> RingEdgeIter {
        RingEdgeIter::new(self.n)
    }

    fn edge_count(&self) -> usize {
        // One edge per vertex, except the two-vertex ring whose single edge
        // would otherwise be counted from both endpoints.
        if self.n == 2 { 1 } else { self.n }
    }
}

impl AdjacencyTest for RingGraph {
    /// Agrees exactly with the incidence iterator: consecutive indices are
    /// adjacent, vertex 0 is adjacent to vertex `n-1` across the seam, and
    /// the one-vertex ring's self-loop is present. Out-of-range ids report
    /// `None`.
    fn edge_between(&self, u: VertexId, v: VertexId) -> Option<EdgeId> {
        let n = self.n;
        if u.index() >= n || v.index() >= n {
            return None;
        }
        if n == 1 {
            return Some(EdgeId::new(u, v));
        }
        let follows = |a: VertexId, b: VertexId| (a.index() + 1) % n == b.index();
        if follows(u, v) || follows(v, u) {
            Some(EdgeId::new(u, v))
        } else {
            None
        }
    }
}

impl VertexIndex for RingGraph {
    /// Vertex descriptors are already dense indices; the mapping is the
    /// identity.
    #[inline]
    fn vertex_index(&self, v: VertexId) -> usize {
        v.index()
    }
}

impl EdgeWeights for RingGraph {
    type Weight = f64;
    type WeightMap<'a>
        = RingWeightMap
    where
        Self: 'a;

    fn edge_weights(&self) -> RingWeightMap {
        RingWeightMap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::PropertyMap;

    fn v(i: usize) -> VertexId {
        VertexId::new(i)
    }

    #[test]
    fn vertex_sequence_is_dense_and_increasing() {
        let g = RingGraph::new(5);
        let ids: Vec<_> = g.vertices().map(|u| u.index()).collect();
        assert_eq!(ids, [0, 1, 2, 3, 4]);
        assert_eq!(g.vertex_count(), 5);
    }

    #[test]
    fn degrees_across_sizes() {
        for (n, expected) in [(0, 0), (1, 1), (2, 1), (3, 2), (5, 2), (100, 2)] {
            let g = RingGraph::new(n);
            for u in g.vertices() {
                assert_eq!(g.out_degree(u), expected, "n={n}");
                assert_eq!(g.in_degree(u), expected, "n={n}");
                assert_eq!(g.degree(u), expected, "n={n}");
                assert_eq!(g.out_edges(u).count(), expected, "n={n}");
            }
        }
    }

    #[test]
    fn adjacency_projects_incidence_targets() {
        let g = RingGraph::new(5);
        for u in g.vertices() {
            let from_edges: Vec<_> = g.out_edges(u).map(|e| e.target()).collect();
            let direct: Vec<_> = g.adjacent_vertices(u).collect();
            assert_eq!(direct, from_edges);
        }
        let of_zero: Vec<_> = g.adjacent_vertices(v(0)).map(|w| w.index()).collect();
        assert_eq!(of_zero, [1, 4]);
    }

    #[test]
    fn edge_counts() {
        for (n, expected) in [(0, 0), (1, 1), (2, 1), (3, 3), (5, 5), (64, 64)] {
            let g = RingGraph::new(n);
            assert_eq!(g.edge_count(), expected, "n={n}");
            assert_eq!(g.edges().count(), expected, "n={n}");
        }
    }

    #[test]
    fn edge_between_consecutive_indices() {
        let g = RingGraph::new(5);
        assert!(g.edge_between(v(1), v(2)).is_some());
        assert!(g.edge_between(v(2), v(1)).is_some());
        assert!(g.edge_between(v(0), v(1)).is_some());
        assert!(g.edge_between(v(1), v(3)).is_none());
        assert!(g.edge_between(v(2), v(2)).is_none());
    }

    #[test]
    fn edge_between_crosses_the_seam() {
        // The wraparound pair is adjacent, matching the incidence iterator.
        let g = RingGraph::new(5);
        let e = g.edge_between(v(0), v(4)).unwrap();
        assert_eq!((e.source(), e.target()), (v(0), v(4)));
        assert!(g.edge_between(v(4), v(0)).is_some());
    }

    #[test]
    fn edge_between_boundary_sizes() {
        let g1 = RingGraph::new(1);
        assert!(g1.edge_between(v(0), v(0)).is_some());

        let g2 = RingGraph::new(2);
        assert!(g2.edge_between(v(0), v(1)).is_some());
        assert!(g2.edge_between(v(1), v(0)).is_some());
        assert!(g2.edge_between(v(0), v(0)).is_none());

        let g0 = RingGraph::new(0);
        assert!(g0.edge_between(v(0), v(0)).is_none());
    }

    #[test]
    fn edge_between_rejects_out_of_range() {
        let g = RingGraph::new(5);
        assert!(g.edge_between(v(4), v(5)).is_none());
        assert!(g.edge_between(v(7), v(8)).is_none());
    }

    #[test]
    fn declared_weight_map_matches_produced_edges() {
        let g = RingGraph::new(5);
        let w = g.edge_weights();
        for e in g.edges() {
            let expected = (e.source().index() + e.target().index()) as f64 / 2.0;
            assert_eq!(w.get(e), expected);
            assert_eq!(g.edge_weight(e), expected);
        }
    }

    #[test]
    fn sequences_are_restartable() {
        let g = RingGraph::new(8);
        assert_eq!(g.vertices().collect::<Vec<_>>(), g.vertices().collect::<Vec<_>>());
        assert_eq!(g.edges().collect::<Vec<_>>(), g.edges().collect::<Vec<_>>());
    }
}
