//! Capability traits making up the graph protocol.
//!
//! Algorithms are written once against these bounds and run unchanged over
//! any model, whether its topology is stored (adjacency lists) or computed
//! on demand (implicit rings, grids, state spaces). Capabilities compose as
//! plain trait bounds resolved at compile time; there is no runtime
//! inspection of what a model supports.
//!
//! A model opts into exactly the capabilities it can honor:
//!
//! - [`GraphBase`]: descriptor types and edge endpoint access.
//! - [`VertexList`]: enumerate all vertices.
//! - [`Incidence`]: enumerate the edges leaving a vertex.
//! - [`Bidirectional`]: also enumerate the edges entering a vertex.
//! - [`Adjacency`]: enumerate neighboring vertices directly.
//! - [`EdgeList`]: enumerate every edge exactly once.
//! - [`AdjacencyTest`]: O(1) adjacency predicate.
//! - [`VertexIndex`]: dense index for O(1) auxiliary storage.
//! - [`EdgeWeights`]: the model declares its own edge-weight property map.

use std::fmt::Debug;
use std::hash::Hash;

use super::property::PropertyMap;

/// Descriptor types shared by every capability.
///
/// `source`/`target` take the model so that a descriptor can stay a plain
/// value; a model is free to pack whatever it needs into its `Edge` type.
pub trait GraphBase {
    /// Vertex descriptor. Must be cheap to copy and usable as a map key.
    type Vertex: Copy + Eq + Hash + Ord + Debug;
    /// Edge descriptor.
    type Edge: Copy + Debug;

    /// The endpoint `e` was discovered from.
    fn source(&self, e: Self::Edge) -> Self::Vertex;
    /// The endpoint `e` leads to.
    fn target(&self, e: Self::Edge) -> Self::Vertex;
}

/// Enumeration of the model's whole vertex set.
pub trait VertexList: GraphBase {
    /// Iterator over all vertices. Finite and restartable: two traversals
    /// yield identical sequences.
    type VertexIter<'a>: Iterator<Item = Self::Vertex>
    where
        Self: 'a;

    /// All vertices of the model.
    fn vertices(&self) -> Self::VertexIter<'_>;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;
}

/// Enumeration of the edges leaving a vertex.
///
/// Only vertex descriptors obtained from the same model are valid
/// arguments; passing anything else is a caller precondition violation and
/// the result is unspecified (though never memory-unsafe).
pub trait Incidence: GraphBase {
    /// Iterator over the out-edges of one vertex.
    type OutEdgeIter<'a>: Iterator<Item = Self::Edge>
    where
        Self: 'a;

    /// Edges leaving `u`. Every yielded edge has `source(e) == u`.
    fn out_edges(&self, u: Self::Vertex) -> Self::OutEdgeIter<'_>;

    /// Number of edges leaving `u`.
    ///
    /// Default implementation counts by iteration.
    fn out_degree(&self, u: Self::Vertex) -> usize {
        self.out_edges(u).count()
    }
}

/// Enumeration of the edges entering a vertex.
///
/// Undirected models make no distinction between in- and out-edges and
/// typically reuse the incidence sequence for both directions.
pub trait Bidirectional: Incidence {
    /// Iterator over the in-edges of one vertex.
    type InEdgeIter<'a>: Iterator<Item = Self::Edge>
    where
        Self: 'a;

    /// Edges entering `u`. Every yielded edge is incident on `u`.
    fn in_edges(&self, u: Self::Vertex) -> Self::InEdgeIter<'_>;

    /// Number of edges entering `u`.
    fn in_degree(&self, u: Self::Vertex) -> usize {
        self.in_edges(u).count()
    }

    /// Total number of edge ends at `u`.
    ///
    /// The default sums both directions, which is the right reading for a
    /// directed model. Undirected models override this to the incident-edge
    /// count, since each incident edge shows up as both an in- and an
    /// out-edge.
    fn degree(&self, u: Self::Vertex) -> usize {
        self.in_degree(u) + self.out_degree(u)
    }
}

/// Direct enumeration of a vertex's neighbors.
pub trait Adjacency: GraphBase {
    /// Iterator over vertices adjacent to one vertex.
    type AdjacencyIter<'a>: Iterator<Item = Self::Vertex>
    where
        Self: 'a;

    /// Vertices adjacent to `u`, in incidence order.
    fn adjacent_vertices(&self, u: Self::Vertex) -> Self::AdjacencyIter<'_>;
}

/// Enumeration of the model's whole edge set.
pub trait EdgeList: GraphBase {
    /// Iterator over all edges. Finite and restartable.
    type EdgeIter<'a>: Iterator<Item = Self::Edge>
    where
        Self: 'a;

    /// Every edge of the model, each emitted exactly once.
    fn edges(&self) -> Self::EdgeIter<'_>;

    /// Number of edges.
    fn edge_count(&self) -> usize;
}

/// Constant-time adjacency predicate.
pub trait AdjacencyTest: GraphBase {
    /// Returns the connecting edge if `u` and `v` are adjacent.
    ///
    /// `None` is a normal outcome, reported both for non-adjacent pairs and
    /// for descriptors outside the model's vertex range; it is never a
    /// failure signal.
    fn edge_between(&self, u: Self::Vertex, v: Self::Vertex) -> Option<Self::Edge>;
}

/// Dense zero-based index for vertices.
///
/// Algorithms that need O(1) indexable auxiliary storage (distance arrays,
/// predecessor arrays, color maps) key it by this index. The mapping is a
/// bijection between the vertex set and `[0, vertex_count)`.
pub trait VertexIndex: GraphBase {
    /// Index of `v` in `[0, vertex_count)`.
    fn vertex_index(&self, v: Self::Vertex) -> usize;
}

/// Edge-weight capability.
///
/// The model itself declares which weight lookup it supports through the
/// associated types, so the association is part of the model's type — there
/// is no global registry to consult. Implicit models return a stateless
/// computed map; storage-backed models return a borrowing map over their
/// stored payloads.
pub trait EdgeWeights: GraphBase {
    /// Weight value produced by the lookup.
    type Weight: Copy;
    /// The property map type this model supports.
    type WeightMap<'a>: PropertyMap<Self::Edge, Value = Self::Weight>
    where
        Self: 'a;

    /// The model's edge-weight map.
    fn edge_weights(&self) -> Self::WeightMap<'_>;

    /// Convenience lookup of one edge's weight.
    fn edge_weight(&self, e: Self::Edge) -> Self::Weight {
        self.edge_weights().get(e)
    }
}
