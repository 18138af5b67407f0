//! Storage-backed adjacency-list model over dense integer vertex ids.
//!
//! [`DenseGraph`] is the materialized counterpart of the implicit ring: a
//! directed graph that stores its topology in mirrored out-/in-adjacency
//! maps and supports insertion. It exposes the identical protocol surface,
//! which is what lets algorithms run unchanged over either representation.
//! Arrows carry an arbitrary payload type (edge weights, labels, `()`).

use hashbrown::HashMap;
use once_cell::sync::OnceCell;

use crate::error::GraphError;
use crate::graph::edge::edge_target;
use crate::graph::vertex::vertex_range;
use crate::graph::{
    Adjacency, AdjacencyTest, Bidirectional, EdgeId, EdgeList, EdgeWeights, GraphBase, Incidence,
    PropertyMap, VertexId, VertexIndex, VertexList, VertexRange,
};

/// An adjacency-list graph keyed by dense integer vertex ids.
///
/// Vertices occupy the contiguous range `[0, vertex_count)`; inserting an
/// edge past the current range grows it. Out- and in-adjacency are kept as
/// mirrored maps so both incidence directions are cheap, and neighbor lists
/// preserve insertion order, so iteration is deterministic. Parallel arrows
/// are allowed and yield repeated edge descriptors.
///
/// The graph caches its topological order and drops the cache on every
/// mutation.
///
/// # Examples
/// ```
/// use implicit_graph::graph::{Incidence, VertexId};
/// use implicit_graph::storage::DenseGraph;
///
/// let v = VertexId::new;
/// let g = DenseGraph::from_edges(3, [(v(0), v(1), 1.5), (v(1), v(2), 0.5)]);
/// assert_eq!(g.out_degree(v(1)), 1);
/// assert_eq!(g.topological_order().unwrap(), [v(0), v(1), v(2)]);
/// ```
#[derive(Clone, Debug)]
pub struct DenseGraph<W = ()> {
    /// Outgoing adjacency: source -> [(target, payload), ...]
    adjacency_out: HashMap<VertexId, Vec<(VertexId, W)>>,
    /// Incoming adjacency mirror: target -> [source, ...]. Payloads live on
    /// the out side only.
    adjacency_in: HashMap<VertexId, Vec<VertexId>>,
    /// Upper bound of the dense vertex id range.
    vertex_upper: usize,
    /// Total number of stored arrows.
    edge_total: usize,
    /// Cached topological order. Invalidated on mutation.
    order: OnceCell<Vec<VertexId>>,
}

impl<W> Default for DenseGraph<W> {
    fn default() -> Self {
        Self {
            adjacency_out: HashMap::new(),
            adjacency_in: HashMap::new(),
            vertex_upper: 0,
            edge_total: 0,
            order: OnceCell::new(),
        }
    }
}

impl<W> DenseGraph<W> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `n` vertices and no edges.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            vertex_upper: n,
            ..Self::default()
        }
    }

    /// Builds a graph from `(source, target, payload)` triples.
    ///
    /// The vertex range starts at `n` and grows if a triple references an
    /// id beyond it.
    pub fn from_edges<I: IntoIterator<Item = (VertexId, VertexId, W)>>(n: usize, edges: I) -> Self {
        let mut g = Self::with_vertices(n);
        for (src, dst, payload) in edges {
            g.add_edge(src, dst, payload);
        }
        g
    }

    /// Appends a fresh vertex and returns its id.
    pub fn add_vertex(&mut self) -> VertexId {
        let v = VertexId::new(self.vertex_upper);
        self.vertex_upper += 1;
        self.order.take();
        v
    }

    /// Inserts the arrow `src -> dst`, growing the vertex range as needed.
    pub fn add_edge(&mut self, src: VertexId, dst: VertexId, payload: W) {
        self.vertex_upper = self
            .vertex_upper
            .max(src.index() + 1)
            .max(dst.index() + 1);
        self.adjacency_out.entry(src).or_default().push((dst, payload));
        self.adjacency_in.entry(dst).or_default().push(src);
        self.edge_total += 1;
        self.order.take();
    }

    /// True if at least one arrow `src -> dst` is stored.
    #[inline]
    pub fn has_edge(&self, src: VertexId, dst: VertexId) -> bool {
        self.out_slice(src).iter().any(|(d, _)| *d == dst)
    }

    /// Topological order of the vertices, computed once and cached until
    /// the next mutation.
    ///
    /// # Errors
    /// [`GraphError::CycleDetected`] if the graph is not a DAG.
    pub fn topological_order(&self) -> Result<&[VertexId], GraphError> {
        self.order
            .get_or_try_init(|| crate::algs::topological_sort(self))
            .map(Vec::as_slice)
    }

    #[inline]
    fn out_slice(&self, u: VertexId) -> &[(VertexId, W)] {
        self.adjacency_out.get(&u).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    fn in_slice(&self, u: VertexId) -> &[VertexId] {
        self.adjacency_in.get(&u).map(Vec::as_slice).unwrap_or(&[])
    }

    #[cfg(test)]
    fn assert_mirror_consistent(&self) {
        for (src, outs) in &self.adjacency_out {
            for (dst, _) in outs {
                let mirrored = self.in_slice(*dst).iter().filter(|s| *s == src).count();
                let stored = outs.iter().filter(|(d, _)| d == dst).count();
                assert_eq!(mirrored, stored, "missing mirror for ({src:?} -> {dst:?})");
            }
        }
    }
}

impl<W> GraphBase for DenseGraph<W> {
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

impl<W> VertexList for DenseGraph<W> {
    type VertexIter<'a>
        = VertexRange
    where
        Self: 'a;

    fn vertices(&self) -> VertexRange {
        vertex_range(self.vertex_upper)
    }

    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertex_upper
    }
}

/// Iterator over the out-edges of one vertex of a [`DenseGraph`].
pub struct OutEdges<'a, W> {
    src: VertexId,
    inner: std::slice::Iter<'a, (VertexId, W)>,
}

impl<'a, W> Iterator for OutEdges<'a, W> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<EdgeId> {
        self.inner.next().map(|(dst, _)| EdgeId::new(self.src, *dst))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, W> ExactSizeIterator for OutEdges<'a, W> {}

impl<W> Incidence for DenseGraph<W> {
    type OutEdgeIter<'a>
        = OutEdges<'a, W>
    where
        Self: 'a;

    fn out_edges(&self, u: VertexId) -> OutEdges<'_, W> {
        OutEdges {
            src: u,
            inner: self.out_slice(u).iter(),
        }
    }

    fn out_degree(&self, u: VertexId) -> usize {
        self.out_slice(u).len()
    }
}

/// Iterator over the in-edges of one vertex of a [`DenseGraph`].
pub struct InEdges<'a> {
    dst: VertexId,
    inner: std::slice::Iter<'a, VertexId>,
}

impl<'a> Iterator for InEdges<'a> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<EdgeId> {
        self.inner.next().map(|src| EdgeId::new(*src, self.dst))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> ExactSizeIterator for InEdges<'a> {}

impl<W> Bidirectional for DenseGraph<W> {
    type InEdgeIter<'a>
        = InEdges<'a>
    where
        Self: 'a;

    fn in_edges(&self, u: VertexId) -> InEdges<'_> {
        InEdges {
            dst: u,
            inner: self.in_slice(u).iter(),
        }
    }

    fn in_degree(&self, u: VertexId) -> usize {
        self.in_slice(u).len()
    }
}

impl<W> Adjacency for DenseGraph<W> {
    type AdjacencyIter<'a>
        = std::iter::Map<OutEdges<'a, W>, fn(EdgeId) -> VertexId>
    where
        Self: 'a;

    fn adjacent_vertices(&self, u: VertexId) -> Self::AdjacencyIter<'_> {
        self.out_edges(u).map(edge_target as fn(EdgeId) -> VertexId)
    }
}

/// Iterator over every stored arrow, in source-id order.
pub struct DenseEdges<'a, W> {
    graph: &'a DenseGraph<W>,
    next_vertex: usize,
    current: OutEdges<'a, W>,
}

impl<'a, W> Iterator for DenseEdges<'a, W> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<EdgeId> {
        loop {
            if let Some(e) = self.current.next() {
                return Some(e);
            }
            if self.next_vertex >= self.graph.vertex_upper {
                return None;
            }
            let u = VertexId::new(self.next_vertex);
            self.next_vertex += 1;
            self.current = self.graph.out_edges(u);
        }
    }
}

impl<W> EdgeList for DenseGraph<W> {
    type EdgeIter<'a>
        = DenseEdges<'a, W>
    where
        Self: 'a;

    fn edges(&self) -> DenseEdges<'_, W> {
        DenseEdges {
            graph: self,
            next_vertex: 0,
            current: OutEdges {
                src: VertexId::new(0),
                inner: [].iter(),
            },
        }
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edge_total
    }
}

impl<W> AdjacencyTest for DenseGraph<W> {
    /// Resolves to the first stored arrow `u -> v`; parallel arrows share
    /// one descriptor value.
    fn edge_between(&self, u: VertexId, v: VertexId) -> Option<EdgeId> {
        self.has_edge(u, v).then(|| EdgeId::new(u, v))
    }
}

impl<W> VertexIndex for DenseGraph<W> {
    /// Vertex ids are already dense; the mapping is the identity.
    #[inline]
    fn vertex_index(&self, v: VertexId) -> usize {
        v.index()
    }
}

/// Borrowing weight map over the stored arrow payloads of a [`DenseGraph`].
pub struct DenseWeightMap<'a, W> {
    graph: &'a DenseGraph<W>,
}

impl<'a, W: Copy> PropertyMap<EdgeId> for DenseWeightMap<'a, W> {
    type Value = W;

    /// Payload of the first stored arrow matching the descriptor.
    ///
    /// # Panics
    /// Panics if the descriptor does not name a stored arrow; only
    /// descriptors produced by this graph's iterators are valid keys.
    fn get(&self, e: EdgeId) -> W {
        self.graph
            .out_slice(e.source())
            .iter()
            .find(|(dst, _)| *dst == e.target())
            .map(|(_, w)| *w)
            .expect("edge descriptor does not name a stored arrow")
    }
}

impl<W: Copy> EdgeWeights for DenseGraph<W> {
    type Weight = W;
    type WeightMap<'a>
        = DenseWeightMap<'a, W>
    where
        Self: 'a;

    fn edge_weights(&self) -> DenseWeightMap<'_, W> {
        DenseWeightMap { graph: self }
    }
}
