//! # implicit-graph
//!
//! implicit-graph lets generic traversal and shortest-path algorithms
//! operate uniformly over graphs regardless of how (or whether) their
//! topology is stored — including purely computed topologies that hold no
//! edge list at all. Algorithm authors write against a small set of
//! capability traits; model authors opt into exactly the capabilities
//! their representation can honor. Both sides meet at compile time, with
//! no runtime inspection and no conversion cost.
//!
//! ## Features
//! - Capability-trait protocol: vertex/edge enumeration, incidence in both
//!   directions, adjacency, an O(1) adjacency test, dense vertex indexing,
//!   and model-declared property maps
//! - [`ring::RingGraph`], the reference implicit model: an undirected ring
//!   whose incidence, edge list and edge weights are derived from
//!   arithmetic at the moment of iterator dereference — nothing stored,
//!   nothing cached
//! - [`storage::DenseGraph`], the storage-backed counterpart: a mutable
//!   adjacency-list graph over dense integer ids with per-edge payloads
//! - Generic algorithms: visitor-based breadth- and depth-first search,
//!   topological sorting, Dijkstra shortest paths, elementary-circuit
//!   enumeration
//! - A [`conformance`] harness asserting the structural contract of the
//!   protocol against any model
//!
//! ## Example
//! ```
//! use implicit_graph::prelude::*;
//!
//! // A five-vertex ring: 0-1-2-3-4-0, nothing materialized.
//! let g = RingGraph::new(5);
//! let neighbors: Vec<_> = g.adjacent_vertices(VertexId::new(0)).collect();
//! assert_eq!(neighbors, [VertexId::new(1), VertexId::new(4)]);
//!
//! // The search only sees the protocol; a stored model would do as well.
//! let mut dist = vec![None; g.vertex_count()];
//! let mut pred = vec![VertexId::new(0); g.vertex_count()];
//! dijkstra(&g, VertexId::new(0), &mut dist, &mut pred)?;
//! assert_eq!(dist[2], Some(2.0));
//! # Ok::<(), implicit_graph::error::GraphError>(())
//! ```

pub mod algs;
pub mod conformance;
pub mod error;
pub mod graph;
pub mod ring;
pub mod storage;

pub use error::GraphError;

/// A convenient prelude importing the most-used traits and types.
pub mod prelude {
    pub use crate::algs::{
        TraversalVisitor, breadth_first_search, circuits, depth_first_search, dijkstra,
        topological_sort, unique_circuits,
    };
    pub use crate::error::GraphError;
    pub use crate::graph::{
        Adjacency, AdjacencyTest, Bidirectional, EdgeId, EdgeList, EdgeWeights, GraphBase,
        Incidence, PropertyMap, VertexId, VertexIndex, VertexList,
    };
    pub use crate::ring::{RingGraph, RingWeightMap};
    pub use crate::storage::DenseGraph;
}
