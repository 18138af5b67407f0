//! Visitor-based searches exercised the way consumers use them: distance
//! recording over a co-appearance graph and cycle detection over a build
//! dependency graph.

use implicit_graph::graph::{GraphBase, VertexId, VertexList};
use implicit_graph::prelude::*;

fn v(i: usize) -> VertexId {
    VertexId::new(i)
}

/// Records hop counts along tree edges, in the manner of a "Bacon number"
/// computation: the distance of a target is one past its tree parent's.
struct DistanceRecorder {
    hops: Vec<usize>,
}

impl<G: GraphBase<Vertex = VertexId>> TraversalVisitor<G> for DistanceRecorder {
    fn tree_edge(&mut self, e: G::Edge, g: &G) {
        let (u, w) = (g.source(e), g.target(e));
        self.hops[w.index()] = self.hops[u.index()] + 1;
    }
}

/// An undirected co-appearance graph stored as arrows both ways.
fn undirected(n: usize, pairs: &[(usize, usize)]) -> DenseGraph {
    let mut g = DenseGraph::with_vertices(n);
    for &(a, b) in pairs {
        g.add_edge(v(a), v(b), ());
        g.add_edge(v(b), v(a), ());
    }
    g
}

#[test]
fn bfs_hop_counts_radiate_from_the_source() {
    // 0 is the hub; 5 is three co-appearances out.
    let g = undirected(6, &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (4, 5)]);
    let mut rec = DistanceRecorder { hops: vec![0; g.vertex_count()] };
    breadth_first_search(&g, v(0), &mut rec);
    assert_eq!(rec.hops, [0, 1, 1, 2, 3, 4]);
}

#[test]
fn bfs_reach_is_the_impact_set() {
    // yow.h (1) feeds bar.cpp (2) and zag.cpp (3); foo.cpp (4) is
    // untouched by a change to yow.h.
    let g = DenseGraph::from_edges(
        6,
        [
            (v(0), v(1), ()),
            (v(1), v(2), ()),
            (v(1), v(3), ()),
            (v(2), v(5), ()),
            (v(3), v(5), ()),
            (v(4), v(5), ()),
        ],
    );
    struct Reach(Vec<usize>);
    impl<G: GraphBase<Vertex = VertexId>> TraversalVisitor<G> for Reach {
        fn discover_vertex(&mut self, u: VertexId, _g: &G) {
            self.0.push(u.index());
        }
    }
    let mut reach = Reach(Vec::new());
    breadth_first_search(&g, v(1), &mut reach);
    assert_eq!(reach.0, [1, 2, 3, 5]);
}

struct CycleDetector {
    has_cycle: bool,
}

impl<G: GraphBase> TraversalVisitor<G> for CycleDetector {
    fn back_edge(&mut self, _e: G::Edge, _g: &G) {
        self.has_cycle = true;
    }
}

#[test]
fn dependency_graph_gains_a_cycle_from_one_bad_edge() {
    // foo.cpp -> foo.o -> libfoobar.a, plus a header feeding foo.cpp.
    let mut g = DenseGraph::from_edges(
        4,
        [(v(0), v(1), ()), (v(1), v(2), ()), (v(2), v(3), ())],
    );

    let mut vis = CycleDetector { has_cycle: false };
    depth_first_search(&g, &mut vis);
    assert!(!vis.has_cycle);

    // An object file must not be a prerequisite of its own source.
    g.add_edge(v(2), v(0), ());
    let mut vis = CycleDetector { has_cycle: false };
    depth_first_search(&g, &mut vis);
    assert!(vis.has_cycle);
}

#[test]
fn searches_run_over_the_implicit_model_too() {
    let g = RingGraph::new(6);
    let mut rec = DistanceRecorder { hops: vec![0; g.vertex_count()] };
    breadth_first_search(&g, v(0), &mut rec);
    // Hops grow both ways around the ring and meet opposite the source.
    assert_eq!(rec.hops, [0, 1, 2, 3, 2, 1]);

    // The directed view of an undirected ring is cyclic by construction.
    let mut vis = CycleDetector { has_cycle: false };
    depth_first_search(&g, &mut vis);
    assert!(vis.has_cycle);
}
