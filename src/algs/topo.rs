//! Topological sorting of directed acyclic graphs.
//!
//! Kahn's algorithm over the protocol traits: repeatedly emit a vertex
//! whose remaining in-degree is zero. The ready set is a min-heap, so the
//! returned order is the lexicographically smallest valid linearization
//! and therefore deterministic across runs.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::GraphError;
use crate::graph::{Bidirectional, VertexIndex, VertexList};

/// Orders the vertices so that every edge points from an earlier to a
/// later position.
///
/// ## Complexity
/// O(|V| log |V| + |E|).
///
/// # Errors
/// [`GraphError::CycleDetected`] if the graph contains a cycle (including
/// a self-loop); a strict partial order has no linearization then.
///
/// # Examples
/// ```
/// use implicit_graph::algs::topological_sort;
/// use implicit_graph::graph::VertexId;
/// use implicit_graph::storage::DenseGraph;
///
/// let v = VertexId::new;
/// let g = DenseGraph::from_edges(3, [(v(2), v(1), ()), (v(1), v(0), ())]);
/// assert_eq!(topological_sort(&g).unwrap(), [v(2), v(1), v(0)]);
/// ```
pub fn topological_sort<G>(g: &G) -> Result<Vec<G::Vertex>, GraphError>
where
    G: VertexList + Bidirectional + VertexIndex,
{
    let n = g.vertex_count();
    let mut indegree = vec![0usize; n];
    for u in g.vertices() {
        indegree[g.vertex_index(u)] = g.in_degree(u);
    }

    let mut ready: BinaryHeap<Reverse<G::Vertex>> = g
        .vertices()
        .filter(|u| indegree[g.vertex_index(*u)] == 0)
        .map(Reverse)
        .collect();

    let mut order = Vec::with_capacity(n);
    while let Some(Reverse(u)) = ready.pop() {
        order.push(u);
        for e in g.out_edges(u) {
            let vi = g.vertex_index(g.target(e));
            indegree[vi] -= 1;
            if indegree[vi] == 0 {
                ready.push(Reverse(g.target(e)));
            }
        }
    }

    if order.len() != n {
        log::debug!("topological_sort: only {} of {} vertices ordered", order.len(), n);
        return Err(GraphError::CycleDetected);
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::VertexId;
    use crate::storage::DenseGraph;

    fn v(i: usize) -> VertexId {
        VertexId::new(i)
    }

    #[test]
    fn respects_every_edge() {
        let g = DenseGraph::from_edges(
            5,
            [(v(0), v(2), ()), (v(1), v(2), ()), (v(2), v(3), ()), (v(3), v(4), ())],
        );
        let order = topological_sort(&g).unwrap();
        let position =
            |x: VertexId| order.iter().position(|&y| y == x).unwrap();
        for e in [(0, 2), (1, 2), (2, 3), (3, 4)] {
            assert!(position(v(e.0)) < position(v(e.1)));
        }
    }

    #[test]
    fn picks_smallest_ready_vertex_first() {
        let g = DenseGraph::from_edges(3, [(v(2), v(0), ())]);
        // 1 and 2 are both sources; 1 precedes 2 deterministically.
        assert_eq!(topological_sort(&g).unwrap(), [v(1), v(2), v(0)]);
    }

    #[test]
    fn empty_graph_sorts_to_nothing() {
        let g = DenseGraph::<()>::new();
        assert_eq!(topological_sort(&g).unwrap(), []);
    }

    #[test]
    fn cycle_is_an_error() {
        let g = DenseGraph::from_edges(2, [(v(0), v(1), ()), (v(1), v(0), ())]);
        assert_eq!(topological_sort(&g), Err(GraphError::CycleDetected));
    }

    #[test]
    fn self_loop_is_an_error() {
        let g = DenseGraph::from_edges(1, [(v(0), v(0), ())]);
        assert_eq!(topological_sort(&g), Err(GraphError::CycleDetected));
    }
}
