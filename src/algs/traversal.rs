//! Breadth- and depth-first traversal with visitor callbacks.
//!
//! Both searches are written once against the protocol traits and run
//! unchanged over stored and computed topologies. Callers observe the
//! search through a [`TraversalVisitor`]: vertex discovery, edge
//! classification (tree, back, other non-tree) and vertex completion, with
//! no-op defaults so a visitor implements only what it cares about.
//!
//! Color bookkeeping is kept in a plain vector keyed by
//! [`VertexIndex::vertex_index`].

use crate::graph::{GraphBase, Incidence, VertexIndex, VertexList};

/// Hooks invoked while a search runs. All default to no-ops.
pub trait TraversalVisitor<G: GraphBase> {
    /// `v` is seen for the first time.
    fn discover_vertex(&mut self, _v: G::Vertex, _g: &G) {}
    /// `e` leads to an undiscovered vertex.
    fn tree_edge(&mut self, _e: G::Edge, _g: &G) {}
    /// `e` leads to a vertex currently on the active path (depth-first
    /// search only); the seam for cycle detection.
    fn back_edge(&mut self, _e: G::Edge, _g: &G) {}
    /// `e` leads to an already handled vertex.
    fn non_tree_edge(&mut self, _e: G::Edge, _g: &G) {}
    /// All edges of `v` have been examined.
    fn finish_vertex(&mut self, _v: G::Vertex, _g: &G) {}
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Breadth-first search from `source`.
///
/// Visits every vertex reachable from `source`, classifying each examined
/// edge as tree or non-tree. `source` must be a vertex of `g`.
pub fn breadth_first_search<G, V>(g: &G, source: G::Vertex, vis: &mut V)
where
    G: VertexList + Incidence + VertexIndex,
    V: TraversalVisitor<G>,
{
    use std::collections::VecDeque;

    log::trace!("bfs: start from {:?}", source);
    let mut color = vec![Color::White; g.vertex_count()];
    color[g.vertex_index(source)] = Color::Gray;
    vis.discover_vertex(source, g);
    let mut queue = VecDeque::from([source]);

    while let Some(u) = queue.pop_front() {
        for e in g.out_edges(u) {
            let v = g.target(e);
            let vi = g.vertex_index(v);
            if color[vi] == Color::White {
                vis.tree_edge(e, g);
                color[vi] = Color::Gray;
                vis.discover_vertex(v, g);
                queue.push_back(v);
            } else {
                vis.non_tree_edge(e, g);
            }
        }
        color[g.vertex_index(u)] = Color::Black;
        vis.finish_vertex(u, g);
    }
}

/// Depth-first search over the whole graph.
///
/// Starts a new tree at every still-undiscovered vertex, in vertex-sequence
/// order, so every vertex is discovered and finished exactly once. Edges
/// into the active path are reported as back edges; a graph is cyclic iff
/// any back edge is reported.
pub fn depth_first_search<G, V>(g: &G, vis: &mut V)
where
    G: VertexList + Incidence + VertexIndex,
    V: TraversalVisitor<G>,
{
    log::trace!("dfs: start over {} vertices", g.vertex_count());
    let mut color = vec![Color::White; g.vertex_count()];
    for s in g.vertices() {
        if color[g.vertex_index(s)] == Color::White {
            dfs_visit(g, s, &mut color, vis);
        }
    }
}

fn dfs_visit<G, V>(g: &G, s: G::Vertex, color: &mut [Color], vis: &mut V)
where
    G: Incidence + VertexIndex,
    V: TraversalVisitor<G>,
{
    color[g.vertex_index(s)] = Color::Gray;
    vis.discover_vertex(s, g);
    let mut stack = vec![(s, g.out_edges(s))];

    while let Some((u, step)) = stack.last_mut().map(|(u, it)| (*u, it.next())) {
        match step {
            Some(e) => {
                let v = g.target(e);
                let vi = g.vertex_index(v);
                match color[vi] {
                    Color::White => {
                        vis.tree_edge(e, g);
                        color[vi] = Color::Gray;
                        vis.discover_vertex(v, g);
                        stack.push((v, g.out_edges(v)));
                    }
                    Color::Gray => vis.back_edge(e, g),
                    Color::Black => vis.non_tree_edge(e, g),
                }
            }
            None => {
                color[g.vertex_index(u)] = Color::Black;
                vis.finish_vertex(u, g);
                stack.pop();
            }
        }
    }
}
