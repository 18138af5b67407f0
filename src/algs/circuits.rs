//! Elementary-circuit enumeration for directed graphs.
//!
//! An elementary circuit visits no vertex twice other than its start/end.
//! The search is the Hawick–James refinement of Johnson's algorithm: for
//! each start vertex (in index order), it explores only the subgraph
//! induced by vertices of equal or higher index, blocking vertices on the
//! current path and deferring unblocking through per-vertex wait lists.
//! Each circuit is reported through a callback as the slice of its
//! vertices, start first and not repeated at the end.
//!
//! Parallel arrows make the plain enumeration report the same vertex
//! sequence once per arrow combination; [`unique_circuits`] suppresses
//! such repeats (and any other rotation of an already-reported circuit).

use hashbrown::HashSet;
use itertools::Itertools;

use crate::graph::{Adjacency, VertexIndex, VertexList};

/// Enumerates every elementary circuit of `g`.
///
/// The callback borrows the circuit's vertex sequence; copy it out if it
/// must outlive the call.
pub fn circuits<G, F>(g: &G, visit: F)
where
    G: VertexList + Adjacency + VertexIndex,
    F: FnMut(&[G::Vertex]),
{
    let n = g.vertex_count();
    let mut by_index: Vec<Option<G::Vertex>> = vec![None; n];
    for u in g.vertices() {
        by_index[g.vertex_index(u)] = Some(u);
    }
    let mut search = CircuitSearch {
        g,
        blocked: vec![false; n],
        unblock_later: vec![Vec::new(); n],
        stack: Vec::new(),
        visit,
        found: 0,
    };
    for start in 0..n {
        let Some(s) = by_index[start] else { continue };
        search.circuit(s, start);
        for i in start..n {
            search.blocked[i] = false;
            search.unblock_later[i].clear();
        }
    }
    log::debug!("circuits: reported {} circuits", search.found);
}

/// Enumerates elementary circuits, reporting each circuit once.
///
/// Circuits are keyed by the rotation of their index sequence that starts
/// at the smallest index; a circuit whose key was already reported is
/// dropped. This collapses both duplicate traversals caused by parallel
/// arrows and rotated re-discoveries of the same cycle.
pub fn unique_circuits<G, F>(g: &G, mut visit: F)
where
    G: VertexList + Adjacency + VertexIndex,
    F: FnMut(&[G::Vertex]),
{
    let mut seen: HashSet<Vec<usize>> = HashSet::new();
    circuits(g, |cycle| {
        let ids: Vec<usize> = cycle.iter().map(|&v| g.vertex_index(v)).collect();
        if seen.insert(canonical_rotation(&ids)) {
            visit(cycle);
        }
    });
}

/// Rotates a circuit's index sequence so its smallest index comes first.
fn canonical_rotation(ids: &[usize]) -> Vec<usize> {
    match ids.iter().position_min() {
        Some(pivot) => ids[pivot..].iter().chain(&ids[..pivot]).copied().collect(),
        None => Vec::new(),
    }
}

struct CircuitSearch<'a, G, F>
where
    G: VertexList + Adjacency + VertexIndex,
{
    g: &'a G,
    blocked: Vec<bool>,
    unblock_later: Vec<Vec<usize>>,
    stack: Vec<G::Vertex>,
    visit: F,
    found: usize,
}

impl<'a, G, F> CircuitSearch<'a, G, F>
where
    G: VertexList + Adjacency + VertexIndex,
    F: FnMut(&[G::Vertex]),
{
    /// Extends the current path by `v`; true if some extension closed a
    /// circuit back to the start vertex.
    fn circuit(&mut self, v: G::Vertex, start: usize) -> bool {
        let g = self.g;
        let vi = g.vertex_index(v);
        let mut found = false;
        self.stack.push(v);
        self.blocked[vi] = true;

        for w in g.adjacent_vertices(v) {
            let wi = g.vertex_index(w);
            if wi < start {
                continue; // handled from an earlier start vertex
            }
            if wi == start {
                (self.visit)(&self.stack);
                self.found += 1;
                found = true;
            } else if !self.blocked[wi] && self.circuit(w, start) {
                found = true;
            }
        }

        if found {
            self.unblock(vi);
        } else {
            // No circuit through v for now: stay blocked until a neighbor
            // on some future circuit unblocks us.
            for w in g.adjacent_vertices(v) {
                let wi = g.vertex_index(w);
                if wi >= start && !self.unblock_later[wi].contains(&vi) {
                    self.unblock_later[wi].push(vi);
                }
            }
        }
        self.stack.pop();
        found
    }

    fn unblock(&mut self, i: usize) {
        self.blocked[i] = false;
        let pending = std::mem::take(&mut self.unblock_later[i]);
        for j in pending {
            if self.blocked[j] {
                self.unblock(j);
            }
        }
    }
}
