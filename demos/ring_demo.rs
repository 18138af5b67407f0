//! Walks the implicit ring model through the whole protocol surface.
//!
//! Run with `cargo run --example ring_demo -- [n]`; the optional positional
//! argument is the ring size (default 5).

use implicit_graph::prelude::*;
use itertools::Itertools;

fn main() -> Result<(), GraphError> {
    env_logger::init();

    let n = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(5);
    let g = RingGraph::new(n);

    // For n=5 this prints:
    //
    // Vertices, outgoing edges, and adjacent vertices
    // Vertex 0: (0, 1)  (0, 4)   Adjacent vertices 1 4
    // Vertex 1: (1, 2)  (1, 0)   Adjacent vertices 2 0
    // Vertex 2: (2, 3)  (2, 1)   Adjacent vertices 3 1
    // Vertex 3: (3, 4)  (3, 2)   Adjacent vertices 4 2
    // Vertex 4: (4, 0)  (4, 3)   Adjacent vertices 0 3
    // 5 vertices
    println!("Vertices, outgoing edges, and adjacent vertices");
    for u in g.vertices() {
        let incident = g.out_edges(u).map(|e| e.to_string()).join("  ");
        let neighbors = g.adjacent_vertices(u).join(" ");
        println!("Vertex {u}: {incident}   Adjacent vertices {neighbors}");
    }
    println!("{} vertices", g.vertex_count());
    println!();

    // For n=5 this prints:
    //
    // Edges and weights
    // (0, 1) weight 0.5
    // (1, 2) weight 1.5
    // (2, 3) weight 2.5
    // (3, 4) weight 3.5
    // (4, 0) weight 2
    // 5 edges
    println!("Edges and weights");
    let weights = g.edge_weights();
    for e in g.edges() {
        println!("{e} weight {}", weights.get(e));
    }
    println!("{} edges", g.edge_count());

    if n > 0 {
        println!();
        // For n=5 this prints:
        //
        // Dijkstra search from vertex 0
        // Vertex 0: parent 0, distance 0
        // Vertex 1: parent 0, distance 0.5
        // Vertex 2: parent 1, distance 2
        // Vertex 3: parent 2, distance 4.5
        // Vertex 4: parent 0, distance 2
        let source = VertexId::new(0);
        let mut dist = vec![None; g.vertex_count()];
        let mut pred = vec![source; g.vertex_count()];
        dijkstra(&g, source, &mut dist, &mut pred)?;

        println!("Dijkstra search from vertex {source}");
        for u in g.vertices() {
            let i = g.vertex_index(u);
            let d = dist[i].expect("every ring vertex is reachable");
            println!("Vertex {u}: parent {}, distance {d}", pred[i]);
        }
    }

    Ok(())
}
