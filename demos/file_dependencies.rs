//! File-dependency analysis over the storage-backed model.
//!
//! Builds the dependency graph of a small build tree, then answers the
//! classic questions: full recompilation order, which files can be built
//! in parallel, what a header change forces to be re-made, and whether the
//! dependencies are cyclic (they become so after one bad edge).
//!
//! Run with `cargo run --example file_dependencies`.

use implicit_graph::prelude::*;
use itertools::Itertools;

const NAMES: [&str; 15] = [
    "dax.h",
    "yow.h",
    "boz.h",
    "zow.h",
    "foo.cpp",
    "foo.o",
    "bar.cpp",
    "bar.o",
    "libfoobar.a",
    "zig.cpp",
    "zig.o",
    "zag.cpp",
    "zag.o",
    "libzigzag.a",
    "killerapp",
];

const DAX_H: usize = 0;
const YOW_H: usize = 1;
const BOZ_H: usize = 2;
const ZOW_H: usize = 3;
const FOO_CPP: usize = 4;
const FOO_O: usize = 5;
const BAR_CPP: usize = 6;
const BAR_O: usize = 7;
const LIBFOOBAR_A: usize = 8;
const ZIG_CPP: usize = 9;
const ZIG_O: usize = 10;
const ZAG_CPP: usize = 11;
const ZAG_O: usize = 12;
const LIBZIGZAG_A: usize = 13;
const KILLERAPP: usize = 14;

/// Prints each discovered file; BFS reach is exactly the rebuild impact.
struct PrintDiscovered;

impl<G: GraphBase<Vertex = VertexId>> TraversalVisitor<G> for PrintDiscovered {
    fn discover_vertex(&mut self, v: VertexId, _g: &G) {
        print!("{} ", NAMES[v.index()]);
    }
}

/// Flags any back edge; one suffices to make the build graph unusable.
struct CycleDetector {
    has_cycle: bool,
}

impl<G: GraphBase> TraversalVisitor<G> for CycleDetector {
    fn back_edge(&mut self, _e: G::Edge, _g: &G) {
        self.has_cycle = true;
    }
}

fn has_cycle(g: &DenseGraph) -> bool {
    let mut vis = CycleDetector { has_cycle: false };
    depth_first_search(g, &mut vis);
    vis.has_cycle
}

fn main() -> Result<(), GraphError> {
    env_logger::init();

    let v = VertexId::new;
    let used_by = [
        (DAX_H, FOO_CPP),
        (DAX_H, BAR_CPP),
        (DAX_H, YOW_H),
        (YOW_H, BAR_CPP),
        (YOW_H, ZAG_CPP),
        (BOZ_H, BAR_CPP),
        (BOZ_H, ZIG_CPP),
        (BOZ_H, ZAG_CPP),
        (ZOW_H, FOO_CPP),
        (FOO_CPP, FOO_O),
        (FOO_O, LIBFOOBAR_A),
        (BAR_CPP, BAR_O),
        (BAR_O, LIBFOOBAR_A),
        (LIBFOOBAR_A, LIBZIGZAG_A),
        (ZIG_CPP, ZIG_O),
        (ZIG_O, LIBZIGZAG_A),
        (ZAG_CPP, ZAG_O),
        (ZAG_O, LIBZIGZAG_A),
        (LIBZIGZAG_A, KILLERAPP),
    ];
    let mut g = DenseGraph::from_edges(NAMES.len(), used_by.map(|(a, b)| (v(a), v(b), ())));

    // Determine ordering for a full recompilation.
    let make_order = topological_sort(&g)?;
    println!(
        "make ordering: {}",
        make_order.iter().map(|&u| NAMES[u.index()]).join(" ")
    );
    println!();

    // Parallel compilation ordering: a file's time slot is one past the
    // latest of its prerequisites; the order above guarantees every
    // prerequisite is already slotted.
    let mut time = vec![0usize; g.vertex_count()];
    for &u in &make_order {
        if g.in_degree(u) > 0 {
            let latest = g
                .in_edges(u)
                .map(|e| time[g.vertex_index(g.source(e))])
                .max()
                .unwrap_or(0);
            time[g.vertex_index(u)] = latest + 1;
        }
    }
    println!("parallel make ordering,");
    println!("vertices with same group number can be made in parallel");
    for u in g.vertices() {
        println!("time_slot[{}] = {}", NAMES[u.index()], time[g.vertex_index(u)]);
    }
    println!();

    // If I change yow.h, what files need to be re-made?
    println!("A change to yow.h will cause what to be re-made?");
    breadth_first_search(&g, v(YOW_H), &mut PrintDiscovered);
    println!();
    println!();

    println!("The graph has a cycle? {}", has_cycle(&g));
    println!();

    println!("adding edge bar.cpp -> dax.h");
    g.add_edge(v(BAR_CPP), v(DAX_H), ());
    println!();

    println!("The graph has a cycle now? {}", has_cycle(&g));

    Ok(())
}
