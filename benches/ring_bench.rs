use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use implicit_graph::algs::dijkstra;
use implicit_graph::graph::{EdgeList, EdgeWeights, Incidence, PropertyMap, VertexId, VertexList};
use implicit_graph::ring::RingGraph;

fn bench_edge_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_edge_iteration");
    for n in [1_000usize, 100_000] {
        let g = RingGraph::new(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &g, |b, g| {
            b.iter(|| {
                let weights = g.edge_weights();
                let total: f64 = g.edges().map(|e| weights.get(e)).sum();
                black_box(total)
            })
        });
    }
    group.finish();
}

fn bench_incidence(c: &mut Criterion) {
    let g = RingGraph::new(100_000);
    c.bench_function("ring_incidence_sweep", |b| {
        b.iter(|| {
            let mut ends = 0usize;
            for u in g.vertices() {
                ends += g.out_edges(u).count();
            }
            black_box(ends)
        })
    });
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_dijkstra");
    for n in [100usize, 10_000] {
        let g = RingGraph::new(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &g, |b, g| {
            let mut dist = vec![None; g.vertex_count()];
            let mut pred = vec![VertexId::new(0); g.vertex_count()];
            b.iter(|| {
                dijkstra(g, VertexId::new(0), &mut dist, &mut pred).unwrap();
                black_box(dist[g.vertex_count() / 2])
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_edge_iteration, bench_incidence, bench_dijkstra);
criterion_main!(benches);
