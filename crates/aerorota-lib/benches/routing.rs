use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

use aerorota_lib::{
    build_network, load_airports, shortest_route, ConnectivityPolicy, Graph, Network, RouteRequest,
};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/br_airports_sample.csv")
}

static NETWORK: Lazy<Network> = Lazy::new(|| {
    let records = load_airports(&fixture_path()).expect("fixture loads");
    Network::from_records(&records).expect("network builds")
});
static FULL_MESH: Lazy<Graph> = Lazy::new(|| build_network(&NETWORK, ConnectivityPolicy::FullMesh));
static RING: Lazy<Graph> = Lazy::new(|| build_network(&NETWORK, ConnectivityPolicy::ring()));

fn benchmark_routing(c: &mut Criterion) {
    c.bench_function("build_full_mesh", |b| {
        let network = &*NETWORK;
        b.iter(|| {
            let graph = build_network(network, ConnectivityPolicy::FullMesh);
            black_box(graph.node_count())
        });
    });

    c.bench_function("route_full_mesh_gru_mao", |b| {
        let graph = &*FULL_MESH;
        let request = RouteRequest::new("GRU", "MAO");
        b.iter(|| {
            let plan = shortest_route(graph, &request).expect("route exists");
            black_box(plan.total_km)
        });
    });

    c.bench_function("route_ring_gru_for", |b| {
        let graph = &*RING;
        let request = RouteRequest::new("GRU", "FOR");
        b.iter(|| {
            let plan = shortest_route(graph, &request).expect("route exists");
            black_box(plan.hop_count())
        });
    });
}

criterion_group!(benches, benchmark_routing);
criterion_main!(benches);
