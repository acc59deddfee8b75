use std::collections::HashMap;
use std::path::PathBuf;

use aerorota_lib::{
    build_network, load_airports, Airport, ConnectivityPolicy, GeoPosition, Network,
};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/br_airports_sample.csv")
}

fn fixture_network() -> Network {
    let records = load_airports(&fixture_path()).expect("fixture loads");
    Network::from_records(&records).expect("network builds")
}

fn synthetic_network(count: usize) -> Network {
    let mut airports = HashMap::new();
    let mut order = Vec::new();
    let mut region_to_code = HashMap::new();

    for i in 0..count {
        let code = format!("A{i:02}");
        let airport = Airport {
            code: code.clone(),
            name: format!("Airport {i}"),
            region: format!("R{i:02}"),
            position: GeoPosition {
                latitude: -30.0 + 2.0 * i as f64,
                longitude: -60.0 + 1.5 * i as f64,
            },
        };
        region_to_code.insert(airport.region.clone(), code.clone());
        airports.insert(code.clone(), airport);
        order.push(code);
    }

    Network {
        airports,
        order,
        region_to_code,
    }
}

#[test]
fn fixture_keeps_one_airport_per_state() {
    let network = fixture_network();

    assert_eq!(network.len(), 12);
    assert_eq!(network.region_to_code.get("SP").map(String::as_str), Some("GRU"));
    assert!(
        !network.contains("CGH"),
        "second São Paulo airport is deduplicated"
    );
    assert!(!network.contains("CPQ"), "small airports are filtered out");
}

#[test]
fn fixture_preserves_input_order() {
    let network = fixture_network();
    let codes: Vec<&str> = network.codes().collect();
    assert_eq!(
        codes,
        vec!["GRU", "GIG", "CNF", "BSB", "SSA", "REC", "FOR", "MAO", "POA", "CWB", "BEL", "AJU"]
    );
}

#[test]
fn full_mesh_links_every_pair() {
    let network = synthetic_network(6);
    let graph = build_network(&network, ConnectivityPolicy::FullMesh);

    assert_eq!(graph.policy(), ConnectivityPolicy::FullMesh);
    assert_eq!(graph.edges().len(), 6 * 5 / 2);
    for code in graph.nodes() {
        assert_eq!(graph.neighbours(code).len(), 5);
    }
}

#[test]
fn edge_weights_are_symmetric_and_rounded() {
    let network = fixture_network();
    let graph = build_network(&network, ConnectivityPolicy::FullMesh);

    for (from, to, weight) in graph.edges() {
        assert!(weight > 0.0);
        assert!(
            ((weight * 100.0).round() - weight * 100.0).abs() < 1e-6,
            "weight {weight} is not rounded to two decimals"
        );

        let reciprocal = graph
            .neighbours(to)
            .iter()
            .find(|edge| edge.target == from)
            .expect("reciprocal edge exists");
        assert_eq!(reciprocal.weight_km, weight);
    }
}

#[test]
fn geodesic_weights_match_known_distances() {
    let network = fixture_network();
    let graph = build_network(&network, ConnectivityPolicy::FullMesh);

    let gru_gig = graph
        .neighbours("GRU")
        .iter()
        .find(|edge| edge.target == "GIG")
        .expect("GRU-GIG edge exists");
    assert!(
        (300.0..380.0).contains(&gru_gig.weight_km),
        "GRU-GIG should be roughly 340 km, got {}",
        gru_gig.weight_km
    );
}

#[test]
fn ring_policy_bounds_degree() {
    for count in [4, 5, 6, 9, 12] {
        let network = synthetic_network(count);
        let graph = build_network(&network, ConnectivityPolicy::ring());

        let expected = (count - 1).min(6);
        for code in graph.nodes() {
            let degree = graph.neighbours(code).len();
            assert_eq!(
                degree, expected,
                "node {code} in a {count}-node ring has degree {degree}"
            );
            assert!((3..=6).contains(&degree));
        }
    }
}

#[test]
fn ring_links_wrap_cyclically() {
    let network = synthetic_network(9);
    let graph = build_network(&network, ConnectivityPolicy::ring());

    let mut targets: Vec<&str> = graph
        .neighbours("A00")
        .iter()
        .map(|edge| edge.target.as_str())
        .collect();
    targets.sort_unstable();
    assert_eq!(targets, vec!["A01", "A02", "A03", "A06", "A07", "A08"]);
}

#[test]
fn ring_policy_is_recorded_on_the_graph() {
    let network = synthetic_network(5);
    let graph = build_network(&network, ConnectivityPolicy::Ring { neighbors: 2 });
    assert_eq!(graph.policy(), ConnectivityPolicy::Ring { neighbors: 2 });
}

#[test]
fn isolated_nodes_remain_in_the_adjacency() {
    let network = synthetic_network(3);
    let graph = build_network(&network, ConnectivityPolicy::Ring { neighbors: 0 });

    assert_eq!(graph.node_count(), 3);
    for code in graph.nodes() {
        assert!(graph.contains(code));
        assert!(graph.neighbours(code).is_empty());
    }
}

#[test]
fn fuzzy_matches_suggest_close_codes() {
    let network = fixture_network();
    let graph = build_network(&network, ConnectivityPolicy::FullMesh);

    let suggestions = graph.fuzzy_matches("GRV", 3);
    assert!(
        suggestions.iter().any(|code| code == "GRU"),
        "expected GRU among {suggestions:?}"
    );
}
