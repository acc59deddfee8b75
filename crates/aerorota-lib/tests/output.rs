use std::path::PathBuf;

use aerorota_lib::{
    build_network, load_airports, shortest_route, ConnectivityPolicy, Error, Network,
    NetworkSummary, RoutePlan, RouteRequest, RouteSummary,
};

fn fixture_network() -> Network {
    let path =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/br_airports_sample.csv");
    let records = load_airports(&path).expect("fixture loads");
    Network::from_records(&records).expect("network builds")
}

#[test]
fn route_summary_resolves_names_and_leg_distances() {
    let network = fixture_network();
    let graph = build_network(&network, ConnectivityPolicy::ring());

    let plan = shortest_route(&graph, &RouteRequest::new("GRU", "FOR")).expect("route exists");
    let summary = RouteSummary::from_plan(&network, &graph, &plan).expect("summary builds");

    assert_eq!(summary.hops, plan.hop_count());
    assert_eq!(summary.start.code, "GRU");
    assert!(summary
        .start
        .name
        .as_deref()
        .is_some_and(|name| name.contains("Guarulhos")));

    assert!(summary.legs[0].leg_km.is_none());
    for leg in &summary.legs[1..] {
        assert!(leg.leg_km.is_some_and(|distance| distance > 0.0));
    }
}

#[test]
fn route_summary_renders_total_and_steps() {
    let network = fixture_network();
    let graph = build_network(&network, ConnectivityPolicy::FullMesh);

    let plan = shortest_route(&graph, &RouteRequest::new("GRU", "SSA")).expect("route exists");
    let summary = RouteSummary::from_plan(&network, &graph, &plan).expect("summary builds");
    let text = summary.render();

    assert!(text.contains("Route: GRU -> SSA"));
    assert!(text.contains("km"));
    assert!(text.contains("policy: full-mesh"));
}

#[test]
fn empty_plan_is_rejected() {
    let network = fixture_network();
    let graph = build_network(&network, ConnectivityPolicy::FullMesh);
    let plan = RoutePlan {
        policy: graph.policy(),
        start: "GRU".to_string(),
        goal: "SSA".to_string(),
        steps: Vec::new(),
        total_km: 0.0,
    };

    let error = RouteSummary::from_plan(&network, &graph, &plan).expect_err("empty plan");
    assert!(matches!(error, Error::EmptyRoutePlan));
}

#[test]
fn network_summary_lists_airports_and_links() {
    let network = fixture_network();
    let graph = build_network(&network, ConnectivityPolicy::FullMesh);
    let summary = NetworkSummary::from_graph(&network, &graph);

    assert_eq!(summary.airports.len(), 12);
    assert_eq!(summary.links.len(), 12 * 11 / 2);

    let text = summary.render();
    assert!(text.contains("Network: 12 airports, 66 links"));
    assert!(text.contains("GRU"));
}

#[test]
fn summaries_serialize_to_json() {
    let network = fixture_network();
    let graph = build_network(&network, ConnectivityPolicy::FullMesh);
    let summary = NetworkSummary::from_graph(&network, &graph);

    let value = serde_json::to_value(&summary).expect("serializes");
    assert_eq!(value["policy"], "full_mesh");
    assert_eq!(value["airports"].as_array().map(Vec::len), Some(12));

    let plan = shortest_route(&graph, &RouteRequest::new("GRU", "MAO")).expect("route exists");
    let route = RouteSummary::from_plan(&network, &graph, &plan).expect("summary builds");
    let value = serde_json::to_value(&route).expect("serializes");
    assert!(value["total_km"].is_number());
    assert_eq!(value["legs"].as_array().map(Vec::len), Some(2));
}
