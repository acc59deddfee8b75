//! Aerorota library entry points.
//!
//! This crate exposes helpers to load the Brazilian airport dataset, select
//! one representative airport per state, build weighted flight-network graphs
//! under the supported connectivity policies, and answer shortest-route
//! queries. Higher-level consumers (CLI, map renderers) should only depend on
//! the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod graph;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;

pub use dataset::{load_airports, load_airports_from_reader, AirportKind, AirportRecord};
pub use error::{Error, Result};
pub use graph::{build_network, ConnectivityPolicy, Edge, Graph, DEFAULT_RING_NEIGHBORS};
pub use network::{Airport, GeoPosition, Network};
pub use output::{NetworkSummary, RouteSummary};
pub use path::find_route_dijkstra;
pub use routing::{shortest_route, RoutePlan, RouteRequest};
