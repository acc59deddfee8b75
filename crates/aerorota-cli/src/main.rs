use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use aerorota_lib::{
    build_network, load_airports, shortest_route, ConnectivityPolicy, Network, NetworkSummary,
    RouteRequest, RouteSummary, DEFAULT_RING_NEIGHBORS,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Brazilian flight-network utilities")]
struct Cli {
    /// Path to the airport dataset CSV.
    #[arg(long, default_value = "br-airports.csv")]
    data: PathBuf,

    /// Output encoding.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the flight network and print its airports and links.
    Network {
        /// Connectivity policy used to link the representative airports.
        #[arg(long, value_enum, default_value = "full-mesh")]
        policy: PolicyArg,
        /// Neighbour count used by the ring policy.
        #[arg(long, default_value_t = DEFAULT_RING_NEIGHBORS)]
        ring_neighbors: usize,
    },
    /// Compute the shortest route between two airport codes.
    Route {
        /// Starting airport code.
        #[arg(long = "from")]
        from: String,
        /// Destination airport code.
        #[arg(long = "to")]
        to: String,
        /// Connectivity policy used to link the representative airports.
        #[arg(long, value_enum, default_value = "full-mesh")]
        policy: PolicyArg,
        /// Neighbour count used by the ring policy.
        #[arg(long, default_value_t = DEFAULT_RING_NEIGHBORS)]
        ring_neighbors: usize,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    FullMesh,
    Ring,
}

impl PolicyArg {
    fn to_policy(self, ring_neighbors: usize) -> ConnectivityPolicy {
        match self {
            PolicyArg::FullMesh => ConnectivityPolicy::FullMesh,
            PolicyArg::Ring => ConnectivityPolicy::Ring {
                neighbors: ring_neighbors,
            },
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Network {
            policy,
            ring_neighbors,
        } => handle_network(&cli.data, policy.to_policy(ring_neighbors), cli.format),
        Command::Route {
            from,
            to,
            policy,
            ring_neighbors,
        } => handle_route(
            &cli.data,
            policy.to_policy(ring_neighbors),
            cli.format,
            &from,
            &to,
        ),
    }
}

fn handle_network(data: &Path, policy: ConnectivityPolicy, format: OutputFormat) -> Result<()> {
    let network = load_network(data)?;
    let graph = build_network(&network, policy);
    let summary = NetworkSummary::from_graph(&network, &graph);
    emit(&summary.render(), &summary, format)
}

fn handle_route(
    data: &Path,
    policy: ConnectivityPolicy,
    format: OutputFormat,
    from: &str,
    to: &str,
) -> Result<()> {
    let network = load_network(data)?;
    let graph = build_network(&network, policy);
    let plan = shortest_route(&graph, &RouteRequest::new(from, to))?;
    let summary = RouteSummary::from_plan(&network, &graph, &plan)?;
    emit(&summary.render(), &summary, format)
}

fn load_network(data: &Path) -> Result<Network> {
    let records = load_airports(data)
        .with_context(|| format!("failed to load airport dataset from {}", data.display()))?;
    Network::from_records(&records).context("failed to build the airport network")
}

fn emit<T: Serialize>(text: &str, value: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{text}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
