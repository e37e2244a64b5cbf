use std::env;
use std::str::FromStr;

use anyhow::{bail, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use adjgraph::{GraphStore, Labels};

/// Which views to print, read from `GRAPH_VIEW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Adjacency,
    Edges,
    Both,
}

impl FromStr for View {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "adjacency" => Ok(View::Adjacency),
            "edges" => Ok(View::Edges),
            "both" => Ok(View::Both),
            other => bail!("unknown GRAPH_VIEW {:?} (expected adjacency, edges or both)", other),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let view: View = env::var("GRAPH_VIEW")
        .unwrap_or_else(|_| "both".to_string())
        .parse()?;

    // A -> B, A -> C, C -> D, D -> E, D -> G, E -> F, G -> F
    let graph = GraphStore::demo()?;
    let labels = Labels::demo();

    if view != View::Edges {
        graph.print_adjacency_view(&labels)?;
    }
    if view != View::Adjacency {
        graph.print_edge_view(&labels)?;
    }

    let teardown = graph.destroy()?;
    info!(
        nodes = teardown.nodes_released,
        slots = teardown.slots_released,
        "graph released"
    );
    Ok(())
}
