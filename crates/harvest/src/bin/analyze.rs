//! Offline statistics over a harvested scenario's CSV outputs, compared
//! against a size-matched random baseline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use graph::{edge_probability, full_graph, party_counts, random_graph};
use resolve::{Edge, Party, Politician};
use store::read_csv;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let prefix = args.next().unwrap_or_else(|| "c117".to_string());
    let dir = PathBuf::from(args.next().unwrap_or_else(|| "output".to_string()));

    let politicians: Vec<Politician> = read_csv(dir.join(format!("{prefix}-politicians.csv")))
        .context("reading politicians csv")?;
    let edges: Vec<Edge> =
        read_csv(dir.join(format!("{prefix}-edges.csv"))).context("reading edges csv")?;

    let graph = full_graph(&politicians, &edges);
    let counts = party_counts(&graph);
    let republicans = counts.get(&Party::Republican).copied().unwrap_or(0);
    let democrats = counts.get(&Party::Democratic).copied().unwrap_or(0);

    let p_edge = edge_probability(graph.node_count(), graph.edge_count());
    let p_republican = if graph.node_count() == 0 {
        0.0
    } else {
        republicans as f64 / graph.node_count() as f64
    };

    println!("nodes: {}", graph.node_count());
    println!("edges: {}", graph.edge_count());
    println!("republican: {republicans}, democratic: {democrats}");
    println!("edge probability: {p_edge:.6}");

    let baseline = random_graph(graph.node_count(), p_edge, p_republican);
    println!(
        "random baseline: {} nodes, {} edges",
        baseline.node_count(),
        baseline.edge_count()
    );

    Ok(())
}
