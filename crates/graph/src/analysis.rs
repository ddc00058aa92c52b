//! Summary statistics over a harvested graph, plus a size-matched random
//! baseline to compare it against.

use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;
use resolve::{Edge, Party, Politician};

use crate::build::{PoliticianGraph, full_graph};

/// Observed probability that an ordered pair of distinct nodes is linked:
/// `E / (V * (V - 1))`. Zero for graphs with fewer than two nodes.
pub fn edge_probability(node_count: usize, edge_count: usize) -> f64 {
    if node_count <= 1 {
        return 0.0;
    }
    edge_count as f64 / (node_count as f64 * (node_count as f64 - 1.0))
}

/// Number of nodes per party.
pub fn party_counts(graph: &PoliticianGraph) -> HashMap<Party, usize> {
    let mut counts = HashMap::new();
    for node in graph.nodes() {
        *counts.entry(node.party).or_insert(0) += 1;
    }
    counts
}

/// Uniform sample without replacement, at most `size` items.
pub fn sample<T: Clone>(items: &[T], size: usize) -> Vec<T> {
    let mut rng = rand::thread_rng();
    items.choose_multiple(&mut rng, size).cloned().collect()
}

/// Directed Erdős–Rényi baseline with party labels: every ordered pair of
/// distinct nodes is linked with probability `edge_probability`, and every
/// node is republican with probability `republican_probability`.
pub fn random_graph(
    node_count: usize,
    edge_probability: f64,
    republican_probability: f64,
) -> PoliticianGraph {
    let mut rng = rand::thread_rng();
    let edge_probability = edge_probability.clamp(0.0, 1.0);
    let republican_probability = republican_probability.clamp(0.0, 1.0);

    let politicians: Vec<Politician> = (0..node_count)
        .map(|i| Politician {
            name: format!("node-{i}"),
            party: if rng.gen_bool(republican_probability) {
                Party::Republican
            } else {
                Party::Democratic
            },
        })
        .collect();

    let mut edges = Vec::new();
    for from in &politicians {
        for to in &politicians {
            if from.name == to.name {
                continue;
            }
            if rng.gen_bool(edge_probability) {
                edges.push(Edge {
                    from: from.name.clone(),
                    to: to.name.clone(),
                });
            }
        }
    }

    full_graph(&politicians, &edges)
}
