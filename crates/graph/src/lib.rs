pub mod analysis;
pub mod build;

pub use analysis::{edge_probability, party_counts, random_graph, sample};
pub use build::{Node, PoliticianGraph, full_graph, neighborhood_graph, resize_nodes};
