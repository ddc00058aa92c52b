use std::collections::{HashMap, HashSet};

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use resolve::{Edge, Party, Politician};

const DEFAULT_NODE_SIZE: f64 = 1.0;

/// Display attributes of one graph node.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub party: Party,
    pub size: f64,
}

/// Deduplicated directed graph over politician names. The rendering layer
/// borrows it read-only through [`PoliticianGraph::nodes`] and
/// [`PoliticianGraph::edges`].
pub struct PoliticianGraph {
    graph: DiGraph<Node, ()>,
    by_name: HashMap<String, NodeIndex>,
}

impl PoliticianGraph {
    fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            by_name: HashMap::new(),
        }
    }

    // First occurrence of a name wins.
    fn add_node(&mut self, politician: &Politician) {
        if self.by_name.contains_key(&politician.name) {
            return;
        }
        let index = self.graph.add_node(Node {
            name: politician.name.clone(),
            party: politician.party,
            size: DEFAULT_NODE_SIZE,
        });
        self.by_name.insert(politician.name.clone(), index);
    }

    // Both endpoints must be known, and at most one directed edge may exist
    // per ordered pair. The reverse direction is a distinct edge.
    fn add_edge(&mut self, edge: &Edge) {
        let (Some(&from), Some(&to)) = (self.by_name.get(&edge.from), self.by_name.get(&edge.to))
        else {
            return;
        };
        if self.graph.find_edge(from, to).is_none() {
            self.graph.add_edge(from, to, ());
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.by_name.get(from), self.by_name.get(to)) {
            (Some(&from), Some(&to)) => self.graph.find_edge(from, to).is_some(),
            _ => false,
        }
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_weights()
    }

    /// Edges as `(from, to)` name pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].name.as_str(),
                self.graph[edge.target()].name.as_str(),
            )
        })
    }

    fn degree(&self, index: NodeIndex) -> usize {
        self.graph.edges_directed(index, Direction::Incoming).count()
            + self.graph.edges_directed(index, Direction::Outgoing).count()
    }
}

/// Graph over every politician, with edges restricted to known endpoints.
pub fn full_graph(politicians: &[Politician], edges: &[Edge]) -> PoliticianGraph {
    let mut graph = PoliticianGraph::new();
    for politician in politicians {
        graph.add_node(politician);
    }
    for edge in edges {
        graph.add_edge(edge);
    }

    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built full graph"
    );
    graph
}

/// Like [`full_graph`], but restricted to the one-hop neighborhood of
/// `sources`: a node is kept iff it is itself a source, or it is the target
/// of an edge leaving one. The closure is not transitive.
pub fn neighborhood_graph(
    politicians: &[Politician],
    edges: &[Edge],
    sources: &[String],
) -> PoliticianGraph {
    let source_set: HashSet<&str> = sources.iter().map(String::as_str).collect();
    let mut relevant = source_set.clone();
    for edge in edges {
        if source_set.contains(edge.from.as_str()) {
            relevant.insert(edge.to.as_str());
        }
    }

    let mut graph = PoliticianGraph::new();
    for politician in politicians {
        if relevant.contains(politician.name.as_str()) {
            graph.add_node(politician);
        }
    }
    for edge in edges {
        graph.add_edge(edge);
    }

    tracing::info!(
        sources = sources.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built neighborhood graph"
    );
    graph
}

/// Scale node sizes linearly with total degree (in plus out). A graph where
/// every node has the same degree gets `min_size` everywhere.
pub fn resize_nodes(graph: &mut PoliticianGraph, min_size: f64, max_size: f64) {
    let indices: Vec<NodeIndex> = graph.graph.node_indices().collect();
    let degrees: Vec<usize> = indices.iter().map(|&index| graph.degree(index)).collect();

    let min_degree = degrees.iter().copied().min().unwrap_or(0);
    let max_degree = degrees.iter().copied().max().unwrap_or(0);

    for (&index, &degree) in indices.iter().zip(&degrees) {
        graph.graph[index].size = if max_degree == min_degree {
            min_size
        } else {
            let scale =
                (degree - min_degree + 1) as f64 / (max_degree - min_degree + 1) as f64;
            min_size + scale * (max_size - min_size)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn politician(name: &str, party: Party) -> Politician {
        Politician {
            name: name.to_string(),
            party,
        }
    }

    fn edge(from: &str, to: &str) -> Edge {
        Edge {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[test]
    fn parallel_edges_are_suppressed_but_reverse_edges_kept() {
        let politicians = vec![
            politician("A", Party::Democratic),
            politician("B", Party::Republican),
        ];
        let edges = vec![edge("A", "B"), edge("A", "B"), edge("B", "A")];

        let graph = full_graph(&politicians, &edges);

        assert_eq!(graph.edge_count(), 2);
        assert!(graph.has_edge("A", "B"));
        assert!(graph.has_edge("B", "A"));
    }

    #[test]
    fn unknown_endpoints_and_duplicate_edges_are_dropped() {
        let politicians = vec![
            politician("Alice", Party::Democratic),
            politician("Bob", Party::Republican),
        ];
        let edges = vec![
            edge("Alice", "Bob"),
            edge("Alice", "Bob"),
            edge("Bob", "Carol"),
        ];

        let graph = full_graph(&politicians, &edges);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge("Alice", "Bob"));
        assert!(!graph.contains("Carol"));
    }

    #[test]
    fn first_occurrence_of_a_name_wins() {
        let politicians = vec![
            politician("Alice", Party::Democratic),
            politician("Alice", Party::Republican),
        ];

        let graph = full_graph(&politicians, &[]);

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.nodes().next().unwrap().party, Party::Democratic);
    }

    #[test]
    fn neighborhood_keeps_sources_and_their_targets_only() {
        let politicians = vec![
            politician("A", Party::Democratic),
            politician("B", Party::Republican),
            politician("C", Party::Democratic),
            politician("D", Party::Republican),
        ];
        // B is reachable from the source A; D is only reachable from the
        // non-source C and must be excluded.
        let edges = vec![edge("A", "B"), edge("C", "D")];

        let graph = neighborhood_graph(&politicians, &edges, &["A".to_string()]);

        assert!(graph.contains("A"));
        assert!(graph.contains("B"));
        assert!(!graph.contains("C"));
        assert!(!graph.contains("D"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn neighborhood_keeps_sources_without_edges() {
        let politicians = vec![
            politician("A", Party::Democratic),
            politician("B", Party::Republican),
        ];

        let graph = neighborhood_graph(&politicians, &[], &["A".to_string()]);

        assert!(graph.contains("A"));
        assert!(!graph.contains("B"));
    }

    #[test]
    fn uniform_degree_resizes_to_min_size() {
        let politicians = vec![
            politician("A", Party::Democratic),
            politician("B", Party::Republican),
        ];
        let mut graph = full_graph(&politicians, &[edge("A", "B"), edge("B", "A")]);

        resize_nodes(&mut graph, 2.0, 15.0);

        for node in graph.nodes() {
            assert_eq!(node.size, 2.0);
        }
    }

    #[test]
    fn degree_scales_sizes_linearly() {
        let politicians = vec![
            politician("Hub", Party::Democratic),
            politician("B", Party::Republican),
            politician("C", Party::Democratic),
        ];
        let mut graph = full_graph(&politicians, &[edge("Hub", "B"), edge("Hub", "C")]);

        resize_nodes(&mut graph, 2.0, 15.0);

        // Hub has degree 2, leaves degree 1: scale 2/2 and 1/2.
        let sizes: HashMap<&str, f64> = graph
            .nodes()
            .map(|node| (node.name.as_str(), node.size))
            .collect();
        assert_eq!(sizes["Hub"], 15.0);
        assert_eq!(sizes["B"], 2.0 + 0.5 * 13.0);
        assert_eq!(sizes["C"], sizes["B"]);
    }
}
