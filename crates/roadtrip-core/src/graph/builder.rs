use std::fmt;

use indexmap::IndexMap;

use crate::graph::types::{Adjacency, EdgeAnnotation, Node};

/// The complete road network, keyed by city name.
///
/// Nodes refer to each other only by name, so the graph owns every node
/// outright and is read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: IndexMap<String, Node>,
}

impl Graph {
    /// Build a symmetric graph from raw adjacency data.
    ///
    /// Cities are created on first mention, as a key or as a neighbor. Every
    /// road is written on both endpoints; a later entry for the same pair
    /// replaces the earlier annotation. Distances and self-loops are taken
    /// as given.
    pub fn build(adjacency: &Adjacency) -> Self {
        let mut graph = Graph::default();

        for (name, links) in adjacency {
            graph.ensure_node(name);
            for link in links {
                graph.ensure_node(&link.to);
                graph.connect(name, &link.to, link.distance, &link.label);
            }
        }

        tracing::debug!(
            cities = graph.len(),
            roads = graph.road_count(),
            "build_graph"
        );
        graph
    }

    fn ensure_node(&mut self, name: &str) {
        if !self.nodes.contains_key(name) {
            self.nodes.insert(name.to_string(), Node::new(name));
        }
    }

    fn connect(&mut self, a: &str, b: &str, distance: f64, label: &str) {
        let edge = EdgeAnnotation {
            distance,
            label: label.to_string(),
        };
        if let Some(node) = self.nodes.get_mut(a) {
            node.insert_edge(b, edge.clone());
        }
        if let Some(node) = self.nodes.get_mut(b) {
            node.insert_edge(a, edge);
        }
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// The annotation on the road between `a` and `b`, if any
    pub fn edge(&self, a: &str, b: &str) -> Option<&EdgeAnnotation> {
        self.nodes.get(a).and_then(|node| node.edge_to(b))
    }

    /// City names in creation order
    pub fn city_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of distinct roads; a self-loop counts once
    pub fn road_count(&self) -> usize {
        let ends: usize = self.nodes.values().map(Node::degree).sum();
        let loops = self
            .nodes
            .values()
            .filter(|node| node.edge_to(node.name()).is_some())
            .count();
        (ends + loops) / 2
    }
}

impl From<&Adjacency> for Graph {
    fn from(adjacency: &Adjacency) -> Self {
        Graph::build(adjacency)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.city_names().collect();
        write!(f, "Map with cities: {}", names.join(", "))
    }
}
