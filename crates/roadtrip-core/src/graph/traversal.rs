use crate::graph::builder::Graph;

/// Trait for providing graph membership and adjacency to the path finder
pub trait GraphProvider {
    fn contains(&self, name: &str) -> bool;
    /// Neighbor names in the provider's iteration order
    fn neighbors(&self, name: &str) -> Vec<String>;
}

impl GraphProvider for Graph {
    fn contains(&self, name: &str) -> bool {
        Graph::contains(self, name)
    }

    fn neighbors(&self, name: &str) -> Vec<String> {
        self.node(name)
            .map(|node| node.neighbors().map(|(n, _)| n.to_string()).collect())
            .unwrap_or_default()
    }
}
