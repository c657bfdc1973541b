use indexmap::IndexMap;
use serde::Serialize;

/// One raw road entry supplied to the graph builder
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// Neighbor city name
    pub to: String,
    /// Distance in miles; not validated
    pub distance: f64,
    /// Route label, e.g. an interstate number
    pub label: String,
}

impl Link {
    pub fn new(to: impl Into<String>, distance: f64, label: impl Into<String>) -> Self {
        Link {
            to: to.into(),
            distance,
            label: label.into(),
        }
    }
}

/// Builder input: city name mapped to its roads, in declaration order.
///
/// Declaration order determines neighbor iteration order and therefore how
/// BFS breaks ties between equal-hop routes.
pub type Adjacency = Vec<(String, Vec<Link>)>;

/// Distance and label of a road, stored identically on both endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeAnnotation {
    pub distance: f64,
    pub label: String,
}

/// A named location and the roads leaving it
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    neighbors: IndexMap<String, EdgeAnnotation>,
}

impl Node {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Node {
            name: name.into(),
            neighbors: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Neighbors in insertion order
    pub fn neighbors(&self) -> impl Iterator<Item = (&str, &EdgeAnnotation)> {
        self.neighbors.iter().map(|(name, edge)| (name.as_str(), edge))
    }

    pub fn edge_to(&self, neighbor: &str) -> Option<&EdgeAnnotation> {
        self.neighbors.get(neighbor)
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Re-inserting an existing neighbor overwrites in place.
    pub(crate) fn insert_edge(&mut self, neighbor: &str, edge: EdgeAnnotation) {
        self.neighbors.insert(neighbor.to_string(), edge);
    }
}

/// Ordered city names from start to goal; consecutive cities share a road
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<String>);

impl Path {
    pub(crate) fn new(nodes: Vec<String>) -> Self {
        debug_assert!(!nodes.is_empty());
        Path(nodes)
    }

    pub fn nodes(&self) -> &[String] {
        &self.0
    }

    pub fn start(&self) -> &str {
        &self.0[0]
    }

    pub fn goal(&self) -> &str {
        &self.0[self.0.len() - 1]
    }

    /// Number of roads traversed
    pub fn hop_count(&self) -> usize {
        self.0.len() - 1
    }

    /// Consecutive (from, to) pairs
    pub fn hops(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

/// Why a route could not be produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoRouteReason {
    /// The starting city is not on the map
    UnknownStart,
    /// The destination city is not on the map
    UnknownDestination,
    /// Both cities exist but no chain of roads connects them
    Unreachable,
}

impl NoRouteReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoRouteReason::UnknownStart => "unknown_start",
            NoRouteReason::UnknownDestination => "unknown_destination",
            NoRouteReason::Unreachable => "unreachable",
        }
    }
}

/// The not-found outcome of a route search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoRoute {
    pub from: String,
    pub to: String,
    pub reason: NoRouteReason,
}

impl std::fmt::Display for NoRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No route found from {} to {}.", self.from, self.to)
    }
}
