//! Highway graph construction and route finding
//!
//! - Graph builder: symmetric, insertion-ordered adjacency from raw road data
//! - BFS path finder: minimum-hop routes between two cities
//! - Graph provider trait for pluggable adjacency sources

pub mod bfs;
pub mod builder;
pub mod traversal;
pub mod types;

pub use bfs::{find_path, find_route};
pub use builder::Graph;
pub use traversal::GraphProvider;
pub use types::{Adjacency, EdgeAnnotation, Link, NoRoute, NoRouteReason, Node, Path};
