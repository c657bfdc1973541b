//! Roadtrip Core Library
//!
//! Builds a bidirectional highway graph from an adjacency table, finds
//! minimum-hop routes between cities with breadth-first search, and renders
//! them as turn-by-turn directions.

pub mod atlas;
pub mod config;
pub mod directions;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
