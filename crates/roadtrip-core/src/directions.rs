//! Turn-by-turn rendering of a route
//!
//! Each hop of a [`Path`] becomes a [`Leg`] carrying the distance and
//! interstate of the road between the two cities.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, RoadtripError};
use crate::graph::{Graph, Path};

const ARRIVAL: &str = "you will arrive at your destination.";

/// One road driven between two consecutive cities
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub label: String,
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Drive {} miles on Interstate {} towards {}",
            self.distance, self.label, self.to
        )
    }
}

/// A route rendered as legs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Directions {
    pub start: String,
    pub legs: Vec<Leg>,
}

impl Directions {
    /// Look up the road for every hop of `path` in `graph`.
    ///
    /// Fails only if the path was not produced from this graph.
    pub fn from_path(graph: &Graph, path: &Path) -> Result<Self> {
        let legs = path
            .hops()
            .map(|(from, to)| {
                let edge = graph
                    .edge(from, to)
                    .ok_or_else(|| RoadtripError::MissingRoad {
                        from: from.to_string(),
                        to: to.to_string(),
                    })?;
                Ok(Leg {
                    from: from.to_string(),
                    to: to.to_string(),
                    distance: edge.distance,
                    label: edge.label.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Directions {
            start: path.start().to_string(),
            legs,
        })
    }

    /// Sum of leg distances. Informational; routes are not chosen by it.
    pub fn total_distance(&self) -> f64 {
        self.legs.iter().map(|leg| leg.distance).sum()
    }

    /// Printed directions, one instruction per line
    pub fn narrate(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.legs.len() + 2);
        lines.push(format!("Starting at {}", self.start));
        lines.extend(self.legs.iter().map(|leg| format!("{leg}, then")));
        lines.push(capitalize(ARRIVAL));
        lines
    }

    /// Directions as a single sentence
    pub fn to_sentence(&self) -> String {
        if self.legs.is_empty() {
            return capitalize(ARRIVAL);
        }
        let mut sentence = String::new();
        for leg in &self.legs {
            sentence.push_str(&format!("{leg}, then "));
        }
        sentence.push_str(ARRIVAL);
        sentence
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{find_path, Link};

    fn abc() -> Graph {
        Graph::build(&vec![
            ("A".to_string(), vec![Link::new("B", 10.0, "I1")]),
            ("B".to_string(), vec![Link::new("C", 5.0, "I2")]),
        ])
    }

    #[test]
    fn test_sentence_for_two_hops() {
        let graph = abc();
        let path = find_path(&graph, "A", "C").unwrap();
        let directions = Directions::from_path(&graph, &path).unwrap();

        assert_eq!(
            directions.to_sentence(),
            "Drive 10 miles on Interstate I1 towards B, then \
             Drive 5 miles on Interstate I2 towards C, then \
             you will arrive at your destination."
        );
    }

    #[test]
    fn test_narration_lines() {
        let graph = abc();
        let path = find_path(&graph, "C", "A").unwrap();
        let directions = Directions::from_path(&graph, &path).unwrap();

        assert_eq!(
            directions.narrate(),
            vec![
                "Starting at C",
                "Drive 5 miles on Interstate I2 towards B, then",
                "Drive 10 miles on Interstate I1 towards A, then",
                "You will arrive at your destination.",
            ]
        );
        assert_eq!(directions.total_distance(), 15.0);
    }

    #[test]
    fn test_zero_hop_route() {
        let graph = abc();
        let path = find_path(&graph, "B", "B").unwrap();
        let directions = Directions::from_path(&graph, &path).unwrap();

        assert!(directions.legs.is_empty());
        assert_eq!(directions.to_sentence(), "You will arrive at your destination.");
        assert_eq!(
            directions.narrate(),
            vec!["Starting at B", "You will arrive at your destination."]
        );
    }

    #[test]
    fn test_fractional_distance_is_printed_as_is() {
        let leg = Leg {
            from: "A".into(),
            to: "B".into(),
            distance: 12.5,
            label: "64".into(),
        };
        assert_eq!(leg.to_string(), "Drive 12.5 miles on Interstate 64 towards B");
    }

    #[test]
    fn test_path_from_another_graph_is_rejected() {
        let other = Graph::build(&vec![("A".to_string(), vec![Link::new("C", 1.0, "x")])]);
        let path = find_path(&other, "A", "C").unwrap();

        let err = Directions::from_path(&abc(), &path).unwrap_err();
        assert!(matches!(err, RoadtripError::MissingRoad { .. }));
    }
}
