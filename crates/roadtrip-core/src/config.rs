//! Map file configuration for roadtrip
//!
//! A map file is TOML with one `[[city]]` table per city, in the order the
//! cities should be added to the graph:
//!
//! ```toml
//! [[city]]
//! name = "Baltimore"
//! roads = [
//!     { to = "Washington", miles = 39, interstate = "95" },
//! ]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoadtripError};
use crate::graph::{Adjacency, Link};

/// A road as written in a map file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoadEntry {
    pub to: String,
    pub miles: f64,
    pub interstate: String,
}

/// A city and the roads listed under it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CityEntry {
    pub name: String,
    #[serde(default)]
    pub roads: Vec<RoadEntry>,
}

/// Parsed map file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default, rename = "city")]
    pub cities: Vec<CityEntry>,
}

impl MapConfig {
    /// Load a map from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RoadtripError::MapNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content, path)?;
        tracing::debug!(path = %path.display(), cities = config.cities.len(), "load_map");
        Ok(config)
    }

    /// Parse map TOML; `path` is only used in error messages
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let config: MapConfig =
            toml::from_str(content).map_err(|e| RoadtripError::invalid_map(path, e))?;
        config.validate(path)?;
        Ok(config)
    }

    /// Names must be non-empty; distances and labels are not checked.
    fn validate(&self, path: &Path) -> Result<()> {
        for city in &self.cities {
            if city.name.trim().is_empty() {
                return Err(RoadtripError::invalid_map(path, "city name is empty"));
            }
            if city.roads.iter().any(|road| road.to.trim().is_empty()) {
                return Err(RoadtripError::invalid_map(
                    path,
                    format!("road from {} has an empty destination", city.name),
                ));
            }
        }
        Ok(())
    }

    /// Serialize the map back to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| RoadtripError::Other(e.to_string()))
    }

    /// Convert to graph builder input, keeping file order
    pub fn to_adjacency(&self) -> Adjacency {
        self.cities
            .iter()
            .map(|city| {
                (
                    city.name.clone(),
                    city.roads
                        .iter()
                        .map(|road| Link::new(road.to.clone(), road.miles, road.interstate.clone()))
                        .collect(),
                )
            })
            .collect()
    }

    /// Build a map file representation of builder input
    pub fn from_adjacency(adjacency: &Adjacency) -> Self {
        MapConfig {
            cities: adjacency
                .iter()
                .map(|(name, links)| CityEntry {
                    name: name.clone(),
                    roads: links
                        .iter()
                        .map(|link| RoadEntry {
                            to: link.to.clone(),
                            miles: link.distance,
                            interstate: link.label.clone(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas;
    use crate::graph::Graph;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
[[city]]
name = "A"
roads = [{ to = "B", miles = 10, interstate = "I1" }]

[[city]]
name = "B"
roads = [{ to = "C", miles = 5.5, interstate = "I2" }]

[[city]]
name = "D"
"#;

    #[test]
    fn test_parse_keeps_order_and_accepts_integer_miles() {
        let config = MapConfig::parse(SAMPLE, &PathBuf::from("sample.toml")).unwrap();

        let names: Vec<_> = config.cities.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "D"]);
        assert_eq!(config.cities[0].roads[0].miles, 10.0);
        assert_eq!(config.cities[1].roads[0].miles, 5.5);
        assert!(config.cities[2].roads.is_empty());
    }

    #[test]
    fn test_adjacency_builds_expected_graph() {
        let config = MapConfig::parse(SAMPLE, &PathBuf::from("sample.toml")).unwrap();
        let graph = Graph::build(&config.to_adjacency());

        assert_eq!(graph.to_string(), "Map with cities: A, B, C, D");
        assert_eq!(graph.edge("C", "B").unwrap().label, "I2");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = MapConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, RoadtripError::MapNotFound { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[[city]]\nname = 3\n").unwrap();

        let err = MapConfig::load(&path).unwrap_err();
        assert!(matches!(err, RoadtripError::InvalidMap { .. }));
    }

    #[test]
    fn test_unknown_road_field_is_rejected() {
        let toml = "[[city]]\nname = \"A\"\nroads = [{ to = \"B\", km = 3, interstate = \"x\" }]\n";
        let err = MapConfig::parse(toml, &PathBuf::from("m.toml")).unwrap_err();
        assert!(matches!(err, RoadtripError::InvalidMap { .. }));
    }

    #[test]
    fn test_empty_city_name_is_rejected() {
        let toml = "[[city]]\nname = \"  \"\n";
        let err = MapConfig::parse(toml, &PathBuf::from("m.toml")).unwrap_err();
        assert!(err.to_string().contains("city name is empty"));
    }

    #[test]
    fn test_empty_file_is_an_empty_map() {
        let config = MapConfig::parse("", &PathBuf::from("m.toml")).unwrap();
        assert!(config.cities.is_empty());
        assert!(Graph::build(&config.to_adjacency()).is_empty());
    }

    #[test]
    fn test_atlas_survives_toml_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("atlas.toml");
        let original = MapConfig::from_adjacency(&atlas::east_coast());
        fs::write(&path, original.to_toml().unwrap()).unwrap();

        let loaded = MapConfig::load(&path).unwrap();
        assert_eq!(loaded, original);
        assert_eq!(loaded.to_adjacency(), atlas::east_coast());
    }
}
