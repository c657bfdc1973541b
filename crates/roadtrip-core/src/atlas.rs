//! Built-in East-coast highway atlas
//!
//! Interstate connections between 25 hub cities and the towns they reach.
//! Not every road is listed from both ends; the graph builder mirrors them.

use crate::graph::{Adjacency, Graph, Link};

type Road = (&'static str, f64, &'static str);

const EAST_COAST: &[(&str, &[Road])] = &[
    ("Baltimore", &[("Washington", 39.0, "95"), ("Philadelphia", 106.0, "95")]),
    (
        "Washington",
        &[
            ("Baltimore", 39.0, "95"),
            ("Fredericksburg", 53.0, "95"),
            ("Bedford", 137.0, "70"),
            ("Philadelphia", 139.0, "95"),
        ],
    ),
    ("Fredericksburg", &[("Washington", 53.0, "95"), ("Richmond", 60.0, "95")]),
    (
        "Richmond",
        &[
            ("Charlottesville", 71.0, "64"),
            ("Williamsburg", 51.0, "64"),
            ("Durham", 151.0, "85"),
            ("Fredericksburg", 60.0, "95"),
            ("Raleigh", 171.0, "95"),
        ],
    ),
    (
        "Durham",
        &[
            ("Richmond", 151.0, "85"),
            ("Raleigh", 29.0, "40"),
            ("Greensboro", 54.0, "40"),
        ],
    ),
    (
        "Raleigh",
        &[
            ("Durham", 29.0, "40"),
            ("Wilmington", 129.0, "40"),
            ("Richmond", 171.0, "95"),
        ],
    ),
    (
        "Greensboro",
        &[
            ("Charlotte", 92.0, "85"),
            ("Durham", 54.0, "40"),
            ("Ashville", 173.0, "40"),
        ],
    ),
    (
        "Ashville",
        &[
            ("Greensboro", 173.0, "40"),
            ("Charlotte", 130.0, "40"),
            ("Knoxville", 116.0, "40"),
            ("Atlanta", 208.0, "85"),
        ],
    ),
    (
        "Charlotte",
        &[
            ("Atlanta", 245.0, "85"),
            ("Ashville", 130.0, "40"),
            ("Greensboro", 92.0, "85"),
        ],
    ),
    (
        "Jacksonville",
        &[
            ("Atlanta", 346.0, "75"),
            ("Tallahassee", 164.0, "10"),
            ("Daytona Beach", 86.0, "95"),
        ],
    ),
    (
        "Daytona Beach",
        &[
            ("Orlando", 56.0, "4"),
            ("Miami", 95.0, "268"),
            ("Jacksonville", 86.0, "95"),
        ],
    ),
    ("Orlando", &[("Tampa", 94.0, "4"), ("Daytona Beach", 56.0, "4")]),
    (
        "Tampa",
        &[
            ("Miami", 281.0, "75"),
            ("Orlando", 94.0, "4"),
            ("Atlanta", 456.0, "75"),
            ("Tallahassee", 243.0, "98"),
        ],
    ),
    (
        "Atlanta",
        &[
            ("Charlotte", 245.0, "85"),
            ("Ashville", 208.0, "85"),
            ("Chattanooga", 118.0, "75"),
            ("Macon", 83.0, "75"),
            ("Tampa", 456.0, "75"),
            ("Jacksonville", 346.0, "75"),
            ("Tallahassee", 273.0, "27"),
        ],
    ),
    (
        "Chattanooga",
        &[
            ("Atlanta", 118.0, "75"),
            ("Knoxville", 112.0, "75"),
            ("Nashville", 134.0, "24"),
            ("Birmingham", 148.0, "59"),
        ],
    ),
    (
        "Knoxville",
        &[
            ("Chattanooga", 112.0, "75"),
            ("Lexington", 172.0, "75"),
            ("Nashville", 180.0, "40"),
            ("Ashville", 116.0, "40"),
        ],
    ),
    (
        "Nashville",
        &[
            ("Knoxville", 180.0, "40"),
            ("Chattanooga", 134.0, "24"),
            ("Birmingham", 191.0, "65"),
            ("Memphis", 212.0, "40"),
            ("Louisville", 176.0, "65"),
        ],
    ),
    (
        "Louisville",
        &[
            ("Nashville", 176.0, "65"),
            ("Cincinnati", 100.0, "71"),
            ("Indianapolis", 114.0, "65"),
            ("St. Louis", 260.0, "64"),
            ("Lexington", 78.0, "64"),
        ],
    ),
    (
        "Cincinnati",
        &[
            ("Louisville", 100.0, "71"),
            ("Indianapolis", 112.0, "74"),
            ("Columbus", 99.0, "71"),
        ],
    ),
    (
        "Columbus",
        &[
            ("Cincinnati", 99.0, "71"),
            ("Indianapolis", 175.0, "70"),
            ("Cleveland", 143.0, "71"),
        ],
    ),
    (
        "Indianapolis",
        &[
            ("Columbus", 175.0, "70"),
            ("Cincinnati", 112.0, "74"),
            ("Louisville", 114.0, "65"),
            ("Chicago", 179.0, "65"),
        ],
    ),
    (
        "Chicago",
        &[
            ("Indianapolis", 179.0, "65"),
            ("Columbus", 143.0, "71"),
            ("St. Louis", 291.0, "55"),
            ("Detroit", 281.0, "94"),
        ],
    ),
    (
        "St. Louis",
        &[
            ("Indianapolis", 261.0, "65"),
            ("Louisville", 260.0, "64"),
            ("Chicago", 291.0, "55"),
            ("Kansas City", 239.0, "70"),
        ],
    ),
    (
        "Detroit",
        &[
            ("Chicago", 281.0, "94"),
            ("Cleveland", 170.0, "71"),
            ("Toledo", 52.0, "75"),
        ],
    ),
    ("Cleveland", &[("Detroit", 170.0, "71"), ("Columbus", 143.0, "71")]),
];

/// The built-in atlas as builder input, in declaration order
pub fn east_coast() -> Adjacency {
    EAST_COAST
        .iter()
        .map(|(city, roads)| {
            (
                city.to_string(),
                roads
                    .iter()
                    .map(|(to, miles, interstate)| Link::new(*to, *miles, *interstate))
                    .collect(),
            )
        })
        .collect()
}

pub fn east_coast_graph() -> Graph {
    Graph::build(&east_coast())
}
