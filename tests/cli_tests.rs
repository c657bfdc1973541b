//! Integration tests for the roadtrip CLI
//!
//! These tests run the roadtrip binary against the built-in atlas and
//! small map files.

mod support;

use predicates::prelude::*;
use support::{roadtrip, write_line_map};
use tempfile::tempdir;

// ============================================================================
// Route command, built-in atlas
// ============================================================================

#[test]
fn test_route_washington_to_richmond() {
    roadtrip()
        .args([
            "route",
            "--starting-city",
            "Washington",
            "--destination-city",
            "Richmond",
        ])
        .assert()
        .success()
        .stdout(
            "Starting at Washington\n\
             Drive 53 miles on Interstate 95 towards Fredericksburg, then\n\
             Drive 60 miles on Interstate 95 towards Richmond, then\n\
             You will arrive at your destination.\n",
        );
}

#[test]
fn test_route_accepts_underscore_flags() {
    roadtrip()
        .args([
            "route",
            "--starting_city",
            "Baltimore",
            "--destination_city",
            "Washington",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Drive 39 miles on Interstate 95 towards Washington, then",
        ));
}

#[test]
fn test_route_to_same_city() {
    roadtrip()
        .args(["route", "--from", "Atlanta", "--to", "Atlanta"])
        .assert()
        .success()
        .stdout("Starting at Atlanta\nYou will arrive at your destination.\n");
}

#[test]
fn test_route_unknown_city_exits_normally() {
    roadtrip()
        .args(["route", "--from", "Washington", "--to", "Boston"])
        .assert()
        .success()
        .stdout("No route found from Washington to Boston.\n");
}

#[test]
fn test_route_missing_argument_is_usage_error() {
    roadtrip()
        .args(["route", "--from", "Washington"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--destination-city"));
}

// ============================================================================
// Route command, map files
// ============================================================================

#[test]
fn test_route_over_map_file() {
    let dir = tempdir().unwrap();
    let map = write_line_map(dir.path());

    roadtrip()
        .arg("--map")
        .arg(&map)
        .args(["route", "--from", "A", "--to", "C"])
        .assert()
        .success()
        .stdout(
            "Starting at A\n\
             Drive 10 miles on Interstate I1 towards B, then\n\
             Drive 5 miles on Interstate I2 towards C, then\n\
             You will arrive at your destination.\n",
        );
}

#[test]
fn test_route_map_from_environment() {
    let dir = tempdir().unwrap();
    let map = write_line_map(dir.path());

    roadtrip()
        .env("ROADTRIP_MAP", &map)
        .args(["route", "--from", "C", "--to", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("towards A, then"));
}

#[test]
fn test_route_unreachable_city() {
    let dir = tempdir().unwrap();
    let map = write_line_map(dir.path());

    roadtrip()
        .arg("--map")
        .arg(&map)
        .args(["route", "--from", "A", "--to", "D"])
        .assert()
        .success()
        .stdout("No route found from A to D.\n");
}

#[test]
fn test_missing_map_file_is_data_error() {
    let dir = tempdir().unwrap();

    roadtrip()
        .arg("--map")
        .arg(dir.path().join("absent.toml"))
        .args(["route", "--from", "A", "--to", "B"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("map file not found"));
}

#[test]
fn test_malformed_map_file_is_data_error() {
    let dir = tempdir().unwrap();
    let map = dir.path().join("bad.toml");
    std::fs::write(&map, "[[city]]\nroads = 7\n").unwrap();

    roadtrip()
        .arg("--map")
        .arg(&map)
        .arg("cities")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid map"));
}

// ============================================================================
// Output formats
// ============================================================================

#[test]
fn test_route_json_output() {
    let dir = tempdir().unwrap();
    let map = write_line_map(dir.path());

    let output = roadtrip()
        .arg("--map")
        .arg(&map)
        .args(["--format", "json", "route", "--from", "A", "--to", "C"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], true);
    assert_eq!(json["hops"], 2);
    assert_eq!(json["total_distance"], 15.0);
    assert_eq!(json["path"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(json["legs"][1]["label"], "I2");
}

#[test]
fn test_route_json_distinguishes_reasons() {
    let dir = tempdir().unwrap();
    let map = write_line_map(dir.path());

    for (to, reason) in [("D", "unreachable"), ("Z", "unknown_destination")] {
        let output = roadtrip()
            .arg("--map")
            .arg(&map)
            .args(["--format", "json", "route", "--from", "A", "--to", to])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["found"], false);
        assert_eq!(json["reason"], reason);
    }
}

#[test]
fn test_route_records_output() {
    roadtrip()
        .args([
            "--format",
            "records",
            "route",
            "--from",
            "Detroit",
            "--to",
            "St. Louis",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H roadtrip=1 records=1 mode=route from=Detroit to=\"St. Louis\" found=true hops=2",
        ))
        .stdout(predicate::str::contains("N 1 Chicago"))
        .stdout(predicate::str::contains(
            "L Chicago \"St. Louis\" miles=291 interstate=55",
        ));
}

#[test]
fn test_json_usage_error_envelope() {
    let output = roadtrip()
        .args(["--format", "json", "route", "--from", "A"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
    assert_eq!(json["error"]["code"], 2);
}

#[test]
fn test_json_data_error_envelope() {
    let dir = tempdir().unwrap();

    let output = roadtrip()
        .arg("--map")
        .arg(dir.path().join("absent.toml"))
        .args(["--format", "json", "cities"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "map_not_found");
}

// ============================================================================
// Cities command
// ============================================================================

#[test]
fn test_cities_lists_map() {
    let dir = tempdir().unwrap();
    let map = write_line_map(dir.path());

    roadtrip()
        .arg("--map")
        .arg(&map)
        .arg("cities")
        .assert()
        .success()
        .stdout("Map with cities: A, B, C, D\n4 cities, 2 roads\n");
}

#[test]
fn test_cities_quiet_omits_summary() {
    roadtrip()
        .args(["--quiet", "cities"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Map with cities: Baltimore, Washington, Philadelphia"))
        .stdout(predicate::str::contains("roads").not());
}

#[test]
fn test_cities_json_mirrors_roads() {
    let dir = tempdir().unwrap();
    let map = write_line_map(dir.path());

    let output = roadtrip()
        .arg("--map")
        .arg(&map)
        .args(["cities", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 4);
    assert_eq!(json["cities"][2]["name"], "C");
    assert_eq!(json["cities"][2]["roads"][0]["to"], "B");
    assert_eq!(json["cities"][2]["roads"][0]["miles"], 5.0);
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    roadtrip()
        .args(["--log-level", "debug", "route", "--from", "Washington", "--to", "Richmond"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("route_found"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    roadtrip()
        .args(["route", "--from", "Washington", "--to", "Richmond"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_log_json_emits_json_lines() {
    let output = roadtrip()
        .args(["--verbose", "--log-json", "cities"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().expect("expected log output");
    let line: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(line.get("level").is_some());
}
