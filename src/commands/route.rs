//! Route command: find and narrate the route between two cities

use std::time::Instant;

use roadtrip_core::directions::Directions;
use roadtrip_core::error::Result;
use roadtrip_core::format::escape_record_value;
use roadtrip_core::graph::{find_route, NoRoute, Path};
use roadtrip_core::trace_time;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Execute the route command
///
/// A missing route is reported on stdout and is not an error.
pub fn execute(ctx: &CommandContext, from: &str, to: &str) -> Result<()> {
    let graph = ctx.load_graph()?;

    let phase = Instant::now();
    let outcome = find_route(&graph, from, to);
    trace_time!(phase, "find_route");

    match outcome {
        Ok(path) => {
            let directions = Directions::from_path(&graph, &path)?;
            match ctx.cli.format {
                OutputFormat::Human => output_found_human(&directions),
                OutputFormat::Json => output_found_json(from, to, &path, &directions)?,
                OutputFormat::Records => output_found_records(from, to, &path, &directions),
            }
        }
        Err(miss) => {
            tracing::info!(from = %miss.from, to = %miss.to, reason = miss.reason.as_str(), "no_route");
            match ctx.cli.format {
                OutputFormat::Human => println!("{}", miss),
                OutputFormat::Json => output_missing_json(&miss)?,
                OutputFormat::Records => output_missing_records(&miss),
            }
        }
    }

    Ok(())
}

fn output_found_human(directions: &Directions) {
    for line in directions.narrate() {
        println!("{}", line);
    }
}

fn output_found_json(from: &str, to: &str, path: &Path, directions: &Directions) -> Result<()> {
    let output = serde_json::json!({
        "from": from,
        "to": to,
        "found": true,
        "hops": path.hop_count(),
        "total_distance": directions.total_distance(),
        "path": path,
        "legs": directions.legs,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_missing_json(miss: &NoRoute) -> Result<()> {
    let output = serde_json::json!({
        "from": miss.from,
        "to": miss.to,
        "found": false,
        "reason": miss.reason,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_found_records(from: &str, to: &str, path: &Path, directions: &Directions) {
    println!(
        "H roadtrip=1 records=1 mode=route from={} to={} found=true hops={} distance={}",
        escape_record_value(from),
        escape_record_value(to),
        path.hop_count(),
        directions.total_distance()
    );
    for (index, city) in path.nodes().iter().enumerate() {
        println!("N {} {}", index, escape_record_value(city));
    }
    for leg in &directions.legs {
        println!(
            "L {} {} miles={} interstate={}",
            escape_record_value(&leg.from),
            escape_record_value(&leg.to),
            leg.distance,
            escape_record_value(&leg.label)
        );
    }
}

fn output_missing_records(miss: &NoRoute) {
    println!(
        "H roadtrip=1 records=1 mode=route from={} to={} found=false reason={}",
        escape_record_value(&miss.from),
        escape_record_value(&miss.to),
        miss.reason.as_str()
    );
}
