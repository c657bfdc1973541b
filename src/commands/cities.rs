//! Cities command: list the cities on the map

use roadtrip_core::error::Result;
use roadtrip_core::format::escape_record_value;
use roadtrip_core::graph::Graph;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Execute the cities command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let graph = ctx.load_graph()?;

    match ctx.cli.format {
        OutputFormat::Human => output_human(&graph, ctx.cli.quiet),
        OutputFormat::Json => output_json(&graph)?,
        OutputFormat::Records => output_records(&graph),
    }
    Ok(())
}

fn output_human(graph: &Graph, quiet: bool) {
    println!("{}", graph);
    if !quiet {
        println!("{} cities, {} roads", graph.len(), graph.road_count());
    }
}

fn output_json(graph: &Graph) -> Result<()> {
    let cities: Vec<serde_json::Value> = graph
        .nodes()
        .map(|node| {
            let roads: Vec<serde_json::Value> = node
                .neighbors()
                .map(|(to, edge)| {
                    serde_json::json!({
                        "to": to,
                        "miles": edge.distance,
                        "interstate": edge.label,
                    })
                })
                .collect();
            serde_json::json!({ "name": node.name(), "roads": roads })
        })
        .collect();

    let output = serde_json::json!({
        "count": graph.len(),
        "roads": graph.road_count(),
        "cities": cities,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(graph: &Graph) {
    println!(
        "H roadtrip=1 records=1 mode=cities count={} roads={}",
        graph.len(),
        graph.road_count()
    );
    for node in graph.nodes() {
        println!("C {} degree={}", escape_record_value(node.name()), node.degree());
    }
}
