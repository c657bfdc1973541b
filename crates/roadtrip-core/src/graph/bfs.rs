use std::collections::{HashSet, VecDeque};

use crate::graph::types::{NoRoute, NoRouteReason, Path};
use crate::graph::GraphProvider;

fn no_route(from: &str, to: &str, reason: NoRouteReason) -> NoRoute {
    NoRoute {
        from: from.to_string(),
        to: to.to_string(),
        reason,
    }
}

/// Expand the frontier level by level until `goal` is generated.
///
/// Each frontier entry is the full path to its last city. A city is expanded
/// at most once, which bounds the search on cyclic maps.
fn bfs_search(provider: &dyn GraphProvider, start: &str, goal: &str) -> Option<Vec<String>> {
    let mut frontier: VecDeque<Vec<String>> = VecDeque::new();
    let mut explored: HashSet<String> = HashSet::new();

    frontier.push_back(vec![start.to_string()]);

    while let Some(path) = frontier.pop_front() {
        let Some(current) = path.last() else {
            continue;
        };

        if !explored.insert(current.clone()) {
            continue;
        }

        for neighbor in provider.neighbors(current) {
            if explored.contains(&neighbor) {
                continue;
            }

            let mut next = Vec::with_capacity(path.len() + 1);
            next.extend(path.iter().cloned());
            next.push(neighbor);

            if next.last().is_some_and(|city| city == goal) {
                tracing::trace!(expanded = explored.len(), "goal_reached");
                return Some(next);
            }
            frontier.push_back(next);
        }
    }

    tracing::trace!(expanded = explored.len(), "frontier_exhausted");
    None
}

/// Find a minimum-hop route between two cities, explaining failures.
///
/// Ties between equal-hop routes go to the route discovered first in
/// neighbor iteration order. Road distances play no part in the choice.
#[tracing::instrument(skip_all, fields(from = %start, to = %goal))]
pub fn find_route(
    provider: &dyn GraphProvider,
    start: &str,
    goal: &str,
) -> Result<Path, NoRoute> {
    if !provider.contains(start) {
        return Err(no_route(start, goal, NoRouteReason::UnknownStart));
    }
    if !provider.contains(goal) {
        return Err(no_route(start, goal, NoRouteReason::UnknownDestination));
    }

    if start == goal {
        return Ok(Path::new(vec![start.to_string()]));
    }

    match bfs_search(provider, start, goal) {
        Some(nodes) => {
            tracing::debug!(hops = nodes.len() - 1, "route_found");
            Ok(Path::new(nodes))
        }
        None => Err(no_route(start, goal, NoRouteReason::Unreachable)),
    }
}

/// Find a minimum-hop route, or `None` when either city is unknown or the
/// two are not connected.
pub fn find_path(provider: &dyn GraphProvider, start: &str, goal: &str) -> Option<Path> {
    find_route(provider, start, goal).ok()
}
