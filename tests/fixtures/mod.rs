//! Shared helpers for route planning tests.

use route_optimizer::model::{Location, TravelTimes};

/// Every distinct location a problem can visit: the start plus all job
/// endpoints, first occurrence order.
#[allow(dead_code)]
pub fn nodes(start: Location, sources: &[Location], destinations: &[Location]) -> Vec<Location> {
    let mut nodes = vec![start];
    for &location in sources.iter().chain(destinations) {
        if !nodes.contains(&location) {
            nodes.push(location);
        }
    }
    nodes
}

/// Travel-time map with the same duration for every ordered pair of
/// distinct nodes.
#[allow(dead_code)]
pub fn uniform_travel_times(nodes: &[Location], hours: f64) -> TravelTimes {
    let mut travel_times = TravelTimes::new();
    for &from in nodes {
        for &to in nodes {
            if from != to {
                travel_times.insert((from, to), hours);
            }
        }
    }
    travel_times
}
