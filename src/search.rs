//! Recursive route search (baseline implementation).
//!
//! Depth-first search over the adjacency graph for the visiting order that
//! completes the most jobs within the work-hour budget, tie-broken by total
//! travel distance. The search accepts the first improvement over the
//! running job-count bound on each branch, so it is best-effort rather than
//! globally optimal.

use tracing::debug;

use crate::graph::AdjacencyGraph;
use crate::model::{DistanceMatrix, Job, Location, RouteError, ServiceTimes, TravelTimes};

/// Default work-hour budget.
pub const DEFAULT_MAX_HOURS: f64 = 10.0;

/// Optional inputs for [`plan_route`].
#[derive(Debug, Clone)]
pub struct PlanOptions<'a> {
    /// Maximum cumulative travel plus service hours for a valid route.
    /// A route whose total exactly equals the budget is rejected.
    pub max_hours: f64,
    /// Loading/unloading hours per location; missing entries count as zero.
    pub service_times: Option<&'a ServiceTimes>,
    /// Pairwise distances; when absent, the Manhattan distance between
    /// coordinates is used.
    pub distances: Option<&'a DistanceMatrix>,
    /// Precomputed adjacency graph. When absent, one is built from the jobs;
    /// when supplied, it is authoritative.
    pub graph: Option<&'a AdjacencyGraph>,
}

impl Default for PlanOptions<'_> {
    fn default() -> Self {
        Self {
            max_hours: DEFAULT_MAX_HOURS,
            service_times: None,
            distances: None,
            graph: None,
        }
    }
}

/// A feasible visiting order with its accumulated totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Visited locations in order, starting at the start location.
    pub path: Vec<Location>,
    /// Sum of pairwise distances along the path.
    pub distance: f64,
    /// Sum of travel hours along the path plus service hours at each stop.
    pub hours: f64,
    /// Jobs whose source precedes their destination within the path.
    pub jobs_completed: usize,
}

/// Finds the visiting order from `start` that completes the most jobs within
/// the hour budget, tie-broken by minimal travel distance.
///
/// `sources` and `destinations` are parallel sequences: job `i` is a pickup
/// at `sources[i]` followed by a delivery at `destinations[i]`. The
/// travel-time map must cover every pair of locations the search may
/// traverse; a missing entry fails the whole call.
///
/// Errors with [`RouteError::NoFeasibleRoute`] when every branch from the
/// start is a dead end.
pub fn plan_route(
    start: Location,
    sources: &[Location],
    destinations: &[Location],
    travel_times: &TravelTimes,
    options: PlanOptions<'_>,
) -> Result<Route, RouteError> {
    let jobs = Job::pair(sources, destinations)?;

    let built;
    let graph = match options.graph {
        Some(graph) => graph,
        None => {
            built = AdjacencyGraph::build(start, &jobs);
            &built
        }
    };

    debug!(
        jobs = jobs.len(),
        nodes = graph.node_count(),
        max_hours = options.max_hours,
        "planning route"
    );

    let searcher = Searcher {
        jobs: &jobs,
        travel_times,
        service_times: options.service_times,
        distances: options.distances,
        graph,
        max_hours: options.max_hours,
    };

    match searcher.explore(start, &[], 0.0, 0.0, 0)? {
        Some(route) => {
            debug!(
                jobs_completed = route.jobs_completed,
                stops = route.path.len(),
                hours = route.hours,
                "route found"
            );
            Ok(route)
        }
        None => Err(RouteError::NoFeasibleRoute),
    }
}

/// Read-only search inputs, shared by every recursive call.
struct Searcher<'a> {
    jobs: &'a [Job],
    travel_times: &'a TravelTimes,
    service_times: Option<&'a ServiceTimes>,
    distances: Option<&'a DistanceMatrix>,
    graph: &'a AdjacencyGraph,
    max_hours: f64,
}

impl Searcher<'_> {
    /// One recursive step: extend the path onto `current`, test the
    /// completion gates, then pick the best continuation among unvisited
    /// neighbors. `Ok(None)` means this branch is a dead end.
    fn explore(
        &self,
        current: Location,
        path: &[Location],
        mut distance: f64,
        mut hours: f64,
        mut best_jobs: usize,
    ) -> Result<Option<Route>, RouteError> {
        if let Some(&prev) = path.last() {
            distance += self.leg_distance(prev, current)?;
            hours += self.leg_hours(prev, current)?;
        }
        let mut path = path.to_vec();
        path.push(current);

        let jobs_completed = self.completed_jobs(&path);
        let within_budget = hours < self.max_hours;

        // Every job done inside the budget: stop without trying siblings.
        if jobs_completed == self.jobs.len() && within_budget {
            return Ok(Some(Route {
                path,
                distance,
                hours,
                jobs_completed,
            }));
        }

        // Heuristic cutoff: the first improvement over the running bound is
        // returned as-is instead of searching this branch for a shorter
        // route with the same job count.
        if jobs_completed > best_jobs && within_budget {
            return Ok(Some(Route {
                path,
                distance,
                hours,
                jobs_completed,
            }));
        }

        let mut best: Option<Route> = None;
        for &next in self.graph.neighbors(current) {
            if path.contains(&next) {
                continue;
            }

            let Some(candidate) = self.explore(next, &path, distance, hours, best_jobs)? else {
                continue;
            };

            let replace = match &best {
                None => true,
                Some(route) => {
                    (candidate.jobs_completed == best_jobs && candidate.distance < route.distance)
                        || candidate.jobs_completed > best_jobs
                }
            };
            if replace {
                best_jobs = candidate.jobs_completed;
                best = Some(candidate);
            }
        }

        Ok(best)
    }

    /// Jobs whose source appears before their destination within `path`.
    fn completed_jobs(&self, path: &[Location]) -> usize {
        self.jobs
            .iter()
            .filter(|job| {
                match (position(path, job.source), position(path, job.destination)) {
                    (Some(source), Some(destination)) => source < destination,
                    _ => false,
                }
            })
            .count()
    }

    fn leg_distance(&self, from: Location, to: Location) -> Result<f64, RouteError> {
        match self.distances {
            Some(distances) => distances
                .get(&(from, to))
                .copied()
                .ok_or(RouteError::MissingDistance { from, to }),
            None => Ok(from.manhattan_to(to)),
        }
    }

    fn leg_hours(&self, from: Location, to: Location) -> Result<f64, RouteError> {
        let travel = self
            .travel_times
            .get(&(from, to))
            .copied()
            .ok_or(RouteError::MissingTravelTime { from, to })?;
        let service = self
            .service_times
            .and_then(|services| services.get(&to))
            .copied()
            .unwrap_or(0.0);
        Ok(travel + service)
    }
}

fn position(path: &[Location], location: Location) -> Option<usize> {
    path.iter().position(|&visited| visited == location)
}
