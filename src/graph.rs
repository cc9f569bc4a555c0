//! Adjacency graph over job endpoints.
//!
//! The default graph is over-connected on purpose: pickup-before-delivery
//! ordering is enforced by the completion count during the search, not by
//! the edges here.

use std::collections::HashMap;

use crate::model::{Job, Location};

/// Legal one-step transitions between locations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyGraph {
    edges: HashMap<Location, Vec<Location>>,
}

impl AdjacencyGraph {
    /// Builds the default graph for a start location and a job list.
    ///
    /// Edges: start to every job source (only when the start is not itself a
    /// job endpoint); each source to its own destination and to every other
    /// job's source; each destination to every other job's source and
    /// destination. A destination gets no edge back to its own job's
    /// endpoints.
    pub fn build(start: Location, jobs: &[Job]) -> Self {
        let mut graph = Self::default();

        let start_is_endpoint = jobs
            .iter()
            .any(|job| job.source == start || job.destination == start);
        if !start_is_endpoint {
            for job in jobs {
                graph.add_edge(start, job.source);
            }
        }

        for (i, job) in jobs.iter().enumerate() {
            graph.add_edge(job.source, job.destination);
            for (j, other) in jobs.iter().enumerate() {
                if i != j {
                    graph.add_edge(job.source, other.source);
                }
            }
        }

        for (i, job) in jobs.iter().enumerate() {
            for (j, other) in jobs.iter().enumerate() {
                if i != j {
                    graph.add_edge(job.destination, other.source);
                }
            }
            for (j, other) in jobs.iter().enumerate() {
                if i != j {
                    graph.add_edge(job.destination, other.destination);
                }
            }
        }

        graph
    }

    /// Builds a graph from caller-supplied neighbor lists.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (Location, Vec<Location>)>,
    {
        let mut graph = Self::default();
        for (from, neighbors) in edges {
            for to in neighbors {
                graph.add_edge(from, to);
            }
        }
        graph
    }

    /// Adds a directed edge. Self-edges and repeats are dropped; neither can
    /// change a search outcome.
    pub fn add_edge(&mut self, from: Location, to: Location) {
        if from == to {
            return;
        }
        let neighbors = self.edges.entry(from).or_default();
        if !neighbors.contains(&to) {
            neighbors.push(to);
        }
    }

    /// Neighbors reachable from `location` in one step, in insertion order.
    pub fn neighbors(&self, location: Location) -> &[Location] {
        self.edges
            .get(&location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of locations with at least one outgoing edge.
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }
}
