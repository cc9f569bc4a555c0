//! Core data types for the route optimizer.
//!
//! Locations double as graph nodes and map keys, so coordinates are stored
//! fixed-point: floats are converted once at the boundary and never hashed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scale between degrees and the microdegree fixed-point encoding.
const MICRODEGREES: f64 = 1_000_000.0;

/// A 2-D coordinate in fixed-point microdegrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    lat_micro: i64,
    lng_micro: i64,
}

impl Location {
    pub const fn new(lat_micro: i64, lng_micro: i64) -> Self {
        Self {
            lat_micro,
            lng_micro,
        }
    }

    pub fn from_degrees(lat: f64, lng: f64) -> Self {
        Self {
            lat_micro: (lat * MICRODEGREES).round() as i64,
            lng_micro: (lng * MICRODEGREES).round() as i64,
        }
    }

    pub fn lat_degrees(self) -> f64 {
        self.lat_micro as f64 / MICRODEGREES
    }

    pub fn lng_degrees(self) -> f64 {
        self.lng_micro as f64 / MICRODEGREES
    }

    /// L1 distance to another location, in coordinate units.
    pub fn manhattan_to(self, other: Location) -> f64 {
        ((self.lat_micro - other.lat_micro).abs() + (self.lng_micro - other.lng_micro).abs())
            as f64
    }
}

/// A required pickup-then-delivery movement between two locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub source: Location,
    pub destination: Location,
}

impl Job {
    /// Zips parallel source/destination sequences into jobs.
    ///
    /// The two sequences must have equal length; job `i` is the pair of the
    /// `i`-th entries.
    pub fn pair(
        sources: &[Location],
        destinations: &[Location],
    ) -> Result<Vec<Job>, RouteError> {
        if sources.len() != destinations.len() {
            return Err(RouteError::MismatchedJobs {
                sources: sources.len(),
                destinations: destinations.len(),
            });
        }

        Ok(sources
            .iter()
            .zip(destinations)
            .map(|(&source, &destination)| Job {
                source,
                destination,
            })
            .collect())
    }
}

/// Travel time in hours for each ordered pair of distinct locations.
pub type TravelTimes = HashMap<(Location, Location), f64>;

/// Distance for each ordered pair of distinct locations.
pub type DistanceMatrix = HashMap<(Location, Location), f64>;

/// Loading/unloading time in hours incurred when a location is visited.
pub type ServiceTimes = HashMap<Location, f64>;

/// Failures surfaced by route planning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The travel-time map has no entry for an edge the search traversed.
    #[error("missing travel time for ({from:?}, {to:?})")]
    MissingTravelTime { from: Location, to: Location },

    /// The supplied distance map has no entry for an edge the search traversed.
    #[error("missing distance for ({from:?}, {to:?})")]
    MissingDistance { from: Location, to: Location },

    /// Source and destination sequences differ in length.
    #[error("{sources} sources but {destinations} destinations")]
    MismatchedJobs { sources: usize, destinations: usize },

    /// Every branch from the start location is a dead end.
    #[error("no feasible route from the start location")]
    NoFeasibleRoute,
}
