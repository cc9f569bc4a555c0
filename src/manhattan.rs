//! Manhattan travel estimator (fallback when no routing service available).
//!
//! Uses L1 distance between coordinates to estimate both the distance and
//! the travel-time maps. Less accurate than a road-network service (ignores
//! roads) but always available and never fails.

use rayon::prelude::*;

use crate::model::Location;
use crate::traits::{EstimateError, TravelEstimator, TravelMatrices};

/// Average speed assumption for time estimation, in coordinate units per hour.
const DEFAULT_SPEED: f64 = 40.0;

/// Manhattan-distance travel estimator.
///
/// Estimates travel time by dividing the L1 distance by an assumed speed.
/// Useful as a fallback when no routing service is reachable.
#[derive(Debug, Clone)]
pub struct ManhattanEstimator {
    /// Assumed average speed in coordinate units per hour.
    pub speed: f64,
}

impl Default for ManhattanEstimator {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
        }
    }
}

impl ManhattanEstimator {
    pub fn new(speed: f64) -> Self {
        Self { speed }
    }

    /// Convert a distance in coordinate units to travel time in hours.
    fn distance_to_hours(&self, distance: f64) -> f64 {
        distance / self.speed
    }
}

impl TravelEstimator for ManhattanEstimator {
    fn matrices_for(&self, locations: &[Location]) -> Result<TravelMatrices, EstimateError> {
        let pairs: Vec<((Location, Location), f64)> = locations
            .par_iter()
            .flat_map_iter(|&from| {
                locations
                    .iter()
                    .filter(move |&&to| to != from)
                    .map(move |&to| ((from, to), from.manhattan_to(to)))
            })
            .collect();

        let mut matrices = TravelMatrices::default();
        for (pair, distance) in pairs {
            matrices.travel_times.insert(pair, self.distance_to_hours(distance));
            matrices.distances.insert(pair, distance);
        }

        Ok(matrices)
    }
}
