//! Trip summaries derived from a directions response.
//!
//! Fields are computed in dependency order: waypoints, distance, time,
//! coordinates, speed, modes, and finally the sentence that quotes them all.

mod derive;
mod sentence;

use serde::Serialize;

use crate::directions::{DirectionsResponse, LatLng, RouteQuery};
use crate::route::RouteError;

pub use derive::{
    average_mph, avg_speed, count_waypoints, distance_travelled, lat_lng,
    modes_of_transportation, total_time,
};
pub use sentence::{SentenceParts, summary_sentence};

/// Human-readable summary of the primary route's first leg.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    pub origin: String,
    pub destination: String,
    /// Steps in the first leg
    pub waypoints: usize,
    /// e.g. "285.3 mi"
    pub distance_travelled: String,
    /// e.g. "5 hours 48 mins"
    pub total_time: String,
    pub lat_lng: (LatLng, LatLng),
    /// mph; `null` when the trip rounds to zero hours
    pub avg_speed: Option<f64>,
    pub modes_of_transportation: Vec<String>,
    pub summary: String,
}

impl TripSummary {
    /// Summarise the response to `query`.
    pub fn build(query: &RouteQuery, response: &DirectionsResponse) -> Result<Self, RouteError> {
        let waypoints = count_waypoints(response)?;
        let distance_travelled = distance_travelled(response)?;
        let total_time = total_time(response)?;
        let lat_lng = lat_lng(response)?;
        let avg_speed = avg_speed(response)?;
        let modes_of_transportation = modes_of_transportation(response)?;

        let summary = summary_sentence(&SentenceParts {
            total_time: &total_time,
            distance_travelled: &distance_travelled,
            waypoints,
            avg_speed,
            modes: &modes_of_transportation,
            lat_lng,
        });

        Ok(Self {
            origin: query.origin.clone(),
            destination: query.destination.clone(),
            waypoints,
            distance_travelled,
            total_time,
            lat_lng,
            avg_speed,
            modes_of_transportation,
            summary,
        })
    }
}
