//! Askama templates for the web frontend.

use askama::Template;

use crate::summary::TripSummary;

/// Home page with the origin/destination form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// One trip summary card (AJAX fragment, no base.html).
#[derive(Template)]
#[template(path = "trip_card.html")]
pub struct TripCardTemplate {
    pub origin: String,
    pub destination: String,
    pub distance_travelled: String,
    pub waypoints: usize,
    pub avg_speed: String,
    pub total_time: String,
    pub summary: String,
    pub modes: Vec<String>,
}

impl TripCardTemplate {
    pub fn from_trip(trip: &TripSummary) -> Self {
        Self {
            origin: trip.origin.clone(),
            destination: trip.destination.clone(),
            distance_travelled: trip.distance_travelled.clone(),
            waypoints: trip.waypoints,
            avg_speed: trip
                .avg_speed
                .map(|mph| format!("{mph:.1}"))
                .unwrap_or_else(|| "unknown".to_string()),
            total_time: trip.total_time.clone(),
            summary: trip.summary.clone(),
            modes: trip.modes_of_transportation.clone(),
        }
    }
}
