//! Directions API response DTOs.
//!
//! These types map directly to the Google Directions JSON response. Fields
//! the API omits for some travel modes (traffic, transit times, fares) are
//! `Option`s; lists default to empty so error payloads still deserialize.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level directions response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectionsResponse {
    /// Geocoding result for origin, each waypoint, and destination, in order.
    #[serde(default)]
    pub geocoded_waypoints: Vec<GeocodedWaypoint>,

    /// Candidate routes; only the first is ever used.
    #[serde(default)]
    pub routes: Vec<Route>,

    /// Overall status, e.g. "OK", "ZERO_RESULTS", "NOT_FOUND".
    #[serde(default)]
    pub status: String,

    /// Human-readable reason when the request was rejected.
    pub error_message: Option<String>,
}

/// Geocoding outcome for one location in the request.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodedWaypoint {
    /// "OK" or "ZERO_RESULTS".
    pub geocoder_status: String,

    pub place_id: Option<String>,

    #[serde(default)]
    pub types: Vec<String>,
}

/// A single route.
#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    /// Short description, usually the main road.
    #[serde(default)]
    pub summary: String,

    /// One leg per origin/waypoint/destination hop.
    #[serde(default)]
    pub legs: Vec<Leg>,

    /// Total fare; only present for transit routes.
    pub fare: Option<Fare>,

    #[serde(default)]
    pub warnings: Vec<String>,
}

/// One origin-to-destination segment of a route.
#[derive(Debug, Clone, Deserialize)]
pub struct Leg {
    /// Distance in metres, with localised text ("459 km", "10.0 mi").
    pub distance: TextValue,

    /// Duration in seconds, with text ("49 mins").
    pub duration: TextValue,

    /// Only present when a departure time was requested for driving.
    pub duration_in_traffic: Option<TextValue>,

    /// Only present for transit.
    pub arrival_time: Option<TimeValue>,

    /// Only present for transit.
    pub departure_time: Option<TimeValue>,

    pub start_location: LatLng,

    pub end_location: LatLng,

    #[serde(default)]
    pub start_address: String,

    #[serde(default)]
    pub end_address: String,

    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One instruction within a leg.
#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    /// Upper-case mode, e.g. "DRIVING", "WALKING", "TRANSIT".
    #[serde(default)]
    pub travel_mode: String,

    /// Manoeuvre hint, e.g. "turn-left", "ferry", "ferry-train".
    pub maneuver: Option<String>,

    #[serde(default)]
    pub distance: TextValue,

    #[serde(default)]
    pub duration: TextValue,

    /// May contain HTML markup.
    pub html_instructions: Option<String>,

    pub transit_details: Option<TransitDetails>,

    /// Sub-steps; transit responses nest walking directions here.
    pub steps: Option<Vec<Step>>,
}

/// A numeric value paired with its display text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TextValue {
    pub value: u64,
    pub text: String,
}

/// A point in time as returned for transit legs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeValue {
    /// Seconds since the Unix epoch.
    pub value: i64,

    /// Local time text, e.g. "3:45 PM".
    pub text: String,

    pub time_zone: Option<String>,
}

impl TimeValue {
    /// The instant as UTC, if representable.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.value, 0)
    }
}

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Fare for a transit route.
#[derive(Debug, Clone, Deserialize)]
pub struct Fare {
    pub currency: String,
    pub text: String,
    pub value: f64,
}

/// Transit-specific information for a step.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitDetails {
    pub line: Option<TransitLine>,
    pub headsign: Option<String>,
    pub num_stops: Option<u32>,
}

/// The transit line a step rides on.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitLine {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub vehicle: Option<Vehicle>,
}

/// Vehicle used on a transit line.
#[derive(Debug, Clone, Deserialize)]
pub struct Vehicle {
    /// Display name, e.g. "Bus", "Train".
    pub name: Option<String>,

    /// Vehicle type, e.g. "BUS", "HEAVY_RAIL".
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
