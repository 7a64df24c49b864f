//! Per-field derivations for a trip summary.
//!
//! All of these read leg 0 of the primary route.

use crate::directions::{DirectionsResponse, LatLng};
use crate::route::RouteError;

/// Kilometres per mile used for display distances.
const KM_PER_MILE: f64 = 1.609;

/// Miles per metre used for the average speed.
const MILES_PER_METRE: f64 = 0.0006213712;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Steps in leg 0.
pub fn count_waypoints(response: &DirectionsResponse) -> Result<usize, RouteError> {
    Ok(response.steps(0)?.len())
}

/// Distance in miles.
///
/// Metric responses are converted to `"{miles:.1} mi"`; imperial text is
/// already in miles and passes through unchanged.
pub fn distance_travelled(response: &DirectionsResponse) -> Result<String, RouteError> {
    let leg = response.leg(0)?;
    if response.distance_unit_text()?.contains("km") {
        let miles = leg.distance.value as f64 / 1000.0 / KM_PER_MILE;
        Ok(format!("{miles:.1} mi"))
    } else {
        Ok(leg.distance.text.clone())
    }
}

/// Upstream duration text, e.g. "5 hours 50 mins".
pub fn total_time(response: &DirectionsResponse) -> Result<String, RouteError> {
    Ok(response.leg(0)?.duration.text.clone())
}

/// Start and end coordinates of leg 0.
pub fn lat_lng(response: &DirectionsResponse) -> Result<(LatLng, LatLng), RouteError> {
    let leg = response.leg(0)?;
    Ok((leg.start_location, leg.end_location))
}

/// Average speed of leg 0 in mph; see [`average_mph`].
pub fn avg_speed(response: &DirectionsResponse) -> Result<Option<f64>, RouteError> {
    let leg = response.leg(0)?;
    Ok(average_mph(leg.distance.value, leg.duration.value))
}

/// Average speed in mph, rounded to one decimal place.
///
/// Distance in miles and time in hours are each rounded to one decimal
/// *before* dividing, so the result can differ from rounding the exact
/// quotient. Existing consumers depend on these values. Trips whose
/// duration rounds to 0.0 hours (under three minutes) have no speed.
pub fn average_mph(distance_m: u64, duration_s: u64) -> Option<f64> {
    let miles = round_to_tenth(distance_m as f64 * MILES_PER_METRE);
    let hours = round_to_tenth(duration_s as f64 / SECONDS_PER_HOUR);
    if hours == 0.0 {
        return None;
    }
    Some(round_to_tenth(miles / hours))
}

/// Distinct travel modes of leg 0 in first-seen order, lower-cased.
///
/// Ferry manoeuvres ("ferry", "ferry-train") are listed as modes of their
/// own, since the upstream reports the crossing itself as driving.
pub fn modes_of_transportation(response: &DirectionsResponse) -> Result<Vec<String>, RouteError> {
    let mut modes = Vec::new();

    for step in response.steps(0)? {
        push_unique(&mut modes, step.travel_mode.to_lowercase());

        if let Some(maneuver) = &step.maneuver {
            let maneuver = maneuver.to_lowercase();
            if maneuver.contains("ferry") {
                push_unique(&mut modes, maneuver);
            }
        }
    }

    Ok(modes)
}

fn push_unique(modes: &mut Vec<String>, mode: String) {
    if !modes.contains(&mode) {
        modes.push(mode);
    }
}

/// Round half-to-even on the exact binary value, as `{:.1}` formats it.
fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
