//! Hand-built directions payloads for unit tests.

use serde_json::{Value, json};

use crate::directions::DirectionsResponse;

pub(crate) const START: (f64, f64) = (51.5072178, -0.1275862);
pub(crate) const END: (f64, f64) = (48.856614, 2.3522219);

/// A one-minute, one-kilometre step.
pub(crate) fn step(travel_mode: &str) -> Value {
    json!({
        "travel_mode": travel_mode,
        "distance": {"text": "1 km", "value": 1000},
        "duration": {"text": "1 min", "value": 60}
    })
}

pub(crate) fn maneuver_step(travel_mode: &str, maneuver: &str) -> Value {
    let mut step = step(travel_mode);
    step["maneuver"] = json!(maneuver);
    step
}

pub(crate) fn timed_step(travel_mode: &str, seconds: u64) -> Value {
    let mut step = step(travel_mode);
    step["duration"] = json!({"text": "", "value": seconds});
    step
}

pub(crate) fn leg(
    distance_m: u64,
    distance_text: &str,
    duration_s: u64,
    duration_text: &str,
    steps: Vec<Value>,
) -> Value {
    json!({
        "distance": {"text": distance_text, "value": distance_m},
        "duration": {"text": duration_text, "value": duration_s},
        "start_location": {"lat": START.0, "lng": START.1},
        "end_location": {"lat": END.0, "lng": END.1},
        "start_address": "London, UK",
        "end_address": "Paris, France",
        "steps": steps
    })
}

/// A successful response with a single route made of `legs`.
pub(crate) fn response(legs: Vec<Value>) -> DirectionsResponse {
    from_json(json!({
        "geocoded_waypoints": [
            {"geocoder_status": "OK"},
            {"geocoder_status": "OK"}
        ],
        "routes": [{"summary": "A1", "legs": legs}],
        "status": "OK"
    }))
}

pub(crate) fn from_json(value: Value) -> DirectionsResponse {
    serde_json::from_value(value).expect("fixture should deserialize")
}
