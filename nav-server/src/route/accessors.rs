//! Read-only lookups into a directions response.
//!
//! Everything reads the first route. Leg-indexed lookups fail with
//! [`RouteError`] when the route or leg does not exist; optional upstream
//! fields come back as `None`.

use serde::Serialize;

use crate::directions::{DirectionsResponse, Leg, Route, Step, TimeValue};

use super::error::{RouteError, WaypointError};

/// Travel mode reported for a trip, paired with its leg-0 duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TravelModeDuration {
    pub travel_mode: String,
    /// Seconds
    pub duration: u64,
}

/// Walking versus riding time on a transit trip, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransitPreferences {
    pub duration: u64,
    pub walking_duration: u64,
    pub transit_duration: u64,
}

const TRANSIT: &str = "TRANSIT";

impl DirectionsResponse {
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn has_route(&self) -> bool {
        self.route_count() > 0
    }

    /// The first route; the only one this service ever reads.
    pub fn primary_route(&self) -> Result<&Route, RouteError> {
        self.routes.first().ok_or(RouteError::NoRoute)
    }

    pub fn leg(&self, index: usize) -> Result<&Leg, RouteError> {
        let route = self.primary_route()?;
        route.legs.get(index).ok_or(RouteError::LegOutOfRange {
            index,
            legs: route.legs.len(),
        })
    }

    pub fn steps(&self, leg: usize) -> Result<&[Step], RouteError> {
        Ok(&self.leg(leg)?.steps)
    }

    /// Only transit legs carry an arrival time.
    pub fn arrival_time(&self, leg: usize) -> Result<Option<&TimeValue>, RouteError> {
        Ok(self.leg(leg)?.arrival_time.as_ref())
    }

    /// Only transit legs carry a departure time.
    pub fn departure_time(&self, leg: usize) -> Result<Option<&TimeValue>, RouteError> {
        Ok(self.leg(leg)?.departure_time.as_ref())
    }

    /// Leg duration in seconds.
    pub fn duration_value(&self, leg: usize) -> Result<u64, RouteError> {
        Ok(self.leg(leg)?.duration.value)
    }

    /// Leg duration in traffic, in seconds. Present only when a departure
    /// time was requested for a driving route.
    pub fn duration_in_traffic_value(&self, leg: usize) -> Result<Option<u64>, RouteError> {
        Ok(self.leg(leg)?.duration_in_traffic.as_ref().map(|d| d.value))
    }

    /// Unit of the first leg's distance text: "km", "mi", "m" or "ft".
    pub fn distance_unit_text(&self) -> Result<&str, RouteError> {
        let text = self.leg(0)?.distance.text.as_str();
        Ok(text.rsplit(' ').next().unwrap_or(text))
    }

    /// Number of geocoded locations (origin, waypoints, destination).
    ///
    /// The upstream only sets `error_message` here when transit was
    /// requested together with intermediate waypoints.
    pub fn waypoint_count_or_error(&self) -> Result<usize, WaypointError> {
        if self.error_message.is_some() {
            return Err(WaypointError::transit_with_waypoints());
        }
        Ok(self.geocoded_waypoints.len())
    }

    pub fn start_address(&self) -> Result<&str, RouteError> {
        Ok(&self.leg(0)?.start_address)
    }

    pub fn end_address(&self) -> Result<&str, RouteError> {
        Ok(&self.leg(0)?.end_address)
    }

    /// Name of the first transit vehicle ridden on leg 0, e.g. "Bus".
    pub fn transit_vehicle_name(&self) -> Option<&str> {
        self.steps(0).ok()?.iter().find_map(|step| {
            step.transit_details
                .as_ref()?
                .line
                .as_ref()?
                .vehicle
                .as_ref()?
                .name
                .as_deref()
        })
    }

    /// A fare implies transit; otherwise the first step's mode is reported.
    pub fn travel_mode_and_duration(&self) -> Result<TravelModeDuration, RouteError> {
        let route = self.primary_route()?;
        let duration = self.duration_value(0)?;

        let travel_mode = if route.fare.is_some() {
            TRANSIT.to_string()
        } else {
            self.steps(0)?
                .first()
                .ok_or(RouteError::NoSteps(0))?
                .travel_mode
                .clone()
        };

        Ok(TravelModeDuration {
            travel_mode,
            duration,
        })
    }

    /// Split leg 0 into walking and riding time.
    ///
    /// Transit responses nest turn-by-turn walking directions under a step,
    /// so a step with sub-steps counts as walking.
    pub fn transit_route_preferences(&self) -> Result<TransitPreferences, RouteError> {
        let leg = self.leg(0)?;
        let mut walking_duration = 0;
        let mut transit_duration = 0;

        for step in &leg.steps {
            if step.steps.is_some() {
                walking_duration += step.duration.value;
            }
            if step.transit_details.is_some() {
                transit_duration += step.duration.value;
            }
        }

        Ok(TransitPreferences {
            duration: leg.duration.value,
            walking_duration,
            transit_duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::route::fixtures::{from_json, leg, response, step, timed_step};

    fn transit_response() -> DirectionsResponse {
        let walk_in = json!({
            "travel_mode": "WALKING",
            "distance": {"text": "0.4 km", "value": 400},
            "duration": {"text": "5 mins", "value": 300},
            "steps": [
                {"travel_mode": "WALKING", "duration": {"text": "5 mins", "value": 300}}
            ]
        });
        let ride = json!({
            "travel_mode": "TRANSIT",
            "distance": {"text": "190 km", "value": 190000},
            "duration": {"text": "2 hours 40 mins", "value": 9600},
            "transit_details": {
                "line": {"name": "Pacific Surfliner", "vehicle": {"name": "Train", "type": "HEAVY_RAIL"}}
            }
        });
        let walk_out = json!({
            "travel_mode": "WALKING",
            "distance": {"text": "1.2 km", "value": 1200},
            "duration": {"text": "15 mins", "value": 900},
            "steps": []
        });

        let mut leg = leg(193_000, "193 km", 10_800, "3 hours", vec![walk_in, ride, walk_out]);
        leg["arrival_time"] = json!({"text": "3:45 PM", "value": 1_700_010_000, "time_zone": "America/Los_Angeles"});
        leg["departure_time"] = json!({"text": "12:45 PM", "value": 1_699_999_200, "time_zone": "America/Los_Angeles"});

        from_json(json!({
            "geocoded_waypoints": [{"geocoder_status": "OK"}, {"geocoder_status": "OK"}],
            "routes": [{
                "fare": {"currency": "USD", "text": "$17.00", "value": 17.0},
                "legs": [leg]
            }],
            "status": "OK"
        }))
    }

    #[test]
    fn counts_routes() {
        let driving = response(vec![leg(1000, "1.0 km", 60, "1 min", vec![step("DRIVING")])]);
        assert_eq!(driving.route_count(), 1);
        assert!(driving.has_route());

        let empty = from_json(json!({"routes": [], "status": "ZERO_RESULTS"}));
        assert_eq!(empty.route_count(), 0);
        assert!(!empty.has_route());
        assert_eq!(empty.leg(0).unwrap_err(), RouteError::NoRoute);
    }

    #[test]
    fn steps_by_leg() {
        let two_legs = response(vec![
            leg(1000, "1.0 km", 60, "1 min", vec![step("DRIVING"), step("DRIVING")]),
            leg(2000, "2.0 km", 120, "2 mins", vec![step("DRIVING")]),
        ]);

        assert_eq!(two_legs.steps(0).unwrap().len(), 2);
        assert_eq!(two_legs.steps(1).unwrap().len(), 1);
        assert_eq!(
            two_legs.steps(2).unwrap_err(),
            RouteError::LegOutOfRange { index: 2, legs: 2 }
        );
    }

    #[test]
    fn optional_times_are_none_when_absent() {
        let driving = response(vec![leg(1000, "1.0 km", 60, "1 min", vec![step("DRIVING")])]);

        assert_eq!(driving.arrival_time(0).unwrap(), None);
        assert_eq!(driving.departure_time(0).unwrap(), None);
        assert_eq!(driving.duration_in_traffic_value(0).unwrap(), None);
    }

    #[test]
    fn transit_times_are_read() {
        let transit = transit_response();

        assert_eq!(transit.arrival_time(0).unwrap().unwrap().value, 1_700_010_000);
        assert_eq!(transit.departure_time(0).unwrap().unwrap().text, "12:45 PM");
    }

    #[test]
    fn traffic_duration_is_read() {
        let mut driving = leg(16_093, "10.0 mi", 2160, "36 mins", vec![step("DRIVING")]);
        driving["duration_in_traffic"] = json!({"text": "40 mins", "value": 2400});
        let response = response(vec![driving]);

        assert_eq!(response.duration_value(0).unwrap(), 2160);
        assert_eq!(response.duration_in_traffic_value(0).unwrap(), Some(2400));
    }

    #[test]
    fn unit_text_is_the_suffix() {
        let metric = response(vec![leg(459_000, "459 km", 60, "1 min", vec![])]);
        let imperial = response(vec![leg(16_093, "10.0 mi", 60, "1 min", vec![])]);

        assert_eq!(metric.distance_unit_text().unwrap(), "km");
        assert_eq!(imperial.distance_unit_text().unwrap(), "mi");
    }

    #[test]
    fn waypoint_count() {
        let mut value = json!({
            "geocoded_waypoints": [
                {"geocoder_status": "OK"},
                {"geocoder_status": "OK"},
                {"geocoder_status": "OK"}
            ],
            "routes": [],
            "status": "OK"
        });
        assert_eq!(from_json(value.clone()).waypoint_count_or_error(), Ok(3));

        value["error_message"] = json!("Invalid request. Transit with waypoints.");
        let err = from_json(value).waypoint_count_or_error().unwrap_err();
        assert_eq!(err, WaypointError::transit_with_waypoints());
    }

    #[test]
    fn addresses() {
        let driving = response(vec![leg(1000, "1.0 km", 60, "1 min", vec![])]);
        assert_eq!(driving.start_address().unwrap(), "London, UK");
        assert_eq!(driving.end_address().unwrap(), "Paris, France");
    }

    #[test]
    fn vehicle_name_from_first_transit_step() {
        assert_eq!(transit_response().transit_vehicle_name(), Some("Train"));
    }

    #[test]
    fn vehicle_name_absent_without_transit() {
        let driving = response(vec![leg(1000, "1.0 km", 60, "1 min", vec![step("DRIVING")])]);
        assert_eq!(driving.transit_vehicle_name(), None);

        let empty = from_json(json!({"routes": []}));
        assert_eq!(empty.transit_vehicle_name(), None);
    }

    #[test]
    fn fare_implies_transit() {
        let mode = transit_response().travel_mode_and_duration().unwrap();
        assert_eq!(
            mode,
            TravelModeDuration {
                travel_mode: "TRANSIT".into(),
                duration: 10_800
            }
        );
    }

    #[test]
    fn first_step_mode_without_fare() {
        let walking = response(vec![leg(
            800,
            "0.8 km",
            600,
            "10 mins",
            vec![step("WALKING"), step("DRIVING")],
        )]);

        let mode = walking.travel_mode_and_duration().unwrap();
        assert_eq!(mode.travel_mode, "WALKING");
        assert_eq!(mode.duration, 600);

        let stepless = response(vec![leg(800, "0.8 km", 600, "10 mins", vec![])]);
        assert_eq!(
            stepless.travel_mode_and_duration().unwrap_err(),
            RouteError::NoSteps(0)
        );
    }

    #[test]
    fn transit_preferences_split_walking_and_riding() {
        let prefs = transit_response().transit_route_preferences().unwrap();
        assert_eq!(
            prefs,
            TransitPreferences {
                duration: 10_800,
                walking_duration: 1200,
                transit_duration: 9600,
            }
        );
    }

    #[test]
    fn plain_steps_count_as_neither() {
        let driving = response(vec![leg(
            1000,
            "1.0 km",
            600,
            "10 mins",
            vec![timed_step("DRIVING", 300), timed_step("DRIVING", 300)],
        )]);

        let prefs = driving.transit_route_preferences().unwrap();
        assert_eq!(prefs.walking_duration, 0);
        assert_eq!(prefs.transit_duration, 0);
        assert_eq!(prefs.duration, 600);
    }
}
