//! Maps upstream geocoding statuses to user-facing errors.
//!
//! The directions API reports unresolvable places inside a normal response:
//! each location gets a `geocoder_status`, and the route as a whole gets a
//! `status`. Only one message is ever produced; the first matching rule wins.

use crate::directions::{DirectionsResponse, RouteQuery};

const OK: &str = "OK";
const ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Why a query cannot be summarised, worded for the end user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeocodeFailure {
    /// Both places were found but nothing connects them
    #[error("We are unable to find a driving route between {origin} and {destination}.")]
    NoRoute { origin: String, destination: String },

    #[error("We are unable to find the origin and destination.")]
    OriginAndDestination,

    #[error("We are unable to find that origin.")]
    Origin,

    #[error("We are unable to find that destination.")]
    Destination,
}

/// Geocoding outcome for one end of the trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlaceStatus {
    Found,
    NotFound,
    /// Missing or some other status; neither confirms nor rules out the place.
    Unknown,
}

impl PlaceStatus {
    fn from_status(status: Option<&str>) -> Self {
        match status {
            Some(OK) => PlaceStatus::Found,
            Some(ZERO_RESULTS) => PlaceStatus::NotFound,
            _ => PlaceStatus::Unknown,
        }
    }
}

/// Check whether the response resolved both ends of the query.
///
/// The origin is the first geocoded location and the destination the last;
/// intermediate waypoints are not inspected.
pub fn check_geocoding(
    query: &RouteQuery,
    response: &DirectionsResponse,
) -> Result<(), GeocodeFailure> {
    let statuses = &response.geocoded_waypoints;
    let origin = PlaceStatus::from_status(statuses.first().map(|w| w.geocoder_status.as_str()));
    let destination = PlaceStatus::from_status(
        statuses
            .get(1..)
            .and_then(|rest| rest.last())
            .map(|w| w.geocoder_status.as_str()),
    );

    match (origin, destination) {
        (PlaceStatus::Found, PlaceStatus::Found) if response.status == ZERO_RESULTS => {
            Err(GeocodeFailure::NoRoute {
                origin: query.origin.clone(),
                destination: query.destination.clone(),
            })
        }
        (PlaceStatus::NotFound, PlaceStatus::NotFound) => Err(GeocodeFailure::OriginAndDestination),
        (PlaceStatus::NotFound, _) => Err(GeocodeFailure::Origin),
        (_, PlaceStatus::NotFound) => Err(GeocodeFailure::Destination),
        _ => Ok(()),
    }
}
